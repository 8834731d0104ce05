//! # dl-analysis
//!
//! The dilepton analysis proper: books a fixed set of kinematic histograms,
//! then processes one event at a time, filling lepton kinematics,
//! multiplicities, and the invariant mass of opposite-charge muon pairs that
//! pass the selection.
//!
//! ## Example
//!
//! ```
//! use dl_analysis::{AnalyzerConfig, DileptonAnalyzer};
//! use dl_core::{Candidate, EventRecord, MUON_MASS};
//!
//! let mut analyzer = DileptonAnalyzer::new(AnalyzerConfig::default());
//! analyzer.begin_job().unwrap();
//!
//! let mut event = EventRecord::new();
//! event.insert("slimmedElectrons", vec![]);
//! event.insert("slimmedMuons", vec![
//!     Candidate::new(25.0, 1.0, 0.0, MUON_MASS, 1),
//!     Candidate::new(30.0, -1.5, 2.8, MUON_MASS, -1),
//! ]);
//! analyzer.analyze(&event).unwrap();
//!
//! let summary = analyzer.end_job();
//! assert_eq!(summary.mass_fills, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analyzer;
pub mod config;
pub mod selection;

pub use analyzer::{DileptonAnalyzer, JobSummary};
pub use config::AnalyzerConfig;
pub use selection::{opposite_charge, PairCut};
