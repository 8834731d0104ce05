//! # dl-core
//!
//! Core types for the dilepton-spectrum analysis: lepton candidates,
//! four-momenta, event records, and the histogram accumulators they are
//! filled into.
//!
//! ## Example
//!
//! ```
//! use dl_core::{Candidate, Histogram1D};
//!
//! let mu = Candidate::new(42.0, 0.8, 1.2, dl_core::MUON_MASS, -1);
//! let mut h = Histogram1D::new("muonPt", "muon Pt", 100, 0.0, 200.0).unwrap();
//! h.fill(mu.pt);
//! assert_eq!(h.entries, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod book;
pub mod candidate;
pub mod error;
pub mod event;
pub mod fourvec;
pub mod histogram;

pub use book::HistogramBook;
pub use candidate::{Candidate, ELECTRON_MASS, MUON_MASS};
pub use error::{Error, Result};
pub use event::EventRecord;
pub use fourvec::FourMomentum;
pub use histogram::Histogram1D;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
