//! Event-loop analyzer: booking, per-event fills, job summary.

use serde::{Deserialize, Serialize};

use dl_core::{EventRecord, HistogramBook, Result};

use crate::config::AnalyzerConfig;
use crate::selection::{opposite_charge, PairCut};

/// Label of the dimuon invariant mass histogram.
pub const H_MUMU_MASS: &str = "mumuMass";
/// Label of the electron multiplicity histogram.
pub const H_ELE_MULT: &str = "eleMult";
/// Label of the muon multiplicity histogram.
pub const H_MUON_MULT: &str = "muonMult";
/// Label of the electron pt histogram.
pub const H_ELE_PT: &str = "elePt";
/// Label of the muon pt histogram.
pub const H_MUON_PT: &str = "muonPt";
/// Label of the electron eta histogram.
pub const H_ELE_ETA: &str = "eleEta";
/// Label of the muon eta histogram.
pub const H_MUON_ETA: &str = "muonEta";
/// Label of the electron phi histogram.
pub const H_ELE_PHI: &str = "elePhi";
/// Label of the muon phi histogram.
pub const H_MUON_PHI: &str = "muonPhi";

/// Counters reported at the end of a job.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JobSummary {
    /// Events processed.
    pub events: u64,
    /// Dimuon mass fills across the whole job.
    pub mass_fills: u64,
}

/// The dilepton analysis module.
///
/// Lifecycle mirrors the hosting framework's: [`begin_job`] once,
/// [`analyze`] once per event, [`end_job`] once. The histogram set is fixed
/// at `begin_job` and never grows afterwards.
///
/// [`begin_job`]: DileptonAnalyzer::begin_job
/// [`analyze`]: DileptonAnalyzer::analyze
/// [`end_job`]: DileptonAnalyzer::end_job
#[derive(Debug)]
pub struct DileptonAnalyzer {
    config: AnalyzerConfig,
    book: HistogramBook,
    events: u64,
    mass_fills: u64,
}

impl DileptonAnalyzer {
    /// Create an analyzer; histograms are not booked until [`begin_job`].
    ///
    /// [`begin_job`]: DileptonAnalyzer::begin_job
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config, book: HistogramBook::new(), events: 0, mass_fills: 0 }
    }

    /// Book the fixed histogram set and freeze the book.
    pub fn begin_job(&mut self) -> Result<()> {
        let book = &mut self.book;

        book.book(H_MUMU_MASS, "mass", 90, 30.0, 120.0)?;

        book.book(H_ELE_MULT, "electron multiplicity", 100, 0.0, 50.0)?;
        book.book(H_MUON_MULT, "muon multiplicity", 100, 0.0, 50.0)?;

        book.book(H_ELE_PT, "electron Pt", 100, 0.0, 200.0)?;
        book.book(H_MUON_PT, "muon Pt", 100, 0.0, 200.0)?;

        book.book(H_ELE_ETA, "electron Eta", 100, -5.0, 5.0)?;
        book.book(H_MUON_ETA, "muon Eta", 100, -5.0, 5.0)?;

        book.book(H_ELE_PHI, "electron Phi", 100, -3.5, 3.5)?;
        book.book(H_MUON_PHI, "muon Phi", 100, -3.5, 3.5)?;

        book.freeze();
        tracing::info!(histograms = book.len(), "histogram book ready");
        Ok(())
    }

    /// Process one event.
    ///
    /// Fills muon kinematics, the deduplicated opposite-charge dimuon mass,
    /// electron kinematics, and the two per-event multiplicities. A missing
    /// input collection is fatal.
    pub fn analyze(&mut self, event: &EventRecord) -> Result<()> {
        let electrons = event.collection(&self.config.electron_src)?;
        let muons = event.collection(&self.config.muon_src)?;

        let cut = PairCut::new(self.config.pair_min_pt, self.config.pair_max_abs_eta);

        for (i, muon1) in muons.iter().enumerate() {
            self.book.fill(H_MUON_PT, muon1.pt)?;
            self.book.fill(H_MUON_ETA, muon1.eta)?;
            self.book.fill(H_MUON_PHI, muon1.phi)?;

            if !cut.passes(muon1) {
                continue;
            }
            // Pairing only with later muons counts each unordered pair once.
            for muon2 in &muons[i + 1..] {
                if opposite_charge(muon1, muon2) && cut.passes(muon2) {
                    let mass = (muon1.p4() + muon2.p4()).invariant_mass();
                    self.book.fill(H_MUMU_MASS, mass)?;
                    self.mass_fills += 1;
                }
            }
        }

        for electron in electrons {
            self.book.fill(H_ELE_PT, electron.pt)?;
            self.book.fill(H_ELE_ETA, electron.eta)?;
            self.book.fill(H_ELE_PHI, electron.phi)?;
        }

        self.book.fill(H_ELE_MULT, electrons.len() as f64)?;
        self.book.fill(H_MUON_MULT, muons.len() as f64)?;

        self.events += 1;
        tracing::debug!(electrons = electrons.len(), muons = muons.len(), "event processed");
        Ok(())
    }

    /// Finish the job and report counters. Persistence is the caller's job.
    pub fn end_job(&self) -> JobSummary {
        tracing::info!(events = self.events, mass_fills = self.mass_fills, "job finished");
        JobSummary { events: self.events, mass_fills: self.mass_fills }
    }

    /// Read access to the filled histograms.
    pub fn histograms(&self) -> &HistogramBook {
        &self.book
    }
}
