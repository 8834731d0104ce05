//! Kinematic selection for the dimuon mass pairing.

use dl_core::Candidate;

/// Per-muon kinematic cut for the mass pairing.
///
/// Both thresholds are strict: a muon exactly at `min_pt` or `max_abs_eta`
/// fails.
#[derive(Debug, Clone, Copy)]
pub struct PairCut {
    /// Minimum pt (exclusive).
    pub min_pt: f64,
    /// Maximum |eta| (exclusive).
    pub max_abs_eta: f64,
}

impl PairCut {
    /// Create a cut with the given thresholds.
    pub fn new(min_pt: f64, max_abs_eta: f64) -> Self {
        Self { min_pt, max_abs_eta }
    }

    /// Whether `candidate` passes the cut.
    pub fn passes(&self, candidate: &Candidate) -> bool {
        candidate.pt > self.min_pt && candidate.eta.abs() < self.max_abs_eta
    }
}

/// Whether two candidates carry opposite electric charge.
pub fn opposite_charge(a: &Candidate, b: &Candidate) -> bool {
    a.charge * b.charge < 0
}
