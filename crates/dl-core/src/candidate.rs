//! Reconstructed lepton candidates.

use serde::{Deserialize, Serialize};

use crate::fourvec::FourMomentum;

/// Electron mass in GeV.
pub const ELECTRON_MASS: f64 = 0.000_510_999;

/// Muon mass in GeV.
pub const MUON_MASS: f64 = 0.105_658_375;

/// A reconstructed lepton candidate in collider coordinates.
///
/// Candidates are read-only for the duration of an event; the analyzer only
/// ever inspects them and fills histograms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Transverse momentum (GeV).
    pub pt: f64,
    /// Pseudorapidity.
    pub eta: f64,
    /// Azimuthal angle (radians).
    pub phi: f64,
    /// Candidate mass (GeV). Defaults to 0 when absent from the input record.
    #[serde(default)]
    pub mass: f64,
    /// Electric charge in units of e (±1 for leptons).
    pub charge: i32,
}

impl Candidate {
    /// Create a candidate from collider coordinates.
    pub fn new(pt: f64, eta: f64, phi: f64, mass: f64, charge: i32) -> Self {
        Self { pt, eta, phi, mass, charge }
    }

    /// The candidate's four-momentum.
    pub fn p4(&self) -> FourMomentum {
        FourMomentum::from_ptetaphim(self.pt, self.eta, self.phi, self.mass)
    }
}
