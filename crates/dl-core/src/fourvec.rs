//! Cartesian four-momenta and invariant-mass arithmetic.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// A Cartesian four-momentum (px, py, pz, E).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FourMomentum {
    /// Momentum along x.
    pub px: f64,
    /// Momentum along y.
    pub py: f64,
    /// Momentum along z (beam axis).
    pub pz: f64,
    /// Energy.
    pub e: f64,
}

impl FourMomentum {
    /// Create a four-momentum from Cartesian components.
    pub fn new(px: f64, py: f64, pz: f64, e: f64) -> Self {
        Self { px, py, pz, e }
    }

    /// Build a four-momentum from collider coordinates (pt, eta, phi, mass).
    ///
    /// px = pt cos(phi), py = pt sin(phi), pz = pt sinh(eta),
    /// E = sqrt(|p|^2 + m^2).
    pub fn from_ptetaphim(pt: f64, eta: f64, phi: f64, mass: f64) -> Self {
        let px = pt * phi.cos();
        let py = pt * phi.sin();
        let pz = pt * eta.sinh();
        let e = (px * px + py * py + pz * pz + mass * mass).sqrt();
        Self { px, py, pz, e }
    }

    /// Transverse momentum.
    pub fn pt(&self) -> f64 {
        (self.px * self.px + self.py * self.py).sqrt()
    }

    /// Pseudorapidity. Returns 0 for a zero transverse+longitudinal momentum.
    pub fn eta(&self) -> f64 {
        let p = self.p();
        if p == 0.0 {
            return 0.0;
        }
        // eta = atanh(pz / |p|); clamp guards pz == |p| (straight down the beam).
        let ratio = (self.pz / p).clamp(-1.0 + f64::EPSILON, 1.0 - f64::EPSILON);
        ratio.atanh()
    }

    /// Azimuthal angle in (-pi, pi].
    pub fn phi(&self) -> f64 {
        self.py.atan2(self.px)
    }

    /// Magnitude of the three-momentum.
    pub fn p(&self) -> f64 {
        (self.px * self.px + self.py * self.py + self.pz * self.pz).sqrt()
    }

    /// Invariant mass, sqrt(max(0, E^2 - |p|^2)).
    ///
    /// The clamp absorbs the tiny negative m^2 that rounding can produce for
    /// massless candidates.
    pub fn invariant_mass(&self) -> f64 {
        let m2 = self.e * self.e - self.px * self.px - self.py * self.py - self.pz * self.pz;
        m2.max(0.0).sqrt()
    }
}

impl Add for FourMomentum {
    type Output = FourMomentum;

    fn add(self, rhs: FourMomentum) -> FourMomentum {
        FourMomentum {
            px: self.px + rhs.px,
            py: self.py + rhs.py,
            pz: self.pz + rhs.pz,
            e: self.e + rhs.e,
        }
    }
}

impl AddAssign for FourMomentum {
    fn add_assign(&mut self, rhs: FourMomentum) {
        self.px += rhs.px;
        self.py += rhs.py;
        self.pz += rhs.pz;
        self.e += rhs.e;
    }
}
