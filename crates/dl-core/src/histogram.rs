//! Fixed-binning 1D histogram accumulator.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 1D histogram with uniform binning.
///
/// Out-of-range fills are recorded in the explicit `underflow`/`overflow`
/// fields rather than dropped; `x_max` itself lands in overflow (the last
/// bin's upper edge is exclusive).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Histogram1D {
    /// Histogram name.
    pub name: String,
    /// Histogram title.
    pub title: String,
    /// Number of bins (excluding under/overflow).
    pub n_bins: usize,
    /// Lower edge of first bin.
    pub x_min: f64,
    /// Upper edge of last bin.
    pub x_max: f64,
    /// Bin contents (length = n_bins, sum of weights per bin).
    pub bin_content: Vec<f64>,
    /// Sum of weights squared per bin (for statistical errors).
    pub sumw2: Vec<f64>,
    /// Underflow bin content.
    pub underflow: f64,
    /// Overflow bin content.
    pub overflow: f64,
    /// Total number of fill calls, including under/overflow.
    pub entries: u64,
}

impl Histogram1D {
    /// Create an empty histogram.
    ///
    /// Fails validation when `n_bins` is zero or the range is empty or
    /// non-finite.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        n_bins: usize,
        x_min: f64,
        x_max: f64,
    ) -> Result<Self> {
        let name = name.into();
        if n_bins == 0 {
            return Err(Error::Validation(format!("histogram '{name}': n_bins must be > 0")));
        }
        if !x_min.is_finite() || !x_max.is_finite() || x_max <= x_min {
            return Err(Error::Validation(format!(
                "histogram '{name}': invalid range [{x_min}, {x_max})"
            )));
        }
        Ok(Self {
            name,
            title: title.into(),
            n_bins,
            x_min,
            x_max,
            bin_content: vec![0.0; n_bins],
            sumw2: vec![0.0; n_bins],
            underflow: 0.0,
            overflow: 0.0,
            entries: 0,
        })
    }

    /// Fill with unit weight.
    pub fn fill(&mut self, x: f64) {
        self.fill_weighted(x, 1.0);
    }

    /// Fill with weight `w`.
    pub fn fill_weighted(&mut self, x: f64, w: f64) {
        self.entries += 1;
        match self.bin_index(x) {
            Some(idx) => {
                self.bin_content[idx] += w;
                self.sumw2[idx] += w * w;
            }
            None if x < self.x_min => self.underflow += w,
            None => self.overflow += w,
        }
    }

    /// Index of the bin containing `x`, or `None` when out of range.
    ///
    /// NaN counts as overflow.
    pub fn bin_index(&self, x: f64) -> Option<usize> {
        if x < self.x_min || x >= self.x_max || x.is_nan() {
            return None;
        }
        let width = (self.x_max - self.x_min) / self.n_bins as f64;
        // Rounding at an interior edge can only push the index up by one.
        let idx = ((x - self.x_min) / width) as usize;
        Some(idx.min(self.n_bins - 1))
    }

    /// Bin edges, length `n_bins + 1`.
    pub fn bin_edges(&self) -> Vec<f64> {
        let width = (self.x_max - self.x_min) / self.n_bins as f64;
        (0..=self.n_bins).map(|i| self.x_min + width * i as f64).collect()
    }

    /// Sum of in-range bin contents.
    pub fn integral(&self) -> f64 {
        self.bin_content.iter().sum()
    }

    /// Sum of all contents including under/overflow.
    pub fn integral_with_flows(&self) -> f64 {
        self.integral() + self.underflow + self.overflow
    }
}
