//! Named histogram table, booked once per job and filled per event.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::histogram::Histogram1D;

/// The job's named accumulator table.
///
/// Histograms are booked before the first event, the book is frozen, and
/// from then on only fills by label are allowed. Duplicate booking and fills
/// to unknown labels are validation errors.
#[derive(Debug, Clone, Default)]
pub struct HistogramBook {
    hists: BTreeMap<String, Histogram1D>,
    frozen: bool,
}

impl HistogramBook {
    /// Create an empty, unfrozen book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Book a histogram under its own name.
    pub fn book(
        &mut self,
        name: &str,
        title: &str,
        n_bins: usize,
        x_min: f64,
        x_max: f64,
    ) -> Result<()> {
        if self.frozen {
            return Err(Error::Validation(format!(
                "cannot book '{name}': histogram book is frozen"
            )));
        }
        if self.hists.contains_key(name) {
            return Err(Error::Validation(format!("duplicate histogram label '{name}'")));
        }
        let hist = Histogram1D::new(name, title, n_bins, x_min, x_max)?;
        self.hists.insert(name.to_owned(), hist);
        Ok(())
    }

    /// Freeze the book; no further booking is allowed.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Whether the book has been frozen.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Fill the histogram labeled `name` with unit weight.
    pub fn fill(&mut self, name: &str, x: f64) -> Result<()> {
        match self.hists.get_mut(name) {
            Some(h) => {
                h.fill(x);
                Ok(())
            }
            None => Err(Error::Validation(format!("fill of unbooked histogram '{name}'"))),
        }
    }

    /// Look up a histogram by label.
    pub fn get(&self, name: &str) -> Option<&Histogram1D> {
        self.hists.get(name)
    }

    /// Number of booked histograms.
    pub fn len(&self) -> usize {
        self.hists.len()
    }

    /// Whether the book is empty.
    pub fn is_empty(&self) -> bool {
        self.hists.is_empty()
    }

    /// The full label-to-histogram map, sorted by label.
    ///
    /// This is the persistence surface: serialize it as-is.
    pub fn histograms(&self) -> &BTreeMap<String, Histogram1D> {
        &self.hists
    }
}
