//! Bin-center (point) data for a histogram.

use std::ops::Deref;
use std::sync::Arc;

use crate::conversion::convert_to_bin_centre;
use crate::edges::BinEdges;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The X values of point data: one value per bin, at the bin center.
///
/// The underlying buffer is reference-counted and copy-on-write. Cloning a
/// `Points` shares the buffer; the first mutation through any owner detaches
/// a private copy for that owner only, so readers holding an older handle
/// never observe the change.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Points {
    data: Arc<Vec<f64>>,
}

impl Points {
    /// Creates points from a vector of X values.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            data: Arc::new(values),
        }
    }

    /// Returns the values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns mutable access to the values, detaching from any shared
    /// buffer first (copy-on-write).
    ///
    /// The result is a slice, not a vector: buffers are replaced wholesale
    /// via the histogram setters, never resized in place.
    pub fn values_mut(&mut self) -> &mut [f64] {
        Arc::make_mut(&mut self.data).as_mut_slice()
    }

    /// Returns true if both handles refer to the same underlying buffer.
    #[must_use]
    pub fn shares_data(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Shifts every value by `delta`.
    pub fn offset_by(&mut self, delta: f64) {
        for value in self.values_mut() {
            *value += delta;
        }
    }

    /// Multiplies every value by `factor`.
    pub fn scale_by(&mut self, factor: f64) {
        for value in self.values_mut() {
            *value *= factor;
        }
    }
}

impl Deref for Points {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.data
    }
}

impl From<Vec<f64>> for Points {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for Points {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

/// Constructs points from bin edges, where each point is a bin center.
impl From<&BinEdges> for Points {
    fn from(edges: &BinEdges) -> Self {
        Self::new(convert_to_bin_centre(edges.as_slice()))
    }
}
