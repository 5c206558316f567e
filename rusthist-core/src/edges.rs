//! Bin-boundary data for a histogram.

use std::ops::Deref;
use std::sync::Arc;

use crate::conversion::convert_to_bin_boundary;
use crate::points::Points;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The X values of binned data: N+1 boundaries delimiting N bins.
///
/// Boundaries must be strictly monotonically increasing. This is a
/// precondition on construction and is not checked; the rebin engine only
/// defends against zero-width bins where it would otherwise divide by zero.
///
/// The underlying buffer is reference-counted and copy-on-write, so every
/// spectrum of a workspace with common binning can hold the same edges. The
/// first mutation through any owner detaches a private copy for that owner
/// only.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinEdges {
    data: Arc<Vec<f64>>,
}

impl BinEdges {
    /// Creates bin edges from a vector of boundary values.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            data: Arc::new(values),
        }
    }

    /// Returns the boundaries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Number of bins delimited by these boundaries.
    #[must_use]
    pub fn bin_count(&self) -> usize {
        self.data.len().saturating_sub(1)
    }

    /// Returns mutable access to the boundaries, detaching from any shared
    /// buffer first (copy-on-write).
    pub fn values_mut(&mut self) -> &mut [f64] {
        Arc::make_mut(&mut self.data).as_mut_slice()
    }

    /// Returns true if both handles refer to the same underlying buffer.
    #[must_use]
    pub fn shares_data(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Shifts every boundary by `delta`.
    pub fn offset_by(&mut self, delta: f64) {
        for value in self.values_mut() {
            *value += delta;
        }
    }

    /// Multiplies every boundary by `factor`.
    pub fn scale_by(&mut self, factor: f64) {
        for value in self.values_mut() {
            *value *= factor;
        }
    }
}

impl Deref for BinEdges {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.data
    }
}

impl From<Vec<f64>> for BinEdges {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for BinEdges {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

/// Constructs bin edges from points. Interior boundaries are midpoints of
/// adjacent points; the outer boundaries are reflected so each outer point
/// sits in the center of its bin.
impl From<&Points> for BinEdges {
    fn from(points: &Points) -> Self {
        Self::new(convert_to_bin_boundary(points.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_count() {
        assert_eq!(BinEdges::new(vec![0.0, 1.0, 2.0]).bin_count(), 2);
        assert_eq!(BinEdges::new(vec![0.0]).bin_count(), 0);
        assert_eq!(BinEdges::default().bin_count(), 0);
    }

    #[test]
    fn test_clone_shares_buffer_until_mutation() {
        let a = BinEdges::new(vec![0.0, 1.0, 2.0]);
        let mut b = a.clone();
        assert!(a.shares_data(&b));

        b.offset_by(0.5);
        assert!(!a.shares_data(&b));
        assert_eq!(a.as_slice(), &[0.0, 1.0, 2.0]);
        assert_eq!(b.as_slice(), &[0.5, 1.5, 2.5]);
    }

    #[test]
    fn test_from_points() {
        let points = Points::new(vec![0.5, 1.5, 2.5]);
        let edges = BinEdges::from(&points);
        assert_eq!(edges.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    }
}
