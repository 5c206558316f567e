//! Histogram container: tagged X storage plus signal and error arrays.

use crate::edges::BinEdges;
use crate::error::{Error, Result};
use crate::points::Points;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which semantics the stored X array carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum XMode {
    /// One X value per bin, at the bin center.
    Points,
    /// N+1 boundaries delimiting N bins.
    BinEdges,
}

/// The X array of a histogram, tagged with its semantics.
///
/// Modeled as a sum type so a mode/length mismatch cannot be represented:
/// the payload type itself says whether the values are centers or
/// boundaries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HistogramX {
    /// Point data.
    Points(Points),
    /// Binned data.
    BinEdges(BinEdges),
}

impl HistogramX {
    /// Returns the mode tag of the stored array.
    #[must_use]
    pub fn mode(&self) -> XMode {
        match self {
            Self::Points(_) => XMode::Points,
            Self::BinEdges(_) => XMode::BinEdges,
        }
    }

    /// Number of stored X values.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Points(points) => points.len(),
            Self::BinEdges(edges) => edges.len(),
        }
    }

    /// Returns true if no X values are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of bins the stored array describes.
    #[must_use]
    pub fn bin_count(&self) -> usize {
        match self {
            Self::Points(points) => points.len(),
            Self::BinEdges(edges) => edges.bin_count(),
        }
    }

    /// Returns the raw X values regardless of mode.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Self::Points(points) => points.as_slice(),
            Self::BinEdges(edges) => edges.as_slice(),
        }
    }
}

/// One spectrum's X, signal and error data.
///
/// Invariants, enforced by every constructor and setter:
/// `y.len() == e.len()`, and the X length matches the mode
/// (`y.len()` for points, `y.len() + 1` for bin edges).
///
/// Whether Y holds raw counts or counts per unit X (a distribution) is
/// decided by the owning workspace and carried alongside the histogram,
/// not inside it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Histogram {
    x: HistogramX,
    y: Vec<f64>,
    e: Vec<f64>,
}

impl Histogram {
    /// Creates a histogram over point data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] unless
    /// `points.len() == y.len() == e.len()`.
    pub fn from_points(points: Points, y: Vec<f64>, e: Vec<f64>) -> Result<Self> {
        check_counts(&y, &e)?;
        check_points_len(&points, y.len())?;
        Ok(Self {
            x: HistogramX::Points(points),
            y,
            e,
        })
    }

    /// Creates a histogram over binned data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] unless `y.len() == e.len()` and
    /// `edges.len() == y.len() + 1`.
    pub fn from_bin_edges(edges: BinEdges, y: Vec<f64>, e: Vec<f64>) -> Result<Self> {
        check_counts(&y, &e)?;
        check_edges_len(&edges, y.len())?;
        Ok(Self {
            x: HistogramX::BinEdges(edges),
            y,
            e,
        })
    }

    /// Replaces the X array with point data.
    ///
    /// On success the container drops its handle to any previously shared
    /// X buffer and attaches the new, possibly shared, one. On failure the
    /// container is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] unless `points.len() == y.len()`.
    pub fn set_points(&mut self, points: Points) -> Result<()> {
        check_points_len(&points, self.y.len())?;
        self.x = HistogramX::Points(points);
        Ok(())
    }

    /// Replaces the X array with bin boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] unless
    /// `edges.len() == y.len() + 1`.
    pub fn set_bin_edges(&mut self, edges: BinEdges) -> Result<()> {
        check_edges_len(&edges, self.y.len())?;
        self.x = HistogramX::BinEdges(edges);
        Ok(())
    }

    /// Replaces the signal and error arrays wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] unless `y.len() == e.len()` and
    /// the lengths match the bin count of the stored X array.
    pub fn set_data(&mut self, y: Vec<f64>, e: Vec<f64>) -> Result<()> {
        check_counts(&y, &e)?;
        if y.len() != self.x.bin_count() {
            return Err(Error::ShapeMismatch {
                context: "signal array",
                expected: self.x.bin_count(),
                actual: y.len(),
            });
        }
        self.y = y;
        self.e = e;
        Ok(())
    }

    /// The tagged X array.
    #[must_use]
    pub fn x(&self) -> &HistogramX {
        &self.x
    }

    /// The mode of the stored X array.
    #[must_use]
    pub fn x_mode(&self) -> XMode {
        self.x.mode()
    }

    /// The signal values, one per bin.
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// The standard deviations, one per signal value.
    #[must_use]
    pub fn e(&self) -> &[f64] {
        &self.e
    }

    /// Number of bins.
    #[must_use]
    pub fn bin_count(&self) -> usize {
        self.y.len()
    }

    /// The X array as points.
    ///
    /// Shares the stored buffer when the histogram holds point data;
    /// otherwise converts the stored boundaries to bin centers. The
    /// conversion is never cached.
    #[must_use]
    pub fn points(&self) -> Points {
        match &self.x {
            HistogramX::Points(points) => points.clone(),
            HistogramX::BinEdges(edges) => Points::from(edges),
        }
    }

    /// The X array as bin boundaries.
    ///
    /// Shares the stored buffer when the histogram holds binned data;
    /// otherwise converts the stored points to boundaries.
    #[must_use]
    pub fn bin_edges(&self) -> BinEdges {
        match &self.x {
            HistogramX::BinEdges(edges) => edges.clone(),
            HistogramX::Points(points) => BinEdges::from(points),
        }
    }

    /// Returns true if both histograms hold the same X mode and the same
    /// underlying X buffer.
    #[must_use]
    pub fn shares_x_with(&self, other: &Self) -> bool {
        match (&self.x, &other.x) {
            (HistogramX::Points(a), HistogramX::Points(b)) => a.shares_data(b),
            (HistogramX::BinEdges(a), HistogramX::BinEdges(b)) => a.shares_data(b),
            _ => false,
        }
    }
}

fn check_counts(y: &[f64], e: &[f64]) -> Result<()> {
    if y.len() == e.len() {
        Ok(())
    } else {
        Err(Error::ShapeMismatch {
            context: "error array",
            expected: y.len(),
            actual: e.len(),
        })
    }
}

fn check_points_len(points: &Points, bins: usize) -> Result<()> {
    if points.len() == bins {
        Ok(())
    } else {
        Err(Error::ShapeMismatch {
            context: "points",
            expected: bins,
            actual: points.len(),
        })
    }
}

fn check_edges_len(edges: &BinEdges, bins: usize) -> Result<()> {
    if edges.len() == bins + 1 {
        Ok(())
    } else {
        Err(Error::ShapeMismatch {
            context: "bin edges",
            expected: bins + 1,
            actual: edges.len(),
        })
    }
}
