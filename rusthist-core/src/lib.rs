//! rusthist-core: Core data model for 1-D binned and point-sampled data.
//!
//! This crate provides the foundational types for histogram processing:
//! copy-on-write X storage with tagged bin-edge/point semantics, the
//! histogram container, and point/boundary conversion.
//!

pub mod conversion;
pub mod edges;
pub mod error;
pub mod histogram;
pub mod points;

pub use conversion::{convert_to_bin_boundary, convert_to_bin_centre};
pub use edges::BinEdges;
pub use error::{Error, Result};
pub use histogram::{Histogram, HistogramX, XMode};
pub use points::Points;
