//! rusthist-algorithms: Rebinning and resampling for 1-D histogram data.
//!
//! This crate provides the operations that move data between bin axes:
//! - **Axis generation** - bin boundaries from compact rebin parameters,
//!   with linear and logarithmic stepping
//! - **Rebinning** - overlap-weighted redistribution of signal and error,
//!   generic ([`rebin`]) and fast single-pass ([`rebin_histogram`])
//! - **Lookup and interpolation** - bin-index search, stride-wise linear
//!   interpolation
//! - **Smoothing** - trapezium-weighted running averages
//!
#![warn(missing_docs)]

mod axis;
mod lookup;
mod processing;
mod rebin;
mod smooth;
pub mod util;

pub use axis::{bin_edges_from_rebin_params, create_axis_from_rebin_params};
pub use lookup::{get_bin_index, linearly_interpolate_y};
pub use processing::{rebin_spectra, rebin_spectrum};
pub use rebin::{rebin, rebin_histogram};
pub use smooth::smooth_in_range;

// Re-export the core conversions so callers of the algorithm surface get
// the full set of axis operations from one place.
pub use rusthist_core::conversion::{convert_to_bin_boundary, convert_to_bin_centre};
