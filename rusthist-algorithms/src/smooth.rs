//! Trapezium-weighted running average over regular or variable bins.

use crate::lookup::get_bin_index;
use rusthist_core::{Error, Result};

/// Averages `input` around `index` over a window of half-width
/// `half_width`.
///
/// With bin boundaries the window is an X interval centered on the bin
/// center of `index`; the first and last bins inside the window contribute
/// by their overlap fraction (trapezium integration) and the result is
/// normalized by the window's X extent. Without boundaries the window is
/// an index interval and the result is the plain mean of the covered
/// samples. Degenerate windows return 0.
fn run_average(
    index: usize,
    start_index: usize,
    end_index: usize,
    half_width: f64,
    input: &[f64],
    bin_bndrs: Option<&[f64]>,
) -> f64 {
    if let Some(bndrs) = bin_bndrs {
        // Identify the first and last bins to integrate over, shifting the
        // window onto the center of the current bin.
        let bin_centre = 0.5 * (bndrs[index + 1] + bndrs[index]);
        let mut start = bin_centre - half_width;
        let mut end = bin_centre + half_width;
        let mut weight0 = 0.0;
        let mut weight1 = 0.0;

        let i_start = if start <= bndrs[start_index] {
            start = bndrs[start_index];
            start_index
        } else {
            let first_bin = get_bin_index(bndrs, start);
            weight0 = (bndrs[first_bin + 1] - start) / (bndrs[first_bin + 1] - bndrs[first_bin]);
            first_bin + 1
        };
        let i_end = if end >= bndrs[end_index] {
            end = bndrs[end_index];
            end_index
        } else {
            let last_bin = get_bin_index(bndrs, end);
            weight1 = (end - bndrs[last_bin]) / (bndrs[last_bin + 1] - bndrs[last_bin]);
            last_bin
        };
        let mut avrg = 0.0;
        if i_start > i_end {
            // The window starts and ends inside the same bin.
            weight1 = 0.0;
            weight0 = (end - start) / (bndrs[i_start] - bndrs[i_start - 1]);
        } else {
            avrg += input[i_start..i_end].iter().sum::<f64>();
        }
        if i_start != start_index {
            avrg += input[i_start - 1] * weight0;
        }
        if i_end != end_index {
            avrg += input[i_end] * weight1;
        }

        let div = end - start;
        if div == 0.0 {
            0.0
        } else {
            avrg / div
        }
    } else {
        // Integer window over samples defined at the bin centers.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let i_half_width = half_width as usize;
        let i_start = if start_index + i_half_width > index {
            start_index
        } else {
            index - i_half_width
        };
        let i_end = (index + i_half_width).min(end_index);

        let count = i_end - i_start;
        if count == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = count as f64;
        input[i_start..i_end].iter().sum::<f64>() / count
    }
}

/// Basic running average of `input` within the index range
/// `[start_index, end_index)`, considering variable bin boundaries when
/// provided.
///
/// The averaging window spans `avrg_interval` centered on each sample
/// (`±avrg_interval / 2`). With `bin_bndrs` the window is measured in X
/// and each output value is the window average times the sample's own bin
/// width, which performs a trapezium integration; without boundaries,
/// equal-size bins of width 1 are assumed and `avrg_interval` becomes a
/// number of points. Some peak shift related to the first derivative of
/// the integrated function can be observed.
///
/// `end_index` of `None` (or past the input) means the end of the input.
/// An empty range clears `output` and returns. When `out_bins` is given
/// together with `bin_bndrs`, it receives the boundaries covering the
/// output range.
///
/// # Errors
///
/// [`Error::ShapeMismatch`] if `bin_bndrs` is present but does not hold
/// `input.len() + 1` boundaries.
pub fn smooth_in_range(
    input: &[f64],
    output: &mut Vec<f64>,
    avrg_interval: f64,
    bin_bndrs: Option<&[f64]>,
    start_index: usize,
    end_index: Option<usize>,
    mut out_bins: Option<&mut Vec<f64>>,
) -> Result<()> {
    let end_index = end_index.unwrap_or(input.len()).min(input.len());
    if end_index <= start_index {
        output.clear();
        return Ok(());
    }

    if let Some(bndrs) = bin_bndrs {
        if bndrs.len() != input.len() + 1 {
            return Err(Error::ShapeMismatch {
                context: "bin boundaries",
                expected: input.len() + 1,
                actual: bndrs.len(),
            });
        }
    }

    let length = end_index - start_index;
    output.clear();
    output.resize(length, 0.0);

    let half_width = avrg_interval / 2.0;

    if let Some(bins) = out_bins.as_mut() {
        bins.clear();
        bins.resize(length + 1, 0.0);
    }

    for i in start_index..end_index {
        let bin_size = bin_bndrs.map_or(1.0, |bndrs| bndrs[i + 1] - bndrs[i]);
        output[i - start_index] =
            run_average(i, start_index, end_index, half_width, input, bin_bndrs) * bin_size;
        if let (Some(bins), Some(bndrs)) = (out_bins.as_mut(), bin_bndrs) {
            bins[i - start_index] = bndrs[i];
        }
    }
    if let (Some(bins), Some(bndrs)) = (out_bins.as_mut(), bin_bndrs) {
        bins[length] = bndrs[end_index];
    }

    Ok(())
}
