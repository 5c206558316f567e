//! Bin-axis generation from rebin parameters.

use rusthist_core::{BinEdges, Error, Result};

/// Creates a new output X axis from a flat list of rebin parameters
/// `[x_1, delta_1, x_2, delta_2, ..., x_n]`.
///
/// Each `delta` is an absolute bin width when non-negative, or a
/// logarithmic step of magnitude `|delta| * x` when negative, so bins grow
/// geometrically by a factor of `1 + |delta|`. Within a segment, bins of
/// width `delta` are emitted while the next boundary plus a tolerance of
/// `0.25 * delta` still fits under the segment's target boundary; the last
/// bin of a segment is then stretched or clipped to end exactly on the
/// target. With `full_bins_only` the tolerance becomes a whole step and a
/// segment ends with one more full bin, at or below its target, so no bin
/// is ever smaller than the current step.
///
/// Generated boundaries are appended to `xnew` (cleared first). With
/// `resize` false, `xnew` is left empty and only the boundary count is
/// computed, which lets callers pre-size downstream buffers.
///
/// Returns the number of bin boundaries in the new axis.
///
/// # Errors
///
/// [`Error::InvalidParameters`] if `params` holds an even number of values
/// or fewer than three; [`Error::InvalidStep`] if any step is zero.
pub fn create_axis_from_rebin_params(
    params: &[f64],
    xnew: &mut Vec<f64>,
    resize: bool,
    full_bins_only: bool,
) -> Result<usize> {
    if params.len() < 3 || params.len() % 2 == 0 {
        return Err(Error::InvalidParameters(format!(
            "expected an odd number of boundary/step values (at least 3), got {}",
            params.len()
        )));
    }

    let mut ibound = 2;
    let mut istep = 1;
    let mut inew = 1;

    xnew.clear();

    // Maximum allowed difference between the size of the last bin in a
    // segment and all the others.
    let last_bin_coef = if full_bins_only { 1.0 } else { 0.25 };

    let mut xcurr = params[0];
    if resize {
        xnew.push(xcurr);
    }

    while ibound < params.len() && istep < params.len() - 1 {
        let xs = if params[istep] >= 0.0 {
            params[istep]
        } else {
            xcurr * params[istep].abs()
        };

        if xs.abs() == 0.0 {
            return Err(Error::InvalidStep { index: istep });
        }

        if xcurr + xs * (1.0 + last_bin_coef) <= params[ibound] {
            // The current bin plus the allowed portion of a last bin still
            // fits under the segment boundary.
            xcurr += xs;
        } else {
            // Start of the last bin in this segment.
            if full_bins_only {
                xcurr += xs;
            } else {
                xcurr = params[ibound];
            }
            ibound += 2;
            istep += 2;
        }
        if resize {
            xnew.push(xcurr);
        }
        inew += 1;
    }

    Ok(inew)
}

/// Convenience wrapper producing [`BinEdges`] directly from rebin
/// parameters.
///
/// # Errors
///
/// Propagates the errors of [`create_axis_from_rebin_params`].
pub fn bin_edges_from_rebin_params(params: &[f64]) -> Result<BinEdges> {
    let mut xnew = Vec::new();
    create_axis_from_rebin_params(params, &mut xnew, true, false)?;
    Ok(BinEdges::new(xnew))
}
