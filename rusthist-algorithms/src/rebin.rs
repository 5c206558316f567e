//! Overlap-weighted rebinning of signal and error data.
//!
//! Both functions here redistribute counts from one set of bin boundaries
//! onto another, conserving integrated signal: each old bin's content is
//! split across the new bins it overlaps, in proportion to the shared
//! X range. [`rebin`] handles distribution (counts per unit X) as well as
//! raw-count data with a generic two-cursor walk; [`rebin_histogram`]
//! is a faster single-pass variant for raw counts only.

use rusthist_core::{Error, Result};

/// Rebins data onto a new output X axis.
///
/// Walks the old and new axes with two cursors. Wherever an old bin
/// `[xo_low, xo_high)` overlaps a new bin `[xn_low, xn_high)`, the overlap
/// `delta = min(xo_high, xn_high) - max(xo_low, xn_low)` determines the
/// share of the old bin's content accumulated into the new bin. With
/// `distribution` the Y values are counts per unit X; otherwise they are
/// raw counts and are divided by the old bin width on the fly.
///
/// Unless `addition` is requested, `ynew`/`enew` are zero-filled first and
/// finished afterwards: errors are square-rooted and, for distributions,
/// signal and error are divided by the new bin widths. With `addition`,
/// values accumulate onto the existing contents and the finishing step is
/// skipped entirely, so by contract the caller receives raw sums and
/// **squared** errors for later combination with further calls.
///
/// A degenerate overlap (zero-width old bin, or equal boundaries) makes
/// the call return early without error; in that case the outputs hold
/// whatever had been accumulated up to that point. The same applies when
/// the axes do not overlap at all: no-overlap is silent, not exceptional.
///
/// # Errors
///
/// [`Error::ShapeMismatch`] unless `xold.len() == yold.len() + 1 ==
/// eold.len() + 1` and likewise for the new triple;
/// [`Error::DegenerateAxis`] if a distribution is normalized onto an axis
/// with a zero-width bin.
#[allow(clippy::too_many_arguments)]
pub fn rebin(
    xold: &[f64],
    yold: &[f64],
    eold: &[f64],
    xnew: &[f64],
    ynew: &mut [f64],
    enew: &mut [f64],
    distribution: bool,
    addition: bool,
) -> Result<()> {
    check_triple(xold, yold, eold, "old")?;
    check_triple(xnew, ynew, enew, "new")?;

    let size_yold = yold.len();
    let size_ynew = ynew.len();

    if !addition {
        ynew.fill(0.0);
        enew.fill(0.0);
    }

    let mut iold = 0;
    let mut inew = 0;

    while inew < size_ynew && iold < size_yold {
        let xo_low = xold[iold];
        let xo_high = xold[iold + 1];
        let xn_low = xnew[inew];
        let xn_high = xnew[inew + 1];

        if xn_high <= xo_low {
            // Old and new bins do not overlap.
            inew += 1;
        } else if xo_high <= xn_low {
            iold += 1;
        } else {
            // delta is the overlap of the two bins on the X axis.
            let delta = xo_high.min(xn_high) - xo_low.max(xn_low);
            let width = xo_high - xo_low;
            if delta <= 0.0 || width <= 0.0 {
                // Degenerate bin: leave the outputs as accumulated so far.
                return Ok(());
            }

            if distribution {
                ynew[inew] += yold[iold] * delta;
                enew[inew] += eold[iold] * eold[iold] * delta * width;
            } else {
                // Implicit division of yold by width while summing avoids a
                // temporary normalized copy of the old data.
                ynew[inew] += yold[iold] * delta / width;
                enew[inew] += eold[iold] * eold[iold] * delta / width;
            }

            if xn_high > xo_high {
                iold += 1;
            } else {
                inew += 1;
            }
        }
    }

    if !addition {
        if distribution {
            // Convert back to counts per unit X.
            for i in 0..size_ynew {
                let width = xnew[i + 1] - xnew[i];
                if width == 0.0 {
                    return Err(Error::DegenerateAxis { bin: i });
                }
                ynew[i] /= width;
                enew[i] = enew[i].sqrt() / width;
            }
        } else {
            for e in enew.iter_mut() {
                *e = e.sqrt();
            }
        }
    }

    Ok(())
}

/// Rebins histogram (raw-count) data onto a new output X axis.
///
/// Same contract and conservation law as [`rebin`] without the
/// distribution branch, exploiting monotonicity for speed: a binary search
/// finds the single starting bin on whichever axis begins later, then one
/// forward sweep either unloads each old bin whole (when its right edge
/// sits at or below the current new bin's right edge) or splits it across
/// the new bins it spans using a precomputed `1/width`.
///
/// If the two ranges are completely disjoint the call returns early with
/// the outputs still zero-filled (or, with `addition`, untouched); callers
/// must not assume the outputs were fully computed on early return. As
/// with [`rebin`], `addition` skips the final square root, leaving squared
/// errors by contract.
///
/// # Errors
///
/// [`Error::ShapeMismatch`] on inconsistent input or output lengths.
pub fn rebin_histogram(
    xold: &[f64],
    yold: &[f64],
    eold: &[f64],
    xnew: &[f64],
    ynew: &mut [f64],
    enew: &mut [f64],
    addition: bool,
) -> Result<()> {
    check_triple(xold, yold, eold, "old")?;
    check_triple(xnew, ynew, enew, "new")?;

    let size_yold = yold.len();
    let size_ynew = ynew.len();

    if !addition {
        ynew.fill(0.0);
        enew.fill(0.0);
    }
    if size_yold == 0 || size_ynew == 0 {
        return Ok(());
    }

    // Find the starting bin on whichever axis begins later, to avoid
    // walking irrelevant bins.
    let mut iold = 0;
    let mut inew = 0;
    if xnew[0] > xold[0] {
        let pos = xold.partition_point(|&x| x <= xnew[0]);
        if pos == xold.len() {
            return Ok(()); // no overlap: max of X-old < min of X-new
        }
        iold = pos - 1;
    } else {
        let pos = xnew.partition_point(|&x| x <= xold[0]);
        if pos == xnew.len() {
            return Ok(()); // no overlap: max of X-new < min of X-old
        }
        inew = pos - 1;
    }

    while iold < size_yold {
        let xold_hi = xold[iold + 1];
        if xold_hi <= xnew[inew + 1] {
            // Old bin fully enclosed by the current new bin: unload whole.
            ynew[inew] += yold[iold];
            enew[inew] += eold[iold] * eold[iold];
            if xold_hi == xnew[inew + 1] {
                inew += 1;
                if inew == size_ynew {
                    break;
                }
            }
        } else {
            let xold_lo = xold[iold];
            let one_over_width = 1.0 / (xold_hi - xold_lo);
            let frac = yold[iold] * one_over_width;
            let frac_e = eold[iold] * eold[iold] * one_over_width;

            // Split across the new bins overlapping the current old bin.
            while inew < size_ynew && xnew[inew + 1] <= xold_hi {
                let overlap = xnew[inew + 1] - xnew[inew].max(xold_lo);
                ynew[inew] += frac * overlap;
                enew[inew] += frac_e * overlap;
                inew += 1;
            }

            if inew == size_ynew {
                break;
            }

            // Unload the remainder of the old bin into the current new bin.
            let overlap = xold_hi - xnew[inew];
            ynew[inew] += frac * overlap;
            enew[inew] += frac_e * overlap;
        }
        iold += 1;
    }

    if !addition {
        for e in enew.iter_mut() {
            *e = e.sqrt();
        }
    }

    Ok(())
}

fn check_triple(x: &[f64], y: &[f64], e: &[f64], context: &'static str) -> Result<()> {
    if x.len() != y.len() + 1 {
        return Err(Error::ShapeMismatch {
            context,
            expected: y.len() + 1,
            actual: x.len(),
        });
    }
    if y.len() != e.len() {
        return Err(Error::ShapeMismatch {
            context,
            expected: y.len(),
            actual: e.len(),
        });
    }
    Ok(())
}
