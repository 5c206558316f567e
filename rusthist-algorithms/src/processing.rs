//! High-level helpers that rebin whole sets of spectra.

use rayon::prelude::*;
use rusthist_core::{BinEdges, Histogram, Result};

use crate::rebin::rebin;

/// Rebins one spectrum onto a new set of bin boundaries.
///
/// The input histogram's X array is taken as bin edges (point data is
/// converted first). The returned histogram shares the `new_edges` buffer,
/// so rebinning many spectra onto the same axis keeps a single copy of it.
///
/// # Errors
///
/// Propagates the shape and degenerate-axis errors of [`rebin`].
pub fn rebin_spectrum(
    histogram: &Histogram,
    new_edges: &BinEdges,
    distribution: bool,
) -> Result<Histogram> {
    let old_edges = histogram.bin_edges();
    let mut ynew = vec![0.0; new_edges.bin_count()];
    let mut enew = vec![0.0; new_edges.bin_count()];
    rebin(
        old_edges.as_slice(),
        histogram.y(),
        histogram.e(),
        new_edges.as_slice(),
        &mut ynew,
        &mut enew,
        distribution,
        false,
    )?;
    Histogram::from_bin_edges(new_edges.clone(), ynew, enew)
}

/// Rebins every spectrum onto a common set of bin boundaries, in parallel.
///
/// Spectra are independent, so the work is a parallel map; each task owns
/// its own output buffers. Every output histogram shares the single
/// `new_edges` buffer.
///
/// # Errors
///
/// The first error encountered by any spectrum, if any.
pub fn rebin_spectra(
    histograms: &[Histogram],
    new_edges: &BinEdges,
    distribution: bool,
) -> Result<Vec<Histogram>> {
    histograms
        .par_iter()
        .map(|histogram| rebin_spectrum(histogram, new_edges, distribution))
        .collect()
}
