//! Conversion between bin boundaries and bin centers.

/// Converts a set of bin boundaries into bin center values.
///
/// Each center is the arithmetic mean of the two boundaries enclosing the
/// bin, so the output is one element shorter than the input. An input with
/// fewer than two boundaries produces an empty output.
#[must_use]
pub fn convert_to_bin_centre(bin_edges: &[f64]) -> Vec<f64> {
    bin_edges
        .windows(2)
        .map(|pair| 0.5 * (pair[0] + pair[1]))
        .collect()
}

/// Converts a set of bin centers into bin boundary values.
///
/// Interior boundaries are midpoints of adjacent centers. The two outer
/// boundaries are placed so that the first and last centers sit in the
/// middle of their bins; for a particular set of centers this may not be
/// what produced them, but it is the best that can be done without more
/// information. An empty input yields an empty output. A single center
/// carries no spacing information, so its bin is given unit width.
#[must_use]
pub fn convert_to_bin_boundary(bin_centers: &[f64]) -> Vec<f64> {
    let n = bin_centers.len();

    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![bin_centers[0] - 0.5, bin_centers[0] + 0.5];
    }

    let mut bin_edges = vec![0.0; n + 1];
    for i in 0..n - 1 {
        bin_edges[i + 1] = 0.5 * (bin_centers[i] + bin_centers[i + 1]);
    }
    bin_edges[0] = bin_centers[0] - (bin_edges[1] - bin_centers[0]);
    bin_edges[n] = bin_centers[n - 1] + (bin_centers[n - 1] - bin_edges[n - 1]);
    bin_edges
}
