//! End-to-end checks of axis generation, rebinning and the histogram
//! container working together.

use approx::assert_relative_eq;
use rusthist_algorithms::{
    bin_edges_from_rebin_params, create_axis_from_rebin_params, rebin, rebin_spectra,
};
use rusthist_core::{BinEdges, Error, Histogram};

#[test]
fn test_generated_axis_feeds_straight_into_rebin() {
    // Raw counts on a fine unit grid, rebinned onto a coarser generated
    // axis: totals must be conserved bin for bin.
    let xold: Vec<f64> = (0..=10).map(f64::from).collect();
    let yold = vec![1.0; 10];
    let eold = vec![1.0; 10];

    let new_edges = bin_edges_from_rebin_params(&[0.0, 2.0, 10.0]).unwrap();
    let mut ynew = vec![0.0; new_edges.bin_count()];
    let mut enew = vec![0.0; new_edges.bin_count()];
    rebin(
        &xold,
        &yold,
        &eold,
        new_edges.as_slice(),
        &mut ynew,
        &mut enew,
        false,
        false,
    )
    .unwrap();

    for (y, e) in ynew.iter().zip(&enew) {
        assert_relative_eq!(*y, 2.0, max_relative = 1e-12);
        assert_relative_eq!(*e, std::f64::consts::SQRT_2, max_relative = 1e-12);
    }
    let total: f64 = ynew.iter().sum();
    assert_relative_eq!(total, 10.0, max_relative = 1e-12);
}

#[test]
fn test_count_only_pass_sizes_buffers_for_the_real_pass() {
    let params = [1.0, -0.1, 10.0];
    let mut unused = Vec::new();
    let n_boundaries =
        create_axis_from_rebin_params(&params, &mut unused, false, false).unwrap();
    assert!(unused.is_empty());

    let mut xnew = Vec::with_capacity(n_boundaries);
    let n_again = create_axis_from_rebin_params(&params, &mut xnew, true, false).unwrap();
    assert_eq!(n_boundaries, n_again);
    assert_eq!(xnew.len(), n_boundaries);
}

#[test]
fn test_workspace_rebin_shares_axis_and_survives_divergence() {
    let old_edges = BinEdges::new(vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    let spectra: Vec<Histogram> = (1..=4)
        .map(|i| {
            let scale = f64::from(i);
            Histogram::from_bin_edges(old_edges.clone(), vec![scale; 4], vec![1.0; 4]).unwrap()
        })
        .collect();
    // All inputs share one X buffer, as a workspace with common binning
    // would.
    assert!(spectra[0].shares_x_with(&spectra[3]));

    let new_edges = bin_edges_from_rebin_params(&[0.0, 2.0, 4.0]).unwrap();
    let mut rebinned = rebin_spectra(&spectra, &new_edges, false).unwrap();

    for (i, histogram) in rebinned.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let scale = (i + 1) as f64;
        assert_relative_eq!(histogram.y()[0], 2.0 * scale, max_relative = 1e-12);
        assert_relative_eq!(histogram.y()[1], 2.0 * scale, max_relative = 1e-12);
    }

    // One spectrum diverges; the rest keep the shared view.
    let mut private_edges = rebinned[0].bin_edges();
    private_edges.offset_by(0.5);
    rebinned[0].set_bin_edges(private_edges).unwrap();

    assert!(!rebinned[0].shares_x_with(&rebinned[1]));
    assert!(rebinned[1].shares_x_with(&rebinned[2]));
    assert_eq!(rebinned[1].bin_edges().as_slice(), new_edges.as_slice());
}

#[test]
fn test_distribution_identity_on_irregular_axis() {
    let xold = [0.0, 1.0, 3.0, 6.0];
    let yold = [4.0, 2.0, 1.0]; // counts per unit X
    let eold = [0.4, 0.2, 0.1];

    let mut ynew = vec![0.0; 3];
    let mut enew = vec![0.0; 3];
    rebin(&xold, &yold, &eold, &xold, &mut ynew, &mut enew, true, false).unwrap();

    for i in 0..3 {
        assert_relative_eq!(ynew[i], yold[i], max_relative = 1e-12);
        assert_relative_eq!(enew[i], eold[i], max_relative = 1e-12);
    }
}

#[test]
fn test_invalid_step_surfaces_from_the_convenience_wrapper() {
    assert!(matches!(
        bin_edges_from_rebin_params(&[0.0, 0.0, 10.0]),
        Err(Error::InvalidStep { .. })
    ));
}

#[test]
fn test_degenerate_axis_aborts_batch() {
    let good = Histogram::from_bin_edges(
        BinEdges::new(vec![0.0, 1.0, 2.0]),
        vec![1.0, 1.0],
        vec![1.0, 1.0],
    )
    .unwrap();
    let new_edges = BinEdges::new(vec![0.0, 2.0, 2.0]);
    // Zero-width output bin: distribution normalization must reject it.
    let result = rebin_spectra(&[good], &new_edges, true);
    assert!(matches!(result, Err(Error::DegenerateAxis { .. })));
}
