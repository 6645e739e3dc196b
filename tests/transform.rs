use approx::assert_abs_diff_eq;
use ndarray as nd;
use num_complex::Complex64 as C64;
use rand::{ rngs::StdRng, Rng, SeedableRng };
use std::f64::consts::{ PI, TAU };
use xkspace::{
    grid::XGrid,
    op::{ momentum, Transform },
    utils::{ fft_freq, fft_shift, gaussian, wf_dot, wf_norm },
};

#[test]
fn dual_grid_matches_spacing() {
    let x = XGrid::new(-5.0, 5.0, 100).unwrap();
    let k = x.dual();
    assert_abs_diff_eq!(x.dx(), 0.1, epsilon = 1e-15);
    assert_abs_diff_eq!(k.p_min(), -31.41592653589793, epsilon = 1e-10);
    assert_abs_diff_eq!(k.p_max(), 31.41592653589793, epsilon = 1e-10);
    assert_abs_diff_eq!(k.dp(), 2.0 * PI / (100.0 * 0.1), epsilon = 1e-12);
}

#[test]
fn shifted_fft_freq_matches_the_dual_grid() {
    // for even n the dual grid is the radian version of the FFT's native
    // frequencies, reordered to monotonic
    let x = XGrid::new(-5.0, 5.0, 100).unwrap();
    let k = x.dual();
    let freqs = fft_shift(&fft_freq(100, x.dx()));
    for (pk, fk) in k.points().iter().zip(&freqs) {
        assert_abs_diff_eq!(*pk, TAU * fk, epsilon = 1e-10);
    }
}

#[test]
fn round_trip_is_identity() {
    let mut rng = StdRng::seed_from_u64(10_987);
    for &n in [64_usize, 101, 256].iter() {
        let x = XGrid::new(-4.0, 7.0, n).unwrap();
        let t = Transform::forward(&x);
        let q: nd::Array1<C64>
            = (0..n)
            .map(|_| C64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect();
        let back = t.adjoint().apply(&t.apply(&q).unwrap()).unwrap();
        let qmax: f64
            = q.iter().map(|qk| qk.norm()).fold(0.0, f64::max);
        let worst: f64
            = q.iter().zip(&back)
            .map(|(a, b)| (a - b).norm())
            .fold(0.0, f64::max);
        assert!(worst < 1e-10 * qmax, "n = {}: worst diff {:e}", n, worst);
    }
}

#[test]
fn norm_is_conserved() {
    let x = XGrid::new(-10.0, 10.0, 256).unwrap();
    let k = x.dual();
    let q = gaussian(&x, 0.5, 3.0, 0.8);
    assert_abs_diff_eq!(wf_norm(&q, x.dx()), 1.0, epsilon = 1e-12);
    let phi = Transform::forward(&x).apply(&q).unwrap();
    assert_abs_diff_eq!(wf_norm(&phi, k.dp()), 1.0, epsilon = 1e-8);
}

#[test]
fn momentum_kick_shifts_the_peak() {
    let x = XGrid::new(-10.0, 10.0, 512).unwrap();
    let k = x.dual();
    let p0 = 3.0;
    let q = gaussian(&x, 0.0, p0, 0.8);
    let phi = Transform::forward(&x).apply(&q).unwrap();
    let peak = phi.iter().enumerate()
        .max_by(|(_, a), (_, b)| a.norm().total_cmp(&b.norm()))
        .map(|(i, _)| i)
        .unwrap();
    assert!((k.point(peak) - p0).abs() <= k.dp());
    let mean_p = wf_dot(&phi, &momentum(&k).apply(&phi).unwrap(), k.dp());
    assert_abs_diff_eq!(mean_p.re, p0, epsilon = 1e-6);
    assert_abs_diff_eq!(mean_p.im, 0.0, epsilon = 1e-10);
}

#[test]
fn wrong_length_is_rejected() {
    let x = XGrid::new(-4.0, 4.0, 32).unwrap();
    let t = Transform::forward(&x);
    let q: nd::Array1<C64> = nd::Array1::zeros(16);
    let err = t.apply(&q).unwrap_err();
    assert_eq!((err.0, err.1), (32, 16));
}
