use approx::assert_abs_diff_eq;
use ndarray as nd;
use num_complex::Complex64 as C64;
use xkspace::{
    evolve::{ expectation, rk4, rk4_func },
    grid::XGrid,
    op::{ hamiltonian, position },
    utils::gaussian,
};

// H = p² + x² in units with ħ²/2m = 1: spectrum 2n + 1, ground state
// ∝ e^{-x²/2}, i.e. a Gaussian wavepacket with σ = 1/√2

#[test]
fn ground_state_is_an_eigenvector() {
    let x = XGrid::new(-8.0, 8.0, 128).unwrap();
    let h = hamiltonian(&x, |xk| xk * xk);
    let q0 = gaussian(&x, 0.0, 0.0, 0.5_f64.sqrt());
    let hq = h.apply(&q0).unwrap();
    // E₀ = 1 exactly
    let worst: f64 = hq.iter().zip(&q0)
        .map(|(a, b)| (a - b).norm())
        .fold(0.0, f64::max);
    assert!(worst < 1e-8, "worst residual {:e}", worst);
    let e0 = expectation(&h, &q0, x.dx()).unwrap();
    assert_abs_diff_eq!(e0.re, 1.0, epsilon = 1e-10);
    assert_abs_diff_eq!(e0.im, 0.0, epsilon = 1e-10);
}

#[test]
fn ground_state_density_is_stationary_under_rk4() {
    let x = XGrid::new(-8.0, 8.0, 128).unwrap();
    let h = hamiltonian(&x, |xk| xk * xk);
    let q0 = gaussian(&x, 0.0, 0.0, 0.5_f64.sqrt());
    let t: nd::Array1<f64> = nd::Array1::linspace(0.0, 0.5, 251);
    let q = rk4(&h, &q0, &t, x.dx()).unwrap();
    let last = q.slice(nd::s![t.len() - 1, ..]);
    let worst: f64 = last.iter().zip(&q0)
        .map(|(a, b)| (a.norm_sqr() - b.norm_sqr()).abs())
        .fold(0.0, f64::max);
    assert!(worst < 1e-6, "worst density drift {:e}", worst);
}

#[test]
fn displaced_packet_oscillates() {
    let x = XGrid::new(-8.0, 8.0, 128).unwrap();
    let h = hamiltonian(&x, |xk| xk * xk);
    let pos = position(&x);
    // level spacing is 2, so ⟨x⟩(t) = x₀ cos(2t)
    let x0 = 1.5;
    let q0 = gaussian(&x, x0, 0.0, 0.5_f64.sqrt());
    let t: nd::Array1<f64> = nd::Array1::linspace(0.0, 0.5, 501);
    let q = rk4(&h, &q0, &t, x.dx()).unwrap();
    for j in [0_usize, 250, 500] {
        let qj = q.slice(nd::s![j, ..]);
        let mean_x = expectation(&pos, &qj, x.dx()).unwrap();
        assert_abs_diff_eq!(
            mean_x.re, x0 * (2.0 * t[j]).cos(), epsilon = 1e-4);
    }
}

#[test]
fn rk4_func_matches_rk4_for_constant_hamiltonian() {
    let x = XGrid::new(-8.0, 8.0, 128).unwrap();
    let h = hamiltonian(&x, |xk| xk * xk);
    let q0 = gaussian(&x, 1.0, 0.0, 0.5_f64.sqrt());
    let t: nd::Array1<f64> = nd::Array1::linspace(0.0, 0.1, 51);
    let qa = rk4(&h, &q0, &t, x.dx()).unwrap();
    let qb = rk4_func(|_| h.clone(), &q0, &t, x.dx()).unwrap();
    let worst: f64 = qa.iter().zip(qb.iter())
        .map(|(a, b): (&C64, &C64)| (a - b).norm())
        .fold(0.0, f64::max);
    assert!(worst < 1e-12, "worst difference {:e}", worst);
}
