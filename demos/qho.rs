use std::f64::consts::PI;
use ndarray as nd;
use xkspace::{ evolve, grid::XGrid, op, utils };

// coherent-state oscillation in a harmonic trap

fn main() {
    let x = XGrid::new(-10.0, 10.0, 256).unwrap();
    let h = op::hamiltonian(&x, |xk| xk * xk);

    // displaced ground-state wavepacket; H = p² + x² has level spacing 2, so
    // ⟨x⟩(t) = x₀ cos(2t) with period π
    const X0: f64 = 2.5;
    let q0 = utils::gaussian(&x, X0, 0.0, 0.5_f64.sqrt());
    let t: nd::Array1<f64> = nd::Array1::linspace(0.0, PI, 4001);
    let q = evolve::rk4(&h, &q0, &t, x.dx()).unwrap();

    let xpts = x.points();
    println!("{:>8}  {:>10}  {:>10}", "t", "<x>", "expected");
    for j in (0..t.len()).step_by(500) {
        let qj = q.slice(nd::s![j, ..]);
        let weighted = nd::Zip::from(&xpts).and(&qj)
            .map_collect(|xk, qk| xk * qk.norm_sqr());
        let mean_x = utils::trapz(&weighted, x.dx());
        println!(
            "{:8.4}  {:+10.6}  {:+10.6}",
            t[j], mean_x, X0 * (2.0 * t[j]).cos(),
        );
    }
}
