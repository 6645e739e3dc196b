//! Wavefunction helpers and miscellaneous tools.
//!
//! Norms and inner products here use the plain Riemann sum `Σ ... δx`; this is
//! the discretization the grid transform conserves exactly (Parseval), so a
//! state normalized with [`wf_renormalize`] stays normalized on either grid.

use ndarray::{ self as nd, Ix1, concatenate };
use num_complex::Complex64 as C64;
use num_traits::Num;
use rustfft as fft;
use std::f64::consts::TAU;
use crate::grid::XGrid;

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Num + Copy,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    let mid = y.slice(nd::s![1..n - 1]).iter()
        .fold(A::zero(), |acc, yk| acc + *yk);
    (dx / two) * (y[0] + two * mid + y[n - 1])
}

/// Calculate the norm of a wavefunction, `Σ |q[j]|² δx`.
pub fn wf_norm<S>(q: &nd::ArrayBase<S, Ix1>, dx: f64) -> f64
where S: nd::Data<Elem = C64>
{
    dx * q.iter().map(|qk| qk.norm_sqr()).sum::<f64>()
}

/// Calculate the inner product of two wavefunctions, `Σ q[j]* p[j] δx`.
pub fn wf_dot<S, T>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: f64,
) -> C64
where
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = C64>,
{
    dx * q.iter().zip(p).map(|(qk, pk)| qk.conj() * pk).sum::<C64>()
}

/// Renormalize a wavefunction in place.
pub fn wf_renormalize<S>(q: &mut nd::ArrayBase<S, Ix1>, dx: f64)
where S: nd::DataMut<Elem = C64>
{
    let norm = wf_norm(q, dx).sqrt();
    q.iter_mut().for_each(|qk| { *qk /= norm; });
}

/// Return a normalized copy of a wavefunction.
pub fn wf_normalized<S>(q: &nd::ArrayBase<S, Ix1>, dx: f64) -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    let norm = wf_norm(q, dx).sqrt();
    q.mapv(|qk| qk / norm)
}

/// Generate a normalized Gaussian wavepacket centered on `x0` with
/// position-space width `sigma` and mean momentum `p0`,
/// ```text
/// ψ(x) = (2π σ²)^{-1/4} exp(-(x - x0)²/4σ² + i p0 x)
/// ```
/// renormalized on the grid so that `Σ |ψ|² δx = 1` exactly.
pub fn gaussian(x: &XGrid, x0: f64, p0: f64, sigma: f64) -> nd::Array1<C64> {
    let amp = (TAU * sigma * sigma).powf(-0.25);
    let mut q: nd::Array1<C64>
        = x.points().mapv(|xk| {
            amp * (-(xk - x0).powi(2) / (4.0 * sigma * sigma)).exp()
                * C64::cis(p0 * xk)
        });
    wf_renormalize(&mut q, x.dx());
    q
}

/// Generate an array of frequency-space coordinates to accompany a FFT of `n`
/// points for sampling interval `dt`, in the FFT's native zero-first ordering.
///
/// Frequencies are in cycles, not radians; the shifted radian grid
/// `2π · fft_shift(fft_freq(n, δx))` coincides with the samples of the dual
/// momentum grid for even `n`.
pub fn fft_freq(n: usize, dt: f64) -> nd::Array1<f64> {
    if n % 2 == 0 {
        let fp: nd::Array1<f64>
            = (0..n / 2)
            .map(|k| k as f64 / (n as f64 * dt))
            .collect();
        let fm: nd::Array1<f64>
            = (1..n / 2 + 1).rev()
            .map(|k| -(k as f64) / (n as f64 * dt))
            .collect();
        concatenate!(nd::Axis(0), fp, fm)
    } else {
        let fp: nd::Array1<f64>
            = (0..(n + 1) / 2)
            .map(|k| k as f64 / (n as f64 * dt))
            .collect();
        let fm: nd::Array1<f64>
            = (1..(n + 1) / 2).rev()
            .map(|k| -(k as f64) / (n as f64 * dt))
            .collect();
        concatenate!(nd::Axis(0), fp, fm)
    }
}

/// Perform the one-dimensional, complex-valued FFT.
pub fn fft<S>(x: &nd::ArrayBase<S, Ix1>) -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    let mut f = x.to_owned();
    fft_inplace(&mut f);
    f
}

/// Perform the one-dimensional, complex-valued FFT in place.
pub fn fft_inplace<S>(f: &mut nd::ArrayBase<S, Ix1>)
where S: nd::DataMut<Elem = C64>
{
    let n: usize = f.len();
    let mut plan = fft::FftPlanner::new();
    let fft_plan = plan.plan_fft_forward(n);
    fft_plan.process(f.as_slice_mut().unwrap());
}

/// Perform the one-dimensional, complex-valued inverse FFT.
pub fn ifft<S>(f: &nd::ArrayBase<S, Ix1>) -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    let mut x = f.to_owned();
    ifft_inplace(&mut x);
    x
}

/// Perform the one-dimensional, complex-valued inverse FFT in place.
///
/// Carries the `1/n` normalization, so [`ifft`]∘[`fft`] is the identity.
pub fn ifft_inplace<S>(x: &mut nd::ArrayBase<S, Ix1>)
where S: nd::DataMut<Elem = C64>
{
    let n: usize = x.len();
    let mut plan = fft::FftPlanner::new();
    let ifft_plan = plan.plan_fft_inverse(n);
    ifft_plan.process(x.as_slice_mut().unwrap());
    let n = n as f64;
    x.map_inplace(|xk| { *xk /= n; });
}

/// Return a copy of `x` with indices shifted to map super-Nyquist frequency
/// components to negative frequencies.
pub fn fft_shift<S, A>(x: &nd::ArrayBase<S, Ix1>) -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: Clone,
{
    let n = x.len();
    let (p, m)
        = if n % 2 == 0 {
            x.view().split_at(nd::Axis(0), n / 2)
        } else {
            x.view().split_at(nd::Axis(0), n / 2 + 1)
        };
    concatenate!(nd::Axis(0), m.into_owned(), p.into_owned())
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use super::*;

    #[test]
    fn ifft_undoes_fft() {
        let x: nd::Array1<C64>
            = (0..12)
            .map(|j| C64::new((j as f64).sin(), 0.25 * j as f64))
            .collect();
        let back = ifft(&fft(&x));
        assert!(x.iter().zip(&back).all(|(a, b)| (a - b).norm() < 1e-12));
        let mut inplace = x.clone();
        fft_inplace(&mut inplace);
        ifft_inplace(&mut inplace);
        assert!(x.iter().zip(&inplace).all(|(a, b)| (a - b).norm() < 1e-12));
    }

    #[test]
    fn fft_freq_ordering() {
        let even = fft_freq(4, 1.0);
        for (f, expected) in even.iter().zip([0.0, 0.25, -0.5, -0.25]) {
            assert_abs_diff_eq!(*f, expected, epsilon = 1e-15);
        }
        let odd = fft_freq(5, 1.0);
        for (f, expected) in odd.iter().zip([0.0, 0.2, 0.4, -0.4, -0.2]) {
            assert_abs_diff_eq!(*f, expected, epsilon = 1e-15);
        }
    }

    #[test]
    fn fft_shift_reorders_halves() {
        let even: nd::Array1<i32> = nd::array![0, 1, 2, 3];
        assert_eq!(fft_shift(&even), nd::array![2, 3, 0, 1]);
        let odd: nd::Array1<i32> = nd::array![0, 1, 2, 3, 4];
        assert_eq!(fft_shift(&odd), nd::array![3, 4, 0, 1, 2]);
    }

    #[test]
    fn trapz_linear_exact() {
        let y: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 11);
        assert_abs_diff_eq!(trapz(&y, 0.1), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn gaussian_is_normalized() {
        let x = XGrid::new(-10.0, 10.0, 256).unwrap();
        let q = gaussian(&x, 0.5, 3.0, 0.8);
        assert_abs_diff_eq!(wf_norm(&q, x.dx()), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn renormalize_matches_normalized() {
        let x = XGrid::new(-6.0, 6.0, 64).unwrap();
        let mut q = gaussian(&x, 0.0, 0.0, 1.0);
        q.iter_mut().for_each(|qk| { *qk *= 3.0; });
        let r = wf_normalized(&q, x.dx());
        wf_renormalize(&mut q, x.dx());
        assert!(q.iter().zip(&r).all(|(a, b)| (a - b).norm() < 1e-12));
        assert_abs_diff_eq!(wf_norm(&q, x.dx()), 1.0, epsilon = 1e-12);
    }
}
