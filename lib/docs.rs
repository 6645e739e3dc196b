//! Theoretical background.
//!
//! # Contents
//! - [Grids](#grids)
//! - [The transform and its phase convention](#the-transform-and-its-phase-convention)
//! - [Units](#units)
//!
//! # Grids
//! The particle's position axis is truncated to `n` evenly spaced samples
//! ```text
//! x[j] = x_min + j δx,    δx = (x_max - x_min) / n,    j ∊ {0, ..., n - 1}
//! ```
//! on the half-open interval `[x_min, x_max)`. The conjugate momentum grid
//! mirrors this convention exactly:
//! ```text
//! p[k] = p_min + k δp,    p_min = -π/δx,    δp = 2π/(n δx)
//! ```
//! so `δp δx = 2π/n` and `p_min δx = -π` hold as identities for every grid,
//! regardless of the parity of `n`. These two identities are all the
//! transform below relies on.
//!
//! # The transform and its phase convention
//! The forward map from position to momentum samples is the Riemann
//! discretization of the continuum Fourier transform,
//! ```text
//! φ[k] = (δx/√(2π)) Σ_j ψ[j] e^{-i p[k] x[j]}
//! ```
//! Expanding `p[k] x[j]` with the grid identities factors this into a plain
//! zero-origin DFT bracketed by two diagonal phases:
//! ```text
//! e^{-i p[k] x[j]} = e^{-i x_min p[k]} · (-1)^j · e^{-2πijk/n}
//! ```
//! where `(-1)^j` is the pre-phase `e^{-i p_min (x[j] - x_min)}` (using
//! `p_min δx = -π`) and `e^{-i x_min p[k]}` is the post-phase correcting for
//! the offset of `x_min` from the FFT's implicit zero-indexed origin. The
//! inverse map conjugates both phases and carries prefactor `δp/√(2π)`.
//!
//! Two properties pin the convention down and are what the test suite
//! verifies, rather than any particular library's internal indexing:
//! - **Round trip**: the composition of the two maps is the identity, since
//!   `(δx δp n)/2π = 1`.
//! - **Norm conservation** (discrete Parseval):
//!   `Σ_k |φ[k]|² δp = Σ_j |ψ[j]|² δx` exactly, so the transform is unitary
//!   with respect to the `δx`- and `δp`-weighted inner products and its
//!   adjoint under those products coincides with its inverse.
//!
//! # Units
//! All operators are expressed in natural units with `ħ²/2m = 1`: the kinetic
//! operator is `diag(p²)` in the momentum grid and the Schrödinger equation
//! reads `dψ/dt = -i (p² + V(x)) ψ`. For a harmonic potential `V = x²` the
//! spectrum is `E_n = 2n + 1` with ground state `∝ e^{-x²/2}`. To work from
//! laboratory quantities, pick a length scale `a` and divide energies by
//! `ħ²/2ma²` and times by `ħ/(ħ²/2ma²)` before building grids and potentials.
