//! Finite-grid representation of one-dimensional quantum Hamiltonians via the
//! split-operator / pseudo-spectral method.
//!
//! A particle's continuous Hilbert space is truncated to `n` evenly spaced
//! position samples ([`grid::XGrid`]), paired with the conjugate momentum grid
//! ([`grid::KGrid`]) reached through a scaled, phase-corrected discrete Fourier
//! transform. Operators are built as a closed variant type ([`op::Operator`])
//! whose sums and products are applied lazily, term by term, so that a
//! kinetic-plus-potential Hamiltonian costs `O(n log n)` per application and
//! no dense matrix is ever formed.
//!
//! The typical construction is
//! ```text
//! H = T⁻¹ diag(p²) T + diag(V(x))
//! ```
//! with `T` the position-to-momentum transform; see [`op::hamiltonian`].
//! Energies are expressed in units with `ħ²/2m = 1` (see [`docs`]).
//!
//! ```
//! use xkspace::{ grid::XGrid, op, utils };
//!
//! let x = XGrid::new(-8.0, 8.0, 128).unwrap();
//! let h = op::hamiltonian(&x, |xk| xk * xk);
//! // the ground state of p² + x² has energy exactly 1
//! let q0 = utils::gaussian(&x, 0.0, 0.0, 0.5_f64.sqrt());
//! let hq = h.apply(&q0).unwrap();
//! assert!(hq.iter().zip(&q0).all(|(a, b)| (a - b).norm() < 1e-8));
//! ```

pub mod error;
pub mod grid;
pub mod op;
pub mod utils;
pub mod evolve;

pub mod docs;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
