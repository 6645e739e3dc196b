//! Conjugate position/momentum sampling grids.
//!
//! An [`XGrid`] truncates the particle's position axis to `n` evenly spaced
//! samples on the half-open interval `[x_min, x_max)`,
//! ```text
//! x[j] = x_min + j δx,    δx = (x_max - x_min) / n,    j ∊ {0, ..., n - 1}
//! ```
//! Its conjugate [`KGrid`] is derived deterministically through
//! [`XGrid::dual`] and never constructed independently: it spans
//! `[-π/δx, +π/δx)` with the same point count and the same half-open
//! convention, so `δp δx = 2π/n` exactly. Both grids are small copyable
//! descriptors with no mutable state and are freely shareable across threads.

use std::f64::consts::PI;
use ndarray as nd;
use crate::error::InvalidDomainError;

/// Evenly spaced position samples covering `[x_min, x_max)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct XGrid {
    x_min: f64,
    x_max: f64,
    n: usize,
}

impl XGrid {
    /// Construct a grid of `n` samples on `[x_min, x_max)`.
    ///
    /// Fails if `n == 0` or `x_min >= x_max` (including non-finite bounds).
    pub fn new(x_min: f64, x_max: f64, n: usize)
        -> Result<Self, InvalidDomainError>
    {
        InvalidDomainError::check(x_min, x_max, n)?;
        Ok(Self { x_min, x_max, n })
    }

    /// Number of sample points.
    pub fn n(&self) -> usize { self.n }

    /// Lower bound; equal to the first sample point.
    pub fn x_min(&self) -> f64 { self.x_min }

    /// Upper bound; excluded from the samples.
    pub fn x_max(&self) -> f64 { self.x_max }

    /// Sample spacing `(x_max - x_min) / n`.
    pub fn dx(&self) -> f64 { (self.x_max - self.x_min) / self.n as f64 }

    /// The `j`-th sample point, `x_min + j δx`.
    pub fn point(&self, j: usize) -> f64 {
        self.x_min + j as f64 * self.dx()
    }

    /// All sample points as an owned array.
    pub fn points(&self) -> nd::Array1<f64> {
        (0..self.n).map(|j| self.point(j)).collect()
    }

    /// Derive the conjugate momentum grid.
    pub fn dual(&self) -> KGrid {
        let p_max = PI / self.dx();
        KGrid { p_min: -p_max, p_max, n: self.n }
    }
}

/// Evenly spaced momentum samples covering `[-π/δx, +π/δx)`, derived from an
/// [`XGrid`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KGrid {
    p_min: f64,
    p_max: f64,
    n: usize,
}

impl KGrid {
    /// Number of sample points.
    pub fn n(&self) -> usize { self.n }

    /// Lower bound; equal to the first sample point.
    pub fn p_min(&self) -> f64 { self.p_min }

    /// Upper bound; excluded from the samples.
    pub fn p_max(&self) -> f64 { self.p_max }

    /// Sample spacing `2π / (n δx)`.
    pub fn dp(&self) -> f64 { (self.p_max - self.p_min) / self.n as f64 }

    /// The `k`-th sample point, `p_min + k δp`.
    pub fn point(&self, k: usize) -> f64 {
        self.p_min + k as f64 * self.dp()
    }

    /// All sample points as an owned array.
    pub fn points(&self) -> nd::Array1<f64> {
        (0..self.n).map(|k| self.point(k)).collect()
    }
}
