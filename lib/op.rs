//! Lazily applied operators over grid-sampled state vectors.
//!
//! Operators form a closed variant type, [`Operator`]: a diagonal multiplier,
//! the position↔momentum transform, or a sum/product of other operators.
//! Application is a single pattern match — no dense matrix is ever
//! materialized, so a product of `k` terms applied to a length-`n` state
//! costs `O(k n log n)` at worst (`O(k n)` for purely diagonal terms).
//!
//! Composites hold their constituent data behind [`Arc`], so cloning an
//! operator or assembling it into a larger composite never copies diagonal
//! elements or FFT plans, and every operator is freely shareable across
//! threads.

use std::{ f64::consts::TAU, fmt, sync::Arc };
use ndarray as nd;
use num_complex::Complex64 as C64;
use rustfft::{ Fft, FftPlanner };
use crate::{
    Arr1,
    error::{ DimensionMismatchError, EmptyCompositeError, OpResult },
    grid::{ KGrid, XGrid },
};

/// An operator diagonal in whichever grid its state vectors are expressed on;
/// application is elementwise multiplication.
#[derive(Clone, Debug)]
pub struct Diagonal {
    elems: Arc<nd::Array1<C64>>,
}

impl Diagonal {
    /// Construct from raw complex multipliers.
    pub fn new(elems: nd::Array1<C64>) -> Self {
        Self { elems: Arc::new(elems) }
    }

    /// Construct from real multipliers, promoted to complex.
    pub fn from_real<S>(elems: &Arr1<S>) -> Self
    where S: nd::Data<Elem = f64>
    {
        Self::new(elems.mapv(C64::from))
    }

    /// Construct by sampling a real-valued function over a grid's points;
    /// the usual route for potentials and functions of momentum.
    pub fn from_fn<S, F>(points: &Arr1<S>, mut f: F) -> Self
    where
        S: nd::Data<Elem = f64>,
        F: FnMut(f64) -> f64,
    {
        Self::new(points.mapv(|xk| C64::from(f(xk))))
    }

    /// The position operator: multiplier `x[j]` at index `j`.
    ///
    /// Diagonal in the position grid.
    pub fn position(x: &XGrid) -> Self {
        Self::from_real(&x.points())
    }

    /// The momentum operator: multiplier `p[k]` at index `k`.
    ///
    /// Diagonal in the momentum grid.
    pub fn momentum(k: &KGrid) -> Self {
        Self::from_real(&k.points())
    }

    /// Dimension of the state vectors this operator acts on.
    pub fn len(&self) -> usize { self.elems.len() }

    /// Whether the multiplier vector is empty.
    pub fn is_empty(&self) -> bool { self.elems.is_empty() }

    /// Read access to the multipliers.
    pub fn elems(&self) -> &nd::Array1<C64> { &self.elems }

    /// The adjoint: elementwise complex conjugate.
    pub fn conj(&self) -> Self {
        Self::new(self.elems.mapv(|d| d.conj()))
    }

    /// Apply to a state vector, returning a new vector.
    pub fn apply<S>(&self, q: &Arr1<S>)
        -> Result<nd::Array1<C64>, DimensionMismatchError>
    where S: nd::Data<Elem = C64>
    {
        DimensionMismatchError::check(self.elems.len(), q.len())?;
        let res = nd::Zip::from(self.elems.as_ref()).and(q)
            .map_collect(|dk, qk| dk * qk);
        Ok(res)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Inverse,
}

/// The stateless linear map between a state vector sampled on an [`XGrid`]
/// and the equivalent vector on its dual [`KGrid`].
///
/// The forward map is a discrete Fourier transform scaled by `δx/√(2π)` and
/// corrected by the linear phase accounting for the offset of `x_min` and
/// `p_min` from the FFT's implicit zero-indexed origin:
/// ```text
/// φ[k] = (δx/√(2π)) e^{-i x_min p[k]} Σ_j (-1)^j ψ[j] e^{-2πijk/n}
/// ```
/// (see [`docs`][crate::docs] for the derivation). With this scaling the
/// discrete norm is conserved exactly, `Σ|φ|² δp = Σ|ψ|² δx`, and the inverse
/// — the adjoint with respect to the grid-weighted inner products — is the
/// same map with conjugated phases and prefactor `δp/√(2π)`.
///
/// FFT plans are made once at construction and shared behind [`Arc`];
/// application allocates only the output vector and costs `O(n log n)`.
#[derive(Clone)]
pub struct Transform {
    n: usize,
    dx: f64,
    dp: f64,
    x_min: f64,
    p_min: f64,
    dir: Direction,
    fwd: Arc<dyn Fft<f64>>,
    inv: Arc<dyn Fft<f64>>,
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("n", &self.n)
            .field("dx", &self.dx)
            .field("dir", &self.dir)
            .finish_non_exhaustive()
    }
}

impl Transform {
    /// The position-to-momentum map for a grid and its dual.
    pub fn forward(x: &XGrid) -> Self {
        let k = x.dual();
        let mut plan = FftPlanner::new();
        let fwd = plan.plan_fft_forward(x.n());
        let inv = plan.plan_fft_inverse(x.n());
        Self {
            n: x.n(),
            dx: x.dx(),
            dp: k.dp(),
            x_min: x.x_min(),
            p_min: k.p_min(),
            dir: Direction::Forward,
            fwd,
            inv,
        }
    }

    /// The momentum-to-position map for a grid and its dual.
    pub fn inverse(x: &XGrid) -> Self {
        Self::forward(x).adjoint()
    }

    /// Dimension of the state vectors this operator acts on.
    pub fn n(&self) -> usize { self.n }

    /// The adjoint map, which is also the inverse: the transform is unitary
    /// with respect to the `δx`- and `δp`-weighted inner products.
    pub fn adjoint(&self) -> Self {
        let dir = match self.dir {
            Direction::Forward => Direction::Inverse,
            Direction::Inverse => Direction::Forward,
        };
        Self { dir, ..self.clone() }
    }

    /// Apply to a state vector, returning a new vector on the other grid.
    pub fn apply<S>(&self, q: &Arr1<S>)
        -> Result<nd::Array1<C64>, DimensionMismatchError>
    where S: nd::Data<Elem = C64>
    {
        DimensionMismatchError::check(self.n, q.len())?;
        let mut buf = q.to_owned();
        match self.dir {
            Direction::Forward => {
                // (-1)^j is the phase e^{-i p_min x[j]} relative to x_min,
                // since p_min δx = -π exactly
                buf.iter_mut().skip(1).step_by(2)
                    .for_each(|b| { *b = -*b; });
                self.fwd.process(buf.as_slice_mut().unwrap());
                let scale = self.dx / TAU.sqrt();
                buf.iter_mut().enumerate()
                    .for_each(|(k, b)| {
                        let pk = self.p_min + k as f64 * self.dp;
                        *b *= scale * C64::cis(-self.x_min * pk);
                    });
            }
            Direction::Inverse => {
                buf.iter_mut().enumerate()
                    .for_each(|(k, b)| {
                        let pk = self.p_min + k as f64 * self.dp;
                        *b *= C64::cis(self.x_min * pk);
                    });
                self.inv.process(buf.as_slice_mut().unwrap());
                let scale = self.dp / TAU.sqrt();
                buf.iter_mut().enumerate()
                    .for_each(|(j, b)| {
                        let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                        *b *= sign * scale;
                    });
            }
        }
        Ok(buf)
    }
}

/// A grid operator: a diagonal multiplier, the position↔momentum transform,
/// or a lazy sum/product of other operators.
///
/// Prefer [`Operator::sum`] and [`Operator::product`] over building the
/// composite variants by hand; the constructors reject empty sums and
/// dimension disagreements eagerly.
#[derive(Clone, Debug)]
pub enum Operator {
    Diagonal(Diagonal),
    Transform(Transform),
    Sum(Vec<Operator>),
    Product(Vec<Operator>),
}

impl From<Diagonal> for Operator {
    fn from(d: Diagonal) -> Self { Self::Diagonal(d) }
}

impl From<Transform> for Operator {
    fn from(t: Transform) -> Self { Self::Transform(t) }
}

fn check_dims(terms: &[Operator]) -> Result<(), DimensionMismatchError> {
    let mut dims = terms.iter().filter_map(|term| term.dim());
    if let Some(n0) = dims.next() {
        for n in dims {
            DimensionMismatchError::check(n0, n)?;
        }
    }
    Ok(())
}

impl Operator {
    /// A lazy sum: applied to a state, each term acts on the same input and
    /// the results are added elementwise.
    ///
    /// Fails on an empty term list or on terms of disagreeing dimension.
    pub fn sum(terms: Vec<Operator>) -> OpResult<Self> {
        if terms.is_empty() { return Err(EmptyCompositeError.into()); }
        check_dims(&terms)?;
        Ok(Self::Sum(terms))
    }

    /// A lazy product: applied to a state, terms act right-to-left, so for
    /// terms `[A, B, C]` the result is `A(B(C(ψ)))`.
    ///
    /// An empty term list is the identity. Fails on terms of disagreeing
    /// dimension.
    pub fn product(terms: Vec<Operator>) -> OpResult<Self> {
        check_dims(&terms)?;
        Ok(Self::Product(terms))
    }

    /// The identity operator on vectors of any length.
    pub fn identity() -> Self {
        Self::Product(Vec::new())
    }

    /// Dimension of the state vectors this operator acts on, or `None` if it
    /// acts on any length (the bare identity).
    pub fn dim(&self) -> Option<usize> {
        match self {
            Self::Diagonal(d) => Some(d.len()),
            Self::Transform(t) => Some(t.n()),
            Self::Sum(terms) | Self::Product(terms)
                => terms.iter().find_map(|term| term.dim()),
        }
    }

    /// The adjoint with respect to the grid-weighted inner products:
    /// conjugated diagonals, inverted transforms, and reversed products.
    pub fn dagger(&self) -> Self {
        match self {
            Self::Diagonal(d) => Self::Diagonal(d.conj()),
            Self::Transform(t) => Self::Transform(t.adjoint()),
            Self::Sum(terms)
                => Self::Sum(terms.iter().map(Self::dagger).collect()),
            Self::Product(terms)
                => Self::Product(
                    terms.iter().rev().map(Self::dagger).collect()),
        }
    }

    /// Apply to a state vector, returning a new vector.
    ///
    /// Fails if the input length disagrees with the operator's dimension, or
    /// if a degenerate empty sum is encountered.
    pub fn apply<S>(&self, q: &Arr1<S>) -> OpResult<nd::Array1<C64>>
    where S: nd::Data<Elem = C64>
    {
        match self {
            Self::Diagonal(d) => Ok(d.apply(q)?),
            Self::Transform(t) => Ok(t.apply(q)?),
            Self::Sum(terms) => {
                let (first, rest)
                    = terms.split_first().ok_or(EmptyCompositeError)?;
                let mut acc = first.apply(q)?;
                for term in rest {
                    acc += &term.apply(q)?;
                }
                Ok(acc)
            }
            Self::Product(terms) => {
                let mut cur: nd::Array1<C64> = q.to_owned();
                for term in terms.iter().rev() {
                    cur = term.apply(&cur)?;
                }
                Ok(cur)
            }
        }
    }
}

/// The position operator as an [`Operator`], diagonal in the position grid.
pub fn position(x: &XGrid) -> Operator {
    Operator::Diagonal(Diagonal::position(x))
}

/// The momentum operator as an [`Operator`], diagonal in the momentum grid.
pub fn momentum(k: &KGrid) -> Operator {
    Operator::Diagonal(Diagonal::momentum(k))
}

/// The kinetic-energy operator `T⁻¹ diag(p²) T` in units with `ħ²/2m = 1`.
pub fn kinetic(x: &XGrid) -> Operator {
    let k = x.dual();
    let t = Transform::forward(x);
    let p2 = Diagonal::from_fn(&k.points(), |pk| pk * pk);
    Operator::Product(vec![
        Operator::Transform(t.adjoint()),
        Operator::Diagonal(p2),
        Operator::Transform(t),
    ])
}

/// A potential-energy operator, diagonal in the position grid.
pub fn potential<F>(x: &XGrid, v: F) -> Operator
where F: Fn(f64) -> f64
{
    Operator::Diagonal(Diagonal::from_fn(&x.points(), v))
}

/// The full Hamiltonian `T⁻¹ diag(p²) T + diag(V(x))` for a conservative
/// potential, in units with `ħ²/2m = 1`.
pub fn hamiltonian<F>(x: &XGrid, v: F) -> Operator
where F: Fn(f64) -> f64
{
    Operator::Sum(vec![kinetic(x), potential(x, v)])
}
