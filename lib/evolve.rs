//! Time evolution of grid-sampled states under lazily applied Hamiltonians.
//!
//! Integrates the time-dependent Schrödinger equation `dψ/dt = -i H ψ` with a
//! fourth-order Runge-Kutta scheme, calling [`Operator::apply`] for every
//! right-hand-side evaluation; a Hamiltonian assembled from `k` lazy terms
//! therefore costs `O(k n log n)` per stage. In all 2D output arrays the
//! first axis indexes time, with row 0 holding the initial state.
//!
//! Stability note: explicit RK4 requires `dt` small compared to the inverse
//! of the largest representable energy, roughly `(π/δx)² + max V` in the
//! units used here.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    error::OpResult,
    op::Operator,
    utils::{ wf_dot, wf_renormalize },
};

// perform the operation `a + v * b` succinctly
fn array_step<S, T>(a: &Arr1<S>, v: f64, b: &Arr1<T>) -> nd::Array1<C64>
where
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = C64>,
{
    nd::Zip::from(a).and(b)
        .map_collect(|ak, bk| ak + v * bk)
}

// return an array of differences between adjacent elements of a source array
fn array_diff<S, A>(a: &Arr1<S>) -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: std::ops::Sub<A, Output = A> + Copy,
{
    a.iter().zip(a.iter().skip(1))
        .map(|(ak, akp1)| *akp1 - *ak)
        .collect()
}

// evaluate the action of the Hamiltonian on the state `q` with an added
// factor of `-i`
fn rhs<S>(h: &Operator, q: &Arr1<S>) -> OpResult<nd::Array1<C64>>
where S: nd::Data<Elem = C64>
{
    let mut dq = h.apply(q)?;
    dq.map_inplace(|dqk| { *dqk *= -C64::i(); });
    Ok(dq)
}

// take a single RK4 step *in place*
//
// for this we need the Hamiltonian at three points in time:
// - h0: the current time
// - hh: the current time + dt/2
// - hp: the current time + dt
fn rk4_step<S>(
    h0: &Operator,
    hh: &Operator,
    hp: &Operator,
    q: &mut Arr1<S>,
    dt: f64,
) -> OpResult<()>
where S: nd::DataMut<Elem = C64>
{
    let k1 = rhs(h0, q)?;
    let k2 = rhs(hh, &array_step(q, dt / 2.0, &k1))?;
    let k3 = rhs(hh, &array_step(q, dt / 2.0, &k2))?;
    let k4 = rhs(hp, &array_step(q, dt, &k3))?;
    nd::Zip::from(q).and(&k1).and(&k2).and(&k3).and(&k4)
        .for_each(|qk, k1k, k2k, k3k, k4k| {
            *qk += dt / 6.0 * (k1k + 2.0 * (k2k + k3k) + k4k);
        });
    Ok(())
}

/// Perform fourth-order Runge-Kutta integration for a time-independent
/// Hamiltonian over a series of time coordinates, renormalizing after each
/// step.
///
/// See also [`rk4_func`].
pub fn rk4<S, T>(h: &Operator, q0: &Arr1<S>, t: &Arr1<T>, dx: f64)
    -> OpResult<nd::Array2<C64>>
where
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = f64>,
{
    let dt = array_diff(t);
    let mut q: nd::Array2<C64> = nd::Array2::zeros((t.len(), q0.len()));
    let mut q_temp: nd::Array1<C64> = q0.to_owned();
    q.slice_mut(nd::s![0, ..]).assign(q0);
    let iter = dt.iter().zip(q.axis_iter_mut(nd::Axis(0)).skip(1));
    for (&dtk, qkp1) in iter {
        rk4_step(h, h, h, &mut q_temp, dtk)?;
        wf_renormalize(&mut q_temp, dx);
        q_temp.clone().move_into(qkp1);
    }
    Ok(q)
}

/// Perform fourth-order Runge-Kutta integration for a time-dependent
/// Hamiltonian described by a function over a series of time coordinates,
/// renormalizing after each step.
///
/// See also [`rk4`].
pub fn rk4_func<F, S, T>(mut h: F, q0: &Arr1<S>, t: &Arr1<T>, dx: f64)
    -> OpResult<nd::Array2<C64>>
where
    F: FnMut(f64) -> Operator,
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = f64>,
{
    let dt = array_diff(t);
    let mut q: nd::Array2<C64> = nd::Array2::zeros((t.len(), q0.len()));
    let mut q_temp: nd::Array1<C64> = q0.to_owned();
    q.slice_mut(nd::s![0, ..]).assign(q0);
    let mut hk: Operator = h(t[0]);
    let iter = dt.iter().zip(t).zip(q.axis_iter_mut(nd::Axis(0)).skip(1));
    for ((&dtk, &tk), qkp1) in iter {
        let hkp1h = h(tk + dtk / 2.0);
        let hkp1 = h(tk + dtk);
        rk4_step(&hk, &hkp1h, &hkp1, &mut q_temp, dtk)?;
        wf_renormalize(&mut q_temp, dx);
        q_temp.clone().move_into(qkp1);
        hk = hkp1;
    }
    Ok(q)
}

/// Calculate the expectation value `⟨q|O|q⟩` of an operator in a state.
pub fn expectation<S>(op: &Operator, q: &Arr1<S>, dx: f64) -> OpResult<C64>
where S: nd::Data<Elem = C64>
{
    let oq = op.apply(q)?;
    Ok(wf_dot(q, &oq, dx))
}
