// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ops::{Add, Mul};

use num_traits::{Float, One, Zero};

use crate::imp_prelude::*;
use crate::{LinalgScalar, Matrix, Vector};

/// Create an [**`Array`**](struct.Array.html) with one, two or
/// three dimensions.
///
/// ```
/// use arraymath::array;
/// let a1 = array![1, 2, 3, 4];
///
/// let a2 = array![[1, 2],
///                 [3, 4]];
///
/// let a3 = array![[[1, 2], [3, 4]],
///                 [[5, 6], [7, 8]]];
///
/// assert_eq!(a1.shape(), &[4]);
/// assert_eq!(a2.shape(), &[2, 2]);
/// assert_eq!(a3.shape(), &[2, 2, 2]);
/// ```
///
/// This macro uses `vec![]`, and has the same ownership semantics;
/// elements are moved into the resulting `Array`. Rows of different
/// lengths do not compile; use [`Array::from_nested`] for input whose
/// shape is only known at run time.
#[macro_export]
macro_rules! array {
    ($([$([$($x:expr),* $(,)*]),+ $(,)*]),+ $(,)*) => {{
        $crate::Array::from_planes(vec![$([$([$($x,)*],)*],)*])
    }};
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::Array::from_rows(vec![$([$($x,)*],)*])
    }};
    ($($x:expr),* $(,)*) => {{
        $crate::Array::from_vec(vec![$($x,)*])
    }};
}

/// Create a zero-dimensional array with the element `x`.
pub fn arr0<A>(x: A) -> Array<A> {
    Array::from_parts(Vec::new(), vec![x])
}

/// Create a one-dimensional array with elements from `xs`.
pub fn arr1<A: Clone>(xs: &[A]) -> Array<A> {
    Array::from_vec(xs.to_vec())
}

/// Create a two-dimensional array with elements from `xs`.
///
/// ```
/// use arraymath::arr2;
///
/// let a = arr2(&[[1, 2, 3],
///                [4, 5, 6]]);
/// assert!(
///     a.shape() == [2, 3]
/// );
/// ```
pub fn arr2<A: Clone, const N: usize>(xs: &[[A; N]]) -> Array<A> {
    Array::from_rows(xs.to_vec())
}

/// Sum `a` along `axes`; no axes sums everything into a zero-dimensional
/// array.
///
/// ```
/// use arraymath::{array, sum, Axis};
///
/// let a = array![[1, 2, 3], [4, 5, 6]];
/// assert_eq!(sum(&a, &[]).unwrap().item(), Ok(21));
/// assert_eq!(sum(&a, &[Axis(0)]).unwrap(), array![5, 7, 9]);
/// ```
pub fn sum<A>(a: &Array<A>, axes: &[Axis]) -> Result<Array<A>, ShapeError>
where
    A: Clone + Add<Output = A> + Zero,
{
    a.sum_axes(axes)
}

/// Multiply `a` along `axes` (see [`sum`]).
pub fn prod<A>(a: &Array<A>, axes: &[Axis]) -> Result<Array<A>, ShapeError>
where
    A: Clone + Mul<Output = A> + One,
{
    a.prod_axes(axes)
}

/// Minimum of `a` along `axes` (see [`sum`]).
///
/// **Errors** with `ErrorKind::EmptyReduction` when there is nothing to
/// compare.
pub fn min<A>(a: &Array<A>, axes: &[Axis]) -> Result<Array<A>, ShapeError>
where
    A: Clone + PartialOrd,
{
    a.min_axes(axes)
}

/// Maximum of `a` along `axes` (see [`min`]).
pub fn max<A>(a: &Array<A>, axes: &[Axis]) -> Result<Array<A>, ShapeError>
where
    A: Clone + PartialOrd,
{
    a.max_axes(axes)
}

/// Whether any element along `axes` is nonzero.
pub fn any<A: Zero>(a: &Array<A>, axes: &[Axis]) -> Result<Array<bool>, ShapeError> {
    a.any_axes(axes)
}

/// Whether every element along `axes` is nonzero.
pub fn all<A: Zero>(a: &Array<A>, axes: &[Axis]) -> Result<Array<bool>, ShapeError> {
    a.all_axes(axes)
}

/// Euclidean length of `v`.
pub fn length<A: Float>(v: &Vector<A>) -> A {
    v.length()
}

/// Euclidean distance between `a` and `b`.
pub fn dist<A: Float>(a: &Vector<A>, b: &Vector<A>) -> Result<A, ShapeError> {
    a.distance_to(b)
}

/// Dot product of `a` and `b`.
pub fn dot<A: LinalgScalar>(a: &Vector<A>, b: &Vector<A>) -> Result<A, ShapeError> {
    a.dot(b)
}

/// Cross product of two vectors of length 3.
pub fn cross<A: LinalgScalar>(a: &Vector<A>, b: &Vector<A>) -> Result<Vector<A>, ShapeError> {
    a.cross(b)
}

/// Outer product of `a` and `b`.
pub fn outer<A: LinalgScalar>(a: &Vector<A>, b: &Vector<A>) -> Matrix<A> {
    a.outer(b)
}

macro_rules! float_functions {
    ($($id:ident)+) => {
        $(
        #[doc = concat!("Apply `", stringify!($id), "` to each element of `a`.")]
        pub fn $id<A: 'static + Float>(a: &Array<A>) -> Array<A> {
            a.$id()
        }
        )+
    };
}

float_functions! {
    floor ceil round trunc fract signum recip sqrt exp exp2 ln log2 log10 cbrt
    sin cos tan asin acos atan sinh cosh tanh to_degrees to_radians
}

/// Raise each element of `a` to the integer power `n`.
pub fn powi<A: 'static + Float>(a: &Array<A>, n: i32) -> Array<A> {
    a.powi(n)
}

/// Raise each element of `a` to the float power `n`.
pub fn powf<A: 'static + Float>(a: &Array<A>, n: A) -> Array<A> {
    a.powf(n)
}

/// Raise each element of `a` to the matching element of `b`, filling the
/// smaller operand by repetition.
pub fn pow<A: 'static + Float>(a: &Array<A>, b: &Array<A>) -> Result<Array<A>, ShapeError> {
    a.pow(b)
}

/// Limit each element of `a` to `min..=max`.
pub fn clamp<A: 'static + Float>(a: &Array<A>, min: A, max: A) -> Array<A> {
    a.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;

    #[test]
    fn reductions_over_axes() {
        let a = array![[1, 2, 3], [4, 5, 6]];
        assert_eq!(sum(&a, &[Axis(1)]).unwrap(), array![6, 15]);
        assert_eq!(prod(&a, &[Axis(0)]).unwrap(), array![4, 10, 18]);
        assert_eq!(max(&a, &[]).unwrap().item(), Ok(6));
        assert_eq!(any(&a, &[Axis(0)]).unwrap(), array![true, true, true]);
        let e = Array::<i32>::zeros(&[0, 3]);
        assert_eq!(min(&e, &[Axis(0)]).unwrap_err().kind(), ErrorKind::EmptyReduction);
    }

    #[test]
    fn maths_wrappers() {
        let a = array![0., 4., 9.];
        assert_eq!(sqrt(&a), array![0., 2., 3.]);
        assert_eq!(clamp(&a, 1., 5.), array![1., 4., 5.]);
        assert_eq!(powi(&a, 2), array![0., 16., 81.]);
    }
}
