// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! One-dimensional arrays.
use std::iter::FromIterator;
use std::ops::{BitXor, Mul};

use num_traits::{Float, Zero};

use crate::error::check_ndim;
use crate::imp_prelude::*;
use crate::impl_ops::or_panic;
use crate::linalg_traits::NdFloat;
use crate::nested::IntoNested;
use crate::{LinalgScalar, Matrix, ScalarOperand};

fixed_ndim_array! {
    /// A one-dimensional array.
    ///
    /// `Vector` derefs to [`Array`] for everything that reads; the methods
    /// that would change the number of dimensions are replaced by checked
    /// versions that fail with `ErrorKind::FixedDimensionality`.
    ///
    /// Between two vectors, `*` is the dot product and `^` the cross
    /// product. A vector times a [`Matrix`] (on either side) is a matrix
    /// transform, and `v ^ m` transforms `v` as a normal. Every other
    /// operator is element-wise as for `Array`.
    ///
    /// ```
    /// use arraymath::Vector;
    ///
    /// let x = Vector::from_vec(vec![1., 0., 0.]);
    /// let y = Vector::from_vec(vec![0., 1., 0.]);
    /// assert_eq!(&x * &y, 0.);
    /// assert_eq!(&x ^ &y, Vector::from_vec(vec![0., 0., 1.]));
    /// ```
    Vector, 1, "vector"
}

impl_fixed_elementwise_ops!(Vector; Add add, Sub sub, Div div, Rem rem);
impl_fixed_assign_ops!(Vector; AddAssign add_assign, SubAssign sub_assign, MulAssign mul_assign,
                       DivAssign div_assign, RemAssign rem_assign);

fn arity<A>(what: &str, a: &Vector<A>, b: &Vector<A>) -> ShapeError {
    ShapeError::with_context(
        ErrorKind::Arity,
        format!("{} of vectors of length {} and {}", what, a.len(), b.len()),
    )
}

/// # Methods For Vectors
impl<A> Vector<A> {
    /// Create a vector from a `Vec` (no copying needed).
    pub fn from_vec(v: Vec<A>) -> Self {
        Vector::from_array_unchecked(Array::from_vec(v))
    }

    /// Return the dot product (sum of element-wise products).
    ///
    /// **Errors** with `ErrorKind::Arity` if the lengths differ.
    ///
    /// ```
    /// use arraymath::Vector;
    ///
    /// let a = Vector::from_vec(vec![1, 2, 3]);
    /// let b = Vector::from_vec(vec![4, 5, 6]);
    /// assert_eq!(a.dot(&b), Ok(32));
    /// ```
    pub fn dot(&self, other: &Vector<A>) -> Result<A, ShapeError>
    where
        A: LinalgScalar,
    {
        if self.len() != other.len() {
            return Err(arity("dot product", self, other));
        }
        Ok(self
            .values()
            .iter()
            .zip(other.values().iter())
            .fold(A::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Return the cross product of two vectors of length 3.
    ///
    /// **Errors** with `ErrorKind::Arity` for any other length.
    pub fn cross(&self, other: &Vector<A>) -> Result<Vector<A>, ShapeError>
    where
        A: LinalgScalar,
    {
        if self.len() != 3 || other.len() != 3 {
            return Err(arity("cross product", self, other));
        }
        let (a, b) = (self.values(), other.values());
        Ok(Vector::from_vec(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    /// Return the outer product: the matrix whose row `i` is
    /// `self[i] * other`.
    ///
    /// ```
    /// use arraymath::{array, Vector};
    ///
    /// let a = Vector::from_vec(vec![1, 2]);
    /// let b = Vector::from_vec(vec![1, 10, 100]);
    /// assert_eq!(a.outer(&b), array![[1, 10, 100], [2, 20, 200]]);
    /// ```
    pub fn outer(&self, other: &Vector<A>) -> Matrix<A>
    where
        A: LinalgScalar,
    {
        let (a, b) = (self.values(), other.values());
        Matrix::from_shape_fn(a.len(), b.len(), |i, j| a[i] * b[j])
    }

    /// Return the squared Euclidean length.
    pub fn sqlength(&self) -> A
    where
        A: LinalgScalar,
    {
        self.values().iter().fold(A::zero(), |acc, &x| acc + x * x)
    }

    /// Return the product of the row vector `self` and `m`.
    ///
    /// **Errors** if the length differs from the number of rows of `m`.
    pub fn mul_matrix(&self, m: &Matrix<A>) -> Result<Vector<A>, ShapeError>
    where
        A: LinalgScalar,
    {
        let (k, n) = (m.nrow(), m.ncol());
        if self.len() != k {
            return Err(ShapeError::with_context(
                ErrorKind::IncompatibleShape,
                format!("vector of length {} times matrix of shape {:?}", self.len(), m.shape()),
            ));
        }
        let (v, values) = (self.values(), m.values());
        Ok((0..n)
            .map(|j| (0..k).fold(A::zero(), |acc, l| acc + v[l] * values[l * n + j]))
            .collect())
    }
}

impl<A: Clone + Zero> Vector<A> {
    /// Create a vector of `n` zeros.
    pub fn zeros(n: Ix) -> Self {
        Vector::from_array_unchecked(Array::zeros(&[n]))
    }
}

impl<A: Float> Vector<A> {
    /// Return the Euclidean length.
    pub fn length(&self) -> A {
        self.values().iter().fold(A::zero(), |acc, &x| acc + x * x).sqrt()
    }

    /// Return the vector scaled to unit length.
    ///
    /// A vector of length zero is returned as an unmodified copy.
    ///
    /// ```
    /// use arraymath::Vector;
    ///
    /// let v = Vector::from_vec(vec![3., 4.]);
    /// assert_eq!(v.normal(), Vector::from_vec(vec![0.6, 0.8]));
    /// let zero = Vector::<f64>::zeros(3);
    /// assert_eq!(zero.normal(), zero);
    /// ```
    pub fn normal(&self) -> Vector<A> {
        let length = self.length();
        if length.is_zero() {
            return self.copy();
        }
        self.mapv(|x| x / length)
    }

    /// Return the vector scaled to unit length (the same as `normal`).
    pub fn unit(&self) -> Vector<A> {
        self.normal()
    }

    /// Scale the vector to unit length in place. Aliases see the new
    /// values; a vector of length zero is left unchanged.
    pub fn normalize(&mut self) {
        let length = self.length();
        if !length.is_zero() {
            self.mapv_inplace(|x| x / length);
        }
    }

    /// Return the Euclidean distance between `self` and `other`.
    ///
    /// **Errors** with `ErrorKind::Arity` if the lengths differ.
    pub fn distance_to(&self, other: &Vector<A>) -> Result<A, ShapeError> {
        if self.len() != other.len() {
            return Err(arity("distance", self, other));
        }
        Ok(self
            .values()
            .iter()
            .zip(other.values().iter())
            .fold(A::zero(), |acc, (&a, &b)| acc + (a - b) * (a - b))
            .sqrt())
    }
}

impl<A: NdFloat> Vector<A> {
    /// Transform `self` as a surface normal by `m`: multiply it by the
    /// transpose of the inverse of `m`.
    ///
    /// **Errors** if `m` is singular or the shapes do not match.
    ///
    /// ```
    /// use arraymath::{Matrix, Vector};
    ///
    /// let shear = Matrix::from_rows(vec![[1., 2.], [0., 1.]]);
    /// let n = Vector::from_vec(vec![0., 1.]);
    /// assert_eq!(n.transform_normal(&shear).unwrap(), Vector::from_vec(vec![-2., 1.]));
    /// ```
    pub fn transform_normal(&self, m: &Matrix<A>) -> Result<Vector<A>, ShapeError> {
        self.mul_matrix(&m.inverse()?.transpose())
    }
}

impl<A> FromIterator<A> for Vector<A> {
    fn from_iter<I>(iterable: I) -> Vector<A>
    where
        I: IntoIterator<Item = A>,
    {
        Vector::from_vec(iterable.into_iter().collect())
    }
}

impl<A> From<Vec<A>> for Vector<A> {
    fn from(v: Vec<A>) -> Self {
        Vector::from_vec(v)
    }
}

/// Dot product.
///
/// **Panics** if the lengths differ.
impl<'a, A: LinalgScalar> Mul<&'a Vector<A>> for &'a Vector<A> {
    type Output = A;
    fn mul(self, rhs: &'a Vector<A>) -> A {
        or_panic(self.dot(rhs))
    }
}

impl<A: LinalgScalar> Mul<Vector<A>> for Vector<A> {
    type Output = A;
    fn mul(self, rhs: Vector<A>) -> A {
        &self * &rhs
    }
}

/// Row vector times matrix.
///
/// **Panics** if the length differs from the number of rows.
impl<'a, A: LinalgScalar> Mul<&'a Matrix<A>> for &'a Vector<A> {
    type Output = Vector<A>;
    fn mul(self, rhs: &'a Matrix<A>) -> Vector<A> {
        or_panic(self.mul_matrix(rhs))
    }
}

impl<A: LinalgScalar> Mul<Matrix<A>> for Vector<A> {
    type Output = Vector<A>;
    fn mul(self, rhs: Matrix<A>) -> Vector<A> {
        &self * &rhs
    }
}

/// Element-wise multiplication by a scalar.
impl<A, B> Mul<B> for &Vector<A>
where
    A: Clone + Mul<B, Output = A>,
    B: ScalarOperand,
{
    type Output = Vector<A>;
    fn mul(self, x: B) -> Vector<A> {
        Vector::from_array_unchecked(self.as_array() * x)
    }
}

impl<A, B> Mul<B> for Vector<A>
where
    A: Clone + Mul<B, Output = A>,
    B: ScalarOperand,
{
    type Output = Vector<A>;
    fn mul(self, x: B) -> Vector<A> {
        &self * x
    }
}

/// Cross product.
///
/// **Panics** unless both vectors have length 3.
impl<'a, A: LinalgScalar> BitXor<&'a Vector<A>> for &'a Vector<A> {
    type Output = Vector<A>;
    fn bitxor(self, rhs: &'a Vector<A>) -> Vector<A> {
        or_panic(self.cross(rhs))
    }
}

impl<A: LinalgScalar> BitXor<Vector<A>> for Vector<A> {
    type Output = Vector<A>;
    fn bitxor(self, rhs: Vector<A>) -> Vector<A> {
        &self ^ &rhs
    }
}

/// Transform as a normal (see [`Vector::transform_normal`]).
///
/// **Panics** if the matrix is singular or the shapes do not match.
impl<'a, A: NdFloat> BitXor<&'a Matrix<A>> for &'a Vector<A> {
    type Output = Vector<A>;
    fn bitxor(self, rhs: &'a Matrix<A>) -> Vector<A> {
        or_panic(self.transform_normal(rhs))
    }
}

impl<A: NdFloat> BitXor<Matrix<A>> for Vector<A> {
    type Output = Vector<A>;
    fn bitxor(self, rhs: Matrix<A>) -> Vector<A> {
        &self ^ &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;

    #[test]
    fn arity_errors() {
        let a = Vector::from_vec(vec![1., 2.]);
        let b = Vector::from_vec(vec![1., 2., 3.]);
        assert_eq!(a.cross(&b).unwrap_err().kind(), ErrorKind::Arity);
        assert_eq!(a.dot(&b).unwrap_err().kind(), ErrorKind::Arity);
        assert_eq!(a.distance_to(&b).unwrap_err().kind(), ErrorKind::Arity);
    }

    #[test]
    fn normalize_writes_through_aliases() {
        let m = Matrix::from_rows(vec![[3., 4.], [1., 0.]]);
        let mut row = m.row(0).unwrap();
        row.normalize();
        assert_eq!(m, array![[0.6, 0.8], [1., 0.]]);
        assert_eq!(row.length(), 1.);
    }

    #[test]
    fn vector_matrix_products() {
        let m = Matrix::from_rows(vec![[1, 2], [3, 4]]);
        let v = Vector::from_vec(vec![1, 1]);
        assert_eq!(&v * &m, array![4, 6]);
        assert_eq!(&m * &v, array![3, 7]);
        assert_eq!(&v * 3, array![3, 3]);
        assert_eq!(&v + &v, array![2, 2]);
    }

    #[test]
    fn strip_cannot_drop_the_axis() {
        let v = Vector::from_vec(vec![1, 2]);
        assert_eq!(
            v.stripped(&[SliceElem::Index(0)]).unwrap_err().kind(),
            ErrorKind::FixedDimensionality
        );
        assert_eq!(v.deleted(&[SliceElem::Index(0)]).unwrap(), array![2]);
    }
}
