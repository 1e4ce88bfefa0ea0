// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Two-dimensional arrays.
use std::ops::{Add, Mul};

use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{check_ndim, incompatible_shapes};
use crate::imp_prelude::*;
use crate::impl_ops::or_panic;
use crate::iterators::{ArrayIter, ArrayIterBase, ArrayIterMut};
use crate::nested::IntoNested;
use crate::{LinalgScalar, ScalarOperand, Vector};

fixed_ndim_array! {
    /// A two-dimensional array.
    ///
    /// `Matrix` derefs to [`Array`] for everything that reads; the methods
    /// that would change the number of dimensions are replaced by checked
    /// versions that fail with `ErrorKind::FixedDimensionality`.
    ///
    /// `*` between matrices (and between a matrix and a [`Vector`]) is the
    /// matrix product; every other operator is element-wise as for `Array`.
    ///
    /// ```
    /// use arraymath::Matrix;
    ///
    /// let a = Matrix::from_rows(vec![[1., 2.], [3., 4.]]);
    /// let b = Matrix::identity(2);
    /// assert_eq!(&a * &b, a);
    /// assert_eq!(a.det(), Ok(-2.));
    /// ```
    Matrix, 2, "matrix"
}

impl_fixed_elementwise_ops!(Matrix; Add add, Sub sub, Div div, Rem rem);
impl_fixed_assign_ops!(Matrix; AddAssign add_assign, SubAssign sub_assign, MulAssign mul_assign,
                       DivAssign div_assign, RemAssign rem_assign);

/// # Methods For Matrices
impl<A> Matrix<A> {
    /// Create a matrix from a vector of rows.
    ///
    /// ```
    /// use arraymath::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!((m.nrow(), m.ncol()), (2, 3));
    /// ```
    pub fn from_rows<const N: usize>(rows: Vec<[A; N]>) -> Self {
        Matrix::from_array_unchecked(Array::from_rows(rows))
    }

    /// Create a matrix with `nrow` rows and `ncol` columns from a row-major
    /// vector.
    ///
    /// **Errors** if `v` has the wrong length.
    pub fn from_shape_vec(nrow: Ix, ncol: Ix, v: Vec<A>) -> Result<Self, ShapeError> {
        Array::from_shape_vec(&[nrow, ncol], v).map(Matrix::from_array_unchecked)
    }

    /// Create a matrix by calling `f(i, j)` for each element.
    pub fn from_shape_fn<F>(nrow: Ix, ncol: Ix, mut f: F) -> Self
    where
        F: FnMut(Ix, Ix) -> A,
    {
        Matrix::from_array_unchecked(Array::from_shape_fn(&[nrow, ncol], |ix| f(ix[0], ix[1])))
    }

    /// Return the number of rows (length of `Axis(0)`).
    pub fn nrow(&self) -> usize {
        self.len_of(Axis(0))
    }

    /// Return the number of columns (length of `Axis(1)`).
    pub fn ncol(&self) -> usize {
        self.len_of(Axis(1))
    }

    /// Return `true` if the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.nrow() == self.ncol()
    }

    /// Return row `index` as a vector sharing storage with the matrix;
    /// negative values count from the back.
    ///
    /// ```
    /// use arraymath::{array, Matrix};
    ///
    /// let m = Matrix::from_rows(vec![[1., 2.], [3., 4.]]);
    /// let mut row = m.row(-1).unwrap();
    /// row.fill(0.);
    /// assert_eq!(m, array![[1., 2.], [0., 0.]]);
    /// ```
    pub fn row(&self, index: Ixs) -> Result<Vector<A>, ShapeError>
    where
        A: Clone,
    {
        self.get(&[SliceElem::Index(index)]).map(Vector::from_array_unchecked)
    }

    /// Return a copy of column `index`; negative values count from the back.
    pub fn col(&self, index: Ixs) -> Result<Vector<A>, ShapeError>
    where
        A: Clone,
    {
        self.get(&[SliceElem::from(..), SliceElem::Index(index)])
            .map(Vector::from_array_unchecked)
    }

    /// Return an iterator over the rows (aliases of the matrix).
    pub fn rows(&self) -> ArrayIter<'_, A> {
        ArrayIterBase::over_axis(self.as_array(), 0)
    }

    /// Return an iterator over the columns (copies).
    pub fn cols(&self) -> ArrayIter<'_, A> {
        ArrayIterBase::over_axis(self.as_array(), 1)
    }

    /// Return a row iterator that can also assign and delete rows.
    pub fn rows_mut(&mut self) -> ArrayIterMut<'_, A> {
        ArrayIterBase::over_axis(&mut self.array, 0)
    }

    /// Return a column iterator that can also assign and delete columns.
    pub fn cols_mut(&mut self) -> ArrayIterMut<'_, A> {
        ArrayIterBase::over_axis(&mut self.array, 1)
    }

    /// Return the transposed matrix (a copy).
    pub fn transpose(&self) -> Matrix<A>
    where
        A: Clone,
    {
        Matrix::from_array_unchecked(self.t())
    }

    /// Return `true` if the matrix is square and equal to its transpose.
    pub fn is_symmetric(&self) -> bool
    where
        A: Clone + PartialEq,
    {
        self.is_square() && *self == self.transpose()
    }

    /// Return the elements `self[i, i + offset]`, for each row `i`.
    ///
    /// Without `wrap`, positions past the last column (or before the first)
    /// are left out. With `wrap`, the column index is taken modulo the
    /// number of columns, so there is one element per row.
    ///
    /// ```
    /// use arraymath::{array, Matrix};
    ///
    /// let m = Matrix::from_rows(vec![[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    /// assert_eq!(m.diagonal(0, false), array![1, 5, 9]);
    /// assert_eq!(m.diagonal(1, false), array![2, 6]);
    /// assert_eq!(m.diagonal(1, true), array![2, 6, 7]);
    /// assert_eq!(m.diagonal(-1, false), array![4, 8]);
    /// ```
    pub fn diagonal(&self, offset: Ixs, wrap: bool) -> Vector<A>
    where
        A: Clone,
    {
        let ncol = self.ncol() as Ixs;
        let values = self.values();
        let v = (0..self.nrow())
            .filter_map(|i| {
                let j = i as Ixs + offset;
                let j = if wrap && ncol > 0 { j.mod_floor(&ncol) } else { j };
                if (0..ncol).contains(&j) {
                    Some(values[i * ncol as usize + j as usize].clone())
                } else {
                    None
                }
            })
            .collect();
        Vector::from_vec(v)
    }

    /// Return the sum of the diagonal at `offset` (see `diagonal`).
    pub fn trace(&self, offset: Ixs) -> A
    where
        A: Clone + Add<Output = A> + Zero,
    {
        self.diagonal(offset, false).sum()
    }

    /// Return the matrix without row `i` and column `j`; negative values
    /// count from the back.
    ///
    /// ```
    /// use arraymath::{array, Matrix};
    ///
    /// let m = Matrix::from_rows(vec![[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    /// assert_eq!(m.minor(1, 1).unwrap(), array![[1, 3], [7, 9]]);
    /// ```
    pub fn minor(&self, i: Ixs, j: Ixs) -> Result<Matrix<A>, ShapeError>
    where
        A: Clone,
    {
        let m = self.deleted(&[SliceElem::Index(i)])?;
        m.deleted(&[SliceElem::from(..), SliceElem::Index(j)])
    }

    /// Return the matrix product of `self` and `rhs`.
    ///
    /// **Errors** if the number of columns of `self` differs from the number
    /// of rows of `rhs`.
    ///
    /// ```
    /// use arraymath::{array, Matrix};
    ///
    /// let a = Matrix::from_rows(vec![[1, 2], [3, 4]]);
    /// let b = Matrix::from_rows(vec![[0, 1], [1, 0]]);
    /// assert_eq!(a.mat_mul(&b).unwrap(), array![[2, 1], [4, 3]]);
    /// ```
    pub fn mat_mul(&self, rhs: &Matrix<A>) -> Result<Matrix<A>, ShapeError>
    where
        A: LinalgScalar,
    {
        let (m, k) = (self.nrow(), self.ncol());
        let (k2, n) = (rhs.nrow(), rhs.ncol());
        if k != k2 {
            return Err(incompatible_shapes(self.shape(), rhs.shape()));
        }
        let (lhs, rhs) = (self.values(), rhs.values());
        Ok(Matrix::from_shape_fn(m, n, |i, j| {
            (0..k).fold(A::zero(), |acc, l| acc + lhs[i * k + l] * rhs[l * n + j])
        }))
    }

    /// Return the product of `self` and the column vector `v`.
    ///
    /// **Errors** if the length of `v` differs from the number of columns.
    pub fn mul_vector(&self, v: &Vector<A>) -> Result<Vector<A>, ShapeError>
    where
        A: LinalgScalar,
    {
        let (m, k) = (self.nrow(), self.ncol());
        if v.len() != k {
            return Err(incompatible_shapes(self.shape(), v.shape()));
        }
        let (lhs, rhs) = (self.values(), v.values());
        Ok((0..m)
            .map(|i| (0..k).fold(A::zero(), |acc, l| acc + lhs[i * k + l] * rhs[l]))
            .collect())
    }
}

impl<A: Clone + Zero> Matrix<A> {
    /// Create a matrix of zeros with `nrow` rows and `ncol` columns.
    pub fn zeros(nrow: Ix, ncol: Ix) -> Self {
        Matrix::from_array_unchecked(Array::zeros(&[nrow, ncol]))
    }
}

impl<A: Clone + Zero + One> Matrix<A> {
    /// Create an identity matrix of size `n` (square 2D array).
    ///
    /// ```
    /// use arraymath::{array, Matrix};
    ///
    /// assert_eq!(Matrix::<f64>::identity(2), array![[1., 0.], [0., 1.]]);
    /// ```
    pub fn identity(n: Ix) -> Self {
        Matrix::from_shape_fn(n, n, |i, j| if i == j { A::one() } else { A::zero() })
    }
}

/// Matrix product.
///
/// **Panics** if the inner dimensions differ.
impl<'a, A: LinalgScalar> Mul<&'a Matrix<A>> for &'a Matrix<A> {
    type Output = Matrix<A>;
    fn mul(self, rhs: &'a Matrix<A>) -> Matrix<A> {
        or_panic(self.mat_mul(rhs))
    }
}

impl<A: LinalgScalar> Mul<Matrix<A>> for Matrix<A> {
    type Output = Matrix<A>;
    fn mul(self, rhs: Matrix<A>) -> Matrix<A> {
        &self * &rhs
    }
}

/// Matrix times column vector.
///
/// **Panics** if the lengths disagree.
impl<'a, A: LinalgScalar> Mul<&'a Vector<A>> for &'a Matrix<A> {
    type Output = Vector<A>;
    fn mul(self, rhs: &'a Vector<A>) -> Vector<A> {
        or_panic(self.mul_vector(rhs))
    }
}

impl<A: LinalgScalar> Mul<Vector<A>> for Matrix<A> {
    type Output = Vector<A>;
    fn mul(self, rhs: Vector<A>) -> Vector<A> {
        &self * &rhs
    }
}

/// Element-wise multiplication by a scalar.
impl<A, B> Mul<B> for &Matrix<A>
where
    A: Clone + Mul<B, Output = A>,
    B: ScalarOperand,
{
    type Output = Matrix<A>;
    fn mul(self, x: B) -> Matrix<A> {
        Matrix::from_array_unchecked(self.as_array() * x)
    }
}

impl<A, B> Mul<B> for Matrix<A>
where
    A: Clone + Mul<B, Output = A>,
    B: ScalarOperand,
{
    type Output = Matrix<A>;
    fn mul(self, x: B) -> Matrix<A> {
        &self * x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;

    #[test]
    fn fixed_dimensionality() {
        let mut m = Matrix::from_rows(vec![[1, 2], [3, 4]]);
        assert_eq!(m.reshape(&[4]).unwrap_err().kind(), ErrorKind::FixedDimensionality);
        assert_eq!(
            Matrix::<i32>::from_nested(vec![1, 2, 3]).unwrap_err().kind(),
            ErrorKind::FixedDimensionality
        );
        assert_eq!(m.stripped(&[SliceElem::Index(0)]).unwrap_err().kind(), ErrorKind::FixedDimensionality);
        m.reshape(&[1, 4]).unwrap();
        assert_eq!(m, array![[1, 2, 3, 4]]);
    }

    #[test]
    fn rows_alias_cols_copy() {
        let m = Matrix::from_rows(vec![[1, 2], [3, 4]]);
        assert!(m.row(0).unwrap().shares_storage(&m));
        assert!(!m.col(0).unwrap().shares_storage(&m));
        assert_eq!(m.cols().map(|c| c.sum()).collect::<Vec<_>>(), vec![4, 6]);
    }

    #[test]
    fn delete_rows_through_iterator() {
        let mut m = Matrix::from_rows(vec![[1, 2], [3, 4], [5, 6]]);
        let mut rows = m.rows_mut();
        rows.delete(1).unwrap();
        assert_eq!(rows.size(), 2);
        assert_eq!(m, array![[1, 2], [5, 6]]);
        assert_eq!(m.ndim(), 2);
    }

    #[test]
    fn matrix_times_vector() {
        let m = Matrix::from_rows(vec![[1, 2], [3, 4], [5, 6]]);
        let v = Vector::from_vec(vec![1, 1]);
        assert_eq!(&m * &v, array![3, 7, 11]);
        assert!(m.mul_vector(&Vector::from_vec(vec![1, 1, 1])).is_err());
    }

    #[test]
    fn elementwise_keeps_type() {
        let m = Matrix::from_rows(vec![[1., 2.], [3., 4.]]);
        let n: Matrix<f64> = &m + &m;
        assert_eq!(n, array![[2., 4.], [6., 8.]]);
        assert_eq!(&m * 2., n);
        assert_eq!(-&m, array![[-1., -2.], [-3., -4.]]);
    }
}
