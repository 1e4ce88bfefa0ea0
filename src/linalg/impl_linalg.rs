// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use log::{debug, trace};
use num_traits::NumCast;

use crate::dimension::wrap_index;
use crate::imp_prelude::*;
use crate::linalg_traits::NdFloat;
use crate::Matrix;

use super::PIVOT_EPSILON;

/// Largest side for which `det` uses cofactor expansion.
const COFACTOR_DET_MAX: usize = 5;
/// Smallest side for which `inverse` reduces the augmented matrix.
const AUGMENTED_INVERSE_MIN: usize = 4;

fn pivot_epsilon<A: NdFloat>() -> A {
    <A as NumCast>::from(PIVOT_EPSILON).unwrap_or_else(A::epsilon)
}

fn singular(context: String) -> ShapeError {
    ShapeError::with_context(ErrorKind::SingularMatrix, context)
}

/// A row-major working copy of a matrix under elimination.
struct Rows<A> {
    v: Vec<A>,
    nrow: usize,
    ncol: usize,
    swaps: usize,
}

impl<A: NdFloat> Rows<A> {
    fn new(m: &Matrix<A>) -> Self {
        Rows {
            v: m.values().to_vec(),
            nrow: m.nrow(),
            ncol: m.ncol(),
            swaps: 0,
        }
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> A {
        self.v[i * self.ncol + j]
    }

    fn swap_rows(&mut self, i: usize, k: usize) {
        for j in 0..self.ncol {
            self.v.swap(i * self.ncol + j, k * self.ncol + j);
        }
        self.swaps += 1;
    }

    /// `row[target] -= factor * row[source]`, from column `from` on.
    fn sub_scaled(&mut self, target: usize, source: usize, factor: A, from: usize) {
        for j in from..self.ncol {
            let x = self.at(source, j);
            self.v[target * self.ncol + j] = self.at(target, j) - factor * x;
        }
    }

    /// Forward elimination with partial pivoting, one pivot per row.
    fn echelon(&mut self) -> Result<(), ShapeError> {
        let eps = pivot_epsilon::<A>();
        for k in 0..self.nrow.min(self.ncol) {
            let mut best = k;
            for i in k + 1..self.nrow {
                if self.at(i, k).abs() > self.at(best, k).abs() {
                    best = i;
                }
            }
            if self.at(best, k).abs() < eps {
                debug!("pivot {} in column {} is below {}", self.at(best, k), k, PIVOT_EPSILON);
                return Err(singular(format!("no usable pivot in column {}", k)));
            }
            if best != k {
                trace!("swapping rows {} and {}", k, best);
                self.swap_rows(k, best);
            }
            let pivot = self.at(k, k);
            for i in k + 1..self.nrow {
                let factor = self.at(i, k) / pivot;
                if !factor.is_zero() {
                    self.sub_scaled(i, k, factor, k);
                }
            }
        }
        Ok(())
    }

    /// Back substitution from echelon form to reduced row echelon form.
    fn back_substitute(&mut self) {
        for k in (0..self.nrow.min(self.ncol)).rev() {
            let pivot = self.at(k, k);
            for j in k..self.ncol {
                self.v[k * self.ncol + j] = self.at(k, j) / pivot;
            }
            for i in 0..k {
                let factor = self.at(i, k);
                if !factor.is_zero() {
                    self.sub_scaled(i, k, factor, k);
                }
            }
        }
    }

    fn into_matrix(self) -> Matrix<A> {
        let (nrow, ncol) = (self.nrow, self.ncol);
        let v = self.v;
        Matrix::from_shape_fn(nrow, ncol, |i, j| v[i * ncol + j])
    }
}

/// # Linear Algebra
impl<A: NdFloat> Matrix<A> {
    fn require_square(&self, what: &str) -> Result<(), ShapeError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(ShapeError::with_context(
                ErrorKind::IncompatibleShape,
                format!("{} of a non-square matrix of shape {:?}", what, self.shape()),
            ))
        }
    }

    /// Return the cofactor `(-1)^(i+j) * det(minor(i, j))`.
    ///
    /// Negative indices count from the end.
    ///
    /// **Errors** if the matrix is not square or an index is out of bounds.
    pub fn cofactor(&self, i: Ixs, j: Ixs) -> Result<A, ShapeError> {
        self.require_square("cofactor")?;
        let (i, j) = (wrap_index(i, self.nrow())?, wrap_index(j, self.ncol())?);
        let det = self.minor(i as Ixs, j as Ixs)?.det()?;
        Ok(if (i + j) % 2 == 0 { det } else { -det })
    }

    /// Return the adjugate: the transposed matrix of cofactors.
    ///
    /// ```
    /// use arraymath::{array, Matrix};
    ///
    /// let m = Matrix::from_rows(vec![[1., 2.], [3., 4.]]);
    /// assert_eq!(m.adjugate().unwrap(), array![[4., -2.], [-3., 1.]]);
    /// ```
    pub fn adjugate(&self) -> Result<Matrix<A>, ShapeError> {
        self.require_square("adjugate")?;
        let n = self.nrow();
        let mut v = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                v.push(self.cofactor(j as Ixs, i as Ixs)?);
            }
        }
        Matrix::from_shape_vec(n, n, v)
    }

    /// Return the determinant.
    ///
    /// Up to 3×3 closed forms are used, up to 5×5 cofactor expansion along
    /// the first row, and above that Gauss-Jordan elimination. A matrix
    /// found singular during elimination has determinant `0`.
    ///
    /// **Errors** with `ErrorKind::IncompatibleShape` if the matrix is not
    /// square.
    ///
    /// ```
    /// use arraymath::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![[1., 2.], [3., 4.]]);
    /// assert_eq!(m.det(), Ok(-2.));
    /// ```
    pub fn det(&self) -> Result<A, ShapeError> {
        self.require_square("determinant")?;
        let n = self.nrow();
        let a = self.values();
        let det = match n {
            0 => A::one(),
            1 => a[0],
            2 => a[0] * a[3] - a[1] * a[2],
            3 => {
                a[0] * (a[4] * a[8] - a[5] * a[7]) - a[1] * (a[3] * a[8] - a[5] * a[6])
                    + a[2] * (a[3] * a[7] - a[4] * a[6])
            }
            _ if n <= COFACTOR_DET_MAX => {
                trace!("determinant of {}x{} by cofactor expansion", n, n);
                let mut sum = A::zero();
                for (j, &x) in a[..n].iter().enumerate() {
                    if !x.is_zero() {
                        sum = sum + x * self.cofactor(0, j as Ixs)?;
                    }
                }
                sum
            }
            _ => {
                trace!("determinant of {}x{} by elimination", n, n);
                let mut rows = Rows::new(self);
                match rows.echelon() {
                    Ok(()) => {
                        let diag = (0..n).fold(A::one(), |acc, k| acc * rows.at(k, k));
                        if rows.swaps % 2 == 0 {
                            diag
                        } else {
                            -diag
                        }
                    }
                    Err(e) if e.kind() == ErrorKind::SingularMatrix => {
                        debug!("singular {}x{} matrix has determinant 0", n, n);
                        A::zero()
                    }
                    Err(e) => return Err(e),
                }
            }
        };
        Ok(det)
    }

    /// Return the row echelon form computed by Gaussian elimination with
    /// partial pivoting. Rectangular matrices are accepted; there is one
    /// pivot per row.
    ///
    /// **Errors** with `ErrorKind::SingularMatrix` if a pivot magnitude is
    /// below [`PIVOT_EPSILON`](crate::PIVOT_EPSILON).
    pub fn gauss(&self) -> Result<Matrix<A>, ShapeError> {
        let mut rows = Rows::new(self);
        rows.echelon()?;
        Ok(rows.into_matrix())
    }

    /// Return the reduced row echelon form: the echelon form of `gauss`
    /// with unit pivots and zeros above them.
    ///
    /// ```
    /// use arraymath::{array, Matrix};
    ///
    /// let m = Matrix::from_rows(vec![[2., 4., 2.], [1., 3., 2.]]);
    /// assert_eq!(m.reduced().unwrap(), array![[1., 0., -1.], [0., 1., 1.]]);
    /// ```
    pub fn reduced(&self) -> Result<Matrix<A>, ShapeError> {
        let mut rows = Rows::new(self);
        rows.echelon()?;
        rows.back_substitute();
        Ok(rows.into_matrix())
    }

    /// Return the inverse.
    ///
    /// Below 4×4 this is `adjugate / det`; larger matrices are inverted by
    /// reducing `[self | identity]`.
    ///
    /// **Errors** with `ErrorKind::SingularMatrix` if the matrix is
    /// singular and `ErrorKind::IncompatibleShape` if it is not square.
    ///
    /// ```
    /// use arraymath::{array, Matrix};
    ///
    /// let m = Matrix::from_rows(vec![[1., 2.], [3., 4.]]);
    /// assert_eq!(m.inverse().unwrap(), array![[-2., 1.], [1.5, -0.5]]);
    /// ```
    pub fn inverse(&self) -> Result<Matrix<A>, ShapeError> {
        self.require_square("inverse")?;
        let n = self.nrow();
        if n < AUGMENTED_INVERSE_MIN {
            let det = self.det()?;
            if det.abs() < pivot_epsilon() {
                debug!("{}x{} matrix with determinant {} has no inverse", n, n, det);
                return Err(singular(format!("determinant {}", det)));
            }
            trace!("inverse of {}x{} by adjugate", n, n);
            return Ok(self.adjugate()?.mapv(|x| x / det));
        }
        trace!("inverse of {}x{} by augmented reduction", n, n);
        let augmented = self.stacked(&Matrix::identity(n), Axis(1))?;
        let reduced = augmented.reduced()?;
        let r = reduced.values();
        Ok(Matrix::from_shape_fn(n, n, |i, j| r[i * 2 * n + n + j]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;

    #[test]
    fn det_strategies_agree() {
        // upper triangular, so the determinant is the diagonal product
        let m = Matrix::from_shape_fn(6, 6, |i, j| if j >= i { (i + j + 1) as f64 } else { 0. });
        let expected = (0..6).map(|i| (2 * i + 1) as f64).product::<f64>();
        assert_eq!(m.det(), Ok(expected));
        let five = Matrix::from_shape_fn(5, 5, |i, j| if j >= i { (i + j + 1) as f64 } else { 0. });
        assert_eq!(five.det(), Ok(1. * 3. * 5. * 7. * 9.));
    }

    #[test]
    fn row_swaps_flip_the_sign() {
        let mut v = vec![0.; 36];
        for i in 0..6 {
            v[i * 6 + (5 - i)] = 1.;
        }
        // the anti-diagonal permutation of 6 has three transpositions
        let m = Matrix::from_shape_vec(6, 6, v).unwrap();
        assert_eq!(m.det(), Ok(-1.));
    }

    #[test]
    fn singular_matrices() {
        let m = Matrix::from_rows(vec![[1., 2.], [2., 4.]]);
        assert_eq!(m.inverse().unwrap_err().kind(), ErrorKind::SingularMatrix);
        assert_eq!(m.gauss().unwrap_err().kind(), ErrorKind::SingularMatrix);
        let big = Matrix::<f64>::zeros(7, 7);
        assert_eq!(big.det(), Ok(0.));
        assert_eq!(big.inverse().unwrap_err().kind(), ErrorKind::SingularMatrix);
    }

    #[test]
    fn non_square() {
        let m = Matrix::from_rows(vec![[1., 2., 3.]]);
        assert_eq!(m.det().unwrap_err().kind(), ErrorKind::IncompatibleShape);
        assert_eq!(m.reduced().unwrap(), array![[1., 2., 3.]]);
    }

    #[test]
    fn cofactor_signs() {
        let m = Matrix::from_rows(vec![[1., 2.], [3., 4.]]);
        assert_eq!(m.cofactor(0, 1), Ok(-3.));
        assert_eq!(m.cofactor(-1, -1), Ok(1.));
    }
}
