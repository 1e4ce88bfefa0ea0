// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for arrays.

use log::debug;
use num_traits::{Float, One, Zero};

use crate::dimension::{self, size_of_shape};
use crate::error::incompatible_shapes;
use crate::imp_prelude::*;
use crate::nested::IntoNested;

/// # Constructor Methods for Arrays
///
/// Note that the constructor methods apply to `Array`; `Matrix` and
/// `Vector` have constructors of their own that also check the number of
/// dimensions.
impl<A> Array<A> {
    /// Create a one-dimensional array from a vector (no copying needed).
    ///
    /// ```
    /// use arraymath::Array;
    ///
    /// let array = Array::from_vec(vec![1., 2., 3., 4.]);
    /// assert_eq!(array.shape(), &[4]);
    /// ```
    pub fn from_vec(v: Vec<A>) -> Self {
        Array::from_parts(vec![v.len()], v)
    }

    /// Create a two-dimensional array from a vector of rows.
    ///
    /// ```
    /// use arraymath::Array;
    ///
    /// let a = Array::from_rows(vec![[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(a.shape(), &[2, 3]);
    /// ```
    pub fn from_rows<const N: usize>(rows: Vec<[A; N]>) -> Self {
        let dim = vec![rows.len(), N];
        Array::from_parts(dim, rows.into_iter().flatten().collect())
    }

    /// Create a three-dimensional array from a vector of planes.
    pub fn from_planes<const M: usize, const N: usize>(planes: Vec<[[A; N]; M]>) -> Self {
        let dim = vec![planes.len(), M, N];
        Array::from_parts(dim, planes.into_iter().flatten().flatten().collect())
    }

    /// Create an array with the given shape from a row-major vector.
    ///
    /// **Errors** if `v.len()` is not the product of `shape`.
    ///
    /// ```
    /// use arraymath::{array, Array};
    ///
    /// let a = Array::from_shape_vec(&[2, 2], vec![1., 2., 3., 4.]).unwrap();
    /// assert_eq!(a, array![[1., 2.], [3., 4.]]);
    /// ```
    pub fn from_shape_vec(shape: &[Ix], v: Vec<A>) -> Result<Self, ShapeError> {
        if size_of_shape(shape) != v.len() {
            return Err(incompatible_shapes(shape, &[v.len()]));
        }
        Ok(Array::from_parts(shape.to_vec(), v))
    }

    /// Create an array with the given shape, calling `f` with the index of
    /// each element in row-major order.
    ///
    /// ```
    /// use arraymath::{array, Array};
    ///
    /// let a = Array::from_shape_fn(&[2, 3], |ix| ix[0] * 10 + ix[1]);
    /// assert_eq!(a, array![[0, 1, 2], [10, 11, 12]]);
    /// ```
    pub fn from_shape_fn<F>(shape: &[Ix], mut f: F) -> Self
    where
        F: FnMut(&[Ix]) -> A,
    {
        let mut v = Vec::with_capacity(size_of_shape(shape));
        if let Some(mut index) = dimension::first_index(shape) {
            loop {
                v.push(f(&index));
                if !dimension::next_for(shape, &mut index) {
                    break;
                }
            }
        }
        Array::from_parts(shape.to_vec(), v)
    }

    /// Create an array from a nested list, inferring its shape.
    ///
    /// **Errors** with `ErrorKind::RaggedInput` if sibling lists differ in
    /// shape at any depth.
    ///
    /// ```
    /// use arraymath::{Array, ErrorKind};
    ///
    /// let a = Array::<i32>::from_nested(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!(a.shape(), &[2, 3]);
    ///
    /// let ragged = Array::<i32>::from_nested(vec![vec![1, 2, 3], vec![4, 5]]);
    /// assert_eq!(ragged.unwrap_err().kind(), ErrorKind::RaggedInput);
    /// ```
    pub fn from_nested<T>(value: T) -> Result<Self, ShapeError>
    where
        T: IntoNested<A>,
    {
        let nested = value.into_nested();
        let dim = nested.shape()?;
        Ok(Array::from_parts(dim, nested.flatten()))
    }
}

impl<A: Clone> Array<A> {
    /// Create an array with copies of `elem`, shape `shape`.
    ///
    /// ```
    /// use arraymath::{array, Array};
    ///
    /// let a = Array::from_elem(&[2, 2], 1.);
    /// assert_eq!(a, array![[1., 1.], [1., 1.]]);
    /// ```
    pub fn from_elem(shape: &[Ix], elem: A) -> Self {
        Array::from_parts(shape.to_vec(), vec![elem; size_of_shape(shape)])
    }

    /// Create an array of shape `shape` from `value`, growing it with
    /// `fill` where needed.
    ///
    /// - A scalar is replicated over the whole shape.
    /// - A value with the same number of dimensions and no extent larger
    ///   than the target is retrimmed: elements keep their positions and new
    ///   slots hold `fill`.
    /// - Otherwise the flattened elements are regrouped into `shape` and
    ///   padded with `fill`.
    ///
    /// **Errors** if the target holds fewer elements than `value` (the data
    /// would be lost silently) or if `value` is ragged.
    ///
    /// ```
    /// use arraymath::{array, Array};
    ///
    /// let a = Array::shaped(vec![vec![1, 2], vec![3, 4]], &[3, 3], 0).unwrap();
    /// assert_eq!(a, array![[1, 2, 0], [3, 4, 0], [0, 0, 0]]);
    ///
    /// let b = Array::shaped(7, &[2], 0).unwrap();
    /// assert_eq!(b, array![7, 7]);
    /// ```
    pub fn shaped<T>(value: T, shape: &[Ix], fill: A) -> Result<Self, ShapeError>
    where
        T: IntoNested<A>,
    {
        let source = Array::from_nested(value)?;
        let from = source.shape().to_vec();
        if from == shape {
            return Ok(source);
        }
        if from.is_empty() {
            let elem = source.values()[0].clone();
            return Ok(Array::from_elem(shape, elem));
        }
        if from.len() == shape.len() && from.iter().zip(shape).all(|(f, t)| f <= t) {
            debug!("shaped: retrim {:?} -> {:?}", from, shape);
            let target: Vec<Ixs> = shape.iter().map(|&d| d as Ixs).collect();
            return source.trim(&target, fill);
        }
        if size_of_shape(shape) >= source.len() {
            debug!("shaped: grow {:?} -> {:?}", from, shape);
            return Ok(source.tosize(shape, fill));
        }
        Err(ShapeError::with_context(
            ErrorKind::IncompatibleShape,
            format!("shaping {:?} into {:?} would lose elements", from, shape),
        ))
    }
}

impl<A: Clone + Zero> Array<A> {
    /// Create an array with zeros, shape `shape`.
    ///
    /// ```
    /// use arraymath::Array;
    ///
    /// let a = Array::<f64>::zeros(&[3, 2, 4]);
    /// assert_eq!(a.shape(), &[3, 2, 4]);
    /// assert_eq!(a.sum(), 0.);
    /// ```
    pub fn zeros(shape: &[Ix]) -> Self {
        Array::from_elem(shape, A::zero())
    }
}

impl<A: Clone + One> Array<A> {
    /// Create an array with ones, shape `shape`.
    pub fn ones(shape: &[Ix]) -> Self {
        Array::from_elem(shape, A::one())
    }
}

impl<A: Float> Array<A> {
    /// Create a one-dimensional array with `n` evenly spaced elements from
    /// `start` to `end` (inclusive).
    ///
    /// ```
    /// use arraymath::{array, Array};
    ///
    /// let a = Array::linspace(0., 1., 5);
    /// assert_eq!(a, array![0.0, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    pub fn linspace(start: A, end: A, n: usize) -> Self {
        let step = if n > 1 {
            let steps = A::from(n - 1).unwrap_or_else(A::one);
            (end - start) / steps
        } else {
            A::zero()
        };
        Array::from_vec(
            (0..n)
                .map(|i| start + step * A::from(i).unwrap_or_else(A::zero))
                .collect(),
        )
    }
}
