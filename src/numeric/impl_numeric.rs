// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ops::{Add, Mul};

use num_traits::{One, Signed, Zero};

use crate::dimension::size_of_shape;
use crate::imp_prelude::*;

/// Numerical methods for arrays.
///
/// Every reduction comes in two forms: over the whole array (`sum`), and
/// per item of an axis iteration (`sum_axes`). The axis form combines the
/// items produced by iterating `axes` element by element, so its result has
/// the shape of one item: the shape of the array without `axes`. Iterating
/// every axis gives a zero-dimensional result; an empty `axes` list reduces
/// everything, also into a zero-dimensional array.
impl<A> Array<A> {
    /// Return the sum of all elements in the array.
    ///
    /// ```
    /// use arraymath::array;
    ///
    /// let a = array![[1., 2.],
    ///                [3., 4.]];
    /// assert_eq!(a.sum(), 10.);
    /// ```
    pub fn sum(&self) -> A
    where
        A: Clone + Add<Output = A> + Zero,
    {
        self.values().iter().fold(A::zero(), |acc, elt| acc + elt.clone())
    }

    /// Return the product of all elements in the array.
    ///
    /// ```
    /// use arraymath::array;
    ///
    /// let a = array![[1., 2.],
    ///                [3., 4.]];
    /// assert_eq!(a.prod(), 24.);
    /// ```
    pub fn prod(&self) -> A
    where
        A: Clone + Mul<Output = A> + One,
    {
        self.values().iter().fold(A::one(), |acc, elt| acc * elt.clone())
    }

    /// Return the smallest element, or `None` for an empty array.
    ///
    /// Elements that are not comparable (`NaN`) are skipped.
    pub fn min(&self) -> Option<A>
    where
        A: Clone + PartialOrd,
    {
        self.values().iter().fold(None, |acc: Option<&A>, elt| match acc {
            Some(m) if !(elt < m) => Some(m),
            _ => Some(elt),
        })
        .cloned()
    }

    /// Return the largest element, or `None` for an empty array.
    pub fn max(&self) -> Option<A>
    where
        A: Clone + PartialOrd,
    {
        self.values().iter().fold(None, |acc: Option<&A>, elt| match acc {
            Some(m) if !(elt > m) => Some(m),
            _ => Some(elt),
        })
        .cloned()
    }

    /// Return `true` if any element is nonzero.
    pub fn any(&self) -> bool
    where
        A: Zero,
    {
        self.values().iter().any(|elt| !elt.is_zero())
    }

    /// Return `true` if every element is nonzero (or the array is empty).
    pub fn all(&self) -> bool
    where
        A: Zero,
    {
        self.values().iter().all(|elt| !elt.is_zero())
    }

    /// Combine the items along `axes` element by element with `f`, starting
    /// from `init` (or from the first item).
    fn reduce_axes<F>(&self, axes: &[Axis], init: Option<A>, mut f: F) -> Result<Array<A>, ShapeError>
    where
        A: Clone,
        F: FnMut(A, A) -> A,
    {
        let mut iter = self.axis_iter(axes)?;
        let itemshape = iter.itemshape().to_vec();
        let mut acc = match init {
            Some(x) => vec![x; size_of_shape(&itemshape)],
            None => match iter.next() {
                Some(first) => first.ravel(),
                None => {
                    return Err(ShapeError::with_context(
                        ErrorKind::EmptyReduction,
                        format!("no items along {:?} of shape {:?}", axes, self.shape()),
                    ))
                }
            },
        };
        for item in iter {
            let values = item.values();
            for (a, b) in acc.iter_mut().zip(values.iter()) {
                *a = f(a.clone(), b.clone());
            }
        }
        Ok(Array::from_parts(itemshape, acc))
    }

    /// Return the sum of the items along `axes`.
    ///
    /// **Errors** if an axis is out of bounds or repeated.
    ///
    /// ```
    /// use arraymath::{array, Axis};
    ///
    /// let a = array![[1, 2, 3],
    ///                [4, 5, 6]];
    /// assert_eq!(a.sum_axes(&[Axis(0)]).unwrap(), array![5, 7, 9]);
    /// assert_eq!(a.sum_axes(&[Axis(1)]).unwrap(), array![6, 15]);
    /// assert_eq!(a.sum_axes(&[]).unwrap().item(), Ok(21));
    /// ```
    pub fn sum_axes(&self, axes: &[Axis]) -> Result<Array<A>, ShapeError>
    where
        A: Clone + Add<Output = A> + Zero,
    {
        if axes.is_empty() {
            return Ok(Array::from_parts(Vec::new(), vec![self.sum()]));
        }
        self.reduce_axes(axes, Some(A::zero()), |a, b| a + b)
    }

    /// Return the product of the items along `axes`.
    pub fn prod_axes(&self, axes: &[Axis]) -> Result<Array<A>, ShapeError>
    where
        A: Clone + Mul<Output = A> + One,
    {
        if axes.is_empty() {
            return Ok(Array::from_parts(Vec::new(), vec![self.prod()]));
        }
        self.reduce_axes(axes, Some(A::one()), |a, b| a * b)
    }

    /// Return the element-wise minimum of the items along `axes`.
    ///
    /// **Errors** with `ErrorKind::EmptyReduction` if there are no items.
    pub fn min_axes(&self, axes: &[Axis]) -> Result<Array<A>, ShapeError>
    where
        A: Clone + PartialOrd,
    {
        if axes.is_empty() {
            let m = self.min().ok_or_else(|| from_kind(ErrorKind::EmptyReduction))?;
            return Ok(Array::from_parts(Vec::new(), vec![m]));
        }
        self.reduce_axes(axes, None, |a, b| if b < a { b } else { a })
    }

    /// Return the element-wise maximum of the items along `axes`.
    ///
    /// **Errors** with `ErrorKind::EmptyReduction` if there are no items.
    pub fn max_axes(&self, axes: &[Axis]) -> Result<Array<A>, ShapeError>
    where
        A: Clone + PartialOrd,
    {
        if axes.is_empty() {
            let m = self.max().ok_or_else(|| from_kind(ErrorKind::EmptyReduction))?;
            return Ok(Array::from_parts(Vec::new(), vec![m]));
        }
        self.reduce_axes(axes, None, |a, b| if b > a { b } else { a })
    }

    /// Return, per element of an item, whether any item along `axes` is
    /// nonzero there.
    pub fn any_axes(&self, axes: &[Axis]) -> Result<Array<bool>, ShapeError>
    where
        A: Zero,
    {
        if axes.is_empty() {
            return Ok(Array::from_parts(Vec::new(), vec![self.any()]));
        }
        self.map(|elt| !elt.is_zero())
            .reduce_axes(axes, Some(false), |a, b| a || b)
    }

    /// Return, per element of an item, whether every item along `axes` is
    /// nonzero there.
    pub fn all_axes(&self, axes: &[Axis]) -> Result<Array<bool>, ShapeError>
    where
        A: Zero,
    {
        if axes.is_empty() {
            return Ok(Array::from_parts(Vec::new(), vec![self.all()]));
        }
        self.map(|elt| !elt.is_zero())
            .reduce_axes(axes, Some(true), |a, b| a && b)
    }

    /// Absolute value of each element.
    #[must_use = "method returns a new array and does not mutate the original value"]
    pub fn abs(&self) -> Array<A>
    where
        A: Signed,
    {
        self.map(Signed::abs)
    }
}

#[cfg(test)]
mod tests {
    use crate::{array, Array, Axis, ErrorKind};

    #[test]
    fn reduce_over_several_axes() {
        let a = Array::from_shape_fn(&[2, 3, 4], |ix| (ix[0] * 12 + ix[1] * 4 + ix[2]) as i64);
        let s = a.sum_axes(&[Axis(0), Axis(2)]).unwrap();
        assert_eq!(s, array![60, 92, 124]);
        let whole = a.sum_axes(&[Axis(0), Axis(1), Axis(2)]).unwrap();
        assert_eq!(whole.ndim(), 0);
        assert_eq!(whole.item(), Ok(a.sum()));
    }

    #[test]
    fn min_max_of_items() {
        let a = array![[3, 9, 1], [4, 2, 8]];
        assert_eq!(a.min(), Some(1));
        assert_eq!(a.max(), Some(9));
        assert_eq!(a.min_axes(&[Axis(0)]).unwrap(), array![3, 2, 1]);
        assert_eq!(a.max_axes(&[Axis(1)]).unwrap(), array![9, 8]);
    }

    #[test]
    fn empty_reductions() {
        let e = Array::<f64>::zeros(&[0, 3]);
        assert_eq!(e.sum(), 0.);
        assert_eq!(e.prod(), 1.);
        assert_eq!(e.min(), None);
        assert_eq!(e.max_axes(&[Axis(0)]).unwrap_err().kind(), ErrorKind::EmptyReduction);
        assert_eq!(e.sum_axes(&[Axis(0)]).unwrap(), Array::zeros(&[3]));
    }

    #[test]
    fn truthiness() {
        let a = array![[0, 1], [0, 0]];
        assert!(a.any());
        assert!(!a.all());
        assert_eq!(a.any_axes(&[Axis(0)]).unwrap(), array![false, true]);
        assert_eq!(a.all_axes(&[Axis(1)]).unwrap(), array![false, false]);
    }
}
