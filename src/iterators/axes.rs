// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::iter::FusedIterator;
use std::ops::Deref;

use crate::dimension::{self, remove_axes, size_of_shape, unravel, wrap_index};
use crate::imp_prelude::*;

/// An iterator over the items of an array along an ordered list of axes.
///
/// Each item is the sub-array at one coordinate of the iterated axes, with
/// those axes removed; coordinates are visited in row-major order of the
/// iterated axes, in the order they were given. When the iterated axes are
/// exactly the leading axes `0..k`, items are aliases of the base array;
/// otherwise they are copies.
///
/// Items can also be addressed by their linear position, see
/// [`to_array_coords`](ArrayIterBase::to_array_coords).
///
/// See [`ArrayIter`] and [`ArrayIterMut`].
pub struct ArrayIterBase<R> {
    base: R,
    axes: Vec<usize>,
    itemshape: Vec<Ix>,
    /// Place value of each iterated axis in the linear item index.
    subsizes: Vec<usize>,
    size: usize,
    index: Option<Vec<Ix>>,
    remaining: usize,
}

/// An axis iterator that borrows the array.
///
/// Created with [`Array::axis_iter`] and [`Array::outer_iter`].
pub type ArrayIter<'a, A> = ArrayIterBase<&'a Array<A>>;

/// An axis iterator that borrows the array mutably, adding
/// [`set`](ArrayIterBase::set) and [`delete`](ArrayIterBase::delete).
///
/// Created with [`Array::axis_iter_mut`].
pub type ArrayIterMut<'a, A> = ArrayIterBase<&'a mut Array<A>>;

fn check_axes(shape: &[Ix], axes: &[Axis]) -> Result<Vec<usize>, ShapeError> {
    if axes.is_empty() {
        return check_axes(shape, &[Axis(0)]);
    }
    let mut out: Vec<usize> = Vec::with_capacity(axes.len());
    for axis in axes {
        let ax = axis.index();
        if ax >= shape.len() {
            return Err(ShapeError::with_context(
                ErrorKind::OutOfBounds,
                format!("axis {} for array of {} dimensions", ax, shape.len()),
            ));
        }
        if out.contains(&ax) {
            return Err(ShapeError::with_context(
                ErrorKind::IncompatibleShape,
                format!("axis {} is iterated twice", ax),
            ));
        }
        out.push(ax);
    }
    Ok(out)
}

impl<A, R> ArrayIterBase<R>
where
    R: Deref<Target = Array<A>>,
{
    /// Create an iterator over `base` along `axes`. No axes means axis 0.
    ///
    /// **Errors** if an axis is out of bounds or given twice.
    pub fn new(base: R, axes: &[Axis]) -> Result<Self, ShapeError> {
        let axes = check_axes(base.shape(), axes)?;
        let mut iter = ArrayIterBase {
            base,
            axes,
            itemshape: Vec::new(),
            subsizes: Vec::new(),
            size: 0,
            index: None,
            remaining: 0,
        };
        iter.reset();
        Ok(iter)
    }

    /// Create an iterator along a single axis known to be in bounds.
    pub(crate) fn over_axis(base: R, axis: usize) -> Self {
        debug_assert!(axis < base.ndim());
        let mut iter = ArrayIterBase {
            base,
            axes: vec![axis],
            itemshape: Vec::new(),
            subsizes: Vec::new(),
            size: 0,
            index: None,
            remaining: 0,
        };
        iter.reset();
        iter
    }

    /// Recompute the cached shapes from the base array and rewind.
    fn reset(&mut self) {
        let shape = self.base.shape();
        let extents: Vec<Ix> = self.axes.iter().map(|&ax| shape[ax]).collect();
        self.itemshape = remove_axes(shape, &self.axes);
        self.subsizes = dimension::default_strides(&extents);
        self.size = size_of_shape(&extents);
        self.index = dimension::first_index(&extents);
        self.remaining = self.size;
    }

    fn extents(&self) -> Vec<Ix> {
        let shape = self.base.shape();
        self.axes.iter().map(|&ax| shape[ax]).collect()
    }

    /// The iterated axes, in iteration order.
    pub fn axes(&self) -> &[usize] {
        &self.axes
    }

    /// The shape of each item: the base shape without the iterated axes.
    pub fn itemshape(&self) -> &[Ix] {
        &self.itemshape
    }

    /// The place value of each iterated axis in the linear item index.
    pub fn subsizes(&self) -> &[usize] {
        &self.subsizes
    }

    /// The total number of items, consumed or not.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Turn the full-axis coordinate `coords` of the iterated axes into an
    /// index list on the base array.
    fn base_info(&self, coords: &[SliceElem]) -> Vec<SliceElem> {
        let ndim = self.base.ndim();
        let mut info = vec![SliceElem::from(..); ndim];
        for (&ax, &elem) in self.axes.iter().zip(coords) {
            info[ax] = elem;
        }
        while info.last().map_or(false, SliceElem::is_full) {
            info.pop();
        }
        info
    }

    /// Map an item position to an index list on the base array.
    ///
    /// An integer is a linear item index (negative values count from the
    /// back), decomposed into one coordinate per iterated axis. A slice of
    /// items is only supported when iterating a single axis.
    ///
    /// **Errors** with `ErrorKind::OutOfBounds` for an index past the last
    /// item and `ErrorKind::Unsupported` for a slice over several axes.
    ///
    /// ```
    /// use arraymath::{array, s, Axis, SliceElem};
    ///
    /// let a = array![[1, 2, 3], [4, 5, 6]];
    /// let iter = a.axis_iter(&[Axis(1)]).unwrap();
    /// assert_eq!(iter.to_array_coords(-1).unwrap(), s![.., 2].to_vec());
    /// let all = a.axis_iter(&[Axis(0), Axis(1)]).unwrap();
    /// assert_eq!(all.to_array_coords(4).unwrap(), s![1, 1].to_vec());
    /// ```
    pub fn to_array_coords(&self, index: impl Into<SliceElem>) -> Result<Vec<SliceElem>, ShapeError> {
        match index.into() {
            SliceElem::Index(i) => {
                let linear = wrap_index(i, self.size)?;
                let coords: Vec<SliceElem> = unravel(linear, &self.extents())
                    .into_iter()
                    .map(|c| SliceElem::Index(c as Ixs))
                    .collect();
                Ok(self.base_info(&coords))
            }
            SliceElem::Slice(s) if self.axes.len() == 1 => Ok(self.base_info(&[SliceElem::Slice(s)])),
            SliceElem::Slice(s) => Err(ShapeError::with_context(
                ErrorKind::Unsupported,
                format!("slice {} over {} iterated axes", s, self.axes.len()),
            )),
        }
    }

    /// Return the item (or, for a slice, the items) at `index`.
    ///
    /// ```
    /// use arraymath::{array, Axis};
    ///
    /// let a = array![[1, 2, 3], [4, 5, 6]];
    /// let cols = a.axis_iter(&[Axis(1)]).unwrap();
    /// assert_eq!(cols.get(1).unwrap(), array![2, 5]);
    /// assert_eq!(cols.get(1..).unwrap(), array![[2, 3], [5, 6]]);
    /// ```
    pub fn get(&self, index: impl Into<SliceElem>) -> Result<Array<A>, ShapeError>
    where
        A: Clone,
    {
        let info = self.to_array_coords(index)?;
        self.base.get(&info)
    }
}

impl<'a, A> ArrayIterBase<&'a mut Array<A>> {
    /// Assign `value` to the item (or items) at `index` of the base array.
    /// `value` is repeated to fill the addressed region.
    ///
    /// ```
    /// use arraymath::{array, Axis};
    ///
    /// let mut a = array![[1, 2, 3], [4, 5, 6]];
    /// let mut cols = a.axis_iter_mut(&[Axis(1)]).unwrap();
    /// cols.set(0, &array![0]).unwrap();
    /// assert_eq!(a, array![[0, 2, 3], [0, 5, 6]]);
    /// ```
    pub fn set(&mut self, index: impl Into<SliceElem>, value: &Array<A>) -> Result<(), ShapeError>
    where
        A: Clone,
    {
        let info = self.to_array_coords(index)?;
        self.base.set(&info, value)
    }

    /// Delete the item (or items) at `index` from the base array and rewind
    /// the iterator over the new shape.
    ///
    /// **Errors** like [`Array::delete`]; deleting a single item of a
    /// multi-axis iteration would make the base ragged.
    ///
    /// ```
    /// use arraymath::{array, Axis};
    ///
    /// let mut a = array![[1, 2, 3], [4, 5, 6]];
    /// let mut cols = a.axis_iter_mut(&[Axis(1)]).unwrap();
    /// cols.delete(1).unwrap();
    /// assert_eq!(cols.size(), 2);
    /// assert_eq!(a, array![[1, 3], [4, 6]]);
    /// ```
    pub fn delete(&mut self, index: impl Into<SliceElem>) -> Result<(), ShapeError>
    where
        A: Clone,
    {
        let info = self.to_array_coords(index)?;
        self.base.delete(&info)?;
        self.reset();
        Ok(())
    }
}

impl<A, R> Iterator for ArrayIterBase<R>
where
    R: Deref<Target = Array<A>>,
    A: Clone,
{
    type Item = Array<A>;

    fn next(&mut self) -> Option<Array<A>> {
        let index = self.index.take()?;
        let coords: Vec<SliceElem> = index.iter().map(|&i| SliceElem::Index(i as Ixs)).collect();
        let mut next = index;
        if dimension::next_for(&self.extents(), &mut next) {
            self.index = Some(next);
        }
        self.remaining -= 1;
        let info = self.base_info(&coords);
        // coordinates come from the base shape
        self.base.get(&info).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<A, R> ExactSizeIterator for ArrayIterBase<R>
where
    R: Deref<Target = Array<A>>,
    A: Clone,
{
}

impl<A, R> FusedIterator for ArrayIterBase<R>
where
    R: Deref<Target = Array<A>>,
    A: Clone,
{
}

/// # Axis iteration
impl<A> Array<A> {
    /// Return an iterator over the items along `axes` (see
    /// [`ArrayIterBase`]). No axes means axis 0.
    ///
    /// **Errors** if an axis is out of bounds or given twice.
    ///
    /// ```
    /// use arraymath::{array, Axis};
    ///
    /// let a = array![[1, 2, 3], [4, 5, 6]];
    /// let cols: Vec<_> = a.axis_iter(&[Axis(1)]).unwrap().collect();
    /// assert_eq!(cols, vec![array![1, 4], array![2, 5], array![3, 6]]);
    /// ```
    pub fn axis_iter(&self, axes: &[Axis]) -> Result<ArrayIter<'_, A>, ShapeError> {
        ArrayIterBase::new(self, axes)
    }

    /// Return a mutable iterator over the items along `axes`.
    pub fn axis_iter_mut(&mut self, axes: &[Axis]) -> Result<ArrayIterMut<'_, A>, ShapeError> {
        ArrayIterBase::new(self, axes)
    }

    /// Return an iterator over the items along axis 0.
    ///
    /// **Errors** for a zero-dimensional array.
    pub fn outer_iter(&self) -> Result<ArrayIter<'_, A>, ShapeError> {
        self.axis_iter(&[Axis(0)])
    }
}
