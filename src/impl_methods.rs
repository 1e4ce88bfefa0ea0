// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::rc::Rc;

use num_traits::Float;

use crate::dimension::{self, co_broadcast, default_strides, fill_to, offset_of, size_of_shape, wrap_index};
use crate::error::{check_ndim, incompatible_shapes};
use crate::imp_prelude::*;
use crate::iterators::Iter;
use crate::nested::Nested;

/// The positions an index list selects, one list per axis.
struct Selection {
    axes: Vec<Vec<Ix>>,
    /// `false` for axes addressed by an integer index; those are dropped
    /// from the shape of the result.
    keep: Vec<bool>,
}

impl Selection {
    fn shape(&self) -> Vec<Ix> {
        self.axes
            .iter()
            .zip(&self.keep)
            .filter(|(_, &keep)| keep)
            .map(|(ix, _)| ix.len())
            .collect()
    }

    /// Row-major element offsets of the selection.
    fn offsets(&self, strides: &[usize]) -> Vec<usize> {
        let lens: Vec<Ix> = self.axes.iter().map(Vec::len).collect();
        let mut out = Vec::with_capacity(size_of_shape(&lens));
        if let Some(mut index) = dimension::first_index(&lens) {
            loop {
                out.push(
                    index
                        .iter()
                        .zip(&self.axes)
                        .zip(strides)
                        .map(|((&i, ix), s)| ix[i] * s)
                        .sum(),
                );
                if !dimension::next_for(&lens, &mut index) {
                    break;
                }
            }
        }
        out
    }
}

/// # Methods For All Array Types
impl<A> Array<A> {
    /// Return the shape of the array as a slice.
    pub fn shape(&self) -> &[Ix] {
        &self.dim
    }

    /// Return the number of dimensions (axes) in the array
    pub fn ndim(&self) -> usize {
        self.dim.len()
    }

    /// Return the total number of elements in the array.
    pub fn len(&self) -> usize {
        size_of_shape(&self.dim)
    }

    /// Return the total number of elements in the array (same as `len`).
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Return whether the array has any elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the length of `axis`.
    ///
    /// **Panics** if the axis is out of bounds.
    pub fn len_of(&self, axis: Axis) -> usize {
        self.dim[axis.index()]
    }

    /// Return another handle onto the whole array. Writes through either
    /// handle are visible through the other.
    pub fn view(&self) -> Array<A> {
        self.alias(self.offset, self.dim.clone())
    }

    fn check_axis(&self, axis: Axis) -> Result<(), ShapeError> {
        if axis.index() < self.ndim() {
            Ok(())
        } else {
            Err(ShapeError::with_context(
                ErrorKind::OutOfBounds,
                format!("axis {} for array of {} dimensions", axis.index(), self.ndim()),
            ))
        }
    }

    fn select(&self, info: &[SliceElem]) -> Result<Selection, ShapeError> {
        if info.len() > self.ndim() {
            return Err(ShapeError::with_context(
                ErrorKind::OutOfBounds,
                format!("{} indices for array of {} dimensions", info.len(), self.ndim()),
            ));
        }
        let mut axes = Vec::with_capacity(self.ndim());
        let mut keep = Vec::with_capacity(self.ndim());
        for (k, &len) in self.dim.iter().enumerate() {
            match info.get(k) {
                Some(&SliceElem::Index(i)) => {
                    axes.push(vec![wrap_index(i, len)?]);
                    keep.push(false);
                }
                Some(SliceElem::Slice(s)) => {
                    axes.push(s.indices(len));
                    keep.push(true);
                }
                None => {
                    axes.push((0..len).collect());
                    keep.push(true);
                }
            }
        }
        Ok(Selection { axes, keep })
    }

    /// Return the sub-array selected by `info`, one element per leading axis
    /// (see the [`s![]`](crate::s!) macro).
    ///
    /// Integer indices wrap around from the back when negative and remove
    /// their axis; slices keep it. Axes past the end of `info` are taken
    /// whole.
    ///
    /// If `info` holds only integer indices (possibly followed by full
    /// slices) the result is an **alias** sharing storage with `self`;
    /// any other slicing returns a **copy**.
    ///
    /// **Errors** with `ErrorKind::OutOfBounds` for an index outside its
    /// axis or for more indices than axes.
    ///
    /// ```
    /// use arraymath::{array, s};
    ///
    /// let a = array![[[1, 2], [3, 4]],
    ///                [[5, 6], [7, 8]]];
    /// assert_eq!(a.get(&s![1, 0]).unwrap(), array![5, 6]);
    /// assert_eq!(a.get(&s![.., -1, 1]).unwrap(), array![4, 8]);
    /// ```
    pub fn get(&self, info: &[SliceElem]) -> Result<Array<A>, ShapeError>
    where
        A: Clone,
    {
        let sel = self.select(info)?;
        let strides = default_strides(&self.dim);
        let n_index = info.iter().take_while(|elem| elem.is_index()).count();
        if info[n_index..].iter().all(SliceElem::is_full) {
            let offset = sel.axes[..n_index]
                .iter()
                .zip(&strides)
                .map(|(ix, s)| ix[0] * s)
                .sum::<usize>();
            return Ok(self.alias(self.offset + offset, self.dim[n_index..].to_vec()));
        }
        let values = self.values();
        let v = sel
            .offsets(&strides)
            .into_iter()
            .map(|o| values[o].clone())
            .collect();
        Ok(Array::from_parts(sel.shape(), v))
    }

    /// Return a copy of the element at `index`, one integer per axis;
    /// negative values count from the back.
    ///
    /// ```
    /// use arraymath::array;
    ///
    /// let a = array![[1, 2, 3], [4, 5, 6]];
    /// assert_eq!(a.at(&[1, -1]), Ok(6));
    /// assert!(a.at(&[2, 0]).is_err());
    /// ```
    pub fn at(&self, index: &[Ixs]) -> Result<A, ShapeError>
    where
        A: Clone,
    {
        if index.len() != self.ndim() {
            return Err(ShapeError::with_context(
                ErrorKind::OutOfBounds,
                format!("{} indices for array of {} dimensions", index.len(), self.ndim()),
            ));
        }
        let mut ix = Vec::with_capacity(index.len());
        for (&i, &len) in index.iter().zip(&self.dim) {
            ix.push(wrap_index(i, len)?);
        }
        let offset = offset_of(&default_strides(&self.dim), &ix);
        Ok(self.values()[offset].clone())
    }

    /// Return the only element of a one-element array (for example a
    /// zero-dimensional one).
    ///
    /// **Errors** if the array does not have exactly one element.
    pub fn item(&self) -> Result<A, ShapeError>
    where
        A: Clone,
    {
        if self.len() != 1 {
            return Err(ShapeError::with_context(
                ErrorKind::IncompatibleShape,
                format!("array of shape {:?} is not a single element", self.dim),
            ));
        }
        Ok(self.values()[0].clone())
    }

    /// Consume a zero-dimensional array and return its element.
    ///
    /// **Errors** with `ErrorKind::FixedDimensionality` for any other
    /// dimensionality.
    ///
    /// ```
    /// use arraymath::{array, s};
    ///
    /// let a = array![[1, 2], [3, 4]];
    /// assert_eq!(a.get(&s![1, 0]).unwrap().into_scalar(), Ok(3));
    /// assert!(a.into_scalar().is_err());
    /// ```
    pub fn into_scalar(self) -> Result<A, ShapeError>
    where
        A: Clone,
    {
        check_ndim("scalar", 0, self.ndim())?;
        self.item()
    }

    /// Write `value` into the region selected by `info`, through shared
    /// storage. Used by `set` and by the mutable axis iterator.
    pub(crate) fn assign_region(&self, info: &[SliceElem], value: &Array<A>) -> Result<(), ShapeError>
    where
        A: Clone,
    {
        let sel = self.select(info)?;
        let filled = fill_to(&value.ravel(), value.shape(), &sel.shape())?;
        let offsets = sel.offsets(&default_strides(&self.dim));
        let mut values = self.values_mut();
        for (o, x) in offsets.into_iter().zip(filled) {
            values[o] = x;
        }
        Ok(())
    }

    /// Assign `value` to the region selected by `info`.
    ///
    /// `value` must have the shape of the region, or a shape that fills it
    /// by repetition: at most as many dimensions, each region extent a
    /// multiple of the matching (innermost-aligned) value extent.
    ///
    /// **Errors** with `ErrorKind::IncompatibleShape` if the value does not
    /// fill the region, or `ErrorKind::OutOfBounds` for a bad index.
    ///
    /// ```
    /// use arraymath::{array, s};
    ///
    /// let mut a = array![[1, 2, 3, 4], [5, 6, 7, 8]];
    /// a.set(&s![.., 0..2], &array![0, 9]).unwrap();
    /// assert_eq!(a, array![[0, 9, 3, 4], [0, 9, 7, 8]]);
    /// assert!(a.set(&s![0], &array![1, 2, 3]).is_err());
    /// ```
    pub fn set(&mut self, info: &[SliceElem], value: &Array<A>) -> Result<(), ShapeError>
    where
        A: Clone,
    {
        self.assign_region(info, value)
    }

    /// Assign the scalar `value` to every element of the region selected by
    /// `info`.
    pub fn set_scalar(&mut self, info: &[SliceElem], value: A) -> Result<(), ShapeError>
    where
        A: Clone,
    {
        let sel = self.select(info)?;
        let offsets = sel.offsets(&default_strides(&self.dim));
        let mut values = self.values_mut();
        for o in offsets {
            values[o] = value.clone();
        }
        Ok(())
    }

    /// Set all elements in the array to `x`.
    pub fn fill(&mut self, x: A)
    where
        A: Clone,
    {
        for elt in self.values_mut().iter_mut() {
            *elt = x.clone();
        }
    }

    /// Return the axis and the sorted positions along it that `info`
    /// deletes: the last element of `info` that is not a full slice.
    fn deletion_target(&self, info: &[SliceElem]) -> Result<(usize, Vec<Ix>), ShapeError> {
        if info.is_empty() {
            return Err(ShapeError::with_context(
                ErrorKind::Unsupported,
                "delete needs at least one index",
            ));
        }
        let sel = self.select(info)?;
        let axis = info.iter().rposition(|elem| !elem.is_full()).unwrap_or(info.len() - 1);
        for k in 0..axis {
            let mut covered = sel.axes[k].clone();
            covered.sort_unstable();
            covered.dedup();
            if covered.len() != self.dim[k] {
                return Err(ShapeError::with_context(
                    ErrorKind::RaggedInput,
                    format!(
                        "deleting along axis {} from part of axis {} would leave a ragged array",
                        axis, k
                    ),
                ));
            }
        }
        let mut remove = sel.axes[axis].clone();
        remove.sort_unstable();
        remove.dedup();
        Ok((axis, remove))
    }

    /// Return a copy with only the positions `keep` of `axis`, in that order.
    pub(crate) fn take_along(&self, axis: usize, keep: &[Ix]) -> Array<A>
    where
        A: Clone,
    {
        let sel = Selection {
            axes: self
                .dim
                .iter()
                .enumerate()
                .map(|(k, &len)| if k == axis { keep.to_vec() } else { (0..len).collect() })
                .collect(),
            keep: vec![true; self.ndim()],
        };
        let values = self.values();
        let v = sel
            .offsets(&default_strides(&self.dim))
            .into_iter()
            .map(|o| values[o].clone())
            .collect();
        Array::from_parts(sel.shape(), v)
    }

    /// Return a copy of the array without the positions selected by `info`.
    ///
    /// The deletion happens along the axis of the last element of `info`
    /// that is not a full slice; every earlier element must select its whole
    /// axis, otherwise the result would be ragged.
    ///
    /// **Errors** with `ErrorKind::RaggedInput` when the result would be
    /// ragged, or `ErrorKind::OutOfBounds` for a bad index.
    ///
    /// ```
    /// use arraymath::{array, s};
    ///
    /// let a = array![[1, 2, 3], [4, 5, 6]];
    /// assert_eq!(a.deleted(&s![0]).unwrap(), array![[4, 5, 6]]);
    /// assert_eq!(a.deleted(&s![.., 1]).unwrap(), array![[1, 3], [4, 6]]);
    /// assert!(a.deleted(&s![0, 1]).is_err());
    /// ```
    pub fn deleted(&self, info: &[SliceElem]) -> Result<Array<A>, ShapeError>
    where
        A: Clone,
    {
        let (axis, remove) = self.deletion_target(info)?;
        let keep: Vec<Ix> = (0..self.dim[axis])
            .filter(|i| remove.binary_search(i).is_err())
            .collect();
        Ok(self.take_along(axis, &keep))
    }

    /// Delete the positions selected by `info` in place (see `deleted`).
    pub fn delete(&mut self, info: &[SliceElem]) -> Result<(), ShapeError>
    where
        A: Clone,
    {
        *self = self.deleted(info)?;
        Ok(())
    }

    /// Like `deleted`, but an axis left with a single position is removed
    /// altogether.
    ///
    /// ```
    /// use arraymath::{array, s};
    ///
    /// let a = array![[1, 2], [3, 4]];
    /// assert_eq!(a.stripped(&s![0]).unwrap(), array![3, 4]);
    /// assert_eq!(a.stripped(&s![.., -1]).unwrap(), array![1, 3]);
    /// ```
    pub fn stripped(&self, info: &[SliceElem]) -> Result<Array<A>, ShapeError>
    where
        A: Clone,
    {
        let (axis, _) = self.deletion_target(info)?;
        let mut out = self.deleted(info)?;
        if out.dim[axis] == 1 {
            out.dim.remove(axis);
        }
        Ok(out)
    }

    /// Strip the positions selected by `info` in place (see `stripped`).
    pub fn strip(&mut self, info: &[SliceElem]) -> Result<(), ShapeError>
    where
        A: Clone,
    {
        *self = self.stripped(info)?;
        Ok(())
    }

    /// Return a copy of the elements regrouped into `shape`.
    ///
    /// **Errors** if `shape` does not hold exactly as many elements.
    ///
    /// ```
    /// use arraymath::array;
    ///
    /// let a = array![1, 2, 3, 4, 5, 6];
    /// assert_eq!(a.toshape(&[3, 2]).unwrap(), array![[1, 2], [3, 4], [5, 6]]);
    /// assert!(a.toshape(&[4]).is_err());
    /// ```
    pub fn toshape(&self, shape: &[Ix]) -> Result<Array<A>, ShapeError>
    where
        A: Clone,
    {
        if size_of_shape(shape) != self.len() {
            return Err(incompatible_shapes(&self.dim, shape));
        }
        Ok(Array::from_parts(shape.to_vec(), self.ravel()))
    }

    /// Regroup the elements into `shape` in place. The storage is kept, so
    /// existing aliases still see the same elements.
    ///
    /// **Errors** if `shape` does not hold exactly as many elements.
    pub fn reshape(&mut self, shape: &[Ix]) -> Result<(), ShapeError> {
        if size_of_shape(shape) != self.len() {
            return Err(incompatible_shapes(&self.dim, shape));
        }
        self.dim = shape.to_vec();
        Ok(())
    }

    /// Return a copy of the flattened elements regrouped into `shape`,
    /// truncated or padded with `fill` as needed.
    ///
    /// ```
    /// use arraymath::array;
    ///
    /// let a = array![[1, 2], [3, 4]];
    /// assert_eq!(a.tosize(&[3], 0), array![1, 2, 3]);
    /// assert_eq!(a.tosize(&[2, 3], 0), array![[1, 2, 3], [4, 0, 0]]);
    /// ```
    pub fn tosize(&self, shape: &[Ix], fill: A) -> Array<A>
    where
        A: Clone,
    {
        let mut v = self.ravel();
        v.resize(size_of_shape(shape), fill);
        Array::from_parts(shape.to_vec(), v)
    }

    /// Resize in place (see `tosize`).
    pub fn resize(&mut self, shape: &[Ix], fill: A)
    where
        A: Clone,
    {
        *self = self.tosize(shape, fill);
    }

    /// Return a copy resized along each axis independently: elements keep
    /// their index, new positions hold `fill`. A negative entry in `shape`
    /// leaves that axis unchanged.
    ///
    /// **Errors** if `shape` does not have one entry per axis.
    ///
    /// ```
    /// use arraymath::array;
    ///
    /// let a = array![[1, 2, 3], [4, 5, 6]];
    /// assert_eq!(a.trim(&[3, 2], 0).unwrap(), array![[1, 2], [4, 5], [0, 0]]);
    /// assert_eq!(a.trim(&[-1, 1], 0).unwrap(), array![[1], [4]]);
    /// ```
    pub fn trim(&self, shape: &[Ixs], fill: A) -> Result<Array<A>, ShapeError>
    where
        A: Clone,
    {
        if shape.len() != self.ndim() {
            return Err(ShapeError::with_context(
                ErrorKind::IncompatibleShape,
                format!("trim to {:?} must keep {} dimensions", shape, self.ndim()),
            ));
        }
        let target: Vec<Ix> = shape
            .iter()
            .zip(&self.dim)
            .map(|(&t, &d)| if t < 0 { d } else { t as Ix })
            .collect();
        let strides = default_strides(&self.dim);
        let values = self.values();
        Ok(Array::from_shape_fn(&target, |ix| {
            if ix.iter().zip(&self.dim).all(|(i, d)| i < d) {
                values[offset_of(&strides, ix)].clone()
            } else {
                fill.clone()
            }
        }))
    }

    /// Retrim in place (see `trim`).
    pub fn retrim(&mut self, shape: &[Ixs], fill: A) -> Result<(), ShapeError>
    where
        A: Clone,
    {
        *self = self.trim(shape, fill)?;
        Ok(())
    }

    /// Return a copy with the axes permuted: axis `k` of the result is axis
    /// `perm[k]` of `self`. An empty `perm` reverses the axes.
    ///
    /// **Errors** if `perm` is not a permutation of the axes.
    ///
    /// ```
    /// use arraymath::array;
    ///
    /// let a = array![[1, 2, 3], [4, 5, 6]];
    /// assert_eq!(a.transpose(&[]).unwrap(), array![[1, 4], [2, 5], [3, 6]]);
    /// assert_eq!(a.transpose(&[0, 1]).unwrap(), a);
    /// ```
    pub fn transpose(&self, perm: &[usize]) -> Result<Array<A>, ShapeError>
    where
        A: Clone,
    {
        if perm.is_empty() {
            return Ok(self.t());
        }
        let mut seen = vec![false; self.ndim()];
        let valid = perm.len() == self.ndim()
            && perm.iter().all(|&p| p < seen.len() && !std::mem::replace(&mut seen[p], true));
        if !valid {
            return Err(ShapeError::with_context(
                ErrorKind::IncompatibleShape,
                format!("{:?} is not a permutation of {} axes", perm, self.ndim()),
            ));
        }
        Ok(self.permuted(perm))
    }

    /// Return a copy with the axes reversed.
    pub fn t(&self) -> Array<A>
    where
        A: Clone,
    {
        let perm: Vec<usize> = (0..self.ndim()).rev().collect();
        self.permuted(&perm)
    }

    fn permuted(&self, perm: &[usize]) -> Array<A>
    where
        A: Clone,
    {
        let strides = default_strides(&self.dim);
        let dim: Vec<Ix> = perm.iter().map(|&p| self.dim[p]).collect();
        let moved: Vec<usize> = perm.iter().map(|&p| strides[p]).collect();
        let values = self.values();
        Array::from_shape_fn(&dim, |ix| values[offset_of(&moved, ix)].clone())
    }

    fn concatenate(&self, other: &Array<A>, axis: usize) -> Array<A>
    where
        A: Clone,
    {
        let split = self.dim[axis];
        let mut dim = self.dim.clone();
        dim[axis] += other.dim[axis];
        let (ls, rs) = (default_strides(&self.dim), default_strides(&other.dim));
        let (lhs, rhs) = (self.values(), other.values());
        let mut index = Vec::new();
        Array::from_shape_fn(&dim, |ix| {
            if ix[axis] < split {
                lhs[offset_of(&ls, ix)].clone()
            } else {
                index.clear();
                index.extend_from_slice(ix);
                index[axis] -= split;
                rhs[offset_of(&rs, &index)].clone()
            }
        })
    }

    /// Return a copy with `value` added as a new last position along
    /// `axis`. `value` is filled to the shape of one item along the axis.
    ///
    /// An empty one-dimensional array takes its item shape from `value`.
    ///
    /// **Errors** if `axis` is out of bounds or `value` does not fill an item.
    ///
    /// ```
    /// use arraymath::{array, Axis};
    ///
    /// let a = array![[1, 2, 3], [4, 5, 6]];
    /// let b = a.appended(&array![7, 8, 9], Axis(0)).unwrap();
    /// assert_eq!(b, array![[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    /// let c = a.appended(&array![0], Axis(1)).unwrap();
    /// assert_eq!(c, array![[1, 2, 3, 0], [4, 5, 6, 0]]);
    /// ```
    pub fn appended(&self, value: &Array<A>, axis: Axis) -> Result<Array<A>, ShapeError>
    where
        A: Clone,
    {
        self.check_axis(axis)?;
        let axis = axis.index();
        if self.ndim() == 1 && self.is_empty() {
            let mut dim = vec![1];
            dim.extend_from_slice(value.shape());
            return Ok(Array::from_parts(dim, value.ravel()));
        }
        let item_shape = dimension::remove_axes(&self.dim, &[axis]);
        let filled = fill_to(&value.ravel(), value.shape(), &item_shape)?;
        let mut dim = self.dim.clone();
        dim[axis] = 1;
        Ok(self.concatenate(&Array::from_parts(dim, filled), axis))
    }

    /// Append `value` in place (see `appended`).
    pub fn append(&mut self, value: &Array<A>, axis: Axis) -> Result<(), ShapeError>
    where
        A: Clone,
    {
        *self = self.appended(value, axis)?;
        Ok(())
    }

    /// Return a copy with the positions of `other` added after those of
    /// `self` along `axis`.
    ///
    /// **Errors** if the shapes differ along any other axis.
    ///
    /// ```
    /// use arraymath::{array, Axis};
    ///
    /// let a = array![[1, 2], [3, 4]];
    /// assert_eq!(a.stacked(&array![[5], [6]], Axis(1)).unwrap(),
    ///            array![[1, 2, 5], [3, 4, 6]]);
    /// ```
    pub fn stacked(&self, other: &Array<A>, axis: Axis) -> Result<Array<A>, ShapeError>
    where
        A: Clone,
    {
        self.check_axis(axis)?;
        let ax = axis.index();
        let matches = other.ndim() == self.ndim()
            && self
                .dim
                .iter()
                .zip(&other.dim)
                .enumerate()
                .all(|(k, (a, b))| k == ax || a == b);
        if !matches {
            return Err(incompatible_shapes(&self.dim, &other.dim));
        }
        Ok(self.concatenate(other, ax))
    }

    /// Stack `other` onto `self` in place (see `stacked`).
    pub fn stack(&mut self, other: &Array<A>, axis: Axis) -> Result<(), ShapeError>
    where
        A: Clone,
    {
        *self = self.stacked(other, axis)?;
        Ok(())
    }

    /// Return an independent copy of the array.
    pub fn copy(&self) -> Array<A>
    where
        A: Clone,
    {
        Array::from_parts(self.dim.clone(), self.ravel())
    }

    /// Return an independent copy of the array. Storage is flat, so this is
    /// the same as [`copy`](Array::copy): no level of the result shares
    /// anything with `self`.
    pub fn deepcopy(&self) -> Array<A>
    where
        A: Clone,
    {
        self.copy()
    }

    /// Return the elements in row-major order.
    pub fn ravel(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.values().to_vec()
    }

    /// Return the elements in row-major order, without copying if `self`
    /// is the only handle onto its storage.
    pub fn into_vec(self) -> Vec<A>
    where
        A: Clone,
    {
        let len = self.len();
        if self.offset == 0 {
            let dim = self.dim.clone();
            match Rc::try_unwrap(self.data) {
                Ok(cell) => {
                    let mut v = cell.into_inner();
                    v.truncate(len);
                    return v;
                }
                Err(data) => return Array { data, offset: 0, dim }.ravel(),
            }
        }
        self.ravel()
    }

    /// Return the elements as a nested list.
    ///
    /// ```
    /// use arraymath::{array, IntoNested};
    ///
    /// let a = array![[1, 2], [3, 4]];
    /// assert_eq!(a.tolist(), vec![vec![1, 2], vec![3, 4]].into_nested());
    /// ```
    pub fn tolist(&self) -> Nested<A>
    where
        A: Clone,
    {
        let mut elems = self.ravel().into_iter();
        Nested::from_flat(&self.dim, &mut elems).expect("Element count always matches the shape")
    }

    /// Return an iterator over copies of the elements in row-major order.
    pub fn iter(&self) -> Iter<A>
    where
        A: Clone,
    {
        Iter::new(self.ravel())
    }

    /// Call `f` by reference on each element and create a new array with
    /// the new values.
    pub fn map<'a, B, F>(&'a self, f: F) -> Array<B>
    where
        F: FnMut(&A) -> B,
        A: 'a,
    {
        let v = self.values().iter().map(f).collect();
        Array::from_parts(self.dim.clone(), v)
    }

    /// Call `f` by value on each element and create a new array with the
    /// new values.
    pub fn mapv<B, F>(&self, mut f: F) -> Array<B>
    where
        F: FnMut(A) -> B,
        A: Clone,
    {
        self.map(move |x| f(x.clone()))
    }

    /// Modify the array in place by calling `f` by mutable reference on
    /// each element. Aliases see the new values.
    ///
    /// **Panics** if `f` accesses the storage of `self`.
    pub fn map_inplace<F>(&mut self, f: F)
    where
        F: FnMut(&mut A),
    {
        self.values_mut().iter_mut().for_each(f);
    }

    /// Modify the array in place by calling `f` by value on each element.
    pub fn mapv_inplace<F>(&mut self, mut f: F)
    where
        F: FnMut(A) -> A,
        A: Clone,
    {
        self.map_inplace(move |x| *x = f(x.clone()));
    }

    /// Combine `self` and `rhs` element by element with `f`, filling the
    /// smaller operand by repetition.
    ///
    /// The shapes are aligned at their innermost axis. Along each axis the
    /// result takes the larger extent, and the smaller extent must divide
    /// it; the smaller operand is repeated cyclically.
    ///
    /// **Errors** with `ErrorKind::IncompatibleShape` if an extent does not
    /// divide the other.
    ///
    /// ```
    /// use arraymath::array;
    ///
    /// let a = array![[1, 2, 3, 4], [5, 6, 7, 8]];
    /// let b = array![10, 20];
    /// let c = a.zip_with(&b, |x, y| x + y).unwrap();
    /// assert_eq!(c, array![[11, 22, 13, 24], [15, 26, 17, 28]]);
    /// assert!(a.zip_with(&array![1, 2, 3], |x, y| x + y).is_err());
    /// ```
    pub fn zip_with<B, C, F>(&self, rhs: &Array<B>, mut f: F) -> Result<Array<C>, ShapeError>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        let dim = co_broadcast(&self.dim, &rhs.dim)?;
        let lhs = fill_to(&self.ravel(), &self.dim, &dim)?;
        let rhs = fill_to(&rhs.ravel(), &rhs.dim, &dim)?;
        let v = lhs.into_iter().zip(rhs).map(|(x, y)| f(x, y)).collect();
        Ok(Array::from_parts(dim, v))
    }

    /// Return `true` if the shapes are equal and each pair of elements
    /// differs by at most `tol`.
    pub fn all_close(&self, other: &Array<A>, tol: A) -> bool
    where
        A: Float,
    {
        self.dim == other.dim
            && self
                .values()
                .iter()
                .zip(other.values().iter())
                .all(|(&a, &b)| (a - b).abs() <= tol)
    }
}

#[cfg(test)]
mod tests {
    use crate::{array, s, Array, Axis, ErrorKind};

    #[test]
    fn integer_indexing_aliases() {
        let a = array![[1, 2, 3], [4, 5, 6]];
        let row = a.get(&s![1]).unwrap();
        assert!(row.shares_storage(&a));
        let copied = a.get(&s![1, ..2]).unwrap();
        assert!(!copied.shares_storage(&a));
        let elem = a.get(&s![0, 2]).unwrap();
        assert_eq!(elem.ndim(), 0);
        assert_eq!(elem.item(), Ok(3));
    }

    #[test]
    fn reshape_keeps_storage() {
        let mut a = array![1, 2, 3, 4];
        let b = a.view();
        a.reshape(&[2, 2]).unwrap();
        assert!(a.shares_storage(&b));
        a.resize(&[5], 0);
        assert!(!a.shares_storage(&b));
    }

    #[test]
    fn delete_keeps_rectangular() {
        let mut a = Array::from_shape_fn(&[3, 4], |ix| ix[0] * 4 + ix[1]);
        a.delete(&s![.., 1..3]).unwrap();
        assert_eq!(a, array![[0, 3], [4, 7], [8, 11]]);
        a.delete(&s![-1]).unwrap();
        assert_eq!(a, array![[0, 3], [4, 7]]);
        let err = a.delete(&s![0..1, 0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RaggedInput);
    }

    #[test]
    fn append_to_empty_adopts_item_shape() {
        let mut a = Array::<i32>::from_vec(vec![]);
        a.append(&array![1, 2, 3], Axis(0)).unwrap();
        a.append(&array![4, 5, 6], Axis(0)).unwrap();
        assert_eq!(a, array![[1, 2, 3], [4, 5, 6]]);
    }

    #[test]
    fn into_vec_of_unique_array() {
        let a = array![[1, 2], [3, 4]];
        assert_eq!(a.into_vec(), vec![1, 2, 3, 4]);
        let a = array![[1, 2], [3, 4]];
        let row = a.get(&s![1]).unwrap();
        assert_eq!(row.into_vec(), vec![3, 4]);
    }

    #[test]
    fn tolist_keeps_empty_and_scalar_shapes() {
        use crate::nested::Nested;

        let empty = Array::<i32>::zeros(&[2, 0]);
        assert_eq!(empty.tolist(), Nested::List(vec![Nested::List(vec![]), Nested::List(vec![])]));
        assert_eq!(Array::from_elem(&[], 7).tolist(), Nested::Scalar(7));
        let a = array![[1, 2], [3, 4]];
        let b = Array::from_nested(a.tolist()).unwrap();
        assert_eq!(b, a);
    }
}
