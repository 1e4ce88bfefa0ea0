// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shape arithmetic shared by every array operation.
//!
//! Arrays are stored in row-major order, so the place value ("stride") of
//! axis *k* is the product of the extents of every axis after *k*.

use crate::error::{out_of_bounds, ShapeError};
use crate::Ix;

pub use self::axis::Axis;
pub(crate) use self::broadcast::{co_broadcast, fill_to};

mod axis;
mod broadcast;

/// Return the number of elements of an array of shape `shape`.
///
/// The empty shape describes a single element.
#[inline]
pub fn size_of_shape(shape: &[Ix]) -> usize {
    shape.iter().product()
}

/// Compute default (row-major) strides
///
/// Shape (a, b, c) => Give strides (b * c, c, 1)
pub(crate) fn default_strides(shape: &[Ix]) -> Vec<usize> {
    let mut strides = vec![1; shape.len()];
    let mut cum_prod = 1;
    for (s, &dim) in strides.iter_mut().zip(shape).rev() {
        *s = cum_prod;
        cum_prod *= dim;
    }
    strides
}

/// The first index of `shape` in row-major order, or `None` if the shape
/// has no elements.
pub(crate) fn first_index(shape: &[Ix]) -> Option<Vec<Ix>> {
    if shape.iter().any(|&d| d == 0) {
        None
    } else {
        Some(vec![0; shape.len()])
    }
}

/// Iteration -- Use `shape` as size and advance `index` to the next index
/// in row-major order. Return `false` when there are no more.
pub(crate) fn next_for(shape: &[Ix], index: &mut [Ix]) -> bool {
    for (&dim, ix) in shape.iter().zip(index.iter_mut()).rev() {
        *ix += 1;
        if *ix == dim {
            *ix = 0;
        } else {
            return true;
        }
    }
    false
}

/// Flat offset of `index` for the given strides.
#[inline]
pub(crate) fn offset_of(strides: &[usize], index: &[Ix]) -> usize {
    strides.iter().zip(index).map(|(s, i)| s * i).sum()
}

/// Split a flat row-major position into one coordinate per axis.
pub(crate) fn unravel(mut flat: usize, shape: &[Ix]) -> Vec<Ix> {
    let mut index = vec![0; shape.len()];
    for (ix, &dim) in index.iter_mut().zip(shape).rev() {
        if dim != 0 {
            *ix = flat % dim;
            flat /= dim;
        }
    }
    index
}

/// Wrap a possibly negative index into `0..len`.
#[inline]
pub(crate) fn wrap_index(index: isize, len: usize) -> Result<usize, ShapeError> {
    let wrapped = if index < 0 { index + len as isize } else { index };
    if wrapped < 0 || wrapped as usize >= len {
        Err(out_of_bounds(index, len))
    } else {
        Ok(wrapped as usize)
    }
}

/// The shape left after removing `axes` from `shape`.
pub(crate) fn remove_axes(shape: &[Ix], axes: &[usize]) -> Vec<Ix> {
    shape
        .iter()
        .enumerate()
        .filter(|(i, _)| !axes.contains(i))
        .map(|(_, &d)| d)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn strides_are_row_major() {
        assert_eq!(default_strides(&[2, 3, 4]), vec![12, 4, 1]);
        assert_eq!(default_strides(&[5]), vec![1]);
        assert_eq!(default_strides(&[]), Vec::<usize>::new());
    }

    #[test]
    fn next_for_walks_every_index() {
        let shape = [2, 3];
        let mut index = first_index(&shape).unwrap();
        let mut seen = vec![index.clone()];
        while next_for(&shape, &mut index) {
            seen.push(index.clone());
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[4], vec![1, 1]);
        assert!(first_index(&[3, 0]).is_none());
    }

    #[test]
    fn unravel_inverts_offset() {
        let shape = [3, 4, 5];
        let strides = default_strides(&shape);
        for flat in 0..60 {
            assert_eq!(offset_of(&strides, &unravel(flat, &shape)), flat);
        }
    }

    #[test]
    fn wrap_negative_indices() {
        assert_eq!(wrap_index(-1, 4), Ok(3));
        assert_eq!(wrap_index(2, 4), Ok(2));
        assert_eq!(wrap_index(4, 4).unwrap_err().kind(), ErrorKind::OutOfBounds);
        assert_eq!(wrap_index(-5, 4).unwrap_err().kind(), ErrorKind::OutOfBounds);
    }
}
