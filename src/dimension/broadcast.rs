// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fill coercion: combining operands of different shapes by repetition.
//!
//! Shapes are aligned at their innermost axis (the shorter one is padded
//! with leading 1s). Along every axis the smaller extent must divide the
//! larger one; the smaller operand is then tiled cyclically, so that
//! target index `i` reads source index `i mod extent`.

use super::{default_strides, first_index, next_for, size_of_shape};
use crate::error::{incompatible_shapes, ShapeError};
use crate::Ix;

fn padded(shape: &[Ix], ndim: usize) -> Vec<Ix> {
    let mut out = vec![1; ndim - shape.len()];
    out.extend_from_slice(shape);
    out
}

#[inline]
fn tiles(small: Ix, large: Ix) -> bool {
    if small == 0 {
        large == 0
    } else {
        large % small == 0
    }
}

/// Calculate the common shape two operands are filled to.
/// Return an error if neither extent divides the other along some axis.
pub(crate) fn co_broadcast(shape1: &[Ix], shape2: &[Ix]) -> Result<Vec<Ix>, ShapeError> {
    let ndim = shape1.len().max(shape2.len());
    let a = padded(shape1, ndim);
    let b = padded(shape2, ndim);
    let mut out = Vec::with_capacity(ndim);
    for (&x, &y) in a.iter().zip(&b) {
        let (small, large) = if x <= y { (x, y) } else { (y, x) };
        if !tiles(small, large) {
            return Err(incompatible_shapes(shape1, shape2));
        }
        out.push(large);
    }
    Ok(out)
}

/// Repeat the row-major `values` of shape `from` until they fill `to`.
///
/// `from` may have fewer axes than `to` but never more, and each extent of
/// `to` must be a multiple of the aligned extent of `from`.
pub(crate) fn fill_to<A: Clone>(values: &[A], from: &[Ix], to: &[Ix]) -> Result<Vec<A>, ShapeError> {
    debug_assert_eq!(values.len(), size_of_shape(from));
    if from.len() > to.len() {
        return Err(incompatible_shapes(from, to));
    }
    if from == to {
        return Ok(values.to_vec());
    }
    let src = padded(from, to.len());
    if !src.iter().zip(to).all(|(&s, &t)| tiles(s, t)) {
        return Err(incompatible_shapes(from, to));
    }
    let strides = default_strides(&src);
    let mut out = Vec::with_capacity(size_of_shape(to));
    if let Some(mut index) = first_index(to) {
        loop {
            let offset: usize = index
                .iter()
                .zip(&src)
                .zip(&strides)
                .map(|((&i, &s), &stride)| (i % s) * stride)
                .sum();
            out.push(values[offset].clone());
            if !next_for(to, &mut index) {
                break;
            }
        }
    }
    Ok(out)
}
