// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "arraymath"]
#![doc(html_root_url = "https://docs.rs/arraymath/0.3/")]
#![allow(clippy::many_single_char_names, clippy::deref_addrof, clippy::needless_range_loop)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `arraymath` crate provides an *n*-dimensional container for numerical
//! values, [`Array`], and its two fixed-dimensionality specializations
//! [`Matrix`] (2-D) and [`Vector`] (1-D).
//!
//! - Arrays are rectangular and row-major. Construction from nested lists
//!   checks that every sibling branch has the same shape.
//! - Arithmetic is element-wise. Operands of different shapes are combined
//!   by *fill*: the smaller operand is repeated cyclically until it covers
//!   the larger one (see [`Array::zip_with`]).
//! - Matrices add true matrix multiplication, determinants, cofactors,
//!   Gauss-Jordan elimination and inversion; vectors add dot, cross and
//!   outer products and normalization.
//!
//! ## Aliasing
//!
//! Storage is shared between an array and the sub-arrays taken from it by
//! integer indexing:
//!
//! ```
//! use arraymath::{array, s};
//!
//! let a = array![[1, 2, 3], [4, 5, 6]];
//! let mut row = a.get(&s![1]).unwrap();
//! row.set_scalar(&s![0], 40).unwrap();
//! assert_eq!(a, array![[1, 2, 3], [40, 5, 6]]);
//! ```
//!
//! | accessor | result |
//! |---|---|
//! | `clone()`, `view()`, `Array::from(&a)` | alias of the whole array |
//! | `get` with integer indices only | alias of the addressed sub-array |
//! | `get` with a slice | independent copy |
//! | `copy()`, `deepcopy()`, `map`, operators, `toX`/`Xed` methods | independent copy |
//!
//! Element writes (`set`, `fill`, `map_inplace`, `+=`, …) go to the shared
//! storage. In-place methods that change the shape (`resize`, `retrim`,
//! `append`, `stack`, `delete`, `strip`) move the receiver to new storage,
//! so aliases taken before the call keep the old elements. `reshape` only
//! regroups and keeps the storage.
//!
//! `Array` is neither `Send` nor `Sync`. Copy data out with
//! [`Array::ravel`] or [`Array::tolist`] to hand it to another thread.
//!
//! ## Crate Feature Flags
//!
//! - `serde`: serialization of arrays as nested lists.
//! - `approx`: `approx` trait implementations for arrays.

#[cfg(feature = "serde")]
extern crate serde;

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

pub use crate::dimension::{size_of_shape, Axis};
pub use crate::error::{ErrorKind, ShapeError};
pub use crate::free_functions::*;
pub use crate::impl_1d::Vector;
pub use crate::impl_2d::Matrix;
pub use crate::impl_ops::ScalarOperand;
pub use crate::iterators::{ArrayIter, ArrayIterBase, ArrayIterMut, Iter};
pub use crate::linalg::PIVOT_EPSILON;
pub use crate::linalg_traits::{LinalgScalar, NdFloat};
pub use crate::nested::{IntoNested, Nested};
pub use crate::slice::{Slice, SliceElem};

#[macro_use]
mod macro_utils;
mod arrayformat;
mod arraytraits;
#[cfg(feature = "approx")]
mod array_approx;
#[cfg(feature = "serde")]
mod array_serde;
mod dimension;
mod error;
mod free_functions;
mod impl_1d;
mod impl_2d;
mod impl_constructors;
mod impl_methods;
mod impl_ops;
mod iterators;
pub mod linalg;
mod linalg_traits;
mod nested;
mod numeric;
pub mod prelude;
mod slice;

/// Array index type
pub type Ix = usize;

/// Array index type (signed)
pub type Ixs = isize;

/// An *n*-dimensional array.
///
/// The array is a handle onto a row-major element buffer shared with every
/// alias of it: a contiguous window of `size` elements starting at
/// `offset`, grouped by `shape`.
///
/// ## Method Conventions
///
/// Methods named with a verb (`reshape`, `resize`, `retrim`, `append`,
/// `stack`, `delete`, `strip`) mutate the receiver in place. Their
/// `toX`/`Xed` counterparts (`toshape`, `tosize`, `trim`, `appended`,
/// `stacked`, `deleted`, `stripped`) leave the receiver untouched and
/// return a new array.
///
/// ## Fill
///
/// ```
/// use arraymath::array;
///
/// let a = array![[1., 2.],
///                [3., 4.]];
/// let b = array![0., 1.];
///
/// let c = array![[1., 3.],
///                [3., 5.]];
/// assert!(c == &a + &b);
/// ```
pub struct Array<A> {
    /// Storage shared with aliases of this array.
    data: Rc<RefCell<Vec<A>>>,
    /// Position of the first element of this array in `data`.
    offset: usize,
    /// The size of each axis
    dim: Vec<Ix>,
}

mod imp_prelude {
    pub use crate::dimension::Axis;
    pub use crate::error::{from_kind, ErrorKind, ShapeError};
    pub use crate::slice::{Slice, SliceElem};
    pub use crate::{Array, Ix, Ixs};
}

impl<A> Array<A> {
    /// Wrap a row-major buffer. `v.len()` must equal the product of `dim`.
    pub(crate) fn from_parts(dim: Vec<Ix>, v: Vec<A>) -> Self {
        debug_assert_eq!(size_of_shape(&dim), v.len());
        Array {
            data: Rc::new(RefCell::new(v)),
            offset: 0,
            dim,
        }
    }

    /// A handle onto the window `offset..offset + size(dim)` of the same storage.
    pub(crate) fn alias(&self, offset: usize, dim: Vec<Ix>) -> Self {
        Array {
            data: Rc::clone(&self.data),
            offset,
            dim,
        }
    }

    /// Borrow the elements of this array.
    ///
    /// **Panics** if the storage is currently borrowed mutably (for example
    /// from inside a `map_inplace` closure running on an alias).
    pub(crate) fn values(&self) -> Ref<'_, [A]> {
        let (start, end) = (self.offset, self.offset + self.len());
        Ref::map(self.data.borrow(), |v| &v[start..end])
    }

    /// Borrow the elements of this array mutably.
    pub(crate) fn values_mut(&self) -> RefMut<'_, [A]> {
        let (start, end) = (self.offset, self.offset + self.len());
        RefMut::map(self.data.borrow_mut(), |v| &mut v[start..end])
    }

    /// Return `true` if `self` and `other` use the same storage.
    pub fn shares_storage(&self, other: &Array<A>) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_windows_share_storage() {
        let a = Array::from_parts(vec![2, 2], vec![1, 2, 3, 4]);
        let row = a.alias(2, vec![2]);
        assert!(a.shares_storage(&row));
        assert_eq!(&*row.values(), &[3, 4]);
        row.values_mut()[0] = 30;
        assert_eq!(&*a.values(), &[1, 2, 30, 4]);
    }
}
