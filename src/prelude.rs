// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! arraymath prelude.
//!
//! This module contains the most used types, type aliases, traits and
//! functions that you can import easily as a group.
//!
//! ```
//! use arraymath::prelude::*;
//!
//! # let _ = arr0(1);
//! # let _: Matrix<f64> = Matrix::identity(2);
//! ```

#[doc(no_inline)]
pub use crate::{Array, Matrix, Vector};

#[doc(no_inline)]
pub use crate::{ArrayIter, ArrayIterMut, Axis, Ix, Ixs, Slice, SliceElem};

#[doc(no_inline)]
pub use crate::{ErrorKind, ShapeError};

#[doc(no_inline)]
pub use crate::{arr0, arr1, arr2};

pub use crate::{array, s};

#[doc(no_inline)]
pub use crate::{IntoNested, LinalgScalar, NdFloat, Nested, ScalarOperand};
