// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_traits::Float;
use num_traits::{One, Zero};

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::ScalarOperand;

/// Elements that support matrix products.
///
/// `'static` for scalar operand use, `Copy` so that they don't need move
/// semantics or destructors, and the rest are numerical traits.
pub trait LinalgScalar:
    'static
    + Copy
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
}

impl<T> LinalgScalar for T where
    T: 'static
        + Copy
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
{
}

/// Floating-point element types `f32` and `f64`.
///
/// Determinants, inverses, elimination and the geometric vector methods
/// are defined for matrices and vectors of `NdFloat` elements.
///
/// This trait can only be implemented by `f32` and `f64`.
pub trait NdFloat: Float + LinalgScalar + ScalarOperand + fmt::Display + fmt::Debug + private::Sealed {}

impl NdFloat for f32 {}
impl NdFloat for f64 {}

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
