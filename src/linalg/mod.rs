// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Linear algebra on [`Matrix`](crate::Matrix) values of floating point
//! elements: cofactors, determinants, Gauss-Jordan elimination and
//! inversion.
//!
//! Small matrices use closed forms and cofactor expansion; larger ones are
//! row reduced with partial pivoting. A pivot whose magnitude is below
//! [`PIVOT_EPSILON`] makes the matrix singular.

mod impl_linalg;

/// Pivot magnitudes below this value are treated as zero.
pub const PIVOT_EPSILON: f64 = 1e-10;
