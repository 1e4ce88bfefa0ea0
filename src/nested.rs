// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Plain nested lists, the exchange format of arrays.
//!
//! [`Nested`] is what host code hands to [`Array::from_nested`] and what
//! [`Array::tolist`] returns. Anything built from `Vec`s, fixed size arrays
//! and primitive numbers converts into it through [`IntoNested`].
//!
//! [`Array::from_nested`]: crate::Array::from_nested
//! [`Array::tolist`]: crate::Array::tolist

use std::fmt;

use crate::error::{ErrorKind, ShapeError};
use crate::Ix;

/// A scalar or a list of nested values. Lists may be ragged; rectangularity
/// is checked when the value is turned into an array.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<A> {
    Scalar(A),
    List(Vec<Nested<A>>),
}

impl<A> Nested<A> {
    /// Return `true` for a scalar leaf.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Nested::Scalar(_))
    }

    /// Infer the shape of `self`, checking that every sibling branch at a
    /// given depth has the same shape.
    ///
    /// **Errors** with `ErrorKind::RaggedInput`; the context names the path
    /// of the first offending branch.
    pub fn shape(&self) -> Result<Vec<Ix>, ShapeError> {
        let mut path = Vec::new();
        shape_of(self, &mut path)
    }

    /// Collect the scalar leaves in row-major order.
    pub fn flatten(self) -> Vec<A> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(self, out: &mut Vec<A>) {
        match self {
            Nested::Scalar(x) => out.push(x),
            Nested::List(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }

    /// Rebuild a nested value of shape `shape` from row-major `elems`.
    pub(crate) fn from_flat(shape: &[Ix], elems: &mut impl Iterator<Item = A>) -> Option<Self> {
        match shape.split_first() {
            None => elems.next().map(Nested::Scalar),
            Some((&len, rest)) => {
                let mut items = Vec::with_capacity(len);
                for _ in 0..len {
                    items.push(Nested::from_flat(rest, elems)?);
                }
                Some(Nested::List(items))
            }
        }
    }
}

fn shape_of<A>(value: &Nested<A>, path: &mut Vec<usize>) -> Result<Vec<Ix>, ShapeError> {
    match value {
        Nested::Scalar(_) => Ok(Vec::new()),
        Nested::List(items) => {
            let mut inner: Option<Vec<Ix>> = None;
            for (i, item) in items.iter().enumerate() {
                path.push(i);
                let shape = shape_of(item, path)?;
                match &inner {
                    None => inner = Some(shape),
                    Some(expected) if *expected != shape => {
                        return Err(ShapeError::with_context(
                            ErrorKind::RaggedInput,
                            format!(
                                "branch {:?} has shape {:?}, its siblings have shape {:?}",
                                path, shape, expected
                            ),
                        ));
                    }
                    Some(_) => {}
                }
                path.pop();
            }
            let mut shape = vec![items.len()];
            shape.extend(inner.unwrap_or_default());
            Ok(shape)
        }
    }
}

impl<A: fmt::Display> fmt::Display for Nested<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nested::Scalar(x) => fmt::Display::fmt(x, f),
            Nested::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Conversion into a [`Nested`] value with leaves of type `A`.
pub trait IntoNested<A> {
    fn into_nested(self) -> Nested<A>;
}

impl<A> IntoNested<A> for Nested<A> {
    #[inline]
    fn into_nested(self) -> Nested<A> {
        self
    }
}

impl<A, T: IntoNested<A>> IntoNested<A> for Vec<T> {
    fn into_nested(self) -> Nested<A> {
        Nested::List(self.into_iter().map(IntoNested::into_nested).collect())
    }
}

impl<A, T: IntoNested<A>, const N: usize> IntoNested<A> for [T; N] {
    fn into_nested(self) -> Nested<A> {
        Nested::List(self.into_iter().map(IntoNested::into_nested).collect())
    }
}

impl<'a, A, T: Clone + IntoNested<A>> IntoNested<A> for &'a [T] {
    fn into_nested(self) -> Nested<A> {
        Nested::List(self.iter().cloned().map(IntoNested::into_nested).collect())
    }
}

macro_rules! impl_scalar_into_nested {
    ($($scalar:ty),*) => {
        $(
        impl IntoNested<$scalar> for $scalar {
            #[inline]
            fn into_nested(self) -> Nested<$scalar> {
                Nested::Scalar(self)
            }
        }
        )*
    };
}

impl_scalar_into_nested!(bool, i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize, f32, f64);
