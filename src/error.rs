// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

/// An error related to array shape, indexing or a numerical precondition.
///
/// Two errors compare equal when their [`ErrorKind`]s are equal; the
/// optional context message is informational only.
#[derive(Clone, Debug)]
pub struct ShapeError {
    // we want to be able to change this representation later
    repr: ErrorKind,
    context: Option<Box<str>>,
}

impl ShapeError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.repr
    }

    /// Create a new `ShapeError`
    pub fn from_kind(error: ErrorKind) -> Self {
        from_kind(error)
    }

    /// Create a new `ShapeError` with a message describing where it happened.
    pub fn with_context(error: ErrorKind, context: impl Into<String>) -> Self {
        ShapeError {
            repr: error,
            context: Some(context.into().into_boxed_str()),
        }
    }

    /// The context message, if one was attached.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

/// Error code for an error related to array shape, indexing or linear algebra.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// nested input whose sibling branches differ in shape
    RaggedInput,
    /// incompatible shapes or sizes
    IncompatibleShape,
    /// the operation would change the dimensionality of a matrix or vector
    FixedDimensionality,
    /// index or axis out of bounds
    OutOfBounds,
    /// the matrix is singular
    SingularMatrix,
    /// operands of the wrong length for the operation
    Arity,
    /// reduction without an identity over no elements
    EmptyReduction,
    /// the request is valid but not supported
    Unsupported,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ShapeError {
    ShapeError {
        repr: k,
        context: None,
    }
}

impl PartialEq for ShapeError {
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool {
        self.repr == rhs.repr
    }
}

impl Eq for ShapeError {}

impl Error for ShapeError {}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self.kind() {
            ErrorKind::RaggedInput => "ragged input: sibling sub-arrays differ in shape",
            ErrorKind::IncompatibleShape => "incompatible shapes",
            ErrorKind::FixedDimensionality => "the number of dimensions of this type is fixed",
            ErrorKind::OutOfBounds => "index out of bounds",
            ErrorKind::SingularMatrix => "matrix is singular",
            ErrorKind::Arity => "operands have the wrong length",
            ErrorKind::EmptyReduction => "reduction over an empty array",
            ErrorKind::Unsupported => "unsupported operation",
        };
        match &self.context {
            Some(context) => write!(f, "ShapeError/{:?}: {} ({})", self.kind(), description, context),
            None => write!(f, "ShapeError/{:?}: {}", self.kind(), description),
        }
    }
}

pub(crate) fn incompatible_shapes(a: &[usize], b: &[usize]) -> ShapeError {
    ShapeError::with_context(
        ErrorKind::IncompatibleShape,
        format!("{:?} and {:?}", a, b),
    )
}

pub(crate) fn out_of_bounds(index: isize, len: usize) -> ShapeError {
    ShapeError::with_context(
        ErrorKind::OutOfBounds,
        format!("index {} for axis of length {}", index, len),
    )
}

pub(crate) fn check_ndim(what: &str, expected: usize, ndim: usize) -> Result<(), ShapeError> {
    if ndim == expected {
        Ok(())
    } else {
        Err(ShapeError::with_context(
            ErrorKind::FixedDimensionality,
            format!("a {} has {} dimensions, not {}", what, expected, ndim),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_compare_by_kind() {
        let a = ShapeError::with_context(ErrorKind::OutOfBounds, "index 7");
        assert_eq!(a, from_kind(ErrorKind::OutOfBounds));
        assert_ne!(a, from_kind(ErrorKind::RaggedInput));
        assert_eq!(a.context(), Some("index 7"));
    }

    #[test]
    fn display_mentions_kind_and_context() {
        let e = incompatible_shapes(&[2, 3], &[4]);
        let text = e.to_string();
        assert!(text.contains("IncompatibleShape"));
        assert!(text.contains("[2, 3] and [4]"));
    }
}
