// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::convert::TryFrom;
use std::hash;
use std::iter::FromIterator;

use crate::imp_prelude::*;
use crate::iterators::Iter;
use crate::nested::Nested;

/// Return another handle onto the same storage (see [`Array::view`]).
impl<A> Clone for Array<A> {
    fn clone(&self) -> Self {
        self.view()
    }
}

/// Return another handle onto the same storage (see [`Array::view`]).
impl<'a, A> From<&'a Array<A>> for Array<A> {
    fn from(array: &'a Array<A>) -> Self {
        array.view()
    }
}

impl<A, B> PartialEq<Array<B>> for Array<A>
where
    A: PartialEq<B>,
{
    /// Return `true` if the shapes are equal and all elements of `self` and
    /// `rhs` are equal.
    fn eq(&self, rhs: &Array<B>) -> bool {
        self.shape() == rhs.shape()
            && self
                .values()
                .iter()
                .zip(rhs.values().iter())
                .all(|(a, b)| a == b)
    }
}

impl<A: Eq> Eq for Array<A> {}

impl<A: hash::Hash> hash::Hash for Array<A> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.shape().hash(state);
        for elt in self.values().iter() {
            elt.hash(state)
        }
    }
}

/// Create a one-dimensional array from a vector (no copying needed).
impl<A> From<Vec<A>> for Array<A> {
    fn from(v: Vec<A>) -> Self {
        Array::from_vec(v)
    }
}

impl<A> FromIterator<A> for Array<A> {
    /// Create a one-dimensional array from an iterable.
    ///
    /// ```rust
    /// use arraymath::{Array, array};
    ///
    /// let a = (0..4).map(|x| x * x).collect::<Array<_>>();
    /// assert_eq!(a, array![0, 1, 4, 9]);
    /// ```
    fn from_iter<I>(iterable: I) -> Array<A>
    where
        I: IntoIterator<Item = A>,
    {
        Array::from_vec(iterable.into_iter().collect())
    }
}

impl<A> TryFrom<Nested<A>> for Array<A> {
    type Error = ShapeError;

    fn try_from(value: Nested<A>) -> Result<Self, ShapeError> {
        Array::from_nested(value)
    }
}

impl<'a, A: Clone> IntoIterator for &'a Array<A> {
    type Item = A;
    type IntoIter = Iter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: Clone> IntoIterator for Array<A> {
    type Item = A;
    type IntoIter = Iter<A>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self.into_vec())
    }
}

#[cfg(test)]
mod tests {
    use crate::{array, Array};

    #[test]
    fn equality_needs_same_shape() {
        let a = array![1, 2, 3, 4];
        assert_ne!(a, a.toshape(&[2, 2]).unwrap());
        assert_eq!(a, Array::from(vec![1, 2, 3, 4]));
        assert_eq!(Array::<i32>::zeros(&[0, 2]), Array::zeros(&[0, 2]));
        assert_ne!(Array::<i32>::zeros(&[0, 2]), Array::zeros(&[2, 0]));
    }

    #[test]
    fn clone_is_an_alias() {
        let a = array![1, 2, 3];
        let mut b = a.clone();
        b.fill(0);
        assert_eq!(a, array![0, 0, 0]);
        let c = a.copy();
        assert!(!c.shares_storage(&a));
    }
}
