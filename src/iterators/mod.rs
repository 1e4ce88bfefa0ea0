// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod axes;

pub use self::axes::{ArrayIter, ArrayIterBase, ArrayIterMut};

use std::iter::FusedIterator;
use std::vec;

/// An iterator over copies of the elements of an array, in row-major order.
///
/// The elements are copied out when the iterator is created, so it does not
/// borrow the array.
///
/// Iterator element type is `A`.
#[derive(Clone, Debug)]
pub struct Iter<A> {
    inner: vec::IntoIter<A>,
}

impl<A> Iter<A> {
    pub(crate) fn new(v: Vec<A>) -> Self {
        Iter {
            inner: v.into_iter(),
        }
    }
}

impl<A> Iterator for Iter<A> {
    type Item = A;
    #[inline]
    fn next(&mut self) -> Option<A> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn fold<Acc, G>(self, init: Acc, g: G) -> Acc
    where
        G: FnMut(Acc, A) -> Acc,
    {
        self.inner.fold(init, g)
    }
}

impl<A> DoubleEndedIterator for Iter<A> {
    #[inline]
    fn next_back(&mut self) -> Option<A> {
        self.inner.next_back()
    }
}

impl<A> ExactSizeIterator for Iter<A> {}

impl<A> FusedIterator for Iter<A> {}
