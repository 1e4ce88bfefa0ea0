// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::Ix;

/// A slice (range with step size).
///
/// The semantics are those of Python slices: negative `start` or `end`
/// indexes are counted from the back of the axis, out of range bounds are
/// clipped, and a negative `step` walks the axis backwards. A missing
/// `start` or `end` extends to the respective end of the axis (which end
/// depends on the sign of `step`).
///
/// ## Examples
///
/// `Slice::new(None, None, 1)` is the full range of an axis. It can also be
/// created with `Slice::from(..)`. The Python equivalent is `[:]`.
///
/// `Slice::new(Some(a), Some(b), 2)` is every second element from `a` until
/// `b`. It can also be created with `Slice::from(a..b).step_by(2)`. The
/// Python equivalent is `[a:b:2]`.
///
/// `Slice::new(None, None, -1)` is every element in reverse order. The
/// Python equivalent is `[::-1]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slice {
    pub start: Option<isize>,
    pub end: Option<isize>,
    pub step: isize,
}

impl Slice {
    /// Create a new `Slice` with the given extents.
    ///
    /// `step` must be nonzero.
    /// (This method checks with a debug assertion that `step` is not zero.)
    pub fn new(start: Option<isize>, end: Option<isize>, step: isize) -> Slice {
        debug_assert_ne!(step, 0, "Slice::new: step must be nonzero");
        Slice { start, end, step }
    }

    /// The slice covering a whole axis.
    pub const fn full() -> Slice {
        Slice {
            start: None,
            end: None,
            step: 1,
        }
    }

    /// Create a new `Slice` with the given step size (multiplied with the
    /// previous step size).
    ///
    /// `step` must be nonzero.
    /// (This method checks with a debug assertion that `step` is not zero.)
    #[inline]
    pub fn step_by(self, step: isize) -> Self {
        debug_assert_ne!(step, 0, "Slice::step_by: step must be nonzero");
        Slice {
            step: self.step * step,
            ..self
        }
    }

    /// Return `true` if the slice selects every index of any axis in order.
    #[inline]
    pub fn is_full(&self) -> bool {
        *self == Slice::full()
    }

    /// Resolve the slice against an axis of length `len` and return the
    /// selected indices in traversal order.
    pub fn indices(&self, len: Ix) -> Vec<Ix> {
        let len = len as isize;
        let step = if self.step == 0 { 1 } else { self.step };
        let resolve = |bound: isize, lo: isize, hi: isize| {
            let b = if bound < 0 { bound + len } else { bound };
            b.clamp(lo, hi)
        };
        let mut out = Vec::new();
        if step > 0 {
            let start = self.start.map_or(0, |s| resolve(s, 0, len));
            let end = self.end.map_or(len, |e| resolve(e, 0, len));
            let mut i = start;
            while i < end {
                out.push(i as Ix);
                i += step;
            }
        } else {
            let start = self.start.map_or(len - 1, |s| resolve(s, -1, len - 1));
            let end = self.end.map_or(-1, |e| resolve(e, -1, len - 1));
            let mut i = start;
            while i > end {
                out.push(i as Ix);
                i += step;
            }
        }
        out
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{}", start)?;
        }
        write!(f, "..")?;
        if let Some(end) = self.end {
            write!(f, "{}", end)?;
        }
        if self.step != 1 {
            write!(f, ";{}", self.step)?;
        }
        Ok(())
    }
}

macro_rules! impl_slice_from_index_type {
    ($index:ty) => {
        impl From<Range<$index>> for Slice {
            #[inline]
            fn from(r: Range<$index>) -> Slice {
                Slice::new(Some(r.start as isize), Some(r.end as isize), 1)
            }
        }

        impl From<RangeInclusive<$index>> for Slice {
            #[inline]
            fn from(r: RangeInclusive<$index>) -> Slice {
                let end = *r.end() as isize;
                Slice::new(
                    Some(*r.start() as isize),
                    if end == -1 { None } else { Some(end + 1) },
                    1,
                )
            }
        }

        impl From<RangeFrom<$index>> for Slice {
            #[inline]
            fn from(r: RangeFrom<$index>) -> Slice {
                Slice::new(Some(r.start as isize), None, 1)
            }
        }

        impl From<RangeTo<$index>> for Slice {
            #[inline]
            fn from(r: RangeTo<$index>) -> Slice {
                Slice::new(None, Some(r.end as isize), 1)
            }
        }

        impl From<RangeToInclusive<$index>> for Slice {
            #[inline]
            fn from(r: RangeToInclusive<$index>) -> Slice {
                let end = r.end as isize;
                Slice::new(None, if end == -1 { None } else { Some(end + 1) }, 1)
            }
        }

        impl From<Range<$index>> for SliceElem {
            #[inline]
            fn from(r: Range<$index>) -> SliceElem {
                SliceElem::Slice(Slice::from(r))
            }
        }

        impl From<RangeInclusive<$index>> for SliceElem {
            #[inline]
            fn from(r: RangeInclusive<$index>) -> SliceElem {
                SliceElem::Slice(Slice::from(r))
            }
        }

        impl From<RangeFrom<$index>> for SliceElem {
            #[inline]
            fn from(r: RangeFrom<$index>) -> SliceElem {
                SliceElem::Slice(Slice::from(r))
            }
        }

        impl From<RangeTo<$index>> for SliceElem {
            #[inline]
            fn from(r: RangeTo<$index>) -> SliceElem {
                SliceElem::Slice(Slice::from(r))
            }
        }

        impl From<RangeToInclusive<$index>> for SliceElem {
            #[inline]
            fn from(r: RangeToInclusive<$index>) -> SliceElem {
                SliceElem::Slice(Slice::from(r))
            }
        }

        impl From<$index> for SliceElem {
            #[inline]
            fn from(i: $index) -> SliceElem {
                SliceElem::Index(i as isize)
            }
        }
    };
}

impl_slice_from_index_type!(isize);
impl_slice_from_index_type!(usize);
impl_slice_from_index_type!(i32);

impl From<RangeFull> for Slice {
    #[inline]
    fn from(_: RangeFull) -> Slice {
        Slice::full()
    }
}

/// A slice (range with step) or an index.
///
/// See also the [`s![]`](macro.s!.html) macro for a convenient way to
/// create a list of `SliceElem`s.
///
/// An `Index` selects one position and removes the axis from the result;
/// a `Slice` keeps the axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SliceElem {
    /// A single index.
    Index(isize),
    /// A range with step size.
    Slice(Slice),
}

impl SliceElem {
    /// Return `true` if `self` is a `Slice` covering a whole axis.
    pub fn is_full(&self) -> bool {
        matches!(self, SliceElem::Slice(s) if s.is_full())
    }

    /// Return `true` if `self` is an `Index`.
    pub fn is_index(&self) -> bool {
        matches!(self, SliceElem::Index(_))
    }
}

impl From<Slice> for SliceElem {
    #[inline]
    fn from(s: Slice) -> SliceElem {
        SliceElem::Slice(s)
    }
}

impl From<RangeFull> for SliceElem {
    #[inline]
    fn from(_: RangeFull) -> SliceElem {
        SliceElem::Slice(Slice::full())
    }
}

impl fmt::Display for SliceElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceElem::Index(i) => write!(f, "{}", i),
            SliceElem::Slice(s) => write!(f, "{}", s),
        }
    }
}

/// Slice argument constructor.
///
/// `s![]` takes a list of ranges/slices/indices, separated by comma, with
/// optional step sizes that are separated from the range by a semicolon.
/// It expands to an array of [`SliceElem`], one per addressed axis;
/// axes that are not mentioned are selected whole.
///
/// Each range/slice/index uses signed indices, where a negative value is
/// counted from the end of the axis. Step sizes are also signed and may
/// be negative, but must not be zero.
///
/// ```
/// use arraymath::{array, s};
///
/// let a = array![[1, 2, 3], [4, 5, 6]];
/// assert_eq!(a.get(&s![1]).unwrap(), array![4, 5, 6]);
/// assert_eq!(a.get(&s![.., 0..;2]).unwrap(), array![[1, 3], [4, 6]]);
/// assert_eq!(a.get(&s![-1, ..;-1]).unwrap(), array![6, 5, 4]);
/// ```
#[macro_export]
macro_rules! s(
    (@elem $r:expr ; $s:expr) => {
        $crate::SliceElem::Slice($crate::Slice::from($r).step_by($s as isize))
    };
    (@elem $r:expr) => {
        $crate::SliceElem::from($r)
    };
    ($($r:expr $(;$s:expr)?),* $(,)?) => {
        [$($crate::s!(@elem $r $(;$s)?)),*]
    };
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_positive_steps() {
        assert_eq!(Slice::from(..).indices(4), vec![0, 1, 2, 3]);
        assert_eq!(Slice::from(1..3).indices(4), vec![1, 2]);
        assert_eq!(Slice::from(-2..).indices(4), vec![2, 3]);
        assert_eq!(Slice::from(0..10).step_by(3).indices(7), vec![0, 3, 6]);
        assert_eq!(Slice::from(5..2).indices(7), Vec::<usize>::new());
    }

    #[test]
    fn python_negative_steps() {
        assert_eq!(Slice::full().step_by(-1).indices(3), vec![2, 1, 0]);
        assert_eq!(Slice::new(Some(2), Some(0), -1).indices(4), vec![2, 1]);
        assert_eq!(Slice::new(Some(10), None, -2).indices(5), vec![4, 2, 0]);
    }

    #[test]
    fn inclusive_ranges() {
        assert_eq!(Slice::from(1..=2).indices(4), vec![1, 2]);
        assert_eq!(Slice::from(..=-1).indices(3), vec![0, 1, 2]);
    }

    #[test]
    fn macro_builds_elems() {
        let info = s![1, .., 0..4;2];
        assert_eq!(info[0], SliceElem::Index(1));
        assert!(info[1].is_full());
        assert_eq!(info[2], SliceElem::Slice(Slice::new(Some(0), Some(4), 2)));
    }
}
