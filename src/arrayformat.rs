// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::dimension;
use crate::Array;

fn format_array<A, F>(array: &Array<A>, f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let shape = array.shape();
    let ndim = shape.len();
    let multiline = f.alternate();
    let values = array.values();
    for _ in 0..ndim {
        write!(f, "[")?;
    }
    // None will be an empty iter.
    let mut index = dimension::first_index(shape);
    let mut last_index = index.clone().unwrap_or_default();
    let mut first = true;
    let mut offset = 0;
    // Walk the elements in order and take the index wraparounds
    // as cues for when to add []'s and how many to add.
    while let Some(ix) = index {
        let take_n = if ndim == 0 { 1 } else { ndim - 1 };
        for (i, (a, b)) in ix.iter().take(take_n).zip(&last_index).enumerate() {
            if a != b {
                // New row.
                // # of ['s needed
                let n = ndim - i - 1;
                for _ in 0..n {
                    write!(f, "]")?;
                }
                write!(f, ",")?;
                if multiline {
                    writeln!(f)?;
                    for _ in 0..ndim - n {
                        write!(f, " ")?;
                    }
                } else {
                    write!(f, " ")?;
                }
                for _ in 0..n {
                    write!(f, "[")?;
                }
                first = true;
                break;
            }
        }
        if !first {
            write!(f, ", ")?;
        }
        first = false;
        format(&values[offset], f)?;
        offset += 1;

        let mut next = ix.clone();
        last_index = ix;
        index = if dimension::next_for(shape, &mut next) {
            Some(next)
        } else {
            None
        };
    }
    for _ in 0..ndim {
        write!(f, "]")?;
    }
    Ok(())
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// The array is shown on one line; the alternate flag (`{:#}`) selects the
/// multiline style with one innermost row per line.
///
/// ```
/// use arraymath::array;
///
/// let a = array![[1., 2.5], [3., 4.]];
/// assert_eq!(format!("{:.1}", a), "[[1.0, 2.5], [3.0, 4.0]]");
/// assert_eq!(format!("{:#}", a), "[[1, 2.5],\n [3, 4]]");
/// ```
impl<A: fmt::Display> fmt::Display for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters used
/// to each element, followed by the shape.
impl<A: fmt::Debug> fmt::Debug for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Add extra information for Debug
        format_array(self, f, <_>::fmt)?;
        write!(f, " shape={:?}", self.shape())
    }
}

/// Format the array using `LowerExp` and apply the formatting parameters used
/// to each element.
impl<A: fmt::LowerExp> fmt::LowerExp for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}

impl<A: fmt::Display> Array<A> {
    /// Return the multiline representation of the array, the same as
    /// `format!("{:#}", self)`.
    pub fn pretty(&self) -> String {
        format!("{:#}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{array, Array};

    #[test]
    fn compact_and_pretty() {
        let a = Array::from_shape_fn(&[2, 2, 2], |ix| ix[0] * 4 + ix[1] * 2 + ix[2]);
        assert_eq!(a.to_string(), "[[[0, 1], [2, 3]], [[4, 5], [6, 7]]]");
        assert_eq!(a.pretty(), "[[[0, 1],\n  [2, 3]],\n [[4, 5],\n  [6, 7]]]");
    }

    #[test]
    fn zero_dimensional_and_empty() {
        let a = array![[1]];
        let x = a.get(&crate::s![0, 0]).unwrap();
        assert_eq!(x.to_string(), "1");
        assert_eq!(Array::<i32>::zeros(&[0]).to_string(), "[]");
        assert_eq!(format!("{:?}", array![1, 2]), "[1, 2] shape=[2]");
    }
}
