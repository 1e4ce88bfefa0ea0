// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::imp_prelude::*;
use crate::{Matrix, Vector};

impl<A> Array<A> {
    /// A test for equality that uses the elementwise absolute difference to compute the
    /// approximate equality of two arrays.
    ///
    /// **Requires crate feature `"approx"`**
    pub fn abs_diff_eq<B>(&self, other: &Array<B>, epsilon: A::Epsilon) -> bool
    where
        A: AbsDiffEq<B>,
        A::Epsilon: Clone,
    {
        <Self as AbsDiffEq<_>>::abs_diff_eq(self, other, epsilon)
    }

    /// A test for equality that uses an elementwise relative comparison if the values are far
    /// apart; and the absolute difference otherwise.
    ///
    /// **Requires crate feature `"approx"`**
    pub fn relative_eq<B>(&self, other: &Array<B>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool
    where
        A: RelativeEq<B>,
        A::Epsilon: Clone,
    {
        <Self as RelativeEq<_>>::relative_eq(self, other, epsilon, max_relative)
    }
}

fn all_pairs<A, B, F>(a: &Array<A>, b: &Array<B>, mut f: F) -> bool
where
    F: FnMut(&A, &B) -> bool,
{
    if a.shape() != b.shape() {
        return false;
    }
    let (a, b) = (a.values(), b.values());
    a.iter().zip(b.iter()).all(|(x, y)| f(x, y))
}

/// **Requires crate feature `"approx"`.**
impl<A, B> AbsDiffEq<Array<B>> for Array<A>
where
    A: AbsDiffEq<B>,
    A::Epsilon: Clone,
{
    type Epsilon = A::Epsilon;

    fn default_epsilon() -> A::Epsilon {
        A::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Array<B>, epsilon: A::Epsilon) -> bool {
        all_pairs(self, other, |a, b| A::abs_diff_eq(a, b, epsilon.clone()))
    }
}

/// **Requires crate feature `"approx"`.**
impl<A, B> RelativeEq<Array<B>> for Array<A>
where
    A: RelativeEq<B>,
    A::Epsilon: Clone,
{
    fn default_max_relative() -> A::Epsilon {
        A::default_max_relative()
    }

    fn relative_eq(&self, other: &Array<B>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool {
        all_pairs(self, other, |a, b| {
            A::relative_eq(a, b, epsilon.clone(), max_relative.clone())
        })
    }
}

/// **Requires crate feature `"approx"`.**
impl<A, B> UlpsEq<Array<B>> for Array<A>
where
    A: UlpsEq<B>,
    A::Epsilon: Clone,
{
    fn default_max_ulps() -> u32 {
        A::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Array<B>, epsilon: A::Epsilon, max_ulps: u32) -> bool {
        all_pairs(self, other, |a, b| A::ulps_eq(a, b, epsilon.clone(), max_ulps))
    }
}

/// Comparisons of matrices and vectors against arrays go through the
/// underlying array.
macro_rules! impl_fixed_approx {
    ($($name:ident)+) => {
        $(
        impl<A, B> AbsDiffEq<Array<B>> for $name<A>
        where
            A: AbsDiffEq<B>,
            A::Epsilon: Clone,
        {
            type Epsilon = A::Epsilon;

            fn default_epsilon() -> A::Epsilon {
                A::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Array<B>, epsilon: A::Epsilon) -> bool {
                self.as_array().abs_diff_eq(other, epsilon)
            }
        }

        impl<A, B> RelativeEq<Array<B>> for $name<A>
        where
            A: RelativeEq<B>,
            A::Epsilon: Clone,
        {
            fn default_max_relative() -> A::Epsilon {
                A::default_max_relative()
            }

            fn relative_eq(&self, other: &Array<B>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool {
                self.as_array().relative_eq(other, epsilon, max_relative)
            }
        }
        )+
    };
}

impl_fixed_approx!(Matrix Vector);

#[cfg(test)]
mod tests {
    use crate::{array, s, Matrix};
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne, assert_ulps_eq,
                 assert_ulps_ne};

    #[test]
    fn abs_diff_eq() {
        let a = array![[0f32, 2.], [-0.000010001, 100000000.]];
        let mut b = array![[0f32, 1.], [-0.000010002, 100000001.]];
        assert_abs_diff_ne!(a, b);
        b.set_scalar(&s![0, 1], 2.).unwrap();
        assert_abs_diff_eq!(a, b);

        // Check epsilon.
        assert_abs_diff_eq!(array![0.0f32], array![1e-40f32], epsilon = 1e-40f32);
        assert_abs_diff_ne!(array![0.0f32], array![1e-40f32], epsilon = 1e-41f32);

        // Make sure we can compare different shapes without failure.
        let c = array![[1f32, 2.]];
        assert_abs_diff_ne!(a, c);
    }

    #[test]
    fn relative_eq() {
        let a = array![[1f32, 2.], [-0.000010001, 100000000.]];
        let mut b = array![[1f32, 1.], [-0.000010002, 100000001.]];
        assert_relative_ne!(a, b);
        b.set_scalar(&s![0, 1], 2.).unwrap();
        assert_relative_eq!(a, b);
    }

    #[test]
    fn ulps_eq() {
        let a = array![[1f32, 2.], [-0.000010001, 100000000.]];
        let mut b = array![[1f32, 1.], [-0.000010002, 100000001.]];
        assert_ulps_ne!(a, b);
        b.set_scalar(&s![0, 1], 2.).unwrap();
        assert_ulps_eq!(a, b);
    }

    #[test]
    fn matrix_against_array() {
        let m = Matrix::from_rows(vec![[1., 1e-12], [0., 1.]]);
        assert_abs_diff_eq!(m, array![[1., 0.], [0., 1.]], epsilon = 1e-9);
    }
}
