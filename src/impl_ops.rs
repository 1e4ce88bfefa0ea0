// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Elements that can be used as direct operands in arithmetic with arrays.
///
/// For example, `f64` is a `ScalarOperand` which means that for an array `a`,
/// arithmetic like `&a + 1.0`, and, `a * 2.`, and `a += 3.` are allowed.
///
/// `ScalarOperand` determines for which scalars `K` operations `&A @ K`, and
/// `A @ K`, and `A @= K` are defined, as ***right hand side operands***, for
/// applicable arithmetic operators (denoted `@`).
///
/// ***Left hand side*** scalar operands are not related to this trait
/// (they need one `impl` per concrete scalar type); but they are still
/// implemented for the same types, allowing operations
/// `K @ &A`, and `K @ A` for primitive numeric types `K`.
pub trait ScalarOperand: 'static + Clone {}
impl ScalarOperand for bool {}
impl ScalarOperand for i8 {}
impl ScalarOperand for u8 {}
impl ScalarOperand for i16 {}
impl ScalarOperand for u16 {}
impl ScalarOperand for i32 {}
impl ScalarOperand for u32 {}
impl ScalarOperand for i64 {}
impl ScalarOperand for u64 {}
impl ScalarOperand for i128 {}
impl ScalarOperand for u128 {}
impl ScalarOperand for isize {}
impl ScalarOperand for usize {}
impl ScalarOperand for f32 {}
impl ScalarOperand for f64 {}

/// Unwrap the result of an operator, which has no way to return an error.
pub(crate) fn or_panic<T>(result: Result<T, crate::ShapeError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{}", e),
    }
}

macro_rules! impl_binary_op(
    ($trt:ident, $operator:tt, $mth:ident, $doc:expr) => (
/// Perform elementwise
#[doc=$doc]
/// between references `self` and `rhs`,
/// and return the result as a new `Array`.
///
/// If their shapes disagree, the smaller operand is repeated to fill the
/// larger one (see [`Array::zip_with`]).
///
/// **Panics** if neither shape fills the other.
impl<'a, A, B> $trt<&'a Array<B>> for &'a Array<A>
where
    A: Clone + $trt<B, Output=A>,
    B: Clone,
{
    type Output = Array<A>;
    fn $mth(self, rhs: &'a Array<B>) -> Array<A> {
        or_panic(self.zip_with(rhs, A::$mth))
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and `rhs`,
/// and return the result as a new `Array`.
///
/// **Panics** if neither shape fills the other.
impl<A, B> $trt<Array<B>> for Array<A>
where
    A: Clone + $trt<B, Output=A>,
    B: Clone,
{
    type Output = Array<A>;
    fn $mth(self, rhs: Array<B>) -> Array<A> {
        (&self).$mth(&rhs)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and reference `rhs`,
/// and return the result as a new `Array`.
///
/// **Panics** if neither shape fills the other.
impl<'a, A, B> $trt<&'a Array<B>> for Array<A>
where
    A: Clone + $trt<B, Output=A>,
    B: Clone,
{
    type Output = Array<A>;
    fn $mth(self, rhs: &Array<B>) -> Array<A> {
        (&self).$mth(rhs)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between reference `self` and `rhs`,
/// and return the result as a new `Array`.
///
/// **Panics** if neither shape fills the other.
impl<'a, A, B> $trt<Array<B>> for &'a Array<A>
where
    A: Clone + $trt<B, Output=A>,
    B: Clone,
{
    type Output = Array<A>;
    fn $mth(self, rhs: Array<B>) -> Array<A> {
        self.$mth(&rhs)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and the scalar `x`,
/// and return the result as a new `Array`.
impl<A, B> $trt<B> for Array<A>
where
    A: Clone + $trt<B, Output=A>,
    B: ScalarOperand,
{
    type Output = Array<A>;
    fn $mth(self, x: B) -> Array<A> {
        (&self).$mth(x)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between the reference `self` and the scalar `x`,
/// and return the result as a new `Array`.
impl<'a, A, B> $trt<B> for &'a Array<A>
where
    A: Clone + $trt<B, Output=A>,
    B: ScalarOperand,
{
    type Output = Array<A>;
    fn $mth(self, x: B) -> Array<A> {
        self.mapv(move |elt| elt $operator x.clone())
    }
}
    );
);

// Pick the expression $a for commutative and $b for ordered binop
macro_rules! if_commutative {
    (Commute { $a:expr } or { $b:expr }) => {
        $a
    };
    (Ordered { $a:expr } or { $b:expr }) => {
        $b
    };
}

macro_rules! impl_scalar_lhs_op {
    // $commutative flag. Reuse the self + scalar impl if we can.
    // We can do this safely since these are the primitive numeric types
    ($scalar:ty, $commutative:ident, $operator:tt, $trt:ident, $mth:ident) => (
// these have no doc -- they are not visible in rustdoc
// Perform elementwise
// between the scalar `self` and array `rhs`,
// and return the result as a new `Array`.
impl $trt<Array<$scalar>> for $scalar {
    type Output = Array<$scalar>;
    fn $mth(self, rhs: Array<$scalar>) -> Array<$scalar> {
        self.$mth(&rhs)
    }
}

impl<'a> $trt<&'a Array<$scalar>> for $scalar {
    type Output = Array<$scalar>;
    fn $mth(self, rhs: &Array<$scalar>) -> Array<$scalar> {
        if_commutative!($commutative {
            rhs.$mth(self)
        } or {
            rhs.mapv(move |elt| self $operator elt)
        })
    }
}
    );
}

mod arithmetic_ops {
    use super::*;
    use crate::imp_prelude::*;

    use std::ops::*;

    impl_binary_op!(Add, +, add, "addition");
    impl_binary_op!(Sub, -, sub, "subtraction");
    impl_binary_op!(Mul, *, mul, "multiplication");
    impl_binary_op!(Div, /, div, "division");
    impl_binary_op!(Rem, %, rem, "remainder");
    impl_binary_op!(BitAnd, &, bitand, "bit and");
    impl_binary_op!(BitOr, |, bitor, "bit or");
    impl_binary_op!(BitXor, ^, bitxor, "bit xor");

    macro_rules! all_scalar_ops {
        ($int_scalar:ty) => (
            impl_scalar_lhs_op!($int_scalar, Commute, +, Add, add);
            impl_scalar_lhs_op!($int_scalar, Ordered, -, Sub, sub);
            impl_scalar_lhs_op!($int_scalar, Commute, *, Mul, mul);
            impl_scalar_lhs_op!($int_scalar, Ordered, /, Div, div);
            impl_scalar_lhs_op!($int_scalar, Ordered, %, Rem, rem);
            impl_scalar_lhs_op!($int_scalar, Commute, &, BitAnd, bitand);
            impl_scalar_lhs_op!($int_scalar, Commute, |, BitOr, bitor);
            impl_scalar_lhs_op!($int_scalar, Commute, ^, BitXor, bitxor);
        );
    }
    all_scalar_ops!(i8);
    all_scalar_ops!(u8);
    all_scalar_ops!(i16);
    all_scalar_ops!(u16);
    all_scalar_ops!(i32);
    all_scalar_ops!(u32);
    all_scalar_ops!(i64);
    all_scalar_ops!(u64);
    all_scalar_ops!(isize);
    all_scalar_ops!(usize);
    all_scalar_ops!(i128);
    all_scalar_ops!(u128);

    impl_scalar_lhs_op!(bool, Commute, &, BitAnd, bitand);
    impl_scalar_lhs_op!(bool, Commute, |, BitOr, bitor);
    impl_scalar_lhs_op!(bool, Commute, ^, BitXor, bitxor);

    impl_scalar_lhs_op!(f32, Commute, +, Add, add);
    impl_scalar_lhs_op!(f32, Ordered, -, Sub, sub);
    impl_scalar_lhs_op!(f32, Commute, *, Mul, mul);
    impl_scalar_lhs_op!(f32, Ordered, /, Div, div);
    impl_scalar_lhs_op!(f32, Ordered, %, Rem, rem);

    impl_scalar_lhs_op!(f64, Commute, +, Add, add);
    impl_scalar_lhs_op!(f64, Ordered, -, Sub, sub);
    impl_scalar_lhs_op!(f64, Commute, *, Mul, mul);
    impl_scalar_lhs_op!(f64, Ordered, /, Div, div);
    impl_scalar_lhs_op!(f64, Ordered, %, Rem, rem);

    impl<A> Neg for Array<A>
    where
        A: Clone + Neg<Output = A>,
    {
        type Output = Self;
        /// Perform an elementwise negation of `self` and return the result
        /// as a new `Array`.
        fn neg(self) -> Self {
            -&self
        }
    }

    impl<'a, A> Neg for &'a Array<A>
    where
        A: Clone + Neg<Output = A>,
    {
        type Output = Array<A>;
        /// Perform an elementwise negation of reference `self` and return the
        /// result as a new `Array`.
        fn neg(self) -> Array<A> {
            self.mapv(Neg::neg)
        }
    }

    impl<A> Not for Array<A>
    where
        A: Clone + Not<Output = A>,
    {
        type Output = Self;
        /// Perform an elementwise unary not of `self` and return the result
        /// as a new `Array`.
        fn not(self) -> Self {
            !&self
        }
    }

    impl<'a, A> Not for &'a Array<A>
    where
        A: Clone + Not<Output = A>,
    {
        type Output = Array<A>;
        /// Perform an elementwise unary not of reference `self` and return
        /// the result as a new `Array`.
        fn not(self) -> Array<A> {
            self.mapv(Not::not)
        }
    }
}

mod assign_ops {
    use super::*;
    use crate::dimension::fill_to;
    use crate::imp_prelude::*;

    macro_rules! impl_assign_op {
        ($trt:ident, $method:ident, $doc:expr) => {
            use std::ops::$trt;

            #[doc=$doc]
            /// `rhs` is repeated to fill the shape of `self`, which never
            /// changes. The result is written into the storage of `self`, so
            /// aliases see it.
            ///
            /// **Panics** if `rhs` does not fill the shape of `self`.
            impl<'a, A, B> $trt<&'a Array<B>> for Array<A>
            where
                A: $trt<B>,
                B: Clone,
            {
                fn $method(&mut self, rhs: &Array<B>) {
                    let filled = or_panic(fill_to(&rhs.ravel(), rhs.shape(), self.shape()));
                    for (x, y) in self.values_mut().iter_mut().zip(filled) {
                        x.$method(y);
                    }
                }
            }

            #[doc=$doc]
            impl<A, B> $trt<B> for Array<A>
            where
                A: $trt<B>,
                B: ScalarOperand,
            {
                fn $method(&mut self, rhs: B) {
                    self.map_inplace(move |elt| {
                        elt.$method(rhs.clone());
                    });
                }
            }
        };
    }

    impl_assign_op!(
        AddAssign,
        add_assign,
        "Perform `self += rhs` as elementwise addition (in place).\n"
    );
    impl_assign_op!(
        SubAssign,
        sub_assign,
        "Perform `self -= rhs` as elementwise subtraction (in place).\n"
    );
    impl_assign_op!(
        MulAssign,
        mul_assign,
        "Perform `self *= rhs` as elementwise multiplication (in place).\n"
    );
    impl_assign_op!(
        DivAssign,
        div_assign,
        "Perform `self /= rhs` as elementwise division (in place).\n"
    );
    impl_assign_op!(
        RemAssign,
        rem_assign,
        "Perform `self %= rhs` as elementwise remainder (in place).\n"
    );
    impl_assign_op!(
        BitAndAssign,
        bitand_assign,
        "Perform `self &= rhs` as elementwise bit and (in place).\n"
    );
    impl_assign_op!(
        BitOrAssign,
        bitor_assign,
        "Perform `self |= rhs` as elementwise bit or (in place).\n"
    );
    impl_assign_op!(
        BitXorAssign,
        bitxor_assign,
        "Perform `self ^= rhs` as elementwise bit xor (in place).\n"
    );
}
