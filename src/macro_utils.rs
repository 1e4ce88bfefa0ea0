// Copyright 2026 arraymath developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Define an array newtype whose number of dimensions is fixed to `$ndim`.
///
/// The type derefs to `Array` for reading; every method that could change
/// the number of dimensions is wrapped and checked here.
macro_rules! fixed_ndim_array {
    ($(#[$meta:meta])* $name:ident, $ndim:expr, $what:expr) => {
        $(#[$meta])*
        pub struct $name<A> {
            array: Array<A>,
        }

        impl<A> $name<A> {
            /// The number of dimensions of every value of this type.
            pub const NDIM: usize = $ndim;

            pub(crate) fn from_array_unchecked(array: Array<A>) -> Self {
                debug_assert_eq!(array.ndim(), $ndim);
                $name { array }
            }

            #[doc = concat!("Wrap `array` as a ", $what, ".")]
            ///
            /// **Errors** with `ErrorKind::FixedDimensionality` if the number
            /// of dimensions does not match.
            pub fn from_array(array: Array<A>) -> Result<Self, ShapeError> {
                check_ndim($what, $ndim, array.ndim())?;
                Ok($name { array })
            }

            #[doc = concat!("Create a ", $what, " from a nested list.")]
            ///
            /// **Errors** with `ErrorKind::RaggedInput` for ragged input and
            /// `ErrorKind::FixedDimensionality` for the wrong nesting depth.
            pub fn from_nested<T>(value: T) -> Result<Self, ShapeError>
            where
                T: IntoNested<A>,
            {
                $name::from_array(Array::from_nested(value)?)
            }

            /// Return the underlying array.
            pub fn into_array(self) -> Array<A> {
                self.array
            }

            /// Borrow the underlying array.
            pub fn as_array(&self) -> &Array<A> {
                &self.array
            }

            /// Return another handle onto the same storage.
            pub fn view(&self) -> Self {
                $name { array: self.array.view() }
            }

            /// Return an independent copy.
            pub fn copy(&self) -> Self
            where
                A: Clone,
            {
                $name { array: self.array.copy() }
            }

            /// Return an independent copy (the same as `copy`).
            pub fn deepcopy(&self) -> Self
            where
                A: Clone,
            {
                self.copy()
            }

            /// Assign `value` to the region selected by `info` (see
            /// [`Array::set`]).
            pub fn set(&mut self, info: &[SliceElem], value: &Array<A>) -> Result<(), ShapeError>
            where
                A: Clone,
            {
                self.array.set(info, value)
            }

            /// Assign the scalar `value` to the region selected by `info`.
            pub fn set_scalar(&mut self, info: &[SliceElem], value: A) -> Result<(), ShapeError>
            where
                A: Clone,
            {
                self.array.set_scalar(info, value)
            }

            /// Set all elements to `x`.
            pub fn fill(&mut self, x: A)
            where
                A: Clone,
            {
                self.array.fill(x)
            }

            /// Modify the elements in place by calling `f` on each.
            pub fn map_inplace<F>(&mut self, f: F)
            where
                F: FnMut(&mut A),
            {
                self.array.map_inplace(f)
            }

            /// Modify the elements in place by calling `f` by value on each.
            pub fn mapv_inplace<F>(&mut self, f: F)
            where
                F: FnMut(A) -> A,
                A: Clone,
            {
                self.array.mapv_inplace(f)
            }

            /// Call `f` by reference on each element and return the results
            /// with the same shape.
            pub fn map<B, F>(&self, f: F) -> $name<B>
            where
                F: FnMut(&A) -> B,
            {
                $name::from_array_unchecked(self.array.map(f))
            }

            /// Call `f` by value on each element and return the results with
            /// the same shape.
            pub fn mapv<B, F>(&self, f: F) -> $name<B>
            where
                F: FnMut(A) -> B,
                A: Clone,
            {
                $name::from_array_unchecked(self.array.mapv(f))
            }

            /// Regroup the elements in place (see [`Array::reshape`]).
            ///
            /// **Errors** with `ErrorKind::FixedDimensionality` if `shape`
            /// has the wrong number of dimensions.
            pub fn reshape(&mut self, shape: &[Ix]) -> Result<(), ShapeError> {
                check_ndim($what, $ndim, shape.len())?;
                self.array.reshape(shape)
            }

            /// Return a regrouped copy (see [`Array::toshape`]).
            pub fn toshape(&self, shape: &[Ix]) -> Result<Self, ShapeError>
            where
                A: Clone,
            {
                check_ndim($what, $ndim, shape.len())?;
                self.array.toshape(shape).map($name::from_array_unchecked)
            }

            /// Resize in place, flat truncating or padding with `fill` (see
            /// [`Array::resize`]).
            pub fn resize(&mut self, shape: &[Ix], fill: A) -> Result<(), ShapeError>
            where
                A: Clone,
            {
                check_ndim($what, $ndim, shape.len())?;
                self.array.resize(shape, fill);
                Ok(())
            }

            /// Return a resized copy (see [`Array::tosize`]).
            pub fn tosize(&self, shape: &[Ix], fill: A) -> Result<Self, ShapeError>
            where
                A: Clone,
            {
                check_ndim($what, $ndim, shape.len())?;
                Ok($name::from_array_unchecked(self.array.tosize(shape, fill)))
            }

            /// Resize each axis in place (see [`Array::retrim`]).
            pub fn retrim(&mut self, shape: &[Ixs], fill: A) -> Result<(), ShapeError>
            where
                A: Clone,
            {
                check_ndim($what, $ndim, shape.len())?;
                self.array.retrim(shape, fill)
            }

            /// Return a copy with each axis resized (see [`Array::trim`]).
            pub fn trim(&self, shape: &[Ixs], fill: A) -> Result<Self, ShapeError>
            where
                A: Clone,
            {
                check_ndim($what, $ndim, shape.len())?;
                self.array.trim(shape, fill).map($name::from_array_unchecked)
            }

            /// Return a copy with `value` appended along `axis` (see
            /// [`Array::appended`]).
            pub fn appended(&self, value: &Array<A>, axis: Axis) -> Result<Self, ShapeError>
            where
                A: Clone,
            {
                $name::from_array(self.array.appended(value, axis)?)
            }

            /// Append `value` along `axis` in place.
            pub fn append(&mut self, value: &Array<A>, axis: Axis) -> Result<(), ShapeError>
            where
                A: Clone,
            {
                *self = self.appended(value, axis)?;
                Ok(())
            }

            /// Return a copy with `other` stacked after `self` along `axis`
            /// (see [`Array::stacked`]).
            pub fn stacked(&self, other: &Array<A>, axis: Axis) -> Result<Self, ShapeError>
            where
                A: Clone,
            {
                $name::from_array(self.array.stacked(other, axis)?)
            }

            /// Stack `other` after `self` along `axis` in place.
            pub fn stack(&mut self, other: &Array<A>, axis: Axis) -> Result<(), ShapeError>
            where
                A: Clone,
            {
                *self = self.stacked(other, axis)?;
                Ok(())
            }

            /// Return a copy without the positions selected by `info` (see
            /// [`Array::deleted`]).
            pub fn deleted(&self, info: &[SliceElem]) -> Result<Self, ShapeError>
            where
                A: Clone,
            {
                self.array.deleted(info).map($name::from_array_unchecked)
            }

            /// Delete the positions selected by `info` in place.
            pub fn delete(&mut self, info: &[SliceElem]) -> Result<(), ShapeError>
            where
                A: Clone,
            {
                self.array.delete(info)
            }

            /// Return a stripped copy (see [`Array::stripped`]).
            ///
            /// **Errors** with `ErrorKind::FixedDimensionality` if stripping
            /// would remove an axis.
            pub fn stripped(&self, info: &[SliceElem]) -> Result<Self, ShapeError>
            where
                A: Clone,
            {
                $name::from_array(self.array.stripped(info)?)
            }

            /// Strip the positions selected by `info` in place.
            pub fn strip(&mut self, info: &[SliceElem]) -> Result<(), ShapeError>
            where
                A: Clone,
            {
                *self = self.stripped(info)?;
                Ok(())
            }
        }

        impl<A> std::ops::Deref for $name<A> {
            type Target = Array<A>;
            fn deref(&self) -> &Array<A> {
                &self.array
            }
        }

        impl<A> AsRef<Array<A>> for $name<A> {
            fn as_ref(&self) -> &Array<A> {
                &self.array
            }
        }

        /// Return another handle onto the same storage.
        impl<A> Clone for $name<A> {
            fn clone(&self) -> Self {
                self.view()
            }
        }

        impl<A> std::convert::TryFrom<Array<A>> for $name<A> {
            type Error = ShapeError;

            fn try_from(array: Array<A>) -> Result<Self, ShapeError> {
                $name::from_array(array)
            }
        }

        impl<A> From<$name<A>> for Array<A> {
            fn from(value: $name<A>) -> Array<A> {
                value.array
            }
        }

        impl<A, B> PartialEq<$name<B>> for $name<A>
        where
            A: PartialEq<B>,
        {
            fn eq(&self, rhs: &$name<B>) -> bool {
                self.array == rhs.array
            }
        }

        impl<A, B> PartialEq<Array<B>> for $name<A>
        where
            A: PartialEq<B>,
        {
            fn eq(&self, rhs: &Array<B>) -> bool {
                self.array == *rhs
            }
        }

        impl<A, B> PartialEq<$name<B>> for Array<A>
        where
            A: PartialEq<B>,
        {
            fn eq(&self, rhs: &$name<B>) -> bool {
                *self == rhs.array
            }
        }

        impl<A: std::fmt::Display> std::fmt::Display for $name<A> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.array, f)
            }
        }

        impl<A: std::fmt::Debug> std::fmt::Debug for $name<A> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}(", stringify!($name))?;
                std::fmt::Debug::fmt(&self.array, f)?;
                write!(f, ")")
            }
        }
    };
}

/// Element-wise binary operators between two values of a fixed-ndim type,
/// and between one and a scalar. The result keeps the type.
macro_rules! impl_fixed_elementwise_ops {
    ($name:ident; $($trt:ident $mth:ident),+) => {
        $(
        /// Perform the elementwise operation, repeating the smaller operand
        /// to fill the larger one.
        ///
        /// **Panics** if neither shape fills the other.
        impl<'a, A, B> std::ops::$trt<&'a $name<B>> for &'a $name<A>
        where
            A: Clone + std::ops::$trt<B, Output = A>,
            B: Clone,
        {
            type Output = $name<A>;
            fn $mth(self, rhs: &'a $name<B>) -> $name<A> {
                $name::from_array_unchecked(std::ops::$trt::$mth(self.as_array(), rhs.as_array()))
            }
        }

        impl<A, B> std::ops::$trt<$name<B>> for $name<A>
        where
            A: Clone + std::ops::$trt<B, Output = A>,
            B: Clone,
        {
            type Output = $name<A>;
            fn $mth(self, rhs: $name<B>) -> $name<A> {
                std::ops::$trt::$mth(&self, &rhs)
            }
        }

        impl<A, B> std::ops::$trt<B> for &$name<A>
        where
            A: Clone + std::ops::$trt<B, Output = A>,
            B: ScalarOperand,
        {
            type Output = $name<A>;
            fn $mth(self, x: B) -> $name<A> {
                $name::from_array_unchecked(std::ops::$trt::$mth(self.as_array(), x))
            }
        }

        impl<A, B> std::ops::$trt<B> for $name<A>
        where
            A: Clone + std::ops::$trt<B, Output = A>,
            B: ScalarOperand,
        {
            type Output = $name<A>;
            fn $mth(self, x: B) -> $name<A> {
                std::ops::$trt::$mth(&self, x)
            }
        }
        )+

        impl<'a, A> std::ops::Neg for &'a $name<A>
        where
            A: Clone + std::ops::Neg<Output = A>,
        {
            type Output = $name<A>;
            fn neg(self) -> $name<A> {
                $name::from_array_unchecked(-self.as_array())
            }
        }

        impl<A> std::ops::Neg for $name<A>
        where
            A: Clone + std::ops::Neg<Output = A>,
        {
            type Output = $name<A>;
            fn neg(self) -> $name<A> {
                -&self
            }
        }
    };
}

/// In-place element-wise operators; the receiver's shape never changes.
macro_rules! impl_fixed_assign_ops {
    ($name:ident; $($trt:ident $mth:ident),+) => {
        $(
        impl<'a, A, B> std::ops::$trt<&'a Array<B>> for $name<A>
        where
            A: std::ops::$trt<B>,
            B: Clone,
        {
            fn $mth(&mut self, rhs: &Array<B>) {
                std::ops::$trt::$mth(&mut self.array, rhs);
            }
        }

        impl<'a, A, B> std::ops::$trt<&'a $name<B>> for $name<A>
        where
            A: std::ops::$trt<B>,
            B: Clone,
        {
            fn $mth(&mut self, rhs: &$name<B>) {
                std::ops::$trt::$mth(&mut self.array, rhs.as_array());
            }
        }

        impl<A, B> std::ops::$trt<B> for $name<A>
        where
            A: std::ops::$trt<B>,
            B: ScalarOperand,
        {
            fn $mth(&mut self, rhs: B) {
                std::ops::$trt::$mth(&mut self.array, rhs);
            }
        }
        )+
    };
}
