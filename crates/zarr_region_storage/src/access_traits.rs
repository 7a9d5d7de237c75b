//! Traits defining different ways to access the elements of a dense buffer.
//!
//! The fastest way to visit every element is with a flat array offset, which we call a `Stride`:
//! ```
//! use zarr_region_core::prelude::*;
//! use zarr_region_storage::prelude::*;
//!
//! let mut buffer = DenseBuffer::fill(Shape::from([10, 10]), 0);
//!
//! for i in 0..buffer.num_points() {
//!     // Use the `GetMut<Stride>` trait impl of the buffer.
//!     *buffer.get_mut(Stride(i)) = 1;
//! }
//! ```
//! Buffers can also be indexed with a local multi-index, one coordinate per axis, outermost axis first:
//! ```
//! # use zarr_region_core::prelude::*;
//! # use zarr_region_storage::prelude::*;
//! let buffer = DenseBuffer::fill_with(Shape::from([4, 5]), |p| p[0] * 10 + p[1]);
//! assert_eq!(buffer.get(&[2usize, 3][..]), 23);
//! ```
//! Both kinds of coordinates panic when out of bounds. Use `DenseBuffer::get_checked` for a fallible lookup.

pub trait Get<Coord> {
    type Data;

    /// Get an owned value at `c`.
    fn get(&self, c: Coord) -> Self::Data;
}

pub trait GetRef<Coord> {
    type Data;

    /// Get an immutable reference to the value at `c`.
    fn get_ref(&self, c: Coord) -> &Self::Data;
}

pub trait GetMut<Coord> {
    type Data;

    /// Get a mutable reference to the value at `c`.
    fn get_mut(&mut self, c: Coord) -> &mut Self::Data;
}

/// Implements `Get<Coord>` for a map that implements `GetRef<Coord>` with cloneable data.
#[macro_export]
macro_rules! impl_get_via_get_ref_and_clone {
    ($map:ty, $coord:ty, [$($generics:tt)*]) => {
        impl<$($generics)*> $crate::Get<$coord> for $map
        where
            Self: $crate::GetRef<$coord, Data = T>,
            T: Clone,
        {
            type Data = T;

            #[inline]
            fn get(&self, c: $coord) -> Self::Data {
                self.get_ref(c).clone()
            }
        }
    };
}
