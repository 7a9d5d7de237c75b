//! N-dimensional dense buffers, where N is only known at runtime.
//!
//! A `DenseBuffer` is a shape plus a flat store of elements in row-major order: the last axis varies fastest. Both storage
//! chunks and request windows are dense buffers. The domain of a buffer always starts at its local origin; where a buffer
//! lies relative to another buffer is expressed with an offset `PointN` at copy time, never stored in the buffer.
//!
//! # Indexing
//!
//! You can index a buffer with 2 kinds of coordinates, with [`Get`](crate::access_traits) traits:
//!   - `Get*<Stride>`: flat store offset
//!   - `Get*<&[usize]>`: N-dimensional local multi-index, outermost axis first
//!
//! Indexing assumes that the coordinates are in-bounds of the buffer, panicking otherwise.
//!
//! # Storage
//!
//! By default, `DenseBuffer` uses a `Vec` to store elements. But any type that implements `Deref<Target = [T]>` or
//! `DerefMut<Target = [T]>` should be usable, so a chunk cache can lend out slices without copying them.
//!
//! ```
//! # use zarr_region_core::prelude::*;
//! # use zarr_region_storage::prelude::*;
//! let shape = Shape::from([4, 4]);
//!
//! // Borrow `buffer`'s values for the lifetime of `view`.
//! let buffer = DenseBuffer::fill(shape.clone(), 1);
//! let view = buffer.as_view();
//! assert_eq!(view.get(Stride(0)), 1);
//!
//! // A stack-allocated buffer.
//! let mut data = [1; 16];
//! let mut stack_buffer = DenseBuffer::new(shape, &mut data[..]).unwrap();
//! *stack_buffer.get_mut(Stride(0)) = 2;
//! assert_eq!(data[0], 2);
//! ```

mod coords;
mod for_each;
mod indexer;

pub use coords::*;
pub use for_each::*;
pub use indexer::*;

use crate::{copy_region, GetMut, GetRef, InvalidBufferLengthError, RegionError};

use zarr_region_core::prelude::*;

use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};

/// A map from local multi-index to data `T`, stored as a flat row-major slice.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DenseBuffer<T, Store = Vec<T>> {
    values: Store,
    shape: Shape,
    indexer: RowMajorIndexer,
    marker: PhantomData<T>,
}

impl<T, Store> DenseBuffer<T, Store> {
    /// Moves the raw shape and values storage out of `self`.
    #[inline]
    pub fn into_parts(self) -> (Shape, Store) {
        (self.shape, self.values)
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The number of axes.
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    #[inline]
    pub fn num_points(&self) -> usize {
        self.shape.num_points()
    }

    #[inline]
    pub fn indexer(&self) -> &RowMajorIndexer {
        &self.indexer
    }

    /// Returns `true` iff `p` has the buffer's rank and lies within its shape.
    #[inline]
    pub fn contains(&self, p: &[usize]) -> bool {
        p.len() == self.rank() && p.iter().zip(self.shape.as_slice()).all(|(c, len)| c < len)
    }

    /// The extent covered by this buffer when its origin is placed at the lattice origin.
    #[inline]
    pub fn extent(&self) -> Result<ExtentN, ShapeOverflowError> {
        ExtentN::from_shape(&self.shape)
    }
}

impl<T, Store> DenseBuffer<T, Store>
where
    Store: Deref<Target = [T]>,
{
    /// Create a new `DenseBuffer` directly from the shape and values. Fails if the number of points in the shape does not
    /// match the length of `values`.
    pub fn new(shape: Shape, values: Store) -> Result<Self, InvalidBufferLengthError> {
        let actual = values.len();
        match shape.checked_num_points() {
            Some(expected) if expected == actual => Ok(Self {
                indexer: RowMajorIndexer::new(&shape),
                values,
                shape,
                marker: PhantomData,
            }),
            expected => Err(InvalidBufferLengthError {
                expected: expected.unwrap_or(usize::MAX),
                actual,
                shape,
            }),
        }
    }

    /// Returns the entire slice of values.
    #[inline]
    pub fn values_slice(&self) -> &[T] {
        &self.values
    }

    /// Borrows the values as a new buffer of the same shape.
    #[inline]
    pub fn as_view(&self) -> DenseBuffer<T, &[T]> {
        DenseBuffer {
            values: &self.values,
            shape: self.shape.clone(),
            indexer: self.indexer.clone(),
            marker: PhantomData,
        }
    }

    /// Returns the value at local multi-index `p`, or `None` if `p` is out of bounds.
    #[inline]
    pub fn get_checked(&self, p: &[usize]) -> Option<&T> {
        if self.contains(p) {
            Some(self.get_ref(p))
        } else {
            None
        }
    }
}

impl<T, Store> DenseBuffer<T, Store>
where
    Store: DerefMut<Target = [T]>,
{
    /// Returns the entire slice of values.
    #[inline]
    pub fn values_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Mutably borrows the values as a new buffer of the same shape.
    #[inline]
    pub fn as_view_mut(&mut self) -> DenseBuffer<T, &mut [T]> {
        DenseBuffer {
            values: &mut self.values,
            shape: self.shape.clone(),
            indexer: self.indexer.clone(),
            marker: PhantomData,
        }
    }

    #[inline]
    pub fn get_checked_mut(&mut self, p: &[usize]) -> Option<&mut T> {
        if self.contains(p) {
            Some(self.get_mut(p))
        } else {
            None
        }
    }

    /// Set all points to the same value.
    #[inline]
    pub fn reset_values(&mut self, value: T)
    where
        T: Clone,
    {
        self.values.fill(value);
    }

    /// Fill the part of `extent` that lies within this buffer with `value`. Points of `extent` outside of the buffer are
    /// ignored, exactly as `copy_region` ignores them.
    pub fn fill_region(&mut self, extent: &ExtentN, value: T) -> Result<(), RegionError>
    where
        T: Clone,
    {
        IncompatibleDimensionalityError::check(extent.rank(), self.rank())?;

        if extent.is_empty() || self.shape.is_empty() {
            return Ok(());
        }

        if extent.minimum.is_zero() && extent.unsigned_shape() == self.shape {
            self.values.fill(value);
        } else {
            let values: &mut [T] = &mut self.values;
            ArrayForEach::new_local(&self.shape, extent)?
                .for_each(|_p, stride| values[stride.0] = value.clone());
        }

        Ok(())
    }

    /// Copies the overlap of `src` into `self`, where `offset` is the origin of `src` in the local coordinates of `self`.
    /// See [`copy_region`].
    #[inline]
    pub fn copy_region_from<SrcStore>(
        &mut self,
        offset: &PointN,
        src: &DenseBuffer<T, SrcStore>,
    ) -> Result<&mut Self, RegionError>
    where
        T: Clone,
        SrcStore: Deref<Target = [T]>,
    {
        copy_region(offset, src, self)
    }
}

impl<T> DenseBuffer<T, Vec<T>> {
    /// Creates a buffer that fills the entire `shape` with the same `value`.
    pub fn fill(shape: Shape, value: T) -> Self
    where
        T: Clone,
    {
        let values = vec![value; shape.num_points()];

        Self {
            indexer: RowMajorIndexer::new(&shape),
            values,
            shape,
            marker: PhantomData,
        }
    }

    /// Create a new buffer for `shape` where each point's value is determined by the `filler` function.
    pub fn fill_with(shape: Shape, mut filler: impl FnMut(&[usize]) -> T) -> Self {
        let mut values = Vec::with_capacity(shape.num_points());
        // Row-major iteration visits the strides in ascending order.
        ArrayForEach::new_local_unchecked(&shape, vec![0; shape.rank()], shape.clone())
            .for_each(|p, _stride| values.push(filler(p)));

        Self {
            indexer: RowMajorIndexer::new(&shape),
            values,
            shape,
            marker: PhantomData,
        }
    }
}

//  ██████╗ ███████╗████████╗████████╗███████╗██████╗ ███████╗
// ██╔════╝ ██╔════╝╚══██╔══╝╚══██╔══╝██╔════╝██╔══██╗██╔════╝
// ██║  ███╗█████╗     ██║      ██║   █████╗  ██████╔╝███████╗
// ██║   ██║██╔══╝     ██║      ██║   ██╔══╝  ██╔══██╗╚════██║
// ╚██████╔╝███████╗   ██║      ██║   ███████╗██║  ██║███████║
//  ╚═════╝ ╚══════╝   ╚═╝      ╚═╝   ╚══════╝╚═╝  ╚═╝╚══════╝

impl<T, Store> GetRef<Stride> for DenseBuffer<T, Store>
where
    Store: Deref<Target = [T]>,
{
    type Data = T;

    #[inline]
    fn get_ref(&self, stride: Stride) -> &Self::Data {
        &self.values[stride.0]
    }
}

impl<T, Store> GetMut<Stride> for DenseBuffer<T, Store>
where
    Store: DerefMut<Target = [T]>,
{
    type Data = T;

    #[inline]
    fn get_mut(&mut self, stride: Stride) -> &mut Self::Data {
        &mut self.values[stride.0]
    }
}

impl<'a, T, Store> GetRef<&'a [usize]> for DenseBuffer<T, Store>
where
    Store: Deref<Target = [T]>,
{
    type Data = T;

    #[inline]
    fn get_ref(&self, p: &'a [usize]) -> &Self::Data {
        assert!(self.contains(p), "{:?} is out of bounds of {:?}", p, self.shape);

        self.get_ref(self.indexer.stride_from_local_point(p))
    }
}

impl<'a, T, Store> GetMut<&'a [usize]> for DenseBuffer<T, Store>
where
    Store: DerefMut<Target = [T]>,
{
    type Data = T;

    #[inline]
    fn get_mut(&mut self, p: &'a [usize]) -> &mut Self::Data {
        assert!(self.contains(p), "{:?} is out of bounds of {:?}", p, self.shape);

        let stride = self.indexer.stride_from_local_point(p);

        GetMut::<Stride>::get_mut(self, stride)
    }
}

impl_get_via_get_ref_and_clone!(DenseBuffer<T, Store>, Stride, [T, Store]);
impl_get_via_get_ref_and_clone!(DenseBuffer<T, Store>, &'a [usize], ['a, T, Store]);

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
