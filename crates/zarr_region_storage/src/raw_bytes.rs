//! Byte views of dense buffers, the form in which a chunk codec consumes and produces chunk data.

use crate::{DenseBuffer, InvalidBufferLengthError};

use zarr_region_core::Shape;

use bytemuck::Pod;
use std::ops::Deref;

pub trait IntoRawBytes<'a> {
    type Output: Deref<Target = [u8]>;

    fn into_raw_bytes(&'a self) -> Self::Output;
}

impl<'a, T> IntoRawBytes<'a> for [T]
where
    T: Pod,
{
    type Output = &'a [u8];

    fn into_raw_bytes(&'a self) -> Self::Output {
        bytemuck::cast_slice(self)
    }
}

impl<'a, T, Store> IntoRawBytes<'a> for DenseBuffer<T, Store>
where
    T: Pod,
    Store: Deref<Target = [T]>,
{
    type Output = &'a [u8];

    fn into_raw_bytes(&'a self) -> Self::Output {
        self.values_slice().into_raw_bytes()
    }
}

impl<T> DenseBuffer<T, Vec<T>>
where
    T: Pod,
{
    /// Decodes a buffer of `shape` from native-endian element bytes. The bytes need not be aligned for `T`.
    pub fn from_raw_bytes(shape: Shape, bytes: &[u8]) -> Result<Self, InvalidBufferLengthError> {
        let element_size = core::mem::size_of::<T>();
        let expected = shape
            .checked_num_points()
            .and_then(|n| n.checked_mul(element_size));
        if expected != Some(bytes.len()) {
            return Err(InvalidBufferLengthError {
                shape,
                expected: expected.unwrap_or(usize::MAX),
                actual: bytes.len(),
            });
        }

        Self::new(shape, bytemuck::pod_collect_to_vec(bytes))
    }
}
