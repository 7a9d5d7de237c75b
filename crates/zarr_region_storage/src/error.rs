use zarr_region_core::prelude::*;

use thiserror::Error;

/// The number of elements in a buffer's store does not match its shape.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("buffer of length {actual} does not match shape {shape:?}, expected length {expected}")]
pub struct InvalidBufferLengthError {
    pub shape: Shape,
    pub expected: usize,
    pub actual: usize,
}

/// A region could not be copied or filled because the caller's geometry is invalid.
///
/// Buffers that simply don't overlap are never an error; the operation is a no-op.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RegionError {
    /// The offset, source and target do not all have the same rank.
    #[error(transparent)]
    IncompatibleDimensionality(#[from] IncompatibleDimensionalityError),
    /// A buffer axis is too long for signed lattice coordinates.
    #[error(transparent)]
    ShapeOverflow(#[from] ShapeOverflowError),
}
