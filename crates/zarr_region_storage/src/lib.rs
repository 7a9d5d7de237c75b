//! Dense N-dimensional buffers and the region copier that moves data between them.
//!
//! A chunked array store answers every read or write by splitting the requested window into per-chunk transfers. Chunks
//! in the interior of the window are copied whole, but edge and corner chunks only partially overlap it, and the window may
//! even reach past the array's valid extent. `copy_region` handles all of these cases with one geometry routine: it clips
//! the source against the target, copies only the overlap, and leaves every other target element untouched.
//!
//! The core types are:
//!   - `DenseBuffer`: an N-dimensional, dense, row-major buffer over any slice-like store
//!   - `Overlap`: the box where a source and a target intersect, in both buffers' local coordinates
//!   - `copy_region`, `read_chunk_into`, `write_chunk_from`: the copier and its two directions
//!
//! ```
//! use zarr_region_core::prelude::*;
//! use zarr_region_storage::prelude::*;
//!
//! // A 4x5 chunk holding 0..20.
//! let chunk = DenseBuffer::fill_with(Shape::from([4, 5]), |p| (p[0] * 5 + p[1]) as i32);
//!
//! // A 2x3 request window pre-filled with the array's fill value, with its origin one row and one column before the
//! // chunk's origin.
//! let mut window = DenseBuffer::fill(Shape::from([2, 3]), 40);
//! read_chunk_into(&PointN::from([-1, -1]), &chunk, &mut window).unwrap();
//!
//! assert_eq!(window.values_slice(), &[40, 40, 40, 40, 0, 1]);
//! ```

#[macro_use]
pub mod access_traits;
pub mod array;
pub mod copy;
pub mod error;
pub mod raw_bytes;

pub use access_traits::*;
pub use array::*;
pub use copy::*;
pub use error::*;
pub use raw_bytes::*;

pub mod prelude {
    pub use super::{
        copy_region, read_chunk_into, write_chunk_from, DenseBuffer, Get, GetMut, GetRef,
        IntoRawBytes, Overlap, RegionError, Stride,
    };
}
