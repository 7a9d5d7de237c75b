//! Copying of rectangular regions between dense N-dimensional buffers, the primitive a Zarr-style array store uses to
//! move data between its fixed-shape chunks and arbitrary request windows.
//!
//! This library is organized into two crates:
//! - **core**: lattice points, shapes and extents
//! - **storage**: dense row-major buffers and the region copier
//!
//! ```
//! use zarr_region::prelude::*;
//!
//! // A 2x3 chunk whose origin sits at (1, 1) in a 4x4 window.
//! let chunk = DenseBuffer::fill_with(Shape::from([2, 3]), |p| (p[0] * 3 + p[1]) as u8);
//! let mut window = DenseBuffer::fill(Shape::from([4, 4]), 0);
//! copy_region(&PointN::from([1, 1]), &chunk, &mut window).unwrap();
//!
//! assert_eq!(window.get(&[2usize, 3][..]), 5);
//! ```

pub use zarr_region_core as core;
pub use zarr_region_storage as storage;

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::storage::prelude::*;
}
