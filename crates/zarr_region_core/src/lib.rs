//! The core data types for defining N-dimensional integer lattices, where N is only known at runtime:
//! - `PointN`: a signed lattice point, used for offsets between buffer origins
//! - `Shape`: the unsigned extent of each axis of a dense buffer
//! - `ExtentN`: a half-open, axis-aligned box of lattice points

pub mod error;
pub mod extent;
pub mod point;
pub mod shape;

pub use error::{IncompatibleDimensionalityError, ShapeOverflowError};
pub use extent::ExtentN;
pub use point::PointN;
pub use shape::Shape;

pub use itertools;

pub mod prelude {
    pub use super::{ExtentN, IncompatibleDimensionalityError, PointN, Shape, ShapeOverflowError};
}
