use thiserror::Error;

/// Two geometric values were combined, but they do not have the same number of axes.
#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("incompatible dimensionality {found}, expected {expected}")]
pub struct IncompatibleDimensionalityError {
    pub found: usize,
    pub expected: usize,
}

impl IncompatibleDimensionalityError {
    #[inline]
    pub fn new(found: usize, expected: usize) -> Self {
        Self { found, expected }
    }

    /// Returns an error iff `found != expected`.
    #[inline]
    pub fn check(found: usize, expected: usize) -> Result<(), Self> {
        if found == expected {
            Ok(())
        } else {
            Err(Self::new(found, expected))
        }
    }
}

/// An axis of a `Shape` is too long to be addressed with signed lattice coordinates.
#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("extent {extent} of axis {axis} does not fit in signed lattice coordinates")]
pub struct ShapeOverflowError {
    pub axis: usize,
    pub extent: usize,
}
