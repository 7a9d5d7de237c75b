use crate::{PointN, ShapeOverflowError};

use core::convert::TryFrom;
use core::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The length of each axis of a dense buffer, outermost axis first.
///
/// A shape of rank 0 describes a single element. A shape with any zero-length axis describes an empty buffer; copies into or
/// out of such a buffer are no-ops.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Shape(pub Vec<usize>);

impl Shape {
    #[inline]
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// The number of elements in a buffer of this shape.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.0.iter().product()
    }

    /// Like `num_points`, but returns `None` on overflow.
    #[inline]
    pub fn checked_num_points(&self) -> Option<usize> {
        self.0.iter().try_fold(1usize, |acc, &len| acc.checked_mul(len))
    }

    /// Returns `true` iff some axis has length 0.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.iter().any(|&len| len == 0)
    }

    /// The length of `axis` as a signed lattice coordinate.
    #[inline]
    pub fn signed_extent(&self, axis: usize) -> Result<i64, ShapeOverflowError> {
        let extent = self.0[axis];

        i64::try_from(extent).map_err(|_| ShapeOverflowError { axis, extent })
    }

    /// Converts to a signed point, failing if any axis is longer than `i64::MAX`.
    pub fn to_point(&self) -> Result<PointN, ShapeOverflowError> {
        (0..self.rank())
            .map(|axis| self.signed_extent(axis))
            .collect::<Result<Vec<_>, _>>()
            .map(PointN)
    }

    /// The shape of every axis except the innermost. These are the axes walked by a row-wise copy.
    #[inline]
    pub fn outer_axes(&self) -> &[usize] {
        match self.0.split_last() {
            Some((_, outer)) => outer,
            None => &[],
        }
    }

    /// The length of the innermost (fastest varying) axis, which is the length of one contiguous row. A rank 0 shape has a
    /// single row of one element.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.0.last().copied().unwrap_or(1)
    }
}

impl<const D: usize> From<[usize; D]> for Shape {
    #[inline]
    fn from(lengths: [usize; D]) -> Self {
        Shape(lengths.to_vec())
    }
}

impl From<Vec<usize>> for Shape {
    #[inline]
    fn from(lengths: Vec<usize>) -> Self {
        Shape(lengths)
    }
}

impl From<&[usize]> for Shape {
    #[inline]
    fn from(lengths: &[usize]) -> Self {
        Shape(lengths.to_vec())
    }
}

impl Index<usize> for Shape {
    type Output = usize;

    #[inline]
    fn index(&self, axis: usize) -> &usize {
        &self.0[axis]
    }
}
