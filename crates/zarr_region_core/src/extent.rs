use crate::{IncompatibleDimensionalityError, PointN, Shape, ShapeOverflowError};

use core::ops::{Add, Sub};
use itertools::{Either, Itertools};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An N-dimensional extent. This is mathematically the Cartesian product of a half-closed interval `[a, b)` in each dimension.
/// You can also just think of it as an axis-aligned box with some shape and a minimum point. Region copies use extents to
/// describe where a buffer lies relative to another buffer's origin.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ExtentN {
    /// The least point contained in the extent.
    pub minimum: PointN,
    /// The length of each dimension. Negative components are treated as 0.
    pub shape: PointN,
}

impl ExtentN {
    /// The default representation of an extent as the minimum point and shape.
    #[inline]
    pub fn from_min_and_shape(minimum: PointN, shape: PointN) -> Self {
        Self { minimum, shape }
    }

    /// The extent covered by a buffer of `shape` whose origin is at the lattice origin.
    #[inline]
    pub fn from_shape(shape: &Shape) -> Result<Self, ShapeOverflowError> {
        Ok(Self::from_min_and_shape(
            PointN::zero(shape.rank()),
            shape.to_point()?,
        ))
    }

    /// An alternative representation of an extent as the minimum point and least upper bound.
    #[inline]
    pub fn from_min_and_lub(minimum: PointN, least_upper_bound: PointN) -> Self {
        // We want to avoid negative shape components.
        let shape = least_upper_bound
            .saturating_sub(&minimum)
            .map_components(|c| c.max(0));

        Self { minimum, shape }
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.minimum.rank()
    }

    /// The least point `p` for which all points `q` in the extent satisfy `q < p`. Components past the edge of the lattice
    /// are clamped to `i64::MAX`.
    #[inline]
    pub fn least_upper_bound(&self) -> PointN {
        self.minimum.saturating_add(&self.shape.map_components(|c| c.max(0)))
    }

    /// The number of points contained in the extent.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.shape.0.iter().map(|&c| c.max(0) as usize).product()
    }

    /// Returns `true` iff the number of points in the extent is 0.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shape.0.iter().any(|&c| c <= 0)
    }

    /// The unsigned shape of the extent, with negative components clamped to 0.
    #[inline]
    pub fn unsigned_shape(&self) -> Shape {
        Shape(self.shape.0.iter().map(|&c| c.max(0) as usize).collect())
    }

    /// Returns `true` iff the point `p` is contained in this extent. A point of a different rank is never contained.
    #[inline]
    pub fn contains(&self, p: &PointN) -> bool {
        self.minimum.all_le(p) && p.all_lt(&self.least_upper_bound())
    }

    /// Returns the extent containing only the points in both `self` and `other`.
    #[inline]
    pub fn intersection(&self, other: &Self) -> Result<Self, IncompatibleDimensionalityError> {
        IncompatibleDimensionalityError::check(other.rank(), self.rank())?;

        let minimum = self.minimum.join(&other.minimum);
        let lub = self.least_upper_bound().meet(&other.least_upper_bound());

        Ok(Self::from_min_and_lub(minimum, lub))
    }

    /// Returns `true` iff the intersection of `self` and `other` is equal to `self`.
    #[inline]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        match self.intersection(other) {
            Ok(i) => i.eq(self) || (self.is_empty() && i.is_empty()),
            Err(_) => false,
        }
    }

    /// Iterate over all points in the extent, in row-major order (the last axis varies fastest).
    /// ```
    /// # use zarr_region_core::prelude::*;
    /// #
    /// let extent = ExtentN::from_min_and_shape(PointN::from([0, 0]), PointN::from([2, 2]));
    /// let points = extent.iter_points().collect::<Vec<_>>();
    /// assert_eq!(points, vec![
    ///     PointN::from([0, 0]), PointN::from([0, 1]), PointN::from([1, 0]), PointN::from([1, 1])
    /// ]);
    /// ```
    pub fn iter_points(&self) -> impl Iterator<Item = PointN> {
        if self.rank() == 0 {
            // The single point of a 0-dimensional lattice.
            return Either::Left(std::iter::once(PointN(Vec::new())));
        }

        let lub = self.least_upper_bound();
        let axis_ranges: Vec<_> = self
            .minimum
            .0
            .iter()
            .zip(lub.0.into_iter())
            .map(|(&min, lub)| min..lub)
            .collect();

        Either::Right(axis_ranges.into_iter().multi_cartesian_product().map(PointN))
    }
}

impl Add<&PointN> for ExtentN {
    type Output = Self;

    #[inline]
    fn add(self, rhs: &PointN) -> Self::Output {
        ExtentN {
            minimum: &self.minimum + rhs,
            shape: self.shape,
        }
    }
}

impl Sub<&PointN> for ExtentN {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: &PointN) -> Self::Output {
        ExtentN {
            minimum: &self.minimum - rhs,
            shape: self.shape,
        }
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
