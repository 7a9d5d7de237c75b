use core::ops::{Add, Index, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An N-dimensional point on the signed integer lattice. Unlike a fixed-size array, the number of axes is only known at
/// runtime, so a single type covers chunks of any rank.
///
/// ```
/// use zarr_region_core::PointN;
///
/// let p1 = PointN::from([1, 2]);
/// let p2 = PointN::from([3, -4]);
///
/// assert_eq!(&p1 + &p2, PointN::from([4, -2]));
/// assert_eq!(&p1 - &p2, PointN::from([-2, 6]));
/// assert_eq!(-p2, PointN::from([-3, 4]));
/// ```
///
/// Points are most often used as offsets between the origins of two buffers. An offset may be negative, or it may place one
/// buffer entirely past the far edge of the other.
///
/// The arithmetic operators require both operands to have the same rank, panicking otherwise. Code that handles
/// caller-supplied geometry should check ranks first and report an `IncompatibleDimensionalityError`.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct PointN(pub Vec<i64>);

impl PointN {
    /// The origin of a lattice with `rank` axes.
    #[inline]
    pub fn zero(rank: usize) -> Self {
        Self::fill(rank, 0)
    }

    /// A point with every component equal to `value`.
    #[inline]
    pub fn fill(rank: usize, value: i64) -> Self {
        PointN(vec![value; rank])
    }

    /// The number of axes.
    #[inline]
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    /// Returns `true` iff every component is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// Returns the point after applying `f` component-wise.
    #[inline]
    pub fn map_components(&self, f: impl Fn(i64) -> i64) -> Self {
        PointN(self.0.iter().map(|&c| f(c)).collect())
    }

    /// Component-wise maximum.
    #[inline]
    pub fn join(&self, other: &Self) -> Self {
        self.zip_components(other, i64::max)
    }

    /// Component-wise minimum.
    #[inline]
    pub fn meet(&self, other: &Self) -> Self {
        self.zip_components(other, i64::min)
    }

    /// Negates every component, mapping `i64::MIN` to `i64::MAX`.
    #[inline]
    pub fn saturating_neg(&self) -> Self {
        self.map_components(i64::saturating_neg)
    }

    /// Component-wise addition, clamped to the range of `i64`.
    #[inline]
    pub fn saturating_add(&self, other: &Self) -> Self {
        self.zip_components(other, i64::saturating_add)
    }

    /// Component-wise subtraction, clamped to the range of `i64`.
    #[inline]
    pub fn saturating_sub(&self, other: &Self) -> Self {
        self.zip_components(other, i64::saturating_sub)
    }

    /// Returns `true` iff `self[i] <= other[i]` for every axis `i`.
    #[inline]
    pub fn all_le(&self, other: &Self) -> bool {
        self.rank() == other.rank() && self.0.iter().zip(other.0.iter()).all(|(a, b)| a <= b)
    }

    /// Returns `true` iff `self[i] < other[i]` for every axis `i`.
    #[inline]
    pub fn all_lt(&self, other: &Self) -> bool {
        self.rank() == other.rank() && self.0.iter().zip(other.0.iter()).all(|(a, b)| a < b)
    }

    fn zip_components(&self, other: &Self, f: impl Fn(i64, i64) -> i64) -> Self {
        assert_eq!(self.rank(), other.rank(), "points have different ranks");

        PointN(
            self.0
                .iter()
                .zip(other.0.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        )
    }
}

impl<const D: usize> From<[i64; D]> for PointN {
    #[inline]
    fn from(components: [i64; D]) -> Self {
        PointN(components.to_vec())
    }
}

impl From<Vec<i64>> for PointN {
    #[inline]
    fn from(components: Vec<i64>) -> Self {
        PointN(components)
    }
}

impl From<&[i64]> for PointN {
    #[inline]
    fn from(components: &[i64]) -> Self {
        PointN(components.to_vec())
    }
}

impl Index<usize> for PointN {
    type Output = i64;

    #[inline]
    fn index(&self, axis: usize) -> &i64 {
        &self.0[axis]
    }
}

impl<'a> Add<&'a PointN> for &'a PointN {
    type Output = PointN;

    #[inline]
    fn add(self, rhs: &'a PointN) -> PointN {
        self.zip_components(rhs, |a, b| a + b)
    }
}

impl Add for PointN {
    type Output = PointN;

    #[inline]
    fn add(self, rhs: PointN) -> PointN {
        &self + &rhs
    }
}

impl<'a> Sub<&'a PointN> for &'a PointN {
    type Output = PointN;

    #[inline]
    fn sub(self, rhs: &'a PointN) -> PointN {
        self.zip_components(rhs, |a, b| a - b)
    }
}

impl Sub for PointN {
    type Output = PointN;

    #[inline]
    fn sub(self, rhs: PointN) -> PointN {
        &self - &rhs
    }
}

impl Neg for &PointN {
    type Output = PointN;

    #[inline]
    fn neg(self) -> PointN {
        self.map_components(|c| -c)
    }
}

impl Neg for PointN {
    type Output = PointN;

    #[inline]
    fn neg(self) -> PointN {
        -&self
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
