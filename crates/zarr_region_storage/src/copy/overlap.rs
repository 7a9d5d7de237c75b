use crate::RegionError;

use zarr_region_core::prelude::*;

/// The box where a source buffer and a target buffer intersect, once the source's origin is placed at `offset` in the
/// target's local coordinates.
///
/// Per axis `i`, the box covers target indices `[max(0, offset[i]), min(target[i], offset[i] + source[i]))`, and the same
/// range shifted by `-offset[i]` in source indices.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Overlap {
    target_min: Vec<usize>,
    source_min: Vec<usize>,
    shape: Shape,
}

impl Overlap {
    /// Computes the overlap of a source with `source_shape` whose origin lies at `offset` in a target with `target_shape`.
    ///
    /// Returns `Ok(None)` when the buffers don't intersect on some axis, which includes any buffer with a zero-length axis
    /// and any offset, however far away. Fails when the offset and shapes don't all have the same rank, or when a
    /// non-empty buffer has an axis longer than `i64::MAX`.
    ///
    /// ```
    /// # use zarr_region_core::prelude::*;
    /// # use zarr_region_storage::prelude::*;
    /// let overlap = Overlap::between(&PointN::from([-1, 3]), &Shape::from([4, 5]), &Shape::from([2, 6]))
    ///     .unwrap()
    ///     .unwrap();
    ///
    /// assert_eq!(overlap.target_min(), &[0, 3]);
    /// assert_eq!(overlap.source_min(), &[1, 0]);
    /// assert_eq!(overlap.shape(), &Shape::from([2, 3]));
    ///
    /// let disjoint = Overlap::between(&PointN::from([0, 6]), &Shape::from([4, 5]), &Shape::from([2, 6]));
    /// assert_eq!(disjoint, Ok(None));
    /// ```
    pub fn between(
        offset: &PointN,
        source_shape: &Shape,
        target_shape: &Shape,
    ) -> Result<Option<Self>, RegionError> {
        IncompatibleDimensionalityError::check(source_shape.rank(), offset.rank())?;
        IncompatibleDimensionalityError::check(target_shape.rank(), offset.rank())?;

        if source_shape.is_empty() || target_shape.is_empty() {
            return Ok(None);
        }

        let source_shape = source_shape.to_point()?;
        let target_shape = target_shape.to_point()?;

        let rank = offset.rank();
        let mut target_min = Vec::with_capacity(rank);
        let mut source_min = Vec::with_capacity(rank);
        let mut shape = Vec::with_capacity(rank);
        for (axis, &offset) in offset.as_slice().iter().enumerate() {
            let source_len = source_shape[axis];
            let target_len = target_shape[axis];
            // Saturating only happens past `i64::MAX`, where the target never reaches.
            let source_lub = offset.saturating_add(source_len);

            let start = offset.max(0);
            let end = source_lub.min(target_len);
            if start >= end {
                return Ok(None);
            }

            // 0 <= start < end <= target_len, and offset > -source_len, so none of these can overflow or go negative.
            target_min.push(start as usize);
            source_min.push((start - offset) as usize);
            shape.push((end - start) as usize);
        }

        Ok(Some(Self {
            target_min,
            source_min,
            shape: Shape(shape),
        }))
    }

    /// Minimum of the box in target-local coordinates.
    #[inline]
    pub fn target_min(&self) -> &[usize] {
        &self.target_min
    }

    /// Minimum of the box in source-local coordinates.
    #[inline]
    pub fn source_min(&self) -> &[usize] {
        &self.source_min
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn num_points(&self) -> usize {
        self.shape.num_points()
    }

    /// The number of contiguous elements copied per row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.shape.row_len()
    }

    /// The box in target-local coordinates.
    pub fn target_extent(&self) -> ExtentN {
        Self::extent_at(&self.target_min, &self.shape)
    }

    /// The box in source-local coordinates.
    pub fn source_extent(&self) -> ExtentN {
        Self::extent_at(&self.source_min, &self.shape)
    }

    // Every component was derived from an in-range i64, so the casts are lossless.
    fn extent_at(min: &[usize], shape: &Shape) -> ExtentN {
        ExtentN::from_min_and_shape(
            PointN(min.iter().map(|&c| c as i64).collect()),
            PointN(shape.as_slice().iter().map(|&c| c as i64).collect()),
        )
    }
}
