use crate::Stride;

use zarr_region_core::Shape;

/// Translates local multi-indices of a row-major buffer into flat `Stride`s.
///
/// The innermost (last) axis is contiguous: its element stride is 1, and each outer axis steps over a whole block of the
/// axes inside it.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RowMajorIndexer {
    strides: Vec<usize>,
}

impl RowMajorIndexer {
    pub fn new(shape: &Shape) -> Self {
        let rank = shape.rank();
        let mut strides: Vec<usize> = vec![1; rank];
        for axis in (0..rank.saturating_sub(1)).rev() {
            // Only saturates for shapes with no points, which never index.
            strides[axis] = strides[axis + 1].saturating_mul(shape[axis + 1]);
        }

        Self { strides }
    }

    /// The element stride of each axis.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.strides.len()
    }

    /// The caller must make sure `point` is in bounds of the shape this indexer was built for.
    #[inline]
    pub fn stride_from_local_point(&self, point: &[usize]) -> Stride {
        debug_assert_eq!(point.len(), self.strides.len());

        Stride(
            point
                .iter()
                .zip(self.strides.iter())
                .map(|(c, s)| c * s)
                .sum(),
        )
    }
}
