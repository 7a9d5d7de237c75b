use crate::{RegionError, RowMajorIndexer, Stride};

use zarr_region_core::prelude::*;

/// All information required to visit every point of a box inside a single row-major array.
#[derive(Clone, Debug)]
pub struct ArrayForEach {
    indexer: RowMajorIndexer,
    /// Array-local point where we start iteration.
    origin: Vec<usize>,
    iter_shape: Shape,
}

impl ArrayForEach {
    /// The box starting at `origin` with `iter_shape` must be in bounds of an array with `array_shape`.
    #[inline]
    pub fn new_local_unchecked(array_shape: &Shape, origin: Vec<usize>, iter_shape: Shape) -> Self {
        debug_assert_eq!(array_shape.rank(), origin.len());
        debug_assert_eq!(array_shape.rank(), iter_shape.rank());

        Self {
            indexer: RowMajorIndexer::new(array_shape),
            origin,
            iter_shape,
        }
    }

    /// Visits the part of `iter_extent` that is in bounds of an array with `array_shape`, so it's impossible to index out
    /// of bounds.
    pub fn new_local(array_shape: &Shape, iter_extent: &ExtentN) -> Result<Self, RegionError> {
        // Make sure we don't index out of array bounds.
        let iter_extent = iter_extent.intersection(&ExtentN::from_shape(array_shape)?)?;
        let origin = iter_extent.minimum.0.iter().map(|&c| c as usize).collect();

        Ok(Self::new_local_unchecked(
            array_shape,
            origin,
            iter_extent.unsigned_shape(),
        ))
    }

    /// Calls `f` with every local point and its stride, in row-major order.
    pub fn for_each(&self, mut f: impl FnMut(&[usize], Stride)) {
        if self.iter_shape.is_empty() {
            return;
        }

        let strides = self.indexer.strides();
        let mut point = self.origin.clone();
        let mut stride = self.indexer.stride_from_local_point(&point).0;
        loop {
            f(&point, Stride(stride));

            // Advance the last axis, carrying into outer axes.
            let mut axis = point.len();
            loop {
                if axis == 0 {
                    return;
                }
                axis -= 1;

                point[axis] += 1;
                stride += strides[axis];
                if point[axis] < self.origin[axis] + self.iter_shape[axis] {
                    break;
                }
                point[axis] = self.origin[axis];
                stride -= strides[axis] * self.iter_shape[axis];
            }
        }
    }
}

/// Walks the rows of the same box in two row-major arrays at once.
///
/// The box has the same shape in both arrays, but each array may place it at a different local origin. Each item is the
/// pair of strides where one row of the box starts in array 1 and array 2; the row itself is `row_len()` contiguous
/// elements in both arrays, since the innermost axis has unit stride.
#[derive(Clone, Debug)]
pub struct LockStepRowIter {
    outer_shape: Vec<usize>,
    outer_strides1: Vec<usize>,
    outer_strides2: Vec<usize>,
    row_len: usize,
    /// Position within `outer_shape` of the next row.
    row: Vec<usize>,
    next: Option<(usize, usize)>,
}

impl LockStepRowIter {
    /// The box starting at `origin1` in array 1 and `origin2` in array 2 with `iter_shape` must be in bounds of both arrays.
    pub fn new_unchecked(
        iter_shape: &Shape,
        indexer1: &RowMajorIndexer,
        origin1: &[usize],
        indexer2: &RowMajorIndexer,
        origin2: &[usize],
    ) -> Self {
        debug_assert_eq!(iter_shape.rank(), indexer1.rank());
        debug_assert_eq!(iter_shape.rank(), indexer2.rank());

        let outer_shape = iter_shape.outer_axes().to_vec();
        let outer_rank = outer_shape.len();
        let next = if iter_shape.is_empty() {
            None
        } else {
            Some((
                indexer1.stride_from_local_point(origin1).0,
                indexer2.stride_from_local_point(origin2).0,
            ))
        };

        Self {
            row: vec![0; outer_rank],
            outer_shape,
            outer_strides1: indexer1.strides()[..outer_rank].to_vec(),
            outer_strides2: indexer2.strides()[..outer_rank].to_vec(),
            row_len: iter_shape.row_len(),
            next,
        }
    }

    /// The number of contiguous elements in each row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.row_len
    }
}

impl Iterator for LockStepRowIter {
    type Item = (Stride, Stride);

    fn next(&mut self) -> Option<Self::Item> {
        let (start1, start2) = self.next?;

        let (mut s1, mut s2) = (start1, start2);
        let mut axis = self.outer_shape.len();
        self.next = loop {
            if axis == 0 {
                break None;
            }
            axis -= 1;

            self.row[axis] += 1;
            s1 += self.outer_strides1[axis];
            s2 += self.outer_strides2[axis];
            if self.row[axis] < self.outer_shape[axis] {
                break Some((s1, s2));
            }
            self.row[axis] = 0;
            s1 -= self.outer_strides1[axis] * self.outer_shape[axis];
            s2 -= self.outer_strides2[axis] * self.outer_shape[axis];
        };

        Some((Stride(start1), Stride(start2)))
    }
}

impl core::iter::FusedIterator for LockStepRowIter {}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_each_visits_row_major_order() {
        let shape = Shape::from([3, 4]);
        let visitor = ArrayForEach::new_local_unchecked(&shape, vec![1, 1], Shape::from([2, 2]));

        let mut visited = Vec::new();
        visitor.for_each(|p, s| visited.push((p.to_vec(), s)));

        assert_eq!(
            visited,
            vec![
                (vec![1, 1], Stride(5)),
                (vec![1, 2], Stride(6)),
                (vec![2, 1], Stride(9)),
                (vec![2, 2], Stride(10)),
            ]
        );
    }

    #[test]
    fn for_each_clips_to_array() {
        let shape = Shape::from([3, 4]);
        let iter_extent =
            ExtentN::from_min_and_shape(PointN::from([-1, 2]), PointN::from([3, 10]));
        let visitor = ArrayForEach::new_local(&shape, &iter_extent).unwrap();

        let mut strides = Vec::new();
        visitor.for_each(|_p, s| strides.push(s.0));

        assert_eq!(strides, vec![2, 3, 6, 7]);
    }

    #[test]
    fn for_each_of_empty_and_zero_rank_boxes() {
        let mut count = 0;
        ArrayForEach::new_local_unchecked(&Shape::from([3, 4]), vec![0, 0], Shape::from([2, 0]))
            .for_each(|_, _| count += 1);
        assert_eq!(count, 0);

        ArrayForEach::new_local_unchecked(&Shape(vec![]), vec![], Shape(vec![]))
            .for_each(|_, s| {
                assert_eq!(s, Stride(0));
                count += 1;
            });
        assert_eq!(count, 1);
    }

    #[test]
    fn lock_step_rows_3d() {
        let indexer1 = RowMajorIndexer::new(&Shape::from([4, 4, 4]));
        let indexer2 = RowMajorIndexer::new(&Shape::from([2, 3, 2]));

        let rows: Vec<_> = LockStepRowIter::new_unchecked(
            &Shape::from([2, 2, 2]),
            &indexer1,
            &[1, 2, 1],
            &indexer2,
            &[0, 1, 0],
        )
        .map(|(s1, s2)| (s1.0, s2.0))
        .collect();

        assert_eq!(rows, vec![(25, 2), (29, 4), (41, 8), (45, 10)]);
    }

    #[test]
    fn lock_step_rows_of_small_ranks() {
        let indexer1 = RowMajorIndexer::new(&Shape::from([10]));
        let indexer2 = RowMajorIndexer::new(&Shape::from([4]));
        let mut iter = LockStepRowIter::new_unchecked(
            &Shape::from([3]),
            &indexer1,
            &[7],
            &indexer2,
            &[1],
        );
        assert_eq!(iter.row_len(), 3);
        assert_eq!(iter.next(), Some((Stride(7), Stride(1))));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);

        let scalar = RowMajorIndexer::new(&Shape(vec![]));
        let rows: Vec<_> =
            LockStepRowIter::new_unchecked(&Shape(vec![]), &scalar, &[], &scalar, &[]).collect();
        assert_eq!(rows, vec![(Stride(0), Stride(0))]);
    }

    #[test]
    fn lock_step_rows_of_empty_box() {
        let indexer = RowMajorIndexer::new(&Shape::from([3, 3]));

        assert_eq!(
            LockStepRowIter::new_unchecked(&Shape::from([0, 3]), &indexer, &[0, 0], &indexer, &[0, 0])
                .count(),
            0
        );
    }
}
