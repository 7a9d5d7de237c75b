//! Copying the overlap between two dense buffers.
//!
//! Every read or write of a chunked array decomposes into one copy per chunk touching the requested window. Interior chunks
//! lie completely inside the window, but edge and corner chunks only partially overlap it, and a window may reach past the
//! array's valid extent. `copy_region` handles all of these cases: it computes the `Overlap` of the source and target, then
//! copies only that box, one contiguous row at a time.
//!
//! The copier never writes outside of the overlap. On the read path, the window is filled with the array's fill value
//! before any chunk is copied into it, so that points without stored data keep the fill value. On the write path, the chunk
//! keeps its previous contents outside of the window.
//!
//! Direction is only a matter of argument order. Given `window_origin`, the origin of a request window in the local
//! coordinates of a chunk:
//!   - `read_chunk_into(window_origin, chunk, window)` copies chunk data into the window
//!   - `write_chunk_from(window_origin, window, chunk)` copies window data into the chunk
//!
//! ```
//! use zarr_region_core::prelude::*;
//! use zarr_region_storage::prelude::*;
//!
//! let mut chunk = DenseBuffer::fill(Shape::from([4, 4]), 0);
//! let window = DenseBuffer::fill_with(Shape::from([2, 2]), |p| 1 + p[0] * 2 + p[1]);
//!
//! // The window's origin is at (3, -1) in the chunk, so only its top right point lands in the chunk.
//! write_chunk_from(&PointN::from([3, -1]), &window, &mut chunk).unwrap();
//! assert_eq!(chunk.get(&[3usize, 0][..]), 2);
//! assert_eq!(chunk.values_slice().iter().sum::<usize>(), 2);
//!
//! // Reading it back only touches the same point of the window.
//! let mut readback = DenseBuffer::fill(Shape::from([2, 2]), 0);
//! read_chunk_into(&PointN::from([3, -1]), &chunk, &mut readback).unwrap();
//! assert_eq!(readback.values_slice(), &[0, 2, 0, 0]);
//! ```

mod overlap;

pub use overlap::*;

use crate::{DenseBuffer, LockStepRowIter, RegionError};

use zarr_region_core::PointN;

use core::ops::{Deref, DerefMut};
use tracing::{trace, trace_span};

/// Copies every point where `src` and `dst` overlap from `src` into `dst`, where `offset` is the origin of `src` in the
/// local coordinates of `dst`. Points of `dst` outside of the overlap are left untouched.
///
/// If the buffers don't overlap on some axis, `dst` is returned unchanged. Fails if `offset`, `src` and `dst` don't all have
/// the same rank.
///
/// ```
/// # use zarr_region_core::prelude::*;
/// # use zarr_region_storage::prelude::*;
/// let src = DenseBuffer::fill(Shape::from([2, 2]), 1);
/// let mut dst = DenseBuffer::fill(Shape::from([3, 3]), 0);
///
/// copy_region(&PointN::from([1, 1]), &src, &mut dst).unwrap();
/// assert_eq!(dst.values_slice(), &[0, 0, 0, 0, 1, 1, 0, 1, 1]);
/// ```
pub fn copy_region<'a, T, SrcStore, DstStore>(
    offset: &PointN,
    src: &DenseBuffer<T, SrcStore>,
    dst: &'a mut DenseBuffer<T, DstStore>,
) -> Result<&'a mut DenseBuffer<T, DstStore>, RegionError>
where
    T: Clone,
    SrcStore: Deref<Target = [T]>,
    DstStore: DerefMut<Target = [T]>,
{
    let _span = trace_span!("copy_region", rank = offset.rank()).entered();

    let overlap = match Overlap::between(offset, src.shape(), dst.shape())? {
        Some(overlap) => overlap,
        None => {
            trace!(?offset, "source and target are disjoint");
            return Ok(dst);
        }
    };
    trace!(
        target_min = ?overlap.target_min(),
        shape = ?overlap.shape(),
        "copying overlap"
    );

    unchecked_copy_overlap_rows(src, dst, &overlap);

    Ok(dst)
}

// `overlap` must be in bounds of both buffers.
fn unchecked_copy_overlap_rows<T, SrcStore, DstStore>(
    src: &DenseBuffer<T, SrcStore>,
    dst: &mut DenseBuffer<T, DstStore>,
    overlap: &Overlap,
) where
    T: Clone,
    SrcStore: Deref<Target = [T]>,
    DstStore: DerefMut<Target = [T]>,
{
    let rows = LockStepRowIter::new_unchecked(
        overlap.shape(),
        src.indexer(),
        overlap.source_min(),
        dst.indexer(),
        overlap.target_min(),
    );
    let row_len = rows.row_len();

    let src_values = src.values_slice();
    let dst_values = dst.values_mut_slice();
    for (s_src, s_dst) in rows {
        // The actual copy.
        dst_values[s_dst.span(row_len)].clone_from_slice(&src_values[s_src.span(row_len)]);
    }
}

/// Copies the part of `chunk` that overlaps a request `window` into the window, where `window_origin` is the origin of the
/// window in the local coordinates of the chunk. Points of the window outside of the chunk keep their value, which should
/// normally be the array's fill value.
pub fn read_chunk_into<'a, T, ChunkStore, WindowStore>(
    window_origin: &PointN,
    chunk: &DenseBuffer<T, ChunkStore>,
    window: &'a mut DenseBuffer<T, WindowStore>,
) -> Result<&'a mut DenseBuffer<T, WindowStore>, RegionError>
where
    T: Clone,
    ChunkStore: Deref<Target = [T]>,
    WindowStore: DerefMut<Target = [T]>,
{
    // The chunk origin in window coordinates. Saturating is exact: a window at `i64::MIN` is disjoint from the chunk, just
    // like a chunk at `i64::MAX` is disjoint from the window.
    let chunk_offset = window_origin.saturating_neg();

    copy_region(&chunk_offset, chunk, window)
}

/// Copies the part of a request `window` that overlaps `chunk` into the chunk, where `window_origin` is the origin of the
/// window in the local coordinates of the chunk. Points of the chunk outside of the window keep their previous value.
#[inline]
pub fn write_chunk_from<'a, T, WindowStore, ChunkStore>(
    window_origin: &PointN,
    window: &DenseBuffer<T, WindowStore>,
    chunk: &'a mut DenseBuffer<T, ChunkStore>,
) -> Result<&'a mut DenseBuffer<T, ChunkStore>, RegionError>
where
    T: Clone,
    WindowStore: Deref<Target = [T]>,
    ChunkStore: DerefMut<Target = [T]>,
{
    copy_region(window_origin, window, chunk)
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Get;

    use zarr_region_core::prelude::*;

    use pretty_assertions::assert_eq;

    const FILL: i32 = 40;

    /// A 4x5 chunk holding 0..20 in row-major order.
    fn chunk_4x5() -> DenseBuffer<i32> {
        DenseBuffer::fill_with(Shape::from([4, 5]), |p| (p[0] * 5 + p[1]) as i32)
    }

    fn read_window(window_origin: [i64; 2], window_shape: [usize; 2]) -> Vec<i32> {
        let chunk = chunk_4x5();
        let mut window = DenseBuffer::fill(Shape::from(window_shape), FILL);
        read_chunk_into(&PointN::from(window_origin), &chunk, &mut window).unwrap();

        window.into_parts().1
    }

    #[test]
    fn read_window_fully_interior() {
        assert_eq!(read_window([1, 1], [2, 3]), vec![6, 7, 8, 11, 12, 13]);
    }

    #[test]
    fn read_window_flush_upper_left() {
        assert_eq!(read_window([0, 0], [2, 3]), vec![0, 1, 2, 5, 6, 7]);
    }

    #[test]
    fn read_window_lower_corner_overlap() {
        assert_eq!(read_window([-1, -1], [2, 3]), vec![40, 40, 40, 40, 0, 1]);
    }

    #[test]
    fn read_window_past_right_edge() {
        assert_eq!(read_window([1, 3], [2, 3]), vec![8, 9, 40, 13, 14, 40]);
    }

    #[test]
    fn read_window_bottom_left_corner() {
        assert_eq!(read_window([3, -1], [2, 3]), vec![40, 15, 16, 40, 40, 40]);
    }

    #[test]
    fn read_window_with_flat_shape() {
        assert_eq!(
            read_window([2, -4], [1, 16]),
            vec![40, 40, 40, 40, 10, 11, 12, 13, 14, 40, 40, 40, 40, 40, 40, 40]
        );
    }

    #[test]
    fn read_window_is_copy_region_with_negated_offset() {
        let chunk = chunk_4x5();
        let mut via_read = DenseBuffer::fill(Shape::from([2, 3]), FILL);
        let mut via_copy = DenseBuffer::fill(Shape::from([2, 3]), FILL);

        read_chunk_into(&PointN::from([1, 3]), &chunk, &mut via_read).unwrap();
        copy_region(&PointN::from([-1, -3]), &chunk, &mut via_copy).unwrap();

        assert_eq!(via_read, via_copy);
    }

    #[test]
    fn copy_source_fully_contained() {
        let src = DenseBuffer::fill_with(Shape::from([2, 2]), |p| (1 + p[0] * 2 + p[1]) as i32);
        let mut dst = DenseBuffer::fill(Shape::from([4, 5]), 0);

        copy_region(&PointN::from([1, 2]), &src, &mut dst).unwrap();

        #[rustfmt::skip]
        let expected = vec![
            0, 0, 0, 0, 0,
            0, 0, 1, 2, 0,
            0, 0, 3, 4, 0,
            0, 0, 0, 0, 0,
        ];
        assert_eq!(dst.values_slice(), expected.as_slice());
    }

    #[test]
    fn disjoint_copy_is_a_no_op() {
        let src = chunk_4x5();
        let original = DenseBuffer::fill(Shape::from([2, 3]), FILL);

        for offset in [[2, 0], [0, 3], [-4, 0], [0, -5], [10, -10]].iter() {
            let mut dst = original.clone();
            copy_region(&PointN::from(*offset), &src, &mut dst).unwrap();
            assert_eq!(dst, original);
        }
    }

    #[test]
    fn zero_extent_copy_is_a_no_op() {
        let src = DenseBuffer::new(Shape::from([0, 5]), Vec::<i32>::new()).unwrap();
        let mut dst = DenseBuffer::fill(Shape::from([2, 3]), FILL);

        copy_region(&PointN::from([0, 0]), &src, &mut dst).unwrap();
        assert_eq!(dst.values_slice(), &[FILL; 6]);

        let mut empty_dst = DenseBuffer::new(Shape::from([2, 0]), Vec::<i32>::new()).unwrap();
        copy_region(&PointN::from([0, 0]), &chunk_4x5(), &mut empty_dst).unwrap();
        assert_eq!(empty_dst.num_points(), 0);

        // Other axes of an empty buffer may be arbitrarily long.
        let huge_src = DenseBuffer::new(Shape::from([0, usize::MAX]), Vec::<i32>::new()).unwrap();
        copy_region(&PointN::from([0, 0]), &huge_src, &mut dst).unwrap();
        assert_eq!(dst.values_slice(), &[FILL; 6]);
    }

    #[test]
    fn rank_mismatch_is_rejected() {
        let src = chunk_4x5();
        let mut dst = DenseBuffer::fill(Shape::from([2, 3]), FILL);

        let result = copy_region(&PointN::from([0, 0, 0]), &src, &mut dst).map(|_| ());
        assert_eq!(
            result,
            Err(RegionError::IncompatibleDimensionality(
                IncompatibleDimensionalityError::new(2, 3)
            ))
        );

        let mut dst_3d = DenseBuffer::fill(Shape::from([2, 3, 1]), FILL);
        assert!(copy_region(&PointN::from([0, 0]), &src, &mut dst_3d).is_err());
        assert_eq!(dst_3d.values_slice(), &[FILL; 6]);
    }

    #[test]
    fn copy_is_idempotent() {
        let src = chunk_4x5();
        let mut once = DenseBuffer::fill(Shape::from([3, 3]), FILL);
        copy_region(&PointN::from([-2, 1]), &src, &mut once).unwrap();

        let mut twice = once.clone();
        copy_region(&PointN::from([-2, 1]), &src, &mut twice).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn write_then_read_round_trips_the_overlap() {
        let window = DenseBuffer::fill_with(Shape::from([3, 4]), |p| (100 + p[0] * 4 + p[1]) as i32);
        let mut chunk = DenseBuffer::fill(Shape::from([4, 5]), 0);
        let window_origin = PointN::from([2, 3]);

        write_chunk_from(&window_origin, &window, &mut chunk).unwrap();

        // The chunk keeps its prior contents outside of the window.
        assert_eq!(chunk.get(&[0usize, 0][..]), 0);
        assert_eq!(chunk.get(&[2usize, 3][..]), 100);
        assert_eq!(chunk.get(&[3usize, 4][..]), 105);

        let mut readback = DenseBuffer::fill(Shape::from([3, 4]), FILL);
        read_chunk_into(&window_origin, &chunk, &mut readback).unwrap();

        #[rustfmt::skip]
        let expected = vec![
            100, 101, FILL, FILL,
            104, 105, FILL, FILL,
            FILL, FILL, FILL, FILL,
        ];
        assert_eq!(readback.values_slice(), expected.as_slice());
    }

    #[test]
    fn copy_1d_and_3d() {
        let src = DenseBuffer::fill_with(Shape::from([5]), |p| p[0] as i32);
        let mut dst = DenseBuffer::fill(Shape::from([4]), FILL);
        copy_region(&PointN::from([2]), &src, &mut dst).unwrap();
        assert_eq!(dst.values_slice(), &[FILL, FILL, 0, 1]);

        let src = DenseBuffer::fill_with(Shape::from([2, 2, 2]), |p| (p[0] * 4 + p[1] * 2 + p[2]) as i32);
        let mut dst = DenseBuffer::fill(Shape::from([2, 2, 2]), FILL);
        copy_region(&PointN::from([1, -1, 0]), &src, &mut dst).unwrap();

        #[rustfmt::skip]
        let expected = vec![
            FILL, FILL,
            FILL, FILL,
            2, 3,
            FILL, FILL,
        ];
        assert_eq!(dst.values_slice(), expected.as_slice());
    }

    #[test]
    fn copy_zero_rank() {
        let src = DenseBuffer::fill(Shape(vec![]), 7);
        let mut dst = DenseBuffer::fill(Shape(vec![]), FILL);

        copy_region(&PointN::zero(0), &src, &mut dst).unwrap();
        assert_eq!(dst.values_slice(), &[7]);
    }

    #[test]
    fn copy_between_borrowed_stores() {
        let chunk_values: Vec<i32> = (0..20).collect();
        let mut window_values = [FILL; 6];
        {
            let chunk = DenseBuffer::new(Shape::from([4, 5]), &chunk_values[..]).unwrap();
            let mut window = DenseBuffer::new(Shape::from([2, 3]), &mut window_values[..]).unwrap();
            window
                .copy_region_from(&PointN::from([-1, -1]), &chunk)
                .unwrap();
        }
        assert_eq!(window_values, [6, 7, 8, 11, 12, 13]);
    }

    #[test]
    fn offsets_at_the_lattice_edge_are_disjoint() {
        let chunk = chunk_4x5();
        let unchanged = DenseBuffer::fill(Shape::from([2, 3]), FILL);

        for offset in [[i64::MAX, 0], [0, i64::MAX], [-100, i64::MAX], [i64::MIN, 0], [0, i64::MIN]].iter() {
            let mut window = unchanged.clone();
            copy_region(&PointN::from(*offset), &chunk, &mut window).unwrap();
            assert_eq!(window, unchanged);

            let mut window = unchanged.clone();
            read_chunk_into(&PointN::from(*offset), &chunk, &mut window).unwrap();
            assert_eq!(window, unchanged);

            let mut written = chunk.clone();
            write_chunk_from(&PointN::from(*offset), &unchanged, &mut written).unwrap();
            assert_eq!(written, chunk);
        }
    }
}
