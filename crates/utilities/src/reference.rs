use zarr_region_core::prelude::*;
use zarr_region_storage::{DenseBuffer, GetMut};

/// Copies `src` into `dst` one point at a time, checking every point against both buffers. This is the obvious, slow way
/// to do what `copy_region` does, used to check it.
pub fn naive_copy_region<T: Clone>(offset: &PointN, src: &DenseBuffer<T>, dst: &mut DenseBuffer<T>) {
    let src_extent = ExtentN::from_min_and_shape(offset.clone(), src.shape().to_point().unwrap());

    for p in src_extent.iter_points() {
        let src_p: Vec<usize> = (&p - offset).0.iter().map(|&c| c as usize).collect();
        if p.0.iter().any(|&c| c < 0) {
            continue;
        }
        let dst_p: Vec<usize> = p.0.iter().map(|&c| c as usize).collect();
        if dst.contains(&dst_p) {
            let value = src.get_checked(&src_p).unwrap().clone();
            *dst.get_mut(dst_p.as_slice()) = value;
        }
    }
}
