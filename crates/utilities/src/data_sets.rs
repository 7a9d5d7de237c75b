use zarr_region_core::prelude::*;
use zarr_region_storage::DenseBuffer;

use rand::Rng;

// TODO: it would be nice if the storage crate's unit tests could share this module, but it causes this issue:
// https://github.com/rust-lang/cargo/issues/6765

/// A buffer holding `0, 1, 2, ...` in row-major order, so every value identifies the point it was read from.
pub fn sequential_buffer(shape: Shape) -> DenseBuffer<i32> {
    let values = (0..shape.num_points() as i32).collect();

    DenseBuffer::new(shape, values).expect("sequential values match the shape")
}

/// A random shape of `rank` axes, each of length `1..=max_len`.
pub fn random_shape(rng: &mut impl Rng, rank: usize, max_len: usize) -> Shape {
    Shape((0..rank).map(|_| rng.gen_range(1..=max_len)).collect())
}

/// A random offset of a `source` origin in `target` coordinates, ranging from entirely before the target to entirely past
/// its far edge on every axis.
pub fn random_offset(rng: &mut impl Rng, source: &Shape, target: &Shape) -> PointN {
    PointN(
        source
            .as_slice()
            .iter()
            .zip(target.as_slice())
            .map(|(&s, &t)| rng.gen_range(-(s as i64) - 1..=t as i64 + 1))
            .collect(),
    )
}
