use core::ops::{Add, AddAssign};

/// The most efficient coordinates for slice-backed lattice maps. A single number that translates directly to a slice offset.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Stride(pub usize);

impl Add for Stride {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Stride(self.0 + rhs.0)
    }
}

impl AddAssign for Stride {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Stride {
    /// The half-open range of `len` slice offsets starting at `self`.
    #[inline]
    pub fn span(self, len: usize) -> core::ops::Range<usize> {
        self.0..self.0 + len
    }
}
