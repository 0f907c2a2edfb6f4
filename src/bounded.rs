use std::ops::Rem;

use crate::error::Error;

/// Unsigned machine word a generator can draw uniformly over its whole range.
pub(crate) trait UniformWord: Copy + PartialOrd + Rem<Output = Self> {
    const ZERO: Self;

    fn wrapping_neg(self) -> Self;
}

impl UniformWord for u32 {
    const ZERO: Self = 0;

    #[inline]
    fn wrapping_neg(self) -> Self {
        u32::wrapping_neg(self)
    }
}

impl UniformWord for u64 {
    const ZERO: Self = 0;

    #[inline]
    fn wrapping_neg(self) -> Self {
        u64::wrapping_neg(self)
    }
}

/// Smallest draw that is kept: `2^w mod bound`, i.e. `(2^w - bound) % bound`.
///
/// Everything below it belongs to the incomplete last block of `bound`
/// values and would skew `draw % bound` towards small results.
#[inline]
pub(crate) fn threshold<W: UniformWord>(bound: W) -> W {
    bound.wrapping_neg() % bound
}

/// Draws from `draw` until a value clears the threshold, then reduces it.
///
/// # Panics
///
/// Panics if `bound` is zero.
pub(crate) fn sample<W: UniformWord>(bound: W, draw: impl FnMut() -> W) -> W {
    assert!(bound != W::ZERO, "bounded draw with a zero bound");
    sample_unchecked(bound, draw)
}

/// Same as [`sample`], reporting a zero bound as an error instead.
pub(crate) fn try_sample<W: UniformWord>(bound: W, draw: impl FnMut() -> W) -> Result<W, Error> {
    if bound == W::ZERO {
        return Err(Error::ZeroBound);
    }
    Ok(sample_unchecked(bound, draw))
}

fn sample_unchecked<W: UniformWord>(bound: W, mut draw: impl FnMut() -> W) -> W {
    let threshold = threshold(bound);
    loop {
        let r = draw();
        if r >= threshold {
            return r % bound;
        }
    }
}
