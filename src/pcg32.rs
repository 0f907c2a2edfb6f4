use rand::{rand_core::impls, RngCore, SeedableRng};

use crate::bounded;
use crate::error::Error;

// Constants from https://www.pcg-random.org/ (pcg32, 64-bit LCG state)
pub const MULTIPLIER: u64 = 6364136223846793005;

/// PCG32 generator with the XSH-RR output function.
///
/// 64 bits of LCG state, 32-bit output, period 2^64, and one of 2^63 streams
/// picked by the odd `increment`. Built through [`Pcg32::from_seed_stream`]
/// or [`SeedableRng`], so every instance has been seeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pcg32 {
    state: u64,
    increment: u64,
}

impl Pcg32 {
    /// Serialized size of the generator: the state and increment words.
    pub const STATE_SIZE: usize = 16;

    // State 0 on stream 0; the increment is already odd so the LCG never sticks
    pub(crate) const fn new() -> Self {
        Self { state: 0, increment: 1 }
    }

    pub fn from_seed_stream(seed: u64, stream: u64) -> Self {
        let mut rng = Self::new();
        rng.seed(seed, stream);
        rng
    }

    pub const fn state_size() -> usize {
        Self::STATE_SIZE
    }

    /// Seeds the generator with an initial state and a stream selector.
    ///
    /// Only the low 63 bits of `stream` matter. The seed is mixed in between
    /// two steps rather than assigned, so the first outputs already depend on
    /// both the seed and the stream.
    pub fn seed(&mut self, seed: u64, stream: u64) {
        self.increment = (stream << 1) | 1;
        self.state = 0;
        self.step();
        self.state = self.state.wrapping_add(seed);
        self.step();
    }

    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.increment);
    }

    /// Advances the state and returns the permuted old state.
    #[inline]
    pub fn next(&mut self) -> u32 {
        let old = self.state;
        self.step();

        // XSH-RR: xorshift high bits down, then rotate by the top 5 bits
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Uniform value in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn bounded_next(&mut self, bound: u32) -> u32 {
        bounded::sample(bound, || self.next())
    }

    pub fn checked_bounded_next(&mut self, bound: u32) -> Result<u32, Error> {
        bounded::try_sample(bound, || self.next())
    }

    /// Jumps ahead `delta` steps in O(log delta) time.
    ///
    /// Uses Brown's "Random Number Generation with Arbitrary Stride": the
    /// composition of `delta` affine steps is itself an affine map, built up
    /// by squaring. `advance(u64::MAX)` followed by one `next` returns to
    /// the current state.
    pub fn advance(&mut self, mut delta: u64) {
        let mut cur_mult = MULTIPLIER;
        let mut cur_plus = self.increment;
        let mut acc_mult = 1u64;
        let mut acc_plus = 0u64;

        while delta > 0 {
            if delta & 1 == 1 {
                acc_mult = acc_mult.wrapping_mul(cur_mult);
                acc_plus = acc_plus.wrapping_mul(cur_mult).wrapping_add(cur_plus);
            }
            cur_plus = cur_mult.wrapping_add(1).wrapping_mul(cur_plus);
            cur_mult = cur_mult.wrapping_mul(cur_mult);
            delta >>= 1;
        }

        self.state = acc_mult.wrapping_mul(self.state).wrapping_add(acc_plus);
    }

    /// State then increment, both little endian.
    pub fn to_bytes(&self) -> [u8; Self::STATE_SIZE] {
        let mut bytes = [0; Self::STATE_SIZE];
        bytes[..8].copy_from_slice(&self.state.to_le_bytes());
        bytes[8..].copy_from_slice(&self.increment.to_le_bytes());
        bytes
    }

    pub fn from_bytes(bytes: [u8; Self::STATE_SIZE]) -> Result<Self, Error> {
        let [state, increment] = split_words::<2>(&bytes);
        if increment & 1 == 0 {
            return Err(Error::EvenIncrement);
        }
        Ok(Self { state, increment })
    }

    pub(crate) const fn increment(&self) -> u64 {
        self.increment
    }
}

pub(crate) fn split_words<const N: usize>(bytes: &[u8]) -> [u64; N] {
    core::array::from_fn(|i| {
        let mut word = [0; 8];
        word.copy_from_slice(&bytes[i * 8..(i + 1) * 8]);
        u64::from_le_bytes(word)
    })
}

impl RngCore for Pcg32 {
    fn next_u32(&mut self) -> u32 {
        self.next()
    }

    // High word first, same layout as `Pcg32x2::next`
    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next());
        let low = u64::from(self.next());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Pcg32 {
    /// Little-endian seed followed by little-endian stream selector.
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let [seed, stream] = split_words::<2>(&seed);
        Self::from_seed_stream(seed, stream)
    }
}
