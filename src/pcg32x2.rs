use rand::{rand_core::impls, RngCore, SeedableRng};

use crate::bounded;
use crate::error::Error;
use crate::pcg32::{split_words, Pcg32};

// Clears the stream bit that seeding shifts out of the increment
const STREAM_MASK: u64 = u64::MAX >> 1;

/// 64-bit generator built from two PCG32 generators on distinct streams.
///
/// The period stays 2^64 but the state space is about 2^254
/// (2^64 * 2^64 * 2^63 * (2^63 - 1)). Tying together two generators on the
/// same stream would give correlated halves, so seeding never allows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pcg32x2 {
    gen: [Pcg32; 2],
}

impl Pcg32x2 {
    pub const STATE_SIZE: usize = 2 * Pcg32::STATE_SIZE;

    pub fn from_seeds(seed1: u64, seed2: u64, stream1: u64, stream2: u64) -> Self {
        let mut rng = Self { gen: [Pcg32::new(), Pcg32::new()] };
        rng.seed(seed1, seed2, stream1, stream2);
        rng
    }

    pub const fn state_size() -> usize {
        Self::STATE_SIZE
    }

    /// Seeds both halves. If the two streams coincide (ignoring the top bit,
    /// which seeding drops anyway) the second stream is complemented first.
    pub fn seed(&mut self, seed1: u64, seed2: u64, stream1: u64, mut stream2: u64) {
        if stream1 & STREAM_MASK == stream2 & STREAM_MASK {
            stream2 = !stream2;
        }
        self.gen[0].seed(seed1, stream1);
        self.gen[1].seed(seed2, stream2);
    }

    /// First half's output in the high word, second half's in the low word.
    #[inline]
    pub fn next(&mut self) -> u64 {
        let high = u64::from(self.gen[0].next());
        let low = u64::from(self.gen[1].next());
        (high << 32) | low
    }

    /// Uniform value in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn bounded_next(&mut self, bound: u64) -> u64 {
        bounded::sample(bound, || self.next())
    }

    pub fn checked_bounded_next(&mut self, bound: u64) -> Result<u64, Error> {
        bounded::try_sample(bound, || self.next())
    }

    pub fn advance(&mut self, delta: u64) {
        for gen in &mut self.gen {
            gen.advance(delta);
        }
    }

    pub fn halves(&self) -> &[Pcg32; 2] {
        &self.gen
    }

    pub fn to_bytes(&self) -> [u8; Self::STATE_SIZE] {
        let mut bytes = [0; Self::STATE_SIZE];
        bytes[..Pcg32::STATE_SIZE].copy_from_slice(&self.gen[0].to_bytes());
        bytes[Pcg32::STATE_SIZE..].copy_from_slice(&self.gen[1].to_bytes());
        bytes
    }

    pub fn from_bytes(bytes: [u8; Self::STATE_SIZE]) -> Result<Self, Error> {
        let mut halves = [[0; Pcg32::STATE_SIZE]; 2];
        halves[0].copy_from_slice(&bytes[..Pcg32::STATE_SIZE]);
        halves[1].copy_from_slice(&bytes[Pcg32::STATE_SIZE..]);

        let gen = [Pcg32::from_bytes(halves[0])?, Pcg32::from_bytes(halves[1])?];
        if gen[0].increment() == gen[1].increment() {
            return Err(Error::SharedStream);
        }
        Ok(Self { gen })
    }
}

impl RngCore for Pcg32x2 {
    // Low word of a full draw, so both halves keep advancing together
    fn next_u32(&mut self) -> u32 {
        self.next() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Pcg32x2 {
    /// `seed1`, `seed2`, `stream1`, `stream2`, each little endian.
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        let [seed1, seed2, stream1, stream2] = split_words::<4>(&seed);
        Self::from_seeds(seed1, seed2, stream1, stream2)
    }
}
