//! Injectable randomness for effect application rolls.
//!
//! The engine never reaches for a global RNG. Every roll comes from a
//! [`RollSource`] passed in by the caller, so a seeded source replays a
//! battle exactly.

/// Source of uniform rolls in `[0, 1)`.
pub trait RollSource {
    /// Generate the next random u32.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, 1)`.
    fn roll(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }
}

impl<R: RollSource + ?Sized> RollSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn roll(&mut self) -> f64 {
        (**self).roll()
    }
}

impl<R: RollSource + ?Sized> RollSource for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn roll(&mut self) -> f64 {
        (**self).roll()
    }
}

/// Seedable PCG generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRolls {
    state: u64,
}

impl PcgRolls {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator whose sequence is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            state: Self::avalanche(seed),
        }
    }

    /// Spreads low-entropy seeds (0, 1, 2, ...) across the state space.
    fn avalanche(seed: u64) -> u64 {
        let mut hash = seed ^ 0x9e3779b97f4a7c15;
        hash ^= hash >> 33;
        hash = hash.wrapping_mul(0xff51afd7ed558ccd);
        hash ^= hash >> 33;
        hash
    }

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RollSource for PcgRolls {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::step(self.state);
        Self::output(self.state)
    }
}

/// Replays a fixed list of rolls, cycling when exhausted.
///
/// Useful in tests to force effect rules to fire (`0.0`) or miss (`0.99`).
#[derive(Clone, Debug, PartialEq)]
pub struct FixedRolls {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedRolls {
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "FixedRolls needs at least one value");
        Self { values, cursor: 0 }
    }

    /// Every roll returns `value`.
    pub fn always(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RollSource for FixedRolls {
    fn next_u32(&mut self) -> u32 {
        (self.roll() * f64::from(u32::MAX)) as u32
    }

    fn roll(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
