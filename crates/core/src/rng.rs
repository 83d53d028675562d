//! RNG module - piece sources for the spawner
//!
//! The spawner only needs "give me the next kind". [`RandomSource`] picks
//! uniformly from the seven kinds using a small seeded LCG, so a game is
//! reproducible from its seed. [`SequenceSource`] replays a fixed list and is
//! what tests inject.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Supplies the kind of each newly spawned piece.
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Uniform random kinds from a seeded [`SimpleRng`].
#[derive(Debug, Clone)]
pub struct RandomSource {
    seed: u32,
    rng: SimpleRng,
}

impl RandomSource {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    /// Seed this source was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl PieceSource for RandomSource {
    fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }
}

/// Cycles through a fixed list of kinds.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl SequenceSource {
    /// An empty list falls back to the catalog order.
    pub fn new(kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        let mut kinds: Vec<PieceKind> = kinds.into_iter().collect();
        if kinds.is_empty() {
            kinds = PieceKind::ALL.to_vec();
        }
        Self { kinds, next: 0 }
    }

    /// Always the same kind.
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new([kind])
    }
}

impl PieceSource for SequenceSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}
