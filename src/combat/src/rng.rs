// src/combat/src/rng.rs
use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// The game's single random source.
///
/// Every probabilistic branch in the game goes through [`GameRng::roll_chance`]
/// or [`GameRng::roll_range`], so species tables only carry thresholds and
/// ranges as data.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: Pcg32,
    seed: u64,
}

impl GameRng {
    /// 使用指定种子创建RNG
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Seeds from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// 重置RNG状态（使用当前种子）
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
    }

    pub fn reseed(&mut self, new_seed: u64) {
        self.seed = new_seed;
        self.reset();
    }

    /// Uniform float in `[0, 1)`.
    pub fn roll(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Bernoulli trial: a uniform `[0, 1)` draw compared against `probability`.
    /// `1.0` always succeeds and `0.0` never does.
    pub fn roll_chance(&mut self, probability: f64) -> bool {
        self.roll() < probability
    }

    /// Uniform integer in `[start, end)`. An empty range yields `start`.
    pub fn roll_range(&mut self, range: Range<i32>) -> i32 {
        if range.end <= range.start {
            return range.start;
        }
        self.rng.random_range(range)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
