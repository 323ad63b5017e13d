//! RNG-реализации `RandomSource` поверх `rand`.
//!
//! Модуль подключается только вне wasm32: в браузере сценарии раздаёт фронт.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::coach::RandomSource;

/// Системный RNG (thread_rng) для обычной тренировки.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }

    fn next_in_range(&mut self, low: u64, high: u64) -> u64 {
        inclusive(&mut rand::thread_rng(), low, high)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Один и тот же seed – одна и та же раздача.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    seed: u64,
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Исходный seed (печатается в логах, чтобы повторить раздачу).
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    fn next_in_range(&mut self, low: u64, high: u64) -> u64 {
        inclusive(&mut self.inner, low, high)
    }
}

/// `[low, high]`; при перевёрнутых границах возвращает `low`.
fn inclusive<R: Rng + ?Sized>(rng: &mut R, low: u64, high: u64) -> u64 {
    if high <= low {
        low
    } else {
        rng.gen_range(low..=high)
    }
}
