//! Инфраструктурный слой вокруг тренера:
//! - RNG-реализации для дилера сценариев;
//! - логирование (tracing-subscriber).
//!
//! Оба модуля только для НЕ wasm32: там нет rand и tracing-subscriber.

#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
#[cfg(not(target_arch = "wasm32"))]
pub mod rng;

#[cfg(not(target_arch = "wasm32"))]
pub use rng::{DeterministicRng, SystemRng};
