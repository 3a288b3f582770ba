//! Cosmetic randomness.
//!
//! All jitter, spawn chance and initial particle velocity flow through an
//! injectable [`rand::Rng`] so a seeded run is reproducible and tests can
//! substitute a fixed-output source for zero-jitter assertions.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The default random source for overlay visuals.
///
/// ChaCha8 is overkill cryptographically but cheap, portable and gives
/// identical streams on every platform for a given seed.
pub type OverlayRng = ChaCha8Rng;

/// Creates the default seeded random source.
#[must_use]
pub fn seeded_rng(seed: u64) -> OverlayRng {
    OverlayRng::seed_from_u64(seed)
}
