//! Fixed-capacity particle pool.
//!
//! A pre-allocated arena of particle slots with an explicit active count.
//! Slots `[0, active)` are live, `[active, capacity)` are free garbage.
//! Emission is O(1); removal is O(1) by swapping the dead slot with the
//! last active one. Nothing in here allocates after construction.

use bytemuck::{Pod, Zeroable};
use rand::Rng;

use crate::config::PhysicsConfig;
use crate::math::Vec2;

/// Life lost per tick. A fresh particle survives 1.0 / 0.02 = 50 ticks.
pub const LIFE_DECAY: f32 = 0.02;

/// Particle variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u32)]
pub enum ParticleKind {
    /// Trail spark emitted from fingertips.
    #[default]
    Normal = 0,
    /// High-energy spark emitted at the fusion midpoint.
    FusionSpark = 1,
}

/// One particle slot in the arena.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct ParticleSlot {
    /// Screen-space position.
    pub pos: Vec2,
    /// Velocity in pixels per tick.
    pub vel: Vec2,
    /// Remaining life, 1.0 down to 0.0.
    pub life: f32,
    /// Kind discriminant, kept as a raw u32 so the slot stays `Pod`.
    kind: u32,
}

impl ParticleSlot {
    /// The particle's kind.
    #[must_use]
    pub const fn kind(&self) -> ParticleKind {
        match self.kind {
            1 => ParticleKind::FusionSpark,
            _ => ParticleKind::Normal,
        }
    }
}

/// Fixed-capacity particle arena with swap-removal.
pub struct ParticlePool {
    /// The slot storage, allocated once.
    slots: Box<[ParticleSlot]>,
    /// Number of live slots; the live/free boundary.
    active: usize,
    /// Physics tuning, copied at construction.
    physics: PhysicsConfig,
}

impl ParticlePool {
    /// Creates a pool with `capacity` pre-allocated slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize, physics: PhysicsConfig) -> Self {
        assert!(capacity > 0, "particle pool capacity must be non-zero");
        Self {
            slots: vec![ParticleSlot::default(); capacity].into_boxed_slice(),
            active: 0,
            physics,
        }
    }

    /// Total capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live particles.
    #[inline]
    #[must_use]
    pub const fn active_count(&self) -> usize {
        self.active
    }

    /// The live particles, in slot order.
    ///
    /// Order is not stable across [`ParticlePool::update`] - swap-removal
    /// reorders slots.
    #[inline]
    #[must_use]
    pub fn live(&self) -> &[ParticleSlot] {
        &self.slots[..self.active]
    }

    /// Spawns one particle at `pos`.
    ///
    /// Velocity is a uniformly random direction at speed
    /// `speed_scale * U(1, 4)` pixels per tick. At capacity this is a
    /// silent no-op - the pool never grows and never reports backpressure.
    pub fn emit<R: Rng>(&mut self, pos: Vec2, kind: ParticleKind, speed_scale: f32, rng: &mut R) {
        if self.active >= self.slots.len() {
            return;
        }

        let angle = rng.gen::<f32>() * std::f32::consts::TAU;
        let speed = rng.gen_range(1.0_f32..4.0) * speed_scale;

        self.slots[self.active] = ParticleSlot {
            pos,
            vel: Vec2::new(angle.cos() * speed, angle.sin() * speed),
            life: 1.0,
            kind: kind as u32,
        };
        self.active += 1;
    }

    /// Integrates physics for every live particle and evicts the dead.
    ///
    /// Per particle: position += velocity, velocity gains independent
    /// per-axis jitter in `[-turbulence/2, +turbulence/2]`, velocity is
    /// damped by drag, life drops by [`LIFE_DECAY`]. A dead particle is
    /// overwritten by the last active slot and the same index is examined
    /// again, so the swapped-in particle still gets exactly one update
    /// this tick.
    pub fn update<R: Rng>(&mut self, rng: &mut R) {
        let drag = self.physics.drag;
        let turbulence = self.physics.turbulence;

        let mut i = 0;
        while i < self.active {
            let slot = &mut self.slots[i];

            slot.pos = slot.pos + slot.vel;
            slot.vel.x += (rng.gen::<f32>() - 0.5) * turbulence;
            slot.vel.y += (rng.gen::<f32>() - 0.5) * turbulence;
            slot.vel = slot.vel * drag;
            slot.life -= LIFE_DECAY;

            if slot.life <= 0.0 {
                self.active -= 1;
                self.slots[i] = self.slots[self.active];
            } else {
                i += 1;
            }
        }
    }

    /// Drops all live particles without touching the allocation.
    pub fn clear(&mut self) {
        self.active = 0;
    }
}
