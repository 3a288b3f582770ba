//! Property-style checks over arbitrary input sequences.
//!
//! The classifier and the pool both absorb degenerate input instead of
//! erroring; these tests hammer them with randomized sequences and assert
//! the invariants hold throughout.

use rand::Rng;
use synapse_core::config::PhysicsConfig;
use synapse_core::gesture::GestureClassifier;
use synapse_core::hand::{DetectorFrame, Landmark, LANDMARKS_PER_HAND};
use synapse_core::math::Vec2;
use synapse_core::particle::{ParticleKind, ParticlePool};
use synapse_core::rng::seeded_rng;
use synapse_core::session::SessionState;

fn hand_at(x: f32, y: f32) -> Vec<Landmark> {
    vec![Landmark::new(x, y, 0.0); LANDMARKS_PER_HAND]
}

#[test]
fn intensity_stays_in_unit_interval_for_any_hand_count_sequence() {
    let physics = PhysicsConfig::default();
    let classifier = GestureClassifier::new(physics);
    let mut state = SessionState::new(800.0, 600.0);
    let mut pool = ParticlePool::new(250, physics);
    let mut rng = seeded_rng(0xBEEF);

    for _ in 0..2000 {
        let frame = match rng.gen_range(0..4_u32) {
            0 => DetectorFrame::empty(),
            1 => DetectorFrame {
                hands: vec![hand_at(rng.gen(), rng.gen())],
            },
            // Sometimes close enough to fuse, sometimes not.
            2 => DetectorFrame {
                hands: vec![hand_at(0.5, 0.5), hand_at(0.52, 0.5)],
            },
            _ => DetectorFrame {
                hands: vec![hand_at(rng.gen(), rng.gen()), hand_at(rng.gen(), rng.gen())],
            },
        };

        classifier.classify(&frame, &mut state, &mut pool, &mut rng);

        let intensity = state.fusion_intensity();
        assert!((0.0..=1.0).contains(&intensity), "intensity {intensity}");
        assert!(pool.active_count() <= pool.capacity());
    }
}

#[test]
fn pool_count_never_exceeds_capacity_under_emit_storm() {
    let mut pool = ParticlePool::new(32, PhysicsConfig::default());
    let mut rng = seeded_rng(7);

    for tick in 0..500 {
        let burst = rng.gen_range(0..10);
        for _ in 0..burst {
            let kind = if rng.gen::<bool>() {
                ParticleKind::Normal
            } else {
                ParticleKind::FusionSpark
            };
            pool.emit(Vec2::new(rng.gen(), rng.gen()), kind, 1.0, &mut rng);
        }
        assert!(pool.active_count() <= pool.capacity(), "tick {tick}");

        pool.update(&mut rng);
        assert!(pool.active_count() <= pool.capacity(), "tick {tick}");
        assert!(pool.live().iter().all(|s| s.life > 0.0), "tick {tick}");
    }
}

#[test]
fn decay_approaches_zero_but_never_goes_negative() {
    let physics = PhysicsConfig::default();
    let classifier = GestureClassifier::new(physics);
    let mut state = SessionState::new(800.0, 600.0);
    let mut pool = ParticlePool::new(16, physics);
    let mut rng = seeded_rng(1);

    // Fuse to full intensity.
    let fusing = DetectorFrame {
        hands: vec![hand_at(0.5, 0.5), hand_at(0.51, 0.5)],
    };
    for _ in 0..25 {
        classifier.classify(&fusing, &mut state, &mut pool, &mut rng);
    }
    assert!((state.fusion_intensity() - 1.0).abs() < f32::EPSILON);

    // Starve it.
    let mut previous = state.fusion_intensity();
    for tick in 0..200 {
        classifier.classify(&DetectorFrame::empty(), &mut state, &mut pool, &mut rng);
        let intensity = state.fusion_intensity();
        assert!(intensity >= 0.0, "tick {tick}");
        assert!(intensity <= previous, "tick {tick}");
        previous = intensity;
    }
    assert!(state.fusion_intensity() < 1e-6);
}
