//! The neural web.
//!
//! Draws every tracked point as a depth-scaled node, connects all point
//! pairs closer than the density threshold, and feeds trail particles into
//! the pool from fingertip landmarks.

use rand::Rng;
use synapse_core::config::{ColorConfig, PhysicsConfig};
use synapse_core::hand::{ScreenPoint, FINGERTIP_LANDMARKS, LANDMARKS_PER_HAND, MAX_HANDS};
use synapse_core::particle::{ParticleKind, ParticlePool};
use synapse_core::session::{SessionMode, SessionState};
use synapse_core::Vec2;

use crate::surface::{Glow, Surface};

/// Per-tick chance that a fingertip landmark emits a trail particle.
pub const FINGERTIP_SPAWN_PROBABILITY: f32 = 0.2;

/// Speed scale of emitted trail particles.
pub const TRAIL_PARTICLE_SPEED: f32 = 0.5;

/// Total span of the random midpoint offset on unstable edges.
pub const EDGE_JITTER_MAGNITUDE: f32 = 10.0;

/// Fusion intensity above which edges render as unstable electric links.
pub const EDGE_JITTER_INTENSITY: f32 = 0.5;

/// Dim floor for the distance-scaled edge opacity.
pub const MIN_EDGE_ALPHA: f32 = 0.4;

/// Blur radius of the glow underlay on close edges.
pub const EDGE_GLOW_BLUR: f32 = 10.0;

/// Draws nodes and proximity edges for every tracked point, emitting trail
/// particles from fingertips.
///
/// The pair scan is O(n²) over at most 42 points (two hands). That is
/// deliberate: at this point count a spatial index costs more than it
/// saves. Revisit only if landmark density grows by an order of magnitude.
pub fn draw_web<R: Rng>(
    state: &SessionState,
    colors: &ColorConfig,
    physics: &PhysicsConfig,
    pool: &mut ParticlePool,
    surface: &mut Surface,
    rng: &mut R,
) {
    // Flatten all hands into one fixed-size scratch array.
    let mut scratch = [ScreenPoint::default(); MAX_HANDS * LANDMARKS_PER_HAND];
    let mut count = 0;
    for hand in state.hands() {
        for point in hand.points() {
            scratch[count] = *point;
            count += 1;
        }
    }
    let points = &scratch[..count];

    let edge_color = if state.mode() == SessionMode::Fusion {
        colors.warning
    } else {
        colors.primary
    };
    let max_dist = physics.web_density * state.width();
    let unstable = state.fusion_intensity() > EDGE_JITTER_INTENSITY;

    for (i, p1) in points.iter().enumerate() {
        let depth = p1.depth_scale();

        // Node point, sized and faded by depth.
        surface.disc(
            p1.pos,
            2.0 * depth,
            colors.core.with_alpha(0.7 * depth),
        );

        // Trail particles from fingertip-class landmarks.
        if FINGERTIP_LANDMARKS.contains(&(i % LANDMARKS_PER_HAND))
            && rng.gen::<f32>() < FINGERTIP_SPAWN_PROBABILITY
        {
            pool.emit(p1.pos, ParticleKind::Normal, TRAIL_PARTICLE_SPEED, rng);
        }

        for p2 in &points[i + 1..] {
            let dist = p1.pos.distance(p2.pos);
            if dist >= max_dist {
                continue;
            }

            // Opacity scales with proximity, with a dim floor for the
            // longest edges.
            let alpha = (1.0 - dist / max_dist).clamp(MIN_EDGE_ALPHA, 1.0);
            let color = edge_color.with_alpha(alpha);
            let width = 1.0 * depth;

            // Close edges get a full-strength glow underlay.
            let glow = (dist < max_dist * 0.5).then_some(Glow {
                blur: EDGE_GLOW_BLUR,
                color: edge_color,
            });

            if unstable {
                // Electric link: kink the edge through a jittered midpoint.
                let mid = p1.pos.midpoint(p2.pos);
                let jittered = Vec2::new(
                    mid.x + (rng.gen::<f32>() - 0.5) * EDGE_JITTER_MAGNITUDE,
                    mid.y + (rng.gen::<f32>() - 0.5) * EDGE_JITTER_MAGNITUDE,
                );
                surface.polyline(vec![p1.pos, jittered, p2.pos], width, color, glow);
            } else {
                surface.line(p1.pos, p2.pos, width, color, glow);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DrawCommand;
    use synapse_core::config::PhysicsConfig;
    use synapse_core::gesture::GestureClassifier;
    use synapse_core::hand::{DetectorFrame, Landmark, INDEX_FINGERTIP};
    use synapse_core::rng::seeded_rng;
    use synapse_core::SessionState;

    const W: f32 = 1000.0;
    const H: f32 = 1000.0;

    fn hand_at(x: f32, y: f32) -> Vec<Landmark> {
        let mut landmarks = vec![Landmark::new(x, y, 0.0); LANDMARKS_PER_HAND];
        landmarks[INDEX_FINGERTIP] = Landmark::new(x, y, 0.0);
        landmarks
    }

    fn tracked_state(frame: &DetectorFrame) -> (SessionState, ParticlePool) {
        let physics = PhysicsConfig::default();
        let mut state = SessionState::new(W, H);
        let mut pool = ParticlePool::new(250, physics);
        let mut rng = seeded_rng(0);
        GestureClassifier::new(physics).classify(frame, &mut state, &mut pool, &mut rng);
        pool.clear();
        (state, pool)
    }

    fn count_discs(surface: &Surface) -> usize {
        surface
            .commands()
            .iter()
            .filter(|c| matches!(c.command, DrawCommand::Disc { .. }))
            .count()
    }

    fn count_edges(surface: &Surface) -> usize {
        surface
            .commands()
            .iter()
            .filter(|c| {
                matches!(
                    c.command,
                    DrawCommand::Line { .. } | DrawCommand::Polyline { .. }
                )
            })
            .count()
    }

    #[test]
    fn test_every_point_gets_a_node_disc() {
        let frame = DetectorFrame {
            hands: vec![hand_at(0.2, 0.2), hand_at(0.8, 0.8)],
        };
        let (state, mut pool) = tracked_state(&frame);
        let mut surface = Surface::new();
        let mut rng = seeded_rng(1);

        draw_web(
            &state,
            &ColorConfig::default(),
            &PhysicsConfig::default(),
            &mut pool,
            &mut surface,
            &mut rng,
        );

        assert_eq!(count_discs(&surface), 2 * LANDMARKS_PER_HAND);
    }

    #[test]
    fn test_coincident_cluster_is_fully_connected() {
        // One hand, all 21 points at the same spot: 21*20/2 edges.
        let frame = DetectorFrame {
            hands: vec![hand_at(0.5, 0.5)],
        };
        let (state, mut pool) = tracked_state(&frame);
        let mut surface = Surface::new();
        let mut rng = seeded_rng(1);

        draw_web(
            &state,
            &ColorConfig::default(),
            &PhysicsConfig::default(),
            &mut pool,
            &mut surface,
            &mut rng,
        );

        assert_eq!(count_edges(&surface), 21 * 20 / 2);
    }

    #[test]
    fn test_distant_hands_have_no_cross_edges() {
        // Hands 600px apart, threshold 0.18 * 1000 = 180px. Each cluster is
        // internally connected but there are no cross-hand edges.
        let frame = DetectorFrame {
            hands: vec![hand_at(0.2, 0.5), hand_at(0.8, 0.5)],
        };
        let (state, mut pool) = tracked_state(&frame);
        let mut surface = Surface::new();
        let mut rng = seeded_rng(1);

        draw_web(
            &state,
            &ColorConfig::default(),
            &PhysicsConfig::default(),
            &mut pool,
            &mut surface,
            &mut rng,
        );

        assert_eq!(count_edges(&surface), 2 * (21 * 20 / 2));
    }

    #[test]
    fn test_calm_edges_are_straight_lines() {
        let frame = DetectorFrame {
            hands: vec![hand_at(0.5, 0.5)],
        };
        let (state, mut pool) = tracked_state(&frame);
        assert!(state.fusion_intensity() <= EDGE_JITTER_INTENSITY);

        let mut surface = Surface::new();
        let mut rng = seeded_rng(1);
        draw_web(
            &state,
            &ColorConfig::default(),
            &PhysicsConfig::default(),
            &mut pool,
            &mut surface,
            &mut rng,
        );

        assert!(surface
            .commands()
            .iter()
            .all(|c| !matches!(c.command, DrawCommand::Polyline { .. })));
    }

    #[test]
    fn test_edge_alpha_has_dim_floor_and_full_ceiling() {
        let frame = DetectorFrame {
            hands: vec![hand_at(0.5, 0.5)],
        };
        let (state, mut pool) = tracked_state(&frame);
        let mut surface = Surface::new();
        let mut rng = seeded_rng(1);

        draw_web(
            &state,
            &ColorConfig::default(),
            &PhysicsConfig::default(),
            &mut pool,
            &mut surface,
            &mut rng,
        );

        for recorded in surface.commands() {
            if let DrawCommand::Line { color, .. } = &recorded.command {
                assert!(color.a >= MIN_EDGE_ALPHA && color.a <= 1.0);
            }
        }
    }

    #[test]
    fn test_fingertips_emit_trail_particles() {
        let frame = DetectorFrame {
            hands: vec![hand_at(0.5, 0.5)],
        };
        let (state, mut pool) = tracked_state(&frame);
        let mut surface = Surface::new();
        // Zero-output rng: the spawn roll always lands under the
        // probability, so all 5 fingertips of the hand emit.
        let mut rng = rand::rngs::mock::StepRng::new(0, 0);

        draw_web(
            &state,
            &ColorConfig::default(),
            &PhysicsConfig::default(),
            &mut pool,
            &mut surface,
            &mut rng,
        );

        assert_eq!(pool.active_count(), FINGERTIP_LANDMARKS.len());
        assert!(pool
            .live()
            .iter()
            .all(|s| s.kind() == ParticleKind::Normal));
    }
}
