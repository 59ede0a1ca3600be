//! Drag gesture to ring position mapping
//!
//! Pure functions: a 2D drag delta in screen points becomes a 3D offset in
//! anchor space. Horizontal drag maps to x, vertical drag to y with screen
//! coordinates flipped (screen y grows downward, world y grows upward).
//! The gesture never produces a z component; the wire's z wiggle stays
//! within the ring's inner radius.

use glam::{Vec2, Vec3};

use super::config::GameConfig;

/// Scale a raw drag delta into a 3D position offset.
pub fn drag_offset(delta: Vec2, sensitivity: f32) -> Vec3 {
    Vec3::new(delta.x * sensitivity, -delta.y * sensitivity, 0.0)
}

/// Apply a drag delta to the current ring position, clamped to the play
/// volume. The result is what gets handed to `GameSession::move_ring`.
pub fn apply_drag(current: Vec3, delta: Vec2, config: &GameConfig) -> Vec3 {
    config
        .bounds
        .clamp(current + drag_offset(delta, config.sensitivity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    #[test]
    fn test_offset_scales_and_inverts_y() {
        let offset = drag_offset(Vec2::new(100.0, 50.0), DRAG_SENSITIVITY);
        assert!((offset.x - 0.03).abs() < 1e-6);
        assert!((offset.y + 0.015).abs() < 1e-6);
        assert_eq!(offset.z, 0.0);
    }

    #[test]
    fn test_zero_delta_keeps_position() {
        let config = GameConfig::default();
        let p = Vec3::new(0.0, 0.03, 0.0);
        assert_eq!(apply_drag(p, Vec2::ZERO, &config), p);
    }

    #[test]
    fn test_rightward_drag_moves_toward_goal() {
        let config = GameConfig::default();
        let p = apply_drag(config.start_anchor, Vec2::new(200.0, 0.0), &config);
        assert!(p.x > config.start_anchor.x);
        assert_eq!(p.y, config.start_anchor.y);
    }

    proptest! {
        /// Any drag sequence keeps the ring inside the play volume.
        #[test]
        fn prop_drag_never_escapes_bounds(
            deltas in prop::collection::vec((-2000.0f32..2000.0, -2000.0f32..2000.0), 0..64)
        ) {
            let config = GameConfig::default();
            let mut pos = config.start_anchor;
            for (dx, dy) in deltas {
                pos = apply_drag(pos, Vec2::new(dx, dy), &config);
                prop_assert!(config.bounds.contains(pos));
            }
        }

        /// Mapping is pure: same inputs, same output.
        #[test]
        fn prop_mapping_is_pure(dx in -500.0f32..500.0, dy in -500.0f32..500.0) {
            let config = GameConfig::default();
            let p = Vec3::new(0.01, 0.02, 0.0);
            let delta = Vec2::new(dx, dy);
            prop_assert_eq!(apply_drag(p, delta, &config), apply_drag(p, delta, &config));
        }
    }
}
