//! Per-variant gameplay configuration
//!
//! Course variants differ only in numbers (bounds, sensitivity, start
//! anchor, goal threshold), never in rules. Everything tunable is collected
//! here; defaults come from `crate::consts`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::wire::WirePath;

/// Axis-aligned box clamping valid ring positions.
///
/// The z axis is left free by default: the drag gesture never produces a z
/// component, and the course keeps its wiggle within reach of the ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayBounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
    pub z_min: f32,
    pub z_max: f32,
}

impl Default for PlayBounds {
    fn default() -> Self {
        Self {
            x_min: BOUNDS_X_MIN,
            x_max: BOUNDS_X_MAX,
            y_min: BOUNDS_Y_MIN,
            y_max: BOUNDS_Y_MAX,
            z_min: f32::NEG_INFINITY,
            z_max: f32::INFINITY,
        }
    }
}

impl PlayBounds {
    /// Clamp a position per axis into the play volume.
    pub fn clamp(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x.clamp(self.x_min, self.x_max),
            p.y.clamp(self.y_min, self.y_max),
            p.z.clamp(self.z_min, self.z_max),
        )
    }

    /// True if `p` is already inside the volume.
    pub fn contains(&self, p: Vec3) -> bool {
        self.clamp(p) == p
    }
}

/// Complete numeric configuration for one game variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Strikes before the game is lost
    pub strike_limit: u32,
    /// Elapsed-time tick interval (seconds)
    pub tick_interval: f32,
    /// Drag sensitivity (screen points to meters)
    pub sensitivity: f32,
    /// Valid ring positions
    pub bounds: PlayBounds,
    /// Ring position on every start
    pub start_anchor: Vec3,
    /// Ring x at or beyond this wins
    pub goal_x: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            strike_limit: STRIKE_LIMIT,
            tick_interval: TICK_INTERVAL,
            sensitivity: DRAG_SENSITIVITY,
            bounds: PlayBounds::default(),
            start_anchor: Vec3::from_array(RING_START),
            goal_x: GOAL_X,
        }
    }
}

impl GameConfig {
    /// Derive the goal threshold from a course instead of the default
    /// constant: just short of the final waypoint, so the ring wins as it
    /// slides onto the end post.
    pub fn for_course(path: &WirePath) -> Self {
        Self {
            goal_x: path.end().x - GOAL_MARGIN,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside_is_identity() {
        let bounds = PlayBounds::default();
        let p = Vec3::new(0.0, 0.03, 0.0);
        assert_eq!(bounds.clamp(p), p);
        assert!(bounds.contains(p));
    }

    #[test]
    fn test_clamp_each_axis() {
        let bounds = PlayBounds::default();
        let p = bounds.clamp(Vec3::new(1.0, -1.0, 0.0));
        assert_eq!(p.x, BOUNDS_X_MAX);
        assert_eq!(p.y, BOUNDS_Y_MIN);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn test_goal_from_course() {
        let config = GameConfig::for_course(&WirePath::default_course());
        assert!((config.goal_x - 0.14).abs() < 1e-6);
    }
}
