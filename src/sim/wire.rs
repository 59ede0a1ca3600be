//! Wire course geometry
//!
//! A course is an ordered run of 3D waypoints. The path itself is immutable
//! once built; the render layer owns the entities it creates from it, the
//! session only reads the endpoint for the win threshold.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Ordered waypoints defining the obstacle wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WirePath {
    waypoints: Vec<Vec3>,
}

/// Placement data for one straight wire segment, enough for a renderer to
/// drop in a cylinder without re-deriving any geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireSegment {
    pub start: Vec3,
    pub end: Vec3,
}

impl WireSegment {
    /// Cylinder center.
    pub fn center(&self) -> Vec3 {
        (self.start + self.end) / 2.0
    }

    /// Cylinder height.
    pub fn length(&self) -> f32 {
        (self.end - self.start).length()
    }

    /// Unit vector from start to end.
    pub fn direction(&self) -> Vec3 {
        (self.end - self.start).normalize()
    }
}

impl WirePath {
    /// Build a path from waypoints. Returns `None` for fewer than two
    /// points; a wire needs at least one segment.
    pub fn new(waypoints: Vec<Vec3>) -> Option<Self> {
        if waypoints.len() < 2 {
            return None;
        }
        Some(Self { waypoints })
    }

    /// The stock course: a gentle end-to-end zigzag across the tabletop.
    pub fn default_course() -> Self {
        Self {
            waypoints: vec![
                Vec3::new(-0.15, 0.01, 0.0),
                Vec3::new(-0.1, 0.03, 0.02),
                Vec3::new(-0.05, 0.015, -0.015),
                Vec3::new(0.0, 0.035, 0.01),
                Vec3::new(0.05, 0.02, -0.01),
                Vec3::new(0.1, 0.04, 0.015),
                Vec3::new(0.15, 0.01, 0.0),
            ],
        }
    }

    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }

    /// First waypoint (the start post).
    pub fn start(&self) -> Vec3 {
        self.waypoints[0]
    }

    /// Final waypoint (the goal post); its x anchors the win threshold.
    pub fn end(&self) -> Vec3 {
        self.waypoints[self.waypoints.len() - 1]
    }

    /// Straight segments between consecutive waypoints.
    pub fn segments(&self) -> impl Iterator<Item = WireSegment> + '_ {
        self.waypoints
            .windows(2)
            .map(|w| WireSegment { start: w[0], end: w[1] })
    }

    /// Visual wire radius.
    pub fn wire_radius(&self) -> f32 {
        WIRE_RADIUS
    }

    /// Collision shell radius. Fatter than the visual wire so grazing the
    /// wire registers before the meshes visibly intersect.
    pub fn collision_radius(&self) -> f32 {
        WIRE_COLLISION_RADIUS
    }

    /// Anchor post positions under both ends of the wire.
    pub fn post_positions(&self) -> [Vec3; 2] {
        let drop = Vec3::new(0.0, -0.035, 0.0);
        [self.start() + drop, self.end() + drop]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_degenerate_paths() {
        assert!(WirePath::new(vec![]).is_none());
        assert!(WirePath::new(vec![Vec3::ZERO]).is_none());
        assert!(WirePath::new(vec![Vec3::ZERO, Vec3::X]).is_some());
    }

    #[test]
    fn test_default_course_shape() {
        let path = WirePath::default_course();
        assert_eq!(path.waypoints().len(), 7);
        assert_eq!(path.segments().count(), 6);
        assert_eq!(path.start().x, -0.15);
        assert_eq!(path.end().x, 0.15);
    }

    #[test]
    fn test_segment_placement() {
        let seg = WireSegment {
            start: Vec3::new(-0.15, 0.01, 0.0),
            end: Vec3::new(-0.1, 0.03, 0.02),
        };
        assert!((seg.center() - Vec3::new(-0.125, 0.02, 0.01)).length() < 1e-6);
        let expected_len = (0.05f32 * 0.05 + 0.02 * 0.02 + 0.02 * 0.02).sqrt();
        assert!((seg.length() - expected_len).abs() < 1e-6);
        assert!((seg.direction().length() - 1.0).abs() < 1e-6);
        assert!(seg.direction().x > 0.0);
    }

    #[test]
    fn test_posts_sit_below_the_wire_ends() {
        let path = WirePath::default_course();
        let [start_post, end_post] = path.post_positions();
        assert!(start_post.y < path.start().y);
        assert_eq!(start_post.x, path.start().x);
        assert_eq!(end_post.x, path.end().x);
    }
}
