//! Abstract scene-builder capability
//!
//! The 3D engine (meshes, materials, collision shapes, anchoring) is a
//! black box to this crate. The render layer implements `SceneBuilder`;
//! the core hands it pure placement data and never touches the engine.

use glam::Vec3;

use crate::consts::{RING_INNER_RADIUS, RING_OUTER_RADIUS};
use crate::sim::wire::{WirePath, WireSegment};

/// Render-layer hooks for building and updating the course scene.
pub trait SceneBuilder {
    /// One straight wire cylinder, with its visual radius and the fatter
    /// collision shell radius.
    fn add_wire_segment(&mut self, segment: WireSegment, radius: f32, collision_radius: f32);

    /// An anchor post under a wire end.
    fn add_post(&mut self, position: Vec3);

    /// The player's ring torus.
    fn add_ring(&mut self, position: Vec3, outer_radius: f32, inner_radius: f32);

    /// Move the ring entity. Called each render tick with the current
    /// session position.
    fn set_ring_position(&mut self, position: Vec3);
}

/// Build the whole course into a scene: every wire segment, both posts and
/// the ring at its start anchor.
pub fn install_course<B: SceneBuilder + ?Sized>(builder: &mut B, path: &WirePath, ring_start: Vec3) {
    for segment in path.segments() {
        builder.add_wire_segment(segment, path.wire_radius(), path.collision_radius());
    }
    for post in path.post_positions() {
        builder.add_post(post);
    }
    builder.add_ring(ring_start, RING_OUTER_RADIUS, RING_INNER_RADIUS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingScene {
        segments: usize,
        posts: usize,
        ring: Option<Vec3>,
    }

    impl SceneBuilder for CountingScene {
        fn add_wire_segment(&mut self, _segment: WireSegment, radius: f32, collision_radius: f32) {
            assert!(collision_radius > radius);
            self.segments += 1;
        }

        fn add_post(&mut self, _position: Vec3) {
            self.posts += 1;
        }

        fn add_ring(&mut self, position: Vec3, outer: f32, inner: f32) {
            assert!(outer > inner);
            self.ring = Some(position);
        }

        fn set_ring_position(&mut self, position: Vec3) {
            self.ring = Some(position);
        }
    }

    #[test]
    fn test_install_default_course() {
        let path = WirePath::default_course();
        let start = Vec3::from_array(crate::consts::RING_START);
        let mut scene = CountingScene::default();
        install_course(&mut scene, &path, start);
        assert_eq!(scene.segments, 6);
        assert_eq!(scene.posts, 2);
        assert_eq!(scene.ring, Some(start));
    }
}
