//! Buzz Wire - guide a ring along a bent wire without touching it
//!
//! Core modules:
//! - `sim`: Game state machine, drag mapping, wire geometry
//! - `runtime`: Serialized command loop, tick timer, collision subscription
//! - `audio`: Procedural tone cues (buzz / success)
//! - `haptics`: Haptic cue seam for the host platform
//! - `scene`: Abstract scene-builder capability for the render layer
//! - `hud`: Overlay view-model (timer, strikes, prompts)
//!
//! The AR/render engine is a collaborator, not a dependency: it feeds
//! collision-began notifications and drag samples in, and reads the ring
//! position back out each render tick.

pub mod audio;
pub mod haptics;
pub mod hud;
pub mod runtime;
pub mod scene;
pub mod sim;

pub use runtime::{CollisionHub, Command, GameRuntime, RuntimeHandle};
pub use sim::{GameConfig, GameEvent, GamePhase, GameSession, PlayBounds, WirePath};

/// Game configuration constants
///
/// Units are meters in the anchor's local space (the wire course sits on a
/// detected tabletop roughly 30 cm across). Variants of the game tune these
/// numbers, never the logic; see [`sim::GameConfig`].
pub mod consts {
    /// Elapsed-time tick interval (seconds)
    pub const TICK_INTERVAL: f32 = 0.1;
    /// Strikes before the game is lost
    pub const STRIKE_LIMIT: u32 = 3;

    /// Drag sensitivity: screen points to meters
    pub const DRAG_SENSITIVITY: f32 = 0.0003;

    /// Play volume bounds per axis
    pub const BOUNDS_X_MIN: f32 = -0.16;
    pub const BOUNDS_X_MAX: f32 = 0.16;
    pub const BOUNDS_Y_MIN: f32 = 0.01;
    pub const BOUNDS_Y_MAX: f32 = 0.05;

    /// Ring start anchor
    pub const RING_START: [f32; 3] = [-0.15, 0.02, 0.0];
    /// Win threshold on the x axis
    pub const GOAL_X: f32 = 0.14;
    /// Gap between the last waypoint and the goal threshold
    pub const GOAL_MARGIN: f32 = 0.01;

    /// Wire geometry (visual radius vs. the fatter collision shell)
    pub const WIRE_RADIUS: f32 = 0.002;
    pub const WIRE_COLLISION_RADIUS: f32 = 0.006;
    /// Ring torus radii
    pub const RING_OUTER_RADIUS: f32 = 0.01;
    pub const RING_INNER_RADIUS: f32 = 0.007;
}
