//! Deterministic gameplay module
//!
//! All game logic lives here. This module must stay pure:
//! - No timers, threads or channels (that is `runtime`'s job)
//! - No rendering or platform dependencies
//! - Every mutation goes through `GameSession`'s own methods

pub mod config;
pub mod input;
pub mod session;
pub mod wire;

pub use config::{GameConfig, PlayBounds};
pub use input::{apply_drag, drag_offset};
pub use session::{GameEvent, GamePhase, GameSession};
pub use wire::{WirePath, WireSegment};
