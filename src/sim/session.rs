//! Game session state machine
//!
//! Owns the authoritative phase, elapsed time, strike count and ring
//! position. Nothing outside this type writes those fields; the runtime
//! feeds it calls and drains the cues it emits.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to press start
    Idle,
    /// Ring in play
    Running,
    /// Ring reached the far end
    Won,
    /// Struck the wire too many times
    Lost,
}

impl GamePhase {
    /// Terminal until the next `start`.
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Cue emitted on a state transition, drained exactly once by the session
/// owner. Haptic and audio side effects hang off these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh run began
    Started,
    /// Ring touched the wire
    Buzz { strikes: u32 },
    /// Ring crossed the goal threshold
    Won { elapsed: f32, strikes: u32 },
    /// Strike limit reached
    Lost { elapsed: f32 },
}

/// Authoritative game state for one player session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    config: GameConfig,
    phase: GamePhase,
    elapsed_ticks: u32,
    strikes: u32,
    ring_position: Vec3,
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            phase: GamePhase::Idle,
            elapsed_ticks: 0,
            strikes: 0,
            ring_position: config.start_anchor,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn strikes(&self) -> u32 {
        self.strikes
    }

    /// Elapsed play time in seconds (whole ticks only).
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed_ticks as f32 * self.config.tick_interval
    }

    /// Current ring position, read by the render layer each frame.
    pub fn ring_position(&self) -> Vec3 {
        self.ring_position
    }

    /// Begin (or restart) a run. Valid from any phase; everything resets.
    pub fn start(&mut self) {
        self.phase = GamePhase::Running;
        self.elapsed_ticks = 0;
        self.strikes = 0;
        self.ring_position = self.config.start_anchor;
        self.events.push(GameEvent::Started);
    }

    /// Advance the play clock by one tick. No-op outside `Running`.
    pub fn tick_elapsed(&mut self) {
        if self.phase == GamePhase::Running {
            self.elapsed_ticks += 1;
        }
    }

    /// Record one wire strike. No-op outside `Running`.
    ///
    /// The buzz cue fires on every strike, including the one that ends the
    /// game; hitting the strike limit always loses, even if a win lands on
    /// the same step.
    pub fn record_collision(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.strikes += 1;
        self.events.push(GameEvent::Buzz { strikes: self.strikes });
        if self.strikes >= self.config.strike_limit {
            self.phase = GamePhase::Lost;
            self.events.push(GameEvent::Lost { elapsed: self.elapsed_secs() });
        }
    }

    /// Move the ring to a new position, clamped per axis to the play
    /// volume. No-op outside `Running`. Crossing the goal threshold wins.
    pub fn move_ring(&mut self, position: Vec3) {
        if self.phase != GamePhase::Running {
            return;
        }
        let clamped = self.config.bounds.clamp(position);
        self.ring_position = clamped;
        if clamped.x >= self.config.goal_x {
            self.phase = GamePhase::Won;
            self.events.push(GameEvent::Won {
                elapsed: self.elapsed_secs(),
                strikes: self.strikes,
            });
        }
    }

    /// Take all cues emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
