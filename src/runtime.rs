//! Serialized game runtime
//!
//! Collision notifications arrive from the AR engine's callback thread,
//! drag samples from the input thread, ticks from the timer thread. All of
//! them funnel into one command channel consumed here, so the session is
//! only ever mutated from a single logical thread.
//!
//! The tick timer and the collision subscription are scoped resources:
//! installed on `start`, released on any exit from `Running` and before a
//! re-entrant `start` installs replacements. Restarting never stacks a
//! second timer or subscription.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, unbounded};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::audio::{AudioManager, SoundCue};
use crate::haptics::{HapticCue, HapticSink, NullHaptics};
use crate::sim::{GameConfig, GameEvent, GamePhase, GameSession, apply_drag};

/// A single serialized mutation of the game state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Player pressed start / play again
    Start,
    /// Drag gesture delta in screen points
    Drag(Vec2),
    /// Collision-began notification involving the ring
    Collision,
    /// Elapsed-time timer fired
    Tick,
    /// Plane detection found a usable surface
    SurfaceDetected,
    /// Stop the runtime loop
    Shutdown,
}

/// Cloneable producer side of the command channel, handed to the UI and
/// input layers.
#[derive(Debug, Clone)]
pub struct RuntimeHandle {
    tx: Sender<Command>,
}

impl RuntimeHandle {
    pub fn start(&self) {
        let _ = self.tx.send(Command::Start);
    }

    pub fn drag(&self, delta: Vec2) {
        let _ = self.tx.send(Command::Drag(delta));
    }

    pub fn surface_detected(&self) {
        let _ = self.tx.send(Command::SurfaceDetected);
    }

    pub fn shutdown(&self) {
        let _ = self.tx.send(Command::Shutdown);
    }
}

type SubscriberList = Arc<Mutex<Vec<(u64, Sender<Command>)>>>;

/// Stand-in for the AR engine's collision-began event stream. The engine
/// integration clones the hub and calls [`CollisionHub::notify_began`] from
/// its callback; the runtime subscribes and unsubscribes as games start and
/// end.
#[derive(Debug, Clone, Default)]
pub struct CollisionHub {
    subscribers: SubscriberList,
    next_id: Arc<AtomicU64>,
}

impl CollisionHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command sender; dropping the returned guard deregisters
    /// it.
    pub fn subscribe(&self, tx: Sender<Command>) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers
            .lock()
            .expect("collision hub poisoned")
            .push((id, tx));
        Subscription {
            id,
            subscribers: Arc::clone(&self.subscribers),
        }
    }

    /// A collision involving the ring began.
    pub fn notify_began(&self) {
        let subscribers = self.subscribers.lock().expect("collision hub poisoned");
        for (_, tx) in subscribers.iter() {
            let _ = tx.send(Command::Collision);
        }
    }

    /// Live subscriptions, for leak checks.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().expect("collision hub poisoned").len()
    }
}

/// RAII collision subscription guard.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    subscribers: SubscriberList,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Cancellable elapsed-time timer. The thread wakes every interval and
/// sends `Command::Tick` until cancelled or the runtime is gone.
#[derive(Debug)]
struct Ticker {
    cancel: Arc<AtomicBool>,
}

impl Ticker {
    fn spawn(tx: Sender<Command>, interval: Duration) -> Self {
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);
        // Detached on purpose: the thread exits within one interval of
        // cancellation or of the runtime going away
        let _ = thread::spawn(move || {
            loop {
                thread::sleep(interval);
                if flag.load(Ordering::Relaxed) || tx.send(Command::Tick).is_err() {
                    break;
                }
            }
        });
        Self { cancel }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}

/// Read-only state snapshot published after every command, consumed by the
/// render layer and HUD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub elapsed_secs: f32,
    pub strikes: u32,
    pub strike_limit: u32,
    pub ring_position: Vec3,
    pub surface_ready: bool,
}

/// Cloneable reader for the latest snapshot.
#[derive(Debug, Clone)]
pub struct GameView {
    inner: Arc<Mutex<Snapshot>>,
}

impl GameView {
    pub fn snapshot(&self) -> Snapshot {
        *self.inner.lock().expect("view poisoned")
    }
}

/// Owns the session and processes commands one at a time.
pub struct GameRuntime {
    session: GameSession,
    hub: CollisionHub,
    tx: Sender<Command>,
    rx: Receiver<Command>,
    ticker: Option<Ticker>,
    subscription: Option<Subscription>,
    audio: AudioManager,
    haptics: Box<dyn HapticSink>,
    surface_ready: bool,
    view: Arc<Mutex<Snapshot>>,
}

impl GameRuntime {
    /// Runtime with live audio output.
    pub fn new(config: GameConfig) -> Self {
        Self::with_audio(config, AudioManager::new())
    }

    /// Runtime without any audio device, for tests and headless hosts.
    pub fn headless(config: GameConfig) -> Self {
        Self::with_audio(config, AudioManager::disabled())
    }

    fn with_audio(config: GameConfig, audio: AudioManager) -> Self {
        let (tx, rx) = unbounded();
        let session = GameSession::new(config);
        let view = Arc::new(Mutex::new(Self::snapshot_of(&session, false)));
        Self {
            session,
            hub: CollisionHub::new(),
            tx,
            rx,
            ticker: None,
            subscription: None,
            audio,
            haptics: Box::new(NullHaptics),
            surface_ready: false,
            view,
        }
    }

    /// Replace the haptic sink (defaults to a no-op).
    pub fn set_haptics(&mut self, haptics: Box<dyn HapticSink>) {
        self.haptics = haptics;
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle { tx: self.tx.clone() }
    }

    /// Hub for the AR engine integration to fire collisions into.
    pub fn collision_hub(&self) -> CollisionHub {
        self.hub.clone()
    }

    pub fn view(&self) -> GameView {
        GameView { inner: Arc::clone(&self.view) }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Block processing commands until shutdown. Run this on the one
    /// designated game thread.
    pub fn run(&mut self) {
        loop {
            match self.rx.recv() {
                Ok(Command::Shutdown) | Err(_) => break,
                Ok(command) => self.apply(command),
            }
        }
        self.release_resources();
    }

    /// Drain every pending command without blocking. Returns `false` once
    /// a shutdown was seen. For hosts that pump the runtime from their own
    /// frame loop.
    pub fn pump(&mut self) -> bool {
        while let Ok(command) = self.rx.try_recv() {
            if command == Command::Shutdown {
                self.release_resources();
                return false;
            }
            self.apply(command);
        }
        true
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Start => {
                // Old resources go before replacements are installed
                self.release_resources();
                self.subscription = Some(self.hub.subscribe(self.tx.clone()));
                let interval = self.session.config().tick_interval;
                self.ticker = Some(Ticker::spawn(
                    self.tx.clone(),
                    Duration::from_secs_f32(interval),
                ));
                self.session.start();
            }
            Command::Drag(delta) => {
                let target = apply_drag(self.session.ring_position(), delta, self.session.config());
                self.session.move_ring(target);
            }
            Command::Collision => self.session.record_collision(),
            Command::Tick => self.session.tick_elapsed(),
            Command::SurfaceDetected => {
                if !self.surface_ready {
                    log::info!("surface detected, course anchored");
                }
                self.surface_ready = true;
            }
            Command::Shutdown => unreachable!("handled by run/pump"),
        }

        if self.session.phase().is_over() {
            self.release_resources();
        }
        self.dispatch_events();
        self.publish_view();
    }

    /// Cancel the tick timer and drop the collision subscription.
    fn release_resources(&mut self) {
        self.ticker = None;
        self.subscription = None;
    }

    /// Fire side effects for each transition, exactly once, on the same
    /// step that produced it.
    fn dispatch_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                GameEvent::Started => log::info!("game started"),
                GameEvent::Buzz { strikes } => {
                    log::debug!("buzz {strikes}");
                    self.audio.play(SoundCue::Buzz);
                    self.haptics.trigger(HapticCue::Impact);
                }
                GameEvent::Won { elapsed, strikes } => {
                    log::info!("won in {elapsed:.1}s with {strikes} buzzes");
                    self.audio.play(SoundCue::Success);
                    self.haptics.trigger(HapticCue::Success);
                }
                GameEvent::Lost { elapsed } => {
                    // The fatal buzz already cued; losing adds no tone
                    log::info!("lost after {elapsed:.1}s");
                }
            }
        }
    }

    fn publish_view(&self) {
        let snapshot = Self::snapshot_of(&self.session, self.surface_ready);
        *self.view.lock().expect("view poisoned") = snapshot;
    }

    fn snapshot_of(session: &GameSession, surface_ready: bool) -> Snapshot {
        Snapshot {
            phase: session.phase(),
            elapsed_secs: session.elapsed_secs(),
            strikes: session.strikes(),
            strike_limit: session.config().strike_limit,
            ring_position: session.ring_position(),
            surface_ready,
        }
    }
}
