//! Buzz Wire entry point
//!
//! Headless demo: builds the stock course, runs the game loop on its own
//! thread and plays a scripted drag across the wire, grazing it twice on
//! the way to the goal. Real hosts wire the same handles into their AR
//! view instead of a script.

use std::thread;
use std::time::Duration;

use glam::{Vec2, Vec3};

use buzzwire::haptics::LogHaptics;
use buzzwire::hud::{Banner, HudModel};
use buzzwire::scene::{SceneBuilder, install_course};
use buzzwire::sim::{GameConfig, WirePath, WireSegment};
use buzzwire::GameRuntime;

/// Scene builder that narrates entity creation instead of rendering.
struct LogScene;

impl SceneBuilder for LogScene {
    fn add_wire_segment(&mut self, segment: WireSegment, radius: f32, collision_radius: f32) {
        log::info!(
            "wire segment at {:?}, length {:.3}, r={radius} (collision r={collision_radius})",
            segment.center(),
            segment.length(),
        );
    }

    fn add_post(&mut self, position: Vec3) {
        log::info!("post at {position:?}");
    }

    fn add_ring(&mut self, position: Vec3, outer_radius: f32, inner_radius: f32) {
        log::info!("ring at {position:?}, torus {outer_radius}/{inner_radius}");
    }

    fn set_ring_position(&mut self, position: Vec3) {
        log::trace!("ring -> {position:?}");
    }
}

fn main() {
    env_logger::init();
    log::info!("Buzz Wire starting...");

    let course = WirePath::default_course();
    let config = GameConfig::for_course(&course);
    let mut runtime = GameRuntime::new(config);
    runtime.set_haptics(Box::new(LogHaptics));

    let handle = runtime.handle();
    let hub = runtime.collision_hub();
    let view = runtime.view();

    let mut scene = LogScene;
    install_course(&mut scene, &course, config.start_anchor);

    let game_thread = thread::spawn(move || runtime.run());

    handle.surface_detected();
    handle.start();

    // Scripted run: sweep rightward, dip on every 7th sample, buzz twice
    for step in 0..60 {
        handle.drag(Vec2::new(30.0, if step % 7 == 0 { -20.0 } else { 8.0 }));
        if step == 10 || step == 24 {
            hub.notify_began();
        }
        thread::sleep(Duration::from_millis(50));

        let snapshot = view.snapshot();
        scene.set_ring_position(snapshot.ring_position);
        if step % 8 == 0 {
            let hud = HudModel::from_snapshot(&snapshot);
            println!("{}  {}", hud.timer, hud.strikes);
        }
        if snapshot.phase.is_over() {
            break;
        }
    }

    let snapshot = view.snapshot();
    match HudModel::from_snapshot(&snapshot).banner {
        Banner::Victory { time, buzzes } => println!("Victory!  {time}  {buzzes}"),
        Banner::GameOver { reason, time } => println!("Game over: {reason}  {time}"),
        _ => println!("Run did not finish"),
    }
    match serde_json::to_string_pretty(&snapshot) {
        Ok(summary) => println!("{summary}"),
        Err(err) => log::warn!("could not serialize summary: {err}"),
    }

    // Success tones are still fading out; give them a beat
    thread::sleep(Duration::from_millis(800));
    handle.shutdown();
    let _ = game_thread.join();
}
