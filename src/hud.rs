//! Overlay view-model
//!
//! Text content for the host UI: the score strip, the per-phase banner and
//! the coaching prompt while plane detection is still searching. Pure
//! formatting over a runtime snapshot; no layout or styling here.

use crate::runtime::Snapshot;
use crate::sim::GamePhase;

/// Banner shown in the center of the screen, varying by phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    /// Idle: title card with the start call-to-action
    Title { headline: &'static str, detail: &'static str },
    /// Running: movement hint
    Hint(&'static str),
    /// Won: celebration with the final time
    Victory { time: String, buzzes: String },
    /// Lost: failure notice with the final time
    GameOver { reason: &'static str, time: String },
}

/// Everything the overlay renders for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudModel {
    /// "Time: 12.3s"
    pub timer: String,
    /// "Buzzes: 2/3"
    pub strikes: String,
    pub banner: Banner,
    /// Plane-detection coaching, shown over everything until a surface is
    /// found
    pub coaching: Option<&'static str>,
}

impl HudModel {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let time = format!("{:.1}s", snapshot.elapsed_secs);
        let banner = match snapshot.phase {
            GamePhase::Idle => Banner::Title {
                headline: "BuzzWire",
                detail: "Guide the ring along the wire without touching it!",
            },
            GamePhase::Running => Banner::Hint("Drag to move the ring"),
            GamePhase::Won => Banner::Victory {
                time: format!("Time: {time}"),
                buzzes: format!("Buzzes: {}", snapshot.strikes),
            },
            GamePhase::Lost => Banner::GameOver {
                reason: "Too many buzzes!",
                time: format!("Time: {time}"),
            },
        };
        Self {
            timer: format!("Time: {time}"),
            strikes: format!("Buzzes: {}/{}", snapshot.strikes, snapshot.strike_limit),
            banner,
            coaching: (!snapshot.surface_ready)
                .then_some("Point your device at a flat surface like a table or floor"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn snapshot(phase: GamePhase) -> Snapshot {
        Snapshot {
            phase,
            elapsed_secs: 12.34,
            strikes: 2,
            strike_limit: 3,
            ring_position: Vec3::ZERO,
            surface_ready: true,
        }
    }

    #[test]
    fn test_score_strip_formatting() {
        let hud = HudModel::from_snapshot(&snapshot(GamePhase::Running));
        assert_eq!(hud.timer, "Time: 12.3s");
        assert_eq!(hud.strikes, "Buzzes: 2/3");
        assert_eq!(hud.banner, Banner::Hint("Drag to move the ring"));
        assert!(hud.coaching.is_none());
    }

    #[test]
    fn test_idle_shows_title_card() {
        let hud = HudModel::from_snapshot(&snapshot(GamePhase::Idle));
        assert!(matches!(hud.banner, Banner::Title { headline: "BuzzWire", .. }));
    }

    #[test]
    fn test_win_and_loss_banners_carry_the_time() {
        let won = HudModel::from_snapshot(&snapshot(GamePhase::Won));
        assert_eq!(
            won.banner,
            Banner::Victory { time: "Time: 12.3s".into(), buzzes: "Buzzes: 2".into() }
        );

        let lost = HudModel::from_snapshot(&snapshot(GamePhase::Lost));
        assert!(matches!(lost.banner, Banner::GameOver { reason: "Too many buzzes!", .. }));
    }

    #[test]
    fn test_coaching_prompt_until_surface_found() {
        let mut s = snapshot(GamePhase::Idle);
        s.surface_ready = false;
        let hud = HudModel::from_snapshot(&s);
        assert!(hud.coaching.is_some());
    }
}
