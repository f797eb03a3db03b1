//! Read-only view of a state for renderers
//!
//! Everything a frontend needs to draw one frame, already in field coordinates.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::lane::lane_dividers;
use super::state::{GamePhase, GameState};

/// An obstacle as drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub rect: Rect,
}

/// Everything needed to draw a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub speed: f32,
    pub time_ticks: u64,
    /// Road left edge and width
    pub track_x: f32,
    pub track_width: f32,
    /// Lane divider x positions
    pub dividers: Vec<f32>,
    pub player: Rect,
    pub obstacles: Vec<ObstacleView>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let tuning = &state.tuning;
        Self {
            phase: state.phase,
            score: state.score,
            speed: state.speed,
            time_ticks: state.time_ticks,
            track_x: tuning.track_offset(),
            track_width: tuning.track_width,
            dividers: lane_dividers(tuning),
            player: state.player.rect(tuning),
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    rect: o.rect(tuning),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawner::ScriptedLanes;
    use crate::sim::tick::{TickInput, tick_with};

    #[test]
    fn test_capture() {
        let mut state = GameState::new(5);
        let mut lanes = ScriptedLanes::constant(2);
        let mut input = TickInput::default();
        for _ in 0..60 {
            tick_with(&mut state, &mut input, &mut lanes);
        }

        let snap = Snapshot::capture(&state);
        assert_eq!(snap.phase, GamePhase::Running);
        assert_eq!(snap.time_ticks, 60);
        assert_eq!(snap.track_x, 70.0);
        assert_eq!(snap.dividers.len(), 2);
        assert_eq!(snap.player.min.y, 500.0);
        assert_eq!(snap.obstacles.len(), 1);
        assert_eq!(snap.obstacles[0].rect.min.y, -76.0);
        // Rightmost lane, right of the player
        assert!(snap.obstacles[0].rect.min.x > snap.player.max().x);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = Snapshot::capture(&GameState::new(5));
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["phase"], "Running");
        assert_eq!(json["score"], 0);
    }
}
