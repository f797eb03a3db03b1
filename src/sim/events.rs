//! Events emitted by the simulation for UI, audio and logging hooks

use serde::{Deserialize, Serialize};

/// Something that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player switched lanes
    LaneChanged { from: u32, to: u32 },
    /// A new obstacle entered above the track
    ObstacleSpawned { id: u32, lane: u32 },
    /// An obstacle left the bottom of the track
    ObstacleCleared { id: u32 },
    /// Score changed (for the score display)
    ScoreChanged { score: u64 },
    /// Score milestone reached
    SpeedIncreased { speed: f32 },
    /// Player hit an obstacle
    Collision { obstacle_id: u32 },
    /// Run ended
    GameOver { score: u64 },
}
