//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG or an injected lane source only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod events;
pub mod lane;
pub mod motion;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Rect, check_collision};
pub use events::GameEvent;
pub use lane::{Band, lane_dividers, lane_to_band};
pub use snapshot::{ObstacleView, Snapshot};
pub use spawner::{LaneSource, ScriptedLanes, Spawner};
pub use state::{GamePhase, GameState, Obstacle, Player};
pub use tick::{Direction, TickInput, TickResult, tick, tick_with};
