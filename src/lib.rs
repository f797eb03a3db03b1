//! Lane Dodge - a lane-based arcade dodging game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, game state)
//! - `tuning`: Data-driven game balance

pub mod sim;
pub mod tuning;

pub use sim::{GamePhase, GameState, TickInput, TickResult, tick};
pub use tuning::{Tuning, TuningError};

/// Default game balance, matching the classic three-lane road
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Road layout
    pub const TRACK_WIDTH: f32 = 260.0;
    pub const LANE_COUNT: u32 = 3;

    /// Player car - sits a fixed distance above the bottom edge
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 70.0;
    pub const PLAYER_BOTTOM_OFFSET: f32 = 100.0;

    /// Oncoming cars
    pub const OBSTACLE_WIDTH: f32 = 40.0;
    pub const OBSTACLE_HEIGHT: f32 = 70.0;
    /// Spawn height, above the visible track
    pub const SPAWN_Y: f32 = -80.0;
    /// Frames between spawns
    pub const SPAWN_INTERVAL: u32 = 60;

    /// Scroll speed (pixels per frame)
    pub const INITIAL_SPEED: f32 = 4.0;
    pub const SPEED_INCREMENT: f32 = 0.5;
    /// Every this many points the road speeds up
    pub const SCORE_MILESTONE: u64 = 5;
}
