//! Data-driven game balance
//!
//! Every constant the simulation reads lives in [`Tuning`]. Values are fixed for the
//! lifetime of a [`GameState`](crate::sim::GameState); a reset keeps them.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Game balance constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Number of lanes on the road
    pub lane_count: u32,
    /// Playfield width (pixels)
    pub field_width: f32,
    /// Playfield height; also the exit boundary for obstacles
    pub field_height: f32,
    /// Road width, centred in the field
    pub track_width: f32,

    pub player_width: f32,
    pub player_height: f32,
    /// Distance from the player's top edge to the bottom of the field
    pub player_bottom_offset: f32,

    pub obstacle_width: f32,
    pub obstacle_height: f32,
    /// Vertical position new obstacles start at (negative = above the track)
    pub spawn_y: f32,
    /// Frames between spawns
    pub spawn_interval: u32,

    /// Starting scroll speed (pixels per frame)
    pub initial_speed: f32,
    /// Added to the speed at each score milestone
    pub speed_increment: f32,
    /// Score multiple that triggers a speed-up
    pub score_milestone: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            lane_count: LANE_COUNT,
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            track_width: TRACK_WIDTH,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_bottom_offset: PLAYER_BOTTOM_OFFSET,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            spawn_y: SPAWN_Y,
            spawn_interval: SPAWN_INTERVAL,

            initial_speed: INITIAL_SPEED,
            speed_increment: SPEED_INCREMENT,
            score_milestone: SCORE_MILESTONE,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a JSON tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check that the values describe a playable layout
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if self.lane_count == 0 {
            return invalid("lane_count", "must be at least 1");
        }
        for (field, value) in [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("track_width", self.track_width),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_height", self.obstacle_height),
            ("initial_speed", self.initial_speed),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return invalid(field, "must be a positive number");
            }
        }
        if self.track_width > self.field_width {
            return invalid("track_width", "must fit inside field_width");
        }
        if self.player_width > self.lane_width() {
            return invalid("player_width", "must fit inside a lane");
        }
        if self.obstacle_width > self.lane_width() {
            return invalid("obstacle_width", "must fit inside a lane");
        }
        if !(self.player_bottom_offset >= self.player_height
            && self.player_bottom_offset <= self.field_height)
        {
            return invalid("player_bottom_offset", "player must sit inside the field");
        }
        if !(self.spawn_y.is_finite() && self.spawn_y < 0.0) {
            return invalid("spawn_y", "must be above the track (negative)");
        }
        if self.spawn_interval == 0 {
            return invalid("spawn_interval", "must be at least 1 frame");
        }
        if !(self.speed_increment.is_finite() && self.speed_increment >= 0.0) {
            return invalid("speed_increment", "must not be negative");
        }
        if self.score_milestone == 0 {
            return invalid("score_milestone", "must be at least 1");
        }
        Ok(())
    }

    /// Width of a single lane
    #[inline]
    pub fn lane_width(&self) -> f32 {
        self.track_width / self.lane_count as f32
    }

    /// Left edge of the road
    #[inline]
    pub fn track_offset(&self) -> f32 {
        (self.field_width - self.track_width) / 2.0
    }

    /// Fixed vertical position of the player's top edge
    #[inline]
    pub fn player_y(&self) -> f32 {
        self.field_height - self.player_bottom_offset
    }

    /// Lane the player starts in
    #[inline]
    pub fn centre_lane(&self) -> u32 {
        self.lane_count / 2
    }

    /// Obstacles below this line have left the track
    #[inline]
    pub fn exit_y(&self) -> f32 {
        self.field_height
    }
}
