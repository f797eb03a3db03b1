//! Time-gated obstacle spawning
//!
//! A frame counter emits one obstacle every `spawn_interval` ticks in a lane
//! chosen by a [`LaneSource`].

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Supplies the lane for each new obstacle
pub trait LaneSource {
    /// Pick a lane in `[0, lane_count)`
    fn next_lane(&mut self, lane_count: u32) -> u32;
}

impl LaneSource for Pcg32 {
    fn next_lane(&mut self, lane_count: u32) -> u32 {
        if lane_count <= 1 {
            return 0;
        }
        self.random_range(0..lane_count)
    }
}

/// Replays a fixed lane pattern, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedLanes {
    lanes: Vec<u32>,
    cursor: usize,
}

impl ScriptedLanes {
    /// Returns `None` for an empty pattern
    pub fn new(lanes: impl Into<Vec<u32>>) -> Option<Self> {
        let lanes = lanes.into();
        if lanes.is_empty() {
            return None;
        }
        Some(Self { lanes, cursor: 0 })
    }

    /// Always spawn in the same lane
    pub fn constant(lane: u32) -> Self {
        Self {
            lanes: vec![lane],
            cursor: 0,
        }
    }
}

impl LaneSource for ScriptedLanes {
    /// Scripted lanes past the right edge are clamped onto the road
    fn next_lane(&mut self, lane_count: u32) -> u32 {
        let lane = self.lanes[self.cursor % self.lanes.len()];
        self.cursor += 1;
        lane.min(lane_count.saturating_sub(1))
    }
}

/// Spawn timer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawner {
    timer: u32,
}

impl Spawner {
    /// Frames since the last spawn
    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// Advance one frame; returns the new obstacle's lane when it's time to spawn.
    ///
    /// The caller builds the obstacle so it can assign the ID (see [`Obstacle::spawned`](super::state::Obstacle::spawned)).
    pub fn tick<L: LaneSource + ?Sized>(&mut self, tuning: &Tuning, lanes: &mut L) -> Option<u32> {
        self.timer += 1;
        if self.timer < tuning.spawn_interval {
            return None;
        }
        self.timer = 0;
        let lane = lanes.next_lane(tuning.lane_count);
        debug_assert!(lane < tuning.lane_count, "lane source returned {lane}");
        Some(lane)
    }
}
