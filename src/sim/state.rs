//! Game state and core simulation types
//!
//! All state that a run needs to continue deterministically lives here.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::lane::{Band, lane_to_band};
use super::spawner::Spawner;
use crate::tuning::{Tuning, TuningError};

/// Coarse phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player crashed; nothing moves until reset
    GameOver,
}

/// The player's car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub lane: u32,
    /// Top edge (fixed for the whole run)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Player {
    /// Player parked in the centre lane
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            lane: tuning.centre_lane(),
            y: tuning.player_y(),
            width: tuning.player_width,
            height: tuning.player_height,
        }
    }

    /// Move one lane left. Returns false at the left edge.
    pub fn move_left(&mut self) -> bool {
        if self.lane == 0 {
            return false;
        }
        self.lane -= 1;
        true
    }

    /// Move one lane right. Returns false at the right edge.
    pub fn move_right(&mut self, lane_count: u32) -> bool {
        if self.lane + 1 >= lane_count {
            return false;
        }
        self.lane += 1;
        true
    }

    pub fn band(&self, tuning: &Tuning) -> Band {
        lane_to_band(tuning, self.lane, self.width)
    }

    /// Bounding box in field coordinates
    pub fn rect(&self, tuning: &Tuning) -> Rect {
        let band = self.band(tuning);
        Rect::new(band.x, self.y, band.width, self.height)
    }
}

/// An oncoming car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub lane: u32,
    /// Top edge; grows by the current speed every tick
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    /// A fresh obstacle at the spawn line
    pub fn spawned(id: u32, lane: u32, tuning: &Tuning) -> Self {
        Self {
            id,
            lane,
            y: tuning.spawn_y,
            width: tuning.obstacle_width,
            height: tuning.obstacle_height,
        }
    }

    /// Bounding box in field coordinates
    pub fn rect(&self, tuning: &Tuning) -> Rect {
        let band = lane_to_band(tuning, self.lane, self.width);
        Rect::new(band.x, self.y, band.width, self.height)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance constants, fixed for the lifetime of the state
    pub tuning: Tuning,
    /// Lane picker for spawns; survives resets so each run differs
    pub(crate) rng: Pcg32,
    /// Obstacles that have left the track
    pub score: u64,
    /// Scroll speed (pixels per tick)
    pub speed: f32,
    /// Ticks simulated since the last reset
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: Player,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub spawner: Spawner,
    /// Next obstacle ID
    next_id: u32,
}

impl GameState {
    /// Create a new run with default tuning
    pub fn new(seed: u64) -> Self {
        Self::from_valid(seed, Tuning::default())
    }

    /// Create a new run with the given tuning, rejecting layouts that can't be played
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::from_valid(seed, tuning))
    }

    fn from_valid(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            speed: tuning.initial_speed,
            time_ticks: 0,
            phase: GamePhase::Running,
            player: Player::new(&tuning),
            obstacles: Vec::new(),
            spawner: Spawner::default(),
            next_id: 1,
            tuning,
        }
    }

    /// Start over: fresh score, speed, road and centred player.
    ///
    /// Safe to call in any phase. While running it acts as a forced restart.
    pub fn reset(&mut self) {
        if self.phase == GamePhase::Running {
            log::info!("Forced restart at score {}", self.score);
        } else {
            log::info!("Restarting after game over (final score {})", self.score);
        }
        self.score = 0;
        self.speed = self.tuning.initial_speed;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
        self.player = Player::new(&self.tuning);
        self.obstacles.clear();
        self.spawner = Spawner::default();
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Allocate a new obstacle ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Check the state invariants (debug builds only)
    pub(crate) fn debug_check(&self) {
        debug_assert!(
            self.player.lane < self.tuning.lane_count,
            "player lane {} out of range",
            self.player.lane
        );
        debug_assert!(
            self.speed >= self.tuning.initial_speed,
            "speed {} fell below initial speed",
            self.speed
        );
        debug_assert!(
            self.obstacles.iter().all(|o| o.y <= self.tuning.exit_y()),
            "obstacle left on the road past the exit"
        );
        debug_assert!(
            self.obstacles.windows(2).all(|w| w[0].id < w[1].id),
            "obstacles out of spawn order"
        );
    }
}
