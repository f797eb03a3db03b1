//! Frame-stepped simulation tick
//!
//! Core game loop that advances simulation deterministically. One call is one frame:
//! intent, then spawning, then motion, then the collision check.

use super::autopilot;
use super::collision::check_collision;
use super::events::GameEvent;
use super::motion;
use super::spawner::LaneSource;
use super::state::{GamePhase, GameState, Obstacle};

/// Lateral move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Input latch for a single tick.
///
/// The driver sets a flag on key press and clears it on release. [`tick`] clears a
/// flag once the move has been applied, so a held key moves the player exactly once
/// per press. A move blocked by the edge of the road leaves the flag set.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Idle/demo mode - the simulation steers itself
    pub autopilot: bool,
}

impl TickInput {
    pub fn press(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left = true,
            Direction::Right => self.move_right = true,
        }
    }

    pub fn release(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left = false,
            Direction::Right => self.move_right = false,
        }
    }
}

/// Result of a tick
#[derive(Debug, Default)]
pub struct TickResult {
    /// Events generated this tick
    pub events: Vec<GameEvent>,
    /// Whether the run ended this tick
    pub game_over: bool,
}

impl TickResult {
    /// Latest score if it changed this tick
    pub fn score_changed(&self) -> Option<u64> {
        self.events.iter().rev().find_map(|e| match e {
            GameEvent::ScoreChanged { score } => Some(*score),
            _ => None,
        })
    }
}

/// Advance the game by one frame, drawing spawn lanes from the state's own RNG
pub fn tick(state: &mut GameState, input: &mut TickInput) -> TickResult {
    let mut rng = state.rng.clone();
    let result = tick_with(state, input, &mut rng);
    state.rng = rng;
    result
}

/// Advance the game by one frame with an explicit lane source
pub fn tick_with<L: LaneSource + ?Sized>(
    state: &mut GameState,
    input: &mut TickInput,
    lanes: &mut L,
) -> TickResult {
    // Nothing moves after a crash until reset
    if state.phase == GamePhase::GameOver {
        return TickResult::default();
    }

    let mut events = Vec::new();
    state.time_ticks += 1;

    if input.autopilot {
        if let Some(direction) = autopilot::steer(state) {
            input.press(direction);
        }
    }

    apply_intent(state, input, &mut events);

    if let Some(lane) = state.spawner.tick(&state.tuning, lanes) {
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle::spawned(id, lane, &state.tuning));
        log::debug!("Tick {}: obstacle {id} spawned in lane {lane}", state.time_ticks);
        events.push(GameEvent::ObstacleSpawned { id, lane });
    }

    motion::advance(state, &mut events);

    let mut game_over = false;
    if let Some(obstacle_id) = check_collision(&state.tuning, &state.player, &state.obstacles) {
        state.phase = GamePhase::GameOver;
        game_over = true;
        log::info!(
            "Game over at tick {}: hit obstacle {obstacle_id} in lane {}, score {}",
            state.time_ticks,
            state.player.lane,
            state.score
        );
        events.push(GameEvent::Collision { obstacle_id });
        events.push(GameEvent::GameOver { score: state.score });
    }

    state.debug_check();
    TickResult { events, game_over }
}

fn apply_intent(state: &mut GameState, input: &mut TickInput, events: &mut Vec<GameEvent>) {
    let from = state.player.lane;
    if input.move_left && state.player.move_left() {
        input.move_left = false;
    }
    if input.move_right && state.player.move_right(state.tuning.lane_count) {
        input.move_right = false;
    }
    let to = state.player.lane;
    if from != to {
        log::trace!("Lane {from} -> {to}");
        events.push(GameEvent::LaneChanged { from, to });
    }
}
