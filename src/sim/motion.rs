//! Obstacle motion and lifecycle
//!
//! Obstacles scroll down at the current speed. Any that pass the bottom of the
//! track are dropped and each one scores a point.

use super::difficulty;
use super::events::GameEvent;
use super::state::GameState;

/// Move every obstacle one frame and retire the ones past the exit.
///
/// All obstacles move by the speed in effect at the start of the frame, even if a
/// milestone is reached during this pass. Returns the number of obstacles cleared.
pub fn advance(state: &mut GameState, events: &mut Vec<GameEvent>) -> usize {
    let speed = state.speed;
    let exit_y = state.tuning.exit_y();

    let mut cleared = Vec::new();
    state.obstacles.retain_mut(|obstacle| {
        obstacle.y += speed;
        if obstacle.y > exit_y {
            cleared.push(obstacle.id);
            false
        } else {
            true
        }
    });

    for &id in &cleared {
        state.score += 1;
        events.push(GameEvent::ObstacleCleared { id });
        events.push(GameEvent::ScoreChanged { score: state.score });
        if let Some(speed) = difficulty::on_score(&state.tuning, state.score, &mut state.speed) {
            events.push(GameEvent::SpeedIncreased { speed });
        }
    }

    cleared.len()
}
