//! Demo mode: the simulation steers the player itself
//!
//! Looks at the current lane and its neighbours and heads for whichever has the
//! most room before the next oncoming obstacle.

use super::state::GameState;
use super::tick::Direction;

/// Vertical gap between the player's top edge and the nearest obstacle still
/// approaching in `lane`. Negative when an obstacle already overlaps the player's rows.
fn clearance(state: &GameState, lane: u32) -> f32 {
    let player = &state.player;
    let player_bottom = player.y + player.height;
    state
        .obstacles
        .iter()
        .filter(|o| o.lane == lane && o.y < player_bottom)
        .map(|o| player.y - (o.y + o.height))
        .fold(f32::INFINITY, f32::min)
}

/// Pick a lane change for this tick, or `None` to hold the current lane
pub fn steer(state: &GameState) -> Option<Direction> {
    let lane = state.player.lane;
    let mut best = (None, clearance(state, lane));

    let neighbours = [
        (lane.checked_sub(1), Direction::Left),
        (
            (lane + 1 < state.tuning.lane_count).then_some(lane + 1),
            Direction::Right,
        ),
    ];
    for (target, direction) in neighbours {
        let Some(target) = target else { continue };
        let room = clearance(state, target);
        // Never swerve into a car that's already alongside
        if room > 0.0 && room > best.1 {
            best = (Some(direction), room);
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;

    fn with_obstacle(state: &mut GameState, lane: u32, y: f32) {
        let id = state.next_entity_id();
        let mut obstacle = Obstacle::spawned(id, lane, &state.tuning);
        obstacle.y = y;
        state.obstacles.push(obstacle);
    }

    #[test]
    fn test_holds_on_empty_road() {
        let state = GameState::new(1);
        assert_eq!(steer(&state), None);
    }

    #[test]
    fn test_dodges_obstacle_ahead() {
        let mut state = GameState::new(1);
        with_obstacle(&mut state, 1, 300.0);
        with_obstacle(&mut state, 0, 200.0);
        // Lane 2 is clear
        assert_eq!(steer(&state), Some(Direction::Right));
    }

    #[test]
    fn test_ignores_passed_obstacles() {
        let mut state = GameState::new(1);
        with_obstacle(&mut state, 1, 580.0);
        assert_eq!(steer(&state), None);
    }

    #[test]
    fn test_wont_swerve_into_car_alongside() {
        let mut state = GameState::new(1);
        state.player.lane = 0;
        with_obstacle(&mut state, 0, 300.0);
        with_obstacle(&mut state, 1, 480.0);
        assert_eq!(steer(&state), None);
    }
}
