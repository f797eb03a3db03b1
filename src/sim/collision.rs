//! Collision detection between the player and obstacles
//!
//! Everything on the road is an axis-aligned rectangle, so a plain AABB overlap
//! test is all that's needed. Touching edges do not count as a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Obstacle, Player};
use crate::tuning::Tuning;

/// Axis-aligned rectangle in field coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap on both axes
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x
            && a_max.x > other.min.x
            && self.min.y < b_max.y
            && a_max.y > other.min.y
    }
}

/// Find the first obstacle the player is touching.
///
/// Returns the obstacle's id, stopping at the first hit.
pub fn check_collision(tuning: &Tuning, player: &Player, obstacles: &[Obstacle]) -> Option<u32> {
    let player_rect = player.rect(tuning);
    obstacles
        .iter()
        .find(|o| player_rect.overlaps(&o.rect(tuning)))
        .map(|o| o.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacle(id: u32, lane: u32, y: f32) -> Obstacle {
        Obstacle {
            id,
            lane,
            y,
            width: 40.0,
            height: 70.0,
        }
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_same_lane_hit() {
        let tuning = Tuning::default();
        let player = Player::new(&tuning);
        // Player spans y 500..570; obstacle bottom at 502
        let obstacles = [obstacle(7, 1, 432.0)];
        assert_eq!(check_collision(&tuning, &player, &obstacles), Some(7));

        // Bottom edge exactly at the player's top: no hit
        let obstacles = [obstacle(7, 1, 430.0)];
        assert_eq!(check_collision(&tuning, &player, &obstacles), None);
    }

    #[test]
    fn test_adjacent_lane_misses() {
        let tuning = Tuning::default();
        let player = Player::new(&tuning);
        let obstacles = [obstacle(1, 0, 500.0), obstacle(2, 2, 500.0)];
        assert_eq!(check_collision(&tuning, &player, &obstacles), None);
    }

    #[test]
    fn test_first_hit_wins() {
        let tuning = Tuning::default();
        let player = Player::new(&tuning);
        let obstacles = [
            obstacle(1, 0, 500.0),
            obstacle(2, 1, 480.0),
            obstacle(3, 1, 520.0),
        ];
        assert_eq!(check_collision(&tuning, &player, &obstacles), Some(2));
    }

    #[test]
    fn test_passed_obstacle_misses() {
        let tuning = Tuning::default();
        let player = Player::new(&tuning);
        // Top edge at the player's bottom edge
        let obstacles = [obstacle(1, 1, 570.0)];
        assert_eq!(check_collision(&tuning, &player, &obstacles), None);
    }
}
