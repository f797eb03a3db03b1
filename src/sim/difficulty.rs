//! Score-driven speed progression

use crate::tuning::Tuning;

/// Apply the speed-up for a score that was just reached.
///
/// Call once per point scored, with the score *after* the increment. Returns the new
/// speed if this score is a milestone.
pub fn on_score(tuning: &Tuning, new_score: u64, speed: &mut f32) -> Option<f32> {
    if new_score == 0 || tuning.score_milestone == 0 || new_score % tuning.score_milestone != 0 {
        return None;
    }
    *speed += tuning.speed_increment;
    log::debug!("Score {new_score}: speed up to {:.2}", *speed);
    Some(*speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestone_fires_once() {
        let tuning = Tuning::default();
        let mut speed = tuning.initial_speed;

        for score in 1..=4 {
            assert_eq!(on_score(&tuning, score, &mut speed), None);
        }
        assert_eq!(on_score(&tuning, 5, &mut speed), Some(4.5));
        for score in 6..=9 {
            assert_eq!(on_score(&tuning, score, &mut speed), None);
            assert_eq!(speed, 4.5);
        }
        assert_eq!(on_score(&tuning, 10, &mut speed), Some(5.0));
    }

    #[test]
    fn test_zero_is_not_a_milestone() {
        let tuning = Tuning::default();
        let mut speed = tuning.initial_speed;
        assert_eq!(on_score(&tuning, 0, &mut speed), None);
        assert_eq!(speed, tuning.initial_speed);
    }

    #[test]
    fn test_zero_milestone_never_fires() {
        let tuning = Tuning {
            score_milestone: 0,
            ..Tuning::default()
        };
        let mut speed = tuning.initial_speed;
        for score in 1..=20 {
            assert_eq!(on_score(&tuning, score, &mut speed), None);
        }
        assert_eq!(speed, tuning.initial_speed);
    }

    #[test]
    fn test_milestone_of_one() {
        let tuning = Tuning {
            score_milestone: 1,
            speed_increment: 0.25,
            ..Tuning::default()
        };
        let mut speed = tuning.initial_speed;
        for score in 1..=4 {
            on_score(&tuning, score, &mut speed);
        }
        assert_eq!(speed, 5.0);
    }
}
