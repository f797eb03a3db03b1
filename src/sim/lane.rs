//! Lane geometry
//!
//! Lanes are equal-width vertical corridors across the road. Entities are drawn
//! horizontally centred in their lane.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Horizontal extent occupied by an entity in a lane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Left edge (pixels)
    pub x: f32,
    pub width: f32,
}

impl Band {
    /// Right edge (pixels)
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Map a lane index to the band an entity of `entity_width` occupies.
///
/// `lane` must already be inside `[0, lane_count)`.
#[inline]
pub fn lane_to_band(tuning: &Tuning, lane: u32, entity_width: f32) -> Band {
    debug_assert!(lane < tuning.lane_count, "lane {lane} out of range");
    let lane_width = tuning.lane_width();
    Band {
        x: tuning.track_offset() + lane as f32 * lane_width + (lane_width - entity_width) / 2.0,
        width: entity_width,
    }
}

/// X positions of the dividers between adjacent lanes (for drawing the road)
pub fn lane_dividers(tuning: &Tuning) -> Vec<f32> {
    (1..tuning.lane_count)
        .map(|i| tuning.track_offset() + i as f32 * tuning.lane_width())
        .collect()
}
