//! Score, high score and pace resources.

use bevy::prelude::*;

/// Points earned in the current run.
///
/// Points are the whole distance units scrolled plus the pass bonus for
/// every hazard the player got past. They never go down during a run.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct Score {
    /// World units scrolled this run
    pub distance: f32,
    /// Hazards passed
    pub passed: u32,
    /// Points earned from passing hazards
    pub bonus: u32,
    pub points: u32,
}

impl Score {
    /// Add scrolled distance. Negative distances are ignored.
    pub fn add_distance(&mut self, distance: f32, per_point: f32) {
        if distance > 0.0 {
            self.distance += distance;
        }
        let from_distance = if per_point > 0.0 {
            (self.distance / per_point).floor() as u32
        } else {
            0
        };
        self.points = self.points.max(from_distance + self.bonus);
    }

    pub fn award_pass(&mut self, bonus: u32) {
        self.passed += 1;
        self.bonus += bonus;
        self.points += bonus;
    }
}

/// Best score across all runs, persisted in the save file.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    pub best: u32,
}

impl HighScore {
    /// Keep `points` if it beats the current best. Returns whether it did.
    pub fn record(&mut self, points: u32) -> bool {
        if points > self.best {
            self.best = points;
            true
        } else {
            false
        }
    }
}

/// Current scroll speed of the run.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct RunPace {
    pub speed: f32,
    /// Speed at zero points, after the difficulty modifier
    pub base_speed: f32,
    /// Number of speed steps applied so far
    pub milestone: u32,
}

impl Default for RunPace {
    fn default() -> Self {
        Self::new(240.0)
    }
}

impl RunPace {
    pub fn new(base_speed: f32) -> Self {
        Self {
            speed: base_speed,
            base_speed,
            milestone: 0,
        }
    }

    /// Recompute the speed for `points`: one `step` every `step_points`,
    /// capped at `max_speed`. Returns whether a new milestone was reached.
    pub fn update(&mut self, points: u32, step_points: u32, step: f32, max_speed: f32) -> bool {
        if step_points == 0 {
            return false;
        }
        let milestone = points / step_points;
        if milestone <= self.milestone {
            return false;
        }
        self.milestone = milestone;
        self.speed = (self.base_speed + milestone as f32 * step)
            .min(max_speed)
            .max(self.speed);
        true
    }
}
