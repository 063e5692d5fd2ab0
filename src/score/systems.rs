//! Per-frame scoring.

use bevy::prelude::*;

use super::resources::{RunPace, Score};
use crate::core::GameConfig;

/// Score the distance scrolled this frame.
pub fn accumulate_distance(
    time: Res<Time>,
    config: Res<GameConfig>,
    pace: Res<RunPace>,
    mut score: ResMut<Score>,
) {
    score.add_distance(pace.speed * time.delta_secs(), config.distance_per_point);
}

/// Speed the run up as the score climbs.
pub fn update_pace(config: Res<GameConfig>, score: Res<Score>, mut pace: ResMut<RunPace>) {
    if pace.update(
        score.points,
        config.speed_step_points,
        config.speed_step,
        config.max_speed,
    ) {
        info!("Pace milestone {}: speed {:.0}", pace.milestone, pace.speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    fn world_after(speed: f32, elapsed: Duration) -> World {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(elapsed);
        world.insert_resource(time);
        world.insert_resource(GameConfig::default());
        world.insert_resource(RunPace::new(speed));
        world.init_resource::<Score>();
        world
    }

    #[test]
    fn distance_accumulates_with_time() {
        let mut world = world_after(1000.0, Duration::from_millis(250));
        world.run_system_once(accumulate_distance).unwrap();

        let score = world.resource::<Score>();
        assert!((score.distance - 250.0).abs() < 1e-3);
        assert_eq!(score.points, 2);
    }

    #[test]
    fn pace_follows_score_milestones() {
        let mut world = world_after(240.0, Duration::ZERO);
        world.resource_mut::<Score>().award_pass(100);
        world.run_system_once(update_pace).unwrap();

        let pace = world.resource::<RunPace>();
        assert_eq!(pace.milestone, 2);
        assert_eq!(pace.speed, 300.0);
    }
}
