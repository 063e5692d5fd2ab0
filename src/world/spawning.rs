//! Entity spawning: the distance-based spawner and the seeded opening
//! stretch of every run.

use bevy::prelude::*;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::components::{RunEntity, Scrolls, SpawnKind};
use crate::animation::{AnimState, SpriteAnimation};
use crate::assets::SpriteLibrary;
use crate::combat::{Obstacle, Potion};
use crate::core::{ContactKind, GameConfig};
use crate::enemies::{AiState, Enemy, EnemyStats, Patrol};
use crate::persistence::{Difficulty, Settings};
use crate::physics::Hitbox;
use crate::score::RunPace;

/// Random source for spawning.
#[derive(Resource)]
pub struct SpawnRng(pub StdRng);

impl Default for SpawnRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

/// Counts down scrolled distance until the next spawn.
///
/// Measuring in distance rather than time keeps gaps between entities
/// constant on screen, so the time between spawns shrinks as the run speeds
/// up.
#[derive(Resource, Debug, Default)]
pub struct Spawner {
    pub countdown: f32,
}

impl Spawner {
    /// Consume `distance`. Returns how far past due the next spawn is, or
    /// `None` if it is not due yet.
    pub fn tick(&mut self, distance: f32) -> Option<f32> {
        self.countdown -= distance.max(0.0);
        (self.countdown <= 0.0).then(|| -self.countdown)
    }

    /// Schedule the next spawn `gap` units after the one just made.
    pub fn reschedule(&mut self, gap: f32) {
        self.countdown += gap.max(1.0);
    }
}

/// Weighted spawn table in `SpawnKind::ALL` order.
pub fn spawn_weights(config: &GameConfig, difficulty: Difficulty) -> [f32; 3] {
    let potion = (config.potion_base_weight * difficulty.potion_factor()).clamp(0.02, 0.15);
    [config.obstacle_weight, config.enemy_weight, potion]
}

/// Weighted random pick. Falls back to an obstacle if the table is unusable.
pub fn choose_kind(rng: &mut impl Rng, weights: &[f32; 3]) -> SpawnKind {
    match WeightedIndex::new(weights) {
        Ok(dist) => SpawnKind::ALL[dist.sample(rng)],
        Err(e) => {
            warn!("Invalid spawn weights {:?}: {}", weights, e);
            SpawnKind::Obstacle
        }
    }
}

/// Uniform sample from a (min, max) pair in either order.
pub fn sample_range(rng: &mut impl Rng, (a, b): (f32, f32)) -> f32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rng.gen_range(lo..=hi)
}

/// Spawn one entity of `kind` standing on the ground at `x`.
pub fn spawn_entity(
    commands: &mut Commands,
    kind: SpawnKind,
    x: f32,
    config: &GameConfig,
    library: &SpriteLibrary,
    rng: &mut impl Rng,
) -> Entity {
    let ground = config.ground_y();

    match kind {
        SpawnKind::Obstacle => {
            let (width, height) = config.obstacle_size;
            commands
                .spawn((
                    Obstacle {
                        damage: config.obstacle_damage,
                    },
                    ContactKind::Obstacle,
                    Hitbox::from_size(width, height),
                    Sprite {
                        image: library.obstacle.clone(),
                        custom_size: Some(Vec2::new(width, height)),
                        ..default()
                    },
                    Transform::from_xyz(x, ground + height / 2.0, 5.0),
                    Scrolls,
                    RunEntity,
                ))
                .id()
        }
        SpawnKind::Potion => {
            let (width, height) = config.potion_size;
            commands
                .spawn((
                    Potion {
                        heal: config.potion_heal,
                    },
                    ContactKind::Potion,
                    Hitbox::from_size(width, height),
                    Sprite {
                        image: library.potion.clone(),
                        custom_size: Some(Vec2::new(width, height)),
                        ..default()
                    },
                    Transform::from_xyz(x, ground + config.potion_lift + height / 2.0, 5.0),
                    Scrolls,
                    RunEntity,
                ))
                .id()
        }
        SpawnKind::Enemy => {
            let (width, height) = config.enemy_size;
            let speed = sample_range(rng, config.patrol_speed);
            commands
                .spawn((
                    Enemy,
                    AiState::default(),
                    EnemyStats {
                        damage: config.enemy_damage,
                        attack_range: config.attack_range,
                    },
                    Patrol::new(config.patrol_range, speed),
                    ContactKind::Enemy,
                    Hitbox::from_size(width, height),
                    SpriteAnimation::new(AnimState::Patrol, config.enemy_frame_secs),
                    library.enemy.clone(),
                    Sprite {
                        image: library.enemy.first_frame(AnimState::Patrol),
                        custom_size: Some(Vec2::new(width, height)),
                        ..default()
                    },
                    Transform::from_xyz(x, ground + height / 2.0, 6.0),
                    Scrolls,
                    RunEntity,
                ))
                .id()
        }
    }
}

/// Populate the opening stretch of a run. Returns the x of the furthest
/// seeded entity.
pub fn seed_world(
    commands: &mut Commands,
    config: &GameConfig,
    library: &SpriteLibrary,
    rng: &mut impl Rng,
) -> f32 {
    let mut x = config.player_x() + config.seed_lead;
    let mut furthest = config.player_x();

    for _ in 0..config.seed_count {
        let kind = SpawnKind::ALL[rng.gen_range(0..SpawnKind::ALL.len())];
        spawn_entity(commands, kind, x, config, library, rng);
        furthest = x;
        x += sample_range(rng, config.seed_gap);
    }

    furthest
}

/// Spawn new entities past the right edge as the world scrolls.
pub fn run_spawner(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    library: Res<SpriteLibrary>,
    settings: Res<Settings>,
    pace: Res<RunPace>,
    mut spawner: ResMut<Spawner>,
    mut rng: ResMut<SpawnRng>,
) {
    let weights = spawn_weights(&config, settings.difficulty);
    let distance = pace.speed * time.delta_secs();
    let rng = &mut rng.0;

    let mut consumed = distance;
    while let Some(overshoot) = spawner.tick(consumed) {
        let kind = choose_kind(rng, &weights);
        spawn_entity(
            &mut commands,
            kind,
            config.spawn_x() - overshoot,
            &config,
            &library,
            rng,
        );
        debug!("Spawned {:?}", kind);
        spawner.reschedule(sample_range(rng, (config.min_spawn_gap, config.max_spawn_gap)));
        consumed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn potion_weight_follows_difficulty_and_is_clamped() {
        let config = GameConfig::default();
        let normal = spawn_weights(&config, Difficulty::Normal);
        let hard = spawn_weights(&config, Difficulty::Hard);
        assert!((normal[2] - 0.05).abs() < 1e-6);
        assert!(hard[2] < normal[2]);

        let generous = GameConfig {
            potion_base_weight: 5.0,
            ..GameConfig::default()
        };
        assert_eq!(spawn_weights(&generous, Difficulty::Easy)[2], 0.15);
    }

    #[test]
    fn zero_weight_kinds_are_never_chosen() {
        let mut rng = StdRng::seed_from_u64(7);
        let weights = [0.6, 0.0, 0.4];
        for _ in 0..1000 {
            assert_ne!(choose_kind(&mut rng, &weights), SpawnKind::Enemy);
        }
    }

    #[test]
    fn all_kinds_appear_with_default_weights() {
        let mut rng = StdRng::seed_from_u64(42);
        let weights = spawn_weights(&GameConfig::default(), Difficulty::Normal);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            seen.insert(choose_kind(&mut rng, &weights));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn unusable_weights_fall_back_to_obstacle() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(choose_kind(&mut rng, &[0.0, 0.0, 0.0]), SpawnKind::Obstacle);
    }

    #[test]
    fn spawner_fires_after_its_gap() {
        let mut spawner = Spawner { countdown: 100.0 };
        assert_eq!(spawner.tick(60.0), None);
        assert_eq!(spawner.tick(60.0), Some(20.0));
        spawner.reschedule(600.0);
        assert_eq!(spawner.countdown, 580.0);
        assert_eq!(spawner.tick(0.0), None);
    }

    #[test]
    fn sample_range_accepts_reversed_and_degenerate_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let v = sample_range(&mut rng, (500.0, 300.0));
            assert!((300.0..=500.0).contains(&v));
        }
        assert_eq!(sample_range(&mut rng, (2.0, 2.0)), 2.0);
    }

    #[test]
    fn due_spawn_lands_beyond_the_right_edge() {
        use bevy::ecs::system::RunSystemOnce;
        use std::time::Duration;

        let config = GameConfig::default();
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_millis(100));
        world.insert_resource(time);
        world.insert_resource(config.clone());
        world.init_resource::<SpriteLibrary>();
        world.init_resource::<Settings>();
        world.insert_resource(RunPace::new(300.0));
        world.insert_resource(Spawner { countdown: 10.0 });
        world.insert_resource(SpawnRng(StdRng::seed_from_u64(11)));

        world.run_system_once(run_spawner).unwrap();

        let spawned: Vec<(f32, f32)> = world
            .query_filtered::<(&Transform, &Hitbox), With<Scrolls>>()
            .iter(&world)
            .map(|(transform, hitbox)| (transform.translation.x, hitbox.half_size.x))
            .collect();
        assert_eq!(spawned.len(), 1);

        let (x, half_width) = spawned[0];
        assert!((x - (config.spawn_x() - 20.0)).abs() < 1e-3);
        assert!(x - half_width > config.right_edge());
        assert!(world.resource::<Spawner>().countdown >= config.min_spawn_gap - 20.0);
    }
}
