//! Gameplay events mapped to sound effects.

use bevy::prelude::*;
use bevy_kira_audio::AudioSource;
use std::path::Path;

use crate::combat::Health;
use crate::core::{DamageEvent, DeathEvent, EnemyAttackEvent, HealEvent, JumpEvent};

/// A sound effect to play this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Jump,
    Hit,
    Heal,
    Death,
    EnemyAttack,
}

impl Cue {
    pub const ALL: [Cue; 5] = [Cue::Jump, Cue::Hit, Cue::Heal, Cue::Death, Cue::EnemyAttack];

    pub fn file(self) -> &'static str {
        match self {
            Cue::Jump => "player_jump.wav",
            Cue::Hit => "player_hit.wav",
            Cue::Heal => "player_heal.wav",
            Cue::Death => "player_death.wav",
            Cue::EnemyAttack => "enemy_attack.wav",
        }
    }
}

pub const MUSIC: &str = "music.mp3";

/// Sounds that were found on disk. Every entry is optional.
#[derive(Resource, Debug, Default)]
pub struct SoundLibrary {
    pub effects: Vec<(Cue, Handle<AudioSource>)>,
    pub music: Option<Handle<AudioSource>>,
}

impl SoundLibrary {
    /// Load whatever sound files exist under `root`.
    pub fn load(asset_server: &AssetServer, root: &Path) -> Self {
        let mut load = |file: &str| {
            if root.join(file).is_file() {
                Some(asset_server.load::<AudioSource>(file.to_string()))
            } else {
                warn!("Optional sound {} not found", file);
                None
            }
        };

        let effects = Cue::ALL
            .iter()
            .filter_map(|&cue| load(cue.file()).map(|handle| (cue, handle)))
            .collect();
        let music = load(MUSIC);
        Self { effects, music }
    }

    pub fn effect(&self, cue: Cue) -> Option<&Handle<AudioSource>> {
        self.effects
            .iter()
            .find(|(c, _)| *c == cue)
            .map(|(_, handle)| handle)
    }
}

/// Cues raised this frame, drained by the player.
#[derive(Resource, Debug, Default)]
pub struct CueQueue(pub Vec<Cue>);

/// Translate gameplay events into cues.
pub fn queue_cues(
    mut queue: ResMut<CueQueue>,
    mut jumps: EventReader<JumpEvent>,
    mut damage: EventReader<DamageEvent>,
    mut heals: EventReader<HealEvent>,
    mut deaths: EventReader<DeathEvent>,
    mut attacks: EventReader<EnemyAttackEvent>,
    health_query: Query<&Health>,
) {
    if jumps.read().count() > 0 {
        queue.0.push(Cue::Jump);
    }
    // A killing blow plays the death sound instead of the hit
    let mut survived = false;
    for event in damage.read() {
        survived |= health_query
            .get(event.target)
            .is_ok_and(|health| !health.is_dead());
    }
    if survived {
        queue.0.push(Cue::Hit);
    }
    if heals.read().count() > 0 {
        queue.0.push(Cue::Heal);
    }
    if deaths.read().count() > 0 {
        queue.0.push(Cue::Death);
    }
    if attacks.read().count() > 0 {
        queue.0.push(Cue::EnemyAttack);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<JumpEvent>()
            .add_event::<DamageEvent>()
            .add_event::<HealEvent>()
            .add_event::<DeathEvent>()
            .add_event::<EnemyAttackEvent>()
            .init_resource::<CueQueue>()
            .add_systems(Update, queue_cues);
        app
    }

    #[test]
    fn events_become_cues_once_per_frame() {
        let mut app = test_app();
        app.world_mut().send_event(JumpEvent);
        app.world_mut().send_event(JumpEvent);
        app.world_mut().send_event(EnemyAttackEvent {
            enemy: Entity::PLACEHOLDER,
        });
        app.update();

        assert_eq!(
            app.world().resource::<CueQueue>().0,
            vec![Cue::Jump, Cue::EnemyAttack]
        );
    }

    #[test]
    fn lethal_damage_is_not_a_hit() {
        let mut app = test_app();
        let mut alive = Health::new(100.0);
        alive.take_damage(34.0);
        let mut dead = Health::new(100.0);
        dead.take_damage(100.0);
        let dead = app.world_mut().spawn(dead).id();

        app.world_mut().send_event(DamageEvent {
            target: dead,
            source: Entity::PLACEHOLDER,
            amount: 100.0,
        });
        app.world_mut().send_event(DeathEvent { entity: dead });
        app.update();
        assert_eq!(app.world().resource::<CueQueue>().0, vec![Cue::Death]);

        app.world_mut().resource_mut::<CueQueue>().0.clear();
        let alive = app.world_mut().spawn(alive).id();
        app.world_mut().send_event(DamageEvent {
            target: alive,
            source: Entity::PLACEHOLDER,
            amount: 34.0,
        });
        app.update();
        assert_eq!(app.world().resource::<CueQueue>().0, vec![Cue::Hit]);
    }
}
