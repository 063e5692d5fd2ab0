//! Game audio plugin - wires cues, music and the volume setting to the
//! kira audio channels.

use bevy::prelude::*;
use bevy_kira_audio::{Audio, AudioApp, AudioChannel, AudioControl};
use std::path::Path;

use super::cues::{queue_cues, CueQueue, SoundLibrary};
use crate::assets::ASSET_ROOT;
use crate::core::{GameState, RunSet};
use crate::persistence::Settings;

/// Music plays at this fraction of the master volume.
const MUSIC_VOLUME: f64 = 0.6;

/// Typed channel for the looping music track.
#[derive(Resource)]
pub struct MusicChannel;

/// Volumes for the effects channel and the music channel.
pub fn channel_volumes(settings: &Settings) -> (f64, f64) {
    let volume = settings.volume.clamp(0.0, 1.0) as f64;
    (volume, volume * MUSIC_VOLUME)
}

/// Game audio plugin. Requires `bevy_kira_audio::AudioPlugin`.
pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_audio_channel::<MusicChannel>()
            .init_resource::<CueQueue>()
            .add_systems(OnEnter(GameState::Loading), (load_sounds, start_music).chain())
            .add_systems(
                Update,
                (queue_cues, play_cues).chain().after(RunSet::Resolve),
            )
            .add_systems(
                Update,
                apply_volume.run_if(resource_exists::<Settings>.and(resource_changed::<Settings>)),
            );
    }
}

fn load_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    let library = SoundLibrary::load(&asset_server, Path::new(ASSET_ROOT));
    info!(
        "Loaded {} sound effect(s), music {}",
        library.effects.len(),
        if library.music.is_some() { "on" } else { "off" }
    );
    commands.insert_resource(library);
}

fn start_music(music_channel: Res<AudioChannel<MusicChannel>>, library: Res<SoundLibrary>) {
    if let Some(music) = &library.music {
        music_channel.play(music.clone()).looped();
    }
}

fn play_cues(audio: Res<Audio>, library: Option<Res<SoundLibrary>>, mut queue: ResMut<CueQueue>) {
    let Some(library) = library else {
        queue.0.clear();
        return;
    };
    for cue in queue.0.drain(..) {
        if let Some(handle) = library.effect(cue) {
            audio.play(handle.clone());
        }
    }
}

/// Keep both channel volumes in step with the settings.
fn apply_volume(
    audio: Res<Audio>,
    music_channel: Res<AudioChannel<MusicChannel>>,
    settings: Res<Settings>,
) {
    let (effects, music) = channel_volumes(&settings);
    audio.set_volume(effects);
    music_channel.set_volume(music);
}
