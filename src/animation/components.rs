//! Sprite animation state and frame clips.

use bevy::prelude::*;
use std::collections::HashMap;

/// Visual state of an animated entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimState {
    #[default]
    Idle,
    Run,
    Jump,
    Dead,
    Patrol,
    Attack,
}

/// Frame timer for one animated entity.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct SpriteAnimation {
    pub state: AnimState,
    pub frame: usize,
    /// Time accumulated on the current frame
    pub elapsed: f32,
    /// Seconds each frame is shown
    pub frame_secs: f32,
}

impl SpriteAnimation {
    pub fn new(state: AnimState, frame_secs: f32) -> Self {
        Self {
            state,
            frame: 0,
            elapsed: 0.0,
            frame_secs,
        }
    }

    /// Switch clips, restarting from the first frame. Returns whether the
    /// state actually changed.
    pub fn set_state(&mut self, state: AnimState) -> bool {
        if self.state == state {
            return false;
        }
        self.state = state;
        self.frame = 0;
        self.elapsed = 0.0;
        true
    }

    /// Advance the timer by `dt` for a clip of `frame_count` frames.
    ///
    /// Single-frame clips hold. Returns whether the frame index changed.
    pub fn advance(&mut self, dt: f32, frame_count: usize) -> bool {
        if frame_count <= 1 || self.frame_secs <= 0.0 {
            self.frame = 0;
            return false;
        }

        let before = self.frame;
        self.elapsed += dt;
        while self.elapsed >= self.frame_secs {
            self.elapsed -= self.frame_secs;
            self.frame = (self.frame + 1) % frame_count;
        }
        self.frame != before
    }
}

/// Image handles for every state an entity can be drawn in.
#[derive(Component, Debug, Clone, Default)]
pub struct AnimationClips {
    pub clips: HashMap<AnimState, Vec<Handle<Image>>>,
}

impl AnimationClips {
    pub fn with_clip(mut self, state: AnimState, frames: Vec<Handle<Image>>) -> Self {
        self.clips.insert(state, frames);
        self
    }

    /// Number of frames in a clip (zero if the state has none).
    pub fn len(&self, state: AnimState) -> usize {
        self.clips.get(&state).map_or(0, Vec::len)
    }

    /// The image for `frame` of a clip, wrapping out-of-range indices.
    pub fn frame(&self, state: AnimState, frame: usize) -> Option<&Handle<Image>> {
        let frames = self.clips.get(&state)?;
        if frames.is_empty() {
            return None;
        }
        frames.get(frame % frames.len())
    }

    pub fn first_frame(&self, state: AnimState) -> Handle<Image> {
        self.frame(state, 0).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_wrap_around_clip_length() {
        let mut anim = SpriteAnimation::new(AnimState::Run, 0.1);
        let mut changes = 0;
        for _ in 0..6 {
            if anim.advance(0.1, 6) {
                changes += 1;
            }
        }
        assert_eq!(changes, 6);
        assert_eq!(anim.frame, 0);

        anim.advance(0.25, 6);
        assert_eq!(anim.frame, 2);
        assert!((anim.elapsed - 0.05).abs() < 1e-4);
    }

    #[test]
    fn short_steps_accumulate() {
        let mut anim = SpriteAnimation::new(AnimState::Patrol, 0.14);
        assert!(!anim.advance(0.1, 4));
        assert!(anim.advance(0.1, 4));
        assert_eq!(anim.frame, 1);
    }

    #[test]
    fn state_change_resets_frame() {
        let mut anim = SpriteAnimation::new(AnimState::Run, 0.1);
        anim.advance(0.35, 6);
        assert_eq!(anim.frame, 3);

        assert!(!anim.set_state(AnimState::Run));
        assert_eq!(anim.frame, 3);

        assert!(anim.set_state(AnimState::Jump));
        assert_eq!(anim.frame, 0);
        assert_eq!(anim.elapsed, 0.0);
    }

    #[test]
    fn single_frame_clips_hold() {
        let mut anim = SpriteAnimation::new(AnimState::Dead, 0.1);
        assert!(!anim.advance(5.0, 1));
        assert_eq!(anim.frame, 0);
    }

    #[test]
    fn clip_lookup_wraps_and_handles_missing_states() {
        let clips = AnimationClips::default().with_clip(
            AnimState::Run,
            vec![Handle::default(), Handle::default()],
        );
        assert_eq!(clips.len(AnimState::Run), 2);
        assert_eq!(clips.len(AnimState::Attack), 0);
        assert!(clips.frame(AnimState::Run, 5).is_some());
        assert!(clips.frame(AnimState::Attack, 0).is_none());
    }
}
