//! Enemy-related components.

use bevy::prelude::*;

/// Marker component for all enemies.
#[derive(Component)]
pub struct Enemy;

/// AI state machine for enemy behavior.
#[derive(Component, Default, PartialEq, Eq, Clone, Copy, Debug)]
pub enum AiState {
    /// Walking back and forth around the spawn point.
    #[default]
    Patrol,
    /// Player is close ahead; standing still and striking.
    Attack,
}

/// Per-enemy combat numbers.
#[derive(Component, Clone, Copy, Debug)]
pub struct EnemyStats {
    /// Damage dealt on contact with the player
    pub damage: f32,
    /// How far ahead of the player the enemy starts its attack
    pub attack_range: f32,
}

/// Back-and-forth walk around a point that scrolls with the world.
#[derive(Component, Clone, Copy, Debug)]
pub struct Patrol {
    /// Current offset from the anchor
    pub offset: f32,
    /// Maximum distance from the anchor in either direction
    pub range: f32,
    pub speed: f32,
    /// -1.0 walking left, 1.0 walking right
    pub direction: f32,
}

impl Patrol {
    pub fn new(range: f32, speed: f32) -> Self {
        Self {
            offset: 0.0,
            range,
            speed,
            direction: -1.0,
        }
    }

    /// Walk for `dt` seconds, turning around at either end. Returns the
    /// horizontal displacement.
    pub fn step(&mut self, dt: f32) -> f32 {
        let mut next = self.offset + self.direction * self.speed * dt;
        if next < -self.range {
            next = -self.range;
            self.direction = 1.0;
        } else if next > self.range {
            next = self.range;
            self.direction = -1.0;
        }

        let dx = next - self.offset;
        self.offset = next;
        dx
    }
}
