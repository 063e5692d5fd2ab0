//! Global events used for cross-system communication.
//!
//! Collision detection only reports contacts; the combat systems turn them
//! into damage and healing, and audio/persistence listen for the outcomes.

use bevy::prelude::*;

/// What the player touched.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKind {
    Obstacle,
    Enemy,
    Potion,
}

/// Sent once per frame for every entity whose box overlaps the player's.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    /// The obstacle, enemy or potion entity
    pub entity: Entity,
    pub kind: ContactKind,
}

/// Sent when the player takes damage.
#[derive(Event, Debug, Clone, Copy)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage
    pub source: Entity,
    pub amount: f32,
}

/// Sent when the player drinks a potion.
#[derive(Event, Debug, Clone, Copy)]
pub struct HealEvent {
    pub target: Entity,
    pub amount: f32,
}

/// Sent exactly once when the player's health reaches zero.
#[derive(Event, Debug, Clone, Copy)]
pub struct DeathEvent {
    pub entity: Entity,
}

/// Sent when the player leaves the ground.
#[derive(Event, Debug, Clone, Copy)]
pub struct JumpEvent;

/// Sent when an enemy starts its attack on the player.
#[derive(Event, Debug, Clone, Copy)]
pub struct EnemyAttackEvent {
    pub enemy: Entity,
}

/// Request to throw away the current run and start a fresh one.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RestartEvent;
