//! Combat-related components.

use bevy::prelude::*;

/// Component for entities that can take damage.
#[derive(Component, Debug, Clone, Copy)]
pub struct Health {
    pub current: f32,
    pub maximum: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    /// Reduce health, never below zero. Returns the damage actually taken.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.max(0.0).min(self.current);
        self.current -= actual;
        actual
    }

    /// Restore health, never above the maximum. Returns the amount healed.
    pub fn heal(&mut self, amount: f32) -> f32 {
        let actual = amount.max(0.0).min(self.maximum - self.current);
        self.current += actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percentage(&self) -> f32 {
        self.current / self.maximum
    }
}

/// Invincibility window after taking a hit, so a persistent obstacle does
/// not drain health every frame while the player overlaps it.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Invulnerability {
    /// Seconds remaining
    pub remaining: f32,
}

impl Invulnerability {
    pub fn start(&mut self, seconds: f32) {
        self.remaining = self.remaining.max(seconds);
    }

    pub fn tick(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }
}

/// Marker for an entity whose health reached zero.
#[derive(Component)]
pub struct Dead;

/// Damage dealt by touching a persistent obstacle.
#[derive(Component, Debug, Clone, Copy)]
pub struct Obstacle {
    pub damage: f32,
}

/// Healing granted when the potion is picked up.
#[derive(Component, Debug, Clone, Copy)]
pub struct Potion {
    pub heal: f32,
}

/// What is left of a defeated enemy: drawn with its dead frame, fading out
/// while it scrolls away. It never collides.
#[derive(Component, Debug, Clone, Copy)]
pub struct Remains {
    pub remaining: f32,
    pub total: f32,
}

impl Remains {
    pub fn new(seconds: f32) -> Self {
        Self {
            remaining: seconds,
            total: seconds,
        }
    }

    /// Count down and return the opacity left, from 1.0 to 0.0.
    pub fn tick(&mut self, dt: f32) -> f32 {
        self.remaining = (self.remaining - dt).max(0.0);
        if self.total <= 0.0 {
            0.0
        } else {
            self.remaining / self.total
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_never_goes_below_zero() {
        let mut health = Health::new(100.0);
        assert_eq!(health.take_damage(34.0), 34.0);
        assert_eq!(health.take_damage(500.0), 66.0);
        assert_eq!(health.current, 0.0);
        assert!(health.is_dead());
        assert_eq!(health.take_damage(10.0), 0.0);
        assert_eq!(health.current, 0.0);
    }

    #[test]
    fn heal_caps_at_maximum() {
        let mut health = Health::new(100.0);
        health.current = 50.0;
        assert_eq!(health.heal(20.0), 20.0);
        assert_eq!(health.current, 70.0);
        assert_eq!(health.heal(100.0), 30.0);
        assert_eq!(health.current, 100.0);
    }

    #[test]
    fn negative_amounts_are_ignored() {
        let mut health = Health::new(100.0);
        health.current = 40.0;
        assert_eq!(health.take_damage(-5.0), 0.0);
        assert_eq!(health.heal(-5.0), 0.0);
        assert_eq!(health.current, 40.0);
    }

    #[test]
    fn invulnerability_expires() {
        let mut invulnerable = Invulnerability::default();
        assert!(!invulnerable.is_active());

        invulnerable.start(1.0);
        invulnerable.tick(0.6);
        assert!(invulnerable.is_active());
        invulnerable.tick(0.6);
        assert!(!invulnerable.is_active());
        assert_eq!(invulnerable.remaining, 0.0);
    }

    #[test]
    fn remains_fade_out() {
        let mut remains = Remains::new(0.5);
        assert!((remains.tick(0.25) - 0.5).abs() < 1e-6);
        assert_eq!(remains.tick(1.0), 0.0);
        assert_eq!(Remains::new(0.0).tick(0.1), 0.0);
    }
}
