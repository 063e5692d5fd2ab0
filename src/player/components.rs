//! Player-related components.

use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Vertical motion state. The player never moves horizontally; the world
/// scrolls past it instead.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerBody {
    pub vertical_velocity: f32,
    pub grounded: bool,
}

impl Default for PlayerBody {
    fn default() -> Self {
        Self {
            vertical_velocity: 0.0,
            grounded: true,
        }
    }
}

impl PlayerBody {
    /// Jump once per ground contact. Returns whether the jump happened.
    pub fn try_jump(&mut self, impulse: f32) -> bool {
        if !self.grounded {
            return false;
        }
        self.vertical_velocity = impulse;
        self.grounded = false;
        true
    }

    /// Integrate gravity for one step and land on `floor`.
    ///
    /// `y` is the entity's center and `floor` the center height when
    /// standing on the ground.
    pub fn integrate(&mut self, y: &mut f32, floor: f32, gravity: f32, dt: f32) {
        self.vertical_velocity -= gravity * dt;
        *y += self.vertical_velocity * dt;

        if *y <= floor {
            *y = floor;
            self.vertical_velocity = 0.0;
            self.grounded = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn jump_rises_then_lands() {
        let config = GameConfig::default();
        let floor = 0.0;
        let mut y = floor;
        let mut body = PlayerBody::default();

        assert!(body.try_jump(config.jump_impulse));
        assert_eq!(body.vertical_velocity, config.jump_impulse);

        body.integrate(&mut y, floor, config.gravity, DT);
        assert!(y > floor);
        assert!(!body.grounded);

        let mut frames = 1;
        while !body.grounded {
            body.integrate(&mut y, floor, config.gravity, DT);
            frames += 1;
            assert!(frames < 600, "player never landed");
        }
        assert_eq!(y, floor);
        assert_eq!(body.vertical_velocity, 0.0);
    }

    #[test]
    fn no_double_jump() {
        let mut body = PlayerBody::default();
        let mut y = 0.0;

        assert!(body.try_jump(900.0));
        body.integrate(&mut y, 0.0, 2500.0, DT);
        assert!(!body.try_jump(900.0));
        assert!(body.vertical_velocity < 900.0);
    }

    #[test]
    fn resting_player_stays_on_floor() {
        let mut body = PlayerBody::default();
        let mut y = 10.0;
        for _ in 0..10 {
            body.integrate(&mut y, 10.0, 2500.0, DT);
        }
        assert_eq!(y, 10.0);
        assert!(body.grounded);
    }
}
