//! Physics module - bounding boxes and contact detection.

mod aabb;
mod collision;
mod plugin;

pub use aabb::{Aabb, Hitbox};
pub use collision::detect_collisions;
pub use plugin::PhysicsPlugin;
