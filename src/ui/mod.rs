//! UI module - menus, settings screen, overlays and the HUD.

mod hud;
mod plugin;
mod settings;

pub use plugin::{MenuButton, UiPlugin};
