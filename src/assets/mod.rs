//! Assets module - sprite manifest, startup validation and the sprite
//! library shared by every spawner.

mod library;
mod plugin;

pub use library::{missing_required, required_sprites, SpriteLibrary, ASSET_ROOT};
pub use plugin::AssetsPlugin;
