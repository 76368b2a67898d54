pub mod error;
pub mod layout;

pub mod asset;
pub mod config;
pub mod encode;
pub mod palette;
pub mod registry;
pub mod tile;

pub use crate::asset::Asset;
pub use crate::config::LoaderConfig;
pub use crate::error::{AssetError, Result};
pub use crate::palette::{Color, Palette};
pub use crate::registry::{AssetRegistry, AssetSpan, PpuTables};
pub use crate::tile::Tile;
