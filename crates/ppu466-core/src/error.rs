use std::path::PathBuf;

use ppu466_chunk::ChunkError;
use thiserror::Error;

use crate::palette::Color;

pub type Result<T> = std::result::Result<T, AssetError>;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load image {}: {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("palette overflow: fifth distinct color {color} at pixel ({x}, {y})")]
    PaletteOverflow { color: Color, x: u32, y: u32 },

    #[error("bad magic: expected {expected:?}, found {found:?}")]
    BadMagic { expected: [u8; 4], found: [u8; 4] },

    #[error("truncated asset: {0}")]
    TruncatedAsset(String),

    #[error("layout error: {0}")]
    Layout(String),

    #[error("palette table full ({capacity} palettes)")]
    PaletteTableFull { capacity: usize },

    #[error("tile table full: {requested} tiles requested, capacity {capacity}")]
    TileTableFull { capacity: usize, requested: usize },

    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ChunkError> for AssetError {
    fn from(e: ChunkError) -> Self {
        match e {
            ChunkError::BadMagic { expected, found } => AssetError::BadMagic { expected, found },
            ChunkError::Truncated(msg) => AssetError::TruncatedAsset(msg),
            ChunkError::TooLarge(n) => AssetError::Layout(format!("payload of {n} bytes does not fit a chunk")),
            ChunkError::Io(source) => AssetError::Io {
                path: PathBuf::new(),
                source,
            },
        }
    }
}
