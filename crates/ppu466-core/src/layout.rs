// crates/ppu466-core/src/layout.rs
//
// Shared format constants and size validation.
//
// Container payload layout:
//   palette: 4 × (r, g, b, a)                       16 bytes
//   tiles:   N × (bit0[0..8], bit1[0..8])           16 bytes each
//
// Tile rows are stored bottom-to-top: image row y of a tile lives in row
// TILE_HEIGHT - y - 1 of both planes. See `Tile`.

use crate::error::{AssetError, Result};

pub const TILE_WIDTH: usize = 8;
pub const TILE_HEIGHT: usize = 8;

pub const PALETTE_LEN: usize = 4;
pub const PALETTE_BYTES: usize = PALETTE_LEN * 4;
pub const TILE_BYTES: usize = TILE_HEIGHT * 2;

pub const MAGIC: &[u8; 4] = b"p466";
pub const ASSET_EXTENSION: &str = ".p466";
pub const ASSET_DIR: &str = "assets";

/// PPU466 hardware table sizes.
pub const PALETTE_TABLE_LEN: usize = 8;
pub const TILE_TABLE_LEN: usize = 256;

/// Whole tiles in each direction. Partial edge tiles are dropped.
pub fn tile_grid(width: u32, height: u32) -> (usize, usize) {
    (width as usize / TILE_WIDTH, height as usize / TILE_HEIGHT)
}

pub fn tile_count(width: u32, height: u32) -> usize {
    let (cols, rows) = tile_grid(width, height);
    cols * rows
}

pub fn payload_len(tile_count: usize) -> usize {
    PALETTE_BYTES + tile_count * TILE_BYTES
}

/// Check a payload length and return the number of tile records it holds.
pub fn validate_payload_len(len: usize) -> Result<usize> {
    if len < PALETTE_BYTES {
        return Err(AssetError::TruncatedAsset(format!(
            "payload of {len} bytes is shorter than a palette ({PALETTE_BYTES} bytes)"
        )));
    }
    let tile_bytes = len - PALETTE_BYTES;
    if tile_bytes % TILE_BYTES != 0 {
        return Err(AssetError::TruncatedAsset(format!(
            "{tile_bytes} tile bytes is not a multiple of {TILE_BYTES}"
        )));
    }
    Ok(tile_bytes / TILE_BYTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_drops_partial_tiles() {
        assert_eq!(tile_grid(16, 8), (2, 1));
        assert_eq!(tile_grid(17, 15), (2, 1));
        assert_eq!(tile_count(7, 64), 0);
    }

    #[test]
    fn payload_len_matches_validation() {
        for n in [0usize, 1, 2, 9] {
            assert_eq!(validate_payload_len(payload_len(n)).unwrap(), n);
        }
        assert!(validate_payload_len(15).is_err());
        assert!(validate_payload_len(PALETTE_BYTES + 8).is_err());
    }
}
