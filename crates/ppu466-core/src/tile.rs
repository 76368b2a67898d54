// crates/ppu466-core/src/tile.rs

use crate::error::{AssetError, Result};
use crate::layout::{TILE_BYTES, TILE_HEIGHT, TILE_WIDTH};

/// An 8×8 tile as two bit-planes, one byte per row.
///
/// For the pixel at local (x, y), where y = 0 is the TOP row of the source
/// image, the palette index is
///
/// ```text
/// row = TILE_HEIGHT - y - 1
/// idx = ((bit1[row] >> x) & 1) << 1 | ((bit0[row] >> x) & 1)
/// ```
///
/// Rows are stored bottom-to-top (row 0 is the bottom of the tile) and bits
/// run from x = 0 at bit 0. The renderer uses the same convention, so flipping
/// it here makes every sprite draw upside-down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tile {
    pub bit0: [u8; TILE_HEIGHT],
    pub bit1: [u8; TILE_HEIGHT],
}

impl Tile {
    #[inline]
    fn row(y: usize) -> usize {
        debug_assert!(y < TILE_HEIGHT);
        TILE_HEIGHT - y - 1
    }

    /// OR the 2-bit `index` into (x, y). The tile is expected to start zeroed.
    #[inline]
    pub fn set_index(&mut self, x: usize, y: usize, index: u8) {
        debug_assert!(x < TILE_WIDTH);
        let row = Self::row(y);
        self.bit0[row] |= (index & 1) << x;
        self.bit1[row] |= ((index >> 1) & 1) << x;
    }

    #[inline]
    pub fn index_at(&self, x: usize, y: usize) -> u8 {
        debug_assert!(x < TILE_WIDTH);
        let row = Self::row(y);
        let lo = (self.bit0[row] >> x) & 1;
        let hi = (self.bit1[row] >> x) & 1;
        (hi << 1) | lo
    }

    /// Palette indices in image order: `out[y][x]`, y = 0 at the top.
    pub fn indices(&self) -> [[u8; TILE_WIDTH]; TILE_HEIGHT] {
        let mut out = [[0u8; TILE_WIDTH]; TILE_HEIGHT];
        for (y, line) in out.iter_mut().enumerate() {
            for (x, px) in line.iter_mut().enumerate() {
                *px = self.index_at(x, y);
            }
        }
        out
    }

    pub fn to_bytes(&self) -> [u8; TILE_BYTES] {
        let mut out = [0u8; TILE_BYTES];
        out[..TILE_HEIGHT].copy_from_slice(&self.bit0);
        out[TILE_HEIGHT..].copy_from_slice(&self.bit1);
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != TILE_BYTES {
            return Err(AssetError::TruncatedAsset(format!(
                "tile record needs {TILE_BYTES} bytes, got {}",
                bytes.len()
            )));
        }
        let mut t = Tile::default();
        t.bit0.copy_from_slice(&bytes[..TILE_HEIGHT]);
        t.bit1.copy_from_slice(&bytes[TILE_HEIGHT..]);
        Ok(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_left_pixel_lands_in_last_row_bit_zero() {
        let mut t = Tile::default();
        t.set_index(0, 0, 3);
        assert_eq!(t.bit0, [0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(t.bit1, [0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn bottom_right_pixel_lands_in_first_row_high_bit() {
        let mut t = Tile::default();
        t.set_index(7, 7, 2);
        assert_eq!(t.bit0, [0; 8]);
        assert_eq!(t.bit1, [0x80, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(t.index_at(7, 7), 2);
    }

    #[test]
    fn indices_follow_image_order() {
        let mut t = Tile::default();
        for y in 0..TILE_HEIGHT {
            for x in 0..TILE_WIDTH {
                t.set_index(x, y, ((x + y) % 4) as u8);
            }
        }
        let idx = t.indices();
        assert_eq!(idx[0][0], 0);
        assert_eq!(idx[0][3], 3);
        assert_eq!(idx[2][3], 1);
        assert_eq!(Tile::from_bytes(&t.to_bytes()).unwrap(), t);
    }
}
