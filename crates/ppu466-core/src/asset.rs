// crates/ppu466-core/src/asset.rs

use image::RgbaImage;

use crate::error::{AssetError, Result};
use crate::layout::{payload_len, validate_payload_len, MAGIC, PALETTE_BYTES, TILE_BYTES, TILE_HEIGHT, TILE_WIDTH};
use crate::palette::{Color, Palette};
use crate::tile::Tile;

/// One encoded image: its palette and its tiles in encoder scan order
/// (tile columns left to right, each column top to bottom).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Asset {
    pub palette: Palette,
    pub tiles: Vec<Tile>,
}

impl Asset {
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Payload bytes: palette, then each tile's bit0 and bit1 rows.
    pub fn to_payload(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(payload_len(self.tiles.len()));
        out.extend_from_slice(&self.palette.to_bytes());
        for t in &self.tiles {
            out.extend_from_slice(&t.to_bytes());
        }
        out
    }

    pub fn from_payload(payload: &[u8]) -> Result<Self> {
        let count = validate_payload_len(payload.len())?;
        let palette = Palette::from_bytes(&payload[..PALETTE_BYTES])?;
        let mut tiles = Vec::with_capacity(count);
        for rec in payload[PALETTE_BYTES..].chunks_exact(TILE_BYTES) {
            tiles.push(Tile::from_bytes(rec)?);
        }
        Ok(Asset { palette, tiles })
    }

    /// Full container: one `MAGIC` chunk around the payload.
    pub fn to_container(&self) -> Result<Vec<u8>> {
        Ok(ppu466_chunk::encode_chunk(MAGIC, &self.to_payload())?)
    }

    /// Parse a container. Bytes after the chunk are ignored.
    pub fn from_container(bytes: &[u8]) -> Result<Self> {
        let (payload, _rest) = ppu466_chunk::split_chunk(bytes, MAGIC)?;
        Self::from_payload(payload)
    }

    #[inline]
    pub fn pixel(&self, tile: usize, x: usize, y: usize) -> Color {
        self.palette.color(self.tiles[tile].index_at(x, y))
    }

    /// Lay the tiles back out as an image `tile_rows` tiles tall, filling
    /// columns top to bottom the way the encoder scanned them.
    pub fn to_image(&self, tile_rows: usize) -> Result<RgbaImage> {
        if tile_rows == 0 {
            return Err(AssetError::Layout("tile_rows must be > 0".into()));
        }
        if self.tiles.len() % tile_rows != 0 {
            return Err(AssetError::Layout(format!(
                "{} tiles do not fill whole columns of {} rows",
                self.tiles.len(),
                tile_rows
            )));
        }

        let cols = self.tiles.len() / tile_rows;
        let width = (cols * TILE_WIDTH) as u32;
        let height = (tile_rows * TILE_HEIGHT) as u32;

        let mut img = RgbaImage::new(width, height);
        for (i, tile) in self.tiles.iter().enumerate() {
            let ox = (i / tile_rows) * TILE_WIDTH;
            let oy = (i % tile_rows) * TILE_HEIGHT;
            for (y, line) in tile.indices().iter().enumerate() {
                for (x, &idx) in line.iter().enumerate() {
                    img.put_pixel((ox + x) as u32, (oy + y) as u32, self.palette.color(idx).into());
                }
            }
        }
        Ok(img)
    }
}
