// crates/ppu466-core/src/encode.rs
//
// Image -> Asset: palette quantization (exact match, ≤4 colors) plus
// bitplane packing.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::{debug, warn};

use crate::asset::Asset;
use crate::error::{AssetError, Result};
use crate::layout::{tile_grid, ASSET_EXTENSION, TILE_HEIGHT, TILE_WIDTH};
use crate::palette::{Color, PaletteBuilder};
use crate::tile::Tile;

pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|source| AssetError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgba8())
}

/// Quantize and pack an RGBA image.
///
/// Tiles are visited column by column (outer loop over tile x, inner over
/// tile y); inside a tile the outer loop is local x and the inner loop local y.
/// This order decides which color gets which palette slot.
pub fn encode_image(img: &RgbaImage) -> Result<Asset> {
    let (width, height) = img.dimensions();
    let (cols, rows) = tile_grid(width, height);

    if cols * TILE_WIDTH != width as usize || rows * TILE_HEIGHT != height as usize {
        warn!(
            "image {}x{} is not a multiple of {}x{}; dropping partial edge tiles",
            width, height, TILE_WIDTH, TILE_HEIGHT
        );
    }

    let mut palette = PaletteBuilder::new();
    let mut tiles = Vec::with_capacity(cols * rows);

    for tx in 0..cols {
        for ty in 0..rows {
            let mut tile = Tile::default();
            for x in 0..TILE_WIDTH {
                for y in 0..TILE_HEIGHT {
                    let px = (tx * TILE_WIDTH + x) as u32;
                    let py = (ty * TILE_HEIGHT + y) as u32;
                    let color = Color::from(*img.get_pixel(px, py));
                    let index = palette
                        .slot_for(color)
                        .ok_or(AssetError::PaletteOverflow { color, x: px, y: py })?;
                    tile.set_index(x, y, index);
                }
            }
            tiles.push(tile);
        }
    }

    debug!(
        "encoded {}x{} image: {} tiles, {} colors",
        width,
        height,
        tiles.len(),
        palette.len()
    );

    Ok(Asset {
        palette: palette.finish(),
        tiles,
    })
}

/// `<path without extension><ASSET_EXTENSION>`
pub fn output_path_for(path: &Path) -> PathBuf {
    let mut out = path.with_extension("").into_os_string();
    out.push(ASSET_EXTENSION);
    PathBuf::from(out)
}

/// Encode one image file and write its container next to it.
/// Nothing is written unless the whole image encodes.
pub fn convert_file(path: &Path) -> Result<PathBuf> {
    let img = load_image(path)?;
    let asset = encode_image(&img)?;
    let bytes = asset.to_container()?;

    let out = output_path_for(path);
    std::fs::write(&out, bytes).map_err(|source| AssetError::Io {
        path: out.clone(),
        source,
    })?;
    Ok(out)
}
