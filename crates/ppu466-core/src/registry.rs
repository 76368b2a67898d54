// crates/ppu466-core/src/registry.rs
//
// Startup loader: decodes asset containers into the palette/tile tables the
// renderer reads. Loading is single-threaded and happens once, in the fixed
// asset order; any failure is fatal to startup.

use log::{debug, info};

use crate::asset::Asset;
use crate::config::LoaderConfig;
use crate::error::{AssetError, Result};
use crate::layout::{PALETTE_TABLE_LEN, TILE_TABLE_LEN};
use crate::palette::Palette;
use crate::tile::Tile;

/// Tables consumed by the renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PpuTables {
    /// One palette per loaded asset, in load order.
    pub palette_table: Vec<Palette>,
    /// Tiles of every loaded asset, appended in load order.
    pub tile_table: Vec<Tile>,
}

/// Where one asset landed in the tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetSpan {
    pub name: String,
    pub palette_index: usize,
    pub first_tile: usize,
    pub tile_count: usize,
}

impl AssetSpan {
    pub fn tile_range(&self) -> std::ops::Range<usize> {
        self.first_tile..self.first_tile + self.tile_count
    }

    /// Absolute tile-table index of this asset's `local`-th tile.
    pub fn tile_index(&self, local: usize) -> Option<usize> {
        (local < self.tile_count).then(|| self.first_tile + local)
    }
}

#[derive(Clone, Debug, Default)]
pub struct AssetRegistry {
    tables: PpuTables,
    spans: Vec<AssetSpan>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every configured asset in order. Stops at the first failure.
    pub fn load_all(config: &LoaderConfig) -> Result<Self> {
        let mut reg = Self::new();
        for name in &config.asset_names {
            let path = config.asset_path(name);
            let bytes = std::fs::read(&path).map_err(|source| AssetError::Io {
                path: path.clone(),
                source,
            })?;
            reg.load_bytes(name, &bytes)?;
        }
        info!(
            "loaded {} assets: {} palettes, {} tiles",
            reg.spans.len(),
            reg.tables.palette_table.len(),
            reg.tables.tile_table.len()
        );
        Ok(reg)
    }

    /// Decode one container and append it.
    pub fn load_bytes(&mut self, name: &str, container: &[u8]) -> Result<&AssetSpan> {
        let asset = Asset::from_container(container)?;
        self.load_asset(name, &asset)
    }

    /// Append an already decoded asset. Capacity is checked before anything
    /// is written, so a failing asset leaves the tables unchanged.
    pub fn load_asset(&mut self, name: &str, asset: &Asset) -> Result<&AssetSpan> {
        if self.tables.palette_table.len() >= PALETTE_TABLE_LEN {
            return Err(AssetError::PaletteTableFull {
                capacity: PALETTE_TABLE_LEN,
            });
        }
        let first_tile = self.tile_cursor();
        let requested = first_tile + asset.tiles.len();
        if requested > TILE_TABLE_LEN {
            return Err(AssetError::TileTableFull {
                capacity: TILE_TABLE_LEN,
                requested,
            });
        }

        let palette_index = self.tables.palette_table.len();
        self.tables.palette_table.push(asset.palette);
        self.tables.tile_table.extend_from_slice(&asset.tiles);

        debug!(
            "asset {name}: palette {palette_index}, tiles {first_tile}..{requested}"
        );

        self.spans.push(AssetSpan {
            name: name.to_string(),
            palette_index,
            first_tile,
            tile_count: asset.tiles.len(),
        });
        Ok(&self.spans[self.spans.len() - 1])
    }

    /// Next free tile-table index.
    pub fn tile_cursor(&self) -> usize {
        self.tables.tile_table.len()
    }

    pub fn tables(&self) -> &PpuTables {
        &self.tables
    }

    pub fn into_tables(self) -> PpuTables {
        self.tables
    }

    pub fn spans(&self) -> &[AssetSpan] {
        &self.spans
    }

    pub fn span(&self, name: &str) -> Option<&AssetSpan> {
        self.spans.iter().find(|s| s.name == name)
    }
}
