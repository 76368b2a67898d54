// crates/ppu466-cli/src/io/asset_file.rs

use std::path::Path;

use anyhow::Context;
use ppu466_core::layout::MAGIC;
use ppu466_core::Asset;

/// Read a .p466 file and return (payload bytes, decoded asset).
pub fn read_asset(path: &Path) -> anyhow::Result<(Vec<u8>, Asset)> {
    let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let (payload, _rest) = ppu466_chunk::split_chunk(&bytes, MAGIC)
        .with_context(|| format!("read chunk {}", path.display()))?;
    let asset = Asset::from_payload(payload).with_context(|| format!("decode asset {}", path.display()))?;
    Ok((payload.to_vec(), asset))
}

pub fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}
