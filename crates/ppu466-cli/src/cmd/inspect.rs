use std::path::PathBuf;

use clap::Args;
use ppu466_core::layout::{payload_len, MAGIC};

use crate::io::asset_file;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input .p466 path
    #[arg(long)]
    pub r#in: PathBuf,

    /// Also print every tile as rows of palette indices (top row first)
    #[arg(long, default_value_t = false)]
    pub dump_tiles: bool,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let (payload, asset) = asset_file::read_asset(&args.r#in)?;

    eprintln!("--- inspect ---");
    eprintln!("file          = {}", args.r#in.display());
    eprintln!("magic         = {}", String::from_utf8_lossy(MAGIC));
    eprintln!("payload_bytes = {}", payload.len());
    eprintln!("tile_count    = {}", asset.tile_count());
    eprintln!("payload_crc32 = {:08x}", asset_file::crc32(&payload));
    debug_assert_eq!(payload.len(), payload_len(asset.tile_count()));

    eprintln!("--- palette ---");
    for (i, c) in asset.palette.0.iter().enumerate() {
        eprintln!("slot {}        = {}", i, c);
    }

    if args.dump_tiles {
        for (i, tile) in asset.tiles.iter().enumerate() {
            eprintln!("--- tile {} ---", i);
            for line in tile.indices() {
                let s: String = line.iter().map(|&p| char::from(b'0' + p)).collect();
                eprintln!("{}", s);
            }
        }
    }

    Ok(())
}
