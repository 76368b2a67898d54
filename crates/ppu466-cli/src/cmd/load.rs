use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use ppu466_core::{AssetRegistry, LoaderConfig};

#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Content root containing assets/
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Asset names in load order (repeatable). Defaults to the game's list.
    #[arg(long = "asset")]
    pub assets: Vec<String>,
}

pub fn run(args: LoadArgs) -> anyhow::Result<()> {
    let cfg = if args.assets.is_empty() {
        LoaderConfig::with_root(&args.root)
    } else {
        LoaderConfig::new(&args.root, args.assets)
    };

    let reg = AssetRegistry::load_all(&cfg)
        .with_context(|| format!("load assets under {}", cfg.content_root.display()))?;

    let tables = reg.tables();
    eprintln!("--- load ---");
    eprintln!("palettes = {}", tables.palette_table.len());
    eprintln!("tiles    = {}", tables.tile_table.len());
    for span in reg.spans() {
        eprintln!(
            "{:<12} palette={} tiles={}..{}",
            span.name,
            span.palette_index,
            span.first_tile,
            span.first_tile + span.tile_count
        );
    }
    Ok(())
}
