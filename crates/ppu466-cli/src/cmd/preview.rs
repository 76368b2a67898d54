use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::io::asset_file;

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Input .p466 path
    #[arg(long)]
    pub r#in: PathBuf,

    /// Output PNG path
    #[arg(long)]
    pub out: PathBuf,

    /// Height of the tile grid in tiles; the source sheet's height / 8
    /// reproduces it exactly
    #[arg(long, default_value_t = 1)]
    pub rows: usize,
}

pub fn run(args: PreviewArgs) -> anyhow::Result<()> {
    let (_payload, asset) = asset_file::read_asset(&args.r#in)?;
    let img = asset
        .to_image(args.rows)
        .with_context(|| format!("lay out {} tiles in {} rows", asset.tile_count(), args.rows))?;
    img.save(&args.out)
        .with_context(|| format!("write {}", args.out.display()))?;

    eprintln!(
        "preview ok: out={} size={}x{} tiles={}",
        args.out.display(),
        img.width(),
        img.height(),
        asset.tile_count()
    );
    Ok(())
}
