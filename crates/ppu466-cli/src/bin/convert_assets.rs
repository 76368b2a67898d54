use anyhow::Result;
use clap::Parser;

use ppu466_cli::cmd::convert::{convert_paths, ConvertArgs};

/// Convert each image into `<name>.p466`. Failures are logged and skipped.
#[derive(Parser, Debug)]
#[command(name = "convert-assets")]
struct Args {
    #[command(flatten)]
    convert: ConvertArgs,
}

fn main() -> Result<()> {
    ppu466_cli::init_logging();
    let a = Args::parse();

    let rep = convert_paths(&a.convert.paths);
    eprintln!("CONVERTED={}", rep.converted.len());
    eprintln!("FAILED={}", rep.failed.len());

    Ok(())
}
