use std::path::PathBuf;

use clap::Args;
use log::{error, info};
use ppu466_core::encode::convert_file;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Images to convert; each writes <path without extension>.p466
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConvertReport {
    /// (input, output)
    pub converted: Vec<(PathBuf, PathBuf)>,
    /// (input, error message)
    pub failed: Vec<(PathBuf, String)>,
}

/// Convert every path independently. A failing file is logged and skipped;
/// it never stops the batch.
pub fn convert_paths(paths: &[PathBuf]) -> ConvertReport {
    let mut rep = ConvertReport::default();
    for path in paths {
        info!("loading sheet at {}", path.display());
        match convert_file(path) {
            Ok(out) => {
                info!("wrote {}", out.display());
                rep.converted.push((path.clone(), out));
            }
            Err(e) => {
                error!("{}: {}", path.display(), e);
                rep.failed.push((path.clone(), e.to_string()));
            }
        }
    }
    rep
}

pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let rep = convert_paths(&args.paths);
    eprintln!(
        "convert done: converted={} failed={}",
        rep.converted.len(),
        rep.failed.len()
    );
    Ok(())
}
