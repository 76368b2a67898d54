// crates/ppu466-cli/src/main.rs

use clap::{Parser, Subcommand};

use ppu466_cli::cmd;

#[derive(Parser)]
#[command(name = "ppu466")]
#[command(about = "PPU466 tile/palette asset tools", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert images into .p466 tile assets (one output per input)
    Convert(cmd::convert::ConvertArgs),

    /// Inspect a .p466 asset (magic, palette, tile count, crc32)
    Inspect(cmd::inspect::InspectArgs),

    /// Run the startup loader over an asset list and report the table layout
    Load(cmd::load::LoadArgs),

    /// Render a .p466 asset back into a PNG
    Preview(cmd::preview::PreviewArgs),
}

fn main() -> anyhow::Result<()> {
    ppu466_cli::init_logging();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Convert(args) => cmd::convert::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Load(args) => cmd::load::run(args),
        Commands::Preview(args) => cmd::preview::run(args),
    }
}
