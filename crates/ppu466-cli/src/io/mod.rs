// crates/ppu466-cli/src/io/mod.rs

pub mod asset_file;
