// crates/ppu466-cli/src/cmd/mod.rs

pub mod convert;
pub mod inspect;
pub mod load;
pub mod preview;
