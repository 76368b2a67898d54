// crates/ppu466-cli/src/lib.rs

pub mod cmd;
pub mod io;

/// Log to stderr; `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}
