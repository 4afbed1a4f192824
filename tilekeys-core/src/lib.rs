
pub mod config;
pub mod errors;
pub mod session;

/// The directory name for xdg
pub const TILEKEYS_DIR_NAME: &str = "tilekeys";
