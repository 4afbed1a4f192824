use thiserror::Error;

use crate::config::command::utils::error::CommandError;

pub type Result<T> = std::result::Result<T, TileError>;
pub type Error = std::result::Result<(), TileError>;

#[derive(Debug, Error)]
pub enum TileError {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),
    #[error("Ron error: {0}.")]
    RonError(#[from] ron::Error),
    #[error("Ron parse error: {0}.")]
    RonSpannedError(#[from] ron::error::SpannedError),
    #[error("Command error: {0}.")]
    CommandError(#[from] CommandError),

    #[error("Keybind needs a single key.")]
    SingleKeyNeeded,
    #[error("Keybind needs a list of keys.")]
    MultipleKeysNeeded,
    #[error("Number of keys differs from number of values.")]
    NumberOfKeysDiffersFromValues,
    #[error("No value set for execution.")]
    ValueNotFound,
    #[error("No values set for execution.")]
    ValuesNotFound,
    #[error("Only a single command can be bound here.")]
    SingleCommandNeeded,
    #[error("Unknown modifier `{0}`.")]
    UnknownModifier(String),
    #[error("No key found for keybind.")]
    EmptyKey,
    #[error("No program given to spawn.")]
    EmptySpawn,
    #[error("No closing quotation in `{0}`.")]
    UnterminatedQuote(String),
    #[error("No escaped character at the end of `{0}`.")]
    DanglingEscape(String),
    #[error("`{0}` is carried out by the window manager and cannot be run here.")]
    NotSpawnable(String),
    #[error("{count} groups configured, only {max} can be reached by number.")]
    TooManyGroups { count: usize, max: usize },
    #[error("Group names must not be empty.")]
    EmptyGroupName,
    #[error("Group `{0}` is declared more than once.")]
    DuplicateGroup(String),
    #[error("No group named `{0}`.")]
    UnknownGroup(String),
    #[error("Invalid colour `{0}`.")]
    InvalidColour(String),
    #[error("Opacity {0} is outside of 0.0..=1.0.")]
    InvalidOpacity(f32),
    #[error("Invalid layout {0}.")]
    InvalidLayout(String),
    #[error("At least one layout is required.")]
    NoLayouts,
    #[error("Invalid key combination `{0}`.")]
    InvalidCombo(String),
    #[error("No binding for `{0}`.")]
    BindingNotFound(String),
}
