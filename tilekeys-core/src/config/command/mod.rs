mod layout;
mod next_layout;
mod reload_config;
mod shutdown;
mod spawn;
mod to_group;
mod to_screen;
mod window;

pub mod utils;

use std::process::Child;

use crate::errors::{Result, TileError};

pub use self::utils::{
    denormalize_function::DenormalizeCommandFunction, error::CommandError,
    normalized_command::NormalizedCommand,
};
pub use self::{
    layout::{Layout, LayoutOp},
    next_layout::NextLayout,
    reload_config::ReloadConfig,
    shutdown::Shutdown,
    spawn::Spawn,
    to_group::ToGroup,
    to_screen::ToScreen,
    window::{Window, WindowOp},
};

inventory::collect!(DenormalizeCommandFunction);

/// Who carries a command out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A named operation of the window manager itself.
    Internal,
    /// An external process started from a command line.
    Spawn,
}

pub trait Command {
    /// # Errors
    ///
    /// Errors if the command cannot be serialized.
    fn normalize(&self) -> std::result::Result<NormalizedCommand, CommandError>;

    fn denormalize(generalized: &NormalizedCommand) -> Option<Box<Self>>
    where
        Self: Sized;

    /// The call as the window manager's lazy API would spell it.
    fn describe(&self) -> String;

    fn kind(&self) -> Kind {
        Kind::Internal
    }

    /// Runs the command outside of the window manager.
    ///
    /// # Errors
    ///
    /// Internal commands always error with `NotSpawnable`.
    fn execute(&self) -> Result<Child> {
        Err(TileError::NotSpawnable(self.describe()))
    }
}

/// Finds the command kind that `normalized_command` was produced from.
///
/// # Errors
///
/// Errors with `UnmatchingCommand` when no registered kind accepts it.
pub fn denormalize(
    normalized_command: &NormalizedCommand,
) -> std::result::Result<Box<dyn Command>, CommandError> {
    for denormalizer in inventory::iter::<DenormalizeCommandFunction> {
        if let Some(denormalized_command) = (denormalizer.0)(normalized_command) {
            return Ok(denormalized_command);
        }
    }
    Err(CommandError::UnmatchingCommand)
}
