use serde::{Deserialize, Serialize};
use tilekeys_core::config::Command as _;
use tilekeys_core::config::command::{
    self as command_mod, LayoutOp, NormalizedCommand, WindowOp,
};
use tilekeys_core::errors::{Result, TileError};

/// A command as written in the config file.
#[derive(Debug, Eq, PartialEq, Clone, Serialize, Deserialize)]
pub enum Command {
    Spawn(String),
    /// One program per key of a `Keys` list.
    Spawns(Vec<String>),
    Layout(LayoutOp),
    Window(WindowOp),
    ToScreen(String),
    ToGroup {
        group: String,
        #[serde(default)]
        switch_group: bool,
    },
    NextLayout,
    ReloadConfig,
    Shutdown,
}

impl Command {
    /// The group a command refers to, if any.
    pub fn group(&self) -> Option<&str> {
        match self {
            Self::ToScreen(group) | Self::ToGroup { group, .. } => Some(group.as_str()),
            _ => None,
        }
    }

    /// Normalizes any command that maps to exactly one core command.
    ///
    /// # Errors
    ///
    /// `Spawns` needs keys to fan out to and errors with
    /// `SingleCommandNeeded`; an empty `Spawn` errors with `ValueNotFound`.
    pub fn normalize_single(&self) -> Result<NormalizedCommand> {
        let normalized = match self {
            Self::Spawn(value) if !value.trim().is_empty() => {
                command_mod::Spawn::new(value).normalize()
            }
            Self::Spawn(_) => return Err(TileError::ValueNotFound),
            Self::Spawns(_) => return Err(TileError::SingleCommandNeeded),
            Self::Layout(op) => command_mod::Layout(*op).normalize(),
            Self::Window(op) => command_mod::Window(*op).normalize(),
            Self::ToScreen(group) => command_mod::ToScreen::new(group).normalize(),
            Self::ToGroup {
                group,
                switch_group,
            } => command_mod::ToGroup::new(group, *switch_group).normalize(),
            Self::NextLayout => command_mod::NextLayout::new().normalize(),
            Self::ReloadConfig => command_mod::ReloadConfig::new().normalize(),
            Self::Shutdown => command_mod::Shutdown::new().normalize(),
        };
        Ok(normalized?)
    }
}
