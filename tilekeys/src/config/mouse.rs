use serde::{Deserialize, Serialize};
use tilekeys_core::config::Modifiers;
use tilekeys_core::config::mouse::{Button, MouseBinding};
use tilekeys_core::errors::Result;

use super::{command::Command, keybind::expand_modifiers};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum MouseBind {
    Drag {
        #[serde(default)]
        modifier: Vec<String>,
        button: Button,
        command: Command,
        #[serde(default)]
        start: Option<Command>,
    },
    Click {
        #[serde(default)]
        modifier: Vec<String>,
        button: Button,
        command: Command,
    },
}

impl MouseBind {
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        let (command, start) = match self {
            Self::Drag { command, start, .. } => (command, start.as_ref()),
            Self::Click { command, .. } => (command, None),
        };
        std::iter::once(command).chain(start)
    }
}

/// # Errors
///
/// Errors on unknown modifiers or commands that do not map to a single
/// core command.
pub fn try_from(bind: &MouseBind, default_modifier: &Modifiers) -> Result<MouseBinding> {
    Ok(match bind {
        MouseBind::Drag {
            modifier,
            button,
            command,
            start,
        } => MouseBinding::Drag {
            modifier: expand_modifiers(modifier, default_modifier)?,
            button: *button,
            command: command.normalize_single()?,
            start: start.as_ref().map(Command::normalize_single).transpose()?,
        },
        MouseBind::Click {
            modifier,
            button,
            command,
        } => MouseBinding::Click {
            modifier: expand_modifiers(modifier, default_modifier)?,
            button: *button,
            command: command.normalize_single()?,
        },
    })
}
