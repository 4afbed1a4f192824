use serde::{Deserialize, Serialize};

use super::command::NormalizedCommand;
use super::modifier::Modifiers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Button1,
    Button2,
    Button3,
    Button4,
    Button5,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseBinding {
    /// Runs `command` for every motion event while the button is held,
    /// after `start` ran once on press.
    Drag {
        modifier: Modifiers,
        button: Button,
        command: NormalizedCommand,
        start: Option<NormalizedCommand>,
    },
    Click {
        modifier: Modifiers,
        button: Button,
        command: NormalizedCommand,
    },
}

impl MouseBinding {
    #[must_use]
    pub fn button(&self) -> Button {
        match self {
            Self::Drag { button, .. } | Self::Click { button, .. } => *button,
        }
    }

    #[must_use]
    pub fn modifier(&self) -> &Modifiers {
        match self {
            Self::Drag { modifier, .. } | Self::Click { modifier, .. } => modifier,
        }
    }
}
