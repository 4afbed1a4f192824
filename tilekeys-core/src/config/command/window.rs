use serde::{Deserialize, Serialize};

use super::{Command, CommandError, DenormalizeCommandFunction, NormalizedCommand};

inventory::submit! {DenormalizeCommandFunction::new::<Window>()}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowOp {
    ToggleFullscreen,
    ToggleFloating,
    Kill,
    BringToFront,
    SetPositionFloating,
    SetSizeFloating,
    GetPosition,
    GetSize,
}

impl WindowOp {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ToggleFullscreen => "toggle_fullscreen",
            Self::ToggleFloating => "toggle_floating",
            Self::Kill => "kill",
            Self::BringToFront => "bring_to_front",
            Self::SetPositionFloating => "set_position_floating",
            Self::SetSizeFloating => "set_size_floating",
            Self::GetPosition => "get_position",
            Self::GetSize => "get_size",
        }
    }
}

/// An operation on the focused window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window(pub WindowOp);

impl Command for Window {
    fn normalize(&self) -> Result<NormalizedCommand, CommandError> {
        NormalizedCommand::from_command(self)
    }

    fn denormalize(generalized: &NormalizedCommand) -> Option<Box<Self>> {
        generalized.to_command()
    }

    fn describe(&self) -> String {
        format!("window.{}()", self.0.name())
    }
}
