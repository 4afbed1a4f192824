use serde::{Deserialize, Serialize};

use super::{Command, CommandError, DenormalizeCommandFunction, NormalizedCommand};

inventory::submit! {DenormalizeCommandFunction::new::<Layout>()}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutOp {
    Left,
    Right,
    Down,
    Up,
    ShuffleLeft,
    ShuffleRight,
    ShuffleDown,
    ShuffleUp,
    GrowLeft,
    GrowRight,
    GrowDown,
    GrowUp,
    Normalize,
    ToggleSplit,
    Next,
    Previous,
}

impl LayoutOp {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Down => "down",
            Self::Up => "up",
            Self::ShuffleLeft => "shuffle_left",
            Self::ShuffleRight => "shuffle_right",
            Self::ShuffleDown => "shuffle_down",
            Self::ShuffleUp => "shuffle_up",
            Self::GrowLeft => "grow_left",
            Self::GrowRight => "grow_right",
            Self::GrowDown => "grow_down",
            Self::GrowUp => "grow_up",
            Self::Normalize => "normalize",
            Self::ToggleSplit => "toggle_split",
            Self::Next => "next",
            Self::Previous => "previous",
        }
    }
}

/// An operation on the layout of the current group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Layout(pub LayoutOp);

impl Command for Layout {
    fn normalize(&self) -> Result<NormalizedCommand, CommandError> {
        NormalizedCommand::from_command(self)
    }

    fn denormalize(generalized: &NormalizedCommand) -> Option<Box<Self>> {
        generalized.to_command()
    }

    fn describe(&self) -> String {
        format!("layout.{}()", self.0.name())
    }
}
