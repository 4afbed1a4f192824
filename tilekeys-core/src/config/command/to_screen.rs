use serde::{Deserialize, Serialize};

use super::{Command, CommandError, DenormalizeCommandFunction, NormalizedCommand};

inventory::submit! {DenormalizeCommandFunction::new::<ToScreen>()}

/// Shows `group` on the focused screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToScreen {
    pub group: String,
}

impl ToScreen {
    pub fn new<T: ToString>(group: T) -> Self {
        Self {
            group: group.to_string(),
        }
    }
}

impl Command for ToScreen {
    fn normalize(&self) -> Result<NormalizedCommand, CommandError> {
        NormalizedCommand::from_command(self)
    }

    fn denormalize(generalized: &NormalizedCommand) -> Option<Box<Self>> {
        generalized.to_command()
    }

    fn describe(&self) -> String {
        format!("group[{:?}].toscreen()", self.group)
    }
}
