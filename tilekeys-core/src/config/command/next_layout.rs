use serde::{Deserialize, Serialize};

use super::{Command, CommandError, DenormalizeCommandFunction, NormalizedCommand};

inventory::submit! {DenormalizeCommandFunction::new::<NextLayout>()}

/// Cycles to the next layout of the current group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct NextLayout;

impl NextLayout {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Command for NextLayout {
    fn normalize(&self) -> Result<NormalizedCommand, CommandError> {
        NormalizedCommand::from_command(self)
    }

    fn denormalize(generalized: &NormalizedCommand) -> Option<Box<Self>> {
        generalized.to_command()
    }

    fn describe(&self) -> String {
        "next_layout()".to_owned()
    }
}
