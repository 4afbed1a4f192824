use serde::{Deserialize, Serialize};

use super::{Command, CommandError, DenormalizeCommandFunction, NormalizedCommand};

inventory::submit! {DenormalizeCommandFunction::new::<Shutdown>()}

/// Stops the window manager.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Shutdown;

impl Shutdown {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Command for Shutdown {
    fn normalize(&self) -> Result<NormalizedCommand, CommandError> {
        NormalizedCommand::from_command(self)
    }

    fn denormalize(generalized: &NormalizedCommand) -> Option<Box<Self>> {
        generalized.to_command()
    }

    fn describe(&self) -> String {
        "shutdown()".to_owned()
    }
}
