use serde::{Deserialize, Serialize};

use super::{Command, CommandError, DenormalizeCommandFunction, NormalizedCommand};

inventory::submit! {DenormalizeCommandFunction::new::<ReloadConfig>()}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ReloadConfig;

impl ReloadConfig {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Command for ReloadConfig {
    fn normalize(&self) -> Result<NormalizedCommand, CommandError> {
        NormalizedCommand::from_command(self)
    }

    fn denormalize(generalized: &NormalizedCommand) -> Option<Box<Self>> {
        generalized.to_command()
    }

    fn describe(&self) -> String {
        "reload_config()".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Command;
    use crate::config::command::Shutdown;

    use super::ReloadConfig;

    #[test]
    fn normalize_process() {
        let command = ReloadConfig::new();

        let normalized = command.normalize().unwrap();
        let denormalized = ReloadConfig::denormalize(&normalized).unwrap();

        assert_eq!(
            Box::new(command.clone()),
            denormalized,
            "{:?}, {:?}",
            normalized,
            denormalized,
        );
        assert!(Shutdown::denormalize(&normalized).is_none());
    }
}
