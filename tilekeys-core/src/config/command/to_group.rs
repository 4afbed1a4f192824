use serde::{Deserialize, Serialize};

use super::{Command, CommandError, DenormalizeCommandFunction, NormalizedCommand};

inventory::submit! {DenormalizeCommandFunction::new::<ToGroup>()}

/// Moves the focused window to `group`, following it there when
/// `switch_group` is set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToGroup {
    pub group: String,
    #[serde(default)]
    pub switch_group: bool,
}

impl ToGroup {
    pub fn new<T: ToString>(group: T, switch_group: bool) -> Self {
        Self {
            group: group.to_string(),
            switch_group,
        }
    }
}

impl Command for ToGroup {
    fn normalize(&self) -> Result<NormalizedCommand, CommandError> {
        NormalizedCommand::from_command(self)
    }

    fn denormalize(generalized: &NormalizedCommand) -> Option<Box<Self>> {
        generalized.to_command()
    }

    fn describe(&self) -> String {
        format!(
            "window.togroup({:?}, switch_group={})",
            self.group, self.switch_group
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Command;
    use crate::config::command::ToScreen;

    use super::ToGroup;

    #[test]
    fn normalize_process() {
        let command = ToGroup::new("󰣇", true);

        let normalized = command.normalize().unwrap();
        let denormalized = ToGroup::denormalize(&normalized).unwrap();

        assert_eq!(Box::new(command.clone()), denormalized);
    }

    #[test]
    fn does_not_denormalize_other_group_commands() {
        let normalized = ToScreen::new("www").normalize().unwrap();
        assert!(ToGroup::denormalize(&normalized).is_none());
    }
}
