use std::fmt::Display;

use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use super::error::CommandError;

type Content = String;

/// A command in its canonical RON form, tagged with the command's type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedCommand(pub Content);

impl NormalizedCommand {
    pub(crate) fn from_command<T: Serialize>(command: &T) -> Result<Self, CommandError> {
        ron::ser::to_string_pretty(command, PrettyConfig::new().struct_names(true))
            .map(Self)
            .map_err(|err| CommandError::Unserializable(err.to_string()))
    }

    pub(crate) fn to_command<T: DeserializeOwned>(&self) -> Option<Box<T>> {
        ron::from_str(&self.0).ok().map(Box::new)
    }
}

impl From<String> for NormalizedCommand {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for NormalizedCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
