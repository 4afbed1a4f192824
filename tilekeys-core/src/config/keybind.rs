use serde::{Deserialize, Serialize};

use super::command::NormalizedCommand;
use super::modifier::{Modifiers, parse_modifiers};
use crate::errors::{Result, TileError};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Keybind {
    pub command: NormalizedCommand,
    pub modifier: Modifiers,
    pub key: String,
    #[serde(default)]
    pub desc: Option<String>,
}

impl Keybind {
    /// # Errors
    ///
    /// Errors when the key symbol is empty.
    pub fn new(
        command: NormalizedCommand,
        modifier: Modifiers,
        key: impl Into<String>,
        desc: Option<String>,
    ) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(TileError::EmptyKey);
        }
        Ok(Self {
            command,
            modifier,
            key,
            desc,
        })
    }

    #[must_use]
    pub fn matches(&self, modifier: &Modifiers, key: &str) -> bool {
        self.key == key && &self.modifier == modifier
    }

    /// The combination as typed on the command line, e.g. `mod4+shift+h`.
    #[must_use]
    pub fn combo(&self) -> String {
        self.modifier
            .iter()
            .map(|m| m.as_str())
            .chain(std::iter::once(self.key.as_str()))
            .collect::<Vec<_>>()
            .join("+")
    }
}

/// Splits `mod4+shift+Return` into its modifier set and key symbol.
///
/// # Errors
///
/// Errors when the key part is missing or a modifier is unknown.
pub fn parse_combo(combo: &str) -> Result<(Modifiers, String)> {
    let (mods, key) = match combo.rsplit_once('+') {
        Some((mods, key)) => (mods.split('+').collect::<Vec<_>>(), key),
        None => (Vec::new(), combo),
    };
    let key = key.trim();
    if key.is_empty() || mods.iter().any(|m| m.trim().is_empty()) {
        return Err(TileError::InvalidCombo(combo.to_owned()));
    }
    let mods: Vec<&str> = mods.iter().map(|m| m.trim()).collect();
    Ok((parse_modifiers(&mods)?, key.to_owned()))
}
