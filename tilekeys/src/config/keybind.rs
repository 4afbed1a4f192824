use serde::{Deserialize, Serialize};
use tilekeys_core::config::Command as _;
use tilekeys_core::config::Keybind as core_keybind;
use tilekeys_core::config::command::{self as command_mod, NormalizedCommand};
use tilekeys_core::config::modifier::{Modifiers, parse_modifiers};
use tilekeys_core::errors::{Result, TileError};

use super::{command::Command, key::Key};

/// Stands in for the configured default modifier in a modifier list.
pub const MOD_PLACEHOLDER: &str = "mod";

macro_rules! get_key {
    ($expr:expr $(,)?) => {
        match $expr {
            Key::Key(key) => key,
            Key::Keys(_) => return Err(TileError::SingleKeyNeeded),
        }
    };
}

macro_rules! get_keys {
    ($expr:expr $(,)?) => {
        match $expr {
            Key::Key(_) => return Err(TileError::MultipleKeysNeeded),
            Key::Keys(keys) => keys,
        }
    };
}

pub type Keybinds = Vec<Keybind>;

#[derive(Debug, PartialEq, Clone, Eq, Serialize, Deserialize)]
pub struct Keybind {
    pub command: Command,
    #[serde(default)]
    pub modifier: Vec<String>,
    pub key: Key,
    #[serde(default)]
    pub desc: Option<String>,
}

/// Resolves a modifier list, replacing [`MOD_PLACEHOLDER`] with
/// `default_modifier`.
///
/// # Errors
///
/// Errors on unknown modifier names.
pub fn expand_modifiers(names: &[String], default_modifier: &Modifiers) -> Result<Modifiers> {
    let mut modifiers = Modifiers::new();
    for name in names {
        if name == MOD_PLACEHOLDER {
            modifiers.extend(default_modifier.iter().copied());
        } else {
            modifiers.extend(parse_modifiers(std::slice::from_ref(name))?);
        }
    }
    Ok(modifiers)
}

/// Maps one configured keybind to the keybinds handed to the window
/// manager. `Spawns` fans out to one keybind per key.
///
/// # Errors
///
/// Errors when the key shape does not fit the command, a value is missing,
/// or a modifier is unknown.
pub fn try_from(kb: Keybind, default_modifier: &Modifiers) -> Result<Vec<core_keybind>> {
    let modifier = expand_modifiers(&kb.modifier, default_modifier)?;
    let command_key_pairs: Vec<(NormalizedCommand, String)> = match kb.command {
        Command::Spawns(values) if !values.is_empty() => {
            let keys = get_keys!(kb.key);
            if keys.len() != values.len() {
                return Err(TileError::NumberOfKeysDiffersFromValues);
            }
            if values.iter().any(|v| v.trim().is_empty()) {
                return Err(TileError::ValueNotFound);
            }
            values
                .iter()
                .zip(keys)
                .map(|(v, k)| -> Result<(NormalizedCommand, String)> {
                    Ok((command_mod::Spawn::new(v).normalize()?, k))
                })
                .collect::<Result<_>>()?
        }
        Command::Spawns(_) => return Err(TileError::ValuesNotFound),
        command => {
            let key = get_key!(kb.key);
            vec![(command.normalize_single()?, key)]
        }
    };
    command_key_pairs
        .into_iter()
        .map(|(c, k)| core_keybind::new(c, modifier.clone(), k, kb.desc.clone()))
        .collect()
}
