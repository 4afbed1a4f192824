use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::command::{Command, ToGroup, ToScreen};
use super::keybind::Keybind;
use super::modifier::{Modifier, Modifiers};
use crate::errors::{Result, TileError};

/// Groups past this count would need a two digit key.
pub const MAX_NUMBERED_GROUPS: usize = 9;

/// A named workspace. `index` is the 1-based position in the group list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub index: usize,
}

impl Group {
    /// The number key that reaches this group.
    #[must_use]
    pub fn key(&self) -> String {
        self.index.to_string()
    }
}

/// Builds groups in list order.
///
/// # Errors
///
/// Errors when a name is empty or appears twice.
pub fn groups_from_names<S: AsRef<str>>(names: &[S]) -> Result<Vec<Group>> {
    let mut seen = HashSet::new();
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let name = name.as_ref();
            if name.is_empty() {
                return Err(TileError::EmptyGroupName);
            }
            if !seen.insert(name) {
                return Err(TileError::DuplicateGroup(name.to_owned()));
            }
            Ok(Group {
                name: name.to_owned(),
                index: i + 1,
            })
        })
        .collect()
}

/// Derives the number key bindings for a list of groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provisioner {
    pub modifier: Modifiers,
    /// Whether moving a window to a group also switches to that group.
    pub switch_group: bool,
}

impl Provisioner {
    #[must_use]
    pub fn new(modifier: Modifiers) -> Self {
        Self {
            modifier,
            switch_group: true,
        }
    }

    #[must_use]
    pub fn switch_group(mut self, switch_group: bool) -> Self {
        self.switch_group = switch_group;
        self
    }

    /// For the group at position `i`, binds `modifier + (i + 1)` to show it
    /// and `modifier + shift + (i + 1)` to send the focused window there.
    ///
    /// # Errors
    ///
    /// Errors with `TooManyGroups` when the list holds more than
    /// [`MAX_NUMBERED_GROUPS`] groups.
    pub fn provision(&self, groups: &[Group]) -> Result<Vec<Keybind>> {
        if groups.len() > MAX_NUMBERED_GROUPS {
            return Err(TileError::TooManyGroups {
                count: groups.len(),
                max: MAX_NUMBERED_GROUPS,
            });
        }

        let mut move_modifier = self.modifier.clone();
        move_modifier.insert(Modifier::Shift);

        let mut keybinds = Vec::with_capacity(groups.len() * 2);
        for (i, group) in groups.iter().enumerate() {
            let workspace_number = (i + 1).to_string();
            keybinds.push(Keybind::new(
                ToScreen::new(&group.name).normalize()?,
                self.modifier.clone(),
                workspace_number.clone(),
                Some(format!("Switch to group {}", group.name)),
            )?);
            let desc = if self.switch_group {
                format!("Switch to & move focused window to group {}", group.name)
            } else {
                format!("Move focused window to group {}", group.name)
            };
            keybinds.push(Keybind::new(
                ToGroup::new(&group.name, self.switch_group).normalize()?,
                move_modifier.clone(),
                workspace_number,
                Some(desc),
            )?);
        }
        Ok(keybinds)
    }
}
