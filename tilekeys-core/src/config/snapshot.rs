use std::iter::once;

use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};

use super::bar::{Screen, WidgetDefaults};
use super::command;
use super::group::Group;
use super::keybind::Keybind;
use super::layout::{FloatingLayout, LayoutSpec};
use super::mouse::MouseBinding;
use super::options::Options;
use super::table::BindingTable;
use crate::errors::{Error, Result, TileError};

/// A complete, compiled configuration. This is what the window manager
/// reads at startup and replaces as a whole on reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Explicit bindings first, then two per group.
    pub keys: Vec<Keybind>,
    pub groups: Vec<Group>,
    pub layouts: Vec<LayoutSpec>,
    pub floating_layout: FloatingLayout,
    pub widget_defaults: WidgetDefaults,
    pub screens: Vec<Screen>,
    pub mouse: Vec<MouseBinding>,
    pub options: Options,
}

impl Snapshot {
    /// # Errors
    ///
    /// Errors when no layout is configured, a layout or bar carries invalid
    /// options, or a binding holds a command no kind accepts.
    pub fn validate(&self) -> Error {
        if self.layouts.is_empty() {
            return Err(TileError::NoLayouts);
        }
        self.layouts.iter().try_for_each(LayoutSpec::validate)?;
        self.screens.iter().try_for_each(Screen::validate)?;

        let mouse_commands = self.mouse.iter().flat_map(|binding| match binding {
            MouseBinding::Drag { command, start, .. } => once(command).chain(start.as_ref()),
            MouseBinding::Click { command, .. } => once(command).chain(None),
        });
        for normalized in self.keys.iter().map(|kb| &kb.command).chain(mouse_commands) {
            command::denormalize(normalized)?;
        }
        Ok(())
    }

    /// The keys split back into the explicit and the group derived part.
    #[must_use]
    pub fn binding_table(&self) -> BindingTable {
        let split = self.keys.len().saturating_sub(self.groups.len() * 2);
        let (explicit, derived) = self.keys.split_at(split);
        BindingTable::new(explicit.to_vec(), derived.to_vec())
    }

    /// # Errors
    ///
    /// Errors when serialization fails.
    pub fn to_ron(&self) -> Result<String> {
        Ok(ron::ser::to_string_pretty(self, PrettyConfig::new())?)
    }

    /// # Errors
    ///
    /// Errors when `contents` is not a snapshot.
    pub fn from_ron(contents: &str) -> Result<Self> {
        Ok(ron::from_str(contents)?)
    }
}
