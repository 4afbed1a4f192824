pub mod command;
pub mod key;
pub mod keybind;
pub mod mouse;

use crate::errors::{CliError, Result};

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tilekeys_core::config::{
    Config as _, Group, Keybind as CoreKeybind, Modifiers, Provisioner, Snapshot,
    bar::{Screen, WidgetDefaults},
    group::groups_from_names,
    layout::{FloatingLayout, LayoutSpec},
    modifier::parse_modifiers,
    options::Options,
};
use tilekeys_core::errors::TileError;
use xdg::BaseDirectories;

use self::{keybind::Keybinds, mouse::MouseBind};

pub const CONFIG_FILE_NAME: &str = "config.ron";

/// The configuration file as the user writes it.
#[derive(Debug, PartialEq, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// What `mod` stands for in modifier lists, and the modifier of the
    /// group number keys.
    pub(crate) modifier: Vec<String>,
    keybinds: Keybinds,
    /// Group names, in number key order.
    groups: Vec<String>,
    /// Whether the `mod + shift + number` bindings follow the moved window.
    move_switches_group: bool,
    layouts: Vec<LayoutSpec>,
    floating: FloatingLayout,
    widget_defaults: WidgetDefaults,
    screens: Vec<Screen>,
    mouse: Vec<MouseBind>,
    options: Options,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modifier: vec!["mod4".to_owned()],
            keybinds: Vec::new(),
            groups: Vec::new(),
            move_switches_group: true,
            layouts: vec![LayoutSpec::default()],
            floating: FloatingLayout::default(),
            widget_defaults: WidgetDefaults::default(),
            screens: Vec::new(),
            mouse: Vec::new(),
            options: Options::default(),
        }
    }
}

impl tilekeys_core::config::Config for Config {
    fn mapped_bindings(&self) -> tilekeys_core::errors::Result<Vec<CoreKeybind>> {
        let default_modifier = self.default_modifier()?;
        let mut keybinds = Vec::new();
        for kb in &self.keybinds {
            match keybind::try_from(kb.clone(), &default_modifier) {
                Ok(mapped) => keybinds.extend(mapped),
                Err(err) => {
                    tracing::error!("Invalid key binding: {}\n{:?}", err, kb);
                    return Err(err);
                }
            }
        }
        Ok(keybinds)
    }

    fn groups(&self) -> tilekeys_core::errors::Result<Vec<Group>> {
        groups_from_names(&self.groups)
    }

    fn provisioner(&self) -> tilekeys_core::errors::Result<Provisioner> {
        Ok(Provisioner::new(self.default_modifier()?).switch_group(self.move_switches_group))
    }
}

impl TryFrom<String> for Config {
    type Error = CliError;
    /// # Errors
    ///
    /// Errors when the contents are not a valid configuration.
    fn try_from(contents: String) -> Result<Self> {
        Ok(ron::from_str(&contents)?)
    }
}

impl Config {
    fn default_modifier(&self) -> tilekeys_core::errors::Result<Modifiers> {
        parse_modifiers(&self.modifier)
    }

    /// Every command has to name a group that exists.
    fn check_group_references(&self, groups: &[Group]) -> tilekeys_core::errors::Result<()> {
        let commands = self
            .keybinds
            .iter()
            .map(|kb| &kb.command)
            .chain(self.mouse.iter().flat_map(MouseBind::commands));
        for command in commands {
            if let Some(name) = command.group() {
                if !groups.iter().any(|group| group.name == name) {
                    return Err(TileError::UnknownGroup(name.to_owned()));
                }
            }
        }
        Ok(())
    }

    /// Builds the snapshot handed to the window manager.
    ///
    /// # Errors
    ///
    /// Errors on the first invalid binding, group, layout or bar.
    pub fn compile(&self) -> Result<Snapshot> {
        let groups = self.groups()?;
        self.check_group_references(&groups)?;
        let keys = self.binding_table()?.into_bindings();

        let default_modifier = self.default_modifier()?;
        let mouse = self
            .mouse
            .iter()
            .map(|bind| mouse::try_from(bind, &default_modifier))
            .collect::<tilekeys_core::errors::Result<Vec<_>>>()?;

        let snapshot = Snapshot {
            keys,
            groups,
            layouts: self.layouts.clone(),
            floating_layout: self.floating.clone(),
            widget_defaults: self.widget_defaults.clone(),
            screens: self.screens.clone(),
            mouse,
            options: self.options.clone(),
        };
        snapshot.validate()?;
        tracing::debug!(
            "Compiled {} bindings for {} groups",
            snapshot.keys.len(),
            snapshot.groups.len()
        );
        Ok(snapshot)
    }
}

/// The config file location under the xdg config home.
///
/// # Errors
///
/// Errors when the config directory cannot be created.
pub fn default_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix(tilekeys_core::TILEKEYS_DIR_NAME);
    Ok(path.place_config_file(CONFIG_FILE_NAME)?)
}

/// # Errors
///
/// Errors when no config is found at `path` or it cannot be parsed.
pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(CliError::NoConfigFound(path.to_owned()));
    }
    let contents = fs::read_to_string(path)?;
    Config::try_from(contents)
}

/// # Errors
///
/// This errors, when no Config is found at the path
pub fn load(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load_from(path),
        None => load_from(&default_path()?),
    }
}
