pub mod bar;
pub mod colour;
pub mod command;
pub mod group;
mod keybind;
pub mod layout;
pub mod modifier;
pub mod mouse;
pub mod options;
pub mod rules;
mod snapshot;
mod table;

pub use command::Command;
pub use group::{Group, Provisioner};
pub use keybind::{Keybind, parse_combo};
pub use modifier::{Modifier, Modifiers};
pub use snapshot::Snapshot;
pub use table::{BindingTable, Conflict};

use crate::errors::Result;

/// A source of bindings and groups, usually a parsed user configuration.
pub trait Config {
    /// The explicitly declared keybinds, in declaration order.
    ///
    /// # Errors
    ///
    /// Errors when a declared keybind cannot be mapped to a command.
    fn mapped_bindings(&self) -> Result<Vec<Keybind>>;

    /// # Errors
    ///
    /// Errors when the group list is invalid (empty or duplicate names).
    fn groups(&self) -> Result<Vec<Group>>;

    /// # Errors
    ///
    /// Errors when the modifiers used for provisioning are unknown.
    fn provisioner(&self) -> Result<Provisioner>;

    /// Explicit bindings followed by the bindings derived from the groups.
    ///
    /// # Errors
    ///
    /// Propagates any of the above, and fails when the groups cannot all be
    /// given a number key.
    fn binding_table(&self) -> Result<BindingTable> {
        let explicit = self.mapped_bindings()?;
        let derived = self.provisioner()?.provision(&self.groups()?)?;
        Ok(BindingTable::new(explicit, derived))
    }
}
