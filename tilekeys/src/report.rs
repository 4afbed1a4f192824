use std::fmt::Write;

use tilekeys_core::config::{BindingTable, Group, command};

const UNKNOWN_COMMAND: &str = "<unknown command>";

/// One line per binding: combination, lazy call and description.
pub fn keys(table: &BindingTable) -> String {
    let rows: Vec<(String, String, &str)> = table
        .iter()
        .map(|kb| {
            let action = command::denormalize(&kb.command)
                .map_or_else(|_| UNKNOWN_COMMAND.to_owned(), |c| c.describe());
            (kb.combo(), action, kb.desc.as_deref().unwrap_or(""))
        })
        .collect();
    let combo_width = rows.iter().map(|(c, _, _)| c.chars().count()).max().unwrap_or(0);
    let action_width = rows.iter().map(|(_, a, _)| a.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for (combo, action, desc) in rows {
        let line = format!("{combo:<combo_width$}  {action:<action_width$}  {desc}");
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

pub fn groups(groups: &[Group]) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "{}  {}", group.key(), group.name);
    }
    out
}
