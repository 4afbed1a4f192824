use std::collections::BTreeSet;
use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TileError};

/// The X11 modifier masks, in mask order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Modifier {
    Shift,
    Lock,
    Control,
    Mod1,
    Mod2,
    Mod3,
    Mod4,
    Mod5,
}

/// A set of modifiers; ordering is by mask so equal sets print the same.
pub type Modifiers = BTreeSet<Modifier>;

impl Modifier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shift => "shift",
            Self::Lock => "lock",
            Self::Control => "control",
            Self::Mod1 => "mod1",
            Self::Mod2 => "mod2",
            Self::Mod3 => "mod3",
            Self::Mod4 => "mod4",
            Self::Mod5 => "mod5",
        }
    }
}

impl FromStr for Modifier {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "shift" => Ok(Self::Shift),
            "lock" => Ok(Self::Lock),
            "control" | "ctrl" => Ok(Self::Control),
            "mod1" | "alt" => Ok(Self::Mod1),
            "mod2" => Ok(Self::Mod2),
            "mod3" => Ok(Self::Mod3),
            "mod4" | "super" => Ok(Self::Mod4),
            "mod5" => Ok(Self::Mod5),
            _ => Err(TileError::UnknownModifier(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Modifier {
    type Error = TileError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Modifier> for String {
    fn from(value: Modifier) -> Self {
        value.as_str().to_owned()
    }
}

impl Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses every name, failing on the first unknown one.
///
/// # Errors
///
/// Returns `UnknownModifier` naming the offending entry.
pub fn parse_modifiers<S: AsRef<str>>(names: &[S]) -> Result<Modifiers> {
    names.iter().map(|name| name.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases_case_insensitively() {
        assert_eq!("Mod4".parse::<Modifier>().unwrap(), Modifier::Mod4);
        assert_eq!("super".parse::<Modifier>().unwrap(), Modifier::Mod4);
        assert_eq!("ALT".parse::<Modifier>().unwrap(), Modifier::Mod1);
        assert_eq!("ctrl".parse::<Modifier>().unwrap(), Modifier::Control);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = parse_modifiers(&["mod4", "hyper"]).unwrap_err();
        assert!(matches!(err, TileError::UnknownModifier(name) if name == "hyper"));
    }

    #[test]
    fn sets_ignore_order_and_repeats() {
        let a = parse_modifiers(&["shift", "mod4"]).unwrap();
        let b = parse_modifiers(&["mod4", "shift", "shift"]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }
}
