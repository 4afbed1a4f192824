// Colours are kept packed as 0xAARRGGBB.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TileError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour(u32);

impl Colour {
    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    #[must_use]
    pub const fn argb(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn alpha(self) -> u8 {
        ((self.0 >> 24) & 0xFF) as u8
    }

    #[must_use]
    pub const fn red(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[must_use]
    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[must_use]
    pub const fn blue(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

/// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa`, with or without the `#`.
impl FromStr for Colour {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || TileError::InvalidColour(s.to_owned());
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let expanded = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect::<String>() + "ff",
            6 => format!("{hex}ff"),
            8 => hex.to_owned(),
            _ => return Err(invalid()),
        };
        let rgba = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;
        Ok(Self(rgba.rotate_right(8)))
    }
}

impl TryFrom<String> for Colour {
    type Error = TileError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Colour> for String {
    fn from(value: Colour) -> Self {
        value.to_string()
    }
}

impl Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())?;
        if self.alpha() != 0xFF {
            write!(f, "{:02x}", self.alpha())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_expands() {
        let white: Colour = "#fff".parse().unwrap();
        assert_eq!(white.argb(), 0xFFFF_FFFF);
        assert_eq!(white.to_string(), "#ffffff");
    }

    #[test]
    fn alpha_is_trailing() {
        let c: Colour = "ca9ee680".parse().unwrap();
        assert_eq!(c.alpha(), 0x80);
        assert_eq!(c.red(), 0xCA);
        assert_eq!(c.blue(), 0xE6);
        assert_eq!(c.to_string(), "#ca9ee680");
    }

    #[test]
    fn rejects_garbage() {
        assert!("#12345".parse::<Colour>().is_err());
        assert!("#gggggg".parse::<Colour>().is_err());
        assert!("".parse::<Colour>().is_err());
        assert!("#+12345".parse::<Colour>().is_err());
    }
}
