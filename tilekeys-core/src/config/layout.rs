//! Layout parameters. The arranging itself is done by the window manager;
//! these only carry the options each layout accepts, with its defaults.

use serde::{Deserialize, Serialize};

use super::colour::Colour;
use super::rules::{Match, default_float_rules};
use crate::errors::{Error, TileError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutSpec {
    Max(MaxLayout),
    Columns(ColumnsLayout),
    Stack(StackLayout),
    MonadTall(MonadTallLayout),
}

impl LayoutSpec {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Max(_) => "max",
            Self::Columns(_) => "columns",
            Self::Stack(_) => "stack",
            Self::MonadTall(_) => "monadtall",
        }
    }

    /// # Errors
    ///
    /// Errors with `InvalidLayout` on counts of zero or ratios outside of
    /// `0.0..1.0`.
    pub fn validate(&self) -> Error {
        let invalid =
            |reason: &str| Err(TileError::InvalidLayout(format!("{}: {reason}", self.name())));
        match self {
            Self::Columns(columns) if columns.num_columns == 0 => {
                invalid("num_columns must be at least 1")
            }
            Self::Stack(stack) if stack.num_stacks == 0 => invalid("num_stacks must be at least 1"),
            Self::MonadTall(monad) if !(monad.ratio > 0.0 && monad.ratio < 1.0) => {
                invalid("ratio must be between 0.0 and 1.0")
            }
            _ => Ok(()),
        }
    }
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self::Max(MaxLayout::default())
    }
}

/// One window at a time, filling the screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaxLayout {
    /// Gap around the window, in pixels. Default 0.
    pub margin: u32,
    /// Default 0.
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnsLayout {
    /// Default `#881111`.
    pub border_focus: Colour,
    /// Default `#220000`.
    pub border_normal: Colour,
    /// Default 2.
    pub border_width: u32,
    /// Default 0.
    pub margin: u32,
    /// Columns opened before windows start stacking. Default 2.
    pub num_columns: u32,
}

impl Default for ColumnsLayout {
    fn default() -> Self {
        Self {
            border_focus: Colour::from_argb(0xFF88_1111),
            border_normal: Colour::from_argb(0xFF22_0000),
            border_width: 2,
            margin: 0,
            num_columns: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackLayout {
    /// Default 2.
    pub num_stacks: u32,
    /// Default 0.
    pub margin: u32,
    /// Default 1.
    pub border_width: u32,
}

impl Default for StackLayout {
    fn default() -> Self {
        Self {
            num_stacks: 2,
            margin: 0,
            border_width: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonadTallLayout {
    /// Default 0.
    pub margin: u32,
    /// Share of the screen given to the main pane. Default 0.5.
    pub ratio: f32,
    /// Default 2.
    pub border_width: u32,
}

impl Default for MonadTallLayout {
    fn default() -> Self {
        Self {
            margin: 0,
            ratio: 0.5,
            border_width: 2,
        }
    }
}

/// The layout floating windows live in, and which windows float.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingLayout {
    /// Extra rules, checked after the defaults.
    pub float_rules: Vec<Match>,
    /// Keep the window manager's own rules. Default true.
    pub default_rules: bool,
    /// Default `#0000ff`.
    pub border_focus: Colour,
    /// Default 1.
    pub border_width: u32,
}

impl Default for FloatingLayout {
    fn default() -> Self {
        Self {
            float_rules: Vec::new(),
            default_rules: true,
            border_focus: Colour::from_argb(0xFF00_00FF),
            border_width: 1,
        }
    }
}

impl FloatingLayout {
    /// The effective rule list.
    #[must_use]
    pub fn rules(&self) -> Vec<Match> {
        let mut rules = if self.default_rules {
            default_float_rules()
        } else {
            Vec::new()
        };
        rules.extend(self.float_rules.iter().cloned());
        rules
    }
}
