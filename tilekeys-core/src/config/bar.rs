//! Screens, bars and the widgets on them.
//!
//! Every widget carries a [`WidgetStyle`] whose unset fields fall back to the
//! [`WidgetDefaults`] of the configuration.

use serde::{Deserialize, Serialize};

use super::colour::Colour;
use crate::errors::{Error, TileError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetDefaults {
    /// Default `sans`.
    pub font: String,
    /// Default 12.
    pub fontsize: u32,
    /// Default 3.
    pub padding: u32,
    /// Default `#ffffff`.
    pub foreground: Colour,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            font: "sans".to_owned(),
            fontsize: 12,
            padding: 3,
            foreground: Colour::from_argb(0xFFFF_FFFF),
        }
    }
}

/// A rounded rectangle drawn behind a widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectDecoration {
    pub colour: Colour,
    pub radius: u32,
    pub filled: bool,
    pub padding_x: u32,
    pub padding_y: u32,
}

impl Default for RectDecoration {
    fn default() -> Self {
        Self {
            colour: Colour::from_argb(0xFF00_0000),
            radius: 0,
            filled: false,
            padding_x: 0,
            padding_y: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decoration {
    Rect(RectDecoration),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetStyle {
    pub font: Option<String>,
    pub fontsize: Option<u32>,
    pub padding: Option<u32>,
    pub foreground: Option<Colour>,
    pub background: Option<Colour>,
    pub decorations: Vec<Decoration>,
}

/// A [`WidgetStyle`] with the defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    pub font: String,
    pub fontsize: u32,
    pub padding: u32,
    pub foreground: Colour,
    pub background: Option<Colour>,
    pub decorations: Vec<Decoration>,
}

impl WidgetStyle {
    #[must_use]
    pub fn resolve(&self, defaults: &WidgetDefaults) -> ResolvedStyle {
        ResolvedStyle {
            font: self.font.clone().unwrap_or_else(|| defaults.font.clone()),
            fontsize: self.fontsize.unwrap_or(defaults.fontsize),
            padding: self.padding.unwrap_or(defaults.padding),
            foreground: self.foreground.unwrap_or(defaults.foreground),
            background: self.background,
            decorations: self.decorations.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupBox {
    pub style: WidgetStyle,
    pub disable_drag: bool,
    pub active: Option<Colour>,
    pub inactive: Option<Colour>,
    pub block_highlight_text_color: Option<Colour>,
    pub this_current_screen_border: Option<Colour>,
    pub this_screen_border: Option<Colour>,
    /// Default 3.
    pub border_width: u32,
}

impl Default for GroupBox {
    fn default() -> Self {
        Self {
            style: WidgetStyle::default(),
            disable_drag: false,
            active: None,
            inactive: None,
            block_highlight_text_color: None,
            this_current_screen_border: None,
            this_screen_border: None,
            border_width: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Clock {
    pub style: WidgetStyle,
    /// strftime format. Default `%Y-%m-%d %a %I:%M %p`.
    pub format: String,
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            style: WidgetStyle::default(),
            format: "%Y-%m-%d %a %I:%M %p".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Systray {
    pub style: WidgetStyle,
    /// Icon size in pixels, the bar height when unset.
    pub icon_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Widget {
    CurrentLayout(WidgetStyle),
    GroupBox(GroupBox),
    /// Fixed width in pixels, or all remaining space when `None`.
    Spacer(Option<u32>),
    Systray(Systray),
    Clock(Clock),
}

impl Widget {
    #[must_use]
    pub fn style(&self) -> Option<&WidgetStyle> {
        match self {
            Self::CurrentLayout(style) => Some(style),
            Self::GroupBox(group_box) => Some(&group_box.style),
            Self::Spacer(_) => None,
            Self::Systray(systray) => Some(&systray.style),
            Self::Clock(clock) => Some(&clock.style),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bar {
    pub widgets: Vec<Widget>,
    /// Height in pixels. Default 24.
    pub size: u32,
    /// Default 1.0.
    pub opacity: f32,
    pub background: Option<Colour>,
    /// Default 0.
    pub margin: u32,
}

impl Default for Bar {
    fn default() -> Self {
        Self {
            widgets: Vec::new(),
            size: 24,
            opacity: 1.0,
            background: None,
            margin: 0,
        }
    }
}

impl Bar {
    /// # Errors
    ///
    /// Errors with `InvalidOpacity` when the opacity is outside `0.0..=1.0`.
    pub fn validate(&self) -> Error {
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(TileError::InvalidOpacity(self.opacity));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Screen {
    pub top: Option<Bar>,
    pub bottom: Option<Bar>,
}

impl Screen {
    pub fn bars(&self) -> impl Iterator<Item = &Bar> {
        self.top.iter().chain(self.bottom.iter())
    }

    /// # Errors
    ///
    /// Propagates the first invalid bar.
    pub fn validate(&self) -> Error {
        self.bars().try_for_each(Bar::validate)
    }
}
