//! Floating window rules.
//!
//! A [`Match`] is a predicate over the metadata a client advertises. Every
//! field that is set has to agree with the window; a rule with no field set
//! matches nothing.

use serde::{Deserialize, Serialize};

/// What the window manager knows about a client when it decides whether the
/// client floats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowInfo {
    /// Both parts of `WM_CLASS` (instance and class).
    pub wm_class: Vec<String>,
    pub title: Option<String>,
    pub role: Option<String>,
    pub wm_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Match {
    pub wm_class: Option<String>,
    pub title: Option<String>,
    pub role: Option<String>,
    pub wm_type: Option<String>,
}

impl Match {
    #[must_use]
    pub fn wm_class(class: &str) -> Self {
        Self {
            wm_class: Some(class.to_owned()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(title: &str) -> Self {
        Self {
            title: Some(title.to_owned()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn wm_type(wm_type: &str) -> Self {
        Self {
            wm_type: Some(wm_type.to_owned()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wm_class.is_none()
            && self.title.is_none()
            && self.role.is_none()
            && self.wm_type.is_none()
    }

    #[must_use]
    pub fn matches(&self, window: &WindowInfo) -> bool {
        if self.is_empty() {
            return false;
        }
        let class_ok = self
            .wm_class
            .as_ref()
            .is_none_or(|class| window.wm_class.iter().any(|c| c == class));
        class_ok
            && field_matches(self.title.as_ref(), window.title.as_ref())
            && field_matches(self.role.as_ref(), window.role.as_ref())
            && field_matches(self.wm_type.as_ref(), window.wm_type.as_ref())
    }
}

fn field_matches(wanted: Option<&String>, actual: Option<&String>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual == Some(wanted),
    }
}

/// The rules the window manager floats by default: transient window types
/// and a few well known dialog classes. Windows with a fixed size or a fixed
/// aspect ratio also float there, but that needs size hints a [`Match`]
/// does not carry, so those rules are not listed here.
#[must_use]
pub fn default_float_rules() -> Vec<Match> {
    let types = ["utility", "notification", "toolbar", "splash", "dialog"];
    let classes = [
        "file_progress",
        "confirm",
        "dialog",
        "download",
        "error",
        "notification",
        "splash",
        "toolbar",
    ];
    types
        .into_iter()
        .map(Match::wm_type)
        .chain(classes.into_iter().map(Match::wm_class))
        .collect()
}
