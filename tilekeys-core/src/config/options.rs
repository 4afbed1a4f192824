use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BringFrontClick {
    #[default]
    Never,
    Always,
    FloatingOnly,
}

/// What happens when a client asks to be activated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusOnActivation {
    Focus,
    /// Focus when the client is on the current group, otherwise mark it
    /// urgent.
    #[default]
    Smart,
    Urgent,
    Never,
}

/// Global window manager switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub follow_mouse_focus: bool,
    pub bring_front_click: BringFrontClick,
    pub cursor_warp: bool,
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: FocusOnActivation,
    pub reconfigure_screens: bool,
    pub auto_minimize: bool,
    /// Reported to clients as the window manager name. Some Java toolkits
    /// only draw correctly for names they know.
    pub wmname: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            follow_mouse_focus: true,
            bring_front_click: BringFrontClick::Never,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: FocusOnActivation::Smart,
            reconfigure_screens: true,
            auto_minimize: true,
            wmname: "LG3D".to_owned(),
        }
    }
}
