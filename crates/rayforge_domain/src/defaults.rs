//! Creation-time defaults for every widget kind and for new tabs.

pub const TOGGLE_STATE: bool = false;

pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 100.0;
pub const SLIDER_VALUE: f64 = 50.0;
pub const SLIDER_SUFFIX: &str = "%";

pub const INPUT_PLACEHOLDER: &str = "Type here...";
pub const INPUT_CLEAR_ON_FOCUS_LOST: bool = false;

pub const LABEL_COLOR: &str = "#FFFFFF";

pub const PARAGRAPH_CONTENT: &str = "This is a paragraph description.";

pub const KEYBIND_KEY: &str = "K";
pub const KEYBIND_HOLD_TO_INTERACT: bool = false;

pub const DROPDOWN_OPTIONS: [&str; 2] = ["Option 1", "Option 2"];
pub const DROPDOWN_SELECTED: &str = "Option 1";
pub const DROPDOWN_MULTI_SELECT: bool = false;

/// Behavior code of a freshly created widget.
pub const BEHAVIOR: &str = "";

/// Icon of a freshly created tab.
pub const TAB_ICON: &str = "";

/// `Tab N` for the tab that will become the `position`-th (1-based).
pub fn tab_name(position: usize) -> String {
	format!("Tab {position}")
}
