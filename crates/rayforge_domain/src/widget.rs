//! The closed set of widget variants.
//!
//! Each variant struct has a `new(name)` constructor that fills every other
//! field from [`crate::defaults`]; override fields with struct-update syntax:
//!
//! ```
//! use rayforge_domain::Toggle;
//!
//! let toggle = Toggle { state: true, ..Toggle::new("Auto Farm") };
//! assert!(toggle.state);
//! ```

use serde::{Deserialize, Serialize};

use crate::{WidgetId, WidgetKind, defaults};

/// One control inside a tab, tagged by `type` when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Widget {
	Button(Button),
	Toggle(Toggle),
	Slider(Slider),
	Input(Input),
	Label(Label),
	Paragraph(Paragraph),
	Keybind(Keybind),
	Dropdown(Dropdown),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
	pub id: WidgetId,
	pub name: String,
	#[serde(rename = "callbackLogic")]
	pub behavior: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toggle {
	pub id: WidgetId,
	pub name: String,
	#[serde(rename = "default")]
	pub state: bool,
	#[serde(rename = "callbackLogic")]
	pub behavior: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slider {
	pub id: WidgetId,
	pub name: String,
	pub min: f64,
	pub max: f64,
	#[serde(rename = "default")]
	pub value: f64,
	pub suffix: String,
	#[serde(rename = "callbackLogic")]
	pub behavior: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
	pub id: WidgetId,
	pub name: String,
	pub placeholder: String,
	#[serde(rename = "removeTextAfterFocusLost")]
	pub clear_on_focus_lost: bool,
	#[serde(rename = "callbackLogic")]
	pub behavior: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
	pub id: WidgetId,
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
	pub id: WidgetId,
	pub name: String,
	pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keybind {
	pub id: WidgetId,
	pub name: String,
	pub default_key: String,
	pub hold_to_interact: bool,
	#[serde(rename = "callbackLogic")]
	pub behavior: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dropdown {
	pub id: WidgetId,
	pub name: String,
	pub options: Vec<String>,
	pub default_option: String,
	#[serde(rename = "multiSelection")]
	pub multi_select: bool,
	#[serde(rename = "callbackLogic")]
	pub behavior: String,
}

impl Button {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			id: WidgetId::generate(),
			name: name.into(),
			behavior: defaults::BEHAVIOR.to_string(),
		}
	}
}

impl Toggle {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			id: WidgetId::generate(),
			name: name.into(),
			state: defaults::TOGGLE_STATE,
			behavior: defaults::BEHAVIOR.to_string(),
		}
	}
}

impl Slider {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			id: WidgetId::generate(),
			name: name.into(),
			min: defaults::SLIDER_MIN,
			max: defaults::SLIDER_MAX,
			value: defaults::SLIDER_VALUE,
			suffix: defaults::SLIDER_SUFFIX.to_string(),
			behavior: defaults::BEHAVIOR.to_string(),
		}
	}
}

impl Input {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			id: WidgetId::generate(),
			name: name.into(),
			placeholder: defaults::INPUT_PLACEHOLDER.to_string(),
			clear_on_focus_lost: defaults::INPUT_CLEAR_ON_FOCUS_LOST,
			behavior: defaults::BEHAVIOR.to_string(),
		}
	}
}

impl Label {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			id: WidgetId::generate(),
			name: name.into(),
			color: Some(defaults::LABEL_COLOR.to_string()),
		}
	}
}

impl Paragraph {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			id: WidgetId::generate(),
			name: name.into(),
			content: defaults::PARAGRAPH_CONTENT.to_string(),
		}
	}
}

impl Keybind {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			id: WidgetId::generate(),
			name: name.into(),
			default_key: defaults::KEYBIND_KEY.to_string(),
			hold_to_interact: defaults::KEYBIND_HOLD_TO_INTERACT,
			behavior: defaults::BEHAVIOR.to_string(),
		}
	}
}

impl Dropdown {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			id: WidgetId::generate(),
			name: name.into(),
			options: defaults::DROPDOWN_OPTIONS.iter().map(|o| o.to_string()).collect(),
			default_option: defaults::DROPDOWN_SELECTED.to_string(),
			multi_select: defaults::DROPDOWN_MULTI_SELECT,
			behavior: defaults::BEHAVIOR.to_string(),
		}
	}
}

impl Widget {
	/// Widget of `kind` with all defaults, named `New <Kind>`.
	pub fn with_defaults(kind: WidgetKind) -> Self {
		Self::named(kind, format!("New {kind}"))
	}

	/// Widget of `kind` with all defaults and the given name.
	pub fn named(kind: WidgetKind, name: impl Into<String>) -> Self {
		match kind {
			WidgetKind::Button => Widget::Button(Button::new(name)),
			WidgetKind::Toggle => Widget::Toggle(Toggle::new(name)),
			WidgetKind::Slider => Widget::Slider(Slider::new(name)),
			WidgetKind::Input => Widget::Input(Input::new(name)),
			WidgetKind::Label => Widget::Label(Label::new(name)),
			WidgetKind::Paragraph => Widget::Paragraph(Paragraph::new(name)),
			WidgetKind::Keybind => Widget::Keybind(Keybind::new(name)),
			WidgetKind::Dropdown => Widget::Dropdown(Dropdown::new(name)),
		}
	}

	pub fn kind(&self) -> WidgetKind {
		match self {
			Widget::Button(_) => WidgetKind::Button,
			Widget::Toggle(_) => WidgetKind::Toggle,
			Widget::Slider(_) => WidgetKind::Slider,
			Widget::Input(_) => WidgetKind::Input,
			Widget::Label(_) => WidgetKind::Label,
			Widget::Paragraph(_) => WidgetKind::Paragraph,
			Widget::Keybind(_) => WidgetKind::Keybind,
			Widget::Dropdown(_) => WidgetKind::Dropdown,
		}
	}

	pub fn id(&self) -> &WidgetId {
		match self {
			Widget::Button(w) => &w.id,
			Widget::Toggle(w) => &w.id,
			Widget::Slider(w) => &w.id,
			Widget::Input(w) => &w.id,
			Widget::Label(w) => &w.id,
			Widget::Paragraph(w) => &w.id,
			Widget::Keybind(w) => &w.id,
			Widget::Dropdown(w) => &w.id,
		}
	}

	pub fn name(&self) -> &str {
		match self {
			Widget::Button(w) => &w.name,
			Widget::Toggle(w) => &w.name,
			Widget::Slider(w) => &w.name,
			Widget::Input(w) => &w.name,
			Widget::Label(w) => &w.name,
			Widget::Paragraph(w) => &w.name,
			Widget::Keybind(w) => &w.name,
			Widget::Dropdown(w) => &w.name,
		}
	}

	pub fn set_name(&mut self, name: impl Into<String>) {
		let name = name.into();
		match self {
			Widget::Button(w) => w.name = name,
			Widget::Toggle(w) => w.name = name,
			Widget::Slider(w) => w.name = name,
			Widget::Input(w) => w.name = name,
			Widget::Label(w) => w.name = name,
			Widget::Paragraph(w) => w.name = name,
			Widget::Keybind(w) => w.name = name,
			Widget::Dropdown(w) => w.name = name,
		}
	}

	/// Embedded callback body, for the kinds that carry one.
	pub fn behavior(&self) -> Option<&str> {
		match self {
			Widget::Button(w) => Some(&w.behavior),
			Widget::Toggle(w) => Some(&w.behavior),
			Widget::Slider(w) => Some(&w.behavior),
			Widget::Input(w) => Some(&w.behavior),
			Widget::Keybind(w) => Some(&w.behavior),
			Widget::Dropdown(w) => Some(&w.behavior),
			Widget::Label(_) | Widget::Paragraph(_) => None,
		}
	}
}
