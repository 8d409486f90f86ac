#![forbid(unsafe_code)]

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod defaults;
pub mod document;
pub mod widget;
pub mod window;

pub use document::{Document, Tab};
pub use widget::{Button, Dropdown, Input, Keybind, Label, Paragraph, Slider, Toggle, Widget};
pub use window::{ConfigurationSaving, KeySettings, WindowConfig};

/// The eight widget kinds a tab can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetKind {
	Button,
	Toggle,
	Slider,
	Input,
	Label,
	Paragraph,
	Keybind,
	Dropdown,
}

impl WidgetKind {
	pub const ALL: [WidgetKind; 8] = [
		WidgetKind::Button,
		WidgetKind::Toggle,
		WidgetKind::Slider,
		WidgetKind::Input,
		WidgetKind::Label,
		WidgetKind::Paragraph,
		WidgetKind::Keybind,
		WidgetKind::Dropdown,
	];

	/// Stable tag, identical to the `type` field of saved projects.
	pub const fn as_str(self) -> &'static str {
		match self {
			WidgetKind::Button => "Button",
			WidgetKind::Toggle => "Toggle",
			WidgetKind::Slider => "Slider",
			WidgetKind::Input => "Input",
			WidgetKind::Label => "Label",
			WidgetKind::Paragraph => "Paragraph",
			WidgetKind::Keybind => "Keybind",
			WidgetKind::Dropdown => "Dropdown",
		}
	}
}

impl fmt::Display for WidgetKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Errors for parsing identifiers and tags from strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseIdError {
	#[error("empty value")]
	Empty,
	#[error("unknown widget kind: {0}")]
	UnknownKind(String),
}

impl FromStr for WidgetKind {
	type Err = ParseIdError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		if s.is_empty() {
			return Err(ParseIdError::Empty);
		}

		WidgetKind::ALL
			.into_iter()
			.find(|kind| kind.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| ParseIdError::UnknownKind(s.to_string()))
	}
}

macro_rules! opaque_id {
	($(#[$meta:meta])* $name:ident) => {
		$(#[$meta])*
		#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(String);

		impl $name {
			/// Fresh random identifier (UUID v4 text).
			pub fn generate() -> Self {
				Self(uuid::Uuid::new_v4().to_string())
			}

			/// Wrap an existing non-empty identifier.
			pub fn new(id: impl Into<String>) -> Result<Self, ParseIdError> {
				let id = id.into();
				if id.trim().is_empty() {
					return Err(ParseIdError::Empty);
				}
				Ok(Self(id))
			}

			pub fn as_str(&self) -> &str {
				&self.0
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(&self.0)
			}
		}

		impl FromStr for $name {
			type Err = ParseIdError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				$name::new(s.to_string())
			}
		}
	};
}

opaque_id!(
	/// Tab identifier. Generated once, never reused.
	TabId
);

opaque_id!(
	/// Widget identifier, unique across the whole document.
	WidgetId
);

/// Errors from the document mutation API and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
	#[error("unknown tab: {0}")]
	UnknownTab(TabId),
	#[error("unknown widget {widget} in tab {tab}")]
	UnknownWidget { tab: TabId, widget: WidgetId },
	#[error("duplicate tab id: {0}")]
	DuplicateTabId(TabId),
	#[error("duplicate widget id: {0}")]
	DuplicateWidgetId(WidgetId),
	#[error("empty identifier")]
	EmptyId,
	#[error("widget {widget} is a {existing}; cannot replace it with a {replacement}")]
	KindChange {
		widget: WidgetId,
		existing: WidgetKind,
		replacement: WidgetKind,
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn widget_kind_parse_and_display() {
		assert_eq!("toggle".parse::<WidgetKind>().unwrap(), WidgetKind::Toggle);
		assert_eq!(" DROPDOWN ".parse::<WidgetKind>().unwrap(), WidgetKind::Dropdown);
		assert_eq!(WidgetKind::Keybind.to_string(), "Keybind");
	}

	#[test]
	fn widget_kind_rejects_unknown_and_empty() {
		assert_eq!(
			"ColorPicker".parse::<WidgetKind>().unwrap_err(),
			ParseIdError::UnknownKind("ColorPicker".into())
		);
		assert_eq!("  ".parse::<WidgetKind>().unwrap_err(), ParseIdError::Empty);
	}

	#[test]
	fn generated_ids_are_distinct() {
		let a = TabId::generate();
		let b = TabId::generate();
		assert_ne!(a, b);
		assert!(!WidgetId::generate().as_str().is_empty());
	}

	#[test]
	fn rejects_empty_ids() {
		assert!(TabId::new("").is_err());
		assert!(WidgetId::new("   ").is_err());
		assert_eq!("w-1".parse::<WidgetId>().unwrap().as_str(), "w-1");
	}
}
