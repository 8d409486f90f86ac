//! JSON save format for documents.
//!
//! Layout is `{ "window": {...}, "tabs": [...] }` with the field names used
//! by the browser builder, so projects saved there load here unchanged.

use rayforge_domain::{Document, DocumentError, Widget, WidgetId};
use serde_json::Value as JsonValue;
use thiserror::Error;
use tracing::debug;

pub const WINDOW_SECTION: &str = "window";
pub const TABS_SECTION: &str = "tabs";

#[derive(Debug, Error)]
pub enum CodecError {
	#[error("project is not valid JSON: {0}")]
	Syntax(#[source] serde_json::Error),

	#[error("project must be a JSON object")]
	NotAnObject,

	#[error("project is missing the `{0}` section")]
	MissingSection(&'static str),

	#[error("malformed project: {0}")]
	Malformed(#[source] serde_json::Error),

	#[error("invalid project: {0}")]
	Invalid(#[from] DocumentError),

	#[error("slider {widget}: field `{field}` is not a finite number")]
	NonFiniteNumber { widget: WidgetId, field: &'static str },

	#[error("failed to encode project: {0}")]
	Encode(#[source] serde_json::Error),
}

/// Pretty JSON (two-space indent). Ids are written as-is.
///
/// Refuses documents that [`decode`] would reject: broken ids, or slider
/// numbers JSON cannot hold (they would be written as `null`).
pub fn encode(doc: &Document) -> Result<String, CodecError> {
	doc.validate()?;
	check_numbers(doc)?;
	serde_json::to_string_pretty(doc).map_err(CodecError::Encode)
}

fn check_numbers(doc: &Document) -> Result<(), CodecError> {
	for widget in doc.tabs.iter().flat_map(|t| &t.elements) {
		let Widget::Slider(s) = widget else {
			continue;
		};
		for (field, value) in [("min", s.min), ("max", s.max), ("default", s.value)] {
			if !value.is_finite() {
				return Err(CodecError::NonFiniteNumber {
					widget: s.id.clone(),
					field,
				});
			}
		}
	}
	Ok(())
}

/// Parse and validate a saved project.
///
/// Checks run in order: JSON syntax, presence of both top-level sections,
/// typed decode (unknown widget `type` or missing fields fail here), then
/// identifier uniqueness. Nothing is returned unless every check passes.
pub fn decode(text: &str) -> Result<Document, CodecError> {
	let value: JsonValue = serde_json::from_str(text).map_err(CodecError::Syntax)?;

	let obj = value.as_object().ok_or(CodecError::NotAnObject)?;
	for section in [WINDOW_SECTION, TABS_SECTION] {
		if obj.get(section).is_none_or(JsonValue::is_null) {
			return Err(CodecError::MissingSection(section));
		}
	}

	let doc: Document = serde_json::from_value(value).map_err(CodecError::Malformed)?;
	doc.validate()?;

	debug!(tabs = doc.tabs.len(), widgets = doc.widget_count(), "decoded project");
	Ok(doc)
}
