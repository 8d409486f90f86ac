//! One emitter per widget kind. Each appends a single registration call on
//! the owning tab's local (e.g. `Tab1:CreateToggle({...})`).

use std::fmt::Write as _;

use rayforge_domain::{Button, Dropdown, Input, Keybind, Label, Paragraph, Slider, Toggle, Widget, WidgetId, WidgetKind};

use crate::CompileError;
use crate::literal;

/// Slider step; the document has no field for it.
pub const SLIDER_INCREMENT: f64 = 1.0;

/// Dispatch on the widget kind.
pub fn emit(widget: &Widget, tab: &str, out: &mut String) -> Result<(), CompileError> {
	match widget {
		Widget::Button(w) => emit_button(w, tab, out),
		Widget::Toggle(w) => emit_toggle(w, tab, out),
		Widget::Slider(w) => emit_slider(w, tab, out)?,
		Widget::Input(w) => emit_input(w, tab, out),
		Widget::Label(w) => emit_label(w, tab, out),
		Widget::Paragraph(w) => emit_paragraph(w, tab, out),
		Widget::Keybind(w) => emit_keybind(w, tab, out),
		Widget::Dropdown(w) => emit_dropdown(w, tab, out),
	}
	Ok(())
}

fn open(out: &mut String, tab: &str, method: &str) {
	let _ = writeln!(out, "{tab}:{method}({{");
}

fn close(out: &mut String) {
	out.push_str("})\n");
}

fn field(out: &mut String, key: &str, value: &str) {
	let _ = writeln!(out, "\t{key} = {value},");
}

fn string_field(out: &mut String, key: &str, value: &str) {
	let _ = write!(out, "\t{key} = ");
	literal::push_string(out, value);
	out.push_str(",\n");
}

fn flag(out: &mut String, id: &WidgetId) {
	string_field(out, "Flag", id.as_str());
}

/// Behavior code goes in verbatim; it is never escaped or reindented.
fn callback(out: &mut String, param: &str, body: &str) {
	if body.is_empty() {
		let _ = writeln!(out, "\tCallback = function({param}) end,");
		return;
	}
	let _ = writeln!(out, "\tCallback = function({param})");
	out.push_str(body);
	if !body.ends_with('\n') {
		out.push('\n');
	}
	out.push_str("\tend,\n");
}

fn number(id: &WidgetId, kind: WidgetKind, field: &'static str, value: f64) -> Result<String, CompileError> {
	literal::number(value).map_err(|_| CompileError::NonFiniteNumber {
		widget: id.clone(),
		kind,
		field,
	})
}

pub fn emit_button(w: &Button, tab: &str, out: &mut String) {
	open(out, tab, "CreateButton");
	string_field(out, "Name", &w.name);
	callback(out, "", &w.behavior);
	close(out);
}

pub fn emit_toggle(w: &Toggle, tab: &str, out: &mut String) {
	open(out, tab, "CreateToggle");
	string_field(out, "Name", &w.name);
	field(out, "CurrentValue", literal::boolean(w.state));
	flag(out, &w.id);
	callback(out, "Value", &w.behavior);
	close(out);
}

pub fn emit_slider(w: &Slider, tab: &str, out: &mut String) -> Result<(), CompileError> {
	let min = number(&w.id, WidgetKind::Slider, "min", w.min)?;
	let max = number(&w.id, WidgetKind::Slider, "max", w.max)?;
	let value = number(&w.id, WidgetKind::Slider, "default", w.value)?;

	open(out, tab, "CreateSlider");
	string_field(out, "Name", &w.name);
	field(out, "Range", &format!("{{{min}, {max}}}"));
	field(out, "Increment", &number(&w.id, WidgetKind::Slider, "increment", SLIDER_INCREMENT)?);
	string_field(out, "Suffix", &w.suffix);
	field(out, "CurrentValue", &value);
	flag(out, &w.id);
	callback(out, "Value", &w.behavior);
	close(out);
	Ok(())
}

pub fn emit_input(w: &Input, tab: &str, out: &mut String) {
	open(out, tab, "CreateInput");
	string_field(out, "Name", &w.name);
	string_field(out, "CurrentValue", "");
	string_field(out, "PlaceholderText", &w.placeholder);
	field(out, "RemoveTextAfterFocusLost", literal::boolean(w.clear_on_focus_lost));
	flag(out, &w.id);
	callback(out, "Text", &w.behavior);
	close(out);
}

/// Labels take positional arguments rather than a table.
pub fn emit_label(w: &Label, tab: &str, out: &mut String) {
	let _ = write!(out, "{tab}:CreateLabel(");
	literal::push_string(out, &w.name);
	if let Some(color) = w.color.as_deref().filter(|c| !c.trim().is_empty()) {
		out.push_str(", nil, Color3.fromHex(");
		literal::push_string(out, color);
		out.push_str("), false");
	}
	out.push_str(")\n");
}

pub fn emit_paragraph(w: &Paragraph, tab: &str, out: &mut String) {
	open(out, tab, "CreateParagraph");
	string_field(out, "Title", &w.name);
	string_field(out, "Content", &w.content);
	close(out);
}

pub fn emit_keybind(w: &Keybind, tab: &str, out: &mut String) {
	open(out, tab, "CreateKeybind");
	string_field(out, "Name", &w.name);
	string_field(out, "CurrentKeybind", &w.default_key);
	field(out, "HoldToInteract", literal::boolean(w.hold_to_interact));
	flag(out, &w.id);
	callback(out, "Keybind", &w.behavior);
	close(out);
}

pub fn emit_dropdown(w: &Dropdown, tab: &str, out: &mut String) {
	let current: Vec<&str> = if w.default_option.is_empty() {
		Vec::new()
	} else {
		vec![w.default_option.as_str()]
	};

	open(out, tab, "CreateDropdown");
	string_field(out, "Name", &w.name);
	field(out, "Options", &literal::string_list(&w.options));
	field(out, "CurrentOption", &literal::string_list(&current));
	field(out, "MultipleOptions", literal::boolean(w.multi_select));
	flag(out, &w.id);
	callback(out, "Options", &w.behavior);
	close(out);
}

#[cfg(test)]
mod tests {
	use super::*;

	fn id(s: &str) -> WidgetId {
		WidgetId::new(s).unwrap()
	}

	fn render(widget: &Widget) -> String {
		let mut out = String::new();
		emit(widget, "Tab1", &mut out).unwrap();
		out
	}

	#[test]
	fn button_with_empty_behavior() {
		let w = Widget::Button(Button {
			id: id("b1"),
			..Button::new("Rejoin")
		});
		assert_eq!(
			render(&w),
			"Tab1:CreateButton({\n\tName = \"Rejoin\",\n\tCallback = function() end,\n})\n"
		);
	}

	#[test]
	fn toggle_embeds_behavior_verbatim() {
		let w = Widget::Toggle(Toggle {
			id: id("t1"),
			state: true,
			behavior: "print('on')".into(),
			..Toggle::new("Auto Farm")
		});
		assert_eq!(
			render(&w),
			"Tab1:CreateToggle({\n\
			 \tName = \"Auto Farm\",\n\
			 \tCurrentValue = true,\n\
			 \tFlag = \"t1\",\n\
			 \tCallback = function(Value)\n\
			 print('on')\n\
			 \tend,\n\
			 })\n"
		);
	}

	#[test]
	fn behavior_with_quotes_and_backslashes_is_not_escaped() {
		let body = "local s = \"a\\\\b\"\nprint(s)\n";
		let w = Widget::Button(Button {
			behavior: body.into(),
			..Button::new("x")
		});
		let out = render(&w);
		assert!(out.contains(body));
		assert!(out.ends_with("print(s)\n\tend,\n})\n"));
	}

	#[test]
	fn slider_renders_range_and_numbers() {
		let w = Widget::Slider(Slider {
			id: id("s1"),
			min: 16.0,
			max: 250.5,
			value: 16.0,
			suffix: " Speed".into(),
			..Slider::new("WalkSpeed")
		});
		let out = render(&w);
		assert!(out.contains("\tRange = {16, 250.5},\n"));
		assert!(out.contains("\tIncrement = 1,\n"));
		assert!(out.contains("\tSuffix = \" Speed\",\n"));
		assert!(out.contains("\tCurrentValue = 16,\n"));
		assert!(out.contains("\tCallback = function(Value) end,\n"));
	}

	#[test]
	fn slider_with_nan_is_an_error() {
		let w = Widget::Slider(Slider {
			id: id("s1"),
			min: f64::NAN,
			..Slider::new("bad")
		});
		let mut out = String::new();
		let err = emit(&w, "Tab1", &mut out).unwrap_err();
		assert_eq!(
			err,
			CompileError::NonFiniteNumber {
				widget: id("s1"),
				kind: WidgetKind::Slider,
				field: "min",
			}
		);
		assert!(out.is_empty());
	}

	#[test]
	fn input_fields_in_fixed_order() {
		let w = Widget::Input(Input {
			id: id("i1"),
			clear_on_focus_lost: true,
			..Input::new("Target")
		});
		let out = render(&w);
		let order = [
			"Name",
			"CurrentValue",
			"PlaceholderText",
			"RemoveTextAfterFocusLost = true",
			"Flag",
			"Callback = function(Text)",
		];
		let positions: Vec<usize> = order.iter().map(|k| out.find(k).unwrap()).collect();
		assert!(positions.windows(2).all(|p| p[0] < p[1]));
	}

	#[test]
	fn label_with_and_without_color() {
		let colored = Widget::Label(Label::new("Status"));
		assert_eq!(
			render(&colored),
			"Tab1:CreateLabel(\"Status\", nil, Color3.fromHex(\"#FFFFFF\"), false)\n"
		);

		let plain = Widget::Label(Label {
			color: None,
			..Label::new("Status")
		});
		assert_eq!(render(&plain), "Tab1:CreateLabel(\"Status\")\n");
	}

	#[test]
	fn paragraph_uses_name_as_title() {
		let w = Widget::Paragraph(Paragraph {
			content: "line 1\nline 2".into(),
			..Paragraph::new("About")
		});
		assert_eq!(
			render(&w),
			"Tab1:CreateParagraph({\n\tTitle = \"About\",\n\tContent = \"line 1\\nline 2\",\n})\n"
		);
	}

	#[test]
	fn keybind_fields() {
		let w = Widget::Keybind(Keybind {
			id: id("k1"),
			hold_to_interact: true,
			..Keybind::new("Toggle UI")
		});
		let out = render(&w);
		assert!(out.contains("\tCurrentKeybind = \"K\",\n"));
		assert!(out.contains("\tHoldToInteract = true,\n"));
		assert!(out.contains("\tCallback = function(Keybind) end,\n"));
	}

	#[test]
	fn dropdown_options_and_current_option() {
		let w = Widget::Dropdown(Dropdown {
			id: id("d1"),
			options: vec!["Sword".into(), "Bow".into()],
			default_option: "Bow".into(),
			..Dropdown::new("Weapon")
		});
		let out = render(&w);
		assert!(out.contains("\tOptions = {\"Sword\", \"Bow\"},\n"));
		assert!(out.contains("\tCurrentOption = {\"Bow\"},\n"));
		assert!(out.contains("\tMultipleOptions = false,\n"));

		let empty = Widget::Dropdown(Dropdown {
			default_option: String::new(),
			..Dropdown::new("Weapon")
		});
		assert!(render(&empty).contains("\tCurrentOption = {},\n"));
	}

	#[test]
	fn flag_is_escaped_widget_id() {
		let w = Widget::Toggle(Toggle {
			id: id("odd\"id"),
			..Toggle::new("x")
		});
		assert!(render(&w).contains("\tFlag = \"odd\\\"id\",\n"));
	}
}
