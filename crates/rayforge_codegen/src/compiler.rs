#![forbid(unsafe_code)]

use std::fmt::Write as _;

use rayforge_domain::{Document, Tab, WindowConfig};
use tracing::{debug, trace};

use crate::{CompileError, literal, widgets};

/// Where the generated script loads Rayfield from.
pub const DEFAULT_LIBRARY_URL: &str = "https://sirius.menu/rayfield";

/// Root construct every tab is registered on.
pub const WINDOW_LOCAL: &str = "Window";

/// Table holding the tabs once they no longer fit in locals.
pub const TABS_TABLE: &str = "Tabs";

/// Most tabs bound to their own `local`. Luau caps a function at 200 locals
/// and the chunk already declares `Rayfield` and `Window`.
pub const MAX_TAB_LOCALS: usize = 190;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
	pub library_url: String,
}

impl Default for CompileOptions {
	fn default() -> Self {
		Self {
			library_url: DEFAULT_LIBRARY_URL.to_string(),
		}
	}
}

/// Compile with `CompileOptions::default()`.
pub fn compile(doc: &Document) -> Result<String, CompileError> {
	compile_with(doc, &CompileOptions::default())
}

/// Compile a whole document to one Lua program.
///
/// Output is a pure function of `doc` and `opts`. Any error aborts the whole
/// pass; no partial program is returned.
pub fn compile_with(doc: &Document, opts: &CompileOptions) -> Result<String, CompileError> {
	doc.validate()?;

	let mut out = String::new();
	emit_header(&mut out, &doc.window, opts);

	let tabled = doc.tabs.len() > MAX_TAB_LOCALS;
	if tabled {
		let _ = write!(out, "\nlocal {TABS_TABLE} = {{}}\n");
	}

	for (idx, tab) in doc.tabs.iter().enumerate() {
		let (local, declare) = if tabled {
			(tab_slot_name(idx), false)
		} else {
			(tab_local_name(idx), true)
		};
		out.push('\n');
		emit_tab(&mut out, &local, declare, tab);

		for widget in &tab.elements {
			trace!(tab = %tab.id, widget = %widget.id(), kind = %widget.kind(), "emitting widget");
			out.push('\n');
			widgets::emit(widget, &local, &mut out)?;
		}
	}

	debug!(
		tabs = doc.tabs.len(),
		widgets = doc.widget_count(),
		key_system = doc.window.key_system,
		bytes = out.len(),
		"compiled document"
	);

	Ok(out)
}

/// Local bound to the tab at zero-based `idx`: `Tab1`, `Tab2`, ...
pub fn tab_local_name(idx: usize) -> String {
	format!("Tab{}", idx + 1)
}

/// `Tabs[n]` slot used instead of a local past [`MAX_TAB_LOCALS`].
pub fn tab_slot_name(idx: usize) -> String {
	format!("{TABS_TABLE}[{}]", idx + 1)
}

fn emit_header(out: &mut String, window: &WindowConfig, opts: &CompileOptions) {
	out.push_str("local Rayfield = loadstring(game:HttpGet(");
	literal::push_string(out, &opts.library_url);
	out.push_str("))()\n\n");

	let _ = writeln!(out, "local {WINDOW_LOCAL} = Rayfield:CreateWindow({{");
	entry(out, 1, "Name", &literal::string(&window.name));
	entry(out, 1, "LoadingTitle", &literal::string(&window.loading_title));
	entry(out, 1, "LoadingSubtitle", &literal::string(&window.loading_subtitle));

	let saving = &window.configuration_saving;
	out.push_str("\tConfigurationSaving = {\n");
	entry(out, 2, "Enabled", literal::boolean(saving.enabled));
	entry(out, 2, "FolderName", &literal::string(&saving.folder_name));
	entry(out, 2, "FileName", &literal::string(&saving.file_name));
	out.push_str("\t},\n");

	entry(out, 1, "KeySystem", literal::boolean(window.key_system));

	if window.key_system {
		let key = &window.key_settings;
		out.push_str("\tKeySettings = {\n");
		entry(out, 2, "Title", &literal::string(&key.title));
		entry(out, 2, "Subtitle", &literal::string(&key.subtitle));
		entry(out, 2, "Note", &literal::string(&key.note));
		entry(out, 2, "FileName", &literal::string(&key.file_name));
		entry(out, 2, "SaveKey", literal::boolean(key.save_key));
		entry(out, 2, "GrabbingKey", &literal::string(&key.grabbing_key));
		entry(out, 2, "Key", &literal::string_list(&[key.key.as_str()]));
		out.push_str("\t},\n");
	}

	out.push_str("})\n");
}

fn entry(out: &mut String, depth: usize, key: &str, value: &str) {
	for _ in 0..depth {
		out.push('\t');
	}
	let _ = writeln!(out, "{key} = {value},");
}

fn emit_tab(out: &mut String, target: &str, declare: bool, tab: &Tab) {
	if declare {
		out.push_str("local ");
	}
	let _ = write!(out, "{target} = {WINDOW_LOCAL}:CreateTab(");
	literal::push_string(out, &tab.name);

	let icon = tab.icon.trim();
	if !icon.is_empty() {
		out.push_str(", ");
		if icon.bytes().all(|b| b.is_ascii_digit()) {
			// Roblox asset id.
			out.push_str(icon);
		} else {
			literal::push_string(out, icon);
		}
	}

	out.push_str(")\n");
}
