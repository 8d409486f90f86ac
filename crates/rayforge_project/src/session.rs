use rayforge_codegen::{CompileError, CompileOptions};
use rayforge_domain::{Document, DocumentError, Tab, TabId, Widget, WidgetId, WidgetKind};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::codec::{self, CodecError};
use crate::presets::Preset;

#[derive(Debug, Error)]
pub enum SessionError {
	#[error("no tab is selected")]
	NoActiveTab,

	#[error(transparent)]
	Document(#[from] DocumentError),

	#[error(transparent)]
	Codec(#[from] CodecError),

	#[error(transparent)]
	Compile(#[from] CompileError),
}

/// Editor state: the open document plus the selected tab.
#[derive(Debug, Clone, Default)]
pub struct ProjectSession {
	document: Document,
	active_tab: Option<TabId>,
}

impl ProjectSession {
	pub fn new() -> Self {
		Self::default()
	}

	/// Wraps an existing document; the first tab (if any) becomes active.
	pub fn from_document(document: Document) -> Self {
		let active_tab = document.tabs.first().map(|t| t.id.clone());
		Self { document, active_tab }
	}

	pub fn document(&self) -> &Document {
		&self.document
	}

	/// Direct access for edits the session does not wrap (window settings,
	/// widget replacement). Selection is re-checked on the next call.
	pub fn document_mut(&mut self) -> &mut Document {
		&mut self.document
	}

	/// The selected tab, if it still exists.
	pub fn active_tab(&self) -> Option<&Tab> {
		self.active_tab.as_ref().and_then(|id| self.document.tab(id))
	}

	pub fn select_tab(&mut self, id: &TabId) -> Result<(), SessionError> {
		if self.document.tab(id).is_none() {
			return Err(DocumentError::UnknownTab(id.clone()).into());
		}
		self.active_tab = Some(id.clone());
		Ok(())
	}

	/// Appends a default-named tab and selects it.
	pub fn add_tab(&mut self) -> TabId {
		let id = self.document.add_tab();
		debug!(tab = %id, "added tab");
		self.active_tab = Some(id.clone());
		id
	}

	pub fn delete_tab(&mut self, id: &TabId) -> Result<Tab, SessionError> {
		let tab = self.document.delete_tab(id)?;
		if self.active_tab.as_ref() == Some(id) {
			self.active_tab = None;
		}
		debug!(tab = %id, widgets = tab.elements.len(), "deleted tab");
		Ok(tab)
	}

	/// Adds a default widget of `kind` to the active tab.
	pub fn add_widget(&mut self, kind: WidgetKind) -> Result<WidgetId, SessionError> {
		self.push_to_active(Widget::with_defaults(kind))
	}

	pub fn add_named_widget(&mut self, kind: WidgetKind, name: impl Into<String>) -> Result<WidgetId, SessionError> {
		self.push_to_active(Widget::named(kind, name))
	}

	pub fn add_preset(&mut self, preset: &Preset) -> Result<WidgetId, SessionError> {
		self.push_to_active(preset.instantiate())
	}

	fn push_to_active(&mut self, widget: Widget) -> Result<WidgetId, SessionError> {
		let tab = self.active_tab().map(|t| t.id.clone()).ok_or(SessionError::NoActiveTab)?;
		let kind = widget.kind();
		let id = self.document.add_widget(&tab, widget)?;
		debug!(tab = %tab, widget = %id, %kind, "added widget");
		Ok(id)
	}

	/// Replaces the document with a decoded project. On failure the current
	/// document and selection are kept as they were.
	pub fn load_text(&mut self, text: &str) -> Result<(), SessionError> {
		let document = codec::decode(text).inspect_err(|e| warn!("project rejected: {e}"))?;
		info!(tabs = document.tabs.len(), widgets = document.widget_count(), "project loaded");
		*self = Self::from_document(document);
		Ok(())
	}

	pub fn save_text(&self) -> Result<String, SessionError> {
		Ok(codec::encode(&self.document)?)
	}

	pub fn compile(&self, opts: &CompileOptions) -> Result<String, SessionError> {
		Ok(rayforge_codegen::compile_with(&self.document, opts)?)
	}
}
