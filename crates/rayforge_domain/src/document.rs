use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{DocumentError, TabId, Widget, WidgetId, WindowConfig, defaults};

/// One editable control panel: the window plus its ordered tabs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
	pub window: WindowConfig,
	pub tabs: Vec<Tab>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
	pub id: TabId,
	pub name: String,
	#[serde(default)]
	pub icon: String,
	pub elements: Vec<Widget>,
}

impl Tab {
	pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
		Self {
			id: TabId::generate(),
			name: name.into(),
			icon: icon.into(),
			elements: Vec::new(),
		}
	}

	pub fn widget(&self, id: &WidgetId) -> Option<&Widget> {
		self.elements.iter().find(|w| w.id() == id)
	}
}

impl Document {
	/// Default window, zero tabs.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn tab(&self, id: &TabId) -> Option<&Tab> {
		self.tabs.iter().find(|t| &t.id == id)
	}

	fn tab_mut(&mut self, id: &TabId) -> Result<&mut Tab, DocumentError> {
		self.tabs
			.iter_mut()
			.find(|t| &t.id == id)
			.ok_or_else(|| DocumentError::UnknownTab(id.clone()))
	}

	/// Tab at a 1-based position.
	pub fn tab_at(&self, position: usize) -> Option<&Tab> {
		position.checked_sub(1).and_then(|i| self.tabs.get(i))
	}

	/// Finds a widget anywhere in the document, with its owning tab.
	pub fn widget(&self, id: &WidgetId) -> Option<(&Tab, &Widget)> {
		self.tabs
			.iter()
			.find_map(|tab| tab.widget(id).map(|widget| (tab, widget)))
	}

	pub fn widget_count(&self) -> usize {
		self.tabs.iter().map(|t| t.elements.len()).sum()
	}

	/// Appends a tab named `Tab N`.
	pub fn add_tab(&mut self) -> TabId {
		let name = defaults::tab_name(self.tabs.len() + 1);
		self.add_named_tab(name, defaults::TAB_ICON)
	}

	pub fn add_named_tab(&mut self, name: impl Into<String>, icon: impl Into<String>) -> TabId {
		let tab = Tab::new(name, icon);
		let id = tab.id.clone();
		self.tabs.push(tab);
		id
	}

	pub fn rename_tab(&mut self, id: &TabId, name: impl Into<String>) -> Result<(), DocumentError> {
		self.tab_mut(id)?.name = name.into();
		Ok(())
	}

	pub fn set_tab_icon(&mut self, id: &TabId, icon: impl Into<String>) -> Result<(), DocumentError> {
		self.tab_mut(id)?.icon = icon.into();
		Ok(())
	}

	/// Removes a tab and every widget in it.
	pub fn delete_tab(&mut self, id: &TabId) -> Result<Tab, DocumentError> {
		let idx = self
			.tabs
			.iter()
			.position(|t| &t.id == id)
			.ok_or_else(|| DocumentError::UnknownTab(id.clone()))?;
		Ok(self.tabs.remove(idx))
	}

	/// Appends a widget at the end of a tab.
	pub fn add_widget(&mut self, tab: &TabId, widget: Widget) -> Result<WidgetId, DocumentError> {
		if self.widget(widget.id()).is_some() {
			return Err(DocumentError::DuplicateWidgetId(widget.id().clone()));
		}
		let id = widget.id().clone();
		self.tab_mut(tab)?.elements.push(widget);
		Ok(id)
	}

	/// Replaces the widget with the same id in place, returning the old value.
	pub fn replace_widget(&mut self, tab: &TabId, widget: Widget) -> Result<Widget, DocumentError> {
		let tab_ref = self.tab_mut(tab)?;
		let slot = tab_ref
			.elements
			.iter_mut()
			.find(|w| w.id() == widget.id())
			.ok_or_else(|| DocumentError::UnknownWidget {
				tab: tab.clone(),
				widget: widget.id().clone(),
			})?;

		if slot.kind() != widget.kind() {
			return Err(DocumentError::KindChange {
				widget: widget.id().clone(),
				existing: slot.kind(),
				replacement: widget.kind(),
			});
		}

		Ok(std::mem::replace(slot, widget))
	}

	pub fn delete_widget(&mut self, tab: &TabId, widget: &WidgetId) -> Result<Widget, DocumentError> {
		let tab_ref = self.tab_mut(tab)?;
		let idx = tab_ref
			.elements
			.iter()
			.position(|w| w.id() == widget)
			.ok_or_else(|| DocumentError::UnknownWidget {
				tab: tab.clone(),
				widget: widget.clone(),
			})?;
		Ok(tab_ref.elements.remove(idx))
	}

	pub fn set_window(&mut self, window: WindowConfig) -> WindowConfig {
		std::mem::replace(&mut self.window, window)
	}

	/// Checks identifier invariants: non-empty, tab ids unique, widget ids
	/// unique across all tabs.
	pub fn validate(&self) -> Result<(), DocumentError> {
		let mut tab_ids = HashSet::new();
		let mut widget_ids = HashSet::new();

		for tab in &self.tabs {
			if tab.id.as_str().trim().is_empty() {
				return Err(DocumentError::EmptyId);
			}
			if !tab_ids.insert(&tab.id) {
				return Err(DocumentError::DuplicateTabId(tab.id.clone()));
			}

			for widget in &tab.elements {
				if widget.id().as_str().trim().is_empty() {
					return Err(DocumentError::EmptyId);
				}
				if !widget_ids.insert(widget.id()) {
					return Err(DocumentError::DuplicateWidgetId(widget.id().clone()));
				}
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Button, Slider, Toggle, WidgetKind};

	#[test]
	fn new_document_is_empty_with_default_window() {
		let doc = Document::new();
		assert!(doc.tabs.is_empty());
		assert_eq!(doc.window, WindowConfig::default());
	}

	#[test]
	fn add_tab_names_by_position() {
		let mut doc = Document::new();
		let a = doc.add_tab();
		let b = doc.add_tab();
		assert_eq!(doc.tab(&a).unwrap().name, "Tab 1");
		assert_eq!(doc.tab(&b).unwrap().name, "Tab 2");
		assert_eq!(doc.tab_at(2).unwrap().id, b);
		assert!(doc.tab_at(0).is_none());
	}

	#[test]
	fn widgets_keep_insertion_order() {
		let mut doc = Document::new();
		let tab = doc.add_named_tab("Main", "");
		for name in ["one", "two", "three"] {
			doc.add_widget(&tab, Widget::Button(Button::new(name))).unwrap();
		}
		let names: Vec<_> = doc.tab(&tab).unwrap().elements.iter().map(|w| w.name()).collect();
		assert_eq!(names, ["one", "two", "three"]);
	}

	#[test]
	fn add_widget_to_unknown_tab_fails() {
		let mut doc = Document::new();
		let missing = TabId::new("nope").unwrap();
		let err = doc.add_widget(&missing, Widget::with_defaults(WidgetKind::Toggle)).unwrap_err();
		assert_eq!(err, DocumentError::UnknownTab(missing));
	}

	#[test]
	fn widget_ids_are_unique_across_tabs() {
		let mut doc = Document::new();
		let a = doc.add_tab();
		let b = doc.add_tab();
		let button = Widget::Button(Button::new("dup"));
		doc.add_widget(&a, button.clone()).unwrap();
		let err = doc.add_widget(&b, button.clone()).unwrap_err();
		assert_eq!(err, DocumentError::DuplicateWidgetId(button.id().clone()));
	}

	#[test]
	fn delete_tab_cascades_to_widgets() {
		let mut doc = Document::new();
		let tab = doc.add_tab();
		let w = doc.add_widget(&tab, Widget::with_defaults(WidgetKind::Slider)).unwrap();
		let removed = doc.delete_tab(&tab).unwrap();
		assert_eq!(removed.elements.len(), 1);
		assert!(doc.widget(&w).is_none());
		assert_eq!(doc.delete_tab(&tab).unwrap_err(), DocumentError::UnknownTab(tab));
	}

	#[test]
	fn tab_ids_are_not_recycled_after_delete() {
		let mut doc = Document::new();
		let first = doc.add_tab();
		doc.delete_tab(&first).unwrap();
		let second = doc.add_tab();
		assert_ne!(first, second);
	}

	#[test]
	fn replace_widget_keeps_position_and_rejects_kind_change() {
		let mut doc = Document::new();
		let tab = doc.add_tab();
		let first = doc.add_widget(&tab, Widget::with_defaults(WidgetKind::Slider)).unwrap();
		doc.add_widget(&tab, Widget::with_defaults(WidgetKind::Button)).unwrap();

		let updated = Widget::Slider(Slider {
			id: first.clone(),
			max: 250.0,
			..Slider::new("Speed")
		});
		let old = doc.replace_widget(&tab, updated).unwrap();
		assert_eq!(old.name(), "New Slider");
		assert_eq!(doc.tab(&tab).unwrap().elements[0].name(), "Speed");

		let wrong_kind = Widget::Toggle(Toggle {
			id: first.clone(),
			..Toggle::new("Speed")
		});
		let err = doc.replace_widget(&tab, wrong_kind).unwrap_err();
		assert!(matches!(err, DocumentError::KindChange { .. }));
	}

	#[test]
	fn delete_widget_removes_only_that_widget() {
		let mut doc = Document::new();
		let tab = doc.add_tab();
		let a = doc.add_widget(&tab, Widget::with_defaults(WidgetKind::Label)).unwrap();
		let b = doc.add_widget(&tab, Widget::with_defaults(WidgetKind::Paragraph)).unwrap();
		doc.delete_widget(&tab, &a).unwrap();
		assert_eq!(doc.widget_count(), 1);
		assert!(doc.widget(&b).is_some());
		assert!(matches!(
			doc.delete_widget(&tab, &a),
			Err(DocumentError::UnknownWidget { .. })
		));
	}

	#[test]
	fn rename_and_icon_update() {
		let mut doc = Document::new();
		let tab = doc.add_tab();
		doc.rename_tab(&tab, "Player").unwrap();
		doc.set_tab_icon(&tab, "4483362458").unwrap();
		let t = doc.tab(&tab).unwrap();
		assert_eq!((t.name.as_str(), t.icon.as_str()), ("Player", "4483362458"));
	}

	#[test]
	fn validate_catches_duplicates_from_outside_the_api() {
		let mut doc = Document::new();
		let tab = doc.add_tab();
		doc.add_widget(&tab, Widget::with_defaults(WidgetKind::Button)).unwrap();
		assert!(doc.validate().is_ok());

		let copy = doc.tabs[0].clone();
		doc.tabs.push(copy);
		assert_eq!(doc.validate().unwrap_err(), DocumentError::DuplicateTabId(tab));
	}

	#[test]
	fn set_window_returns_previous_config() {
		let mut doc = Document::new();
		let window = WindowConfig {
			name: "Sirius Hub".into(),
			key_system: true,
			..WindowConfig::default()
		};
		let old = doc.set_window(window.clone());
		assert_eq!(old, WindowConfig::default());
		assert_eq!(doc.window, window);
	}
}
