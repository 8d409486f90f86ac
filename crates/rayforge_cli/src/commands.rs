#![forbid(unsafe_code)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, anyhow, bail};
use chrono::Utc;
use rayforge_domain::{Document, TabId, WidgetId, WidgetKind};
use rayforge_project::{ProjectSession, load_project, presets, project_file_name, save_project, write_script};
use tracing::info;

use crate::config::CliConfig;

/// Tab selector from the command line: a tab id, or a 1-based position.
pub fn resolve_tab(doc: &Document, selector: &str) -> anyhow::Result<TabId> {
	let selector = selector.trim();
	if let Ok(position) = selector.parse::<usize>()
		&& let Some(tab) = doc.tab_at(position)
	{
		return Ok(tab.id.clone());
	}

	let id = TabId::new(selector).map_err(|e| anyhow!("invalid tab selector: {e}"))?;
	match doc.tab(&id) {
		Some(tab) => Ok(tab.id.clone()),
		None => bail!("no tab matches `{selector}` (use a tab id or a position from 1 to {})", doc.tabs.len()),
	}
}

fn open(project: &Path) -> anyhow::Result<ProjectSession> {
	let doc = load_project(project).with_context(|| format!("load {}", project.display()))?;
	Ok(ProjectSession::from_document(doc))
}

fn store(project: &Path, session: &ProjectSession) -> anyhow::Result<()> {
	save_project(project, session.document()).with_context(|| format!("save {}", project.display()))
}

/// Creates an empty project; returns the path written.
pub fn new_project(cfg: &CliConfig, path: Option<PathBuf>) -> anyhow::Result<PathBuf> {
	let path = path.unwrap_or_else(|| {
		let dir = cfg.projects_dir.clone().unwrap_or_default();
		dir.join(project_file_name(Utc::now()))
	});
	if path.exists() {
		bail!("{} already exists", path.display());
	}

	save_project(&path, &Document::new()).with_context(|| format!("create {}", path.display()))?;
	Ok(path)
}

pub enum CompileTarget {
	Stdout(String),
	File(PathBuf),
}

pub fn compile(cfg: &CliConfig, project: &Path, out: Option<PathBuf>) -> anyhow::Result<CompileTarget> {
	let session = open(project)?;
	let script = session
		.compile(&cfg.compile_options())
		.with_context(|| format!("compile {}", project.display()))?;

	let target = out.or_else(|| cfg.output_dir.as_ref().map(|dir| dir.join(&cfg.script_file_name)));
	match target {
		Some(path) => {
			write_script(&path, &script)?;
			Ok(CompileTarget::File(path))
		}
		None => Ok(CompileTarget::Stdout(script)),
	}
}

/// Loads and compiles without writing anything; returns a summary.
pub fn check(cfg: &CliConfig, project: &Path) -> anyhow::Result<String> {
	let session = open(project)?;
	let script = session
		.compile(&cfg.compile_options())
		.with_context(|| format!("compile {}", project.display()))?;

	let doc = session.document();
	let mut summary = format!(
		"{}: ok ({} tabs, {} widgets, {} bytes of Lua)\n",
		project.display(),
		doc.tabs.len(),
		doc.widget_count(),
		script.len()
	);
	for (idx, tab) in doc.tabs.iter().enumerate() {
		let _ = writeln!(summary, "  {}. {} [{}]", idx + 1, tab.name, tab.id);
		for widget in &tab.elements {
			let _ = writeln!(summary, "     - {} {} [{}]", widget.kind(), widget.name(), widget.id());
		}
	}
	Ok(summary)
}

pub fn add_tab(project: &Path, name: Option<String>, icon: Option<String>) -> anyhow::Result<TabId> {
	let mut session = open(project)?;
	let id = session.add_tab();
	if let Some(name) = name {
		session.document_mut().rename_tab(&id, name)?;
	}
	if let Some(icon) = icon {
		session.document_mut().set_tab_icon(&id, icon)?;
	}
	store(project, &session)?;
	info!(tab = %id, "tab added");
	Ok(id)
}

pub fn add_widget(project: &Path, tab: &str, kind: WidgetKind, name: Option<String>) -> anyhow::Result<WidgetId> {
	let mut session = open(project)?;
	let tab = resolve_tab(session.document(), tab)?;
	session.select_tab(&tab)?;
	let id = match name {
		Some(name) => session.add_named_widget(kind, name)?,
		None => session.add_widget(kind)?,
	};
	store(project, &session)?;
	info!(tab = %tab, widget = %id, %kind, "widget added");
	Ok(id)
}

pub fn add_preset(project: &Path, tab: &str, preset: &str) -> anyhow::Result<WidgetId> {
	let preset = presets::find(preset).ok_or_else(|| anyhow!("unknown preset `{preset}` (see `rayforge presets`)"))?;
	let mut session = open(project)?;
	let tab = resolve_tab(session.document(), tab)?;
	session.select_tab(&tab)?;
	let id = session.add_preset(preset)?;
	store(project, &session)?;
	info!(tab = %tab, widget = %id, preset = preset.key, "preset added");
	Ok(id)
}

pub fn remove_tab(project: &Path, tab: &str) -> anyhow::Result<String> {
	let mut session = open(project)?;
	let id = resolve_tab(session.document(), tab)?;
	let removed = session.delete_tab(&id)?;
	store(project, &session)?;
	Ok(format!("removed tab {} ({} widgets)", removed.name, removed.elements.len()))
}

pub fn remove_widget(project: &Path, tab: &str, widget: &str) -> anyhow::Result<String> {
	let mut session = open(project)?;
	let tab = resolve_tab(session.document(), tab)?;
	let widget = WidgetId::new(widget.trim()).map_err(|e| anyhow!("invalid widget id: {e}"))?;
	let removed = session.document_mut().delete_widget(&tab, &widget)?;
	store(project, &session)?;
	Ok(format!("removed {} {}", removed.kind(), removed.name()))
}

pub fn list_presets() -> String {
	let width = presets::PRESETS.iter().map(|p| p.key.len()).max().unwrap_or(0);
	let mut out = String::new();
	for preset in presets::PRESETS {
		let _ = writeln!(out, "{:width$}  {}", preset.key, preset.description);
	}
	out
}
