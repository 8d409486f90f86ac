use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rayforge_domain::Document;
use thiserror::Error;
use tracing::{error, info};

use crate::codec::{self, CodecError};

/// Default name for a generated script download.
pub const SCRIPT_FILE_NAME: &str = "Rayfield_Script.lua";

#[derive(Debug, Error)]
pub enum ProjectError {
	#[error("{path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("{path}: {source}")]
	Codec {
		path: PathBuf,
		#[source]
		source: CodecError,
	},
}

/// `Rayfield_Project_<unix millis>.json`.
pub fn project_file_name(at: DateTime<Utc>) -> String {
	format!("Rayfield_Project_{}.json", at.timestamp_millis())
}

pub fn load_project(path: &Path) -> Result<Document, ProjectError> {
	info!("loading project from {}", path.display());
	let data = fs::read_to_string(path).map_err(|source| ProjectError::Io {
		path: path.to_path_buf(),
		source,
	})?;

	codec::decode(&data).map_err(|source| {
		error!("rejected project {}: {}", path.display(), source);
		ProjectError::Codec {
			path: path.to_path_buf(),
			source,
		}
	})
}

pub fn save_project(path: &Path, doc: &Document) -> Result<(), ProjectError> {
	let data = codec::encode(doc).map_err(|source| ProjectError::Codec {
		path: path.to_path_buf(),
		source,
	})?;
	write_text(path, &data)?;
	info!(
		tabs = doc.tabs.len(),
		widgets = doc.widget_count(),
		"saved project {} ({} bytes)",
		path.display(),
		data.len()
	);
	Ok(())
}

pub fn write_script(path: &Path, script: &str) -> Result<(), ProjectError> {
	write_text(path, script)?;
	info!("wrote script {} ({} bytes)", path.display(), script.len());
	Ok(())
}

fn write_text(path: &Path, data: &str) -> Result<(), ProjectError> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent).map_err(|source| ProjectError::Io {
			path: parent.to_path_buf(),
			source,
		})?;
	}

	fs::write(path, data).map_err(|source| ProjectError::Io {
		path: path.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use chrono::TimeZone;
	use rayforge_domain::{Slider, Widget, WidgetKind};

	use super::*;

	#[test]
	fn project_file_name_uses_millis() {
		let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
		assert_eq!(project_file_name(at), "Rayfield_Project_1700000000123.json");
	}

	#[test]
	fn save_then_load() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested").join("hub.json");

		let mut doc = Document::new();
		let tab = doc.add_tab();
		doc.add_widget(&tab, Widget::with_defaults(WidgetKind::Keybind)).unwrap();

		save_project(&path, &doc).unwrap();
		assert_eq!(load_project(&path).unwrap(), doc);
	}

	#[test]
	fn unsavable_document_leaves_existing_file_alone() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("hub.json");

		let mut doc = Document::new();
		let tab = doc.add_tab();
		save_project(&path, &doc).unwrap();
		let before = fs::read_to_string(&path).unwrap();

		doc.add_widget(
			&tab,
			Widget::Slider(Slider {
				min: f64::NEG_INFINITY,
				..Slider::new("Speed")
			}),
		)
		.unwrap();
		let err = save_project(&path, &doc).unwrap_err();
		assert!(matches!(
			err,
			ProjectError::Codec {
				source: CodecError::NonFiniteNumber { field: "min", .. },
				..
			}
		));
		assert_eq!(fs::read_to_string(&path).unwrap(), before);
		assert!(load_project(&path).is_ok());
	}

	#[test]
	fn load_reports_codec_errors_with_path() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("bad.json");
		fs::write(&path, r#"{ "window": {} }"#).unwrap();

		let err = load_project(&path).unwrap_err();
		assert!(matches!(
			err,
			ProjectError::Codec {
				source: CodecError::MissingSection("tabs"),
				..
			}
		));
		assert!(err.to_string().contains("bad.json"));
	}

	#[test]
	fn load_missing_file_is_io_error() {
		let dir = tempfile::tempdir().unwrap();
		let err = load_project(&dir.path().join("absent.json")).unwrap_err();
		assert!(matches!(err, ProjectError::Io { .. }));
	}

	#[test]
	fn write_script_creates_parent_dirs() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("out").join(SCRIPT_FILE_NAME);
		write_script(&path, "print('hi')\n").unwrap();
		assert_eq!(fs::read_to_string(&path).unwrap(), "print('hi')\n");
	}
}
