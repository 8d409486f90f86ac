#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, anyhow};
use rayforge_codegen::{CompileOptions, DEFAULT_LIBRARY_URL};
use rayforge_project::SCRIPT_FILE_NAME;
use serde::Deserialize;
use tracing::info;

pub const ENV_LIBRARY_URL: &str = "RAYFORGE_LIBRARY_URL";
pub const ENV_OUTPUT_DIR: &str = "RAYFORGE_OUTPUT_DIR";
pub const ENV_SCRIPT_FILE: &str = "RAYFORGE_SCRIPT_FILE";
pub const ENV_PROJECTS_DIR: &str = "RAYFORGE_PROJECTS_DIR";

/// Default config path: `~/.rayforge/config.toml`.
pub fn default_config_path() -> anyhow::Result<PathBuf> {
	let home = dirs::home_dir().ok_or_else(|| anyhow!("could not determine home directory"))?;
	Ok(home.join(".rayforge").join("config.toml"))
}

/// Load the CLI config from TOML (missing file is fine) and env overrides.
pub fn load_config_from_path(path: &Path) -> anyhow::Result<CliConfig> {
	let file_cfg = read_toml_if_exists(path)
		.with_context(|| format!("read config from {}", path.display()))?
		.unwrap_or_default();

	let mut cfg = CliConfig::from_file(file_cfg);
	apply_env_overrides(&mut cfg);
	Ok(cfg)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
	/// URL the generated loader line fetches Rayfield from.
	pub library_url: String,
	/// Where `compile` writes scripts when `--out` is not given. `None` prints
	/// to stdout.
	pub output_dir: Option<PathBuf>,
	pub script_file_name: String,
	/// Where `new` creates projects when no path is given.
	pub projects_dir: Option<PathBuf>,
}

impl Default for CliConfig {
	fn default() -> Self {
		Self {
			library_url: DEFAULT_LIBRARY_URL.to_string(),
			output_dir: None,
			script_file_name: SCRIPT_FILE_NAME.to_string(),
			projects_dir: None,
		}
	}
}

impl CliConfig {
	fn from_file(file: FileConfig) -> Self {
		let defaults = Self::default();
		Self {
			library_url: file.library_url.filter(|s| !s.trim().is_empty()).unwrap_or(defaults.library_url),
			output_dir: file.output_dir.filter(|s| !s.trim().is_empty()).map(PathBuf::from),
			script_file_name: file
				.script_file_name
				.filter(|s| !s.trim().is_empty())
				.unwrap_or(defaults.script_file_name),
			projects_dir: file.projects_dir.filter(|s| !s.trim().is_empty()).map(PathBuf::from),
		}
	}

	pub fn compile_options(&self) -> CompileOptions {
		CompileOptions {
			library_url: self.library_url.clone(),
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FileConfig {
	library_url: Option<String>,
	output_dir: Option<String>,
	script_file_name: Option<String>,
	projects_dir: Option<String>,
}

fn read_toml_if_exists(path: &Path) -> anyhow::Result<Option<FileConfig>> {
	match fs::read_to_string(path) {
		Ok(s) => {
			let cfg: FileConfig = toml::from_str(&s).context("parse TOML")?;
			Ok(Some(cfg))
		}
		Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
		Err(e) => Err(anyhow!(e).context("read config file")),
	}
}

fn apply_env_overrides(cfg: &mut CliConfig) {
	apply_overrides(cfg, |key| std::env::var(key).ok());
}

fn apply_overrides(cfg: &mut CliConfig, lookup: impl Fn(&str) -> Option<String>) {
	let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

	if let Some(v) = get(ENV_LIBRARY_URL) {
		cfg.library_url = v;
		info!("cli config: library_url overridden by env");
	}

	if let Some(v) = get(ENV_OUTPUT_DIR) {
		cfg.output_dir = Some(PathBuf::from(v));
		info!("cli config: output_dir overridden by env");
	}

	if let Some(v) = get(ENV_SCRIPT_FILE) {
		cfg.script_file_name = v;
		info!("cli config: script_file_name overridden by env");
	}

	if let Some(v) = get(ENV_PROJECTS_DIR) {
		cfg.projects_dir = Some(PathBuf::from(v));
		info!("cli config: projects_dir overridden by env");
	}
}
