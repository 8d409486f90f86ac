#![forbid(unsafe_code)]

mod commands;
mod config;

use std::path::PathBuf;

use rayforge_domain::WidgetKind;
use tracing::{debug, info};

use crate::commands::CompileTarget;

fn usage_and_exit() -> ! {
	eprintln!(
		"Usage: rayforge [--config PATH] <command> [args]\n\
\n\
Commands:\n\
	new [PATH]                                   Create an empty project (default: projects_dir/Rayfield_Project_<millis>.json)\n\
	compile PROJECT [--out FILE]                 Compile to Lua (stdout unless --out or output_dir is set)\n\
	check PROJECT                                Validate and compile without writing\n\
	add-tab PROJECT [--name N] [--icon I]        Append a tab\n\
	add-widget PROJECT --tab T --kind K [--name N]\n\
	                                             Append a widget (K: button, toggle, slider, input,\n\
	                                             label, paragraph, keybind, dropdown)\n\
	add-preset PROJECT --tab T --preset P        Append a ready-made widget\n\
	rm-tab PROJECT --tab T                       Delete a tab and its widgets\n\
	rm-widget PROJECT --tab T --widget W         Delete a widget by id\n\
	presets                                      List ready-made widgets\n\
\n\
Options:\n\
	--config    Config file (default: ~/.rayforge/config.toml)\n\
	--help      Show this help\n\
\n\
T is a tab id or a 1-based tab position.\n"
	);
	std::process::exit(2)
}

fn init_tracing() {
	let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info,rayforge=debug".to_string());
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
	New { path: Option<PathBuf> },
	Compile { project: PathBuf, out: Option<PathBuf> },
	Check { project: PathBuf },
	AddTab { project: PathBuf, name: Option<String>, icon: Option<String> },
	AddWidget { project: PathBuf, tab: String, kind: WidgetKind, name: Option<String> },
	AddPreset { project: PathBuf, tab: String, preset: String },
	RmTab { project: PathBuf, tab: String },
	RmWidget { project: PathBuf, tab: String, widget: String },
	Presets,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
	config: Option<PathBuf>,
	command: Command,
}

#[derive(Debug, Default)]
struct Flags {
	out: Option<String>,
	name: Option<String>,
	icon: Option<String>,
	tab: Option<String>,
	kind: Option<String>,
	preset: Option<String>,
	widget: Option<String>,
}

/// `Ok(None)` means help was requested.
fn parse(args: impl IntoIterator<Item = String>) -> Result<Option<Args>, String> {
	let mut config = None;
	let mut flags = Flags::default();
	let mut positional = Vec::new();

	let mut it = args.into_iter();
	while let Some(arg) = it.next() {
		let slot = match arg.as_str() {
			"--help" | "-h" => return Ok(None),
			"--config" => {
				let v = it.next().ok_or("--config needs a value")?;
				config = Some(PathBuf::from(v));
				continue;
			}
			"--out" => &mut flags.out,
			"--name" => &mut flags.name,
			"--icon" => &mut flags.icon,
			"--tab" => &mut flags.tab,
			"--kind" => &mut flags.kind,
			"--preset" => &mut flags.preset,
			"--widget" => &mut flags.widget,
			other if other.starts_with("--") => return Err(format!("Unknown argument: {other}")),
			_ => {
				positional.push(arg);
				continue;
			}
		};
		let v = it.next().ok_or_else(|| format!("{arg} needs a value"))?;
		if v.trim().is_empty() && arg != "--icon" && arg != "--name" {
			return Err(format!("{arg} must be non-empty"));
		}
		*slot = Some(v);
	}

	let mut positional = positional.into_iter();
	let name = positional.next().ok_or("missing command")?;
	let project = positional.next().map(PathBuf::from);
	if let Some(extra) = positional.next() {
		return Err(format!("unexpected argument: {extra}"));
	}

	let need_project = || project.clone().ok_or_else(|| format!("{name} needs a PROJECT path"));
	let need = |flag: Option<String>, label: &str| flag.ok_or_else(|| format!("{name} needs {label}"));

	let command = match name.as_str() {
		"new" => Command::New { path: project.clone() },
		"compile" => Command::Compile {
			project: need_project()?,
			out: flags.out.map(PathBuf::from),
		},
		"check" => Command::Check { project: need_project()? },
		"add-tab" => Command::AddTab {
			project: need_project()?,
			name: flags.name,
			icon: flags.icon,
		},
		"add-widget" => {
			let kind = need(flags.kind, "--kind")?;
			Command::AddWidget {
				project: need_project()?,
				tab: need(flags.tab, "--tab")?,
				kind: kind.parse().map_err(|e| format!("--kind: {e}"))?,
				name: flags.name,
			}
		}
		"add-preset" => Command::AddPreset {
			project: need_project()?,
			tab: need(flags.tab, "--tab")?,
			preset: need(flags.preset, "--preset")?,
		},
		"rm-tab" => Command::RmTab {
			project: need_project()?,
			tab: need(flags.tab, "--tab")?,
		},
		"rm-widget" => Command::RmWidget {
			project: need_project()?,
			tab: need(flags.tab, "--tab")?,
			widget: need(flags.widget, "--widget")?,
		},
		"presets" => Command::Presets,
		other => return Err(format!("Unknown command: {other}")),
	};

	Ok(Some(Args { config, command }))
}

fn parse_args() -> Args {
	match parse(std::env::args().skip(1)) {
		Ok(Some(args)) => args,
		Ok(None) => usage_and_exit(),
		Err(e) => {
			eprintln!("{e}");
			usage_and_exit()
		}
	}
}

fn main() -> anyhow::Result<()> {
	init_tracing();

	let args = parse_args();

	let config_path = match args.config {
		Some(path) => path,
		None => config::default_config_path()?,
	};
	let cfg = config::load_config_from_path(&config_path)?;
	debug!(path = %config_path.display(), library_url = %cfg.library_url, "loaded cli config (toml + env overrides)");

	match args.command {
		Command::New { path } => {
			let path = commands::new_project(&cfg, path)?;
			println!("{}", path.display());
		}
		Command::Compile { project, out } => match commands::compile(&cfg, &project, out)? {
			CompileTarget::Stdout(script) => print!("{script}"),
			CompileTarget::File(path) => info!(path = %path.display(), "script written"),
		},
		Command::Check { project } => print!("{}", commands::check(&cfg, &project)?),
		Command::AddTab { project, name, icon } => println!("{}", commands::add_tab(&project, name, icon)?),
		Command::AddWidget {
			project,
			tab,
			kind,
			name,
		} => println!("{}", commands::add_widget(&project, &tab, kind, name)?),
		Command::AddPreset { project, tab, preset } => println!("{}", commands::add_preset(&project, &tab, &preset)?),
		Command::RmTab { project, tab } => println!("{}", commands::remove_tab(&project, &tab)?),
		Command::RmWidget { project, tab, widget } => println!("{}", commands::remove_widget(&project, &tab, &widget)?),
		Command::Presets => print!("{}", commands::list_presets()),
	}

	Ok(())
}
