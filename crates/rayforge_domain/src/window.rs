use serde::{Deserialize, Serialize};

/// Root window settings of the generated interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowConfig {
	pub name: String,
	pub loading_title: String,
	pub loading_subtitle: String,
	pub configuration_saving: ConfigurationSaving,
	pub key_system: bool,
	/// Only meaningful while `key_system` is set; may hold anything otherwise.
	#[serde(default)]
	pub key_settings: KeySettings,
}

/// Whether the generated script persists its own flag values, and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationSaving {
	pub enabled: bool,
	pub folder_name: String,
	pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeySettings {
	pub title: String,
	pub subtitle: String,
	pub note: String,
	pub file_name: String,
	pub save_key: bool,
	pub grabbing_key: String,
	pub key: String,
}

impl Default for WindowConfig {
	fn default() -> Self {
		Self {
			name: "Rayfield UI".to_string(),
			loading_title: "Rayfield Interface Suite".to_string(),
			loading_subtitle: "by Sirius".to_string(),
			configuration_saving: ConfigurationSaving::default(),
			key_system: false,
			key_settings: KeySettings::default(),
		}
	}
}

impl Default for ConfigurationSaving {
	fn default() -> Self {
		Self {
			enabled: true,
			folder_name: "Rayfield Interface Suite".to_string(),
			file_name: "Big Hub".to_string(),
		}
	}
}

impl Default for KeySettings {
	fn default() -> Self {
		Self {
			title: "Sirius Hub".to_string(),
			subtitle: "Key System".to_string(),
			note: "Join the discord (discord.gg/sirius)".to_string(),
			file_name: "SiriusKey".to_string(),
			save_key: true,
			grabbing_key: "Kopied Key".to_string(),
			key: "Hello".to_string(),
		}
	}
}
