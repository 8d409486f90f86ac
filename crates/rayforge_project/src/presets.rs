//! Ready-made widgets with common behavior code.

use rayforge_domain::{Button, Slider, Toggle, Widget};

pub struct Preset {
	/// Lookup key, e.g. `walkspeed`.
	pub key: &'static str,
	pub description: &'static str,
	build: fn() -> Widget,
}

impl Preset {
	/// A fresh widget; every call gets a new id.
	pub fn instantiate(&self) -> Widget {
		(self.build)()
	}
}

pub const PRESETS: &[Preset] = &[
	Preset {
		key: "infinite-yield",
		description: "Button that loads the Infinite Yield admin script",
		build: infinite_yield,
	},
	Preset {
		key: "walkspeed",
		description: "Slider bound to the local character's WalkSpeed",
		build: walkspeed,
	},
	Preset {
		key: "jumppower",
		description: "Slider bound to the local character's JumpPower",
		build: jumppower,
	},
	Preset {
		key: "fullbright",
		description: "Toggle that forces daytime lighting without shadows",
		build: fullbright,
	},
	Preset {
		key: "rejoin",
		description: "Button that teleports the player back into the same place",
		build: rejoin,
	},
];

/// Case-insensitive lookup by key.
pub fn find(key: &str) -> Option<&'static Preset> {
	let key = key.trim();
	PRESETS.iter().find(|p| p.key.eq_ignore_ascii_case(key))
}

fn infinite_yield() -> Widget {
	Widget::Button(Button {
		behavior: "loadstring(game:HttpGet(\"https://raw.githubusercontent.com/EdgeIY/infiniteyield/master/source\"))()"
			.to_string(),
		..Button::new("Infinite Yield")
	})
}

fn walkspeed() -> Widget {
	Widget::Slider(Slider {
		min: 16.0,
		max: 250.0,
		value: 16.0,
		suffix: " Speed".to_string(),
		behavior: "game.Players.LocalPlayer.Character.Humanoid.WalkSpeed = Value".to_string(),
		..Slider::new("WalkSpeed")
	})
}

fn jumppower() -> Widget {
	Widget::Slider(Slider {
		min: 50.0,
		max: 300.0,
		value: 50.0,
		suffix: " Power".to_string(),
		behavior: "game.Players.LocalPlayer.Character.Humanoid.JumpPower = Value".to_string(),
		..Slider::new("JumpPower")
	})
}

fn fullbright() -> Widget {
	Widget::Toggle(Toggle {
		behavior: "local Lighting = game:GetService(\"Lighting\")\n\
			if Value then\n\
			\tLighting.Brightness = 2\n\
			\tLighting.ClockTime = 14\n\
			\tLighting.GlobalShadows = false\n\
			else\n\
			\tLighting.Brightness = 1\n\
			\tLighting.GlobalShadows = true\n\
			end"
			.to_string(),
		..Toggle::new("Fullbright")
	})
}

fn rejoin() -> Widget {
	Widget::Button(Button {
		behavior: "game:GetService(\"TeleportService\"):Teleport(game.PlaceId, game.Players.LocalPlayer)".to_string(),
		..Button::new("Rejoin")
	})
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use rayforge_domain::WidgetKind;

	use super::*;

	#[test]
	fn keys_are_unique() {
		let keys: HashSet<_> = PRESETS.iter().map(|p| p.key).collect();
		assert_eq!(keys.len(), PRESETS.len());
	}

	#[test]
	fn find_is_case_insensitive() {
		assert_eq!(find("WalkSpeed").unwrap().key, "walkspeed");
		assert!(find("teleport-anywhere").is_none());
	}

	#[test]
	fn instantiate_yields_fresh_ids() {
		let preset = find("rejoin").unwrap();
		let a = preset.instantiate();
		let b = preset.instantiate();
		assert_eq!(a.kind(), WidgetKind::Button);
		assert_ne!(a.id(), b.id());
		assert!(a.behavior().unwrap().contains("TeleportService"));
	}

	#[test]
	fn every_preset_compiles() {
		let mut doc = rayforge_domain::Document::new();
		let tab = doc.add_tab();
		for preset in PRESETS {
			doc.add_widget(&tab, preset.instantiate()).unwrap();
		}
		let out = rayforge_codegen::compile(&doc).unwrap();
		assert!(out.contains("Lighting.ClockTime = 14"));
		assert!(out.contains("\tRange = {16, 250},\n"));
	}
}
