use serde::{Deserialize, Serialize};
use egui::Color32;
use std::collections::HashMap;

use crate::model::player::Role;
use crate::model::settings::GameSettings;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiSettings {
    pub ui_scale: f32,

    // Role / accent → color mapping
    pub reveal_colors: HashMap<String, [u8; 4]>,

    /// Setup form defaults for the next game
    pub last_game: GameSettings,
}

pub const ACCENT_KEY: &str = "accent";

/// Built-in palette, also used for keys missing from a saved file.
fn default_rgba(key: &str) -> Option<[u8; 4]> {
    match key {
        "saboteur" => Some([200, 60, 60, 255]),
        "pathfinder" => Some([60, 150, 90, 255]),
        "seeker" => Some([70, 110, 190, 255]),
        ACCENT_KEY => Some([90, 80, 200, 255]),
        _ => None,
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        let reveal_colors = [Role::Saboteur, Role::Pathfinder, Role::Seeker]
            .iter()
            .map(|role| role.color_key())
            .chain([ACCENT_KEY])
            .filter_map(|key| default_rgba(key).map(|rgba| (key.to_string(), rgba)))
            .collect();

        Self {
            ui_scale: 1.0,
            reveal_colors,
            last_game: GameSettings::default(),
        }
    }
}

impl UiSettings {
    pub fn color(&self, key: &str) -> Color32 {
        match self.reveal_colors.get(key).copied().or_else(|| default_rgba(key)) {
            Some([r, g, b, a]) => Color32::from_rgba_unmultiplied(r, g, b, a),
            None => Color32::GRAY,
        }
    }

    pub fn role_color(&self, role: Role) -> Color32 {
        self.color(role.color_key())
    }

    pub fn accent(&self) -> Color32 {
        self.color(ACCENT_KEY)
    }

    pub fn set_color(&mut self, key: &str, color: Color32) {
        self.reveal_colors
            .insert(key.to_string(), color.to_srgba_unmultiplied());
    }

    /// Clamp values that may have been hand-edited in the settings file.
    pub fn normalized(mut self) -> Self {
        self.ui_scale = self.ui_scale.clamp(0.75, 2.0);
        self.last_game = self.last_game.normalized();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: UiSettings = serde_json::from_str(r#"{ "ui_scale": 1.5 }"#).unwrap();

        assert_eq!(settings.ui_scale, 1.5);
        assert_eq!(settings.last_game, GameSettings::default());
        assert_eq!(settings.color("saboteur"), Color32::from_rgb(200, 60, 60));
    }

    #[test]
    fn unknown_color_key_is_gray() {
        assert_eq!(UiSettings::default().color("nope"), Color32::GRAY);
    }

    #[test]
    fn role_colors_survive_a_partial_color_map() {
        let settings: UiSettings =
            serde_json::from_str(r#"{ "reveal_colors": { "seeker": [1, 2, 3, 255] } }"#).unwrap();

        assert_eq!(settings.role_color(Role::Seeker), Color32::from_rgb(1, 2, 3));
        assert_eq!(settings.role_color(Role::Pathfinder), Color32::from_rgb(60, 150, 90));
        assert_eq!(settings.accent(), Color32::from_rgb(90, 80, 200));
    }

    #[test]
    fn set_color_overrides_existing_entry() {
        let mut settings = UiSettings::default();
        settings.set_color("seeker", Color32::from_rgb(1, 2, 3));

        assert_eq!(settings.role_color(Role::Seeker), Color32::from_rgb(1, 2, 3));
    }

    #[test]
    fn normalized_clamps_scale_and_game_settings() {
        let mut settings = UiSettings::default();
        settings.ui_scale = 9.0;
        settings.last_game.player_count = 2;

        let settings = settings.normalized();

        assert_eq!(settings.ui_scale, 2.0);
        assert_eq!(settings.last_game.player_count, 4);
    }
}
