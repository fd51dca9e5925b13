use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::ui::settings::UiSettings;

fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("insider_game");
    path.push("ui_settings.json");
    path
}

pub fn load_settings() -> UiSettings {
    let path = settings_path();
    if !path.exists() {
        return UiSettings::default();
    }

    match load_settings_from(&path) {
        Ok(settings) => {
            info!(path = %path.display(), "loaded settings");
            settings
        }
        Err(err) => {
            warn!("using default settings: {err:#}");
            UiSettings::default()
        }
    }
}

pub fn save_settings(settings: &UiSettings) {
    if let Err(err) = save_settings_to(&settings_path(), settings) {
        warn!("could not save settings: {err:#}");
    }
}

pub fn load_settings_from(path: &Path) -> Result<UiSettings> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let settings: UiSettings = serde_json::from_str(&json)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(settings.normalized())
}

pub fn save_settings_to(path: &Path, settings: &UiSettings) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
