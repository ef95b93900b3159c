//! Settings file support.
//!
//! A TOML file with an optional `[render]` table whose keys mirror [`SettingsUpdate`]:
//!
//! ```toml
//! [render]
//! sleep-interval-ms = 30
//! write-style = "per-char-delay"
//! alignment = "centered-both"
//! arrow-position = "before-and-after"
//! border-style = "menu-centered-and-screen"
//! border-glyphs = "rounded"
//! ```

use crate::error::{Result, ScreenError};
use crate::render::SettingsUpdate;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "screenprinter";
const FILE_NAME: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    render: SettingsUpdate,
}

/// `<config dir>/screenprinter/config.toml`, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(FILE_NAME))
}

/// Parse settings from TOML text.
pub fn parse(text: &str) -> Result<SettingsUpdate> {
    let file: ConfigFile = toml::from_str(text)
        .map_err(|err| ScreenError::configuration(format!("invalid settings file: {err}")))?;
    Ok(file.render)
}

/// Load settings from `path`.
pub fn load(path: &Path) -> Result<SettingsUpdate> {
    let text = std::fs::read_to_string(path).map_err(|err| {
        ScreenError::configuration(format!("cannot read {}: {err}", path.display()))
    })?;
    let update = parse(&text)?;
    log::debug!("loaded settings from {}: {update:?}", path.display());
    Ok(update)
}

/// Load settings from the default location. A missing file means no overrides.
pub fn load_default() -> Result<SettingsUpdate> {
    match default_path() {
        Some(path) if path.is_file() => load(&path),
        _ => Ok(SettingsUpdate::default()),
    }
}
