// Settings: engine configuration loaded from the platform config dir,
// e.g. ~/Library/Application Support/trisplit/settings.json on macOS,
// ~/.config/trisplit/settings.json on Linux.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use trisplit_layout::LayoutConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrisplitSettings {
    #[serde(default)]
    pub layout: LayoutConfig,
}

fn settings_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("trisplit").join("settings.json"))
}

pub fn load_settings() -> TrisplitSettings {
    match settings_path() {
        Some(path) => load_settings_from(&path),
        None => TrisplitSettings::default(),
    }
}

/// Read settings from `path`. A missing or malformed file yields defaults.
pub fn load_settings_from(path: &Path) -> TrisplitSettings {
    match std::fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to parse {}: {}", path.display(), e);
                TrisplitSettings::default()
            }
        },
        Err(_) => TrisplitSettings::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trisplit_layout::{ShowPolicy, Solver};

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("settings.json"));
        assert_eq!(settings.layout, LayoutConfig::default());
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_settings_from(&path).layout, LayoutConfig::default());
    }

    #[test]
    fn partial_layout_section_is_merged_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{ "layout": { "min_px": 180, "show_policy": "defaults", "solver": "clamped" } }"#,
        )
        .unwrap();

        let layout = load_settings_from(&path).layout;
        assert_eq!(layout.min_px, 180.0);
        assert_eq!(layout.show_policy, ShowPolicy::Defaults);
        assert_eq!(layout.solver, Solver::Clamped);
        assert_eq!(layout.handle_width, LayoutConfig::default().handle_width);
    }
}
