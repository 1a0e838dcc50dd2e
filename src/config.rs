//! User settings (`config.toml`).
//!
//! Looked up in the platform config dir (e.g. `~/.config/cellgrid/config.toml`)
//! unless `--config` names a file. Problems never abort startup: they are
//! returned as warnings and the defaults are used instead.

use cellgrid_core::SessionOptions;
use cellgrid_core::document::{
    DEFAULT_COLS, DEFAULT_ERROR_TOKEN, DEFAULT_FORMULA_MARKER, DEFAULT_ROWS,
};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB
const DEFAULT_COLUMN_WIDTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub rows: usize,
    pub cols: usize,
    pub formula_marker: String,
    pub error_token: String,
    pub column_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            formula_marker: DEFAULT_FORMULA_MARKER.to_string(),
            error_token: DEFAULT_ERROR_TOKEN.to_string(),
            column_width: DEFAULT_COLUMN_WIDTH,
        }
    }
}

impl Settings {
    /// Session options for the editor, falling back to `=` if the configured
    /// marker is not a single character.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            rows: self.rows,
            cols: self.cols,
            formula_marker: single_char(&self.formula_marker).unwrap_or(DEFAULT_FORMULA_MARKER),
            error_token: self.error_token.clone(),
        }
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Some(c),
        _ => None,
    }
}

pub fn parse_settings(content: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str::<Settings>(content)
}

/// Load settings from `config_file`, or from the user config dir.
/// Returns the settings and any warnings to show the user.
pub fn load_settings(config_file: Option<&Path>) -> (Settings, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let config_path = config_file.map(Path::to_path_buf).or_else(user_config_path);

    let Some(path) = config_path else {
        return (Settings::default(), warnings);
    };

    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (Settings::default(), warnings);
    }

    let settings = match std::fs::metadata(&path) {
        Ok(meta) if meta.len() > MAX_CONFIG_FILE_BYTES => {
            warnings.push(format!(
                "Refusing to read {}: file too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_CONFIG_FILE_BYTES
            ));
            None
        }
        _ => match std::fs::read_to_string(&path) {
            Ok(content) => match parse_settings(&content) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    warnings.push(format!("Failed to parse {}: {}", path.display(), err));
                    None
                }
            },
            Err(err) => {
                warnings.push(format!("Failed to read {}: {}", path.display(), err));
                None
            }
        },
    };

    let settings = settings.unwrap_or_default();
    if single_char(&settings.formula_marker).is_none() {
        warnings.push(format!(
            "formula_marker must be a single character, got {:?}; using '{}'",
            settings.formula_marker, DEFAULT_FORMULA_MARKER
        ));
    }
    (settings, warnings)
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "cellgrid")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(parse_settings("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_file_overrides() {
        let settings = parse_settings("rows = 20\nerror_token = \"#ERR\"\n").unwrap();
        assert_eq!(settings.rows, 20);
        assert_eq!(settings.cols, DEFAULT_COLS);
        assert_eq!(settings.error_token, "#ERR");
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(parse_settings("colour = \"red\"").is_err());
    }

    #[test]
    fn test_marker_must_be_single_char() {
        let settings = parse_settings("formula_marker = \"==\"").unwrap();
        assert_eq!(settings.session_options().formula_marker, '=');

        let settings = parse_settings("formula_marker = \"@\"").unwrap();
        assert_eq!(settings.session_options().formula_marker, '@');
    }

    #[test]
    fn test_load_reports_bad_files() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.toml");
        let (settings, warnings) = load_settings(Some(&missing));
        assert_eq!(settings, Settings::default());
        assert_eq!(warnings.len(), 1);

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "rows = \"many\"").unwrap();
        let (settings, warnings) = load_settings(Some(&bad));
        assert_eq!(settings, Settings::default());
        assert!(warnings[0].starts_with("Failed to parse"));

        let good = dir.path().join("good.toml");
        std::fs::write(&good, "cols = 5\nformula_marker = \"\"").unwrap();
        let (settings, warnings) = load_settings(Some(&good));
        assert_eq!(settings.cols, 5);
        assert_eq!(warnings.len(), 1);
    }
}
