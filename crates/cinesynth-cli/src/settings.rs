use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "cinesynth.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    #[serde(alias = "titleCount")]
    pub title_count: usize,
    #[serde(alias = "creditCount")]
    pub credit_count: usize,
    /// Relative paths resolve against the working directory.
    #[serde(alias = "outputDir")]
    pub output_dir: Option<PathBuf>,
    #[serde(alias = "writeReport")]
    pub write_report: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title_count: 100,
            credit_count: 300,
            output_dir: None,
            write_report: false,
        }
    }
}

/// Load settings from `explicit`, or from [`DEFAULT_CONFIG_FILE`] in `cwd`
/// when present, falling back to defaults.
pub fn load_settings(explicit: Option<&Path>, cwd: &Path) -> Result<Settings, SettingsError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(SettingsError::NotFound(path.to_path_buf()));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = cwd.join(DEFAULT_CONFIG_FILE);
            if !candidate.exists() {
                return Ok(Settings::default());
            }
            candidate
        }
    };

    let content = std::fs::read_to_string(&path).map_err(|source| SettingsError::Io {
        path: path.clone(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| SettingsError::Parse { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(label: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!("cinesynth_cli_{label}_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn missing_default_file_yields_defaults() {
        let dir = temp_dir("defaults");
        let settings = load_settings(None, &dir).expect("load settings");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = temp_dir("missing");
        let result = load_settings(Some(&dir.join("nope.toml")), &dir);
        assert!(matches!(result, Err(SettingsError::NotFound(_))));
    }

    #[test]
    fn reads_snake_and_camel_case_keys() {
        let dir = temp_dir("keys");
        std::fs::write(
            dir.join(DEFAULT_CONFIG_FILE),
            "titleCount = 5\ncredit_count = 12\noutputDir = \"out/data\"\n",
        )
        .expect("write config");

        let settings = load_settings(None, &dir).expect("load settings");
        assert_eq!(settings.title_count, 5);
        assert_eq!(settings.credit_count, 12);
        assert_eq!(settings.output_dir, Some(PathBuf::from("out/data")));
        assert!(!settings.write_report);
    }

    #[test]
    fn negative_counts_are_rejected() {
        let dir = temp_dir("negative");
        let path = dir.join("custom.toml");
        std::fs::write(&path, "title_count = -1\n").expect("write config");

        let result = load_settings(Some(&path), &dir);
        assert!(matches!(result, Err(SettingsError::Parse { .. })));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = temp_dir("unknown");
        std::fs::write(dir.join(DEFAULT_CONFIG_FILE), "seed = 4\n").expect("write config");
        assert!(matches!(
            load_settings(None, &dir),
            Err(SettingsError::Parse { .. })
        ));
    }
}
