//! Configuration loading for the `zenoc` CLI: an optional `zeno.toml`
//! (or `--config` override), deserialized with `serde` + `toml` into a
//! `Config` with sane defaults, then merged over CLI flags by the caller.
//! Modeled on `faxt::config::Config`'s search-then-load shape.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

pub const CONFIG_FILE_NAME: &str = "zeno.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub no_color: bool,

    /// Secondary language the `--lang` flag translates diagnostics into.
    /// `None` means diagnostics are left untranslated.
    #[serde(default)]
    pub lang: Option<String>,

    /// Where `std/...` imports resolve from. Relative paths are resolved
    /// against the current working directory at load time, not the
    /// location of `zeno.toml` itself.
    #[serde(default)]
    pub std_dir: Option<PathBuf>,

    /// Target language the generator emits. Only `"go"` has an emitter
    /// built out in this revision; the field exists so a second target
    /// slots in without a config format change.
    #[serde(default = "default_target_lang")]
    pub target_lang: String,

    #[serde(default)]
    pub lint: LintConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LintConfig {
    /// Rule names (as reported in `[<rule>]` output) to skip.
    #[serde(default)]
    pub disabled_rules: Vec<String>,
}

fn default_target_lang() -> String {
    "go".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            no_color: false,
            lang: None,
            std_dir: None,
            target_lang: default_target_lang(),
            lint: LintConfig::default(),
        }
    }
}

impl Config {
    /// Searches the current directory, then `$HOME/.config/zenoc/`, then
    /// the platform config directory, for `zeno.toml`; falls back to
    /// `Config::default()` if none is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::Config(format!("configuration file not found: {}", path.display())));
        }
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| CliError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir().map(|dir| dir.join(".config").join("zenoc").join(CONFIG_FILE_NAME)).filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("zenoc").join(CONFIG_FILE_NAME)).filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_home_config).or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_targets_go() {
        let config = Config::default();
        assert_eq!(config.target_lang, "go");
        assert!(!config.verbose);
        assert!(config.lint.disabled_rules.is_empty());
    }

    #[test]
    fn load_from_path_round_trips_through_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("zeno.toml");
        std::fs::write(&path, "verbose = true\ntarget_lang = \"go\"\n\n[lint]\ndisabled_rules = [\"snake-case-names\"]\n")
            .unwrap();
        let config = Config::load_from_path(&path).unwrap();
        assert!(config.verbose);
        assert_eq!(config.lint.disabled_rules, vec!["snake-case-names".to_string()]);
    }

    #[test]
    fn load_from_missing_path_is_an_error() {
        let err = Config::load_from_path(Path::new("/nonexistent/zeno.toml")).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
