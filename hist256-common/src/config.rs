use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "HIST256_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_bar_width")]
    pub bar_width: u16, // clamped to >= 1 by the viewer
}

fn default_theme() -> String {
    "dark".into()
}
fn default_bar_width() -> u16 {
    3
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            bar_width: default_bar_width(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Lines starting with this prefix are skipped. Empty disables comments.
    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: String,
}

fn default_comment_prefix() -> String {
    "#".into()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            comment_prefix: default_comment_prefix(),
        }
    }
}

impl InputConfig {
    pub fn is_comment(&self, line: &str) -> bool {
        !self.comment_prefix.is_empty() && line.starts_with(self.comment_prefix.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_format() -> String {
    "json".into()
}
fn default_output_dir() -> String {
    ".".into()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            output_dir: default_output_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    pub fn config_path() -> PathBuf {
        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            return PathBuf::from(env_path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hist256")
            .join("config.toml")
    }

    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Missing file means defaults; a present but malformed file is an error.
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Hist256Error::Config(e.to_string()))
    }

    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Hist256Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg.display.theme, "dark");
        assert_eq!(cfg.display.bar_width, 3);
        assert_eq!(cfg.input.comment_prefix, "#");
        assert_eq!(cfg.export.format, "json");
        assert_eq!(cfg.export.output_dir, ".");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let cfg = Config::from_toml("[display]\ntheme = \"nord\"\n").unwrap();
        assert_eq!(cfg.display.theme, "nord");
        assert_eq!(cfg.display.bar_width, 3);
        assert_eq!(cfg.export.format, "json");
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = Config::from_toml("[display\n").unwrap_err();
        assert!(matches!(err, crate::Hist256Error::Config(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = Config::default();
        cfg.export.format = "csv".into();
        cfg.input.comment_prefix = String::new();
        cfg.save_to(&path).unwrap();
        let back = Config::load_from(&path).unwrap();
        assert_eq!(back.export.format, "csv");
        assert!(back.input.comment_prefix.is_empty());
    }

    #[test]
    fn comment_detection() {
        let cfg = InputConfig::default();
        assert!(cfg.is_comment("# header"));
        assert!(!cfg.is_comment("42"));
        let off = InputConfig { comment_prefix: String::new() };
        assert!(!off.is_comment("# header"));
    }
}
