//! Source and output locations
//!
//! Defaults are compiled in from `iconsplit.toml`. A user configuration
//! file overrides them key by key, and command-line arguments override
//! both. Only the paths are configurable; the band layout and the
//! background threshold are fixed.

use std::fs;
use std::path::{Path, PathBuf};
use lazy_static::lazy_static;
use log::debug;
use crate::errors::{SplitError, SplitResult};

lazy_static! {
    static ref DEFAULT_CONFIG: SplitConfig = {
        let content = include_str!("../iconsplit.toml");
        SplitConfig::builtin().overlay(content, None).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse built-in configuration: {}", e);
                SplitConfig::builtin()
            })
    };
}

/// Where the sheet is read from and where the icons are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    /// Composite image holding the three icons
    pub source: PathBuf,
    /// Directory receiving the cropped icons
    pub output_dir: PathBuf,
}

impl SplitConfig {
    fn builtin() -> Self {
        SplitConfig {
            source: PathBuf::from("uploaded_media.jpg"),
            output_dir: PathBuf::from("public/icons"),
        }
    }

    /// Configuration compiled into the binary
    pub fn defaults() -> Self {
        DEFAULT_CONFIG.clone()
    }

    /// Parse a configuration string on top of the defaults
    ///
    /// # Arguments
    /// * `content` - TOML text with an optional `[paths]` table
    /// * `base_dir` - Directory that relative paths are resolved against
    pub fn parse_with_base(content: &str, base_dir: Option<&Path>) -> SplitResult<Self> {
        Self::defaults().overlay(content, base_dir)
    }

    /// Load a configuration file on top of the defaults
    ///
    /// Relative paths inside the file are taken relative to the file itself.
    pub fn load<P: AsRef<Path>>(path: P) -> SplitResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| {
            SplitError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;

        Self::parse_with_base(&content, path.parent())
    }

    /// Replace the source path
    pub fn with_source<P: Into<PathBuf>>(mut self, source: P) -> Self {
        self.source = source.into();
        self
    }

    /// Replace the output directory
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    fn overlay(mut self, content: &str, base_dir: Option<&Path>) -> SplitResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| SplitError::ConfigError(format!("invalid TOML: {}", e)))?;

        let paths = match toml_value.get("paths") {
            Some(value) => value.as_table()
                .ok_or_else(|| SplitError::ConfigError("'paths' must be a table".to_string()))?,
            None => return Ok(self),
        };

        if let Some(source) = Self::path_entry(paths, "source", base_dir)? {
            self.source = source;
        }
        if let Some(output_dir) = Self::path_entry(paths, "output_dir", base_dir)? {
            self.output_dir = output_dir;
        }

        Ok(self)
    }

    fn path_entry(table: &toml::Table, key: &str, base_dir: Option<&Path>) -> SplitResult<Option<PathBuf>> {
        let value = match table.get(key) {
            Some(value) => value,
            None => return Ok(None),
        };

        let raw = value.as_str()
            .ok_or_else(|| SplitError::ConfigError(format!("'paths.{}' must be a string", key)))?;

        let path = PathBuf::from(raw);
        match base_dir {
            Some(base) if path.is_relative() => Ok(Some(base.join(path))),
            _ => Ok(Some(path)),
        }
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_come_from_bundled_file() {
        let config = SplitConfig::defaults();
        assert_eq!(config.source, PathBuf::from("uploaded_media.jpg"));
        assert_eq!(config.output_dir, PathBuf::from("public/icons"));
    }

    #[test]
    fn test_builtin_fallback_matches_bundled_file() {
        assert_eq!(SplitConfig::builtin(), SplitConfig::defaults());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = SplitConfig::parse_with_base("[paths]\noutput_dir = \"out\"\n", None).unwrap();
        assert_eq!(config.source, SplitConfig::defaults().source);
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_relative_paths_resolve_against_base() {
        let config = SplitConfig::parse_with_base(
            "[paths]\nsource = \"sheet.png\"\noutput_dir = \"/abs/icons\"\n",
            Some(Path::new("/work")),
        ).unwrap();
        assert_eq!(config.source, PathBuf::from("/work/sheet.png"));
        assert_eq!(config.output_dir, PathBuf::from("/abs/icons"));
    }

    #[test]
    fn test_non_string_path_is_rejected() {
        let err = SplitConfig::parse_with_base("[paths]\nsource = 42\n", None).unwrap_err();
        assert!(matches!(err, SplitError::ConfigError(_)));
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        assert!(SplitConfig::parse_with_base("[paths", None).is_err());
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("iconsplit.toml");
        fs::write(&path, "[paths]\nsource = \"sheet.jpg\"\n").unwrap();

        let config = SplitConfig::load(&path).unwrap();
        assert_eq!(config.source, dir.path().join("sheet.jpg"));
    }

    #[test]
    fn test_overrides_replace_values() {
        let config = SplitConfig::defaults()
            .with_source("a.png")
            .with_output_dir("b");
        assert_eq!(config, SplitConfig { source: "a.png".into(), output_dir: "b".into() });
    }
}
