//! File-based configuration source.

use super::{ConfigSource, Format};
use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};

/// File-based configuration source.
///
/// Reads a YAML or JSON document with the format detected from the file
/// extension.
///
/// # Examples
///
/// ```rust,no_run
/// use imagecustomizer_config::sources::FileSource;
///
/// let source = FileSource::new("image-config.yaml");
/// ```
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a new file source.
    ///
    /// The format is detected from the file extension:
    /// - `.yaml`, `.yml` -> YAML
    /// - `.json` -> JSON
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Detect the format from the file extension.
    fn detect_format(&self) -> Result<Format> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ConfigError::LoadError(format!(
                    "Unable to determine file format for: {}",
                    self.path.display()
                ))
            })?;

        match extension {
            "yaml" | "yml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            _ => Err(ConfigError::LoadError(format!(
                "Unsupported file extension: {}. Supported: .yaml, .yml, .json",
                extension
            ))),
        }
    }
}

impl ConfigSource for FileSource {
    fn read(&self) -> Result<String> {
        self.detect_format()?;

        if !self.path.exists() {
            return Err(ConfigError::LoadError(format!(
                "Configuration file not found: {}",
                self.path.display()
            )));
        }

        Ok(std::fs::read_to_string(&self.path)?)
    }

    // An unsupported extension is reported by `read`.
    fn format(&self) -> Format {
        self.detect_format().unwrap_or(Format::Yaml)
    }

    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_detect_format_yaml() {
        let source = FileSource::new("config.yaml");
        assert_eq!(source.detect_format().unwrap(), Format::Yaml);

        let source = FileSource::new("config.yml");
        assert_eq!(source.detect_format().unwrap(), Format::Yaml);
    }

    #[test]
    fn test_detect_format_json() {
        let source = FileSource::new("config.json");
        assert_eq!(source.detect_format().unwrap(), Format::Json);
    }

    #[test]
    fn test_detect_format_unknown() {
        let source = FileSource::new("config.toml");
        assert!(source.detect_format().is_err());

        let source = FileSource::new("config");
        assert!(source.detect_format().is_err());
    }

    #[test]
    fn test_read_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        fs::write(
            &config_path,
            r#"
os:
  resetBootLoaderType: hard-reset
"#,
        )
        .unwrap();

        let source = FileSource::new(&config_path);
        let text = source.read().unwrap();
        assert!(text.contains("hard-reset"));
    }

    #[test]
    fn test_read_unsupported_extension_fails_before_io() {
        let source = FileSource::new("/nonexistent/config.txt");
        let err = source.read().unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    #[test]
    fn test_read_nonexistent_file() {
        let source = FileSource::new("/nonexistent/config.yaml");
        let result = source.read();
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_name() {
        let source = FileSource::new("config.yaml");
        assert!(source.name().contains("config.yaml"));
    }
}
