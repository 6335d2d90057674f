//! Editor configuration file.
//!
//! ```yaml
//! history_limit: 200
//! export:
//!   format: jpeg
//!   quality: 85
//! presets:
//!   - id: noir
//!     name: Noir
//!     adjustments: { saturation: -100, contrast: 30 }
//! ```
//!
//! Every key is optional. A missing `presets` list means the builtin
//! catalog; an explicit list replaces it entirely.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ExportOptions, PresetCatalog, Result};

/// Settings an editing session is built from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Preset catalog.
    pub presets: PresetCatalog,
    /// Maximum number of history entries. `None` keeps everything.
    pub history_limit: Option<usize>,
    /// Default export settings.
    pub export: ExportOptions,
}

impl EditorConfig {
    /// Parses a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        debug!(
            presets = config.presets.len(),
            history_limit = ?config.history_limit,
            "Parsed editor config"
        );
        Ok(config)
    }

    /// Reads and parses a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading editor config");
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Serializes back to YAML.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ExportFormat};

    #[test]
    fn empty_document_is_default() {
        let config = EditorConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.presets.len(), PresetCatalog::builtin().len());
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn full_document() {
        let yaml = r#"
history_limit: 50
export:
  format: jpeg
  quality: 70
presets:
  - id: mono
    name: Mono
    adjustments:
      saturation: -100
  - id: plain
    name: Plain
"#;
        let config = EditorConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.history_limit, Some(50));
        assert_eq!(config.export.format, ExportFormat::Jpeg);
        assert_eq!(config.export.quality, 70);
        assert_eq!(config.presets.ids().collect::<Vec<_>>(), vec!["mono", "plain"]);
        assert!(!config.presets.contains("noir"));
        assert_eq!(config.presets.get("mono").unwrap().resolve().saturation, -100.0);
    }

    #[test]
    fn duplicate_presets_rejected() {
        let yaml = r#"
presets:
  - { id: a, name: A }
  - { id: a, name: Again }
"#;
        let err = EditorConfig::from_yaml_str(yaml).unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = EditorConfig::from_yaml_str("zoom: 2").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn from_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("retouch.yaml");
        let config = EditorConfig {
            history_limit: Some(10),
            ..Default::default()
        };
        fs::write(&path, config.to_yaml_string().unwrap()).unwrap();
        assert_eq!(EditorConfig::from_file(&path).unwrap(), config);

        let missing = EditorConfig::from_file(dir.path().join("nope.yaml")).unwrap_err();
        assert!(missing.is_io_error());
    }
}
