//! Optional YAML defaults for the assembler.
//!
//! A missing, unreadable or malformed config is never an error: the generator
//! must stay usable with no configuration present, so every failure path
//! degrades to [`GeneratorConfig::default`] with a warning.

use std::path::Path;

/// Defaults loaded from a YAML file. Every field is optional; the assembler
/// only consults a field when neither the caller nor a preset supplied it.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub video: VideoSection,
    pub visual: VisualSection,
    pub narration: NarrationSection,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VideoSection {
    pub default_duration: Option<u32>,
    pub fps: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VisualSection {
    pub background_style: Option<String>,
    pub visual_style: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NarrationSection {
    pub style: Option<String>,
}

impl GeneratorConfig {
    pub fn from_yaml_str(s: &str) -> Self {
        match serde_yaml::from_str(s) {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!(%err, "config not parseable, using defaults");
                Self::default()
            }
        }
    }

    /// Reads a config file, falling back to defaults if it cannot be read.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(s) => Self::from_yaml_str(&s),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "config not readable, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_config() {
        let cfg = GeneratorConfig::from_yaml_str(
            "video:\n  default_duration: 45\nvisual:\n  background_style: midnight wash\n",
        );
        assert_eq!(cfg.video.default_duration, Some(45));
        assert_eq!(cfg.video.fps, None);
        assert_eq!(cfg.visual.background_style.as_deref(), Some("midnight wash"));
        assert_eq!(cfg.narration.style, None);
    }

    #[test]
    fn malformed_yaml_degrades_to_defaults() {
        let cfg = GeneratorConfig::from_yaml_str("video: [not, a, mapping");
        assert_eq!(cfg, GeneratorConfig::default());
    }

    #[test]
    fn missing_file_degrades_to_defaults() {
        let cfg = GeneratorConfig::load(Path::new("/definitely/not/here.yaml"));
        assert_eq!(cfg, GeneratorConfig::default());
    }
}
