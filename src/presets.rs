//! Named video-type presets: bundles of default style, character and
//! narration values selectable by a short key.

use std::collections::BTreeMap;

/// The closed set of preset names the CLI accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoType {
    TechTutorial,
    ProductPromo,
    StoryTelling,
    DataInsight,
}

impl VideoType {
    pub const ALL: [VideoType; 4] = [
        VideoType::TechTutorial,
        VideoType::ProductPromo,
        VideoType::StoryTelling,
        VideoType::DataInsight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VideoType::TechTutorial => "tech_tutorial",
            VideoType::ProductPromo => "product_promo",
            VideoType::StoryTelling => "story_telling",
            VideoType::DataInsight => "data_insight",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == s)
    }
}

/// One preset entry. Every field is optional; an absent field falls through
/// to the next precedence level. `character` may be present-but-null in the
/// YAML, which means the preset deliberately has no character.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Preset {
    pub background_style: Option<String>,
    pub visual_style: Option<String>,
    pub character: Option<String>,
    pub narration_style: Option<String>,
}

/// Preset lookup table, keyed by preset name.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetTable {
    presets: BTreeMap<String, Preset>,
}

impl Default for PresetTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PresetTable {
    /// The built-in table, used whenever no preset file is supplied.
    pub fn builtin() -> Self {
        let mut presets = BTreeMap::new();
        presets.insert(
            VideoType::TechTutorial.name().to_string(),
            Preset {
                background_style: Some(
                    "deep blue gradient + flowing neural network lines + shimmering particles"
                        .to_string(),
                ),
                visual_style: Some(
                    "professional with a light touch (expressive node mascots, quip bubbles)"
                        .to_string(),
                ),
                character: Some("anthropomorphic AI robot".to_string()),
                narration_style: Some(
                    "mature narrator voice, confident and professional with occasional humor"
                        .to_string(),
                ),
            },
        );
        presets.insert(
            VideoType::ProductPromo.name().to_string(),
            Preset {
                background_style: Some("bright gradient + soft bokeh highlights".to_string()),
                visual_style: Some(
                    "polished and energetic (bold type, punchy icon pops)".to_string(),
                ),
                character: None,
                narration_style: Some("upbeat announcer voice, warm and persuasive".to_string()),
            },
        );
        presets.insert(
            VideoType::StoryTelling.name().to_string(),
            Preset {
                background_style: Some(
                    "warm dusk palette + drifting paper-grain texture".to_string(),
                ),
                visual_style: Some(
                    "cinematic and gentle (hand-drawn accents, soft vignettes)".to_string(),
                ),
                character: Some("curious paper-craft fox".to_string()),
                narration_style: Some(
                    "calm storyteller voice, intimate and unhurried".to_string(),
                ),
            },
        );
        presets.insert(
            VideoType::DataInsight.name().to_string(),
            Preset {
                background_style: Some(
                    "charcoal canvas + faint grid lines + accent glows".to_string(),
                ),
                visual_style: Some("clean editorial (large numerals, annotated charts)".to_string()),
                character: None,
                narration_style: Some("crisp analyst voice, measured and precise".to_string()),
            },
        );
        Self { presets }
    }

    /// Parses a preset table from YAML. A malformed document degrades to the
    /// built-in table rather than failing.
    pub fn from_yaml_str(s: &str) -> Self {
        match serde_yaml::from_str::<BTreeMap<String, Preset>>(s) {
            Ok(presets) => Self { presets },
            Err(err) => {
                tracing::warn!(%err, "preset table not parseable, using built-ins");
                Self::builtin()
            }
        }
    }

    pub fn load(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(s) => Self::from_yaml_str(&s),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "preset table not readable, using built-ins");
                Self::builtin()
            }
        }
    }

    pub fn get(&self, video_type: VideoType) -> Option<&Preset> {
        self.presets.get(video_type.name())
    }

    pub fn get_named(&self, name: &str) -> Option<&Preset> {
        self.presets.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for t in VideoType::ALL {
            assert_eq!(VideoType::from_name(t.name()), Some(t));
        }
        assert_eq!(VideoType::from_name("vlog"), None);
    }

    #[test]
    fn builtin_covers_every_video_type() {
        let table = PresetTable::builtin();
        for t in VideoType::ALL {
            assert!(table.get(t).is_some(), "missing builtin preset for {}", t.name());
        }
    }

    #[test]
    fn yaml_table_overrides_builtins() {
        let table = PresetTable::from_yaml_str(
            "tech_tutorial:\n  visual_style: hand-sketched\n  character: null\n",
        );
        let preset = table.get(VideoType::TechTutorial).unwrap();
        assert_eq!(preset.visual_style.as_deref(), Some("hand-sketched"));
        assert_eq!(preset.character, None);
        // Only the keys in the file exist; the rest of the table is gone.
        assert!(table.get(VideoType::ProductPromo).is_none());
    }

    #[test]
    fn malformed_yaml_degrades_to_builtins() {
        let table = PresetTable::from_yaml_str(": not yaml");
        assert_eq!(table, PresetTable::builtin());
    }
}
