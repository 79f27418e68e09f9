//! Structured export: the same storyboard serialized as JSON or YAML.
//!
//! Both formats emit the identical three-key document (`metadata`,
//! `video_specs`, `segments`, plus `opencode_prompt` when requested).
//! Non-ASCII text is emitted literally in both formats, and key order follows
//! struct declaration order.

use crate::{
    error::{ShotscriptError, ShotscriptResult},
    model::{Segment, Storyboard},
    prompt::execution_prompt,
};

pub const EXPORT_VERSION: &str = "1.0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }
}

#[derive(serde::Serialize)]
struct ExportDocument<'a> {
    metadata: Metadata<'a>,
    video_specs: VideoSpecs<'a>,
    segments: &'a [Segment],
    #[serde(skip_serializing_if = "Option::is_none")]
    opencode_prompt: Option<String>,
}

#[derive(serde::Serialize)]
struct Metadata<'a> {
    title: &'a str,
    version: &'static str,
    generated_at: String,
    duration_seconds: u32,
    total_frames: u64,
}

#[derive(serde::Serialize)]
struct VideoSpecs<'a> {
    background: &'a str,
    visual_style: &'a str,
    character: Option<&'a str>,
    narration: &'a str,
    fps: u32,
}

pub fn export_structured(
    board: &Storyboard,
    format: ExportFormat,
    include_prompt: bool,
) -> ShotscriptResult<String> {
    let doc = ExportDocument {
        metadata: Metadata {
            title: &board.title,
            version: EXPORT_VERSION,
            generated_at: chrono::Utc::now().to_rfc3339(),
            duration_seconds: board.duration_seconds,
            total_frames: board.total_frames(),
        },
        video_specs: VideoSpecs {
            background: &board.background_style,
            visual_style: &board.visual_style,
            character: board.main_character.as_deref(),
            narration: &board.narration_style,
            fps: board.fps,
        },
        segments: &board.segments,
        opencode_prompt: include_prompt.then(|| execution_prompt(board)),
    };

    match format {
        ExportFormat::Json => serde_json::to_string_pretty(&doc)
            .map_err(|e| ShotscriptError::serde(format!("json export: {e}"))),
        ExportFormat::Yaml => serde_yaml::to_string(&doc)
            .map_err(|e| ShotscriptError::serde(format!("yaml export: {e}"))),
    }
}
