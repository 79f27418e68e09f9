//! Storyboard assembly: merges caller arguments, video-type presets and
//! config defaults into one resolved parameter set, then instantiates the
//! segment templates (or takes caller-supplied segments verbatim).

use crate::{
    config::GeneratorConfig,
    error::{ShotscriptError, ShotscriptResult},
    model::{Segment, Storyboard},
    presets::{Preset, PresetTable, VideoType},
    setting::Setting,
    templates::select_template,
};

pub const DEFAULT_DURATION_SECONDS: u32 = 60;
pub const DEFAULT_FPS: u32 = 30;

pub const FALLBACK_BACKGROUND: &str =
    "deep blue gradient + flowing neural network lines + shimmering particles";
pub const FALLBACK_VISUAL_STYLE: &str =
    "professional with a light touch (expressive node mascots, quip bubbles)";
/// Used only when the character was never provided. An explicit no-character
/// request is preserved as `None`, never replaced by this.
pub const FALLBACK_CHARACTER: &str = "anthropomorphic AI robot";
pub const FALLBACK_NARRATION_STYLE: &str =
    "mature narrator voice, confident and professional with occasional humor";

/// Builder for one storyboard. Per-field precedence, highest first:
/// explicit non-empty argument, video-type preset, config default, built-in
/// fallback literal.
#[derive(Clone, Debug, Default)]
pub struct StoryboardBuilder {
    title: String,
    duration_seconds: Option<u32>,
    fps: Option<u32>,
    background_style: Setting<String>,
    visual_style: Setting<String>,
    main_character: Setting<String>,
    narration_style: Setting<String>,
    segments: Option<Vec<Segment>>,
    video_type: Option<VideoType>,
    config: Option<GeneratorConfig>,
    presets: Option<PresetTable>,
}

impl StoryboardBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn duration_seconds(mut self, seconds: u32) -> Self {
        self.duration_seconds = Some(seconds);
        self
    }

    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = Some(fps);
        self
    }

    pub fn background_style(mut self, s: impl Into<String>) -> Self {
        self.background_style = Setting::from_text(s);
        self
    }

    pub fn visual_style(mut self, s: impl Into<String>) -> Self {
        self.visual_style = Setting::from_text(s);
        self
    }

    /// An empty string counts as an explicit "no character", same as
    /// [`Self::no_character`].
    pub fn main_character(mut self, s: impl Into<String>) -> Self {
        let s = s.into();
        self.main_character = if s.trim().is_empty() {
            Setting::ExplicitNone
        } else {
            Setting::Value(s)
        };
        self
    }

    /// Explicitly requests abstract visuals with no character. Distinct from
    /// never calling a character setter, which falls through to the preset
    /// and then [`FALLBACK_CHARACTER`].
    pub fn no_character(mut self) -> Self {
        self.main_character = Setting::ExplicitNone;
        self
    }

    pub fn narration_style(mut self, s: impl Into<String>) -> Self {
        self.narration_style = Setting::from_text(s);
        self
    }

    /// Uses the supplied segments verbatim and skips template selection.
    /// Contiguity is the caller's responsibility on this path.
    pub fn segments(mut self, segments: Vec<Segment>) -> Self {
        self.segments = Some(segments);
        self
    }

    pub fn video_type(mut self, video_type: VideoType) -> Self {
        self.video_type = Some(video_type);
        self
    }

    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Overrides the built-in preset table (for tests and custom tables).
    pub fn presets(mut self, presets: PresetTable) -> Self {
        self.presets = Some(presets);
        self
    }

    pub fn build(self) -> ShotscriptResult<Storyboard> {
        if self.title.trim().is_empty() {
            return Err(ShotscriptError::validation("title must be non-empty"));
        }
        if self.duration_seconds == Some(0) {
            return Err(ShotscriptError::validation("duration_seconds must be > 0"));
        }
        if self.fps == Some(0) {
            return Err(ShotscriptError::validation("fps must be > 0"));
        }

        let config = self.config.unwrap_or_default();
        let table = self.presets.unwrap_or_default();
        let preset = self.video_type.and_then(|t| {
            let p = table.get(t);
            if p.is_none() {
                tracing::warn!(video_type = t.name(), "unknown video type, ignoring preset");
            }
            p
        });

        let duration_seconds = self
            .duration_seconds
            .or(config.video.default_duration)
            .unwrap_or(DEFAULT_DURATION_SECONDS);
        let fps = self.fps.or(config.video.fps).unwrap_or(DEFAULT_FPS);

        let background_style = resolve_text(
            &self.background_style,
            preset.and_then(|p| p.background_style.as_deref()),
            config.visual.background_style.as_deref(),
            FALLBACK_BACKGROUND,
        );
        let visual_style = resolve_text(
            &self.visual_style,
            preset.and_then(|p| p.visual_style.as_deref()),
            config.visual.visual_style.as_deref(),
            FALLBACK_VISUAL_STYLE,
        );
        let narration_style = resolve_text(
            &self.narration_style,
            preset.and_then(|p| p.narration_style.as_deref()),
            config.narration.style.as_deref(),
            FALLBACK_NARRATION_STYLE,
        );
        let main_character = resolve_character(&self.main_character, preset);

        let segments = match self.segments {
            Some(segments) => segments,
            None => {
                tracing::debug!(duration_seconds, "selecting segment template");
                select_template(duration_seconds, &self.title, main_character.as_deref())
            }
        };

        let board = Storyboard {
            title: self.title,
            duration_seconds,
            fps,
            background_style,
            visual_style,
            main_character,
            narration_style,
            segments,
        };
        board.validate()?;
        Ok(board)
    }
}

fn resolve_text(
    arg: &Setting<String>,
    preset: Option<&str>,
    config: Option<&str>,
    fallback: &str,
) -> String {
    if let Some(v) = arg.value() {
        return v.clone();
    }
    preset
        .or(config)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(fallback)
        .to_string()
}

fn resolve_character(arg: &Setting<String>, preset: Option<&Preset>) -> Option<String> {
    match arg {
        Setting::Value(v) => Some(v.clone()),
        Setting::ExplicitNone => None,
        Setting::Unset => preset
            .and_then(|p| p.character.clone())
            .or_else(|| Some(FALLBACK_CHARACTER.to_string())),
    }
}
