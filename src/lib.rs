#![forbid(unsafe_code)]

pub mod assemble;
pub mod config;
pub mod error;
pub mod export;
pub mod markdown;
pub mod model;
pub mod parse;
pub mod presets;
pub mod prompt;
pub mod setting;
pub mod templates;

pub use assemble::StoryboardBuilder;
pub use config::GeneratorConfig;
pub use error::{ShotscriptError, ShotscriptResult};
pub use export::{ExportFormat, export_structured};
pub use markdown::{render_markdown, sanitize_title};
pub use model::{LegacySingleShot, Segment, SegmentShots, Shot, Storyboard};
pub use parse::parse_markdown;
pub use presets::{Preset, PresetTable, VideoType};
pub use prompt::{execution_prompt, execution_prompt_with};
pub use setting::Setting;
pub use templates::select_template;
