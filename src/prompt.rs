//! Execution-prompt generation.
//!
//! The prompt is an opaque natural-language block handed to a downstream
//! video-generation tool. It is built by concatenating fixed boilerplate with
//! interpolated style fields and a flattened one-line description of every
//! segment and shot. It is generated only; nothing ever parses it back.

use crate::model::{SegmentShots, Storyboard};

/// Knobs for prompt phrasing. The defaults match the generated templates.
#[derive(Clone, Debug)]
pub struct PromptOptions {
    pub camera_movements: String,
    pub rhythm: String,
    pub main_color: String,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            camera_movements: "push-in, orbit, tracking, pan, dolly out".to_string(),
            rhythm: "fast and fluid".to_string(),
            main_color: "blue".to_string(),
        }
    }
}

pub fn execution_prompt(board: &Storyboard) -> String {
    execution_prompt_with(board, &PromptOptions::default())
}

pub fn execution_prompt_with(board: &Storyboard, opts: &PromptOptions) -> String {
    let total_frames = board.total_frames();
    let duration_minutes = f64::from(board.duration_seconds) / 60.0;
    let segment_detail = flatten_segments(board);

    format!(
        "Remotion: create a strictly {duration}-second (durationInFrames: {total_frames}) \
{visual_style} video, total runtime within {duration_minutes:.1} minutes.\n\
\n\
Hard requirements:\n\
- Dense frames: fill the screen, favor grid/flex multi-column layouts, scale text and icons \
to 80-90% of the frame, avoid dead space.\n\
- Fluid motion: every transition uses high-stiffness spring() plus multi-keyframe interpolate \
with easeInOut and staggered child delays; nothing pops in linearly.\n\
- Professional camerawork: follow each shot's camera description exactly ({camera_movements}), \
pacing {rhythm}, cut on the shot sequence.\n\
\n\
Background {background}, primary color {main_color}, professional code highlighting, \
{visual_style}, mid-tempo electronic score, {narration_style}, auto-generated narration \
subtitles.\n\
\n\
Follow the storyboard exactly. Shot detail: {segment_detail}",
        duration = board.duration_seconds,
        visual_style = board.visual_style,
        camera_movements = opts.camera_movements,
        rhythm = opts.rhythm,
        background = board.background_style,
        main_color = opts.main_color,
        narration_style = board.narration_style,
    )
}

/// Pipe-and-semicolon flattening of every segment/shot into one line.
fn flatten_segments(board: &Storyboard) -> String {
    let parts: Vec<String> = board
        .segments
        .iter()
        .map(|seg| match &seg.shots {
            SegmentShots::Sequence { shots } if !shots.is_empty() => {
                let shot_list = shots
                    .iter()
                    .map(|s| format!("shot {}({})-{}", s.shot_id, s.time_range, s.shot_type))
                    .collect::<Vec<_>>()
                    .join(",");
                format!(
                    "Segment {title} ({start}-{end}s): goal-{goal}; shot sequence-{shot_list}; narration-{narration}",
                    title = seg.title,
                    start = seg.start,
                    end = seg.end,
                    goal = seg.goal,
                    narration = seg.narration,
                )
            }
            SegmentShots::Sequence { .. } => format!(
                "Segment {title} ({start}-{end}s): goal-{goal}; narration-{narration}",
                title = seg.title,
                start = seg.start,
                end = seg.end,
                goal = seg.goal,
                narration = seg.narration,
            ),
            SegmentShots::Legacy(flat) => format!(
                "Segment {title} ({start}-{end}s): goal-{goal}; camera-{camera}; layout-{layout}; visual-{visual}; narration-{narration}",
                title = seg.title,
                start = seg.start,
                end = seg.end,
                goal = seg.goal,
                camera = flat.camera,
                layout = flat.layout,
                visual = flat.visual,
                narration = seg.narration,
            ),
        })
        .collect();
    parts.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoryboardBuilder;
    use crate::model::{LegacySingleShot, Segment};

    #[test]
    fn prompt_pins_duration_and_frames() {
        let board = StoryboardBuilder::new("Demo")
            .duration_seconds(60)
            .build()
            .unwrap();
        let p = execution_prompt(&board);
        assert!(p.contains("strictly 60-second"));
        assert!(p.contains("durationInFrames: 1800"));
    }

    #[test]
    fn prompt_flattens_every_segment() {
        let board = StoryboardBuilder::new("Demo")
            .duration_seconds(60)
            .build()
            .unwrap();
        let p = execution_prompt(&board);
        for seg in &board.segments {
            assert!(p.contains(&format!("Segment {}", seg.title)));
        }
        assert!(p.contains(" | "));
    }

    #[test]
    fn legacy_segments_flatten_with_inline_camera() {
        let board = StoryboardBuilder::new("Demo")
            .segments(vec![Segment {
                title: "Flat".to_string(),
                goal: "g".to_string(),
                start: 0,
                end: 60,
                narration: "n".to_string(),
                shots: crate::model::SegmentShots::Legacy(LegacySingleShot {
                    camera: "slow pan".to_string(),
                    layout: "full".to_string(),
                    visual: "chart".to_string(),
                }),
            }])
            .build()
            .unwrap();
        let p = execution_prompt(&board);
        assert!(p.contains("camera-slow pan"));
        assert!(p.contains("layout-full"));
    }
}
