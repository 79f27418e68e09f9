//! Markdown rendering of a storyboard.
//!
//! The document skeleton is fixed: title heading, spec block, one section per
//! segment (shots as sub-headings with four labeled fields), the execution
//! prompt, a suggested save path derived from the sanitized title, and a
//! timestamp footer. The label strings below are load-bearing: the reverse
//! parser ([`crate::parse`]) matches them literally.

use crate::{
    model::{Segment, SegmentShots, Storyboard},
    prompt::execution_prompt,
};

/// Spec-block display when the storyboard has no character.
pub const NO_CHARACTER_DISPLAY: &str = "no particular character, abstract visuals";

pub const TITLE_SUFFIX: &str = " — Video Storyboard";

pub fn render_markdown(board: &Storyboard) -> String {
    let total_frames = board.total_frames();
    let character_display = board
        .main_character
        .as_deref()
        .unwrap_or(NO_CHARACTER_DISPLAY);
    let segments = board
        .segments
        .iter()
        .enumerate()
        .map(|(i, seg)| format_segment(seg, i + 1))
        .collect::<Vec<_>>()
        .join("\n\n---\n\n");
    let prompt = execution_prompt(board);
    let safe_title = sanitize_title(&board.title);
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

    format!(
        "# {title}{suffix}\n\
\n\
Targeting the {duration}-second ({total_frames}-frame) cut. Every shot pins its camera move, \
pacing and transition so the result stays dynamic and professional.\n\
\n\
---\n\
\n\
## Video Specs\n\
\n\
- **Duration**: strictly {duration} seconds ({total_frames} frames)\n\
- **Background**: {background}\n\
- **Style**: {visual_style}\n\
- **Character**: {character_display}\n\
- **Narration**: {narration_style}\n\
\n\
---\n\
\n\
## Segment Breakdown\n\
\n\
{segments}\n\
\n\
---\n\
\n\
## Execution Prompt (copy and use directly)\n\
\n\
{prompt}\n\
\n\
---\n\
\n\
## Suggested Save Path\n\
\n\
**Suggested location:** `./docs/{safe_title}_storyboard.md`\n\
\n\
---\n\
\n\
*Generated: {timestamp}*\n",
        title = board.title,
        suffix = TITLE_SUFFIX,
        duration = board.duration_seconds,
        background = board.background_style,
        visual_style = board.visual_style,
        narration_style = board.narration_style,
    )
}

fn format_segment(seg: &Segment, index: usize) -> String {
    let heading = format!(
        "### Segment {index}: {title} ({start}-{end}s)",
        title = seg.title,
        start = seg.start,
        end = seg.end,
    );

    match &seg.shots {
        SegmentShots::Sequence { shots } => {
            let shot_blocks = shots
                .iter()
                .map(|s| {
                    format!(
                        "#### Shot {id}: {shot_type} ({time_range})\n\
\n\
- **Camera**: {camera}\n\
- **Layout**: {layout}\n\
- **Visual**: {visual}\n\
- **Transition**: {transition}\n",
                        id = s.shot_id,
                        shot_type = s.shot_type,
                        time_range = s.time_range,
                        camera = s.camera,
                        layout = s.layout,
                        visual = s.visual,
                        transition = s.transition,
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");

            format!(
                "{heading}\n\
\n\
**Goal**: {goal}\n\
\n\
**Shot order**:\n\
\n\
{shot_blocks}\n\
**Narration**: \"{narration}\"",
                goal = seg.goal,
                narration = seg.narration,
            )
        }
        // Older flat format: one camera treatment directly on the segment.
        SegmentShots::Legacy(flat) => format!(
            "{heading}\n\
\n\
**Goal**: {goal}\n\
\n\
-> Camera: {camera}\n\
\n\
-> Layout: {layout}\n\
\n\
-> Visual: {visual}\n\
\n\
**Narration**: \"{narration}\"",
            goal = seg.goal,
            camera = flat.camera,
            layout = flat.layout,
            visual = flat.visual,
            narration = seg.narration,
        ),
    }
}

/// Strips characters that are not alphanumeric, space, hyphen or underscore,
/// then replaces spaces with underscores.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '-' || *c == '_')
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}
