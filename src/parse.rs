//! Best-effort markdown parsing (the reverse path).
//!
//! This is a line-oriented pattern scan, not a grammar: it looks for the
//! literal label prefixes the renderer emits and takes the rest of the line
//! as the value. Lines that match nothing are silently ignored, and fields
//! that never appear keep placeholder defaults. The result is a lossy
//! approximation — `parse_markdown(render_markdown(x))` is not guaranteed to
//! equal `x` — intended only for converting hand-edited documents.

use crate::{
    markdown::{NO_CHARACTER_DISPLAY, TITLE_SUFFIX},
    model::{LegacySingleShot, Segment, SegmentShots, Shot, Storyboard},
};

pub const PLACEHOLDER_TITLE: &str = "untitled";
pub const PLACEHOLDER_BACKGROUND: &str = "default background";
pub const PLACEHOLDER_STYLE: &str = "default style";
pub const PLACEHOLDER_CHARACTER: &str = "default character";
pub const PLACEHOLDER_NARRATION: &str = "default narration";
pub const PLACEHOLDER_DURATION: u32 = 60;
pub const PLACEHOLDER_FPS: u32 = 30;

#[derive(Default)]
struct PartialSegment {
    title: String,
    goal: String,
    start: u32,
    end: u32,
    narration: String,
    shots: Vec<Shot>,
    legacy: LegacySingleShot,
    has_legacy: bool,
}

impl PartialSegment {
    fn finish(self) -> Segment {
        let shots = if !self.shots.is_empty() {
            SegmentShots::Sequence { shots: self.shots }
        } else if self.has_legacy {
            SegmentShots::Legacy(self.legacy)
        } else {
            SegmentShots::empty()
        };
        Segment {
            title: self.title,
            goal: self.goal,
            start: self.start,
            end: self.end,
            narration: self.narration,
            shots,
        }
    }
}

pub fn parse_markdown(text: &str) -> Storyboard {
    let mut title = PLACEHOLDER_TITLE.to_string();
    let mut duration_seconds = PLACEHOLDER_DURATION;
    let mut background_style = PLACEHOLDER_BACKGROUND.to_string();
    let mut visual_style = PLACEHOLDER_STYLE.to_string();
    let mut main_character = Some(PLACEHOLDER_CHARACTER.to_string());
    let mut narration_style = PLACEHOLDER_NARRATION.to_string();

    let mut segments: Vec<Segment> = Vec::new();
    let mut current: Option<PartialSegment> = None;

    for line in text.lines() {
        let line = line.trim_end();

        if let Some(rest) = line.strip_prefix("# ") {
            if let Some(t) = rest.strip_suffix(TITLE_SUFFIX) {
                title = t.trim().to_string();
            }
        } else if let Some(rest) = label_value(line, "- **Duration**:") {
            if let Some(n) = first_uint(rest) {
                duration_seconds = n;
            }
        } else if let Some(rest) = label_value(line, "- **Background**:") {
            background_style = rest.to_string();
        } else if let Some(rest) = label_value(line, "- **Style**:") {
            visual_style = rest.to_string();
        } else if let Some(rest) = label_value(line, "- **Character**:") {
            main_character = if rest == NO_CHARACTER_DISPLAY {
                None
            } else {
                Some(rest.to_string())
            };
        } else if let Some(rest) = label_value(line, "- **Narration**:") {
            narration_style = rest.to_string();
        } else if let Some(rest) = line.strip_prefix("### Segment ") {
            if let Some(prev) = current.take() {
                segments.push(prev.finish());
            }
            let mut seg = PartialSegment::default();
            if let Some((seg_title, range)) = heading_parts(rest) {
                seg.title = seg_title;
                if let Some((start, end)) = parse_range(&range) {
                    seg.start = start;
                    seg.end = end;
                }
            }
            current = Some(seg);
        } else if let Some(rest) = label_value(line, "**Goal**:") {
            if let Some(seg) = current.as_mut() {
                seg.goal = rest.to_string();
            }
        } else if let Some(rest) = line.strip_prefix("#### Shot ") {
            if let Some(seg) = current.as_mut() {
                let mut shot = Shot {
                    shot_id: seg.shots.len() as u32 + 1,
                    time_range: String::new(),
                    shot_type: String::new(),
                    camera: String::new(),
                    layout: String::new(),
                    visual: String::new(),
                    transition: String::new(),
                };
                if let Some((shot_type, range)) = heading_parts(rest) {
                    shot.shot_type = shot_type;
                    shot.time_range = range;
                }
                seg.shots.push(shot);
            }
        } else if let Some(rest) = label_value(line, "- **Camera**:") {
            if let Some(shot) = last_shot(&mut current) {
                shot.camera = rest.to_string();
            }
        } else if let Some(rest) = label_value(line, "- **Layout**:") {
            if let Some(shot) = last_shot(&mut current) {
                shot.layout = rest.to_string();
            }
        } else if let Some(rest) = label_value(line, "- **Visual**:") {
            if let Some(shot) = last_shot(&mut current) {
                shot.visual = rest.to_string();
            }
        } else if let Some(rest) = label_value(line, "- **Transition**:") {
            if let Some(shot) = last_shot(&mut current) {
                shot.transition = rest.to_string();
            }
        } else if let Some(rest) = label_value(line, "-> Camera:") {
            if let Some(seg) = current.as_mut() {
                seg.legacy.camera = rest.to_string();
                seg.has_legacy = true;
            }
        } else if let Some(rest) = label_value(line, "-> Layout:") {
            if let Some(seg) = current.as_mut() {
                seg.legacy.layout = rest.to_string();
                seg.has_legacy = true;
            }
        } else if let Some(rest) = label_value(line, "-> Visual:") {
            if let Some(seg) = current.as_mut() {
                seg.legacy.visual = rest.to_string();
                seg.has_legacy = true;
            }
        } else if let Some(rest) = label_value(line, "**Narration**:") {
            if let Some(seg) = current.as_mut() {
                seg.narration = rest.trim_matches('"').to_string();
            }
        }
        // Anything else (prompt body, separators, footers) is ignored.
    }

    if let Some(prev) = current.take() {
        segments.push(prev.finish());
    }

    Storyboard {
        title,
        duration_seconds,
        fps: PLACEHOLDER_FPS,
        background_style,
        visual_style,
        main_character,
        narration_style,
        segments,
    }
}

fn label_value<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.strip_prefix(label).map(str::trim)
}

fn first_uint(s: &str) -> Option<u32> {
    let digits: String = s
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Splits `"3: Deep Dive (28-44s)"` into the text after the colon and the
/// parenthesized tail: `("Deep Dive", "28-44s")`.
fn heading_parts(rest: &str) -> Option<(String, String)> {
    let (_, after_colon) = rest.split_once(": ")?;
    match after_colon.rfind(" (") {
        Some(idx) => {
            let name = after_colon[..idx].trim().to_string();
            let tail = after_colon[idx + 2..].trim_end_matches(')').to_string();
            Some((name, tail))
        }
        None => Some((after_colon.trim().to_string(), String::new())),
    }
}

fn parse_range(range: &str) -> Option<(u32, u32)> {
    let range = range.trim_end_matches('s');
    let (a, b) = range.split_once('-')?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}

fn last_shot(current: &mut Option<PartialSegment>) -> Option<&mut Shot> {
    current.as_mut().and_then(|seg| seg.shots.last_mut())
}
