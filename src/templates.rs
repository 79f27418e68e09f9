//! Duration-bucketed segment templates.
//!
//! Each template is a fixed recipe: segment boundaries come from integer
//! arithmetic over the duration (remainder seconds are absorbed by the final
//! segment, so coverage is exact), and shot text interpolates the title and
//! the character description into fixed phrases. Contiguity of the returned
//! segments is guaranteed by construction.

use crate::model::{Segment, SegmentShots, Shot};

/// Placeholder used in shot text when no character was supplied.
pub const GENERIC_CHARACTER: &str = "lead icon";

/// Selects the template for `duration_seconds` and expands it.
///
/// Buckets: `<= 30` short (3 segments), `<= 90` medium (5 segments),
/// `> 90` long (7 segments). Callers must pass a positive duration; a zero
/// duration is a contract violation upstream, not a recoverable condition
/// here.
pub fn select_template(
    duration_seconds: u32,
    title: &str,
    character: Option<&str>,
) -> Vec<Segment> {
    let who = character.unwrap_or(GENERIC_CHARACTER);
    if duration_seconds <= 30 {
        short_segments(duration_seconds, title, who)
    } else if duration_seconds <= 90 {
        medium_segments(duration_seconds, title, who)
    } else {
        long_segments(duration_seconds, title, who)
    }
}

fn range_text(start: u32, end: u32) -> String {
    format!("{start}-{end}s")
}

fn mid(start: u32, end: u32) -> u32 {
    start + (end - start) / 2
}

#[allow(clippy::too_many_arguments)]
fn shot(
    shot_id: u32,
    start: u32,
    end: u32,
    shot_type: &str,
    camera: String,
    layout: String,
    visual: String,
    transition: &str,
) -> Shot {
    Shot {
        shot_id,
        time_range: range_text(start, end),
        shot_type: shot_type.to_string(),
        camera,
        layout,
        visual,
        transition: transition.to_string(),
    }
}

fn segment(title: &str, goal: &str, start: u32, end: u32, narration: String, shots: Vec<Shot>) -> Segment {
    Segment {
        title: title.to_string(),
        goal: goal.to_string(),
        start,
        end,
        narration,
        shots: SegmentShots::Sequence { shots },
    }
}

/// Short template (3 segments): thirds via integer division, remainder into
/// the closing segment.
fn short_segments(d: u32, title: &str, who: &str) -> Vec<Segment> {
    let third = d / 3;
    let split1 = (third / 2).max(1);
    let split2 = third + (third / 3).max(2);
    let cta_split = d.saturating_sub(2).max(third * 2);

    vec![
        segment(
            "Opening Hook",
            "Grab attention fast and introduce the topic",
            0,
            third,
            format!("A rapid-fire look at what {title} is about!"),
            vec![
                shot(
                    1,
                    0,
                    split1,
                    "Push-in (Dolly In)",
                    format!("spring dolly in from black, {who} rises from the bottom"),
                    format!("{who} at 40% of frame, title spanning full width"),
                    format!("title text flies in, {who} lands with a slight spin"),
                    "seamless cut",
                ),
                shot(
                    2,
                    split1,
                    third,
                    "Orbit",
                    format!("360° orbit around {who}"),
                    format!("{who} centered, keyword bubbles circling"),
                    format!("{who} changes expression, bubbles pop in one by one"),
                    "quick cut",
                ),
            ],
        ),
        segment(
            "Core Showcase",
            "Show the main content or effect",
            third,
            third * 2,
            "The core point, stated as plainly as possible!".to_string(),
            vec![
                shot(
                    1,
                    third,
                    split2,
                    "Orbit",
                    "orbit around the core element".to_string(),
                    "core element centered, icons circling it".to_string(),
                    "key graphics and numbers flow around the center".to_string(),
                    "smooth cut",
                ),
                shot(
                    2,
                    split2,
                    third * 2,
                    "Close-up Push-in",
                    "fast push-in on the key element".to_string(),
                    "key element at 60% of frame".to_string(),
                    "headline numbers highlighted with sparkle accents".to_string(),
                    "quick cut",
                ),
            ],
        ),
        segment(
            "Closing Call",
            "Reinforce the takeaway and prompt action",
            third * 2,
            d,
            "A one-line recap and a nudge to act!".to_string(),
            vec![
                shot(
                    1,
                    third * 2,
                    cta_split,
                    "Converge",
                    "every element snaps toward the center".to_string(),
                    "CTA text centered, remaining elements converging".to_string(),
                    "CTA text punches in".to_string(),
                    "bounce cut",
                ),
                shot(
                    2,
                    cta_split,
                    d,
                    "Dolly Out",
                    "fast dolly out to the full frame".to_string(),
                    "QR code or link at 40% of frame".to_string(),
                    "QR code or link appears".to_string(),
                    "hard out",
                ),
            ],
        ),
    ]
}

/// Medium template (5 segments): boundaries on fifteenths of the duration
/// (`3/15, 7/15, 11/15, 13/15`), which lands on `[0,12,28,44,52,60]` for a
/// 60-second video.
fn medium_segments(d: u32, title: &str, who: &str) -> Vec<Segment> {
    let intro_end = d * 3 / 15;
    let concept_end = d * 7 / 15;
    let detail_end = d * 11 / 15;
    let effect_end = d * 13 / 15;

    vec![
        segment(
            "Opening + Setup",
            "Build interest and set the stage",
            0,
            intro_end,
            format!("Hello! Today we're looking at {title}!"),
            vec![
                shot(
                    1,
                    0,
                    mid(0, intro_end),
                    "Push-in (Dolly In)",
                    format!("spring dolly in from black, {who} rises from the bottom"),
                    format!("{who} at 40% of frame, title spanning full width"),
                    format!("title text staggers in from the corners, {who} lands with a slight spin"),
                    "seamless cut",
                ),
                shot(
                    2,
                    mid(0, intro_end),
                    intro_end,
                    "Orbit",
                    format!("360° orbit around {who}, background particles accelerating"),
                    format!("{who} centered, key info bubbles circling"),
                    format!("{who} changes expression, particles streak past"),
                    "smooth cut",
                ),
            ],
        ),
        segment(
            "Core Concept",
            "Explain the central concept or mechanism",
            intro_end,
            concept_end,
            "One clean idea, simple and elegant at its core!".to_string(),
            vec![
                shot(
                    1,
                    intro_end,
                    mid(intro_end, concept_end),
                    "Push-in (Dolly In)",
                    "fast spring dolly in, concept diagram rises from the bottom".to_string(),
                    "diagram at 50% of frame, keyword bubbles around it".to_string(),
                    "concept headline flies in, keywords stagger in from the edges".to_string(),
                    "seamless cut",
                ),
                shot(
                    2,
                    mid(intro_end, concept_end),
                    concept_end,
                    "Orbit",
                    "360° orbit around the concept structure".to_string(),
                    "core concept centered, sub-concepts distributed around it".to_string(),
                    "connection lines ripple outward, node icons rotate".to_string(),
                    "smooth cut",
                ),
            ],
        ),
        segment(
            "Deep Dive",
            "Walk through the details or inner workings",
            concept_end,
            detail_end,
            "Time to open the hood and trace the mechanism!".to_string(),
            vec![
                shot(
                    1,
                    concept_end,
                    mid(concept_end, detail_end),
                    "Push-in (Dolly In)",
                    "slow push-in toward the center of the structure".to_string(),
                    "layered grid layout, nodes filling the frame".to_string(),
                    "detailed structure unfolds layer by layer, code or demo appears".to_string(),
                    "smooth cut",
                ),
                shot(
                    2,
                    mid(concept_end, detail_end),
                    detail_end,
                    "Orbit + Push-in",
                    "orbit while pushing in slowly, small sway on emphasis".to_string(),
                    "details magnified layer by layer".to_string(),
                    "key nodes highlighted, arrows tracing the flow".to_string(),
                    "smooth cut",
                ),
            ],
        ),
        segment(
            "Results Showcase",
            "Show the real-world effect or application",
            detail_end,
            effect_end,
            "The results speak for themselves, across many uses!".to_string(),
            vec![
                shot(
                    1,
                    detail_end,
                    mid(detail_end, effect_end),
                    "Tracking Shot",
                    "track a flow arrow sweeping across the frame".to_string(),
                    "flow arrow left to right at 70% of frame".to_string(),
                    "input, processing and output flowing as live data".to_string(),
                    "smooth cut",
                ),
                shot(
                    2,
                    mid(detail_end, effect_end),
                    effect_end,
                    "Close-up",
                    "push in for a close-up on the results panel".to_string(),
                    "results panel at 60% of frame, small icons circling".to_string(),
                    "real output, numbers or screenshots with sparkle accents".to_string(),
                    "fade cut",
                ),
            ],
        ),
        segment(
            "Closing Call",
            "Summarize and prompt action",
            effect_end,
            d,
            "That's the heart of it, now go try it yourself!".to_string(),
            vec![
                shot(
                    1,
                    effect_end,
                    mid(effect_end, d),
                    "Converge",
                    "every element springs toward the center".to_string(),
                    "elements converging from all sides onto the middle".to_string(),
                    "summary and CTA text appear".to_string(),
                    "bounce cut",
                ),
                shot(
                    2,
                    mid(effect_end, d),
                    d,
                    "Dolly Out",
                    "slow dolly out to the full scene".to_string(),
                    "CTA button or QR code centered, background elements dispersing".to_string(),
                    "CTA button or QR code, key info fading up behind".to_string(),
                    "fade out",
                ),
            ],
        ),
    ]
}

/// Long template (7 segments): boundaries on thirtieths of the duration
/// (`3, 7, 13, 19, 24, 28` thirtieths). A 150-second video gets boundaries
/// at 15/35/65/95/120/140.
fn long_segments(d: u32, title: &str, who: &str) -> Vec<Segment> {
    let b: [u32; 6] = [3, 7, 13, 19, 24, 28].map(|k| d * k / 30);

    vec![
        segment(
            "Opening Hook",
            "Establish the scene and spark interest",
            0,
            b[0],
            "An opening that pulls you straight in!".to_string(),
            vec![
                shot(
                    1,
                    0,
                    mid(0, b[0]),
                    "Push-in (Dolly In)",
                    format!("fast push-in as {who} appears"),
                    format!("{who} rises from the bottom, 50% of frame"),
                    format!("{who} makes a dramatic entrance against a charged backdrop"),
                    "seamless cut",
                ),
                shot(
                    2,
                    mid(0, b[0]),
                    b[0],
                    "Orbit",
                    format!("orbit around {who} and the surrounding scene"),
                    format!("{who} centered, the scene unfolding behind"),
                    format!("{who} reacts expressively, eye-catching accents"),
                    "smooth cut",
                ),
            ],
        ),
        segment(
            "Problem Background",
            "Lay out the problem or current state",
            b[0],
            b[1],
            format!("Here's the landscape {title} steps into!"),
            vec![
                shot(
                    1,
                    b[0],
                    mid(b[0], b[1]),
                    "Pan",
                    "pan left to right across the problem scene".to_string(),
                    "problem scene at 80% of frame".to_string(),
                    "the situation unfolds step by step, charts appearing".to_string(),
                    "smooth cut",
                ),
                shot(
                    2,
                    mid(b[0], b[1]),
                    b[1],
                    "Push-in (Dolly In)",
                    "push in on the key figures".to_string(),
                    "key chart at 60% of frame".to_string(),
                    "charts animate, headline metrics highlighted".to_string(),
                    "smooth cut",
                ),
            ],
        ),
        segment(
            "Core Content I",
            "First block of core content",
            b[1],
            b[2],
            "Part one, explained step by step!".to_string(),
            vec![
                shot(
                    1,
                    b[1],
                    b[1] + (b[2] - b[1]) / 3,
                    "Push-in (Dolly In)",
                    "push deep into the core structure".to_string(),
                    "core figure at 60% of frame, captions circling".to_string(),
                    "the core figure builds up layer by layer, captions in sync".to_string(),
                    "smooth cut",
                ),
                shot(
                    2,
                    b[1] + (b[2] - b[1]) / 3,
                    b[1] + (b[2] - b[1]) * 2 / 3,
                    "Orbit + Push-in",
                    "orbit while closing in gradually".to_string(),
                    "structure in layers, arrows pointing the way".to_string(),
                    "animated walkthrough of the logic flow".to_string(),
                    "smooth cut",
                ),
                shot(
                    3,
                    b[1] + (b[2] - b[1]) * 2 / 3,
                    b[2],
                    "Close-up",
                    "close-up on the critical piece".to_string(),
                    "critical detail at 70% of frame".to_string(),
                    "critical detail highlighted".to_string(),
                    "smooth cut",
                ),
            ],
        ),
        segment(
            "Core Content II",
            "Second block of core content",
            b[2],
            b[3],
            "Part two digs even deeper!".to_string(),
            vec![
                shot(
                    1,
                    b[2],
                    mid(b[2], b[3]),
                    "Split Compare",
                    "split screen holding two states side by side".to_string(),
                    "left/right or top/bottom comparison".to_string(),
                    "both cases shown together, the differences highlighted".to_string(),
                    "smooth cut",
                ),
                shot(
                    2,
                    mid(b[2], b[3]),
                    b[3],
                    "Push-in Emphasis",
                    "push in on the winning side".to_string(),
                    "winning side at 60% of frame".to_string(),
                    "advantages highlighted detail by detail".to_string(),
                    "smooth cut",
                ),
            ],
        ),
        segment(
            "Applied Example",
            "Show a real application or case",
            b[3],
            b[4],
            "Watch it work in a real scenario!".to_string(),
            vec![
                shot(
                    1,
                    b[3],
                    mid(b[3], b[4]),
                    "Scene Cut",
                    "cut to the application scene".to_string(),
                    "application screenshot at 80% of frame".to_string(),
                    "the real interface on screen".to_string(),
                    "smooth cut",
                ),
                shot(
                    2,
                    mid(b[3], b[4]),
                    b[4],
                    "Tracking Shot",
                    "follow the operation flow".to_string(),
                    "flow sweeping across the full frame".to_string(),
                    "each step of the operation appears in order".to_string(),
                    "smooth cut",
                ),
            ],
        ),
        segment(
            "Recap",
            "Summarize the key points and reinforce them",
            b[4],
            b[5],
            "A quick sweep of today's key points!".to_string(),
            vec![
                shot(
                    1,
                    b[4],
                    mid(b[4], b[5]),
                    "Dolly Out",
                    "pull back from close-up to the full picture".to_string(),
                    "key-point list at 60% of frame".to_string(),
                    "points appear one by one and light up".to_string(),
                    "smooth cut",
                ),
                shot(
                    2,
                    mid(b[4], b[5]),
                    b[5],
                    "Orbit",
                    "orbit around the assembled key points".to_string(),
                    "points distributed in a ring".to_string(),
                    "every point visible at once".to_string(),
                    "smooth cut",
                ),
            ],
        ),
        segment(
            "Closing Call",
            "Point to the next step",
            b[5],
            d,
            "Now it's your turn, go build something!".to_string(),
            vec![
                shot(
                    1,
                    b[5],
                    mid(b[5], d),
                    "Converge",
                    "every element converges on the center".to_string(),
                    "CTA centered".to_string(),
                    "the call to action appears".to_string(),
                    "bounce cut",
                ),
                shot(
                    2,
                    mid(b[5], d),
                    d,
                    "Freeze Frame",
                    "hold the final frame on the CTA".to_string(),
                    "QR code or link".to_string(),
                    "QR code and contact info".to_string(),
                    "freeze out",
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boundaries(segments: &[Segment]) -> Vec<u32> {
        let mut b: Vec<u32> = segments.iter().map(|s| s.start).collect();
        b.push(segments.last().unwrap().end);
        b
    }

    #[test]
    fn bucket_sizes() {
        assert_eq!(select_template(10, "T", None).len(), 3);
        assert_eq!(select_template(30, "T", None).len(), 3);
        assert_eq!(select_template(31, "T", None).len(), 5);
        assert_eq!(select_template(90, "T", None).len(), 5);
        assert_eq!(select_template(91, "T", None).len(), 7);
        assert_eq!(select_template(300, "T", None).len(), 7);
    }

    #[test]
    fn segments_are_contiguous_for_all_buckets() {
        for d in 1..=200u32 {
            let segments = select_template(d, "T", None);
            assert_eq!(segments[0].start, 0, "d={d}");
            assert_eq!(segments.last().unwrap().end, d, "d={d}");
            for pair in segments.windows(2) {
                assert_eq!(pair[0].end, pair[1].start, "d={d}");
            }
        }
    }

    #[test]
    fn medium_boundaries_at_60s() {
        let segments = select_template(60, "Demo", None);
        assert_eq!(boundaries(&segments), vec![0, 12, 28, 44, 52, 60]);
    }

    #[test]
    fn long_boundaries_at_150s() {
        let segments = select_template(150, "Demo", None);
        assert_eq!(boundaries(&segments), vec![0, 15, 35, 65, 95, 120, 140, 150]);
    }

    #[test]
    fn short_splits_into_thirds() {
        let segments = select_template(30, "Demo", None);
        assert_eq!(boundaries(&segments), vec![0, 10, 20, 30]);
        // Remainder seconds land in the final segment.
        let segments = select_template(29, "Demo", None);
        assert_eq!(boundaries(&segments), vec![0, 9, 18, 29]);
    }

    #[test]
    fn character_text_substitutes_placeholder() {
        let segments = select_template(60, "Demo", None);
        let SegmentShots::Sequence { shots } = &segments[0].shots else {
            panic!("template segments carry shot sequences");
        };
        assert!(shots[0].camera.contains(GENERIC_CHARACTER));

        let segments = select_template(60, "Demo", Some("paper-craft fox"));
        let SegmentShots::Sequence { shots } = &segments[0].shots else {
            panic!("template segments carry shot sequences");
        };
        assert!(shots[0].camera.contains("paper-craft fox"));
    }

    #[test]
    fn title_reaches_narration() {
        let segments = select_template(60, "MicroGPT Internals", None);
        assert!(segments[0].narration.contains("MicroGPT Internals"));
    }

    #[test]
    fn shot_ids_are_one_based_per_segment() {
        for d in [10u32, 60, 150] {
            for seg in select_template(d, "T", None) {
                let SegmentShots::Sequence { shots } = &seg.shots else {
                    panic!("template segments carry shot sequences");
                };
                for (i, s) in shots.iter().enumerate() {
                    assert_eq!(s.shot_id, i as u32 + 1);
                }
            }
        }
    }
}
