use shotscript::{ExportFormat, SegmentShots, export_structured, parse_markdown};

#[test]
fn hand_edited_fixture_parses() {
    let md = include_str!("data/medium_storyboard.md");
    let board = parse_markdown(md);

    assert_eq!(board.title, "Launch Teaser");
    assert_eq!(board.duration_seconds, 45);
    assert_eq!(board.fps, 30);
    assert_eq!(board.total_frames(), 1350);
    assert_eq!(board.main_character, None);
    assert_eq!(
        board.background_style,
        "bright gradient + soft bokeh highlights"
    );

    assert_eq!(board.segments.len(), 2);

    let first = &board.segments[0];
    assert_eq!(first.title, "Opening + Setup");
    assert_eq!((first.start, first.end), (0, 9));
    assert_eq!(first.goal, "Build interest and set the stage");
    let SegmentShots::Sequence { shots } = &first.shots else {
        panic!("first segment should carry a shot sequence");
    };
    assert_eq!(shots.len(), 2);
    assert_eq!(shots[0].shot_type, "Push-in (Dolly In)");
    assert_eq!(shots[0].time_range, "0-4s");
    assert_eq!(shots[1].transition, "smooth cut");

    let second = &board.segments[1];
    assert_eq!((second.start, second.end), (9, 45));
    assert_eq!(second.narration, "Grab it today!");
    let SegmentShots::Legacy(flat) = &second.shots else {
        panic!("second segment should be legacy flat format");
    };
    assert_eq!(flat.camera, "slow dolly out over the full scene");
}

#[test]
fn fixture_converts_to_both_formats() {
    let board = parse_markdown(include_str!("data/medium_storyboard.md"));

    let json = export_structured(&board, ExportFormat::Json, false).unwrap();
    let jv: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(jv["metadata"]["title"], "Launch Teaser");
    assert_eq!(jv["metadata"]["total_frames"], 1350);
    assert_eq!(jv["video_specs"]["fps"], 30);
    assert!(jv["video_specs"]["character"].is_null());
    // Legacy segment flattens its camera fields onto the segment object.
    assert_eq!(
        jv["segments"][1]["camera"],
        "slow dolly out over the full scene"
    );

    let yaml = export_structured(&board, ExportFormat::Yaml, false).unwrap();
    let yv: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(
        yv["metadata"]["title"],
        serde_yaml::Value::from("Launch Teaser")
    );
    assert_eq!(yv["video_specs"]["fps"], serde_yaml::Value::from(30));
}
