//! Full-pipeline checks across the public API: assemble, render, parse back,
//! export. The markdown reverse path is lossy by design, so these assert the
//! stable fields rather than full equality.

use shotscript::{
    ExportFormat, SegmentShots, StoryboardBuilder, export_structured, parse_markdown,
    render_markdown,
};

#[test]
fn render_parse_export_keeps_stable_fields() {
    let board = StoryboardBuilder::new("Pipeline Demo")
        .duration_seconds(120)
        .main_character("origami crane")
        .build()
        .unwrap();
    assert_eq!(board.segments.len(), 7);

    let recovered = parse_markdown(&render_markdown(&board));
    assert_eq!(recovered.title, board.title);
    assert_eq!(recovered.duration_seconds, 120);
    assert_eq!(recovered.segments.len(), 7);
    for (r, o) in recovered.segments.iter().zip(&board.segments) {
        assert_eq!(r.goal, o.goal);
        let (SegmentShots::Sequence { shots: rs }, SegmentShots::Sequence { shots: os }) =
            (&r.shots, &o.shots)
        else {
            panic!("template segments carry shot sequences");
        };
        for (a, b) in rs.iter().zip(os) {
            assert_eq!(a.camera, b.camera);
            assert_eq!(a.layout, b.layout);
            assert_eq!(a.visual, b.visual);
            assert_eq!(a.transition, b.transition);
        }
    }

    let json = export_structured(&recovered, ExportFormat::Json, false).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["metadata"]["duration_seconds"], 120);
    assert_eq!(v["metadata"]["total_frames"], 3600);
    assert_eq!(v["video_specs"]["character"], "origami crane");
}

#[test]
fn unicode_title_survives_the_whole_pipeline() {
    let board = StoryboardBuilder::new("微服务架构演进")
        .duration_seconds(60)
        .build()
        .unwrap();

    let md = render_markdown(&board);
    assert!(md.contains("# 微服务架构演进 — Video Storyboard"));
    assert!(md.contains("`./docs/微服务架构演进_storyboard.md`"));

    let recovered = parse_markdown(&md);
    assert_eq!(recovered.title, "微服务架构演进");

    let yaml = export_structured(&recovered, ExportFormat::Yaml, false).unwrap();
    assert!(yaml.contains("微服务架构演进"));
}
