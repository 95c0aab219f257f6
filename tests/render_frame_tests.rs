use chart_scales::core::{InnerSize, MarkKey, MarkPosition, MarkSymbol, PlacedMark};
use chart_scales::render::{
    CATEGORY20, CategoricalColorScale, Color, LinePrimitive, NullRenderer, RenderFrame, Renderer,
};

fn mark(index: usize, position: Option<MarkPosition>, size: f64) -> PlacedMark {
    PlacedMark {
        key: MarkKey {
            label: "s".to_owned(),
            index,
        },
        position,
        fill: CATEGORY20[0],
        symbol: MarkSymbol {
            size,
            ..MarkSymbol::default()
        },
    }
}

fn inner() -> InnerSize {
    InnerSize::new(200.0, 100.0).expect("valid inner size")
}

#[test]
fn frame_counts_only_placed_marks() {
    let frame = RenderFrame::new(inner()).with_marks([
        mark(0, Some(MarkPosition { x: 1.0, y: 2.0 }), 64.0),
        mark(1, None, 64.0),
    ]);

    frame.validate().expect("valid frame");
    assert_eq!(frame.marks.len(), 2);
    assert_eq!(frame.placed_mark_count(), 1);
    assert!(!frame.is_empty());
    assert!(RenderFrame::new(inner()).is_empty());
}

#[test]
fn frame_rejects_non_finite_mark_positions() {
    let frame = RenderFrame::new(inner()).with_marks([mark(
        3,
        Some(MarkPosition {
            x: f64::NAN,
            y: 0.0,
        }),
        64.0,
    )]);

    let err = frame.validate().expect_err("nan position");
    assert!(err.to_string().contains("s.3"));
}

#[test]
fn frame_rejects_empty_symbols() {
    let frame = RenderFrame::new(inner()).with_marks([mark(0, None, 0.0)]);
    assert!(frame.validate().is_err());
}

#[test]
fn frame_rejects_invalid_lines() {
    let black = Color::rgb(0.0, 0.0, 0.0);
    let thin = RenderFrame::new(inner()).with_line(LinePrimitive::new(0.0, 0.0, 1.0, 1.0, 0.0, black));
    assert!(thin.validate().is_err());

    let off_palette =
        RenderFrame::new(inner()).with_line(LinePrimitive::new(0.0, 0.0, 1.0, 1.0, 1.0, Color::rgb(2.0, 0.0, 0.0)));
    assert!(off_palette.validate().is_err());
}

#[test]
fn null_renderer_records_frame_counts() {
    let black = Color::rgb(0.0, 0.0, 0.0);
    let frame = RenderFrame::new(inner())
        .with_line(LinePrimitive::new(0.0, 100.0, 200.0, 100.0, 1.0, black))
        .with_line(LinePrimitive::new(0.0, 0.0, 0.0, 100.0, 1.0, black))
        .with_marks([
            mark(0, Some(MarkPosition { x: 5.0, y: 5.0 }), 64.0),
            mark(1, None, 64.0),
            mark(2, Some(MarkPosition { x: 9.0, y: 9.0 }), 64.0),
        ]);

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");
    renderer.render(&frame).expect("render again");

    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_line_count, 2);
    assert_eq!(renderer.last_mark_count, 3);
    assert_eq!(renderer.last_placed_mark_count, 2);
}

#[test]
fn null_renderer_rejects_invalid_frames() {
    let frame = RenderFrame::new(inner()).with_marks([mark(0, None, -1.0)]);

    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 0);
}

#[test]
fn palette_colors_are_valid_and_distinct() {
    for (index, color) in CATEGORY20.iter().enumerate() {
        color.validate().expect("palette color in range");
        assert!(CATEGORY20[index + 1..].iter().all(|other| other != color));
    }
    assert_eq!(CATEGORY20[0], Color::from_hex_rgb(0x1f77b4));
}

#[test]
fn color_scale_assigns_in_first_seen_order_and_wraps() {
    let mut colors = CategoricalColorScale::default();
    for index in 0..21 {
        colors.color_of(&format!("stack-{index}"));
    }

    assert_eq!(colors.assigned("stack-0"), Some(CATEGORY20[0]));
    assert_eq!(colors.assigned("stack-19"), Some(CATEGORY20[19]));
    assert_eq!(colors.assigned("stack-20"), Some(CATEGORY20[0]));
    assert_eq!(colors.assigned("missing"), None);
    assert_eq!(colors.color_of("stack-3"), CATEGORY20[3]);
    assert_eq!(colors.labels().count(), 21);
}

#[test]
fn empty_palette_falls_back_to_category20() {
    let mut colors = CategoricalColorScale::new(Vec::new());
    assert_eq!(colors.color_of("a"), CATEGORY20[0]);
}

#[test]
fn deserialized_empty_palette_falls_back_to_category20() {
    let mut colors: CategoricalColorScale =
        serde_json::from_str(r#"{"palette":[],"assigned":{}}"#).expect("parse color scale");

    assert_eq!(colors.color_of("a"), CATEGORY20[0]);
    assert_eq!(colors.color_of("b"), CATEGORY20[1]);
}

#[test]
fn color_scale_json_roundtrip_keeps_assignments() {
    let red = Color::rgb(1.0, 0.0, 0.0);
    let blue = Color::rgb(0.0, 0.0, 1.0);
    let mut colors = CategoricalColorScale::new(vec![red, blue]);
    colors.color_of("first");
    colors.color_of("second");

    let json = serde_json::to_string(&colors).expect("serialize color scale");
    let restored: CategoricalColorScale = serde_json::from_str(&json).expect("parse color scale");

    assert_eq!(restored.assigned("second"), Some(blue));
    assert_eq!(restored.labels().collect::<Vec<_>>(), vec!["first", "second"]);
}
