//! Frame layout properties, checked by sweeping dimension grids across
//! every frame preset and a range of insets.

use framefit::*;

const EPS: f64 = 1e-9;

const SIDES: [u32; 14] = [
    1, 2, 3, 7, 10, 99, 100, 101, 640, 1080, 1920, 3000, 4000, 6001,
];

const INSETS: [f64; 7] = [0.0, 1.0, 5.0, 12.5, 20.0, 33.0, 45.0];

fn dims(w: u32, h: u32) -> ImageDimensions {
    ImageDimensions::new(w, h).unwrap()
}

fn each_case(mut f: impl FnMut(ImageDimensions, AspectRatio, InsetSpec)) {
    for &w in &SIDES {
        for &h in &SIDES {
            for aspect in AspectRatio::FRAME_PRESETS {
                for &p in &INSETS {
                    f(dims(w, h), aspect, InsetSpec::new(p).unwrap());
                }
            }
        }
    }
}

// ── Containment ──────────────────────────────────────────────────────────

#[test]
fn content_inside_canvas() {
    each_case(|image, aspect, inset| {
        let Ok(layout) = compute_frame_layout(image, aspect, inset) else {
            // Tiny canvases may legitimately have no room left.
            return;
        };
        let c = layout.content;
        let canvas = layout.canvas;
        assert!(
            c.is_within(canvas),
            "{image:?} {aspect} {inset:?}: {c:?} outside {canvas:?}"
        );

        let px = layout.content_pixels();
        assert!(px.width >= 1 && px.height >= 1);
        assert!(
            px.x + px.width <= canvas.width && px.y + px.height <= canvas.height,
            "{image:?} {aspect} {inset:?}: {px:?} outside {canvas:?}"
        );
    });
}

#[test]
fn content_respects_inset() {
    each_case(|image, aspect, inset| {
        let Ok(layout) = compute_frame_layout(image, aspect, inset) else {
            return;
        };
        let c = layout.content;
        let m = layout.inset_pixels;
        assert!(c.width <= layout.canvas.width as f64 - 2.0 * m);
        assert!(c.height <= layout.canvas.height as f64 - 2.0 * m);
    });
}

#[test]
fn errors_only_for_degenerate_geometry() {
    each_case(|image, aspect, inset| {
        if let Err(e) = compute_frame_layout(image, aspect, inset) {
            assert!(e.is_degenerate(), "{image:?} {aspect} {inset:?}: {e}");
            assert!(image.longest_side() < 100, "{image:?} {aspect} {inset:?}: {e}");
        }
    });
}

// ── Canvas size ──────────────────────────────────────────────────────────

#[test]
fn landscape_canvas_width_is_longest_side() {
    each_case(|image, aspect, inset| {
        if !aspect.is_landscape() {
            return;
        }
        if let Ok(layout) = compute_frame_layout(image, aspect, inset) {
            assert_eq!(layout.canvas.width, image.longest_side(), "{image:?} {aspect}");
            assert!(layout.canvas.height <= layout.canvas.width);
        }
    });
}

#[test]
fn portrait_canvas_height_is_longest_side() {
    for aspect in [AspectRatio::PORTRAIT_4_5, AspectRatio::PORTRAIT_9_16] {
        for &w in &SIDES[4..] {
            for &h in &SIDES[4..] {
                let layout = compute_frame_layout(dims(w, h), aspect, InsetSpec::NONE).unwrap();
                assert_eq!(layout.canvas.height, w.max(h), "{w}x{h} {aspect}");
                assert!(layout.canvas.width < layout.canvas.height);
            }
        }
    }
}

#[test]
fn content_never_larger_than_source() {
    each_case(|image, aspect, inset| {
        if let Ok(layout) = compute_frame_layout(image, aspect, inset) {
            assert!(layout.content.width <= image.width() as f64);
            assert!(layout.content.height <= image.height() as f64);
        }
    });
}

#[test]
fn content_keeps_source_ratio() {
    each_case(|image, aspect, inset| {
        if let Ok(layout) = compute_frame_layout(image, aspect, inset) {
            let c = layout.content;
            let lhs = c.width * image.height() as f64;
            let rhs = c.height * image.width() as f64;
            assert!((lhs - rhs).abs() <= 1e-6 * lhs.max(rhs), "{image:?} {aspect}");
        }
    });
}

#[test]
fn identical_inputs_identical_layouts() {
    each_case(|image, aspect, inset| {
        let a = compute_frame_layout(image, aspect, inset);
        let b = compute_frame_layout(image, aspect, inset);
        assert_eq!(a, b);
    });
}

// ── Scenarios ────────────────────────────────────────────────────────────

#[test]
fn square_frame_of_landscape_photo() {
    let layout = compute_frame_layout(
        dims(4000, 3000),
        "1:1".parse().unwrap(),
        InsetSpec::new(5.0).unwrap(),
    )
    .unwrap();
    assert_eq!(layout.canvas, Size::new(4000, 4000));
    assert_eq!(layout.inset_pixels, 200.0);
    assert_eq!(
        layout.content,
        ContentRect {
            x: 200.0,
            y: 650.0,
            width: 3600.0,
            height: 2700.0,
        }
    );
    assert_eq!(layout.content_pixels(), Rect::new(200, 650, 3600, 2700));
}

#[test]
fn widescreen_frame_of_portrait_photo() {
    let layout =
        compute_frame_layout(dims(1080, 1920), AspectRatio::WIDESCREEN, InsetSpec::NONE).unwrap();
    assert_eq!(layout.canvas, Size::new(1920, 1080));
    // Height-bound: 1080 / 1920 of the source.
    assert_eq!(layout.content_pixels(), Rect::new(656, 0, 608, 1080));
}

#[test]
fn near_half_inset_still_lays_out() {
    let layout = compute_frame_layout(
        dims(1000, 1000),
        AspectRatio::SQUARE,
        InsetSpec::new(49.0).unwrap(),
    )
    .unwrap();
    assert!((layout.inset_pixels - 490.0).abs() < EPS);
    assert!((layout.content.width - 20.0).abs() < EPS);
    assert!((layout.content.height - 20.0).abs() < EPS);
    assert_eq!(layout.content_pixels(), Rect::new(490, 490, 20, 20));
}

#[test]
fn half_inset_rejected() {
    assert_eq!(InsetSpec::new(50.0), Err(LayoutError::InsetOutOfRange(50.0)));
    assert_eq!(
        LayoutError::InsetOutOfRange(50.0).kind(),
        ErrorKind::InvalidInput
    );
}

#[test]
fn frame_builder_matches_free_function() {
    let image = dims(3000, 2000);
    let inset = InsetSpec::new(8.0).unwrap();
    let via_builder = FrameSpec::new(AspectRatio::LANDSCAPE_5_4)
        .inset(inset)
        .background(CanvasColor::ORANGE)
        .compute(image)
        .unwrap();
    let via_fn = compute_frame_layout(image, AspectRatio::LANDSCAPE_5_4, inset).unwrap();
    assert_eq!(via_builder.canvas, via_fn.canvas);
    assert_eq!(via_builder.content, via_fn.content);
    assert_eq!(via_builder.background, CanvasColor::ORANGE);
    assert_eq!(via_fn.background, CanvasColor::WHITE);
}

#[test]
fn rotated_photo_framed_upright() {
    let stored = dims(4000, 3000);
    let shown = Orientation::from_exif(6).unwrap().display_dimensions(stored);
    let layout = compute_frame_layout(shown, AspectRatio::PORTRAIT_4_5, InsetSpec::NONE).unwrap();
    assert_eq!(layout.canvas, Size::new(3200, 4000));
    assert_eq!(layout.content_pixels(), Rect::new(100, 0, 3000, 4000));
}
