use sketchpad::input::SketchEvent;
use sketchpad::{Config, Sketchpad};

fn make_sketchpad() -> Sketchpad {
    Sketchpad::new(&Config::default()).unwrap()
}

fn stroke(pad: &mut Sketchpad, from: (f64, f64), to: (f64, f64)) {
    pad.replay([
        SketchEvent::PointerDown {
            x: from.0,
            y: from.1,
        },
        SketchEvent::PointerMove { x: to.0, y: to.1 },
        SketchEvent::PointerUp { x: to.0, y: to.1 },
    ])
    .unwrap();
}

/// Collects every pixel of the surface.
fn all_pixels(pad: &mut Sketchpad) -> Vec<u32> {
    let (width, height) = (pad.surface().width(), pad.surface().height());
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push(pad.pixel(x, y).unwrap());
        }
    }
    pixels
}

/// Pixel value of a freshly painted background.
fn background_pixel() -> u32 {
    let mut pad = make_sketchpad();
    pad.pixel(200, 200).unwrap()
}

#[test]
fn clear_leaves_only_background() {
    let mut pad = make_sketchpad();
    pad.dispatch(SketchEvent::Marker).unwrap();
    stroke(&mut pad, (10.0, 10.0), (100.0, 10.0));
    stroke(&mut pad, (10.0, 50.0), (100.0, 50.0));
    stroke(&mut pad, (10.0, 90.0), (100.0, 90.0));
    assert_eq!(pad.state().history.len(), 3);

    // Park the pointer outside so the preview dot does not show
    pad.dispatch(SketchEvent::PointerMove {
        x: -100.0,
        y: -100.0,
    })
    .unwrap();
    pad.dispatch(SketchEvent::Clear).unwrap();

    assert!(pad.state().history.is_empty());
    let bg = background_pixel();
    assert!(all_pixels(&mut pad).iter().all(|pixel| *pixel == bg));
}

#[test]
fn committed_strokes_are_drawn_over_background() {
    let mut pad = make_sketchpad();
    pad.dispatch(SketchEvent::Marker).unwrap();
    stroke(&mut pad, (20.0, 120.0), (220.0, 120.0));

    let bg = background_pixel();
    assert_ne!(pad.pixel(120, 120), Some(bg));
    assert_eq!(pad.pixel(120, 20), Some(bg));
}

#[test]
fn undo_removes_stroke_pixels_and_redo_restores_them() {
    let mut pad = make_sketchpad();
    pad.dispatch(SketchEvent::Marker).unwrap();
    stroke(&mut pad, (20.0, 120.0), (220.0, 120.0));
    let drawn = pad.pixel(120, 120);
    let bg = background_pixel();

    pad.dispatch(SketchEvent::Undo).unwrap();
    assert_eq!(pad.pixel(120, 120), Some(bg));

    pad.dispatch(SketchEvent::Redo).unwrap();
    assert_eq!(pad.pixel(120, 120), drawn);
}

#[test]
fn single_point_stroke_renders_nothing() {
    let mut pad = make_sketchpad();
    pad.dispatch(SketchEvent::Marker).unwrap();
    pad.replay([
        SketchEvent::PointerDown { x: 60.0, y: 60.0 },
        SketchEvent::PointerUp { x: 60.0, y: 60.0 },
        SketchEvent::PointerMove {
            x: -100.0,
            y: -100.0,
        },
    ])
    .unwrap();

    assert_eq!(pad.state().history.len(), 1);
    let bg = background_pixel();
    assert!(all_pixels(&mut pad).iter().all(|pixel| *pixel == bg));
}

#[test]
fn tool_preview_follows_pointer_when_idle() {
    let mut pad = make_sketchpad();
    let bg = background_pixel();

    pad.dispatch(SketchEvent::Marker).unwrap();
    pad.dispatch(SketchEvent::PointerMove { x: 128.0, y: 128.0 })
        .unwrap();
    assert_ne!(pad.pixel(128, 128), Some(bg));

    pad.dispatch(SketchEvent::PointerMove { x: 30.0, y: 30.0 })
        .unwrap();
    assert_eq!(pad.pixel(128, 128), Some(bg));
    assert_ne!(pad.pixel(30, 30), Some(bg));
}

#[test]
fn sticker_placement_lands_at_pointer() {
    let mut pad = make_sketchpad();
    pad.replay([
        SketchEvent::Sticker {
            glyph: "😈".to_string(),
        },
        SketchEvent::PointerDown { x: 10.0, y: 20.0 },
        SketchEvent::PointerUp { x: 10.0, y: 20.0 },
    ])
    .unwrap();

    let items = pad.state().history.display_list();
    assert_eq!(items.len(), 1);
    let sticker = items[0].as_sticker().expect("sticker placement");
    assert_eq!((sticker.position().x, sticker.position().y), (10.0, 20.0));
    assert_eq!((sticker.origin().x, sticker.origin().y), (-6.0, 28.0));
}

/// Whether any pixel in the box `x0..x1` by `y0..y1` differs from the background.
fn has_ink(pad: &mut Sketchpad, (x0, x1): (i32, i32), (y0, y1): (i32, i32)) -> bool {
    let bg = background_pixel();
    (y0..y1).any(|y| (x0..x1).any(|x| pad.pixel(x, y) != Some(bg)))
}

fn select_letter_sticker(pad: &mut Sketchpad) {
    pad.replay([
        SketchEvent::CustomSticker {
            text: "A".to_string(),
        },
        SketchEvent::Sticker {
            glyph: "A".to_string(),
        },
    ])
    .unwrap();
}

#[test]
fn placed_sticker_is_drawn_and_undo_erases_it() {
    let mut pad = make_sketchpad();
    select_letter_sticker(&mut pad);
    pad.replay([
        SketchEvent::PointerDown { x: 128.0, y: 128.0 },
        SketchEvent::PointerUp { x: 128.0, y: 128.0 },
        // Move the glyph cursor off the surface
        SketchEvent::PointerMove {
            x: -100.0,
            y: -100.0,
        },
    ])
    .unwrap();

    assert!(has_ink(&mut pad, (100, 150), (100, 150)));

    pad.dispatch(SketchEvent::Undo).unwrap();
    let bg = background_pixel();
    assert!(all_pixels(&mut pad).iter().all(|pixel| *pixel == bg));
}

#[test]
fn sticker_cursor_follows_pointer_when_idle() {
    let mut pad = make_sketchpad();
    select_letter_sticker(&mut pad);
    pad.dispatch(SketchEvent::PointerMove { x: 128.0, y: 128.0 })
        .unwrap();

    assert!(pad.state().history.is_empty());
    assert!(has_ink(&mut pad, (100, 150), (100, 150)));

    pad.dispatch(SketchEvent::PointerMove { x: 40.0, y: 40.0 })
        .unwrap();
    assert!(!has_ink(&mut pad, (100, 150), (100, 150)));
    assert!(has_ink(&mut pad, (10, 60), (10, 60)));
}

#[test]
fn sticker_cursor_is_hidden_while_placing() {
    let mut pad = make_sketchpad();
    select_letter_sticker(&mut pad);
    pad.dispatch(SketchEvent::PointerDown { x: 128.0, y: 128.0 })
        .unwrap();
    assert!(pad.state().is_placing());
    let while_placing = all_pixels(&mut pad);

    // Same placement with the cursor parked off the surface
    pad.replay([
        SketchEvent::PointerUp { x: 128.0, y: 128.0 },
        SketchEvent::PointerMove {
            x: -100.0,
            y: -100.0,
        },
    ])
    .unwrap();

    // A cursor drawn on top would darken the glyph's antialiased edges
    assert_eq!(while_placing, all_pixels(&mut pad));
}

#[test]
fn tool_preview_is_hidden_while_drawing() {
    let mut pad = make_sketchpad();
    let bg = background_pixel();
    pad.dispatch(SketchEvent::Marker).unwrap();
    pad.dispatch(SketchEvent::PointerMove { x: 128.0, y: 128.0 })
        .unwrap();
    assert_ne!(pad.pixel(128, 128), Some(bg));

    // A one-point stroke draws nothing, so only the preview could show here
    pad.dispatch(SketchEvent::PointerDown { x: 128.0, y: 128.0 })
        .unwrap();
    assert!(pad.state().is_drawing());
    assert!(all_pixels(&mut pad).iter().all(|pixel| *pixel == bg));
}

#[test]
fn in_progress_stroke_is_drawn_over_committed_items() {
    let mut pad = make_sketchpad();
    pad.dispatch(SketchEvent::Marker).unwrap();
    stroke(&mut pad, (20.0, 120.0), (220.0, 120.0));
    let committed = pad.pixel(60, 120);

    pad.replay([
        SketchEvent::Hue { value: 240.0 },
        SketchEvent::PointerDown { x: 120.0, y: 20.0 },
        SketchEvent::PointerMove { x: 120.0, y: 220.0 },
    ])
    .unwrap();
    assert_eq!(pad.state().history.len(), 1);

    let in_progress = pad.pixel(120, 60);
    assert_ne!(in_progress, committed);
    assert_eq!(pad.pixel(120, 120), in_progress);
}

#[test]
fn export_writes_png_at_configured_scale() {
    let dir = tempfile::tempdir().unwrap();
    let mut pad = make_sketchpad();
    stroke(&mut pad, (0.0, 0.0), (255.0, 255.0));

    let path = pad.export(&dir.path().join("sketchpad.png")).unwrap();
    let mut file = std::fs::File::open(&path).unwrap();
    let decoded = cairo::ImageSurface::create_from_png(&mut file).unwrap();
    assert_eq!(decoded.width(), 1024);
    assert_eq!(decoded.height(), 1024);
}
