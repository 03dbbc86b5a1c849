//! Cairo-based rendering functions for displayable items.

use super::color::{BLACK, Color, GRAY};
use super::font::FontDescriptor;
use super::shape::{Displayable, Point, StickerPlacement, Stroke};

/// Opacity of the tool preview dot.
const PREVIEW_ALPHA: f64 = 0.5;

/// Clears the surface and paints the canvas background.
///
/// Should be called before rendering any displayable item.
pub fn render_background(ctx: &cairo::Context, background: Color) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    ctx.set_operator(cairo::Operator::Over);
    ctx.set_source_rgba(background.r, background.g, background.b, background.a);
    let _ = ctx.paint();
    let _ = ctx.restore();
}

/// Renders all items in order (first item = bottom layer).
pub fn render_displayables(ctx: &cairo::Context, items: &[Displayable], font: &FontDescriptor) {
    for item in items {
        render_displayable(ctx, item, font);
    }
}

/// Renders a single display list item.
pub fn render_displayable(ctx: &cairo::Context, item: &Displayable, font: &FontDescriptor) {
    match item {
        Displayable::Stroke(stroke) => render_stroke(ctx, stroke),
        Displayable::Sticker(sticker) => render_sticker(ctx, sticker, font),
    }
}

/// Render freehand stroke (polyline through points).
///
/// Strokes with fewer than two points draw nothing.
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke) {
    let points = stroke.points();
    if points.len() < 2 {
        return;
    }

    let color = stroke.color;
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(stroke.line_width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(points[0].x, points[0].y);
    for point in &points[1..] {
        ctx.line_to(point.x, point.y);
    }

    let _ = ctx.stroke();
}

/// Renders a sticker glyph with Pango.
///
/// The glyph's baseline starts at [`StickerPlacement::origin`], which already
/// compensates for glyph alignment so the sticker sits under the pointer.
pub fn render_sticker(ctx: &cairo::Context, sticker: &StickerPlacement, font: &FontDescriptor) {
    if sticker.glyph.is_empty() {
        return;
    }

    ctx.save().ok();

    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&font.to_pango_string(sticker.font_size));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(&sticker.glyph);

    // Pango positions layouts from the top-left corner; shift up to the baseline
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    let origin = sticker.origin();

    ctx.set_source_rgba(BLACK.r, BLACK.g, BLACK.b, BLACK.a);
    ctx.move_to(origin.x, origin.y - baseline);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}

/// Renders the translucent dot that previews the pencil/marker footprint.
pub fn render_tool_preview(ctx: &cairo::Context, center: Point, radius: f64) {
    if radius <= 0.0 {
        return;
    }

    let color = GRAY.with_alpha(PREVIEW_ALPHA);
    let _ = ctx.save();
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.new_path();
    ctx.arc(center.x, center.y, radius, 0.0, std::f64::consts::PI * 2.0);
    let _ = ctx.fill();
    let _ = ctx.restore();
}
