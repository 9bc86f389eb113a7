use crate::{
    foundation::core::Rect,
    foundation::error::MorphResult,
    ink::model::{Drawing, DrawingSegment},
    render::bitmap::Bitmap,
    render::surface::Surface,
};

/// A grapheme's ink: its logical bounding box and a pixel snapshot of it.
#[derive(Debug)]
pub struct InkRegion {
    pub source: Rect,
    pub bitmap: Bitmap,
}

/// Bounding box, in logical pixels, of every point the ranges reference.
///
/// Ranges that resolve to no points (missing stroke, empty or inverted range)
/// contribute nothing; if nothing resolves the result is [`Rect::ZERO`].
pub fn source_rect(drawing: &Drawing, ranges: &[DrawingSegment]) -> Rect {
    let mut bounds: Option<kurbo::Rect> = None;
    for range in ranges {
        let Some(stroke) = drawing.stroke(range.stroke_index) else {
            tracing::warn!(
                stroke_index = range.stroke_index,
                strokes = drawing.strokes.len(),
                "ink range references a missing stroke"
            );
            continue;
        };
        for p in stroke.point_range(range.begin_point_index, range.end_point_index) {
            let pt = kurbo::Point::new(p.x, p.y);
            bounds = Some(match bounds {
                Some(b) => b.union_pt(pt),
                None => kurbo::Rect::from_points(pt, pt),
            });
        }
    }
    bounds.map_or(Rect::ZERO, Rect::from_kurbo)
}

/// Snapshot the ink under `ranges` from the live surface into an owned bitmap.
pub fn extract(
    surface: &Surface,
    drawing: &Drawing,
    ranges: &[DrawingSegment],
) -> MorphResult<InkRegion> {
    let source = source_rect(drawing, ranges);
    let device = source.to_device_snapshot(surface.device_pixel_ratio());
    let bitmap = surface.read_pixels(device)?;
    Ok(InkRegion { source, bitmap })
}

#[cfg(test)]
#[path = "../../tests/unit/render/region.rs"]
mod tests;
