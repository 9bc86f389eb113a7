use super::*;
use crate::{
    foundation::core::Rgba8,
    ink::model::{Point, Stroke},
};

fn line(from: (f64, f64), to: (f64, f64), steps: usize) -> Stroke {
    Stroke::from_points(
        (0..=steps)
            .map(|i| {
                let t = i as f64 / steps as f64;
                Point::new(
                    from.0 + (to.0 - from.0) * t,
                    from.1 + (to.1 - from.1) * t,
                    i as f64 * 8.0,
                )
            })
            .collect(),
    )
}

fn range(stroke_index: usize, begin: usize, end: usize) -> DrawingSegment {
    DrawingSegment {
        stroke_index,
        begin_point_index: begin,
        end_point_index: end,
    }
}

#[test]
fn horizontal_stroke_bounds() {
    let drawing = Drawing::new(vec![line((10.0, 10.0), (50.0, 10.0), 4)]);
    assert_eq!(
        source_rect(&drawing, &[range(0, 0, 4)]),
        Rect::new(10.0, 10.0, 40.0, 0.0)
    );
}

#[test]
fn bounds_span_multiple_strokes_and_partial_ranges() {
    let drawing = Drawing::new(vec![
        line((0.0, 0.0), (100.0, 0.0), 10),
        line((20.0, 5.0), (20.0, 45.0), 4),
    ]);
    // Points 2..=4 of stroke 0 are x = 20..40.
    let r = source_rect(&drawing, &[range(0, 2, 4), range(1, 0, 4)]);
    assert_eq!(r, Rect::new(20.0, 0.0, 20.0, 45.0));
}

#[test]
fn unresolvable_ranges_give_a_degenerate_rect() {
    let drawing = Drawing::new(vec![line((0.0, 0.0), (10.0, 10.0), 2)]);
    for ranges in [
        vec![],
        vec![range(7, 0, 3)],
        vec![range(0, 5, 9)],
        vec![range(0, 2, 1)],
    ] {
        let r = source_rect(&drawing, &ranges);
        assert!(r.width <= 0.0 && r.height <= 0.0, "{ranges:?} -> {r:?}");
        assert!(!r.is_drawable());
    }
}

#[test]
fn extraction_reads_device_pixels_at_ratio() {
    let mut surface = Surface::new(60.0, 30.0, 2.0).unwrap();
    surface.fill_rect(Rect::new(10.0, 10.0, 40.0, 10.0), Rgba8::new(0, 0, 255, 255));
    let drawing = Drawing::new(vec![line((10.0, 10.0), (50.0, 20.0), 4)]);

    let region = extract(&surface, &drawing, &[range(0, 0, 4)]).unwrap();
    assert_eq!(region.source, Rect::new(10.0, 10.0, 40.0, 10.0));
    assert_eq!(region.bitmap.width(), 80);
    assert_eq!(region.bitmap.height(), 20);
    for (x, y) in [(0, 0), (79, 19)] {
        let px = region.bitmap.pixel(x, y).unwrap();
        assert!(px[2] >= 250 && px[3] >= 250 && px[0] == 0, "({x},{y}) {px:?}");
    }
}

#[test]
fn degenerate_extraction_still_yields_a_pixel() {
    let surface = Surface::new(10.0, 10.0, 1.0).unwrap();
    let region = extract(&surface, &Drawing::default(), &[]).unwrap();
    assert_eq!(region.source, Rect::ZERO);
    assert_eq!(region.bitmap.width(), 1);
    assert_eq!(region.bitmap.height(), 1);
}

#[test]
fn zero_height_ink_is_captured_one_logical_pixel_tall() {
    let surface = Surface::new(60.0, 30.0, 2.0).unwrap();
    let drawing = Drawing::new(vec![line((10.0, 10.0), (50.0, 10.0), 4)]);
    let region = extract(&surface, &drawing, &[range(0, 0, 4)]).unwrap();
    assert_eq!(region.bitmap.width(), 80);
    assert_eq!(region.bitmap.height(), 2);
}
