use std::time::Duration;

use super::*;
use crate::{
    animation::clock::ManualClock,
    animation::morph::ANIMATION_DURATION,
    config::MorphConfig,
    ink::host::StaticHost,
    ink::model::{AnimationData, Drawing, DrawingSegment, Point, Prediction, Segment, Stroke},
    ink::recognizer::ScriptedSession,
    layout::metrics::MonospaceRatio,
};

fn host() -> StaticHost {
    StaticHost::new(AnimationData {
        canvas_width: 120.0,
        padding: 8.0,
        scroll_top: 0.0,
        font_size: 16.0,
    })
}

fn scribble() -> Drawing {
    Drawing::new(vec![Stroke::from_points(vec![
        Point::new(10.0, 10.0, 0.0),
        Point::new(30.0, 25.0, 16.0),
    ])])
}

fn hi() -> Prediction {
    Prediction {
        text: "hi".to_string(),
        segmentation_result: Some(vec![Segment {
            grapheme: "hi".to_string(),
            begin_index: 0,
            end_index: 2,
            drawing_segments: vec![DrawingSegment {
                stroke_index: 0,
                begin_point_index: 0,
                end_point_index: 1,
            }],
        }]),
    }
}

fn coordinator() -> AnimationCoordinator<MonospaceRatio> {
    AnimationCoordinator::new(MonospaceRatio::default(), MorphConfig::default())
}

#[test]
fn first_prediction_is_animated_and_returned() {
    let clock = ManualClock::new();
    let mut session = ScriptedSession::new(
        scribble(),
        vec![hi(), Prediction::text_only("lo")],
    );
    let mut h = host();
    let mut surface = Surface::new(120.0, 60.0, 1.0).unwrap();
    surface.paint_drawing(session.drawing(), &MorphConfig::default().ink);

    let text = recognize_and_animate(
        &mut session,
        &mut h,
        &mut coordinator(),
        &mut surface,
        "",
        &clock,
    )
    .unwrap();

    assert_eq!(text, "hi");
    assert_eq!(h.requests(), 1);
    assert_eq!(clock.now(), ANIMATION_DURATION);
    assert!(surface.pixels().iter().all(|&b| b == 0));
    assert_eq!(surface.opacity(), 1.0);
    assert!(!surface.is_busy());
}

#[test]
fn no_prediction_yields_empty_text_without_animating() {
    let clock = ManualClock::new();
    let mut session = ScriptedSession::new(Drawing::default(), vec![hi()]);
    let mut h = host();
    let mut surface = Surface::new(120.0, 60.0, 1.0).unwrap();

    let text = recognize_and_animate(
        &mut session,
        &mut h,
        &mut coordinator(),
        &mut surface,
        "abc",
        &clock,
    )
    .unwrap();

    assert_eq!(text, "");
    assert_eq!(h.requests(), 0);
    assert_eq!(clock.now(), Duration::ZERO);
}
