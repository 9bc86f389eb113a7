use super::*;
use crate::{
    animation::clock::{ManualClock, SystemClock},
    animation::ease::Ease,
    animation::morph::{ANIMATION_DURATION, MorphEntry},
    foundation::core::Rect,
    render::bitmap::Bitmap,
};

fn entry() -> MorphEntry {
    let bitmap = Bitmap::from_premul_bytes(1, 1, &[0, 0, 0, 255]).unwrap();
    MorphEntry {
        source: Rect::new(2.0, 2.0, 6.0, 6.0),
        target: Rect::new(20.0, 2.0, 6.0, 6.0),
        bitmap,
    }
}

#[test]
fn manual_clock_run_covers_the_whole_duration() {
    let clock = ManualClock::new();
    let mut surface = Surface::new(40.0, 10.0, 1.0).unwrap();
    let start = clock.now();
    let mut pass = MorphPass::start(&mut surface, vec![entry()], start, Ease::OutQuad).unwrap();
    let completion = Completion::after(start, ANIMATION_DURATION);

    let driver = FrameDriver::new(&clock, Duration::from_millis(20));
    let mut seen = Vec::new();
    let stats = driver.run_with(&mut pass, &mut surface, completion, |s, i| {
        seen.push((i, s.opacity()));
    });

    assert_eq!(clock.now(), ANIMATION_DURATION);
    // 0, 20, ..., 260, then the deadline frame at 280.
    assert_eq!(stats.frames, 15);
    assert_eq!(stats.draws, 15);
    assert_eq!(seen.len(), 15);
    assert_eq!(seen.first().map(|f| f.1), Some(1.0));
    assert_eq!(seen.last().map(|f| f.1), Some(0.0));
    assert!(seen.windows(2).all(|w| w[1].0 == w[0].0 + 1));
    assert!(!surface.is_busy());
}

#[test]
fn cancelled_pass_still_waits_for_completion() {
    let clock = ManualClock::new();
    let mut surface = Surface::new(40.0, 10.0, 1.0).unwrap();
    let mut pass =
        MorphPass::start(&mut surface, vec![entry()], clock.now(), Ease::OutQuad).unwrap();
    pass.cancel_handle().cancel();

    let completion = Completion::after(clock.now(), ANIMATION_DURATION);
    let stats = FrameDriver::new(&clock, DEFAULT_FRAME_INTERVAL).run(&mut pass, &mut surface, completion);
    assert_eq!(stats.frames, 0);
    assert_eq!(clock.now(), ANIMATION_DURATION);
}

#[test]
fn early_completion_ends_the_loop() {
    let clock = ManualClock::new();
    let mut surface = Surface::new(40.0, 10.0, 1.0).unwrap();
    let mut pass =
        MorphPass::start(&mut surface, vec![entry()], clock.now(), Ease::OutQuad).unwrap();
    let completion = Completion::after(clock.now(), Duration::from_millis(50));

    let stats = FrameDriver::new(&clock, Duration::from_millis(10)).run(&mut pass, &mut surface, completion);
    assert_eq!(clock.now(), Duration::from_millis(50));
    // 0, 10, 20, 30, 40 and the tick that lands on the deadline.
    assert_eq!(stats.frames, 6);
    assert!(pass.is_stopped());
    assert!(!surface.is_busy());
}

#[test]
fn zero_interval_falls_back_to_display_rate() {
    let clock = ManualClock::new();
    assert_eq!(
        FrameDriver::new(&clock, Duration::ZERO).frame_interval(),
        DEFAULT_FRAME_INTERVAL
    );
}

#[test]
fn wall_clock_run_takes_the_fixed_duration() {
    let clock = SystemClock::new();
    let mut surface = Surface::new(40.0, 10.0, 1.0).unwrap();
    let start = clock.now();
    let mut pass = MorphPass::start(&mut surface, vec![entry()], start, Ease::OutQuad).unwrap();
    let completion = Completion::after(start, ANIMATION_DURATION);
    FrameDriver::new(&clock, DEFAULT_FRAME_INTERVAL).run(&mut pass, &mut surface, completion);

    let elapsed = clock.now() - start;
    assert!(elapsed >= ANIMATION_DURATION);
    assert!(elapsed < ANIMATION_DURATION + Duration::from_millis(250));
}
