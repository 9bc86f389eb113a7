use super::*;

const ALL: [Ease; 5] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::OutCubic,
];

#[test]
fn endpoints_are_exact() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn out_of_range_input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
        assert_eq!(ease.apply(f64::NAN), 0.0);
    }
}

#[test]
fn out_quad_front_loads_progress() {
    assert_eq!(Ease::OutQuad.apply(0.5), 0.75);
    assert!(Ease::OutQuad.apply(0.25) > Ease::Linear.apply(0.25));
    assert_eq!(Ease::default(), Ease::OutQuad);
}

#[test]
fn curves_are_monotonic() {
    for ease in ALL {
        let mut prev = ease.apply(0.0);
        for i in 1..=20 {
            let v = ease.apply(f64::from(i) / 20.0);
            assert!(v >= prev, "{ease:?} dipped at step {i}");
            prev = v;
        }
    }
}

#[test]
fn in_out_quad_is_symmetric_at_midpoint() {
    assert!((Ease::InOutQuad.apply(0.5) - 0.5).abs() < 1e-12);
}
