use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    assert_eq!(over(dst, [200, 200, 200, 200], 0.0), dst);
}

#[test]
fn over_transparent_src_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(over(dst, [255, 255, 255, 0], 1.0), dst);
}

#[test]
fn over_opaque_src_replaces_dst() {
    assert_eq!(over([0, 0, 0, 255], [255, 0, 0, 255], 1.0), [255, 0, 0, 255]);
}

#[test]
fn over_half_opacity_onto_transparent_halves_src() {
    assert_eq!(over([0, 0, 0, 0], [255, 255, 255, 255], 0.5), [128, 128, 128, 128]);
}

#[test]
fn mul_div255_identity_and_zero() {
    for x in [0u16, 1, 127, 255] {
        assert_eq!(u16::from(mul_div255(x, 255)), x);
        assert_eq!(mul_div255(x, 0), 0);
    }
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
}
