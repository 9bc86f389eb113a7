use super::*;
use crate::foundation::core::{Rect, Rgba8};

#[test]
fn unpremultiply_restores_straight_colour() {
    assert_eq!(unpremultiply(&[0, 0, 0, 0]), vec![0, 0, 0, 0]);
    assert_eq!(unpremultiply(&[255, 0, 0, 255]), vec![255, 0, 0, 255]);
    assert_eq!(unpremultiply(&[64, 64, 64, 128]), vec![128, 128, 128, 128]);
}

#[test]
fn surface_png_roundtrips_through_image() {
    let dir = std::path::PathBuf::from("target").join("unit_png");
    let path = dir.join("surface.png");
    let _ = std::fs::remove_file(&path);

    let mut s = Surface::new(4.0, 2.0, 1.0).unwrap();
    s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Rgba8::new(255, 0, 0, 255));
    s.set_opacity(0.5);
    write_surface_png(&s, &path).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (4, 2));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 128]);
    assert_eq!(img.get_pixel(3, 1).0, [0, 0, 0, 0]);
}
