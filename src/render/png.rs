use std::path::Path;

use anyhow::Context as _;

use crate::{foundation::error::MorphResult, render::surface::Surface};

/// Premultiplied RGBA8 to straight RGBA8, as PNG expects.
pub fn unpremultiply(premul: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(premul.len());
    for px in premul.chunks_exact(4) {
        let a = px[3];
        if a == 0 {
            out.extend_from_slice(&[0, 0, 0, 0]);
            continue;
        }
        let un = |c: u8| ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8;
        out.extend_from_slice(&[un(px[0]), un(px[1]), un(px[2]), a]);
    }
    out
}

/// Write the surface's device pixels as a PNG, with the surface opacity applied to alpha.
pub fn write_surface_png(surface: &Surface, path: &Path) -> MorphResult<()> {
    let mut straight = unpremultiply(surface.pixels());
    let opacity = surface.opacity();
    if opacity < 1.0 {
        for px in straight.chunks_exact_mut(4) {
            px[3] = (f64::from(px[3]) * opacity).round() as u8;
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &straight,
        surface.device_width(),
        surface.device_height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/png.rs"]
mod tests;
