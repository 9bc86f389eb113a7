use std::{
    cell::Cell,
    rc::{Rc, Weak},
};

use crate::{
    foundation::core::{DeviceRect, FontSpec, Rect, Rgba8},
    foundation::error::{MorphError, MorphResult},
    foundation::math::{PremulRgba8, over},
    ink::model::{Drawing, Stroke},
    render::bitmap::Bitmap,
};

/// How captured ink is stroked onto the surface.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InkStyle {
    /// Line width in logical pixels.
    pub width: f64,
    pub color: Rgba8,
}

impl Default for InkStyle {
    fn default() -> Self {
        Self {
            width: 2.0,
            color: Rgba8::BLACK,
        }
    }
}

/// The live drawing surface: a device-pixel buffer behind a logical coordinate space.
///
/// Geometry handed to the surface is logical; it multiplies by the device pixel
/// ratio before touching the buffer. `opacity` is the opacity the host should
/// composite the whole surface with.
pub struct Surface {
    logical_width: f64,
    logical_height: f64,
    device_pixel_ratio: f64,
    pixmap: vello_cpu::Pixmap,
    font: Option<FontSpec>,
    opacity: f64,
    active_pass: Option<Weak<SurfaceLease>>,
}

/// Marks a surface as owned by one animation pass until released or dropped.
#[derive(Debug, Default)]
pub struct SurfaceLease {
    released: Cell<bool>,
}

impl SurfaceLease {
    pub fn release(&self) {
        self.released.set(true);
    }

    pub fn is_released(&self) -> bool {
        self.released.get()
    }
}

impl Surface {
    pub fn new(logical_width: f64, logical_height: f64, device_pixel_ratio: f64) -> MorphResult<Self> {
        if !device_pixel_ratio.is_finite() || device_pixel_ratio <= 0.0 {
            return Err(MorphError::surface(
                "device pixel ratio must be finite and > 0",
            ));
        }
        if !logical_width.is_finite() || !logical_height.is_finite() {
            return Err(MorphError::surface("surface size must be finite"));
        }

        let device_w = (logical_width * device_pixel_ratio).ceil();
        let device_h = (logical_height * device_pixel_ratio).ceil();
        if device_w < 1.0 || device_h < 1.0 {
            return Err(MorphError::surface(format!(
                "surface {logical_width}x{logical_height} has no device pixels"
            )));
        }
        if device_w > f64::from(u16::MAX) || device_h > f64::from(u16::MAX) {
            return Err(MorphError::surface(format!(
                "surface {device_w}x{device_h} device pixels exceeds u16"
            )));
        }

        Ok(Self {
            logical_width,
            logical_height,
            device_pixel_ratio,
            pixmap: vello_cpu::Pixmap::new(device_w as u16, device_h as u16),
            font: None,
            opacity: 1.0,
            active_pass: None,
        })
    }

    pub fn logical_width(&self) -> f64 {
        self.logical_width
    }

    pub fn logical_height(&self) -> f64 {
        self.logical_height
    }

    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    pub fn device_width(&self) -> u32 {
        u32::from(self.pixmap.width())
    }

    pub fn device_height(&self) -> u32 {
        u32::from(self.pixmap.height())
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn font(&self) -> Option<&FontSpec> {
        self.font.as_ref()
    }

    pub fn set_font(&mut self, font: FontSpec) {
        self.font = Some(font);
    }

    pub fn pixels(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        self.pixmap.data_as_u8_slice_mut()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<PremulRgba8> {
        if x >= self.device_width() || y >= self.device_height() {
            return None;
        }
        let i = self.offset(x, y);
        let d = self.pixels();
        Some([d[i], d[i + 1], d[i + 2], d[i + 3]])
    }

    pub fn clear(&mut self) {
        self.pixels_mut().fill(0);
    }

    /// Fill a logical rect with a solid colour, source-over.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        if !rect.is_drawable() {
            return;
        }
        let dpr = self.device_pixel_ratio;
        self.composite_layer(|ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::scale(dpr));
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                color.r, color.g, color.b, color.a,
            ));
            ctx.fill_rect(&rect_to_cpu(rect));
            1
        });
    }

    /// Copy a device-pixel region into an independent bitmap.
    ///
    /// Pixels outside the buffer read back transparent; the bitmap always has
    /// the requested size (capped at `u16::MAX` per side).
    pub fn read_pixels(&self, region: DeviceRect) -> MorphResult<Bitmap> {
        let bw = region.width.min(u32::from(u16::MAX)) as u16;
        let bh = region.height.min(u32::from(u16::MAX)) as u16;
        let mut bytes = vec![0u8; (bw as usize) * (bh as usize) * 4];

        let x_end = region.x.saturating_add(u32::from(bw)).min(self.device_width());
        let y_end = region.y.saturating_add(u32::from(bh)).min(self.device_height());
        if region.x < x_end && region.y < y_end {
            let row_bytes = ((x_end - region.x) as usize) * 4;
            let src = self.pixels();
            for sy in region.y..y_end {
                let s = self.offset(region.x, sy);
                let d = ((sy - region.y) as usize) * (bw as usize) * 4;
                bytes[d..d + row_bytes].copy_from_slice(&src[s..s + row_bytes]);
            }
        }
        Bitmap::from_premul_bytes(bw, bh, &bytes)
    }

    /// Draw `bitmap` stretched over the logical rect `dest`, source-over.
    /// Returns `false` when nothing could be drawn.
    pub fn draw_bitmap(&mut self, bitmap: &Bitmap, dest: Rect) -> bool {
        self.draw_bitmaps([(bitmap, dest)]) == 1
    }

    /// Draw several bitmaps in order within one render pass. Entries with no
    /// area, or entirely off the surface, are skipped. Returns the number drawn.
    pub fn draw_bitmaps<'a, I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = (&'a Bitmap, Rect)>,
    {
        let dpr = self.device_pixel_ratio;
        let bounds = Rect::new(0.0, 0.0, self.logical_width, self.logical_height);
        self.composite_layer(|ctx| {
            let mut drawn = 0usize;
            for (bitmap, dest) in items {
                if !dest.is_drawable() || !overlaps(dest, bounds) {
                    continue;
                }
                let bw = f64::from(bitmap.width());
                let bh = f64::from(bitmap.height());
                if bw == 0.0 || bh == 0.0 {
                    continue;
                }
                ctx.set_transform(
                    vello_cpu::kurbo::Affine::scale(dpr)
                        * vello_cpu::kurbo::Affine::translate((dest.x, dest.y))
                        * vello_cpu::kurbo::Affine::scale_non_uniform(
                            dest.width / bw,
                            dest.height / bh,
                        ),
                );
                ctx.set_paint(bitmap.paint());
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, bw, bh));
                drawn += 1;
            }
            drawn
        })
    }

    /// Stroke every ink path of `drawing` on top of the current contents.
    pub fn paint_drawing(&mut self, drawing: &Drawing, style: &InkStyle) {
        let dpr = self.device_pixel_ratio;
        let painted = self.composite_layer(|ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::scale(dpr));
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                style.color.r,
                style.color.g,
                style.color.b,
                style.color.a,
            ));
            ctx.set_stroke(
                vello_cpu::kurbo::Stroke::new(style.width)
                    .with_caps(vello_cpu::kurbo::Cap::Round)
                    .with_join(vello_cpu::kurbo::Join::Round),
            );

            let mut painted = 0usize;
            for stroke in &drawing.strokes {
                if let Some(path) = ink_path(stroke) {
                    ctx.stroke_path(&path);
                    painted += 1;
                }
            }
            painted
        });
        tracing::trace!(strokes = painted, "ink painted");
    }

    /// Record draws into a fresh layer the size of the surface and composite
    /// it over the current contents. Nothing is rendered when `draw` reports 0.
    fn composite_layer<F>(&mut self, draw: F) -> usize
    where
        F: FnOnce(&mut vello_cpu::RenderContext) -> usize,
    {
        let w = self.pixmap.width();
        let h = self.pixmap.height();
        let mut ctx = vello_cpu::RenderContext::new(w, h);
        let count = draw(&mut ctx);
        if count == 0 {
            return 0;
        }

        let mut layer = vello_cpu::Pixmap::new(w, h);
        ctx.flush();
        ctx.render_to_pixmap(&mut layer);

        let dst = self.pixmap.data_as_u8_slice_mut();
        for (d, s) in dst
            .chunks_exact_mut(4)
            .zip(layer.data_as_u8_slice().chunks_exact(4))
        {
            let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], 1.0);
            d.copy_from_slice(&out);
        }
        count
    }

    pub(crate) fn claim(&mut self) -> MorphResult<Rc<SurfaceLease>> {
        if self.is_busy() {
            return Err(MorphError::busy(
                "an animation pass is still running on this surface",
            ));
        }
        let lease = Rc::new(SurfaceLease::default());
        self.active_pass = Some(Rc::downgrade(&lease));
        Ok(lease)
    }

    /// True while a pass holds an unreleased lease on this surface.
    pub fn is_busy(&self) -> bool {
        self.active_pass
            .as_ref()
            .and_then(Weak::upgrade)
            .is_some_and(|lease| !lease.is_released())
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.device_width() as usize) + (x as usize)) * 4
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("logical_width", &self.logical_width)
            .field("logical_height", &self.logical_height)
            .field("device_pixel_ratio", &self.device_pixel_ratio)
            .field("font", &self.font)
            .field("opacity", &self.opacity)
            .field("busy", &self.is_busy())
            .finish()
    }
}

fn rect_to_cpu(rect: Rect) -> vello_cpu::kurbo::Rect {
    let r = rect.to_kurbo();
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x < b.x + b.width && b.x < a.x + a.width && a.y < b.y + b.height && b.y < a.y + a.height
}

fn ink_path(stroke: &Stroke) -> Option<vello_cpu::kurbo::BezPath> {
    let (first, rest) = stroke.points().split_first()?;
    let mut path = vello_cpu::kurbo::BezPath::new();
    path.move_to((first.x, first.y));
    if rest.is_empty() {
        // A tap still leaves a round dot.
        path.line_to((first.x, first.y));
    }
    for p in rest {
        path.line_to((p.x, p.y));
    }
    Some(path)
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
