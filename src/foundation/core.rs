use crate::foundation::error::{MorphError, MorphResult};

/// Axis-aligned rectangle in logical (CSS) pixels.
///
/// Width and height are signed: a region extracted from an empty ink range is
/// allowed to be degenerate, and callers decide whether to draw it through
/// [`Rect::is_drawable`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Keeps the sign of kurbo's extents, so an inverted rect stays degenerate.
    pub fn from_kurbo(r: kurbo::Rect) -> Self {
        Self::new(r.x0, r.y0, r.width(), r.height())
    }

    pub fn to_kurbo(self) -> kurbo::Rect {
        kurbo::Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    pub fn clamped(self) -> Self {
        Self::new(self.x, self.y, self.width.max(0.0), self.height.max(0.0))
    }

    pub fn is_drawable(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Device-pixel region used to snapshot this rect from a surface.
    ///
    /// The origin is floored and clamped to the buffer origin; the extent is at
    /// least one logical pixel (`device_pixel_ratio` device pixels) and never
    /// below one device pixel, so a degenerate rect still reads a valid region.
    pub fn to_device_snapshot(self, device_pixel_ratio: f64) -> DeviceRect {
        let dpr = device_pixel_ratio;
        let x = (self.x * dpr).max(0.0).floor();
        let y = (self.y * dpr).max(0.0).floor();
        let w = (self.width * dpr).max(dpr).ceil().max(1.0);
        let h = (self.height * dpr).max(dpr).ceil().max(1.0);
        DeviceRect {
            x: to_u32_saturating(x),
            y: to_u32_saturating(y),
            width: to_u32_saturating(w),
            height: to_u32_saturating(h),
        }
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::new(
            self.x * factor,
            self.y * factor,
            self.width * factor,
            self.height * factor,
        )
    }
}

fn to_u32_saturating(v: f64) -> u32 {
    if !v.is_finite() || v <= 0.0 {
        0
    } else if v >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        v as u32
    }
}

/// Rectangle in whole device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct DeviceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Straight (non-premultiplied) RGBA8 colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Self = Self::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Font the surface renders text with; the layout engine keys its metric cache on it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size_px: f32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size_px: f32) -> MorphResult<Self> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(MorphError::validation(
                "font size_px must be finite and > 0",
            ));
        }
        Ok(Self {
            family: family.into(),
            size_px,
        })
    }

    pub fn monospace(size_px: f32) -> MorphResult<Self> {
        Self::new("monospace", size_px)
    }
}

impl std::fmt::Display for FontSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "normal {}px {}", self.size_px, self.family)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
