use std::sync::Arc;

use crate::{
    foundation::error::{MorphError, MorphResult},
    foundation::math::PremulRgba8,
};

/// Offscreen premultiplied RGBA8 snapshot of one grapheme's ink.
///
/// Owns its own pixmap; nothing here borrows from the surface it was read from.
/// The pixmap is shared with the image paint used to redraw it.
#[derive(Clone)]
pub struct Bitmap {
    pixmap: Arc<vello_cpu::Pixmap>,
}

impl Bitmap {
    /// Bitmap over already premultiplied RGBA8 bytes, row-major.
    pub fn from_premul_bytes(width: u16, height: u16, bytes: &[u8]) -> MorphResult<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if bytes.len() != expected {
            return Err(MorphError::surface(format!(
                "bitmap byte len {} does not match {width}x{height}",
                bytes.len()
            )));
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| {
                vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]])
            })
            .collect::<Vec<_>>();
        Ok(Self {
            pixmap: Arc::new(vello_cpu::Pixmap::from_parts_with_opacity(
                pixels, width, height, true,
            )),
        })
    }

    pub fn width(&self) -> u32 {
        u32::from(self.pixmap.width())
    }

    pub fn height(&self) -> u32 {
        u32::from(self.pixmap.height())
    }

    pub fn data(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<PremulRgba8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let i = ((y as usize) * (self.width() as usize) + (x as usize)) * 4;
        let d = self.data();
        Some([d[i], d[i + 1], d[i + 2], d[i + 3]])
    }

    /// Image paint sampling this bitmap in its own pixel space.
    pub fn paint(&self) -> vello_cpu::Image {
        vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::clone(&self.pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        }
    }
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
