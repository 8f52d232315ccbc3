//! Fixed-size pixel store
//!
//! Holds the current color of every pixel on the strip. The store is pure
//! data; the encoder reads it out in protocol order each frame.

use crate::color::Rgb;

/// Number of pixels on the strip
pub const PIXEL_COUNT: usize = 8;

/// Per-pixel color state for the whole strip
#[derive(Debug, Clone)]
pub struct PixelStore {
    pixels: [Rgb; PIXEL_COUNT],
}

impl Default for PixelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelStore {
    /// Create a store with all pixels dark
    pub const fn new() -> Self {
        Self {
            pixels: [Rgb { r: 0, g: 0, b: 0 }; PIXEL_COUNT],
        }
    }

    /// Set pixel `index` to the color `(r, g, b)`
    ///
    /// Writes past the end of the strip have no effect. Callers must treat
    /// this as "no effect", not as success confirmation.
    pub fn set_pixel(&mut self, index: usize, r: u8, g: u8, b: u8) {
        self.set(index, Rgb { r, g, b });
    }

    /// Set pixel `index` to `color`, ignoring out-of-range indices
    pub fn set(&mut self, index: usize, color: Rgb) {
        if index >= PIXEL_COUNT {
            return;
        }
        self.pixels[index] = color;
    }

    /// Turn pixel `index` off, ignoring out-of-range indices
    pub fn clear_pixel(&mut self, index: usize) {
        self.set(index, Rgb { r: 0, g: 0, b: 0 });
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.pixels = [Rgb { r: 0, g: 0, b: 0 }; PIXEL_COUNT];
    }

    /// Current colors, in strip order
    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels
    }
}
