//! Frame encoder
//!
//! Translates the pixel store into a flat buffer of drive codes, one
//! 3-byte symbol per protocol bit. The transmitter later replays the
//! buffer onto the line at a fixed cadence, so each byte here corresponds
//! to one equal-duration phase of the bit waveform: a high leading edge,
//! a bit-dependent middle phase, then low.

use heapless::Vec;

use crate::pixel::{PIXEL_COUNT, PixelStore};

/// Drive code for the reset pulse and the inter-frame idle level
pub const LEVEL_QUIET: u8 = 0x0;
/// Drive code with the data line low (bit 0 tail, and the "0" middle phase)
pub const LEVEL_BIT_LOW: u8 = 0x4;
/// Drive code with the data line high (leading edge, and the "1" middle phase)
pub const LEVEL_BIT_HIGH: u8 = 0x6;

/// Color channels per pixel, sent green-red-blue on the wire
const CHANNELS_PER_PIXEL: usize = 3;
const BITS_PER_CHANNEL: usize = 8;
/// Drive-code bytes per protocol bit
const PHASES_PER_BIT: usize = 3;

/// Symbol buffer length for one full frame
pub const SYMBOL_BUFFER_LEN: usize =
    PIXEL_COUNT * CHANNELS_PER_PIXEL * BITS_PER_CHANNEL * PHASES_PER_BIT;

/// Encodes pixel state into the per-frame symbol buffer
///
/// The buffer is owned by the encoder and rebuilt in full on every call;
/// there is no incremental update. Encoding is a pure function of the
/// pixel store.
#[derive(Debug, Default)]
pub struct FrameEncoder {
    buffer: Vec<u8, SYMBOL_BUFFER_LEN>,
}

impl FrameEncoder {
    pub const fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Rebuild the symbol buffer from `pixels` and return it
    ///
    /// Channels are emitted green, red, blue per pixel, each MSB first.
    /// This order must match the physical chain; reordering corrupts the
    /// color mapping, not the data integrity.
    pub fn encode(&mut self, pixels: &PixelStore) -> &[u8] {
        self.buffer.clear();
        for color in pixels.as_slice() {
            for channel in [color.g, color.r, color.b] {
                self.push_channel(channel);
            }
        }
        &self.buffer
    }

    /// Symbols from the most recent `encode` call
    pub fn symbols(&self) -> &[u8] {
        &self.buffer
    }

    fn push_channel(&mut self, channel: u8) {
        let mut c = channel;
        for _ in 0..BITS_PER_CHANNEL {
            let middle = if c & 0x80 != 0 {
                LEVEL_BIT_HIGH
            } else {
                LEVEL_BIT_LOW
            };
            // Capacity covers exactly one frame, so these cannot fail.
            self.buffer.push(LEVEL_BIT_HIGH).ok();
            self.buffer.push(middle).ok();
            self.buffer.push(LEVEL_BIT_LOW).ok();
            c <<= 1;
        }
    }
}
