#![no_std]

pub mod chase;
pub mod color;
pub mod encoder;
pub mod pixel;
pub mod runner;
pub mod transmitter;

pub use chase::{ChaseAnimation, Direction};
pub use color::{PALETTE, PALETTE_LEN, Rgb};
pub use encoder::{FrameEncoder, LEVEL_BIT_HIGH, LEVEL_BIT_LOW, LEVEL_QUIET, SYMBOL_BUFFER_LEN};
pub use pixel::{PIXEL_COUNT, PixelStore};
pub use runner::ChaseRunner;
pub use transmitter::{LineTiming, Transmitter};

pub use embedded_hal::delay::DelayNs;

/// Abstract output line driver
///
/// Implement this trait to support different hardware platforms.
/// A hardware implementation writes the drive code straight to a GPIO
/// output data register. The transmitter paces the calls itself, so
/// `write` must not add delays of its own.
pub trait OutputPort {
    /// Drive the line to the given code
    fn write(&mut self, code: u8);
}

/// Externally refreshed analog sample
///
/// The value is read once per frame and used directly as the inter-frame
/// delay in milliseconds. The provider is responsible for keeping it in a
/// sane range; the core does no bounds-checking.
pub trait SampleSource {
    /// Read the current sample value
    fn read(&mut self) -> u16;
}
