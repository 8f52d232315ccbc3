//! Frame pipeline
//!
//! Ties the animation, encoder and transmitter together and paces frames
//! with the externally supplied sample value. The caller provides the
//! hardware seams; everything else is owned here, so independent pipelines
//! can coexist in tests.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use embedded_hal::delay::DelayNs;

use crate::chase::ChaseAnimation;
use crate::encoder::FrameEncoder;
use crate::pixel::PixelStore;
use crate::transmitter::Transmitter;
use crate::{OutputPort, SampleSource};

/// Chase pipeline: animation -> encode -> transmit -> delay
///
/// One frame is one [`tick`](Self::tick). The inter-frame delay is not a
/// fixed constant; it is whatever the sample source currently reads, in
/// milliseconds.
pub struct ChaseRunner<P: OutputPort, S: SampleSource, D: DelayNs> {
    pixels: PixelStore,
    encoder: FrameEncoder,
    transmitter: Transmitter<P>,
    animation: ChaseAnimation,
    sample: S,
    delay: D,
}

impl<P: OutputPort, S: SampleSource, D: DelayNs> ChaseRunner<P, S, D> {
    pub fn new(transmitter: Transmitter<P>, sample: S, delay: D) -> Self {
        Self {
            pixels: PixelStore::new(),
            encoder: FrameEncoder::new(),
            transmitter,
            animation: ChaseAnimation::new(),
            sample,
            delay,
        }
    }

    /// Process one frame and return the inter-frame delay in milliseconds
    ///
    /// Advances the animation, re-encodes the symbol buffer in full,
    /// transmits it, then reads the sample source. The caller is
    /// responsible for waiting out the returned delay before the next
    /// tick; [`run`](Self::run) does exactly that.
    pub fn tick(&mut self) -> u32 {
        self.animation.advance(&mut self.pixels);
        let symbols = self.encoder.encode(&self.pixels);
        self.transmitter.transmit(symbols);

        let delay_ms = u32::from(self.sample.read());

        #[cfg(feature = "esp32-log")]
        println!(
            "frame: step={} color={} delay={}ms",
            self.animation.step(),
            self.animation.color_index(),
            delay_ms
        );

        delay_ms
    }

    /// Run the chase forever
    pub fn run(&mut self) -> ! {
        loop {
            let delay_ms = self.tick();
            self.delay.delay_ms(delay_ms);
        }
    }

    pub fn transmitter(&self) -> &Transmitter<P> {
        &self.transmitter
    }

    pub fn animation(&self) -> &ChaseAnimation {
        &self.animation
    }

    pub fn pixels(&self) -> &PixelStore {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut PixelStore {
        &mut self.pixels
    }
}
