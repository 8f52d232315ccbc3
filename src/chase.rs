//! Chase animation
//!
//! A single lit pixel bounces between the two ends of the strip. Each
//! time it arrives at an endpoint the direction flips and the palette
//! index advances by one (mod 8), so the dot changes color once per
//! bounce.

use crate::color::{PALETTE, PALETTE_LEN};
use crate::pixel::{PIXEL_COUNT, PixelStore};

/// Travel direction of the lit pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Step delta: +1 forward, -1 backward
    pub const fn delta(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Chase state machine
///
/// Requires a strip of at least two pixels: the interior case clears the
/// pixel at `step - delta`, which is only in range for `PIXEL_COUNT >= 2`.
#[derive(Debug, Clone)]
pub struct ChaseAnimation {
    step: usize,
    direction: Direction,
    color_index: usize,
}

impl Default for ChaseAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl ChaseAnimation {
    /// Start at pixel 0, moving forward, on palette entry 0
    pub const fn new() -> Self {
        Self {
            step: 0,
            direction: Direction::Forward,
            color_index: 0,
        }
    }

    /// Mutate `pixels` for one frame and advance the state
    ///
    /// Clears the previously lit pixel, lights the current one with the
    /// current palette color, then moves `step` one position along the
    /// travel direction.
    pub fn advance(&mut self, pixels: &mut PixelStore) {
        const LAST: usize = PIXEL_COUNT - 1;

        match self.step {
            0 => {
                if self.direction == Direction::Backward {
                    self.direction = Direction::Forward;
                    self.bump_color();
                }
                pixels.clear_pixel(1);
                pixels.set(0, PALETTE[self.color_index]);
            }
            LAST => {
                if self.direction == Direction::Forward {
                    self.direction = Direction::Backward;
                    self.bump_color();
                }
                pixels.clear_pixel(LAST - 1);
                pixels.set(LAST, PALETTE[self.color_index]);
            }
            _ => {
                let behind = self.step.wrapping_add_signed(-isize::from(self.direction.delta()));
                pixels.clear_pixel(behind);
                pixels.set(self.step, PALETTE[self.color_index]);
            }
        }

        self.step = self.step.wrapping_add_signed(isize::from(self.direction.delta()));
    }

    fn bump_color(&mut self) {
        self.color_index = (self.color_index + 1) % PALETTE_LEN;
    }

    /// Pixel the next `advance` call will light
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Palette entry the lit pixel is using
    pub fn color_index(&self) -> usize {
        self.color_index
    }
}
