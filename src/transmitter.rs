//! Bit-banged line transmitter
//!
//! Replays a symbol buffer onto the output line, bracketed by the
//! protocol's reset pulse and the idle level. All timing comes from
//! calibrated spin loops; there is no timer and no error path. A timing
//! violation is a silent correctness failure visible only as flicker or
//! wrong colors downstream.
//!
//! The caller must not yield for the duration of [`Transmitter::transmit`]:
//! no interrupts serviced, no task switch. The line transitions at
//! sub-microsecond granularity and any preemption mid-frame violates the
//! protocol.

use crate::OutputPort;
use crate::encoder::LEVEL_QUIET;

/// Reset pulse hold time
const RESET_HOLD_NS: u32 = 50_000;
/// Per-phase window; three phases make one protocol bit
const BIT_PHASE_NS: u32 = 400;
/// Approximate CPU cycles per spin-loop iteration
const CYCLES_PER_SPIN: u32 = 3;

/// Spin-loop iteration counts for the two timing windows
///
/// These are platform-specific. [`LineTiming::from_clock_hz`] derives a
/// starting point from the CPU clock, but the counts must be re-verified
/// on the real part when porting, never copied across platforms.
#[derive(Debug, Clone, Copy)]
pub struct LineTiming {
    /// Iterations for the ~50 us reset hold
    pub reset_spins: u32,
    /// Iterations for the ~400 ns hold after each symbol byte
    pub bit_phase_spins: u32,
}

impl LineTiming {
    /// Use explicit, hand-calibrated iteration counts
    pub const fn new(reset_spins: u32, bit_phase_spins: u32) -> Self {
        Self {
            reset_spins,
            bit_phase_spins,
        }
    }

    /// Derive iteration counts from the CPU clock frequency
    ///
    /// Assumes roughly [`CYCLES_PER_SPIN`] cycles per iteration. At 48 MHz
    /// this gives 6 iterations per bit phase (~400 ns).
    pub const fn from_clock_hz(clock_hz: u32) -> Self {
        let cycles_per_us = clock_hz / 1_000_000;
        Self {
            reset_spins: (RESET_HOLD_NS / 1_000) * cycles_per_us / CYCLES_PER_SPIN,
            bit_phase_spins: BIT_PHASE_NS * cycles_per_us / 1_000 / CYCLES_PER_SPIN,
        }
    }
}

/// Drives one frame's symbols onto the output line
///
/// Owns the port exclusively; nothing else may drive the line while a
/// transmit call is in progress.
#[derive(Debug)]
pub struct Transmitter<P: OutputPort> {
    port: P,
    timing: LineTiming,
}

impl<P: OutputPort> Transmitter<P> {
    pub const fn new(port: P, timing: LineTiming) -> Self {
        Self { port, timing }
    }

    /// Send one frame
    ///
    /// Holds the line quiet for the reset pulse, streams every symbol byte
    /// at the calibrated cadence, then leaves the line at the idle level.
    pub fn transmit(&mut self, symbols: &[u8]) {
        // Reset pulse: downstream devices latch the previous frame.
        self.port.write(LEVEL_QUIET);
        spin(self.timing.reset_spins);

        for &code in symbols {
            self.port.write(code);
            spin(self.timing.bit_phase_spins);
        }

        // Idle: ready for the next reset/frame cycle.
        self.port.write(LEVEL_QUIET);
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }
}

/// Calibrated busy wait
///
/// Sub-millisecond holds cannot go through a sleep call; the delay is
/// enforced by counting loop iterations.
#[inline(always)]
fn spin(iterations: u32) {
    let mut i = 0;
    while i < iterations {
        core::hint::spin_loop();
        i += 1;
    }
}
