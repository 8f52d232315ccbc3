use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Number of palette entries the chase cycles through
pub const PALETTE_LEN: usize = 8;

/// Common brightness level for the primary palette entries
const LEVEL: u8 = 0x22;

/// Fixed chase palette
///
/// Seven primaries/secondaries at a uniform low brightness, plus a soft
/// green as the final entry.
pub const PALETTE: [Rgb; PALETTE_LEN] = [
    Rgb { r: 0x00, g: 0x00, b: LEVEL },  // blue
    Rgb { r: 0x00, g: LEVEL, b: 0x00 },  // green
    Rgb { r: 0x00, g: LEVEL, b: LEVEL }, // cyan
    Rgb { r: LEVEL, g: 0x00, b: 0x00 },  // red
    Rgb { r: LEVEL, g: 0x00, b: LEVEL }, // magenta
    Rgb { r: LEVEL, g: LEVEL, b: 0x00 }, // yellow
    Rgb { r: LEVEL, g: LEVEL, b: LEVEL }, // white
    Rgb { r: 0x10, g: 0x40, b: 0x10 },   // soft green
];
