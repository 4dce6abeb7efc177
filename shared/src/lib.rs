#![no_std]

mod gamma;
mod packet;

pub use gamma::{gamma, GAMMA_TABLE};
pub use packet::{CalibrationFields, ClockMode, Mode, Packet, PwmFields};

/// Every module in the chain takes one 32 bit word.
pub const BYTES_PER_PACKET: usize = 4;

/// PWM registers are 10 bits wide.
pub const CHANNEL_MAX: u16 = 0x3ff;
pub const CHANNEL_BITS: u32 = 10;

pub const GAMMA_TABLE_LEN: usize = CHANNEL_MAX as usize + 1;

/// Dot correction registers are 7 bits wide.
pub const DOT_CORRECTION_MAX: u8 = 0x7f;

// https://www.pololu.com/file/download/allegroA6281.pdf?file_id=0J225
/// The A6281 datasheet rates the clock input up to 5 MHz.
pub const A6281_MAX_CLOCK_HZ: u32 = 5_000_000;
pub const DEFAULT_CLOCK_HZ: u32 = 4_000_000;

/// Bit 30 selects between the PWM and the calibration registers.
pub const COMMAND_BIT: u32 = 30;
