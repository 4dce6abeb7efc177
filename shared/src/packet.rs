//! The 32 bit word shifted into each A6281.
//!
//! The chip reads the same word two ways depending on the command bit:
//!
//! ```text
//!  31  30  29 ........ 20  19 ........ 10  9 ......... 0
//! [ x | 0 |   blue PWM    |   red PWM     |  green PWM  ]
//! [ x | 1 | . | blue DC   | . | red DC    | . |clk| green DC ]
//! ```
//!
//! Bit 31 is shifted in first and ignored by the chip, it is always sent as 0.

use crate::{CHANNEL_BITS, CHANNEL_MAX, COMMAND_BIT, DOT_CORRECTION_MAX};

const CHANNEL_MASK: u32 = CHANNEL_MAX as u32;
const DOT_CORRECTION_MASK: u32 = DOT_CORRECTION_MAX as u32;

const GREEN_SHIFT: u32 = 0;
const RED_SHIFT: u32 = CHANNEL_BITS;
const BLUE_SHIFT: u32 = CHANNEL_BITS * 2;
const CLOCK_MODE_SHIFT: u32 = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
	Pwm,
	Calibration,
}

/// PWM register values, each in `0..=1023`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PwmFields {
	pub red:   u16,
	pub green: u16,
	pub blue:  u16,
}

impl PwmFields {
	pub const OFF: Self = Self { red: 0, green: 0, blue: 0 };

	/// Builds PWM fields, saturating each channel at 1023.
	pub const fn new(red: u16, green: u16, blue: u16) -> Self {
		Self {
			red:   clamp_channel(red),
			green: clamp_channel(green),
			blue:  clamp_channel(blue),
		}
	}
}

const fn clamp_channel(value: u16) -> u16 {
	if value > CHANNEL_MAX {
		CHANNEL_MAX
	} else {
		value
	}
}

/// Clock source selection written alongside the dot correction registers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClockMode {
	/// 800 kHz internal oscillator.
	#[default]
	Internal800k,
	/// External clock on the clock input.
	External,
	/// 400 kHz internal oscillator.
	Internal400k,
	/// 200 kHz internal oscillator.
	Internal200k,
}

impl ClockMode {
	const fn bits(self) -> u32 {
		match self {
			Self::Internal800k => 0b00,
			Self::External => 0b01,
			Self::Internal400k => 0b10,
			Self::Internal200k => 0b11,
		}
	}

	const fn from_bits(bits: u32) -> Self {
		match bits & 0b11 {
			0b00 => Self::Internal800k,
			0b01 => Self::External,
			0b10 => Self::Internal400k,
			_ => Self::Internal200k,
		}
	}
}

/// Current calibration registers.
///
/// Nothing in the driver writes these yet, they are here so calibration can be
/// added without touching the wire format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CalibrationFields {
	pub red_dot_correct:   u8,
	pub green_dot_correct: u8,
	pub blue_dot_correct:  u8,
	pub clock_mode:        ClockMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Packet {
	Pwm(PwmFields),
	Calibration(CalibrationFields),
}

impl Default for Packet {
	fn default() -> Self {
		Self::Pwm(PwmFields::OFF)
	}
}

impl Packet {
	pub const OFF: Self = Self::Pwm(PwmFields::OFF);

	pub const fn mode(&self) -> Mode {
		match self {
			Self::Pwm(_) => Mode::Pwm,
			Self::Calibration(_) => Mode::Calibration,
		}
	}

	pub const fn encode(&self) -> u32 {
		match self {
			Self::Pwm(pwm) => {
				(pwm.green as u32 & CHANNEL_MASK) << GREEN_SHIFT
					| (pwm.red as u32 & CHANNEL_MASK) << RED_SHIFT
					| (pwm.blue as u32 & CHANNEL_MASK) << BLUE_SHIFT
			}
			Self::Calibration(cal) => {
				1 << COMMAND_BIT
					| (cal.green_dot_correct as u32 & DOT_CORRECTION_MASK) << GREEN_SHIFT
					| cal.clock_mode.bits() << CLOCK_MODE_SHIFT
					| (cal.red_dot_correct as u32 & DOT_CORRECTION_MASK) << RED_SHIFT
					| (cal.blue_dot_correct as u32 & DOT_CORRECTION_MASK) << BLUE_SHIFT
			}
		}
	}

	/// Reads a word back, ignoring the unused bits.
	pub const fn decode(word: u32) -> Self {
		if word >> COMMAND_BIT & 1 == 0 {
			Self::Pwm(PwmFields {
				red:   (word >> RED_SHIFT & CHANNEL_MASK) as u16,
				green: (word >> GREEN_SHIFT & CHANNEL_MASK) as u16,
				blue:  (word >> BLUE_SHIFT & CHANNEL_MASK) as u16,
			})
		} else {
			Self::Calibration(CalibrationFields {
				red_dot_correct:   (word >> RED_SHIFT & DOT_CORRECTION_MASK) as u8,
				green_dot_correct: (word >> GREEN_SHIFT & DOT_CORRECTION_MASK) as u8,
				blue_dot_correct:  (word >> BLUE_SHIFT & DOT_CORRECTION_MASK) as u8,
				clock_mode:        ClockMode::from_bits(word >> CLOCK_MODE_SHIFT),
			})
		}
	}

	/// Wire order, most significant byte first.
	pub const fn to_be_bytes(&self) -> [u8; 4] {
		self.encode().to_be_bytes()
	}

	pub const fn pwm(&self) -> Option<PwmFields> {
		match self {
			Self::Pwm(pwm) => Some(*pwm),
			Self::Calibration(_) => None,
		}
	}
}

impl From<PwmFields> for Packet {
	fn from(pwm: PwmFields) -> Self {
		Self::Pwm(pwm)
	}
}

impl From<CalibrationFields> for Packet {
	fn from(cal: CalibrationFields) -> Self {
		Self::Calibration(cal)
	}
}
