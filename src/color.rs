use shiftbrite_shared::{gamma, PwmFields, CHANNEL_MAX};

/// A color as requested by the caller.
///
/// Channels are signed so arithmetic in animations can over- or undershoot,
/// they are clamped to `0..=1023` when written to the chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
	pub red:   i16,
	pub green: i16,
	pub blue:  i16,
}

impl Rgb {
	pub const OFF: Self = Self::new(0, 0, 0);
	pub const RED: Self = Self::new(1023, 0, 0);
	pub const GREEN: Self = Self::new(0, 1023, 0);
	pub const BLUE: Self = Self::new(0, 0, 1023);
	pub const CYAN: Self = Self::new(0, 1023, 1023);
	pub const YELLOW: Self = Self::new(1023, 1023, 0);
	pub const MAGENTA: Self = Self::new(1023, 0, 1023);
	pub const WHITE: Self = Self::new(1023, 1023, 1023);
	pub const DIM_WHITE: Self = Self::new(127, 127, 127);

	pub const fn new(red: i16, green: i16, blue: i16) -> Self {
		Self { red, green, blue }
	}
}

impl From<(i16, i16, i16)> for Rgb {
	fn from((red, green, blue): (i16, i16, i16)) -> Self {
		Self::new(red, green, blue)
	}
}

/// Whether channel values go through the gamma table before being stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Correction {
	#[default]
	Gamma,
	Linear,
}

impl Correction {
	/// Clamps every channel to the PWM range, then applies the correction.
	pub fn apply(self, color: Rgb) -> PwmFields {
		let red = clamp_channel(color.red);
		let green = clamp_channel(color.green);
		let blue = clamp_channel(color.blue);

		match self {
			Self::Gamma => PwmFields::new(gamma(red), gamma(green), gamma(blue)),
			Self::Linear => PwmFields::new(red, green, blue),
		}
	}
}

fn clamp_channel(value: i16) -> u16 {
	// 0..=1023 fits in both types
	value.clamp(0, CHANNEL_MAX as i16) as u16
}
