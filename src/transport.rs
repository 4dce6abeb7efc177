//! Seams to the serial peripheral and the latch pin.
//!
//! The driver only needs to shift bytes out and toggle one pin, so both are
//! small traits. [`HalBus`] and [`HalLatch`] adapt any `embedded-hal` 1.0
//! implementation to them.

use core::fmt::Debug;

use embedded_hal::{
	digital::OutputPin,
	spi::{Mode, SpiBus, MODE_1},
};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitOrder {
	MsbFirst,
	LsbFirst,
}

/// How the serial peripheral has to be set up to talk to the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusSettings {
	pub bit_order: BitOrder,
	pub mode:      Mode,
	pub clock_hz:  u32,
}

impl BusSettings {
	/// MSB first in SPI mode 1 (CPOL 0, CPHA 1), the mode ShiftBrite chains
	/// are driven with on Particle boards.
	pub const fn a6281(clock_hz: u32) -> Self {
		Self {
			bit_order: BitOrder::MsbFirst,
			mode: MODE_1,
			clock_hz,
		}
	}
}

/// Synchronous, blocking byte output.
pub trait Transport {
	type Error: Debug;

	fn configure(&mut self, settings: &BusSettings) -> Result<(), Self::Error>;

	/// Shifts out all bytes before returning.
	fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

	fn end(&mut self) -> Result<(), Self::Error>;
}

/// The line that commits shifted data into the PWM registers.
pub trait LatchLine {
	type Error: Debug;

	/// Switch the line to output, driven low.
	fn set_output_low(&mut self) -> Result<(), Self::Error>;

	fn set_high(&mut self) -> Result<(), Self::Error>;

	fn set_low(&mut self) -> Result<(), Self::Error>;

	/// Give the line back, leaving the chain untouched.
	fn release(&mut self) -> Result<(), Self::Error>;
}

/// [`Transport`] over an `embedded-hal` SPI bus.
///
/// HAL buses get their mode and frequency when they are built, so
/// `configure` only records what the chain expects. Build the bus with
/// [`BusSettings::a6281`] values.
pub struct HalBus<B> {
	bus:      B,
	settings: Option<BusSettings>,
}

impl<B: SpiBus> HalBus<B> {
	pub fn new(bus: B) -> Self {
		Self { bus, settings: None }
	}

	/// Settings passed by the last `configure`, if any.
	pub fn settings(&self) -> Option<&BusSettings> {
		self.settings.as_ref()
	}

	pub fn into_inner(self) -> B {
		self.bus
	}
}

impl<B: SpiBus> Transport for HalBus<B> {
	type Error = B::Error;

	fn configure(&mut self, settings: &BusSettings) -> Result<(), Self::Error> {
		debug!(
			mode = ?settings.mode,
			clock_hz = settings.clock_hz,
			"expecting the spi bus to be built with these settings"
		);
		self.settings = Some(*settings);
		Ok(())
	}

	fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
		self.bus.write(bytes)
	}

	fn end(&mut self) -> Result<(), Self::Error> {
		self.bus.flush()
	}
}

/// [`LatchLine`] over an `embedded-hal` output pin.
///
/// The pin type is already an output, so releasing it parks it low.
pub struct HalLatch<P> {
	pin: P,
}

impl<P: OutputPin> HalLatch<P> {
	pub fn new(pin: P) -> Self {
		Self { pin }
	}

	pub fn into_inner(self) -> P {
		self.pin
	}
}

impl<P: OutputPin> LatchLine for HalLatch<P> {
	type Error = P::Error;

	fn set_output_low(&mut self) -> Result<(), Self::Error> {
		self.pin.set_low()
	}

	fn set_high(&mut self) -> Result<(), Self::Error> {
		self.pin.set_high()
	}

	fn set_low(&mut self) -> Result<(), Self::Error> {
		self.pin.set_low()
	}

	fn release(&mut self) -> Result<(), Self::Error> {
		self.pin.set_low()
	}
}
