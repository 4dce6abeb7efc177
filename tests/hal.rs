mod common;

use std::convert::Infallible;

use embedded_hal::{
	digital::{self, OutputPin},
	spi::{self, SpiBus, MODE_1},
};
use eyre::Result;
use shiftbrite::{BitOrder, Config, HalBus, HalLatch, Rgb, ShiftBrite};

#[derive(Default)]
struct RecordingSpi {
	written: Vec<u8>,
	flushed: bool,
}

impl spi::ErrorType for RecordingSpi {
	type Error = Infallible;
}

impl SpiBus for RecordingSpi {
	fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
		words.fill(0);
		Ok(())
	}

	fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
		self.written.extend_from_slice(words);
		Ok(())
	}

	fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
		self.written.extend_from_slice(write);
		read.fill(0);
		Ok(())
	}

	fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
		self.written.extend_from_slice(words);
		words.fill(0);
		Ok(())
	}

	fn flush(&mut self) -> Result<(), Self::Error> {
		self.flushed = true;
		Ok(())
	}
}

/// Every level the pin was driven to, `true` is high.
#[derive(Default)]
struct RecordingPin {
	levels: Vec<bool>,
}

impl digital::ErrorType for RecordingPin {
	type Error = Infallible;
}

impl OutputPin for RecordingPin {
	fn set_low(&mut self) -> Result<(), Self::Error> {
		self.levels.push(false);
		Ok(())
	}

	fn set_high(&mut self) -> Result<(), Self::Error> {
		self.levels.push(true);
		Ok(())
	}
}

#[test]
fn hal_adapters_drive_a_chain() -> Result<()> {
	common::init_tracing();

	let bus = HalBus::new(RecordingSpi::default());
	let latch = HalLatch::new(RecordingPin::default());
	let mut chain = ShiftBrite::new(Config::new(2).with_clock_hz(2_000_000), bus, latch)?;

	chain.begin()?;
	chain.all_on(Rgb::WHITE)?;
	chain.set_pixel_linear(1, Rgb::new(0, 0, 1))?;
	chain.show()?;

	let (bus, latch) = chain.destroy()?;

	let settings = *bus.settings().expect("configured by begin");
	assert_eq!(settings.bit_order, BitOrder::MsbFirst);
	assert_eq!(settings.mode, MODE_1);
	assert_eq!(settings.clock_hz, 2_000_000);

	let spi = bus.into_inner();
	let white: [u8; 4] = [0x3f, 0xff, 0xff, 0xff];
	let blue: [u8; 4] = [0x00, 0x10, 0x00, 0x00];
	assert_eq!(spi.written, [white, white, blue, white].concat());
	assert!(spi.flushed);

	// begin, two latch pulses, release
	let pin = latch.into_inner();
	assert_eq!(pin.levels, vec![false, true, false, true, false, false]);

	Ok(())
}

#[test]
fn hal_bus_is_unconfigured_until_begin() {
	let bus = HalBus::new(RecordingSpi::default());

	assert!(bus.settings().is_none());
}
