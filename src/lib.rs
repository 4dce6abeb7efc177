//! Drive a chain of ShiftBrite RGB LED modules (Allegro A6281) over SPI.
//!
//! Colors are written into a buffer with [`ShiftBrite::set_pixel`] and friends,
//! nothing is sent until [`ShiftBrite::show`] shifts the whole chain out and
//! pulses the latch.
//!
//! ```no_run
//! # fn run<T: shiftbrite::Transport, L: shiftbrite::LatchLine>(spi: T, latch: L) -> shiftbrite::Result<()> {
//! use shiftbrite::{Config, Rgb, ShiftBrite};
//!
//! let mut chain = ShiftBrite::new(Config::new(4), spi, latch)?;
//! chain.begin()?;
//!
//! chain.set_pixel(0, Rgb::RED)?;
//! chain.set_pixel(3, Rgb::new(0, 512, 1023))?;
//! chain.show()?;
//! # Ok(())
//! # }
//! ```

use core::fmt::Debug;
#[cfg(feature = "timings")]
use std::time::{Duration, Instant};

pub use shiftbrite_shared::{
	gamma,
	CalibrationFields,
	ClockMode,
	Mode,
	Packet,
	PwmFields,
	A6281_MAX_CLOCK_HZ,
	BYTES_PER_PACKET,
	CHANNEL_MAX,
	DEFAULT_CLOCK_HZ,
	GAMMA_TABLE,
};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

mod color;
mod ticker;
mod transport;

pub use crate::{
	color::{Correction, Rgb},
	ticker::{Animation, ColorWheel, Fade, Steady, Ticker, TickerState, DEFAULT_WHEEL},
	transport::{BitOrder, BusSettings, HalBus, HalLatch, LatchLine, Transport},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
	/// Number of modules in the chain.
	pub chain_length: usize,
	pub clock_hz:     u32,
}

impl Default for Config {
	fn default() -> Self {
		Self::new(1)
	}
}

impl Config {
	pub const fn new(chain_length: usize) -> Self {
		Self {
			chain_length,
			clock_hz: DEFAULT_CLOCK_HZ,
		}
	}

	pub const fn with_clock_hz(mut self, clock_hz: u32) -> Self {
		self.clock_hz = clock_hz;
		self
	}

	pub fn validate(&self) -> Result<()> {
		if self.chain_length == 0 {
			return Err(Error::EmptyChain);
		}
		if self.clock_hz == 0 || self.clock_hz > A6281_MAX_CLOCK_HZ {
			return Err(Error::ClockRate {
				hz:  self.clock_hz,
				max: A6281_MAX_CLOCK_HZ,
			});
		}

		Ok(())
	}

	pub const fn bus_settings(&self) -> BusSettings {
		BusSettings::a6281(self.clock_hz)
	}
}

#[derive(Debug, Error)]
pub enum Error {
	#[error("a chain needs at least one module")]
	EmptyChain,
	#[error("could not allocate room for {requested} entries")]
	Allocation { requested: usize },
	#[error("clock rate of {hz} Hz is outside of 1..={max} Hz")]
	ClockRate { hz: u32, max: u32 },
	#[error("pixel {index} is out of range for a chain of {len}")]
	IndexOutOfRange { index: usize, len: usize },
	#[error("begin() has to be called before sending data")]
	NotReady,
	#[error("begin() was already called")]
	AlreadyStarted,
	#[error("transport error: {0}")]
	Transport(String),
	#[error("latch error: {0}")]
	Latch(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Time spent shifting data and pulsing the latch.
#[cfg(feature = "timings")]
pub type WriteResult = (Duration, Duration);
#[cfg(not(feature = "timings"))]
pub type WriteResult = ();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
	Created,
	Ready,
}

pub struct ShiftBrite<T, L> {
	config:    Config,
	transport: T,
	latch:     L,

	/// Index 0 is the module closest to the controller.
	pixels:    Vec<PwmFields>,
	lifecycle: Lifecycle,
}

impl<T: Transport, L: LatchLine> ShiftBrite<T, L> {
	/// Creates a driver for `config.chain_length` modules with every pixel off.
	///
	/// The chain length is fixed, build a new driver to change it.
	pub fn new(config: Config, transport: T, latch: L) -> Result<Self> {
		config.validate()?;

		let mut pixels = Vec::new();
		pixels
			.try_reserve_exact(config.chain_length)
			.map_err(|_| Error::Allocation {
				requested: config.chain_length,
			})?;
		pixels.resize(config.chain_length, PwmFields::OFF);

		debug!(chain_length = config.chain_length, "allocated pixel buffer");

		Ok(Self {
			config,
			transport,
			latch,

			pixels,
			lifecycle: Lifecycle::Created,
		})
	}

	/// Drives the latch low and sets up the transport, call once before sending.
	pub fn begin(&mut self) -> Result<()> {
		if self.lifecycle == Lifecycle::Ready {
			return Err(Error::AlreadyStarted);
		}

		self.latch.set_output_low().map_err(latch_error)?;
		self.transport
			.configure(&self.config.bus_settings())
			.map_err(transport_error)?;

		self.lifecycle = Lifecycle::Ready;
		info!(
			chain_length = self.config.chain_length,
			clock_hz = self.config.clock_hz,
			"shiftbrite chain ready"
		);

		Ok(())
	}

	pub fn set_pixel_rgb(
		&mut self,
		index: usize,
		red: i16,
		green: i16,
		blue: i16,
		correction: Correction,
	) -> Result<()> {
		let len = self.pixels.len();
		let pixel = self
			.pixels
			.get_mut(index)
			.ok_or(Error::IndexOutOfRange { index, len })?;

		*pixel = correction.apply(Rgb::new(red, green, blue));

		Ok(())
	}

	/// Stores a gamma corrected color, sent on the next [`show`](Self::show).
	pub fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<()> {
		self.set_pixel_rgb(index, color.red, color.green, color.blue, Correction::Gamma)
	}

	/// Like [`set_pixel`](Self::set_pixel) but without gamma correction.
	pub fn set_pixel_linear(&mut self, index: usize, color: Rgb) -> Result<()> {
		self.set_pixel_rgb(index, color.red, color.green, color.blue, Correction::Linear)
	}

	pub fn unset_pixel(&mut self, index: usize) -> Result<()> {
		self.set_pixel_rgb(index, 0, 0, 0, Correction::Gamma)
	}

	/// Sets every pixel to `color` (gamma corrected) and sends the chain.
	pub fn all_on(&mut self, color: Rgb) -> Result<WriteResult> {
		self.ensure_ready()?;

		let pwm = Correction::Gamma.apply(color);
		self.pixels.fill(pwm);

		self.show()
	}

	/// Turns every pixel off and sends the chain.
	pub fn all_off(&mut self) -> Result<WriteResult> {
		self.ensure_ready()?;

		self.pixels.fill(PwmFields::OFF);

		self.show()
	}

	/// Shifts the buffer out and latches it.
	///
	/// Every word pushes the previous ones one module further down the chain,
	/// so the last pixel goes first and pixel 0 ends up in the nearest module.
	pub fn show(&mut self) -> Result<WriteResult> {
		self.ensure_ready()?;

		#[cfg(feature = "timings")]
		let shift_start = Instant::now();

		debug!(packets = self.pixels.len(), "shifting out chain");
		for pwm in self.pixels.iter().rev() {
			let word = Packet::Pwm(*pwm).encode();
			trace!("packet {:#010x}", word);

			self.transport
				.write(&word.to_be_bytes())
				.map_err(transport_error)?;
		}

		#[cfg(feature = "timings")]
		let latch_start = Instant::now();

		self.pulse_latch()?;

		#[cfg(feature = "timings")]
		let end = Instant::now();

		#[cfg(feature = "timings")]
		return Ok((latch_start - shift_start, end - latch_start));

		#[cfg(not(feature = "timings"))]
		Ok(())
	}

	/// Releases the buffer, the latch line and the transport.
	///
	/// Both collaborators are shut down even if one of them fails, the first
	/// error is returned.
	pub fn destroy(self) -> Result<(T, L)> {
		let Self {
			mut transport,
			mut latch,
			pixels,
			..
		} = self;
		drop(pixels);

		let released = latch.release().map_err(latch_error);
		if let Err(e) = &released {
			warn!("failed to release latch line: {}", e);
		}
		let ended = transport.end().map_err(transport_error);
		if let Err(e) = &ended {
			warn!("failed to shut down transport: {}", e);
		}

		released?;
		ended?;

		info!("shiftbrite chain released");

		Ok((transport, latch))
	}

	/// Stored values of pixel `index`, after clamping and correction.
	pub fn pixel(&self, index: usize) -> Result<PwmFields> {
		self.pixels
			.get(index)
			.copied()
			.ok_or(Error::IndexOutOfRange {
				index,
				len: self.pixels.len(),
			})
	}

	pub fn pixels(&self) -> &[PwmFields] {
		&self.pixels
	}

	pub fn chain_length(&self) -> usize {
		self.config.chain_length
	}

	/// Bytes sent per [`show`](Self::show).
	pub fn byte_len(&self) -> usize {
		self.config.chain_length * BYTES_PER_PACKET
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn is_ready(&self) -> bool {
		self.lifecycle == Lifecycle::Ready
	}

	fn ensure_ready(&self) -> Result<()> {
		match self.lifecycle {
			Lifecycle::Ready => Ok(()),
			Lifecycle::Created => Err(Error::NotReady),
		}
	}

	fn pulse_latch(&mut self) -> Result<()> {
		self.latch.set_high().map_err(latch_error)?;
		self.latch.set_low().map_err(latch_error)
	}
}

fn transport_error<E: Debug>(e: E) -> Error {
	Error::Transport(format!("{:?}", e))
}

fn latch_error<E: Debug>(e: E) -> Error {
	Error::Latch(format!("{:?}", e))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_config_is_valid() {
		let config = Config::default();

		assert_eq!(config.chain_length, 1);
		assert_eq!(config.clock_hz, DEFAULT_CLOCK_HZ);
		assert!(config.validate().is_ok());
	}

	#[test]
	fn empty_chain_is_rejected() {
		assert!(matches!(Config::new(0).validate(), Err(Error::EmptyChain)));
	}

	#[test]
	fn clock_rate_is_bounded() {
		let too_fast = Config::new(4).with_clock_hz(A6281_MAX_CLOCK_HZ + 1);
		assert!(matches!(
			too_fast.validate(),
			Err(Error::ClockRate { hz, max }) if hz == A6281_MAX_CLOCK_HZ + 1 && max == A6281_MAX_CLOCK_HZ
		));

		assert!(Config::new(4).with_clock_hz(0).validate().is_err());
		assert!(Config::new(4).with_clock_hz(A6281_MAX_CLOCK_HZ).validate().is_ok());
	}

	#[test]
	fn bus_settings_match_the_chip() {
		let settings = Config::new(2).with_clock_hz(1_000_000).bus_settings();

		assert_eq!(settings.bit_order, BitOrder::MsbFirst);
		assert_eq!(settings.mode, embedded_hal::spi::MODE_1);
		assert_eq!(settings.clock_hz, 1_000_000);
	}
}
