//! Runs the classic ShiftBrite test patterns against a bus that prints what
//! it would send.
//!
//! `RUST_LOG=shiftbrite=trace cargo run --example cycle`

use std::{thread::sleep, time::Duration};

use color_eyre::eyre::Result;
use shiftbrite::{BusSettings, ColorWheel, Config, LatchLine, Rgb, ShiftBrite, Ticker, Transport};
use tracing::info;
use tracing_subscriber::EnvFilter;

const CHAIN_LENGTH: usize = 4;
const STEPS_PER_PATTERN: u16 = 9;

struct PrintBus;

impl Transport for PrintBus {
	type Error = std::io::Error;

	fn configure(&mut self, settings: &BusSettings) -> Result<(), Self::Error> {
		println!("bus: {:?}", settings);
		Ok(())
	}

	fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
		println!("bus: {:02x?}", bytes);
		Ok(())
	}

	fn end(&mut self) -> Result<(), Self::Error> {
		println!("bus: end");
		Ok(())
	}
}

struct PrintLatch;

impl LatchLine for PrintLatch {
	type Error = std::io::Error;

	fn set_output_low(&mut self) -> Result<(), Self::Error> {
		println!("latch: output, low");
		Ok(())
	}

	fn set_high(&mut self) -> Result<(), Self::Error> {
		println!("latch: high");
		Ok(())
	}

	fn set_low(&mut self) -> Result<(), Self::Error> {
		println!("latch: low");
		Ok(())
	}

	fn release(&mut self) -> Result<(), Self::Error> {
		println!("latch: input");
		Ok(())
	}
}

fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	let mut sb = ShiftBrite::new(Config::new(CHAIN_LENGTH), PrintBus, PrintLatch)?;
	sb.begin()?;
	sb.show()?;

	info!("whole chain, one color");
	train(&mut sb, false)?;

	info!("colors running down the chain");
	train(&mut sb, true)?;

	info!("50% with and without gamma correction");
	sb.set_pixel(0, Rgb::new(1023, 1023, 1023))?;
	sb.set_pixel(1, Rgb::new(511, 511, 511))?;
	sb.set_pixel_linear(2, Rgb::new(511, 511, 511))?;
	sb.set_pixel_linear(3, Rgb::new(1023, 1023, 1023))?;
	sb.show()?;
	sleep(Duration::from_millis(500));

	info!("every pixel half as bright as the previous one");
	for (i, level) in [1023, 511, 255, 127].into_iter().enumerate() {
		sb.set_pixel(i, Rgb::new(level, level, level))?;
	}
	sb.show()?;
	sleep(Duration::from_millis(500));

	sb.all_off()?;
	sb.destroy()?;

	Ok(())
}

fn train<T: Transport, L: LatchLine>(sb: &mut ShiftBrite<T, L>, train: bool) -> Result<()> {
	let mut tickers = (0..CHAIN_LENGTH)
		.map(|i| {
			let offset = if train { i as i32 } else { 0 };
			Ticker::new(ColorWheel::default(), 0, 1, offset)
		})
		.collect::<shiftbrite::Result<Vec<_>>>()?;

	for tick in 0..STEPS_PER_PATTERN {
		for (i, ticker) in tickers.iter_mut().enumerate() {
			ticker.tick(tick);
			sb.set_pixel(i, ticker.current())?;
		}
		sb.show()?;
		sleep(Duration::from_millis(500));
	}

	Ok(())
}
