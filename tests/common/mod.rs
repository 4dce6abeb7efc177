#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc};

use shiftbrite::{BusSettings, Config, LatchLine, ShiftBrite, Transport};
use tracing_subscriber::EnvFilter;

/// Everything the driver did to its collaborators, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
	Configure(BusSettings),
	Byte(u8),
	End,
	LatchOutputLow,
	LatchHigh,
	LatchLow,
	LatchReleased,
}

pub type Log = Rc<RefCell<Vec<Event>>>;

#[derive(Debug)]
pub struct FakeError;

pub struct FakeBus {
	pub log:         Log,
	pub fail_writes: bool,
}

impl Transport for FakeBus {
	type Error = FakeError;

	fn configure(&mut self, settings: &BusSettings) -> Result<(), Self::Error> {
		self.log.borrow_mut().push(Event::Configure(*settings));
		Ok(())
	}

	fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
		if self.fail_writes {
			return Err(FakeError);
		}
		self.log.borrow_mut().extend(bytes.iter().copied().map(Event::Byte));
		Ok(())
	}

	fn end(&mut self) -> Result<(), Self::Error> {
		self.log.borrow_mut().push(Event::End);
		Ok(())
	}
}

pub struct FakeLatch {
	pub log:  Log,
	/// Pulses and release fail, switching to output still works.
	pub fail: bool,
}

impl LatchLine for FakeLatch {
	type Error = FakeError;

	fn set_output_low(&mut self) -> Result<(), Self::Error> {
		self.log.borrow_mut().push(Event::LatchOutputLow);
		Ok(())
	}

	fn set_high(&mut self) -> Result<(), Self::Error> {
		if self.fail {
			return Err(FakeError);
		}
		self.log.borrow_mut().push(Event::LatchHigh);
		Ok(())
	}

	fn set_low(&mut self) -> Result<(), Self::Error> {
		if self.fail {
			return Err(FakeError);
		}
		self.log.borrow_mut().push(Event::LatchLow);
		Ok(())
	}

	fn release(&mut self) -> Result<(), Self::Error> {
		if self.fail {
			return Err(FakeError);
		}
		self.log.borrow_mut().push(Event::LatchReleased);
		Ok(())
	}
}

pub type FakeChain = ShiftBrite<FakeBus, FakeLatch>;

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

/// A driver that has not seen `begin()` yet.
pub fn chain(chain_length: usize) -> (FakeChain, Log) {
	init_tracing();

	let log = Log::default();
	let bus = FakeBus {
		log:         log.clone(),
		fail_writes: false,
	};
	let latch = FakeLatch {
		log:  log.clone(),
		fail: false,
	};

	let chain = ShiftBrite::new(Config::new(chain_length), bus, latch).expect("valid config");
	(chain, log)
}

/// A started driver with the setup events cleared from the log.
pub fn ready_chain(chain_length: usize) -> (FakeChain, Log) {
	let (mut chain, log) = chain(chain_length);
	chain.begin().expect("begin");
	log.borrow_mut().clear();
	(chain, log)
}

pub fn sent_bytes(log: &Log) -> Vec<u8> {
	log.borrow()
		.iter()
		.filter_map(|event| match event {
			Event::Byte(byte) => Some(*byte),
			_ => None,
		})
		.collect()
}

/// Bytes of one PWM word as they appear on the wire.
pub fn wire(red: u16, green: u16, blue: u16) -> [u8; 4] {
	(u32::from(blue) << 20 | u32::from(red) << 10 | u32::from(green)).to_be_bytes()
}

pub fn take(log: &Log) -> Vec<Event> {
	log.borrow_mut().drain(..).collect()
}
