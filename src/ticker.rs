//! Colors that change over time.
//!
//! A [`Ticker`] holds a little bit of state and hands it to an [`Animation`]
//! once per tick. The caller decides what a tick is and where the resulting
//! color goes, usually into [`ShiftBrite::set_pixel`](crate::ShiftBrite::set_pixel).

use tracing::trace;

use crate::{Error, Result, Rgb};

/// The colors cycled through by the demo programs.
pub const DEFAULT_WHEEL: [Rgb; 9] = [
	Rgb::OFF,
	Rgb::RED,
	Rgb::GREEN,
	Rgb::BLUE,
	Rgb::CYAN,
	Rgb::YELLOW,
	Rgb::MAGENTA,
	Rgb::WHITE,
	Rgb::DIM_WHITE,
];

/// State shared between a [`Ticker`] and its [`Animation`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickerState {
	pub current:      Rgb,
	pub targets:      Vec<Rgb>,
	pub speed_adjust: i32,
	pub offset:       i32,
}

impl TickerState {
	/// Target `index`, or off if the ticker has fewer targets.
	pub fn target(&self, index: usize) -> Rgb {
		self.targets.get(index).copied().unwrap_or_default()
	}
}

/// Computes the next color from the ticker state and the tick counter.
pub trait Animation {
	fn update(&self, state: &mut TickerState, tick: u16);
}

impl<F> Animation for F
where
	F: Fn(&mut TickerState, u16),
{
	fn update(&self, state: &mut TickerState, tick: u16) {
		self(state, tick)
	}
}

pub struct Ticker<A> {
	animation: A,
	state:     TickerState,
}

impl<A: Animation> Ticker<A> {
	/// Creates a ticker with `target_count` targets, all off.
	///
	/// The number of targets has to match what the animation reads.
	pub fn new(animation: A, target_count: usize, speed_adjust: i32, offset: i32) -> Result<Self> {
		let mut targets = Vec::new();
		targets
			.try_reserve_exact(target_count)
			.map_err(|_| Error::Allocation { requested: target_count })?;
		targets.resize(target_count, Rgb::OFF);

		Ok(Self {
			animation,
			state: TickerState {
				current: Rgb::OFF,
				targets,
				speed_adjust,
				offset,
			},
		})
	}

	pub fn tick(&mut self, tick: u16) {
		self.animation.update(&mut self.state, tick);
		trace!(tick, current = ?self.state.current, "ticked");
	}

	pub fn current(&self) -> Rgb {
		self.state.current
	}

	pub fn state(&self) -> &TickerState {
		&self.state
	}

	pub fn state_mut(&mut self) -> &mut TickerState {
		&mut self.state
	}

	pub fn targets_mut(&mut self) -> &mut [Rgb] {
		&mut self.state.targets
	}

	pub fn into_state(self) -> TickerState {
		self.state
	}
}

/// Holds the first target.
#[derive(Clone, Copy, Debug, Default)]
pub struct Steady;

impl Animation for Steady {
	fn update(&self, state: &mut TickerState, _tick: u16) {
		state.current = state.target(0);
	}
}

/// Steps through a list of colors, one step every `speed_adjust` ticks.
///
/// `offset` shifts the starting position; giving every pixel its index as
/// offset makes the colors run down the chain.
#[derive(Clone, Copy, Debug)]
pub struct ColorWheel<'a> {
	colors: &'a [Rgb],
}

impl<'a> ColorWheel<'a> {
	pub fn new(colors: &'a [Rgb]) -> Self {
		Self { colors }
	}

	pub fn colors(&self) -> &'a [Rgb] {
		self.colors
	}
}

impl Default for ColorWheel<'static> {
	fn default() -> Self {
		Self::new(&DEFAULT_WHEEL)
	}
}

impl Animation for ColorWheel<'_> {
	fn update(&self, state: &mut TickerState, tick: u16) {
		if self.colors.is_empty() {
			state.current = Rgb::OFF;
			return;
		}

		let step = i64::from(tick) / i64::from(state.speed_adjust.max(1)) + i64::from(state.offset);
		let index = step.rem_euclid(self.colors.len() as i64) as usize;
		state.current = self.colors[index];
	}
}

/// Fades from the first target to the second and back.
///
/// One direction takes `speed_adjust` ticks, `offset` shifts the phase.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fade;

impl Animation for Fade {
	fn update(&self, state: &mut TickerState, tick: u16) {
		let period = i64::from(state.speed_adjust.max(1));
		let position = (i64::from(tick) + i64::from(state.offset)).rem_euclid(period * 2);
		let amount = if position <= period { position } else { period * 2 - position };

		state.current = blend(state.target(0), state.target(1), amount, period);
	}
}

fn blend(from: Rgb, to: Rgb, amount: i64, total: i64) -> Rgb {
	let channel = |a: i16, b: i16| {
		let a = i64::from(a);
		let b = i64::from(b);
		// amount <= total, so the result stays between a and b
		(a + (b - a) * amount / total) as i16
	};

	Rgb::new(
		channel(from.red, to.red),
		channel(from.green, to.green),
		channel(from.blue, to.blue),
	)
}
