use derive_more::derive::{Deref, From};
use math_utils::stats::SeriesStatistics;

use crate::{AngularFrequency, FourierError, SignalDefect};

/// A single `(t, y)` point of a sampled signal.
#[derive(Debug, Clone, Copy, PartialEq, Default, From)]
pub struct Sample {
	pub t: f64,
	pub y: f64,
}

impl Sample {
	#[must_use]
	pub const fn new(t: f64, y: f64) -> Self {
		Self { t, y }
	}
}

/// A sampled signal: at least 2 finite samples, strictly increasing in time.
///
/// The samples can be read through `Deref<Target = Vec<Sample>>`, but a `Signal` can't be
/// modified after construction.
#[derive(Debug, Clone, PartialEq, Deref)]
pub struct Signal(Vec<Sample>);

impl Signal {
	/// # Errors
	/// [`FourierError::InvalidSignal`] if
	/// - there are less than 2 samples
	/// - any `t` or `y` is NaN or infinite
	/// - `t` is not strictly increasing
	/// - the domain span, or its fundamental frequency, overflows
	pub fn new(samples: Vec<Sample>) -> Result<Self, FourierError> {
		if samples.len() < 2 {
			return Err(SignalDefect::TooFewSamples(samples.len()).into());
		}

		if let Some(index) = samples
			.iter()
			.position(|s| !s.t.is_finite() || !s.y.is_finite())
		{
			return Err(SignalDefect::NonFinite { index }.into());
		}

		if let Some(index) = samples.windows(2).position(|w| w[1].t <= w[0].t) {
			return Err(SignalDefect::NonIncreasingTime { index: index + 1 }.into());
		}

		let signal = Self(samples);
		let span = signal.span();
		// a subnormal span would make the fundamental overflow
		if span.is_finite() && AngularFrequency::from_period(span).is_ok() {
			Ok(signal)
		} else {
			Err(SignalDefect::DegenerateSpan(span).into())
		}
	}

	/// Sample `f` at every given time.
	///
	/// # Errors
	/// See [`Signal::new`].
	pub fn from_fn(
		times: impl IntoIterator<Item = f64>,
		mut f: impl FnMut(f64) -> f64,
	) -> Result<Self, FourierError> {
		Self::new(times.into_iter().map(|t| Sample::new(t, f(t))).collect())
	}

	#[must_use]
	pub fn times(&self) -> Vec<f64> {
		self.0.iter().map(|s| s.t).collect()
	}

	#[must_use]
	pub fn values(&self) -> Vec<f64> {
		self.0.iter().map(|s| s.y).collect()
	}

	#[must_use]
	pub fn start(&self) -> f64 {
		self.0[0].t
	}

	#[must_use]
	pub fn end(&self) -> f64 {
		self.0[self.0.len() - 1].t
	}

	/// The domain span `T = t_last - t_first`, always positive.
	#[must_use]
	pub fn span(&self) -> f64 {
		self.end() - self.start()
	}

	/// `2π / T`: the angular frequency of a wave that completes exactly one cycle over the sampled domain.
	#[allow(clippy::missing_panics_doc)] // REASON: the span is checked to be positive and finite in the constructor
	#[must_use]
	pub fn fundamental(&self) -> AngularFrequency {
		AngularFrequency::from_period(self.span())
			.expect("internal error: the span of a signal is positive and finite")
	}

	/// `max(|y|)` over all samples.
	#[allow(clippy::missing_panics_doc)] // REASON: a signal has at least 2 samples
	#[must_use]
	pub fn peak(&self) -> f64 {
		SeriesStatistics::new(self.values())
			.expect("internal error: a signal is never empty")
			.peak()
	}

	#[must_use]
	pub fn into_samples(self) -> Vec<Sample> {
		self.0
	}
}

impl TryFrom<Vec<Sample>> for Signal {
	type Error = FourierError;

	fn try_from(value: Vec<Sample>) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl TryFrom<Vec<(f64, f64)>> for Signal {
	type Error = FourierError;

	fn try_from(value: Vec<(f64, f64)>) -> Result<Self, Self::Error> {
		Self::new(value.into_iter().map(Sample::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn defect(result: Result<Signal, FourierError>) -> SignalDefect {
		match result {
			Err(FourierError::InvalidSignal(defect)) => defect,
			other => panic!("expected an invalid signal, got {other:?}"),
		}
	}

	#[test]
	fn test_two_samples_is_enough() {
		let signal = Signal::try_from(vec![(1., 0.5), (3., -0.5)]).unwrap();
		assert_eq!(signal.len(), 2);
		assert!((signal.span() - 2.).abs() < f64::EPSILON);
		assert!((signal.fundamental().get() - std::f64::consts::PI).abs() < f64::EPSILON);
		assert!((signal.peak() - 0.5).abs() < f64::EPSILON);
	}

	#[test]
	fn test_too_few_samples() {
		assert_eq!(defect(Signal::new(vec![])), SignalDefect::TooFewSamples(0));
		assert_eq!(
			defect(Signal::try_from(vec![(0., 1.)])),
			SignalDefect::TooFewSamples(1)
		);
	}

	#[test]
	fn test_non_increasing_time() {
		assert_eq!(
			defect(Signal::try_from(vec![(0., 1.), (1., 1.), (0.5, 1.)])),
			SignalDefect::NonIncreasingTime { index: 2 }
		);
		assert_eq!(
			defect(Signal::try_from(vec![(0., 1.), (0., 2.)])),
			SignalDefect::NonIncreasingTime { index: 1 }
		);
	}

	#[test]
	fn test_non_finite() {
		assert_eq!(
			defect(Signal::try_from(vec![(0., 1.), (1., f64::NAN)])),
			SignalDefect::NonFinite { index: 1 }
		);
		assert_eq!(
			defect(Signal::try_from(vec![(f64::NEG_INFINITY, 1.), (1., 1.)])),
			SignalDefect::NonFinite { index: 0 }
		);
	}

	#[test]
	fn test_overflowing_span() {
		assert!(matches!(
			defect(Signal::try_from(vec![(-f64::MAX, 0.), (f64::MAX, 0.)])),
			SignalDefect::DegenerateSpan(_)
		));
	}

	#[test]
	fn test_from_fn() {
		let signal = Signal::from_fn([0., 0.5, 2.], |t| t * t).unwrap();
		assert_eq!(signal.times(), vec![0., 0.5, 2.]);
		assert_eq!(signal.values(), vec![0., 0.25, 4.]);
		assert_eq!(signal.into_samples()[2], Sample::new(2., 4.));
	}
}
