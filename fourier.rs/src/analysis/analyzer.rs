use math_utils::integration::{trapezoid, trapezoid_by};

use crate::{
	AngularFrequency, FourierCoefficients, FourierError, ParameterDefect, Sample, Signal,
	SignalDefect,
};

pub const DEFAULT_HARMONICS: usize = 10;

/// Relative difference above which a supplied ω0 is reported as not matching the domain span.
const FREQUENCY_MISMATCH_TOLERANCE: f64 = 1e-9;

/// Estimates the coefficients of the truncated Fourier series of a sampled signal.
///
/// Every integral is computed with the trapezoidal rule over the samples of the signal,
/// which don't need to be evenly spaced, and is normalized by `2/T`, where `T` is the
/// domain span of the signal.
///
/// ω0 defaults to `2π/T`, which assumes that the signal covers exactly one period.
/// An externally supplied ω0 is used for the basis functions only: the normalization
/// still uses the domain span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analyzer {
	harmonics: usize,
	angular_frequency: Option<f64>,
}

impl Default for Analyzer {
	fn default() -> Self {
		Self::new()
	}
}

impl Analyzer {
	#[must_use]
	pub const fn new() -> Self {
		Self {
			harmonics: DEFAULT_HARMONICS,
			angular_frequency: None,
		}
	}

	/// Number of harmonic pairs `(a_n, b_n)` to estimate. Must be at least 1.
	#[must_use]
	pub const fn with_harmonics(self, harmonics: usize) -> Self {
		Self { harmonics, ..self }
	}

	/// Project onto `cos(n·omega·t)` and `sin(n·omega·t)` instead of using the fundamental
	/// of the domain span. Must be positive.
	#[must_use]
	pub const fn with_angular_frequency(self, omega: f64) -> Self {
		Self {
			angular_frequency: Some(omega),
			..self
		}
	}

	#[must_use]
	pub const fn harmonics(&self) -> usize {
		self.harmonics
	}

	/// # Errors
	/// - [`FourierError::InvalidParameter`] if less than 1 harmonic is requested, more than
	///   can be allocated, or the supplied ω0 is not positive or so large that `N·ω0·t`
	///   overflows over the domain of the signal
	/// - [`FourierError::InvalidSignal`] with [`SignalDefect::Overflow`] if the samples are
	///   too large for their integrals to be finite
	pub fn analyze(&self, signal: &Signal) -> Result<FourierCoefficients, FourierError> {
		if self.harmonics < 1 {
			return Err(ParameterDefect::NoHarmonics.into());
		}

		let mut an: Vec<f64> = Vec::new();
		let mut bn: Vec<f64> = Vec::new();
		an.try_reserve_exact(self.harmonics)
			.and_then(|()| bn.try_reserve_exact(self.harmonics))
			.map_err(|_| ParameterDefect::TooManyHarmonics(self.harmonics))?;

		let span = signal.span();
		let omega = match self.angular_frequency {
			Some(omega) => {
				let omega = AngularFrequency::new(omega)?;
				let fundamental = signal.fundamental();
				if ((omega.get() - fundamental.get()) / fundamental.get()).abs()
					> FREQUENCY_MISMATCH_TOLERANCE
				{
					log::warn!(
						"ω0 = {omega} doesn't match the domain span T = {span} (2π/T = {fundamental}), coefficients are still normalized by 2/T"
					);
				}
				omega
			}
			None => signal.fundamental(),
		};

		// cos and sin of an infinite phase are NaN
		let reach = signal.start().abs().max(signal.end().abs());
		if !(omega.harmonic(self.harmonics) * reach).is_finite() {
			return Err(ParameterDefect::FrequencyTooLarge(omega.get()).into());
		}

		let times = signal.times();
		let values = signal.values();
		let scale = 2. / span;

		let a0 = scale * trapezoid(&times, &values)?;

		for n in 1..=self.harmonics {
			let omega_n = omega.harmonic(n);
			an.push(scale * trapezoid_by(&times, |i, t| values[i] * (omega_n * t).cos())?);
			bn.push(scale * trapezoid_by(&times, |i, t| values[i] * (omega_n * t).sin())?);
		}

		if !a0.is_finite() || an.iter().chain(&bn).any(|c| !c.is_finite()) {
			return Err(SignalDefect::Overflow.into());
		}

		log::debug!(
			"analyzed {} samples over T = {span} with ω0 = {omega}: a0 = {a0}, {} harmonics",
			signal.len(),
			self.harmonics
		);

		FourierCoefficients::new(a0, an, bn, omega)
	}

	/// Validate raw samples as a [`Signal`], then [`Analyzer::analyze`] it.
	///
	/// # Errors
	/// - [`FourierError::InvalidSignal`] if the samples don't form a valid [`Signal`]
	/// - see [`Analyzer::analyze`]
	pub fn analyze_samples(
		&self,
		samples: impl Into<Vec<Sample>>,
	) -> Result<FourierCoefficients, FourierError> {
		self.analyze(&Signal::new(samples.into())?)
	}
}

/// Shorthand for `Analyzer::new().with_harmonics(harmonics).analyze(signal)`.
///
/// # Errors
/// See [`Analyzer::analyze`].
pub fn analyze(signal: &Signal, harmonics: usize) -> Result<FourierCoefficients, FourierError> {
	Analyzer::new().with_harmonics(harmonics).analyze(signal)
}
