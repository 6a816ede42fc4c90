use std::f64::consts::TAU;

use math_utils::{linspace::Linspace, stats::SeriesStatistics};

use crate::{
	AngularFrequency, FourierCoefficients, FourierError, HarmonicDescriptor, ParameterDefect,
	Sample, Signal,
};

/// Number of evenly spaced points over `[0, 2π]` a signal is synthesized on.
pub const SYNTHESIS_SAMPLES: usize = 1000;

/// Synthesized signals whose magnitude exceeds this value anywhere are rejected. Large values
/// are far more likely to come from a typo in the coefficients than from an intended signal.
pub const AMPLITUDE_BOUND: f64 = 10.0;

/// Reconstructs one canonical period, `t ∈ [0, 2π]`, of a truncated Fourier series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Synthesizer {
	domain: Linspace<f64>,
	bound: f64,
}

impl Default for Synthesizer {
	fn default() -> Self {
		Self::new()
	}
}

impl Synthesizer {
	#[must_use]
	pub fn new() -> Self {
		Self {
			domain: Linspace::new((0., TAU), SYNTHESIS_SAMPLES),
			bound: AMPLITUDE_BOUND,
		}
	}

	#[must_use]
	pub fn n_of_samples(&self) -> usize {
		self.domain.n_of_points()
	}

	#[must_use]
	pub const fn bound(&self) -> f64 {
		self.bound
	}

	/// Compute `y(t) = a0/2 + Σ_{n=1}^{N} [a_n·cos(n·ω0·t) + b_n·sin(n·ω0·t)]`.
	///
	/// `harmonics` must list harmonics `1..=n_of_harmonics`, in order. With no harmonics
	/// the result is the constant `a0/2`.
	///
	/// # Errors
	/// - [`FourierError::InvalidParameter`] if `omega` is not positive, `n_of_harmonics` doesn't match
	///   the number of supplied harmonics, harmonics are out of order or a coefficient is not finite
	/// - [`FourierError::SignalOutOfRange`] if `max(|y|)` exceeds [`AMPLITUDE_BOUND`]
	pub fn synthesize(
		&self,
		a0: f64,
		omega: f64,
		n_of_harmonics: usize,
		harmonics: &[HarmonicDescriptor],
	) -> Result<Signal, FourierError> {
		let omega = AngularFrequency::new(omega)?;
		if n_of_harmonics != harmonics.len() {
			return Err(ParameterDefect::HarmonicCountMismatch {
				expected: n_of_harmonics,
				actual: harmonics.len(),
			}
			.into());
		}
		let coefficients = FourierCoefficients::from_harmonics(a0, harmonics, omega)?;
		self.synthesize_coefficients(&coefficients)
	}

	/// Same as [`Synthesizer::synthesize`], using the frequency the coefficients carry.
	///
	/// # Errors
	/// - [`FourierError::InvalidParameter`] if a coefficient is not finite
	/// - [`FourierError::SignalOutOfRange`] if `max(|y|)` exceeds [`AMPLITUDE_BOUND`]
	pub fn synthesize_coefficients(
		&self,
		coefficients: &FourierCoefficients,
	) -> Result<Signal, FourierError> {
		check_finite("a0", coefficients.a0())?;
		for h in coefficients.harmonics() {
			check_finite(&format!("a{}", h.index()), h.a())?;
			check_finite(&format!("b{}", h.index()), h.b())?;
		}

		let samples: Vec<Sample> = self
			.domain
			.iter()
			.map(|t| Sample::new(t, coefficients.evaluate(t)))
			.collect();

		// finite coefficients can still overflow once summed
		let peak = if samples.iter().all(|s| s.y.is_finite()) {
			SeriesStatistics::new(samples.iter().map(|s| s.y).collect::<Vec<_>>())?.peak()
		} else {
			f64::INFINITY
		};
		if peak > self.bound {
			log::debug!(
				"rejected synthesis with {} harmonics: peak {peak} is above {}",
				coefficients.n_of_harmonics(),
				self.bound
			);
			return Err(FourierError::SignalOutOfRange {
				peak,
				bound: self.bound,
			});
		}

		log::debug!(
			"synthesized {} samples from {} harmonics at ω0 = {}, peak {peak}",
			samples.len(),
			coefficients.n_of_harmonics(),
			coefficients.angular_frequency()
		);

		Signal::new(samples)
	}
}

fn check_finite(field: &str, value: f64) -> Result<(), FourierError> {
	if value.is_finite() {
		Ok(())
	} else {
		Err(ParameterDefect::unparsable(field, value.to_string()).into())
	}
}

/// Shorthand for [`Synthesizer::synthesize`] with the default synthesizer.
///
/// # Errors
/// See [`Synthesizer::synthesize`].
pub fn synthesize(
	a0: f64,
	omega: f64,
	n_of_harmonics: usize,
	harmonics: &[HarmonicDescriptor],
) -> Result<Signal, FourierError> {
	Synthesizer::new().synthesize(a0, omega, n_of_harmonics, harmonics)
}
