use std::f64::consts::TAU;

use derive_more::derive::{Display, Into};

use crate::{FourierError, ParameterDefect};

/// The fundamental angular frequency ω0 of a Fourier series, in radians per unit of time.
///
/// Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, Into)]
#[display("{_0}rad/s")]
pub struct AngularFrequency(f64);

impl AngularFrequency {
	/// # Errors
	/// [`ParameterDefect::NonPositiveFrequency`] if `omega` is not a positive finite number
	pub fn new(omega: f64) -> Result<Self, FourierError> {
		if omega.is_finite() && omega > 0. {
			Ok(Self(omega))
		} else {
			Err(ParameterDefect::NonPositiveFrequency(omega).into())
		}
	}

	/// The angular frequency of a wave that repeats every `period` units of time, i.e. `2π / period`.
	///
	/// # Errors
	/// [`ParameterDefect::NonPositiveFrequency`] if the resulting frequency is not a positive finite number
	pub fn from_period(period: f64) -> Result<Self, FourierError> {
		Self::new(TAU / period)
	}

	#[must_use]
	pub const fn get(&self) -> f64 {
		self.0
	}

	#[must_use]
	pub fn period(&self) -> f64 {
		TAU / self.0
	}

	/// Angular frequency of the n-th harmonic.
	#[must_use]
	pub fn harmonic(&self, n: usize) -> f64 {
		n as f64 * self.0
	}
}

impl TryFrom<f64> for AngularFrequency {
	type Error = FourierError;

	fn try_from(value: f64) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rejects_non_positive() {
		for omega in [0., -1., f64::NAN, f64::INFINITY] {
			assert!(
				matches!(
					AngularFrequency::new(omega),
					Err(FourierError::InvalidParameter(
						ParameterDefect::NonPositiveFrequency(_)
					))
				),
				"{omega}"
			);
		}
	}

	#[test]
	fn test_period_round_trip() {
		let omega = AngularFrequency::from_period(TAU).unwrap();
		assert!((omega.get() - 1.).abs() < f64::EPSILON);
		assert!((omega.period() - TAU).abs() < f64::EPSILON);
		assert!((omega.harmonic(3) - 3.).abs() < f64::EPSILON);
		assert!(AngularFrequency::from_period(0.).is_err());
	}

	#[test]
	fn test_display() {
		assert_eq!(AngularFrequency::new(2.5).unwrap().to_string(), "2.5rad/s");
		assert!((f64::from(AngularFrequency::new(2.5).unwrap()) - 2.5).abs() < f64::EPSILON);
	}
}
