use crate::AngularFrequency;

/// The cosine and sine coefficients `(a_n, b_n)` of the n-th harmonic of a Fourier series.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HarmonicDescriptor {
	index: usize,
	a: f64,
	b: f64,
}

impl HarmonicDescriptor {
	/// `index` is the harmonic number `n`, starting from 1.
	#[must_use]
	pub const fn new(index: usize, a: f64, b: f64) -> Self {
		Self { index, a, b }
	}

	#[must_use]
	pub const fn index(&self) -> usize {
		self.index
	}

	/// The cosine coefficient `a_n`.
	#[must_use]
	pub const fn a(&self) -> f64 {
		self.a
	}

	/// The sine coefficient `b_n`.
	#[must_use]
	pub const fn b(&self) -> f64 {
		self.b
	}

	/// `a_n·cos(x) + b_n·sin(x)` can be rewritten as `amplitude·cos(x - phase)`.
	#[must_use]
	pub fn amplitude(&self) -> f64 {
		self.a.hypot(self.b)
	}

	/// The phase offset of the equivalent cosine wave, see [`HarmonicDescriptor::amplitude`].
	#[must_use]
	pub fn phase(&self) -> f64 {
		self.b.atan2(self.a)
	}

	/// The value returned by this method is unitless and represents
	/// the average power of the harmonic over one period.
	#[must_use]
	pub fn power(&self) -> f64 {
		(self.a * self.a + self.b * self.b) / 2.
	}

	/// The contribution of this harmonic to the series at time `t`.
	#[must_use]
	pub fn value_at(&self, t: f64, omega: AngularFrequency) -> f64 {
		let (sin, cos) = (omega.harmonic(self.index) * t).sin_cos();
		self.a * cos + self.b * sin
	}
}

#[cfg(test)]
mod tests {
	use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

	use super::*;

	#[test]
	fn test_polar_form() {
		let h = HarmonicDescriptor::new(1, 1., 1.);
		assert!((h.amplitude() - 2f64.sqrt()).abs() < 1e-12);
		assert!((h.phase() - FRAC_PI_4).abs() < 1e-12);
		assert!((h.power() - 1.).abs() < 1e-12);

		let sine = HarmonicDescriptor::new(2, 0., -3.);
		assert!((sine.amplitude() - 3.).abs() < 1e-12);
		assert!((sine.phase() + FRAC_PI_2).abs() < 1e-12);
	}

	#[test]
	fn test_value_matches_polar_form() {
		let omega = AngularFrequency::new(1.5).unwrap();
		let h = HarmonicDescriptor::new(3, 0.7, -1.2);
		for i in 0..100 {
			let t = f64::from(i) * PI / 50.;
			let polar = h.amplitude() * (omega.harmonic(3) * t - h.phase()).cos();
			assert!((h.value_at(t, omega) - polar).abs() < 1e-12);
		}
	}
}
