use crate::{AngularFrequency, FourierError, HarmonicDescriptor, ParameterDefect};

/// A truncated real Fourier series:
///
/// `y(t) = a0/2 + Σ_{n=1}^{N} [a_n·cos(n·ω0·t) + b_n·sin(n·ω0·t)]`
#[derive(Debug, Clone, PartialEq)]
pub struct FourierCoefficients {
	a0: f64,
	an: Vec<f64>,
	bn: Vec<f64>,
	angular_frequency: AngularFrequency,
}

impl FourierCoefficients {
	/// # Errors
	/// [`ParameterDefect::HarmonicCountMismatch`] if `an` and `bn` have different lengths
	pub fn new(
		a0: f64,
		an: Vec<f64>,
		bn: Vec<f64>,
		angular_frequency: AngularFrequency,
	) -> Result<Self, FourierError> {
		if an.len() != bn.len() {
			return Err(ParameterDefect::HarmonicCountMismatch {
				expected: an.len(),
				actual: bn.len(),
			}
			.into());
		}
		Ok(Self {
			a0,
			an,
			bn,
			angular_frequency,
		})
	}

	/// Build the series from harmonics listed in order, starting from the first.
	///
	/// # Errors
	/// [`ParameterDefect::UnexpectedHarmonicIndex`] if the i-th descriptor is not harmonic `i + 1`
	pub fn from_harmonics(
		a0: f64,
		harmonics: &[HarmonicDescriptor],
		angular_frequency: AngularFrequency,
	) -> Result<Self, FourierError> {
		if let Some((i, h)) = harmonics
			.iter()
			.enumerate()
			.find(|(i, h)| h.index() != i + 1)
		{
			return Err(ParameterDefect::UnexpectedHarmonicIndex {
				expected: i + 1,
				actual: h.index(),
			}
			.into());
		}
		Ok(Self {
			a0,
			an: harmonics.iter().map(HarmonicDescriptor::a).collect(),
			bn: harmonics.iter().map(HarmonicDescriptor::b).collect(),
			angular_frequency,
		})
	}

	#[must_use]
	pub const fn a0(&self) -> f64 {
		self.a0
	}

	/// `a_1..=a_N`, `an()[0]` being `a_1`.
	#[must_use]
	pub fn an(&self) -> &[f64] {
		&self.an
	}

	/// `b_1..=b_N`, `bn()[0]` being `b_1`.
	#[must_use]
	pub fn bn(&self) -> &[f64] {
		&self.bn
	}

	#[must_use]
	pub const fn angular_frequency(&self) -> AngularFrequency {
		self.angular_frequency
	}

	/// N, the number of harmonics (not counting the DC term).
	#[must_use]
	pub fn n_of_harmonics(&self) -> usize {
		self.an.len()
	}

	/// The n-th harmonic, `n` starting from 1.
	#[must_use]
	pub fn harmonic(&self, n: usize) -> Option<HarmonicDescriptor> {
		let i = n.checked_sub(1)?;
		Some(HarmonicDescriptor::new(n, *self.an.get(i)?, self.bn[i]))
	}

	pub fn harmonics(&self) -> impl ExactSizeIterator<Item = HarmonicDescriptor> + '_ {
		self.an
			.iter()
			.zip(&self.bn)
			.enumerate()
			.map(|(i, (&a, &b))| HarmonicDescriptor::new(i + 1, a, b))
	}

	/// Evaluate the truncated series at time `t`.
	#[must_use]
	pub fn evaluate(&self, t: f64) -> f64 {
		self.a0 / 2.
			+ self
				.harmonics()
				.map(|h| h.value_at(t, self.angular_frequency))
				.sum::<f64>()
	}
}
