use math_utils::{integration::IntegrationError, stats::StatisticsError};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FourierError {
	#[error("invalid signal: {0}")]
	InvalidSignal(#[from] SignalDefect),
	#[error("invalid parameter: {0}")]
	InvalidParameter(#[from] ParameterDefect),
	#[error("the signal peaks at {peak}, exceeding the allowed bound of {bound}")]
	SignalOutOfRange { peak: f64, bound: f64 },
}

/// Why a sequence of samples can't be treated as a signal.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum SignalDefect {
	#[error("at least 2 samples are required, got {0}")]
	TooFewSamples(usize),
	#[error("time is not strictly increasing at sample {index}")]
	NonIncreasingTime { index: usize },
	#[error("sample {index} is not a finite number")]
	NonFinite { index: usize },
	#[error("domain span {0} is not a positive finite number")]
	DegenerateSpan(f64),
	#[error("sample values are too large, their integral overflows")]
	Overflow,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParameterDefect {
	#[error("at least 1 harmonic is required")]
	NoHarmonics,
	#[error("angular frequency must be a positive finite number, got {0}")]
	NonPositiveFrequency(f64),
	#[error("angular frequency {0} is too large, the highest harmonic overflows over the signal domain")]
	FrequencyTooLarge(f64),
	#[error("{0} harmonics can't be allocated")]
	TooManyHarmonics(usize),
	#[error("{expected} harmonics requested, but {actual} coefficient pairs were supplied")]
	HarmonicCountMismatch { expected: usize, actual: usize },
	#[error("expected harmonic {expected}, got harmonic {actual}")]
	UnexpectedHarmonicIndex { expected: usize, actual: usize },
	#[error("harmonic {index} is out of range, only {len} are available")]
	HarmonicIndexOutOfRange { index: usize, len: usize },
	#[error("`{field}` is not a finite number: {value:?}")]
	Unparsable { field: String, value: String },
}

impl ParameterDefect {
	pub(crate) fn unparsable(field: impl Into<String>, value: impl Into<String>) -> Self {
		Self::Unparsable {
			field: field.into(),
			value: value.into(),
		}
	}
}

impl From<IntegrationError> for SignalDefect {
	fn from(value: IntegrationError) -> Self {
		match value {
			IntegrationError::NotEnoughPoints(n) => Self::TooFewSamples(n),
			IntegrationError::LengthMismatch { abscissas, .. } => Self::TooFewSamples(abscissas),
		}
	}
}

impl From<IntegrationError> for FourierError {
	fn from(value: IntegrationError) -> Self {
		Self::InvalidSignal(value.into())
	}
}

impl From<StatisticsError> for FourierError {
	fn from(value: StatisticsError) -> Self {
		match value {
			StatisticsError::EmptySeries => Self::InvalidSignal(SignalDefect::TooFewSamples(0)),
		}
	}
}

/// Parse a user supplied real number, rejecting anything that isn't finite.
///
/// # Errors
/// [`ParameterDefect::Unparsable`], naming `field`
pub fn parse_real(field: &str, text: &str) -> Result<f64, FourierError> {
	match text.trim().parse::<f64>() {
		Ok(value) if value.is_finite() => Ok(value),
		_ => Err(ParameterDefect::unparsable(field, text).into()),
	}
}

/// Parse a user supplied non-negative integer.
///
/// # Errors
/// [`ParameterDefect::Unparsable`], naming `field`
pub fn parse_count(field: &str, text: &str) -> Result<usize, FourierError> {
	text.trim()
		.parse::<usize>()
		.map_err(|_| ParameterDefect::unparsable(field, text).into())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_real() {
		assert!((parse_real("a0", " 1.5 ").unwrap() - 1.5).abs() < f64::EPSILON);
		assert!((parse_real("a0", "-2e-3").unwrap() + 0.002).abs() < f64::EPSILON);
		assert_eq!(
			parse_real("a1", "1,5"),
			Err(FourierError::InvalidParameter(ParameterDefect::Unparsable {
				field: "a1".into(),
				value: "1,5".into()
			}))
		);
		assert!(parse_real("b2", "").is_err());
		assert!(parse_real("b2", "NaN").is_err());
		assert!(parse_real("b2", "inf").is_err());
	}

	#[test]
	fn test_parse_count() {
		assert_eq!(parse_count("n", "3"), Ok(3));
		assert_eq!(parse_count("n", " 0\n"), Ok(0));
		assert!(parse_count("n", "-1").is_err());
		assert!(parse_count("n", "2.5").is_err());
	}

	#[test]
	fn test_messages() {
		assert_eq!(
			FourierError::from(SignalDefect::TooFewSamples(1)).to_string(),
			"invalid signal: at least 2 samples are required, got 1"
		);
		assert_eq!(
			FourierError::SignalOutOfRange {
				peak: 12.5,
				bound: 10.
			}
			.to_string(),
			"the signal peaks at 12.5, exceeding the allowed bound of 10"
		);
	}
}
