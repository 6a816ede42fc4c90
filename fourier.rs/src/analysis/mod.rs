mod analyzer;
pub use analyzer::*;

#[cfg(test)]
#[cfg(feature = "synthesis")]
mod tests {
	use std::f64::consts::TAU;

	use crate::{
		analysis::Analyzer,
		synthesis::{Synthesizer, SYNTHESIS_SAMPLES},
		FourierCoefficients, Signal,
	};

	#[test]
	fn synthesized_signal_round_trips_through_analysis() {
		let original = Signal::from_fn(
			(0..SYNTHESIS_SAMPLES).map(|i| i as f64 * TAU / (SYNTHESIS_SAMPLES - 1) as f64),
			|t| 1. + 2. * t.cos() - 0.5 * (3. * t).sin() + 0.25 * (4. * t).cos(),
		)
		.unwrap();

		let coefficients = Analyzer::new().with_harmonics(5).analyze(&original).unwrap();
		let reconstructed = Synthesizer::new()
			.synthesize_coefficients(&coefficients)
			.unwrap();

		assert_eq!(reconstructed.len(), original.len());
		for (expected, actual) in original.iter().zip(reconstructed.iter()) {
			assert!((expected.t - actual.t).abs() < 1e-9);
			assert!(
				(expected.y - actual.y).abs() < 1e-3,
				"{expected:?} vs {actual:?}"
			);
		}
	}

	#[test]
	fn analysis_recovers_synthesized_coefficients() {
		let omega = crate::AngularFrequency::new(1.).unwrap();
		let source =
			FourierCoefficients::new(0.8, vec![1.5, 0., -0.3], vec![0., 2., 0.7], omega).unwrap();

		let signal = Synthesizer::new().synthesize_coefficients(&source).unwrap();
		let estimated = Analyzer::new().with_harmonics(3).analyze(&signal).unwrap();

		assert!((estimated.a0() - source.a0()).abs() < 1e-3);
		for (expected, actual) in source.harmonics().zip(estimated.harmonics()) {
			assert!((expected.a() - actual.a()).abs() < 1e-3, "{actual:?}");
			assert!((expected.b() - actual.b()).abs() < 1e-3, "{actual:?}");
		}
	}
}
