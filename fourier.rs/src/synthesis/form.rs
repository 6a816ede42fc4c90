use crate::{parse_count, parse_real, FourierError, Signal};

use super::{HarmonicTable, Synthesizer};

/// Textual synthesis input, exactly as a user typed it.
///
/// `max_harmonics` drives how many coefficient entries are shown, while `harmonics` (N)
/// decides how many of them are used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthesisForm {
	pub a0: String,
	pub angular_frequency: String,
	max_harmonics: String,
	pub harmonics: String,
	pub table: HarmonicTable,
}

impl SynthesisForm {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn max_harmonics(&self) -> &str {
		&self.max_harmonics
	}

	/// Update the maximum number of harmonics, resizing the table when `text` is a valid count.
	pub fn set_max_harmonics(&mut self, text: impl Into<String>) {
		self.max_harmonics = text.into();
		self.table.resize_from_text(&self.max_harmonics);
	}

	/// Parse every field and synthesize the signal.
	///
	/// When N is larger than the table, the table is grown to N entries first. The new
	/// entries are empty, so the synthesis then fails on the first of them.
	///
	/// # Errors
	/// - [`FourierError::InvalidParameter`] naming the first field that doesn't parse
	///   (`a0`, `omega`, `n_max`, `n`, `a{k}` or `b{k}`), or if the table can't grow to N
	/// - see [`Synthesizer::synthesize`]
	pub fn synthesize(&mut self, synthesizer: &Synthesizer) -> Result<Signal, FourierError> {
		let a0 = parse_real("a0", &self.a0)?;
		let omega = parse_real("omega", &self.angular_frequency)?;
		parse_count("n_max", &self.max_harmonics)?;
		let n = parse_count("n", &self.harmonics)?;

		if n > self.table.len() {
			self.table.resize(n)?;
		}
		let harmonics = self.table.descriptors(n)?;

		synthesizer.synthesize(a0, omega, n, &harmonics)
	}
}
