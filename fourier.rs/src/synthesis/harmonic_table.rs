use crate::{parse_real, FourierError, HarmonicDescriptor, ParameterDefect};

/// Raw, user typed `(a_n, b_n)` coefficients of one harmonic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarmonicEntry {
	pub a: String,
	pub b: String,
}

impl HarmonicEntry {
	#[must_use]
	pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
		Self {
			a: a.into(),
			b: b.into(),
		}
	}

	/// # Errors
	/// [`ParameterDefect::Unparsable`] naming `a{index}` or `b{index}`
	pub fn parse(&self, index: usize) -> Result<HarmonicDescriptor, FourierError> {
		Ok(HarmonicDescriptor::new(
			index,
			parse_real(&format!("a{index}"), &self.a)?,
			parse_real(&format!("b{index}"), &self.b)?,
		))
	}
}

/// The list of coefficient entries, addressed by harmonic index (starting from 1).
///
/// Only the first [`HarmonicTable::visible_count`] entries are shown. Shrinking the visible
/// count hides entries without dropping them, so their values are back as soon as the
/// count grows again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarmonicTable {
	entries: Vec<HarmonicEntry>,
	visible: usize,
}

impl HarmonicTable {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Show the first `visible` entries, creating empty ones if there aren't enough.
	///
	/// # Errors
	/// [`ParameterDefect::TooManyHarmonics`] if the missing entries can't be allocated, in
	/// which case the table is left untouched
	pub fn resize(&mut self, visible: usize) -> Result<(), FourierError> {
		if let Some(missing) = visible.checked_sub(self.entries.len()) {
			self.entries
				.try_reserve_exact(missing)
				.map_err(|_| ParameterDefect::TooManyHarmonics(visible))?;
			self.entries.resize_with(visible, HarmonicEntry::default);
		}
		self.visible = visible;
		Ok(())
	}

	/// [`HarmonicTable::resize`] from a partially typed value: the table is only resized
	/// when `text` is a plain non-negative integer, so intermediate states such as `""`
	/// leave it untouched. Returns whether the table was resized.
	pub fn resize_from_text(&mut self, text: &str) -> bool {
		if text.is_empty() || !text.bytes().all(|c| c.is_ascii_digit()) {
			return false;
		}
		text.parse::<usize>().is_ok_and(|visible| self.resize(visible).is_ok())
	}

	#[must_use]
	pub fn visible_count(&self) -> usize {
		self.visible
	}

	/// Number of entries, hidden ones included.
	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	#[must_use]
	pub fn visible(&self) -> &[HarmonicEntry] {
		&self.entries[..self.visible]
	}

	#[must_use]
	pub fn hidden(&self) -> &[HarmonicEntry] {
		&self.entries[self.visible..]
	}

	#[must_use]
	pub fn entry(&self, index: usize) -> Option<&HarmonicEntry> {
		self.entries.get(index.checked_sub(1)?)
	}

	pub fn entry_mut(&mut self, index: usize) -> Option<&mut HarmonicEntry> {
		self.entries.get_mut(index.checked_sub(1)?)
	}

	/// Overwrite the entry of harmonic `index`, hidden or not.
	///
	/// # Errors
	/// [`ParameterDefect::HarmonicIndexOutOfRange`] if there's no such entry
	pub fn set(
		&mut self,
		index: usize,
		a: impl Into<String>,
		b: impl Into<String>,
	) -> Result<(), FourierError> {
		let len = self.len();
		let entry = self
			.entry_mut(index)
			.ok_or(ParameterDefect::HarmonicIndexOutOfRange { index, len })?;
		*entry = HarmonicEntry::new(a, b);
		Ok(())
	}

	/// Parse harmonics `1..=n`. Hidden entries are read like visible ones.
	///
	/// # Errors
	/// - [`ParameterDefect::HarmonicCountMismatch`] if the table has less than `n` entries
	/// - [`ParameterDefect::Unparsable`] on the first entry that doesn't parse
	pub fn descriptors(&self, n: usize) -> Result<Vec<HarmonicDescriptor>, FourierError> {
		if n > self.len() {
			return Err(ParameterDefect::HarmonicCountMismatch {
				expected: n,
				actual: self.len(),
			}
			.into());
		}
		self.entries[..n]
			.iter()
			.enumerate()
			.map(|(i, entry)| entry.parse(i + 1))
			.collect()
	}
}
