use std::io::{BufRead, Write};

use crate::{AngularFrequency, FourierCoefficients};

use super::FormatError;

/// Render coefficients as the text of a coefficients file, values rounded to 6 decimal places.
#[must_use]
pub fn render_coefficients(coefficients: &FourierCoefficients) -> String {
	let mut text = format!("a0 = {:.6}\n", coefficients.a0());
	for h in coefficients.harmonics() {
		text.push_str(&format!(
			"a{n} = {a:.6}, b{n} = {b:.6}\n",
			n = h.index(),
			a = h.a(),
			b = h.b()
		));
	}
	text
}

/// # Errors
/// [`FormatError::Io`] if writing fails
pub fn write_coefficients(
	mut writer: impl Write,
	coefficients: &FourierCoefficients,
) -> Result<(), FormatError> {
	writer.write_all(render_coefficients(coefficients).as_bytes())?;
	writer.flush()?;
	Ok(())
}

/// Read a coefficients file.
///
/// The first line must be `a0 = <value>`. Every following line made of exactly two comma
/// separated `name = value` parts is read as the next harmonic, in order; the names are not
/// checked and any other line is skipped. The file doesn't store ω0, so it must be provided.
///
/// # Errors
/// - [`FormatError::Io`] if reading fails
/// - [`FormatError::MalformedLine`] if the first line or a value can't be parsed
pub fn read_coefficients(
	reader: impl BufRead,
	angular_frequency: AngularFrequency,
) -> Result<FourierCoefficients, FormatError> {
	let mut lines = reader.lines();

	let first = lines.next().transpose()?.unwrap_or_default();
	let a0 = parse_value(&first).ok_or_else(|| FormatError::malformed(1, &first))?;

	let mut an = Vec::new();
	let mut bn = Vec::new();
	for (i, line) in lines.enumerate() {
		let line = line?;
		let parts: Vec<&str> = line.split(',').collect();
		let &[a, b] = parts.as_slice() else {
			continue;
		};
		let malformed = || FormatError::malformed(i + 2, &line);
		an.push(parse_value(a).ok_or_else(malformed)?);
		bn.push(parse_value(b).ok_or_else(malformed)?);
	}

	Ok(FourierCoefficients::new(a0, an, bn, angular_frequency)?)
}

/// The value of a `name = value` pair.
fn parse_value(pair: &str) -> Option<f64> {
	let (_, value) = pair.split_once('=')?;
	value
		.trim()
		.parse::<f64>()
		.ok()
		.filter(|value| value.is_finite())
}
