use std::io::{BufRead, Write};

use crate::{Sample, Signal};

use super::FormatError;

/// Header of synthesized signal files.
pub const SIGNAL_HEADER: &str = "t, X(t)";

/// Read a signal file. The first line is a header and is skipped, blank lines are ignored.
///
/// # Errors
/// - [`FormatError::Io`] if reading fails
/// - [`FormatError::MalformedLine`] if a line isn't made of two comma separated numbers
/// - [`FormatError::Fourier`] if the samples don't form a valid [`Signal`]
pub fn read_signal(reader: impl BufRead) -> Result<Signal, FormatError> {
	let mut samples = Vec::new();
	for (i, line) in reader.lines().enumerate().skip(1) {
		let line = line?;
		if line.trim().is_empty() {
			continue;
		}
		samples.push(parse_sample(&line).ok_or_else(|| FormatError::malformed(i + 1, &line))?);
	}
	Ok(Signal::new(samples)?)
}

fn parse_sample(line: &str) -> Option<Sample> {
	let (t, y) = line.split_once(',')?;
	Some(Sample::new(t.trim().parse().ok()?, y.trim().parse().ok()?))
}

/// Write a signal file with the [`SIGNAL_HEADER`] header, values rounded to 4 decimal places.
///
/// # Errors
/// [`FormatError::Io`] if writing fails
pub fn write_signal(mut writer: impl Write, signal: &Signal) -> Result<(), FormatError> {
	writeln!(writer, "{SIGNAL_HEADER}")?;
	for Sample { t, y } in signal.iter() {
		writeln!(writer, "{t:.4}, {y:.4}")?;
	}
	writer.flush()?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{FourierError, SignalDefect};

	#[test]
	fn test_read() {
		let text = "time, value\n0, 1.5\n0.25,-2\n  1.0 , 3e-1 \n\n";
		let signal = read_signal(text.as_bytes()).unwrap();
		assert_eq!(signal.times(), vec![0., 0.25, 1.]);
		assert_eq!(signal.values(), vec![1.5, -2., 0.3]);
	}

	#[test]
	fn test_header_is_always_skipped() {
		let signal = read_signal("0, 0\n1, 1\n2, 2\n".as_bytes()).unwrap();
		assert_eq!(signal.len(), 2);
	}

	#[test]
	fn test_malformed_lines() {
		for (text, line) in [
			("t, y\n0, 1\n1; 2\n", 3),
			("t, y\n0, 1, 2\n", 2),
			("t, y\nzero, 1\n", 2),
			("t, y\n0\n", 2),
		] {
			match read_signal(text.as_bytes()) {
				Err(FormatError::MalformedLine { line: actual, .. }) => assert_eq!(actual, line),
				other => panic!("{text:?}: expected a malformed line, got {other:?}"),
			}
		}
	}

	#[test]
	fn test_invalid_signal() {
		assert!(matches!(
			read_signal("t, X(t)\n".as_bytes()),
			Err(FormatError::Fourier(FourierError::InvalidSignal(
				SignalDefect::TooFewSamples(0)
			)))
		));
		assert!(matches!(
			read_signal("t, X(t)\n1, 0\n0, 0\n".as_bytes()),
			Err(FormatError::Fourier(FourierError::InvalidSignal(
				SignalDefect::NonIncreasingTime { index: 1 }
			)))
		));
	}

	#[test]
	fn test_write() {
		let signal = Signal::try_from(vec![(0., 1.), (0.123_456, -2.000_04)]).unwrap();
		let mut out = Vec::new();
		write_signal(&mut out, &signal).unwrap();
		assert_eq!(
			String::from_utf8(out).unwrap(),
			"t, X(t)\n0.0000, 1.0000\n0.1235, -2.0000\n"
		);
	}
}
