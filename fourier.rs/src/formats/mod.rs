//! Plain-text persistence of signals and coefficients.
//!
//! Signal files start with a header line, which is ignored when reading, followed by one
//! `t, y` sample per line. Coefficients files start with `a0 = <value>`, followed by one
//! `a{n} = <value>, b{n} = <value>` line per harmonic.

mod signal_file;
pub use signal_file::*;

mod coefficients_file;
pub use coefficients_file::*;

use crate::FourierError;

#[derive(thiserror::Error, Debug)]
pub enum FormatError {
	#[error("unable to read or write the file")]
	Io(#[from] std::io::Error),
	#[error("malformed line {line}: {content:?}")]
	MalformedLine { line: usize, content: String },
	#[error(transparent)]
	Fourier(#[from] FourierError),
}

impl FormatError {
	pub(crate) fn malformed(line: usize, content: &str) -> Self {
		Self::MalformedLine {
			line,
			content: content.to_owned(),
		}
	}
}
