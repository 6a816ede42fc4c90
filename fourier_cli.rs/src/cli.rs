//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "fourier")]
#[command(about = "Fourier series analysis and synthesis of periodic signals", long_about = None)]
#[command(version)]
pub struct Cli {
	/// Log every analysis and synthesis
	#[arg(short, long, global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Estimate the Fourier coefficients of a signal file
	Analyze(AnalyzeArgs),
	/// Synthesize one period of a signal from its Fourier coefficients
	Synthesize(SynthesizeArgs),
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
	/// Signal file: a header line, then one `t, y` sample per line
	#[arg(value_name = "SIGNAL_FILE")]
	pub input: PathBuf,

	/// Number of harmonics to estimate
	#[arg(short = 'n', long, default_value_t = fourier::analysis::DEFAULT_HARMONICS)]
	pub harmonics: usize,

	/// Angular frequency ω0 (defaults to 2π divided by the time span of the signal)
	#[arg(short, long, value_name = "RAD_PER_UNIT", allow_hyphen_values = true)]
	pub omega: Option<f64>,

	/// Also write the coefficients to this file
	#[arg(long, value_name = "FILE")]
	pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SynthesizeArgs {
	/// DC coefficient a0
	#[arg(long, value_name = "A0", required_unless_present = "from", allow_hyphen_values = true)]
	pub a0: Option<String>,

	/// Angular frequency ω0
	#[arg(short, long, value_name = "RAD_PER_UNIT", allow_hyphen_values = true)]
	pub omega: String,

	/// Number of harmonics N to use (defaults to all the supplied ones)
	#[arg(short = 'n', long, value_name = "N")]
	pub harmonics: Option<String>,

	/// Coefficients `a,b` of the next harmonic, starting from the first. Can be repeated
	#[arg(
		short,
		long = "coefficient",
		value_name = "A,B",
		conflicts_with = "from",
		allow_hyphen_values = true
	)]
	pub coefficients: Vec<String>,

	/// Read a0 and the harmonics from a coefficients file instead
	#[arg(long, value_name = "COEFFICIENTS_FILE", conflicts_with = "a0")]
	pub from: Option<PathBuf>,

	/// Where to write the synthesized signal
	#[arg(long, value_name = "FILE", default_value = "signal.txt")]
	pub output: PathBuf,
}
