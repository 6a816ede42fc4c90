//! Command-line front end: marshals signal and coefficients files into and out of the engine.

mod cli;

use std::{
	fs::File,
	io::{BufReader, BufWriter},
	path::Path,
};

use anyhow::{Context, Result};
use clap::Parser;
use fourier::{
	analysis::Analyzer,
	formats::{read_coefficients, read_signal, render_coefficients, write_coefficients, write_signal},
	parse_real,
	synthesis::{SynthesisForm, Synthesizer},
	AngularFrequency,
};

use cli::{AnalyzeArgs, Cli, Command, SynthesizeArgs};

fn main() -> Result<()> {
	let cli = Cli::parse();

	let default_level = if cli.verbose { "debug" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
		.init();

	match cli.command {
		Command::Analyze(args) => analyze(&args),
		Command::Synthesize(args) => synthesize(&args),
	}
}

fn analyze(args: &AnalyzeArgs) -> Result<()> {
	let file = File::open(&args.input)
		.with_context(|| format!("failed to open {}", args.input.display()))?;
	let signal = read_signal(BufReader::new(file))
		.with_context(|| format!("failed to read the signal in {}", args.input.display()))?;

	let mut analyzer = Analyzer::new().with_harmonics(args.harmonics);
	if let Some(omega) = args.omega {
		analyzer = analyzer.with_angular_frequency(omega);
	}
	let coefficients = analyzer.analyze(&signal).context("analysis failed")?;

	print!("{}", render_coefficients(&coefficients));

	if let Some(output) = &args.output {
		write_coefficients(create(output)?, &coefficients)
			.with_context(|| format!("failed to write {}", output.display()))?;
		log::info!("coefficients written to {}", output.display());
	}

	Ok(())
}

fn synthesize(args: &SynthesizeArgs) -> Result<()> {
	let mut form = synthesis_form(args)?;
	let signal = form
		.synthesize(&Synthesizer::new())
		.context("synthesis failed")?;

	write_signal(create(&args.output)?, &signal)
		.with_context(|| format!("failed to write {}", args.output.display()))?;
	println!("signal written to {}", args.output.display());

	Ok(())
}

/// Fill a [`SynthesisForm`] the way a user would, either from the command line or from a
/// coefficients file.
fn synthesis_form(args: &SynthesizeArgs) -> Result<SynthesisForm> {
	let mut form = SynthesisForm::new();
	form.angular_frequency.clone_from(&args.omega);

	if let Some(from) = &args.from {
		// ω0 is required to build the coefficients, even if the form parses it again later
		let omega = AngularFrequency::new(parse_real("omega", &args.omega)?)?;
		let file =
			File::open(from).with_context(|| format!("failed to open {}", from.display()))?;
		let coefficients = read_coefficients(BufReader::new(file), omega)
			.with_context(|| format!("failed to read the coefficients in {}", from.display()))?;

		form.a0 = coefficients.a0().to_string();
		form.set_max_harmonics(coefficients.n_of_harmonics().to_string());
		for h in coefficients.harmonics() {
			form.table.set(h.index(), h.a().to_string(), h.b().to_string())?;
		}
	} else {
		form.a0 = args.a0.clone().unwrap_or_default();
		form.set_max_harmonics(args.coefficients.len().to_string());
		for (i, pair) in args.coefficients.iter().enumerate() {
			let (a, b) = pair
				.split_once(',')
				.with_context(|| format!("expected `a,b` coefficients, got {pair:?}"))?;
			form.table.set(i + 1, a, b)?;
		}
	}

	form.harmonics = args
		.harmonics
		.clone()
		.unwrap_or_else(|| form.table.len().to_string());

	Ok(form)
}

fn create(path: &Path) -> Result<BufWriter<File>> {
	let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
	Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;

	fn args(a0: &str, omega: &str, coefficients: &[&str], harmonics: Option<&str>) -> SynthesizeArgs {
		SynthesizeArgs {
			a0: Some(a0.into()),
			omega: omega.into(),
			harmonics: harmonics.map(Into::into),
			coefficients: coefficients.iter().map(|&c| c.to_owned()).collect(),
			from: None,
			output: PathBuf::from("signal.txt"),
		}
	}

	#[test]
	fn test_inline_coefficients_fill_the_form() {
		let form = synthesis_form(&args("1", "2", &["0.5,0", " -1 , 0.25"], None)).unwrap();
		assert_eq!(form.a0, "1");
		assert_eq!(form.angular_frequency, "2");
		assert_eq!(form.max_harmonics(), "2");
		assert_eq!(form.harmonics, "2");
		assert_eq!(form.table.entry(2).unwrap().a, " -1 ");
	}

	#[test]
	fn test_explicit_harmonic_count_wins() {
		let mut form = synthesis_form(&args("0", "1", &["1,0", "5,5"], Some("1"))).unwrap();
		let signal = form.synthesize(&Synthesizer::new()).unwrap();
		assert!((signal[0].y - 1.).abs() < 1e-12);
	}

	#[test]
	fn test_malformed_pair() {
		assert!(synthesis_form(&args("0", "1", &["1;0"], None)).is_err());
	}
}
