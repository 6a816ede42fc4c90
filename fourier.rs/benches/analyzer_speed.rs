use std::{f64::consts::TAU, time::Duration};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fourier::{analysis::Analyzer, Signal};

fn bench_analyzer(c: &mut Criterion) {
	use rand::prelude::*;
	let mut rng = rand::thread_rng();

	let mut times: Vec<f64> = (0..1000).map(|_| rng.gen_range(0.0..TAU)).collect();
	times.sort_by(f64::total_cmp);
	times.dedup();
	let signal = Signal::from_fn(times, |_| rng.gen_range(-1.0..=1.0)).unwrap();

	let analyzer = Analyzer::new();
	c.bench_function("Analyzer, 1000 samples, 10 harmonics", |b| {
		b.iter(|| {
			black_box(analyzer.analyze(&signal).unwrap());
		});
	});
}

criterion_group! {
  name = benches;
  config = Criterion::default().measurement_time(Duration::from_secs(8));
  targets = bench_analyzer
}
criterion_main!(benches);
