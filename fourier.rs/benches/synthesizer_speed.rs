use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fourier::{synthesis::Synthesizer, HarmonicDescriptor};

fn bench_synthesizer(c: &mut Criterion) {
	let harmonics: Vec<HarmonicDescriptor> = (1..=10)
		.map(|n| HarmonicDescriptor::new(n, 0.5 / n as f64, -0.25 / n as f64))
		.collect();

	let synthesizer = Synthesizer::new();
	c.bench_function("Synthesizer, 10 harmonics", |b| {
		b.iter(|| {
			black_box(synthesizer.synthesize(1., 1., harmonics.len(), &harmonics).unwrap());
		});
	});
}

criterion_group! {
  name = benches;
  config = Criterion::default().measurement_time(Duration::from_secs(8));
  targets = bench_synthesizer
}
criterion_main!(benches);
