use crate::ext::DivisibleByUsize;
use std::{borrow::Borrow, cell::Cell, cmp::Ordering, ops::Add};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticsError {
	#[error("common stats are undefined on empty series")]
	EmptySeries,
}

/// Lazily computed statistics over a non-empty series. Every statistic is
/// computed at most once.
#[derive(Debug, Clone)]
pub struct SeriesStatistics<T: Copy, Series: Borrow<[T]>> {
	series: Series,
	sum: Cell<Option<T>>,
	mean: Cell<Option<T>>,
	max: Cell<Option<T>>,
	min: Cell<Option<T>>,
}

impl<T: Copy, Series: Borrow<[T]>> SeriesStatistics<T, Series> {
	/// # Errors
	/// - on empty series
	pub fn new(series: Series) -> Result<Self, StatisticsError> {
		if series.borrow().is_empty() {
			Err(StatisticsError::EmptySeries)
		} else {
			Ok(Self {
				series,
				sum: Cell::default(),
				mean: Cell::default(),
				max: Cell::default(),
				min: Cell::default(),
			})
		}
	}

	pub fn series(&self) -> &[T] {
		self.series.borrow()
	}
}

fn get_or_compute<T: Copy>(cell: &Cell<Option<T>>, compute: impl FnOnce() -> T) -> T {
	if let Some(value) = cell.get() {
		value
	} else {
		let value = compute();
		cell.set(Some(value));
		value
	}
}

impl<T: Add<T, Output = T> + Copy, Series: Borrow<[T]>> SeriesStatistics<T, Series> {
	#[allow(clippy::missing_panics_doc)] // REASON: invariant (series.len() > 0) guaranteed by explicit check in the constructor
	#[must_use]
	pub fn sum(&self) -> T {
		get_or_compute(&self.sum, || {
			self.series()
				.iter()
				.copied()
				.reduce(|acc, cur| acc + cur)
				.expect("internal error: at least one element should be present in the series")
		})
	}
}

impl<T: Add<T, Output = T> + DivisibleByUsize + Copy, Series: Borrow<[T]>>
	SeriesStatistics<T, Series>
{
	#[must_use]
	pub fn mean(&self) -> T {
		get_or_compute(&self.mean, || self.sum().div_usize(self.series().len()))
	}
}

impl<T: PartialOrd + Copy, Series: Borrow<[T]>> SeriesStatistics<T, Series> {
	#[allow(clippy::missing_panics_doc)] // REASON: invariant (series.len() > 0) guaranteed by explicit check in the constructor
	#[must_use]
	pub fn max(&self) -> T {
		get_or_compute(&self.max, || {
			*self
				.series()
				.iter()
				.max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
				.expect("internal error: at least one element should be present in the series")
		})
	}

	#[allow(clippy::missing_panics_doc)] // REASON: invariant (series.len() > 0) guaranteed by explicit check in the constructor
	#[must_use]
	pub fn min(&self) -> T {
		get_or_compute(&self.min, || {
			*self
				.series()
				.iter()
				.min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
				.expect("internal error: at least one element should be present in the series")
		})
	}
}

impl<Series: Borrow<[f32]>> SeriesStatistics<f32, Series> {
	/// The largest magnitude in the series, i.e. `max(|x|)`.
	#[must_use]
	pub fn peak(&self) -> f32 {
		self.max().abs().max(self.min().abs())
	}
}

impl<Series: Borrow<[f64]>> SeriesStatistics<f64, Series> {
	/// The largest magnitude in the series, i.e. `max(|x|)`.
	#[must_use]
	pub fn peak(&self) -> f64 {
		self.max().abs().max(self.min().abs())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_series() {
		let values: &[f64] = &[];
		assert_eq!(
			SeriesStatistics::new(values).unwrap_err(),
			StatisticsError::EmptySeries
		);
	}

	#[test]
	fn test_mean() {
		let values: &[f64] = &[1., 3., 3., 6., 7., 8., 9.];
		let stats = SeriesStatistics::new(values).unwrap();
		assert!((stats.mean() - 5.28).abs() < 0.01);
	}

	#[test]
	fn test_min() {
		let values: &[f64] = &[1., 2., 3., 4., 5., 6., 8., 9.];
		let stats = SeriesStatistics::new(values).unwrap();
		assert!((stats.min() - 1.).abs() < f64::EPSILON);
	}

	#[test]
	fn test_max() {
		let values: &[f64] = &[1., 2., 3., 4., 5., 6., 8., 9.];
		let stats = SeriesStatistics::new(values).unwrap();
		assert!((stats.max() - 9.).abs() < f64::EPSILON);
	}

	#[test]
	fn test_peak_of_negative_excursion() {
		let values: &[f64] = &[0.5, -12.25, 3., 11.];
		let stats = SeriesStatistics::new(values).unwrap();
		assert!((stats.peak() - 12.25).abs() < f64::EPSILON);
	}

	#[test]
	fn test_peak_owned_series() {
		let stats = SeriesStatistics::new(vec![-1f32, 0.25, 2.]).unwrap();
		assert!((stats.peak() - 2.).abs() < f32::EPSILON);
		assert!((stats.sum() - 1.25).abs() < f32::EPSILON);
	}
}
