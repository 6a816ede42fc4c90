use std::{
	fmt::Display,
	ops::{Add, Sub},
};

use crate::ext::{DivisibleByUsize, MultiplyByUsize};

/// `n_of_points` evenly spaced values over a closed interval. Both ends of the
/// interval are part of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linspace<T> {
	interval: (T, T),
	n_of_points: usize,
}

impl<
		T: Copy
			+ Add<T, Output = T>
			+ Sub<T, Output = T>
			+ DivisibleByUsize
			+ MultiplyByUsize
			+ PartialOrd
			+ Display,
	> Linspace<T>
{
	/// # Panics
	/// - if `n_of_points` is less than 2
	/// - if the interval is empty or reversed
	#[must_use]
	pub fn new(interval: (T, T), n_of_points: usize) -> Self {
		assert!(
			n_of_points >= 2,
			"a grid needs at least 2 points, got {n_of_points}"
		);
		assert!(
			interval.0 < interval.1,
			"interval {}..={} is empty",
			interval.0,
			interval.1
		);
		Self {
			interval,
			n_of_points,
		}
	}

	#[must_use]
	pub fn step(&self) -> T {
		(self.interval.1 - self.interval.0).div_usize(self.n_of_points - 1)
	}

	/// The i-th point of the grid. The last index maps exactly onto the end of the interval.
	#[must_use]
	pub fn point(&self, i: usize) -> T {
		debug_assert!(
			i < self.n_of_points,
			"index {} is out of range. n_of_points is {}",
			i,
			self.n_of_points
		);
		if i == self.n_of_points - 1 {
			self.interval.1
		} else {
			self.interval.0 + self.step().mul_usize(i)
		}
	}

	#[must_use]
	pub fn n_of_points(&self) -> usize {
		self.n_of_points
	}

	#[must_use]
	pub fn interval(&self) -> (T, T) {
		self.interval
	}

	pub fn iter(&self) -> impl ExactSizeIterator<Item = T> + '_ {
		(0..self.n_of_points).map(|i| self.point(i))
	}

	#[must_use]
	pub fn to_vec(&self) -> Vec<T> {
		self.iter().collect()
	}
}
