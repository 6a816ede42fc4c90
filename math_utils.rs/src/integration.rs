//! Numerical quadrature over sampled data.
//!
//! The abscissas don't need to be evenly spaced, the only requirement is that they
//! describe at least one interval.

use std::ops::{Add, Mul, Sub};

use crate::ext::Average;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationError {
	#[error("at least 2 points are required to integrate, got {0}")]
	NotEnoughPoints(usize),
	#[error("mismatched lengths: {abscissas} abscissas and {ordinates} ordinates")]
	LengthMismatch { abscissas: usize, ordinates: usize },
}

/// Integrate the piecewise-linear function through the points `(xs[i], ys[i])`
/// using the trapezoidal rule:
///
/// ∫f ≈ Σ (x_{i+1} - x_i) · (f_i + f_{i+1}) / 2
///
/// # Errors
/// - if `xs` and `ys` have different lengths
/// - if fewer than 2 points are provided
pub fn trapezoid<T>(xs: &[T], ys: &[T]) -> Result<T, IntegrationError>
where
	T: Copy + Add<T, Output = T> + Sub<T, Output = T> + Mul<T, Output = T> + Average,
{
	if xs.len() != ys.len() {
		return Err(IntegrationError::LengthMismatch {
			abscissas: xs.len(),
			ordinates: ys.len(),
		});
	}
	if xs.len() < 2 {
		return Err(IntegrationError::NotEnoughPoints(xs.len()));
	}

	xs.windows(2)
		.zip(ys.windows(2))
		.map(|(x, y)| (x[1] - x[0]) * y[0].avg(y[1]))
		.reduce(|acc, cur| acc + cur)
		.ok_or(IntegrationError::NotEnoughPoints(xs.len()))
}

/// Same as [`trapezoid`], but the ordinates are computed on the fly by evaluating
/// `f(i, x)` at every abscissa, where `i` is the index of `x` in `xs`.
///
/// Each ordinate is computed once, so `f` is called exactly `xs.len()` times.
///
/// # Errors
/// - if fewer than 2 points are provided
pub fn trapezoid_by<T, F>(xs: &[T], mut f: F) -> Result<T, IntegrationError>
where
	T: Copy + Add<T, Output = T> + Sub<T, Output = T> + Mul<T, Output = T> + Average,
	F: FnMut(usize, T) -> T,
{
	let (first, rest) = xs
		.split_first()
		.ok_or(IntegrationError::NotEnoughPoints(0))?;
	if rest.is_empty() {
		return Err(IntegrationError::NotEnoughPoints(1));
	}

	let mut prev = (*first, f(0, *first));
	let mut total = None;
	for (i, &x) in rest.iter().enumerate() {
		let y = f(i + 1, x);
		let area = (x - prev.0) * prev.1.avg(y);
		total = Some(match total {
			Some(acc) => acc + area,
			None => area,
		});
		prev = (x, y);
	}

	total.ok_or(IntegrationError::NotEnoughPoints(xs.len()))
}
