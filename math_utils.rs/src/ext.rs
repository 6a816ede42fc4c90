#![allow(clippy::cast_precision_loss)]

pub trait MultiplyByUsize {
	#[must_use]
	fn mul_usize(self, rhs: usize) -> Self;
}

pub trait DivisibleByUsize {
	#[must_use]
	fn div_usize(self, rhs: usize) -> Self;
}

/// Arithmetic mean of two values.
pub trait Average {
	#[must_use]
	fn avg(self, rhs: Self) -> Self;
}

macro_rules! impl_ext_for_float {
	($t:ty) => {
		impl MultiplyByUsize for $t {
			fn mul_usize(self, rhs: usize) -> Self {
				self * rhs as Self
			}
		}

		impl DivisibleByUsize for $t {
			fn div_usize(self, rhs: usize) -> Self {
				self / rhs as Self
			}
		}

		impl Average for $t {
			fn avg(self, rhs: Self) -> Self {
				self / 2. + rhs / 2.
			}
		}
	};
	($t:ty, $($others:ty),+) => {
		impl_ext_for_float!($t);
		impl_ext_for_float!($($others),+);
	};
}

impl_ext_for_float!(f32, f64);
