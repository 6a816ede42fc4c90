#![allow(clippy::cast_precision_loss)]

#[cfg(feature = "analysis")]
pub mod analysis;
#[cfg(feature = "formats")]
pub mod formats;
#[cfg(feature = "synthesis")]
pub mod synthesis;

mod common;
pub use common::*;

mod angular_frequency;
pub use angular_frequency::*;

mod signal;
pub use signal::*;

mod harmonic;
pub use harmonic::*;

mod coefficients;
pub use coefficients::*;
