mod synthesizer;
pub use synthesizer::*;

mod harmonic_table;
pub use harmonic_table::*;

mod form;
pub use form::*;
