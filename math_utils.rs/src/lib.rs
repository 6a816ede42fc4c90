pub mod ext;
pub mod integration;
pub mod linspace;
pub mod stats;
