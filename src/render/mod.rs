//! Template rendering

pub mod generator;
pub mod latex;

pub use generator::Generator;
