//! Vitae: resume generation from plain-text YAML data pools.
//!
//! One directory of YAML files holds every experience, project, degree and
//! publication you have ever listed; a profile picks and orders records out
//! of that pool for one resume variant, and a Tera template turns the
//! resolved selection into LaTeX (or any other text format).

pub mod cli;
pub mod core;
pub mod entities;
pub mod render;
pub mod yaml;
