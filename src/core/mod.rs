//! Core module - loading, reference resolution, and the error taxonomy

pub mod context;
pub mod error;
pub mod loader;

pub use context::{build_resume_context, ResumeSections, TemplateContext};
pub use error::{ConfigError, DataError, Error, TemplateError};
pub use loader::{load_personal_info, load_shared_data};
