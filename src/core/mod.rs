//! Validation trait and document loading.

mod loader;
mod validation;

pub use loader::ConfigLoader;
pub use validation::Validate;
