//! Configuration source implementations.

mod config_source;
mod file;
mod inline;

pub use config_source::{ConfigSource, Format};
pub use file::FileSource;
pub use inline::InlineSource;
