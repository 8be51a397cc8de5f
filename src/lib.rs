//! # imagecustomizer-config
//!
//! Validation of disk-image customization documents before any image
//! operation is attempted.
//!
//! ## Overview
//!
//! A document describes how to partition, format and mutate a system image:
//! a storage layout, a partition UUID reset policy, ISO options, OS settings
//! with optional dm-verity protection, and customization scripts. Each part
//! checks its own shape; on top of that the document must be consistent as a
//! whole:
//!
//! - `storage` and `resetPartitionsUuidsType` cannot be used together
//! - either of them requires `os.resetBootLoaderType`
//! - verity partitions referenced by `id` must exist in `storage`
//!
//! Validation is a pure function over an immutable document. It stops at the
//! first violated rule and never modifies the document.
//!
//! ## Quick Start
//!
//! ```rust
//! use imagecustomizer_config::prelude::*;
//! use imagecustomizer_config::sources::InlineSource;
//!
//! let source = InlineSource::yaml(
//!     r#"
//! storage:
//!   disks:
//!   - partitions:
//!     - id: root
//!     - id: roothash
//! os:
//!   resetBootLoaderType: hard-reset
//!   verity:
//!     id: rootverity
//!     name: root
//!     dataDeviceId: root
//!     hashDeviceId: roothash
//! "#,
//! );
//!
//! let config = ConfigLoader::new().load(&source).unwrap();
//! assert!(config.validate().is_ok());
//! ```
//!
//! ## Feature Flags
//!
//! - `yaml` (default): load YAML documents
//! - `json` (default): load JSON documents

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod api;
pub mod core;
pub mod error;
pub mod sources;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::api::{
        Config, CorruptionOption, Disk, IdType, IdentifiedPartition, Iso, KernelCommandLine, Os,
        Partition, ResetBootLoaderType, ResetPartitionsUuidsType, Script, Scripts, Storage, Verity,
    };
    pub use crate::core::{ConfigLoader, Validate};
    pub use crate::error::{ConfigError, Result, ValidationError};
}
