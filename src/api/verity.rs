//! dm-verity protection of a data partition by a hash partition.

use super::reset::null_as_default;
use super::{IdentifiedPartition, Storage};
use crate::core::Validate;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// How the kernel reacts when verity detects corrupted blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorruptionOption {
    /// Fail the read with an I/O error.
    #[default]
    #[serde(rename = "", alias = "io-error")]
    IoError,
    /// Log the corruption and carry on.
    #[serde(rename = "ignore")]
    Ignore,
    /// Panic the kernel.
    #[serde(rename = "panic")]
    Panic,
    /// Restart the system.
    #[serde(rename = "restart")]
    Restart,
}

impl Validate for CorruptionOption {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// A verity device binding a data partition to its hash partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Verity {
    /// Correlates this verity device with a filesystem entry.
    pub id: String,
    /// Name of the mapper block device (`root` for the root filesystem).
    pub name: String,
    /// The partition holding the protected data.
    #[serde(rename = "dataDeviceId")]
    pub data_partition: IdentifiedPartition,
    /// The partition holding the hash tree.
    #[serde(rename = "hashDeviceId")]
    pub hash_partition: IdentifiedPartition,
    /// Reaction to detected corruption.
    #[serde(default, deserialize_with = "null_as_default")]
    pub corruption_option: CorruptionOption,
}

impl Verity {
    /// Check that both partition references resolve against `storage`.
    ///
    /// The data partition is checked first; the hash partition is only
    /// checked once the data partition resolved.
    ///
    /// # Errors
    ///
    /// The resolver's error wrapped as `invalid verity 'dataPartition'` or
    /// `invalid verity 'hashPartition'`.
    pub fn check_partitions(&self, storage: Option<&Storage>) -> Result<(), ValidationError> {
        self.data_partition
            .ensure_exists(storage)
            .map_err(|e| e.context("invalid verity 'dataPartition'"))?;

        self.hash_partition
            .ensure_exists(storage)
            .map_err(|e| e.context("invalid verity 'hashPartition'"))?;

        Ok(())
    }
}

impl Validate for Verity {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::invalid_field("id", "must not be empty"));
        }

        if self.name.is_empty() {
            return Err(ValidationError::invalid_field("name", "must not be empty"));
        }

        self.data_partition
            .validate()
            .map_err(|e| e.context("invalid 'dataDeviceId' field"))?;

        self.hash_partition
            .validate()
            .map_err(|e| e.context("invalid 'hashDeviceId' field"))?;

        self.corruption_option
            .validate()
            .map_err(|e| e.context("invalid 'corruptionOption' field"))?;

        Ok(())
    }
}
