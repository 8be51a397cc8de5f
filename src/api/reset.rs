//! Reset policies for partition UUIDs and the boot loader.

use crate::core::Validate;
use crate::error::ValidationError;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize an explicit `null` the same way as an absent key.
///
/// Used with `#[serde(default, deserialize_with = "null_as_default")]` on
/// policy fields, so YAML `~` and JSON `null` both select the default variant.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whether partition UUIDs are regenerated during the image build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetPartitionsUuidsType {
    /// Leave partition UUIDs untouched.
    #[default]
    #[serde(rename = "")]
    Default,
    /// Regenerate the UUIDs of every partition.
    #[serde(rename = "reset-all")]
    ResetAll,
}

impl ResetPartitionsUuidsType {
    /// Whether a reset was requested.
    pub fn is_reset(self) -> bool {
        self != Self::Default
    }
}

// Unknown values never get past deserialization.
impl Validate for ResetPartitionsUuidsType {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Whether the boot loader configuration is regenerated to match a new layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetBootLoaderType {
    /// Keep the existing boot loader configuration.
    #[default]
    #[serde(rename = "")]
    Default,
    /// Rewrite the boot loader configuration from scratch.
    #[serde(rename = "hard-reset")]
    HardReset,
}

impl ResetBootLoaderType {
    /// Whether a reset was requested.
    pub fn is_reset(self) -> bool {
        self != Self::Default
    }
}

impl Validate for ResetBootLoaderType {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
