//! Typed references to partitions and their resolution against a storage layout.

use super::Storage;
use crate::core::Validate;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// How an [`IdentifiedPartition`] addresses its partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdType {
    /// The `id` of a partition declared in `storage`.
    Id,
    /// The GPT partition label.
    PartLabel,
    /// The filesystem UUID.
    Uuid,
    /// The GPT partition UUID.
    PartUuid,
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Id => "id",
            Self::PartLabel => "part-label",
            Self::Uuid => "uuid",
            Self::PartUuid => "part-uuid",
        };
        f.write_str(name)
    }
}

/// A reference to a partition.
///
/// In a document this is either a bare string, which addresses a partition by
/// its storage `id`, or a map with explicit `idType` and `id` keys:
///
/// ```yaml
/// dataDeviceId: root
/// hashDeviceId:
///   idType: part-label
///   id: roothash
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawIdentifiedPartition", into = "RawIdentifiedPartition")]
pub enum IdentifiedPartition {
    /// By the `id` of a partition declared in `storage`.
    Id(String),
    /// By GPT partition label.
    PartLabel(String),
    /// By filesystem UUID.
    Uuid(String),
    /// By GPT partition UUID.
    PartUuid(String),
}

impl IdentifiedPartition {
    /// Build a reference from its kind and identifier.
    pub fn new(id_type: IdType, id: impl Into<String>) -> Self {
        let id = id.into();
        match id_type {
            IdType::Id => Self::Id(id),
            IdType::PartLabel => Self::PartLabel(id),
            IdType::Uuid => Self::Uuid(id),
            IdType::PartUuid => Self::PartUuid(id),
        }
    }

    /// The addressing mode.
    pub fn id_type(&self) -> IdType {
        match self {
            Self::Id(_) => IdType::Id,
            Self::PartLabel(_) => IdType::PartLabel,
            Self::Uuid(_) => IdType::Uuid,
            Self::PartUuid(_) => IdType::PartUuid,
        }
    }

    /// The literal identifier.
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) | Self::PartLabel(id) | Self::Uuid(id) | Self::PartUuid(id) => id,
        }
    }

    /// Check that an `id` reference names a partition declared in `storage`.
    ///
    /// References of any other kind are resolved on the target system and are
    /// always accepted here. Partitions are scanned in declaration order and
    /// the first match wins.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingStorage`] if this is an `id` reference and
    ///   `storage` is `None`.
    /// - [`ValidationError::PartitionNotFound`] if no partition has the `id`.
    pub fn ensure_exists(&self, storage: Option<&Storage>) -> Result<(), ValidationError> {
        let Self::Id(id) = self else {
            return Ok(());
        };

        let storage = storage.ok_or(ValidationError::MissingStorage)?;

        if storage.partitions().any(|partition| partition.id == *id) {
            trace!(partition_id = %id, "resolved partition reference");
            return Ok(());
        }

        Err(ValidationError::PartitionNotFound { id: id.clone() })
    }
}

impl Validate for IdentifiedPartition {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.id().is_empty() {
            return Err(ValidationError::invalid_field(
                "id",
                format!("must not be empty for idType '{}'", self.id_type()),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for IdentifiedPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id_type(), self.id())
    }
}

/// Wire shape of [`IdentifiedPartition`].
#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged, expecting = "a partition id or a map with 'idType' and 'id'")]
enum RawIdentifiedPartition {
    Short(String),
    Tagged(TaggedPartition),
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct TaggedPartition {
    id_type: IdType,
    id: String,
}

impl From<RawIdentifiedPartition> for IdentifiedPartition {
    fn from(raw: RawIdentifiedPartition) -> Self {
        match raw {
            RawIdentifiedPartition::Short(id) => Self::Id(id),
            RawIdentifiedPartition::Tagged(tagged) => Self::new(tagged.id_type, tagged.id),
        }
    }
}

impl From<IdentifiedPartition> for RawIdentifiedPartition {
    fn from(partition: IdentifiedPartition) -> Self {
        match partition {
            IdentifiedPartition::Id(id) => Self::Short(id),
            other => Self::Tagged(TaggedPartition {
                id_type: other.id_type(),
                id: other.id().to_string(),
            }),
        }
    }
}
