//! Storage layout: disks and their partitions.

use crate::core::Validate;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The declared disks of the target image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Storage {
    /// Disks in declaration order.
    #[serde(default)]
    pub disks: Vec<Disk>,
}

impl Storage {
    /// Iterate over every partition of every disk, in declaration order.
    pub fn partitions(&self) -> impl Iterator<Item = &Partition> {
        self.disks.iter().flat_map(|disk| disk.partitions.iter())
    }
}

impl Validate for Storage {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.disks.is_empty() {
            return Err(ValidationError::invalid_field(
                "disks",
                "at least one disk must be specified",
            ));
        }

        for (index, disk) in self.disks.iter().enumerate() {
            disk.validate()
                .map_err(|e| e.context(format!("invalid disk at index {}", index)))?;
        }

        let mut seen = HashSet::new();
        for partition in self.partitions() {
            if !seen.insert(partition.id.as_str()) {
                return Err(ValidationError::DuplicatePartitionId {
                    id: partition.id.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Partition table format of a disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartitionTableType {
    /// GUID partition table.
    #[default]
    Gpt,
    /// Master boot record.
    Mbr,
}

/// A disk and the partitions laid out on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Disk {
    /// Partition table format.
    #[serde(default)]
    pub partition_table_type: PartitionTableType,
    /// Size limit of the disk in bytes.
    #[serde(default)]
    pub max_size: Option<u64>,
    /// Partitions in declaration order.
    #[serde(default)]
    pub partitions: Vec<Partition>,
}

impl Validate for Disk {
    fn validate(&self) -> Result<(), ValidationError> {
        for (index, partition) in self.partitions.iter().enumerate() {
            partition
                .validate()
                .map_err(|e| e.context(format!("invalid partition at index {}", index)))?;

            if let (Some(end), Some(max_size)) = (partition.end, self.max_size) {
                if end > max_size {
                    return Err(ValidationError::invalid_field(
                        "maxSize",
                        format!(
                            "partition ({}) ends at {} which is past the disk's maxSize ({})",
                            partition.id, end, max_size
                        ),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// A single partition. Only its `id` matters for cross-field rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Partition {
    /// Identifier, unique across the whole storage layout.
    pub id: String,
    /// GPT partition label.
    #[serde(default)]
    pub label: Option<String>,
    /// Start offset in bytes.
    #[serde(default)]
    pub start: Option<u64>,
    /// End offset in bytes (exclusive).
    #[serde(default)]
    pub end: Option<u64>,
    /// Partition type, e.g. `esp` or `root`.
    #[serde(default, rename = "type")]
    pub partition_type: Option<String>,
}

impl Partition {
    /// Create a partition with just an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl Validate for Partition {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::invalid_field("id", "must not be empty"));
        }

        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start >= end {
                return Err(ValidationError::invalid_field(
                    "end",
                    format!(
                        "partition ({}) end ({}) must be greater than start ({})",
                        self.id, end, start
                    ),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disk(ids: &[&str]) -> Disk {
        Disk {
            partitions: ids.iter().map(|id| Partition::new(*id)).collect(),
            ..Disk::default()
        }
    }

    #[test]
    fn test_valid_storage() {
        let storage = Storage {
            disks: vec![disk(&["esp", "root"]), disk(&["data"])],
        };
        assert!(storage.validate().is_ok());
    }

    #[test]
    fn test_empty_storage_rejected() {
        let storage = Storage::default();
        assert!(matches!(
            storage.validate(),
            Err(ValidationError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_duplicate_ids_across_disks_rejected() {
        let storage = Storage {
            disks: vec![disk(&["esp", "root"]), disk(&["root"])],
        };
        assert_eq!(
            storage.validate(),
            Err(ValidationError::DuplicatePartitionId { id: "root".into() })
        );
    }

    #[test]
    fn test_partitions_iterates_in_declaration_order() {
        let storage = Storage {
            disks: vec![disk(&["a", "b"]), disk(&["c"])],
        };
        let ids: Vec<_> = storage.partitions().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_partition_id_is_wrapped_with_position() {
        let storage = Storage {
            disks: vec![disk(&["esp"]), disk(&["data", ""])],
        };
        let err = storage.validate().unwrap_err();
        assert_eq!(
            err.context_path(),
            vec!["invalid disk at index 1", "invalid partition at index 1"]
        );
    }

    #[test]
    fn test_partition_end_before_start_rejected() {
        let partition = Partition {
            start: Some(4096),
            end: Some(1024),
            ..Partition::new("root")
        };
        assert!(partition.validate().is_err());
    }

    #[test]
    fn test_partition_past_max_size_rejected() {
        let disk = Disk {
            max_size: Some(1 << 20),
            partitions: vec![Partition {
                start: Some(0),
                end: Some(2 << 20),
                ..Partition::new("root")
            }],
            ..Disk::default()
        };
        let err = disk.validate().unwrap_err();
        assert!(err.to_string().contains("maxSize"));
    }
}
