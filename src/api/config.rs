//! The configuration document and its cross-field rules.

use super::reset::null_as_default;
use super::{Iso, Os, ResetPartitionsUuidsType, Scripts, Storage};
use crate::core::Validate;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// A complete image customization document.
///
/// # Examples
///
/// ```rust
/// use imagecustomizer_config::prelude::*;
///
/// let config = Config {
///     storage: Some(Storage {
///         disks: vec![Disk {
///             partitions: vec![Partition::new("p1")],
///             ..Disk::default()
///         }],
///     }),
///     os: Some(Os {
///         reset_boot_loader_type: ResetBootLoaderType::HardReset,
///         ..Os::default()
///     }),
///     ..Config::default()
/// };
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// New partition layout for the image.
    #[serde(default)]
    pub storage: Option<Storage>,
    /// Whether to regenerate partition UUIDs of the existing layout.
    #[serde(default, deserialize_with = "null_as_default")]
    pub reset_partitions_uuids_type: ResetPartitionsUuidsType,
    /// Live ISO output options.
    #[serde(default)]
    pub iso: Option<Iso>,
    /// OS-level settings.
    #[serde(default)]
    pub os: Option<Os>,
    /// Customization scripts.
    #[serde(default)]
    pub scripts: Option<Scripts>,
}

impl Validate for Config {
    /// Validate every field, then the rules that span several fields.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    ///
    /// 1. `storage`
    /// 2. `resetPartitionsUuidsType`
    /// 3. `iso` (wrapped as `invalid 'iso' field`)
    /// 4. `os` (wrapped as `invalid 'os' field`)
    /// 5. `scripts`
    /// 6. `storage` and a partition UUID reset are mutually exclusive
    /// 7. `storage` requires `os.resetBootLoaderType`
    /// 8. a partition UUID reset requires `os.resetBootLoaderType`
    /// 9. verity partitions must resolve against `storage`
    fn validate(&self) -> Result<(), ValidationError> {
        debug!("validating image customization config");

        let mut has_storage = false;
        if let Some(storage) = &self.storage {
            storage.validate()?;
            has_storage = true;
        }

        self.reset_partitions_uuids_type.validate()?;
        let has_reset_partitions_uuids = self.reset_partitions_uuids_type.is_reset();

        if let Some(iso) = &self.iso {
            iso.validate().map_err(|e| e.context("invalid 'iso' field"))?;
        }

        let mut has_reset_boot_loader = false;
        if let Some(os) = &self.os {
            os.validate().map_err(|e| e.context("invalid 'os' field"))?;
            has_reset_boot_loader = os.reset_boot_loader_type.is_reset();
        }

        if let Some(scripts) = &self.scripts {
            scripts.validate()?;
        }

        trace!(
            has_storage,
            has_reset_partitions_uuids,
            has_reset_boot_loader,
            "local checks passed"
        );

        if has_storage && has_reset_partitions_uuids {
            return Err(ValidationError::MutuallyExclusive {
                first: "storage",
                second: "resetPartitionsUuidsType",
            });
        }

        if has_storage && !has_reset_boot_loader {
            return Err(ValidationError::MissingPrerequisite {
                required: "os.resetBootLoaderType",
                trigger: "storage",
            });
        }

        if has_reset_partitions_uuids && !has_reset_boot_loader {
            return Err(ValidationError::MissingPrerequisite {
                required: "os.resetBootLoaderType",
                trigger: "resetPartitionsUuidsType",
            });
        }

        if let Some(verity) = self.os.as_ref().and_then(|os| os.verity.as_ref()) {
            verity.check_partitions(self.storage.as_ref())?;
        }

        debug!("image customization config is valid");
        Ok(())
    }
}
