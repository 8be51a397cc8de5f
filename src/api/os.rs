//! OS-level settings, including the boot-loader reset policy and verity.

use super::reset::null_as_default;
use super::{KernelCommandLine, ResetBootLoaderType, Verity};
use crate::core::Validate;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

const MAX_HOSTNAME_LEN: usize = 64;

/// Settings applied to the operating system inside the image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Os {
    /// Whether the boot loader configuration is regenerated.
    #[serde(default, deserialize_with = "null_as_default")]
    pub reset_boot_loader_type: ResetBootLoaderType,
    /// System hostname.
    #[serde(default)]
    pub hostname: Option<String>,
    /// Extra kernel arguments.
    #[serde(default)]
    pub kernel_command_line: Option<KernelCommandLine>,
    /// Integrity protection for a partition.
    #[serde(default)]
    pub verity: Option<Verity>,
}

impl Validate for Os {
    fn validate(&self) -> Result<(), ValidationError> {
        self.reset_boot_loader_type
            .validate()
            .map_err(|e| e.context("invalid 'resetBootLoaderType' field"))?;

        if let Some(hostname) = &self.hostname {
            validate_hostname(hostname)?;
        }

        self.kernel_command_line
            .validate()
            .map_err(|e| e.context("invalid 'kernelCommandLine' field"))?;

        self.verity
            .validate()
            .map_err(|e| e.context("invalid 'verity' field"))?;

        Ok(())
    }
}

fn validate_hostname(hostname: &str) -> Result<(), ValidationError> {
    if hostname.is_empty() || hostname.len() > MAX_HOSTNAME_LEN {
        return Err(ValidationError::invalid_field(
            "hostname",
            format!("must be between 1 and {} characters", MAX_HOSTNAME_LEN),
        ));
    }

    if hostname.starts_with('-') || hostname.ends_with('-') {
        return Err(ValidationError::invalid_field(
            "hostname",
            format!("({}) must not start or end with '-'", hostname),
        ));
    }

    if let Some(c) = hostname
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '-')
    {
        return Err(ValidationError::invalid_field(
            "hostname",
            format!("({}) contains invalid character {:?}", hostname, c),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::IdentifiedPartition;

    #[test]
    fn test_default_os_is_valid() {
        assert!(Os::default().validate().is_ok());
    }

    #[test]
    fn test_hostnames() {
        assert!(validate_hostname("image-builder01").is_ok());
        assert!(validate_hostname("").is_err());
        assert!(validate_hostname("-leading").is_err());
        assert!(validate_hostname("trailing-").is_err());
        assert!(validate_hostname("under_score").is_err());
        assert!(validate_hostname(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_invalid_verity_is_wrapped() {
        let os = Os {
            verity: Some(Verity {
                id: "rootverity".into(),
                name: String::new(),
                data_partition: IdentifiedPartition::Id("root".into()),
                hash_partition: IdentifiedPartition::Id("roothash".into()),
                corruption_option: Default::default(),
            }),
            ..Os::default()
        };
        let err = os.validate().unwrap_err();
        assert_eq!(err.context_path(), vec!["invalid 'verity' field"]);
    }

    #[test]
    fn test_invalid_kernel_command_line_is_wrapped() {
        let os = Os {
            kernel_command_line: Some(KernelCommandLine {
                extra_command_line: "quiet\nsplash".into(),
            }),
            ..Os::default()
        };
        let err = os.validate().unwrap_err();
        assert!(err.to_string().starts_with("invalid 'kernelCommandLine' field:\n"));
    }
}
