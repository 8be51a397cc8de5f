//! ISO output options.

use crate::core::Validate;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Options applied when the output is a live ISO.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Iso {
    /// Extra kernel arguments for the ISO boot entry.
    #[serde(default)]
    pub kernel_command_line: Option<KernelCommandLine>,
}

impl Validate for Iso {
    fn validate(&self) -> Result<(), ValidationError> {
        self.kernel_command_line
            .validate()
            .map_err(|e| e.context("invalid 'kernelCommandLine' field"))
    }
}

/// Additional kernel command line arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct KernelCommandLine {
    /// Arguments appended verbatim to the kernel command line.
    #[serde(default)]
    pub extra_command_line: String,
}

impl Validate for KernelCommandLine {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.extra_command_line.contains(['\n', '\r']) {
            return Err(ValidationError::invalid_field(
                "extraCommandLine",
                "must not contain newline characters",
            ));
        }

        Ok(())
    }
}
