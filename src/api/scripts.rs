//! Scripts run at the end of customization.

use crate::core::Validate;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Scripts grouped by the stage they run in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Scripts {
    /// Run after all other customizations.
    #[serde(default)]
    pub post_customization: Vec<Script>,
    /// Run last, after the image has been finalized.
    #[serde(default)]
    pub finalize_customization: Vec<Script>,
}

impl Validate for Scripts {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_stage("postCustomization", &self.post_customization)?;
        validate_stage("finalizeCustomization", &self.finalize_customization)
    }
}

fn validate_stage(stage: &str, scripts: &[Script]) -> Result<(), ValidationError> {
    for (index, script) in scripts.iter().enumerate() {
        script
            .validate()
            .map_err(|e| e.context(format!("invalid '{}' item at index {}", stage, index)))?;
    }
    Ok(())
}

/// A script file, relative to the directory of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Script {
    /// Path to the script.
    pub path: String,
    /// Arguments passed to the script.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Validate for Script {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.path.is_empty() {
            return Err(ValidationError::invalid_field("path", "must not be empty"));
        }

        if Path::new(&self.path).is_absolute() {
            return Err(ValidationError::invalid_field(
                "path",
                format!(
                    "({}) must be relative to the config file's directory",
                    self.path
                ),
            ));
        }

        Ok(())
    }
}
