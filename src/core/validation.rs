//! Configuration validation support.

use crate::error::ValidationError;

/// Trait for configuration validation.
///
/// Every part of a configuration document implements this trait to check its
/// own local invariants. [`Config`](crate::api::Config) builds on those checks
/// and adds the rules that span several fields.
///
/// Implementations must not mutate the value and must report the first
/// violated rule only.
///
/// # Examples
///
/// ```rust
/// use imagecustomizer_config::core::Validate;
/// use imagecustomizer_config::error::ValidationError;
///
/// struct Bootloader {
///     timeout_seconds: u32,
/// }
///
/// impl Validate for Bootloader {
///     fn validate(&self) -> Result<(), ValidationError> {
///         if self.timeout_seconds > 600 {
///             return Err(ValidationError::invalid_field(
///                 "timeoutSeconds",
///                 "must be <= 600",
///             ));
///         }
///
///         Ok(())
///     }
/// }
///
/// assert!(Bootloader { timeout_seconds: 5 }.validate().is_ok());
/// ```
pub trait Validate {
    /// Validate the value.
    ///
    /// # Errors
    ///
    /// Should return a `ValidationError` describing the first rule that failed.
    fn validate(&self) -> Result<(), ValidationError>;
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Some(value) => value.validate(),
            None => Ok(()),
        }
    }
}
