//! Error types for imagecustomizer-config.

/// Result type alias for loading operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when loading a configuration document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the document from its source.
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    /// Failed to deserialize the document.
    #[error("Failed to deserialize configuration: {0}")]
    DeserializationError(String),

    /// The document was parsed but is not a valid configuration.
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),

    /// IO error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Attempted to use a file format whose cargo feature is not enabled.
    #[error("Feature not enabled: {0}")]
    FeatureNotEnabled(&'static str),
}

/// Validation error for configuration documents.
///
/// Validation stops at the first violated rule, so a failed validation yields
/// exactly one of these. Nested failures are wrapped in [`ValidationError::Context`],
/// which keeps the underlying error reachable through
/// [`std::error::Error::source`] and [`ValidationError::root_cause`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Custom validation error with a message.
    #[error("{0}")]
    Custom(String),

    /// A specific field has an invalid value.
    #[error("Field '{field}' is invalid: {reason}")]
    InvalidField {
        /// The field name/path
        field: String,
        /// The reason why it's invalid
        reason: String,
    },

    /// Two partitions in the storage layout share an `id`.
    #[error("duplicate partition 'id' ({id})")]
    DuplicatePartitionId {
        /// The repeated identifier
        id: String,
    },

    /// Two mutually exclusive top-level fields were both specified.
    #[error("{first} and {second} cannot be specified together")]
    MutuallyExclusive {
        /// Field path of the first strategy
        first: &'static str,
        /// Field path of the second strategy
        second: &'static str,
    },

    /// A field was specified that requires another field to be specified too.
    #[error("{required} must be specified if {trigger} is specified")]
    MissingPrerequisite {
        /// Field path that must be present
        required: &'static str,
        /// Field path that triggered the requirement
        trigger: &'static str,
    },

    /// A partition was referenced by `id` but no storage layout was declared.
    #[error("'idType' cannot be 'id' if 'storage' is not specified")]
    MissingStorage,

    /// A partition referenced by `id` is not part of the storage layout.
    #[error("partition with 'id' ({id}) not found")]
    PartitionNotFound {
        /// The identifier that did not resolve
        id: String,
    },

    /// A nested failure annotated with where it happened.
    #[error("{context}:\n{source}")]
    Context {
        /// Description of the enclosing field
        context: String,
        /// The nested failure
        #[source]
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Create a custom validation error.
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Create an invalid field error.
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Wrap this error with a description of the enclosing field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imagecustomizer_config::error::ValidationError;
    ///
    /// let err = ValidationError::MissingStorage.context("invalid verity 'dataPartition'");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "invalid verity 'dataPartition':\n'idType' cannot be 'id' if 'storage' is not specified"
    /// );
    /// assert_eq!(err.root_cause(), &ValidationError::MissingStorage);
    /// ```
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error beneath any number of [`ValidationError::Context`] layers.
    pub fn root_cause(&self) -> &ValidationError {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source;
        }
        current
    }

    /// The context descriptions from the outermost layer inwards.
    pub fn context_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = self;
        while let Self::Context { context, source } = current {
            path.push(context.as_str());
            current = source;
        }
        path
    }
}
