//! Error types for binding environment variables

use std::fmt;

/// Errors returned by [`bind`](crate::bind) and [`Binder::bind`](crate::Binder::bind).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The bind call itself was malformed.
    ///
    /// Detected before any field is visited, so the record is left untouched.
    #[error("envvar: {0}")]
    InvalidArgument(String),

    /// One or more fields could not be bound.
    #[error(transparent)]
    Fields(#[from] ErrorList),
}

impl Error {
    /// Field-level errors, empty for [`Error::InvalidArgument`].
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::InvalidArgument(_) => &[],
            Self::Fields(list) => list.as_slice(),
        }
    }
}

/// A single field that could not be bound.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    /// Required environment variable is not set and the field has no default.
    #[error("Missing required environment variable: {name}")]
    UnsetVariable {
        /// Fully prefixed key that was looked up
        name: String,
    },

    /// A value was found but could not be converted into the field's type.
    ///
    /// Custom parser failures end up here too, with the parser's error as
    /// `source`.
    #[error("Error parsing environment variable {name}: {value} ({source})")]
    InvalidVariable {
        /// Fully prefixed key the value came from
        name: String,
        /// Raw value, from the environment or the default annotation
        value: String,
        /// Why the conversion failed
        #[source]
        source: anyhow::Error,
    },

    /// The field cannot be bound at all.
    ///
    /// Either its type has no conversion, or its annotations are not valid for
    /// its kind (a default on a nested record).
    #[error("Unsupported struct field {name}: {reason}")]
    UnsupportedField {
        /// Field identifier as declared
        name: String,
        /// What is wrong with the field
        reason: String,
    },
}

impl FieldError {
    pub(crate) fn unset(name: impl Into<String>) -> Self {
        Self::UnsetVariable { name: name.into() }
    }

    pub(crate) fn invalid(
        name: impl Into<String>,
        value: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::InvalidVariable {
            name: name.into(),
            value: value.into(),
            source: source.into(),
        }
    }

    pub(crate) fn unsupported(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedField {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Every field-level error collected during one bind, in the order the
/// fields were visited (depth-first, declaration order).
#[derive(Debug, Default)]
pub struct ErrorList {
    errors: Vec<FieldError>,
}

impl ErrorList {
    pub(crate) fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Number of field errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `true` when no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The errors in visiting order.
    pub fn as_slice(&self) -> &[FieldError] {
        &self.errors
    }

    /// Iterate over the errors in visiting order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Take the errors out of the list.
    pub fn into_vec(self) -> Vec<FieldError> {
        self.errors
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "envvar: {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorList {}

impl IntoIterator for ErrorList {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
