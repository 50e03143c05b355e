//! Errors that can happen when binding input values to a record.
use std::any::type_name;
use std::fmt;

#[cfg(feature = "http")]
use http::StatusCode;

/// The error returned by [`from_source`] and the other binding entrypoints when binding fails.
///
/// The first three variants signal a malformed call site: they are programmer errors and
/// they are detected before any field is touched.
/// [`BindError::ConversionFailed`], instead, is caused by the input data.
/// Use [`BindError::is_invalid_input`] to tell the two groups apart.
///
/// [`from_source`]: crate::from_source
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BindError {
    /// The binding target was passed by value rather than via a mutable reference.
    #[error(
        "The binding target must be a mutable reference, but a `{type_name}` was passed by value"
    )]
    NotAReference {
        /// The type of the value that was passed as binding target.
        type_name: &'static str,
    },
    /// The binding target is a null reference.
    #[error("The binding target is a null reference to a `{type_name}`")]
    NilTarget {
        /// The type of the record the null reference should have pointed to.
        type_name: &'static str,
    },
    /// The binding target points to a value that isn't a record (e.g. a `bool`).
    #[error("The binding target must be a record, but it points to a `{type_name}`")]
    NotARecord {
        /// The type of the value the binding target points to.
        type_name: &'static str,
    },
    #[error(transparent)]
    /// See [`ConversionError`] for details.
    ConversionFailed(#[from] ConversionError),
}

impl BindError {
    pub(crate) fn not_a_reference<T: ?Sized>() -> Self {
        Self::NotAReference {
            type_name: type_name::<T>(),
        }
    }

    pub(crate) fn nil_target<T: ?Sized>() -> Self {
        Self::NilTarget {
            type_name: type_name::<T>(),
        }
    }

    pub(crate) fn not_a_record<T: ?Sized>() -> Self {
        Self::NotARecord {
            type_name: type_name::<T>(),
        }
    }

    /// Returns `true` if binding failed because of the input data, `false` if it failed
    /// because of an invalid binding target.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, BindError::ConversionFailed(_))
    }

    /// The status code that should be returned to the caller when binding data
    /// from an incoming request fails.
    ///
    /// It returns `400 Bad Request` if the input data couldn't be converted.
    /// It returns `500 Internal Server Error` if the binding target is invalid, since
    /// the caller can't do anything to fix it.
    #[cfg(feature = "http")]
    pub fn status_code(&self) -> StatusCode {
        if self.is_invalid_input() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// A raw input value couldn't be converted into the type of the field it was bound to.
///
/// It is also returned when values are supplied for a field whose type has
/// no conversion rule (e.g. a `HashMap`).
#[derive(Debug)]
pub struct ConversionError {
    value: String,
    target_type: &'static str,
    key: Option<String>,
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl ConversionError {
    pub(crate) fn new<T: ?Sized>(
        value: &str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            value: value.to_owned(),
            target_type: type_name::<T>(),
            key: None,
            source: source.into(),
        }
    }

    pub(crate) fn unsupported<T: ?Sized>(value: &str) -> Self {
        Self::new::<T>(
            value,
            UnsupportedType {
                name: type_name::<T>(),
            },
        )
    }

    /// Record the lookup key of the field that failed to bind.
    pub(crate) fn at_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_owned());
        self
    }

    /// The raw value that couldn't be converted.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The name of the type the raw value should have been converted into.
    pub fn target_type(&self) -> &'static str {
        self.target_type
    }

    /// The lookup key of the field that failed to bind.
    ///
    /// It's `None` if the error was produced outside of a binding operation, e.g. when
    /// invoking [`Scalar::parse`](crate::Scalar::parse) directly.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot convert `{}` into `{}`",
            self.value, self.target_type
        )?;
        if let Some(key) = &self.key {
            write!(f, " for `{key}`")?;
        }
        write!(f, ": {}", self.source)
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("there is no rule to build a `{name}` out of a string")]
struct UnsupportedType {
    name: &'static str,
}

#[derive(Debug, thiserror::Error)]
#[error("expected one of `true`, `false`, `t`, `f`, `1` or `0`, ignoring case")]
pub(crate) struct InvalidBoolLiteral;

#[derive(Debug, thiserror::Error)]
#[error("unsigned integers can't carry a sign")]
pub(crate) struct UnexpectedSign;
