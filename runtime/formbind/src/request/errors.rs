//! Errors that can happen when binding data from an incoming request.
use http::StatusCode;
use ubyte::ByteUnit;

use crate::errors::BindError;

/// The error returned by [`from_request`] and [`FormData::from_request`] when the extraction fails.
///
/// [`from_request`]: crate::request::from_request
/// [`FormData::from_request`]: crate::FormData::from_request
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ExtractFormError {
    #[error(transparent)]
    /// See [`MissingFormContentType`] for details.
    MissingContentType(#[from] MissingFormContentType),
    #[error(transparent)]
    /// See [`FormContentTypeMismatch`] for details.
    ContentTypeMismatch(#[from] FormContentTypeMismatch),
    #[error(transparent)]
    /// See [`SizeLimitExceeded`] for details.
    SizeLimitExceeded(#[from] SizeLimitExceeded),
    #[error(transparent)]
    /// See [`BindError`] for details.
    Bind(#[from] BindError),
}

impl ExtractFormError {
    /// The status code that should be returned to the caller.
    ///
    /// - `415 Unsupported Media Type` if the request body isn't a URL-encoded form;
    /// - `413 Payload Too Large` if the body exceeds the configured size limit;
    /// - the status code of the underlying [`BindError`] if binding failed.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ExtractFormError::MissingContentType(_) | ExtractFormError::ContentTypeMismatch(_) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            ExtractFormError::SizeLimitExceeded(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ExtractFormError::Bind(e) => e.status_code(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error(
    "The `Content-Type` header is missing. This endpoint expects requests with a `Content-Type` header set to `application/x-www-form-urlencoded`"
)]
#[non_exhaustive]
/// The request has a body, but the `Content-Type` header is missing.
pub struct MissingFormContentType;

#[derive(Debug, thiserror::Error)]
#[error(
    "The `Content-Type` header was set to `{actual}`. This endpoint expects requests with a `Content-Type` header set to `application/x-www-form-urlencoded`"
)]
#[non_exhaustive]
/// The `Content-Type` header not set to `application/x-www-form-urlencoded`.
pub struct FormContentTypeMismatch {
    /// The actual value of the `Content-Type` header for this request.
    pub actual: String,
}

#[derive(Debug, thiserror::Error)]
#[error("The request body is larger than the maximum size limit enforced by this server.")]
#[non_exhaustive]
/// The request body is larger than the configured [`BodySizeLimit`].
///
/// [`BodySizeLimit`]: crate::request::BodySizeLimit
pub struct SizeLimitExceeded {
    /// The maximum size limit enforced by this server.
    pub max_size: ByteUnit,
    /// The actual size of the request body, in bytes.
    pub body_size: usize,
    /// The value of the `Content-Length` header, if it was set to a valid number.
    pub content_length: Option<usize>,
}
