//! Bind data from incoming HTTP requests.
//!
//! Form fields are collected from the body of `POST`, `PUT` and `PATCH` requests, if they
//! carry an `application/x-www-form-urlencoded` payload, and from the query string.
//! Values from the body come first.
//!
//! # Example
//!
//! ```rust
//! use formbind::request::{FormConfig, from_request};
//!
//! #[derive(formbind::Record, Default)]
//! pub struct Search {
//!     q: String,
//!     page: Option<u32>,
//! }
//!
//! let request = http::Request::post("/search?page=2")
//!     .header("content-type", "application/x-www-form-urlencoded")
//!     .body("q=rust+forms")
//!     .unwrap();
//! let mut search = Search::default();
//! from_request(&request, &FormConfig::default(), &mut search).unwrap();
//!
//! assert_eq!(search.q, "rust forms");
//! assert_eq!(search.page, Some(2));
//! ```
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderMap, Method, Request};

pub use config::{BodySizeLimit, FormConfig};
use errors::{ExtractFormError, FormContentTypeMismatch, MissingFormContentType, SizeLimitExceeded};

use crate::form::FormData;
use crate::record::Target;

mod config;
pub mod errors;

/// Collect the form fields of `request` and populate `target` with them.
///
/// Check out [`FormData::from_request`] for the extraction rules and
/// [`from_source`](crate::from_source) for the binding rules.
pub fn from_request<'a, B, T>(
    request: &Request<B>,
    config: &FormConfig,
    target: T,
) -> Result<(), ExtractFormError>
where
    B: AsRef<[u8]>,
    T: Target<'a>,
{
    let form = FormData::from_request(request, config)?;
    crate::from_form(&form, target)?;
    Ok(())
}

impl FormData {
    /// Collect the form fields of an incoming request.
    ///
    /// The body is parsed only for `POST`, `PUT` and `PATCH` requests, and only if it isn't
    /// empty. It must be no larger than the configured [`BodySizeLimit`] and the
    /// `Content-Type` header must be set to `application/x-www-form-urlencoded`.
    ///
    /// The query string is parsed afterwards, unless [`FormConfig::include_query`] is `false`.
    pub fn from_request<B>(
        request: &Request<B>,
        config: &FormConfig,
    ) -> Result<Self, ExtractFormError>
    where
        B: AsRef<[u8]>,
    {
        let mut form = FormData::new();
        let body = request.body().as_ref();
        if carries_form_body(request.method()) && !body.is_empty() {
            check_form_content_type(request.headers())?;
            check_body_size(request.headers(), body.len(), config.body_size_limit)?;
            form.extend_from_urlencoded(body);
        }
        if config.include_query {
            if let Some(query) = request.uri().query() {
                form.extend_from_urlencoded(query.as_bytes());
            }
        }
        tracing::trace!(n_keys = form.len(), "Collected form fields from the incoming request");
        Ok(form)
    }
}

fn carries_form_body(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT || *method == Method::PATCH
}

/// A request body is only parsed when it's labelled as a URL-encoded form.
///
/// Unreadable header values count as missing.
fn check_form_content_type(headers: &HeaderMap) -> Result<(), ExtractFormError> {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return Err(MissingFormContentType.into());
    };
    let is_form = content_type.parse::<mime::Mime>().is_ok_and(|parsed| {
        parsed.type_() == mime::APPLICATION && parsed.subtype() == mime::WWW_FORM_URLENCODED
    });
    if !is_form {
        return Err(FormContentTypeMismatch {
            actual: content_type.to_owned(),
        }
        .into());
    }
    Ok(())
}

fn check_body_size(
    headers: &HeaderMap,
    body_size: usize,
    limit: BodySizeLimit,
) -> Result<(), SizeLimitExceeded> {
    let BodySizeLimit::Enabled { max_size } = limit else {
        return Ok(());
    };
    if max_size < body_size {
        let content_length = headers
            .get(CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok()?.parse::<usize>().ok());
        return Err(SizeLimitExceeded {
            max_size,
            body_size,
            content_length,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use http::{HeaderValue, StatusCode};
    use ubyte::ToByteUnit;

    use super::*;
    use crate::Source;

    fn form_post() -> http::request::Builder {
        Request::post("/").header(CONTENT_TYPE, "application/x-www-form-urlencoded")
    }

    fn content_type(value: HeaderValue) -> HeaderMap {
        HeaderMap::from_iter([(CONTENT_TYPE, value)])
    }

    #[test]
    fn form_bodies_need_a_readable_content_type() {
        let err = check_form_content_type(&HeaderMap::new()).unwrap_err();
        assert!(matches!(err, ExtractFormError::MissingContentType(_)));
        assert_eq!(err.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let not_utf8 = HeaderValue::from_bytes(b"application/\xfa").unwrap();
        let err = check_form_content_type(&content_type(not_utf8)).unwrap_err();
        assert!(matches!(err, ExtractFormError::MissingContentType(_)));
    }

    #[test]
    fn other_content_types_are_rejected() {
        for actual in ["multipart/form-data", "application/json", "not a mime"] {
            let headers = content_type(HeaderValue::from_static(actual));
            let err = check_form_content_type(&headers).unwrap_err();
            let ExtractFormError::ContentTypeMismatch(e) = &err else {
                panic!("Expected a content type mismatch, got {err:?}");
            };
            assert_eq!(e.actual, actual);
            assert_eq!(err.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        }
        let headers = content_type(HeaderValue::from_static("text/plain"));
        insta::assert_snapshot!(check_form_content_type(&headers).unwrap_err(), @"The `Content-Type` header was set to `text/plain`. This endpoint expects requests with a `Content-Type` header set to `application/x-www-form-urlencoded`");
    }

    #[test]
    fn form_content_type_parameters_are_ignored() {
        for value in [
            "application/x-www-form-urlencoded",
            "application/x-www-form-urlencoded; charset=utf-8",
        ] {
            let headers = content_type(HeaderValue::from_static(value));
            assert!(check_form_content_type(&headers).is_ok(), "{value}");
        }
    }

    #[test]
    fn body_values_come_before_query_values() {
        let request = form_post()
            .uri("/?tag=from-query&page=1")
            .body("tag=from-body")
            .unwrap();
        let form = FormData::from_request(&request, &FormConfig::default()).unwrap();
        assert_eq!(form.get("tag"), ["from-body", "from-query"]);
        assert_eq!(form.get("page"), ["1"]);
    }

    #[test]
    fn query_can_be_ignored() {
        let request = form_post().uri("/?page=1").body("a=b").unwrap();
        let config = FormConfig {
            include_query: false,
            ..Default::default()
        };
        let form = FormData::from_request(&request, &config).unwrap();
        assert!(form.get("page").is_empty());
        assert_eq!(form.get("a"), ["b"]);
    }

    #[test]
    fn get_requests_only_use_the_query() {
        let request = Request::get("/?a=1")
            .header(CONTENT_TYPE, "application/json")
            .body(r#"{"a": 2}"#)
            .unwrap();
        let form = FormData::from_request(&request, &FormConfig::default()).unwrap();
        assert_eq!(form.get("a"), ["1"]);
    }

    #[test]
    fn empty_bodies_need_no_content_type() {
        let request = Request::post("/?a=1").body("").unwrap();
        let form = FormData::from_request(&request, &FormConfig::default()).unwrap();
        assert_eq!(form.get("a"), ["1"]);
    }

    #[test]
    fn oversized_bodies_are_rejected() {
        let request = form_post()
            .header(CONTENT_LENGTH, "11")
            .body("a=123456789")
            .unwrap();
        let config = FormConfig {
            body_size_limit: BodySizeLimit::Enabled {
                max_size: 10.bytes(),
            },
            ..Default::default()
        };
        let err = FormData::from_request(&request, &config).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        let ExtractFormError::SizeLimitExceeded(e) = err else {
            panic!("Expected a size limit error, got {err:?}");
        };
        assert_eq!(e.body_size, 11);
        assert_eq!(e.content_length, Some(11));

        let config = FormConfig {
            body_size_limit: BodySizeLimit::Disabled,
            ..Default::default()
        };
        assert!(FormData::from_request(&request, &config).is_ok());
    }
}
