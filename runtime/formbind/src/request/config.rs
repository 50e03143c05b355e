use serde::Deserialize;
use ubyte::{ByteUnit, ToByteUnit};

/// Configure how [`FormData`](crate::FormData) is extracted from an incoming request.
///
/// It implements [`serde::Deserialize`], so it can be embedded in your application
/// configuration. All fields are optional:
///
/// ```rust
/// use formbind::request::{BodySizeLimit, FormConfig};
/// use ubyte::ToByteUnit;
///
/// let config: FormConfig = serde_json::from_str(r#"{ "include_query": false }"#).unwrap();
/// assert!(!config.include_query);
/// assert_eq!(config.body_size_limit, BodySizeLimit::Enabled { max_size: 2.megabytes() });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// An upper limit on the size of URL-encoded request bodies.
    pub body_size_limit: BodySizeLimit,
    /// Whether the query string should be parsed as well.
    ///
    /// Values from the request body come first, followed by the values from the query string.
    pub include_query: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            body_size_limit: BodySizeLimit::default(),
            include_query: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// An upper limit on the size of incoming request bodies.
///
/// It defaults to 2 megabytes.
pub enum BodySizeLimit {
    /// There is an active limit on the size of incoming request bodies.
    Enabled {
        /// The maximum size of incoming request bodies, in bytes.
        max_size: ByteUnit,
    },
    /// There is no limit on the size of incoming request bodies.
    Disabled,
}

impl Default for BodySizeLimit {
    fn default() -> Self {
        Self::Enabled {
            max_size: 2.megabytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config: FormConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FormConfig::default());
        assert!(config.include_query);
    }

    #[test]
    fn custom_limit() {
        let config: FormConfig = serde_json::from_str(
            r#"{ "body_size_limit": { "kind": "enabled", "max_size": 1024 } }"#,
        )
        .unwrap();
        assert_eq!(
            config.body_size_limit,
            BodySizeLimit::Enabled {
                max_size: 1024.bytes()
            }
        );
    }

    #[test]
    fn disabled_limit() {
        let config: FormConfig =
            serde_json::from_str(r#"{ "body_size_limit": { "kind": "disabled" } }"#).unwrap();
        assert_eq!(config.body_size_limit, BodySizeLimit::Disabled);
    }
}
