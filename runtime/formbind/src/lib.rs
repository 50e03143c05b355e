//! # formbind
//!
//! Bind string-keyed, multi-valued input (query strings, web forms, plain maps) to the fields
//! of a strongly-typed record.
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! #[derive(formbind::Record, Default, Debug)]
//! pub struct Signup {
//!     #[bind(key = "user")]
//!     username: String,
//!     age: Option<u8>,
//!     newsletter: bool,
//!     tags: Vec<String>,
//! }
//!
//! let input = HashMap::from([
//!     ("user".to_string(), "ferris".to_string()),
//!     ("newsletter".to_string(), "true".to_string()),
//! ]);
//! let mut signup = Signup::default();
//! formbind::from_map(&input, &mut signup).unwrap();
//!
//! assert_eq!(signup.username, "ferris");
//! assert_eq!(signup.age, None);
//! assert!(signup.newsletter);
//! assert!(signup.tags.is_empty());
//! ```
//!
//! # Field mapping
//!
//! Each field is looked up using the key specified via `#[bind(key = "...")]`, falling back to
//! the field name as written in the struct definition.
//! Fields annotated with `#[bind(skip)]` are never touched.
//!
//! # Supported field types
//!
//! | Field type | No values | `""` | Otherwise |
//! |---|---|---|---|
//! | integers, floats, `bool`, `String` | zero value | zero value | parse the first value |
//! | `Option<T>` | `None` | `Some(zero value)` | `Some(..)` with the parsed first value |
//! | `Vec<T>` | empty | one zero value | one element per value |
//! | `HashMap<K, V>`, `BTreeMap<K, V>` | empty | empty | error |
//!
//! Booleans accept `true`, `false`, `t`, `f`, `1` and `0`, ignoring case.
//!
//! Check out [`BindError`] for the ways binding can fail.
//!
//! # Feature flags
//!
//! - `http` (enabled by default): the [`request`] module, to extract form data from
//!   `http::Request`s, and [`BindError::status_code`].

// Allows `#[derive(Record)]` to refer to `::formbind` from within this crate.
extern crate self as formbind;

pub use bind::{from_form, from_map, from_multi_map, from_source, from_urlencoded};
pub use convert::{Bindable, Scalar};
pub use errors::{BindError, ConversionError};
pub use form::FormData;
pub use formbind_macros::Record;
pub use kind::{FieldKind, ScalarKind};
pub use record::{AssignFn, DynRecord, Field, Record, Target};
pub use source::Source;

mod bind;
mod convert;
pub mod errors;
mod form;
mod kind;
mod record;
#[cfg(feature = "http")]
pub mod request;
mod source;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
pub struct ReadmeDoctests;
