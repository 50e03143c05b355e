use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::errors::{BindError, ConversionError};
use crate::kind::FieldKind;
use crate::source::Source;

/// A struct whose fields can be populated from a [`Source`].
///
/// Implement it via `#[derive(Record)]`:
///
/// ```rust
/// #[derive(formbind::Record, Default)]
/// pub struct Listing {
///     #[bind(key = "listing_id")]
///     id: u64,
///     // Looked up using `price` as key.
///     price: Option<f64>,
///     #[bind(skip)]
///     cached_score: std::cell::Cell<u32>,
/// }
/// ```
pub trait Record: Sized + 'static {
    /// The descriptors of the fields of this record, in declaration order.
    fn fields() -> &'static [Field<Self>];
}

/// Write the converted values into a field of `R`.
pub type AssignFn<R> = fn(&mut R, &[String]) -> Result<(), ConversionError>;

/// The binding metadata for a single field of a [`Record`].
pub struct Field<R> {
    name: &'static str,
    key: &'static str,
    writer: Option<(FieldKind, AssignFn<R>)>,
}

impl<R> Field<R> {
    /// A field that can be populated by the binding engine.
    pub const fn writable(
        name: &'static str,
        key: &'static str,
        kind: FieldKind,
        assign: AssignFn<R>,
    ) -> Self {
        Self {
            name,
            key,
            writer: Some((kind, assign)),
        }
    }

    /// A field that the binding engine must leave untouched.
    pub const fn skipped(name: &'static str, key: &'static str) -> Self {
        Self {
            name,
            key,
            writer: None,
        }
    }

    /// The name of the field, as declared in the struct definition.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The key used to look up the values for this field.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// The shape of the field.
    /// It is `None` for fields that aren't writable.
    pub fn kind(&self) -> Option<FieldKind> {
        self.writer.map(|(kind, _)| kind)
    }

    /// Whether the binding engine is allowed to write into this field.
    pub fn is_writable(&self) -> bool {
        self.writer.is_some()
    }

    pub(crate) fn assign_fn(&self) -> Option<AssignFn<R>> {
        self.writer.map(|(_, assign)| assign)
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("key", &self.key)
            .field("kind", &self.kind())
            .finish()
    }
}

/// A [`Record`] with its type erased.
pub trait DynRecord {
    /// Populate the fields of the record with the values from `source`.
    fn bind_fields(&mut self, source: &dyn Source) -> Result<(), BindError>;
}

impl<R: Record> DynRecord for R {
    fn bind_fields(&mut self, source: &dyn Source) -> Result<(), BindError> {
        crate::bind::bind_record(self, source)
    }
}

/// Something that can be passed as binding target.
///
/// Only a mutable reference to a [`Record`] resolves successfully.
/// The other implementations reject the target with the appropriate [`BindError`]:
///
/// - [`BindError::NotAReference`] for records and plain values passed by value;
/// - [`BindError::NilTarget`] for `None`;
/// - [`BindError::NotARecord`] for mutable references to scalars and collections.
///
/// `#[derive(Record)]` takes care of implementing this trait for records passed by value.
pub trait Target<'a> {
    /// Resolve the target to the record that should be populated.
    fn into_record(self) -> Result<&'a mut dyn DynRecord, BindError>;
}

impl<'a, R: Record> Target<'a> for &'a mut R {
    fn into_record(self) -> Result<&'a mut dyn DynRecord, BindError> {
        Ok(self)
    }
}

impl<'a, R: Record> Target<'a> for Option<&'a mut R> {
    fn into_record(self) -> Result<&'a mut dyn DynRecord, BindError> {
        match self {
            Some(record) => Ok(record),
            None => Err(BindError::nil_target::<R>()),
        }
    }
}

macro_rules! non_record_target {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<'a> Target<'a> for $ty {
                fn into_record(self) -> Result<&'a mut dyn DynRecord, BindError> {
                    Err(BindError::not_a_reference::<$ty>())
                }
            }

            impl<'a> Target<'a> for &'a mut $ty {
                fn into_record(self) -> Result<&'a mut dyn DynRecord, BindError> {
                    Err(BindError::not_a_record::<$ty>())
                }
            }
        )+
    };
}

non_record_target!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String,
);

macro_rules! non_record_collection_target {
    ($ty:ident<$($param:ident),+>) => {
        impl<'a, $($param),+> Target<'a> for $ty<$($param),+> {
            fn into_record(self) -> Result<&'a mut dyn DynRecord, BindError> {
                Err(BindError::not_a_reference::<Self>())
            }
        }

        impl<'a, $($param),+> Target<'a> for &'a mut $ty<$($param),+> {
            fn into_record(self) -> Result<&'a mut dyn DynRecord, BindError> {
                Err(BindError::not_a_record::<$ty<$($param),+>>())
            }
        }
    };
}

non_record_collection_target!(Vec<T>);
non_record_collection_target!(HashMap<K, V, S>);
non_record_collection_target!(BTreeMap<K, V>);
