use std::collections::{BTreeMap, HashMap};

use crate::errors::{ConversionError, InvalidBoolLiteral, UnexpectedSign};
use crate::kind::{FieldKind, ScalarKind};

mod sealed {
    pub trait Scalar {}
    pub trait Bindable {}
}

/// A type that can be parsed out of a single raw string.
///
/// This trait is sealed: the set of scalars is closed.
pub trait Scalar: Default + sealed::Scalar + Sized {
    /// The kind of this scalar.
    const KIND: ScalarKind;

    /// Parse a non-empty raw string.
    fn parse(raw: &str) -> Result<Self, ConversionError>;

    /// Build a value out of a raw string.
    ///
    /// The empty string is mapped to the zero value, whatever the type.
    fn from_raw(raw: &str) -> Result<Self, ConversionError> {
        if raw.is_empty() {
            Ok(Self::default())
        } else {
            Self::parse(raw)
        }
    }
}

/// A type that can be used as a field in a [`Record`](crate::Record).
///
/// `values` is the (possibly empty) list of raw values associated with the field's key.
///
/// - Scalars are set to their zero value if there are no values, otherwise they are built
///   from the first value.
/// - `Option<T>` is set to `None` if there are no values. Otherwise it is allocated,
///   if it wasn't already, and its content is built from the first value.
/// - `Vec<T>` gets one element for each value, in order.
/// - Maps have no conversion rule: they are cleared if there are no values (or the first
///   value is empty), otherwise binding fails.
///
/// This trait is sealed: the set of supported field types is closed.
/// In particular, records can't be nested:
///
/// ```compile_fail
/// #[derive(formbind::Record)]
/// pub struct Address {
///     city: String,
/// }
///
/// #[derive(formbind::Record)]
/// pub struct Customer {
///     address: Address,
/// }
/// ```
pub trait Bindable: sealed::Bindable {
    /// The shape of this field type.
    const KIND: FieldKind;

    /// Overwrite `self` with the outcome of converting `values`.
    fn assign(&mut self, values: &[String]) -> Result<(), ConversionError>;
}

macro_rules! scalar_field {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Bindable for $ty {}

            impl Bindable for $ty {
                const KIND: FieldKind = FieldKind::Scalar(<$ty as Scalar>::KIND);

                fn assign(&mut self, values: &[String]) -> Result<(), ConversionError> {
                    *self = match values.first() {
                        Some(raw) => <$ty as Scalar>::from_raw(raw)?,
                        None => <$ty>::default(),
                    };
                    Ok(())
                }
            }
        )+
    };
}

macro_rules! from_str_scalar {
    ($kind:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Scalar for $ty {}

            impl Scalar for $ty {
                const KIND: ScalarKind = ScalarKind::$kind;

                fn parse(raw: &str) -> Result<Self, ConversionError> {
                    // `FromStr` tolerates a leading `+` on unsigned integers, we don't.
                    if matches!(<Self as Scalar>::KIND, ScalarKind::UnsignedInt) && raw.starts_with('+') {
                        return Err(ConversionError::new::<$ty>(raw, UnexpectedSign));
                    }
                    raw.parse::<$ty>()
                        .map_err(|e| ConversionError::new::<$ty>(raw, e))
                }
            }

            scalar_field!($ty);
        )+
    };
}

from_str_scalar!(SignedInt => i8, i16, i32, i64, i128, isize);
from_str_scalar!(UnsignedInt => u8, u16, u32, u64, u128, usize);
from_str_scalar!(Float => f32, f64);

impl sealed::Scalar for bool {}

impl Scalar for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn parse(raw: &str) -> Result<Self, ConversionError> {
        const TRUE: [&str; 3] = ["true", "t", "1"];
        const FALSE: [&str; 3] = ["false", "f", "0"];

        if TRUE.iter().any(|l| raw.eq_ignore_ascii_case(l)) {
            Ok(true)
        } else if FALSE.iter().any(|l| raw.eq_ignore_ascii_case(l)) {
            Ok(false)
        } else {
            Err(ConversionError::new::<bool>(raw, InvalidBoolLiteral))
        }
    }
}

impl sealed::Scalar for String {}

impl Scalar for String {
    const KIND: ScalarKind = ScalarKind::Text;

    fn parse(raw: &str) -> Result<Self, ConversionError> {
        Ok(raw.to_owned())
    }
}

scalar_field!(bool, String);

impl<T: Scalar> sealed::Bindable for Option<T> {}

impl<T: Scalar> Bindable for Option<T> {
    const KIND: FieldKind = FieldKind::Optional(T::KIND);

    fn assign(&mut self, values: &[String]) -> Result<(), ConversionError> {
        let Some(raw) = values.first() else {
            *self = None;
            return Ok(());
        };
        let slot = self.get_or_insert_with(T::default);
        *slot = T::from_raw(raw)?;
        Ok(())
    }
}

impl<T: Scalar> sealed::Bindable for Vec<T> {}

impl<T: Scalar> Bindable for Vec<T> {
    const KIND: FieldKind = FieldKind::Sequence(T::KIND);

    fn assign(&mut self, values: &[String]) -> Result<(), ConversionError> {
        *self = values
            .iter()
            .map(|raw| T::from_raw(raw))
            .collect::<Result<_, _>>()?;
        Ok(())
    }
}

macro_rules! unsupported_field {
    ($ty:ident<$($param:ident),+>) => {
        impl<$($param),+> sealed::Bindable for $ty<$($param),+> {}

        impl<$($param),+> Bindable for $ty<$($param),+> {
            const KIND: FieldKind = FieldKind::Unsupported;

            fn assign(&mut self, values: &[String]) -> Result<(), ConversionError> {
                match values.first() {
                    Some(raw) if !raw.is_empty() => Err(ConversionError::unsupported::<Self>(raw)),
                    _ => {
                        self.clear();
                        Ok(())
                    }
                }
            }
        }
    };
}

unsupported_field!(HashMap<K, V, S>);
unsupported_field!(BTreeMap<K, V>);
