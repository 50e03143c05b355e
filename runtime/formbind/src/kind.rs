/// The shape of a scalar value that can be parsed from a single string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// `i8`, `i16`, `i32`, `i64`, `i128`, `isize`.
    SignedInt,
    /// `u8`, `u16`, `u32`, `u64`, `u128`, `usize`.
    UnsignedInt,
    /// `f32`, `f64`.
    Float,
    /// `bool`.
    Bool,
    /// `String`. Values are assigned verbatim.
    Text,
}

/// The shape of a record field, as seen by the binding engine.
///
/// It determines how the values associated with the field's key are turned into the
/// field's value. See [`Bindable`](crate::Bindable) for the full set of rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A plain scalar, built from the first value.
    Scalar(ScalarKind),
    /// An `Option` around a scalar, allocated on demand.
    Optional(ScalarKind),
    /// A `Vec` of scalars, with one element per value.
    Sequence(ScalarKind),
    /// A type with no conversion rule.
    /// Binding fails as soon as at least one value is available for the field.
    Unsupported,
}

impl FieldKind {
    /// The kind of the scalar(s) wrapped by this field, if there is a conversion rule for it.
    pub fn scalar(&self) -> Option<ScalarKind> {
        match self {
            FieldKind::Scalar(s) | FieldKind::Optional(s) | FieldKind::Sequence(s) => Some(*s),
            FieldKind::Unsupported => None,
        }
    }
}
