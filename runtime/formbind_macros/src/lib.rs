use proc_macro::TokenStream;

mod record;

/// Derive an implementation of `formbind::Record` for a struct with named fields.
///
/// # Field attributes
///
/// - `#[bind(key = "...")]` sets the key used to look up the values for the field.
///   It defaults to the field name, as written in the struct definition.
/// - `#[bind(skip)]` marks the field as non-writable: it will never be touched, and
///   its type doesn't need to implement `formbind::Bindable`.
#[proc_macro_derive(Record, attributes(bind))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}
