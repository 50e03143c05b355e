use darling::{FromDeriveInput, FromField, util::Flag, util::Ignored};
use proc_macro::TokenStream;
use quote::{format_ident, quote, quote_spanned};
use syn::{DeriveInput, Ident, Type, ext::IdentExt, parse_macro_input, spanned::Spanned};

#[derive(FromDeriveInput)]
struct RecordInput {
    ident: Ident,
    generics: syn::Generics,
    data: darling::ast::Data<Ignored, RecordField>,
}

// Options for `#[bind(..)]` on a field.
#[derive(FromField)]
#[darling(attributes(bind))]
struct RecordField {
    ident: Option<Ident>,
    ty: Type,
    key: Option<String>,
    skip: Flag,
}

impl RecordField {
    /// The field name, without the `r#` prefix for raw identifiers.
    fn name(&self) -> String {
        self.ident
            .as_ref()
            .expect("Named fields always have an identifier")
            .unraw()
            .to_string()
    }

    fn key(&self) -> String {
        self.key.clone().unwrap_or_else(|| self.name())
    }
}

pub(super) fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match _derive_record(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into(),
    }
}

fn _derive_record(input: DeriveInput) -> Result<proc_macro2::TokenStream, darling::Error> {
    let input = RecordInput::from_derive_input(&input)?;
    reject_invalid_inputs(&input)?;

    let struct_ident = &input.ident;
    let fields = input
        .data
        .take_struct()
        // Other shapes are rejected by `reject_invalid_inputs`.
        .expect("`Record` only supports structs with named fields.");

    let mut assign_fns = Vec::new();
    let mut descriptors = Vec::with_capacity(fields.len());
    for (i, field) in fields.iter().enumerate() {
        let name = field.name();
        let key = field.key();
        if field.skip.is_present() {
            descriptors.push(quote! {
                ::formbind::Field::skipped(#name, #key)
            });
            continue;
        }

        let field_ident = &field.ident;
        let ty = &field.ty;
        let ty_span = ty.span();
        let assign_ident = format_ident!("__assign_{}", i);
        assign_fns.push(quote_spanned! { ty_span =>
            fn #assign_ident(
                record: &mut #struct_ident,
                values: &[::std::string::String],
            ) -> ::std::result::Result<(), ::formbind::ConversionError> {
                <#ty as ::formbind::Bindable>::assign(&mut record.#field_ident, values)
            }
        });
        descriptors.push(quote_spanned! { ty_span =>
            ::formbind::Field::writable(
                #name,
                #key,
                <#ty as ::formbind::Bindable>::KIND,
                #assign_ident,
            )
        });
    }
    let n_fields = descriptors.len();

    let tokens = quote! {
        #[automatically_derived]
        impl ::formbind::Record for #struct_ident {
            fn fields() -> &'static [::formbind::Field<Self>] {
                #(#assign_fns)*

                static FIELDS: [::formbind::Field<#struct_ident>; #n_fields] = [
                    #(#descriptors),*
                ];
                &FIELDS
            }
        }

        #[automatically_derived]
        impl<'a> ::formbind::Target<'a> for #struct_ident {
            fn into_record(
                self,
            ) -> ::std::result::Result<&'a mut dyn ::formbind::DynRecord, ::formbind::BindError> {
                ::std::result::Result::Err(::formbind::BindError::NotAReference {
                    type_name: ::std::any::type_name::<Self>(),
                })
            }
        }
    };

    Ok(tokens)
}

fn reject_invalid_inputs(input: &RecordInput) -> Result<(), darling::Error> {
    let struct_ident = &input.ident;
    let Some(fields) = input.data.as_ref().take_struct().filter(|f| f.is_struct()) else {
        return Err(darling::Error::custom(
            "`#[derive(Record)]` can only be applied to structs with named fields.",
        )
        .with_span(struct_ident));
    };
    if let Some(param) = input.generics.type_params().next() {
        return Err(darling::Error::custom(
            "`#[derive(Record)]` can't be applied to structs with generic type parameters. Use concrete types instead.",
        )
        .with_span(&param.ident));
    }
    if let Some(param) = input.generics.lifetimes().next() {
        return Err(darling::Error::custom(
            "`#[derive(Record)]` can't be applied to structs with generic lifetimes. Use owned types instead, e.g. `String` rather than `&str`.",
        )
        .with_span(&param.lifetime.ident));
    }
    if let Some(param) = input.generics.const_params().next() {
        return Err(darling::Error::custom(
            "`#[derive(Record)]` can't be applied to structs with const generic parameters.",
        )
        .with_span(&param.ident));
    }

    let mut errors = darling::Error::accumulator();
    for field in fields.iter() {
        if field.key.as_deref() == Some("") {
            errors.push(
                darling::Error::custom(format!(
                    "The binding key for `{}` can't be empty. Remove `key = \"\"` to use the field name as key.",
                    field.name()
                ))
                .with_span(&field.ident),
            );
        }
    }
    errors.finish()
}
