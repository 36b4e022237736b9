//! Implementation of the `#[derive(Describable)]` macro.
//!
//! The derive targets wrapper types: a struct with exactly one field
//! describes itself as that field does.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Member, parse_macro_input, parse_quote};

/// Main implementation of the Describable derive macro.
pub fn derive_describable_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    TokenStream::from(expand(&input).unwrap_or_else(syn::Error::into_compile_error))
}

/// Expands a parsed type definition into its `Describable` impl.
fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data_struct) => &data_struct.fields,
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Describable can only be derived for structs with a single field, not enums.",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Describable cannot be derived for unions.",
            ));
        }
    };

    let (member, field_type) = single_field(name, fields)?;

    let mut generics = input.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(#field_type: ::tally::describe::Describable));
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::tally::describe::Describable for #name #type_generics #where_clause {
            fn describe(&self) -> ::std::string::String {
                ::tally::describe::Describable::describe(&self.#member)
            }
        }
    })
}

/// Returns the accessor and type of the only field, or an error for any other shape.
fn single_field<'a>(name: &syn::Ident, fields: &'a Fields) -> syn::Result<(Member, &'a syn::Type)> {
    let mut iterator = fields.iter();

    match (iterator.next(), iterator.next()) {
        (Some(field), None) => {
            let member = field
                .ident
                .clone()
                .map_or_else(|| Member::from(0), Member::Named);
            Ok((member, &field.ty))
        }
        (None, _) => Err(syn::Error::new_spanned(
            name,
            "Describable cannot be derived for structs with no fields.",
        )),
        (Some(_), Some(_)) => Err(syn::Error::new_spanned(
            name,
            "Describable can only be derived for structs with exactly one field; \
             implement Describable by hand to combine several fields.",
        )),
    }
}
