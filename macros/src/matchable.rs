// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `#[derive(Matchable)]` macro.
//!
//! Generates a `match_with` that compares whole values with `PartialEq`, and,
//! when fields are marked `#[matchable(id)]`, falls back to comparing just
//! those fields to report `Changed`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Field, Fields, Index, Member};

/// Parsed `#[matchable(...)]` attributes on a single field.
#[derive(Default)]
struct FieldAttrs {
    /// Field is part of the element's identity
    id: bool,
}

impl FieldAttrs {
    fn from_field(field: &Field) -> syn::Result<Self> {
        let mut result = FieldAttrs::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("matchable") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("id") {
                    result.id = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported matchable attribute, expected `id`"))
                }
            })?;
        }

        Ok(result)
    }
}

/// Collect the members marked `#[matchable(id)]`.
fn identity_members(fields: &Fields) -> syn::Result<Vec<Member>> {
    let mut members = Vec::new();
    for (position, field) in fields.iter().enumerate() {
        if !FieldAttrs::from_field(field)?.id {
            continue;
        }
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(position)),
        };
        members.push(member);
    }
    Ok(members)
}

/// Reject `#[matchable(id)]` anywhere inside an enum: variants have no shared
/// identity to compare.
fn reject_enum_identity(data: &syn::DataEnum) -> syn::Result<()> {
    for variant in &data.variants {
        for field in &variant.fields {
            if FieldAttrs::from_field(field)?.id {
                return Err(syn::Error::new_spanned(
                    field,
                    "#[matchable(id)] is only supported on struct fields",
                ));
            }
        }
    }
    Ok(())
}

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let identity = match &input.data {
        Data::Struct(data) => identity_members(&data.fields)?,
        Data::Enum(data) => {
            reject_enum_identity(data)?;
            Vec::new()
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Matchable cannot be derived for unions",
            ))
        }
    };

    input
        .generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(Self: ::core::cmp::PartialEq));

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let body = if identity.is_empty() {
        quote! {
            if self == other {
                ::movediff::Verdict::Equal
            } else {
                ::movediff::Verdict::NoMatch
            }
        }
    } else {
        let lhs = identity.iter().map(|member| quote!(self.#member));
        let rhs = identity.iter().map(|member| quote!(other.#member));
        quote! {
            if self == other {
                ::movediff::Verdict::Equal
            } else if #( #lhs == #rhs )&&* {
                ::movediff::Verdict::Changed
            } else {
                ::movediff::Verdict::NoMatch
            }
        }
    };

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::movediff::Matchable for #name #ty_generics #where_clause {
            fn match_with(&self, other: &Self) -> ::movediff::Verdict {
                #body
            }
        }
    })
}

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
