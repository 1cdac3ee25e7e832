extern crate proc_macro;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_macro_input, spanned::Spanned, Data, DataEnum, DeriveInput, Error, Fields};

/// Derives `global_common::Located`.
///
/// Structs must have a `loc: SourceLocation` field. Enums must consist of
/// single-field tuple variants whose field is itself `Located`; the impl
/// forwards to the active variant.
///
/// ```ignore
/// #[derive(Located)]
/// struct RestElement {
///     loc: SourceLocation,
///     argument: Option<Box<Pat>>,
/// }
///
/// #[derive(Located)]
/// enum Pat {
///     Ident(Identifier),
///     Rest(RestElement),
/// }
/// ```
#[proc_macro_derive(Located)]
pub fn derive_located(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let (loc, loc_mut) = match &input.data {
        Data::Struct(s) => {
            let has_loc = s
                .fields
                .iter()
                .any(|f| f.ident.as_ref().map_or(false, |i| i == "loc"));
            if !has_loc {
                return Error::new(
                    input.ident.span(),
                    "#[derive(Located)] requires a `loc: SourceLocation` field",
                )
                .to_compile_error()
                .into();
            }
            (quote!(&self.loc), quote!(&mut self.loc))
        }
        Data::Enum(e) => {
            let loc = match forward_to_variants(e, quote!(::global_common::Located::loc)) {
                Ok(body) => body,
                Err(err) => return err.to_compile_error().into(),
            };
            let loc_mut = match forward_to_variants(e, quote!(::global_common::Located::loc_mut)) {
                Ok(body) => body,
                Err(err) => return err.to_compile_error().into(),
            };
            (loc, loc_mut)
        }
        Data::Union(u) => {
            return Error::new(u.union_token.span(), "unions cannot be Located")
                .to_compile_error()
                .into()
        }
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote!(
        #[automatically_derived]
        impl #impl_generics ::global_common::Located for #name #ty_generics #where_clause {
            fn loc(&self) -> &::global_common::SourceLocation {
                #loc
            }

            fn loc_mut(&mut self) -> &mut ::global_common::SourceLocation {
                #loc_mut
            }
        }
    )
    .into()
}

/// Derives the `Node` trait of the crate the type is defined in.
///
/// For a struct, `kind()` returns the `NodeKind` variant named after the
/// struct, so `struct ArrayPattern` yields `crate::NodeKind::ArrayPattern`.
/// Enums forward to the active variant.
#[proc_macro_derive(Node)]
pub fn derive_node(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let body = match &input.data {
        Data::Struct(_) => quote!(crate::NodeKind::#name),
        Data::Enum(e) => match forward_to_variants(e, quote!(crate::Node::kind)) {
            Ok(body) => body,
            Err(err) => return err.to_compile_error().into(),
        },
        Data::Union(u) => {
            return Error::new(u.union_token.span(), "unions cannot be nodes")
                .to_compile_error()
                .into()
        }
    };

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote!(
        #[automatically_derived]
        impl #impl_generics crate::Node for #name #ty_generics #where_clause {
            fn kind(&self) -> crate::NodeKind {
                #body
            }
        }
    )
    .into()
}

/// Derives `From<Field> for Enum` for every single-field tuple variant.
#[proc_macro_derive(FromVariant)]
pub fn derive_from_variant(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let e = match &input.data {
        Data::Enum(e) => e,
        _ => {
            return Error::new(input.ident.span(), "#[derive(FromVariant)] only supports enums")
                .to_compile_error()
                .into()
        }
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let mut impls = TokenStream::new();

    for v in &e.variants {
        let field = match &v.fields {
            Fields::Unnamed(f) if f.unnamed.len() == 1 => &f.unnamed[0].ty,
            _ => {
                return Error::new(
                    v.ident.span(),
                    "expected a tuple variant with exactly one field",
                )
                .to_compile_error()
                .into()
            }
        };
        let variant = &v.ident;

        impls.extend(quote!(
            #[automatically_derived]
            impl #impl_generics From<#field> for #name #ty_generics #where_clause {
                fn from(v: #field) -> Self {
                    #name::#variant(v)
                }
            }
        ));
    }

    impls.into()
}

/// Alias for `#[derive(Located, Node, Clone, Debug, PartialEq)]` on a struct
/// and `#[derive(Located, Node, FromVariant, Clone, Debug, PartialEq)]` on an
/// enum.
#[proc_macro_attribute]
pub fn ast_node(
    args: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    if !args.is_empty() {
        return Error::new(
            TokenStream::from(args).span(),
            "#[ast_node] does not accept any arguments",
        )
        .to_compile_error()
        .into();
    }
    let input = parse_macro_input!(input as DeriveInput);

    match &input.data {
        Data::Enum(..) => quote!(
            #[derive(
                ::ast_node::Located,
                ::ast_node::Node,
                ::ast_node::FromVariant,
                Clone,
                Debug,
                PartialEq,
            )]
            #input
        ),
        _ => quote!(
            #[derive(::ast_node::Located, ::ast_node::Node, Clone, Debug, PartialEq)]
            #input
        ),
    }
    .into()
}

/// Builds `match self { Self::Variant(field) => method(field), ... }`.
fn forward_to_variants(e: &DataEnum, method: TokenStream) -> Result<TokenStream, Error> {
    let mut arms = Vec::with_capacity(e.variants.len());

    for v in &e.variants {
        match &v.fields {
            Fields::Unnamed(f) if f.unnamed.len() == 1 => {
                let variant = &v.ident;
                arms.push(quote!(Self::#variant(field) => #method(field),));
            }
            _ => {
                return Err(Error::new(
                    v.ident.span(),
                    "expected a tuple variant with exactly one field",
                ))
            }
        }
    }

    Ok(quote!(match self { #(#arms)* }))
}
