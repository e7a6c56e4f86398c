//! Derive macro implementation used by `dimal-core`.
//!
//! `dimal-derive` is an implementation detail of this workspace. The `BaseDimension` derive expands in terms of
//! `crate::BaseDimension`, so it is intended to be used by `dimal-core` (or by crates that expose an identical
//! crate-root API). Downstream crates declaring their own axes can implement the two constants by hand.
//!
//! # Generated impls
//!
//! For an axis marker type `Length`, the derive implements `crate::BaseDimension for Length`.
//!
//! # Attributes
//!
//! The derive reads a required `#[base(...)]` attribute:
//!
//! - `symbol = "L"`: symbol used when a dimension signature is displayed
//! - `name = "length"` (optional): human readable axis name, defaults to the lowercased type name

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Ident, LitStr, Token,
};

/// Derive `crate::BaseDimension` for an axis marker type.
///
/// The derive must be paired with a `#[base(...)]` attribute providing at least `symbol`.
///
/// This macro is intended for use by `dimal-core`.
#[proc_macro_derive(BaseDimension, attributes(base))]
pub fn derive_base_dimension(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_base_dimension_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_base_dimension_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let base_attr = parse_base_attribute(&input.attrs)?;

    let symbol = &base_attr.symbol;
    let name = base_attr
        .name
        .unwrap_or_else(|| LitStr::new(&ident.to_string().to_lowercase(), ident.span()));

    let expanded = quote! {
        impl #impl_generics crate::BaseDimension for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;
            const SYMBOL: &'static str = #symbol;
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[base(...)]` attribute.
struct BaseAttribute {
    symbol: LitStr,
    name: Option<LitStr>,
}

impl Parse for BaseAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut name: Option<LitStr> = None;

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match key.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "name" => {
                    name = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;

        if symbol.value().is_empty() {
            return Err(syn::Error::new(symbol.span(), "`symbol` must not be empty"));
        }

        Ok(BaseAttribute { symbol, name })
    }
}

fn parse_base_attribute(attrs: &[Attribute]) -> syn::Result<BaseAttribute> {
    for attr in attrs {
        if attr.path().is_ident("base") {
            return attr.parse_args::<BaseAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[base(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_base_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[base(name = "length", symbol = "L")]
            pub enum Length {}
        };

        let attr = parse_base_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "L");
        assert_eq!(attr.name.unwrap().value(), "length");
    }

    #[test]
    fn test_parse_base_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub enum Length {}
        };

        let result = parse_base_attribute(&input.attrs);
        assert!(result.is_err());
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing #[base(...)] attribute"));
    }

    #[test]
    fn test_parse_base_attribute_missing_symbol() {
        let input: DeriveInput = parse_quote! {
            #[base(name = "length")]
            pub enum Length {}
        };

        let result = parse_base_attribute(&input.attrs);
        assert!(result.is_err());
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `symbol`"));
    }

    #[test]
    fn test_parse_base_attribute_empty_symbol() {
        let input: DeriveInput = parse_quote! {
            #[base(symbol = "")]
            pub enum Length {}
        };

        let result = parse_base_attribute(&input.attrs);
        assert!(result.is_err());
        assert!(result.err().unwrap().to_string().contains("must not be empty"));
    }

    #[test]
    fn test_parse_base_attribute_unknown_field() {
        let input: DeriveInput = parse_quote! {
            #[base(symbol = "L", exponent = "1")]
            pub enum Length {}
        };

        let result = parse_base_attribute(&input.attrs);
        assert!(result.is_err());
        assert!(result.err().unwrap().to_string().contains("unknown attribute"));
    }

    #[test]
    fn test_derive_base_dimension_impl_basic() {
        let input: DeriveInput = parse_quote! {
            #[base(name = "length", symbol = "L")]
            pub enum Length {}
        };

        let tokens = derive_base_dimension_impl(input).unwrap();
        let code = tokens.to_string();
        assert!(code.contains("impl crate :: BaseDimension for Length"));
        assert!(code.contains("const NAME : & 'static str = \"length\""));
        assert!(code.contains("const SYMBOL : & 'static str = \"L\""));
    }

    #[test]
    fn test_derive_base_dimension_default_name() {
        let input: DeriveInput = parse_quote! {
            #[base(symbol = "Θ")]
            pub enum Temperature {}
        };

        let code = derive_base_dimension_impl(input).unwrap().to_string();
        assert!(code.contains("\"temperature\""));
    }

    #[test]
    fn test_base_attribute_parse_with_trailing_comma() {
        let tokens = quote! {
            symbol = "T", name = "time",
        };
        let attr: BaseAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "T");
    }

    #[test]
    fn test_parse_empty_attribute() {
        let tokens = quote! {};
        let result: syn::Result<BaseAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_base_dimension_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub enum Length {}
        };
        let err = derive_base_dimension_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
