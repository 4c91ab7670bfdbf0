//! Derive macro implementation used by `measurement-core`.
//!
//! `measurement-derive` is an implementation detail of this workspace. The
//! `Unit` derive expands in terms of `crate::Unit`, `crate::Ratio` and
//! `crate::Quantity`, so it is intended to be used by `measurement-core` (or
//! by crates that expose an identical crate-root API).
//!
//! Most users should depend on `measurement` instead and use the predefined
//! units.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements:
//!
//! - `crate::Unit for MyUnit`
//! - `core::fmt::Display for crate::Quantity<MyUnit>` (formats as
//!   `<count> <symbol>`)
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "m"`: displayed unit symbol
//! - `multiplier = Ratio::new(3048, 10_000)`: the unit's defining rational
//! - `period = Ratio::KILO`: the scale prefix applied on top

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token,
};

/// Derive `crate::Unit` and a `Display` impl for `crate::Quantity<ThisUnit>`.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing
/// `symbol`, `multiplier`, and `period`.
///
/// This macro is intended for use by `measurement-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    // Parse the #[unit(...)] attribute
    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let multiplier = &unit_attr.multiplier;
    let period = &unit_attr.period;

    let expanded = quote! {
        impl crate::Unit for #name {
            const MULTIPLIER: crate::Ratio = #multiplier;
            const PERIOD: crate::Ratio = #period;
            const SYMBOL: &'static str = #symbol;
        }

        impl ::core::fmt::Display for crate::Quantity<#name> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{} {}", self.count(), <#name as crate::Unit>::SYMBOL)
            }
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    multiplier: Expr,
    period: Expr,
    // Future extensions:
    // long_name: Option<LitStr>,
    // plural: Option<LitStr>,
    // system: Option<LitStr>,
    // aliases: Option<Vec<LitStr>>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut multiplier: Option<Expr> = None;
        let mut period: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "multiplier" => {
                    multiplier = Some(input.parse()?);
                }
                "period" => {
                    period = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let multiplier = multiplier.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `multiplier`")
        })?;
        let period = period
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `period`"))?;

        Ok(UnitAttribute {
            symbol,
            multiplier,
            period,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_unit_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", multiplier = Ratio::UNIT, period = Ratio::UNIT)]
            pub struct Meter;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "m");
    }

    #[test]
    fn test_parse_unit_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_symbol() {
        let input: DeriveInput = parse_quote! {
            #[unit(multiplier = Ratio::UNIT, period = Ratio::UNIT)]
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `symbol`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_multiplier() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", period = Ratio::UNIT)]
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `multiplier`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_period() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", multiplier = Ratio::UNIT)]
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `period`"));
    }

    #[test]
    fn test_parse_unit_attribute_unknown_field() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", multiplier = Ratio::UNIT, period = Ratio::UNIT, ratio = 1.0)]
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("unknown attribute"));
    }

    #[test]
    fn test_derive_unit_impl_basic() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "km", multiplier = Ratio::UNIT, period = Ratio::KILO)]
            pub struct Kilometer;
        };

        let result = derive_unit_impl(input);
        assert!(result.is_ok());
        let code = result.unwrap().to_string();
        assert!(code.contains("impl crate :: Unit for Kilometer"));
        assert!(code.contains("const MULTIPLIER : crate :: Ratio = Ratio :: UNIT"));
        assert!(code.contains("const PERIOD : crate :: Ratio = Ratio :: KILO"));
        assert!(code.contains("const SYMBOL : & 'static str = \"km\""));
    }

    #[test]
    fn test_derive_unit_impl_with_expression_multiplier() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "ft", multiplier = Ratio::new(3048, 10_000), period = Ratio::UNIT)]
            pub struct Foot;
        };

        let result = derive_unit_impl(input);
        assert!(result.is_ok());
        let code = result.unwrap().to_string();
        assert!(code.contains("Ratio :: new (3048 , 10_000)"));
    }

    #[test]
    fn test_unit_attribute_parse_with_trailing_comma() {
        let tokens = quote! {
            symbol = "m", multiplier = Ratio::UNIT, period = Ratio::UNIT,
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "m");
    }

    #[test]
    fn test_unit_attribute_parse_duplicate_symbol() {
        // Parser accepts duplicates - last one wins
        let tokens = quote! {
            symbol = "m", symbol = "km", multiplier = Ratio::UNIT, period = Ratio::UNIT
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "km");
    }

    #[test]
    fn test_parse_empty_attribute() {
        let tokens = quote! {};
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_unit_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub struct Meter;
        };
        let result = derive_unit_impl(input);
        assert!(result.is_err());
        let code = result.err().unwrap().to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
