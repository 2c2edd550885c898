// SPDX-License-Identifier: MIT

//!
//! *Part of the wider crop calendar project*
//!
//! This crate contains the crop calendar procedural macros
//!

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{LitInt, parse_macro_input};

// TODO: these are copied from crop-calendar-core (so are not synced)
const MAX_MONTH_INDEX: i64 = 11;
const MAX_MONTH_MASK: i64 = 4095;

/// Generate the type with compile time bounds checking
fn generate_const_checked_integer_macro(
    input: TokenStream,
    type_name: &str,
    min: i64,
    max: i64,
) -> TokenStream {
    let lit = parse_macro_input!(input as LitInt);

    let value = match lit.base10_parse::<i64>() {
        Ok(v) => v,
        Err(_) => {
            return syn::Error::new_spanned(lit, "Expected a valid i64 integer literal")
                .to_compile_error()
                .into();
        }
    };

    if value < min || value > max {
        return syn::Error::new_spanned(
            lit,
            format!("{type_name} must be between {min} and {max}"),
        )
        .to_compile_error()
        .into();
    }

    let ident = syn::Ident::new(type_name, proc_macro2::Span::call_site());
    quote! {
        #ident::try_from(#value).unwrap()
    }
    .into()
}

/// Create a `MonthIndex`, using `month!(x)`, with compile time checking of the
/// value (0 is January, 11 is December).
#[proc_macro]
pub fn month(input: TokenStream) -> TokenStream {
    generate_const_checked_integer_macro(input, "MonthIndex", 0, MAX_MONTH_INDEX)
}

/// Create a `MonthMask`, using `month_mask!(x)`, with compile time checking of
/// the value (any 12-bit value, e.g. `month_mask!(0b1100_0000_0011)`).
#[proc_macro]
pub fn month_mask(input: TokenStream) -> TokenStream {
    generate_const_checked_integer_macro(input, "MonthMask", 0, MAX_MONTH_MASK)
}
