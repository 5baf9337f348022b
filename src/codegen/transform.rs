//! Capability impls: a sum is `Duplicable`/`Relinquishable` when every payload is.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::family::{family_ident, leaf_ident};
use super::params::GenericParams;
use crate::ir::{Arity, Capability};

pub fn emit_transform(arity: Arity, capability: Capability) -> TokenStream {
    let name = family_ident(arity);
    let plain = GenericParams::plain(arity);
    let bounded = GenericParams::bounded(arity, capability);
    let bound = format_ident!("{}", capability.bound());
    let method = format_ident!("{}", capability.method());
    let receiver = if capability.takes_mut() {
        quote! { &mut self }
    } else {
        quote! { &self }
    };

    let arms = arity.indices().map(|k| {
        let leaf = leaf_ident(k);
        quote! { Self::#leaf(value) => Self::#leaf(value.#method()) }
    });

    quote! {
        impl<#bounded> #bound<#name<#plain>> for #name<#plain> {
            fn #method(#receiver) -> Self {
                match self {
                    #(#arms,)*
                }
            }
        }
    }
}
