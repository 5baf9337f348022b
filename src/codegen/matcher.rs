//! `VariantNMatcher` builders and the free `matchN` functions.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use super::family::{family_ident, if_ident, leaf_ident, unsuffixed};
use super::params::{GenericParams, param_ident};
use crate::ir::Arity;

pub fn matcher_ident(arity: Arity) -> Ident {
    format_ident!("Variant{}Matcher", arity.get())
}

pub fn match_fn_ident(arity: Arity) -> Ident {
    format_ident!("match{}", arity.get())
}

fn slot_ident(k: usize) -> Ident {
    format_ident!("callback{}", k)
}

/// The builder holding one optional handler per alternative.
pub fn emit_matcher(arity: Arity) -> TokenStream {
    let name = family_ident(arity);
    let matcher = matcher_ident(arity);
    let params = GenericParams::plain(arity);
    let n = unsuffixed(arity.get());

    let doc = format!(
        " Collects one handler per alternative of [`{name}`], then dispatches on the populated one."
    );
    let slots = arity.indices().map(slot_ident).collect::<Vec<_>>();
    let payloads = arity.indices().map(param_ident).collect::<Vec<_>>();

    let setters = arity.indices().map(|k| {
        let if_ = if_ident(k);
        let slot = slot_ident(k);
        let param = param_ident(k);
        let doc = format!(" Fill the `V{k}` slot, replacing any handler already there.");
        quote! {
            #[doc = #doc]
            pub fn #if_<F>(self, callback: F) -> Self
            where
                F: FnOnce(&'a #param) -> Ret + 'a,
            {
                Self {
                    #slot: Some(Box::new(callback)),
                    ..self
                }
            }
        }
    });

    let dispatch = arity.indices().map(|k| {
        let leaf = leaf_ident(k);
        let slot = slot_ident(k);
        let k = unsuffixed(k);
        quote! {
            #name::#leaf(value) => match self.#slot {
                Some(callback) => Ok(callback(value)),
                None => Err(MissingHandler { arity: #n, index: #k }),
            }
        }
    });

    quote! {
        #[doc = #doc]
        #[must_use = "a matcher does nothing until it is invoked"]
        pub struct #matcher<'a, #params, Ret> {
            value: &'a #name<#params>,
            #(#slots: Option<Box<dyn FnOnce(&'a #payloads) -> Ret + 'a>>,)*
        }

        impl<'a, #params, Ret> #matcher<'a, #params, Ret> {
            pub fn new(value: &'a #name<#params>) -> Self {
                Self {
                    value,
                    #(#slots: None,)*
                }
            }

            #(#setters)*

            /// Run the handler of the populated alternative.
            ///
            /// Fails with [`MissingHandler`] when that alternative's slot was never filled.
            pub fn invoke(self) -> Result<Ret, MissingHandler> {
                match self.value {
                    #(#dispatch,)*
                }
            }
        }
    }
}

/// `matchN(value, callback1, .., callbackN)`: one handler per alternative, in order.
pub fn emit_match_fn(arity: Arity) -> TokenStream {
    let name = family_ident(arity);
    let function = match_fn_ident(arity);
    let params = GenericParams::plain(arity);

    let doc = format!(" Exhaustive dispatch over a [`{name}`]: calls exactly the handler of the populated alternative.");
    let callbacks = arity.indices().map(|k| {
        let slot = slot_ident(k);
        let param = param_ident(k);
        quote! { #slot: impl FnOnce(&#param) -> Ret }
    });
    let arms = arity.indices().map(|k| {
        let leaf = leaf_ident(k);
        let slot = slot_ident(k);
        quote! { #name::#leaf(value) => #slot(value) }
    });

    quote! {
        #[doc = #doc]
        #[allow(clippy::too_many_arguments)]
        pub fn #function<#params, Ret>(value: &#name<#params>, #(#callbacks),*) -> Ret {
            match value {
                #(#arms,)*
            }
        }
    }
}
