//! `VariantN`: the sum type and its per-alternative members.

use proc_macro2::{Ident, Literal, TokenStream};
use quote::{format_ident, quote};

use super::matcher::matcher_ident;
use super::params::{GenericParams, param_ident};
use crate::ir::Arity;

pub fn family_ident(arity: Arity) -> Ident {
    format_ident!("Variant{}", arity.get())
}

/// Constructor of the k-th alternative. `V1` always wraps `T1`.
pub fn leaf_ident(k: usize) -> Ident {
    format_ident!("V{}", k)
}

/// Query and builder names for alternative k, shared with the matcher.
pub fn is_ident(k: usize) -> Ident {
    format_ident!("is_v{}", k)
}

pub fn if_ident(k: usize) -> Ident {
    format_ident!("if_v{}", k)
}

pub(crate) fn unsuffixed(n: usize) -> Literal {
    Literal::usize_unsuffixed(n)
}

pub fn emit_family(arity: Arity) -> TokenStream {
    let name = family_ident(arity);
    let params = GenericParams::plain(arity);
    let n = unsuffixed(arity.get());

    let doc = format!(" A value holding exactly one of {arity} alternatives, `V1` through `V{arity}`.");
    let leaves = arity.indices().map(|k| {
        let leaf = leaf_ident(k);
        let param = param_ident(k);
        quote! { #leaf(#param) }
    });
    let index_arms = arity.indices().map(|k| {
        let leaf = leaf_ident(k);
        let k = unsuffixed(k);
        quote! { Self::#leaf(_) => #k }
    });
    let members = arity.indices().map(|k| emit_members(arity, k));

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum #name<#params> {
            #(#leaves,)*
        }

        impl<#params> #name<#params> {
            /// Number of alternatives.
            pub const ARITY: usize = #n;

            /// 1-based index of the populated alternative.
            pub fn index(&self) -> usize {
                match self {
                    #(#index_arms,)*
                }
            }

            #(#members)*
        }
    }
}

fn emit_members(arity: Arity, k: usize) -> TokenStream {
    let params = GenericParams::plain(arity);
    let matcher = matcher_ident(arity);
    let leaf = leaf_ident(k);
    let param = param_ident(k);
    let is = is_ident(k);
    let as_ref = format_ident!("as_v{}", k);
    let as_mut = format_ident!("as_v{}_mut", k);
    let into = format_ident!("into_v{}", k);
    let if_ = if_ident(k);

    let is_doc = format!(" Whether this is `V{k}`.");
    let as_doc = format!(" The `V{k}` payload, or `None` for any other alternative.");
    let if_doc = format!(" Start a matcher with only the `V{k}` handler filled in.");

    // A catch-all arm would be unreachable for a single-alternative family.
    let rest = (arity.get() > 1).then(|| quote! { _ => None, });

    quote! {
        #[doc = #is_doc]
        pub fn #is(&self) -> bool {
            matches!(self, Self::#leaf(_))
        }

        #[doc = #as_doc]
        pub fn #as_ref(&self) -> Option<&#param> {
            match self {
                Self::#leaf(value) => Some(value),
                #rest
            }
        }

        pub fn #as_mut(&mut self) -> Option<&mut #param> {
            match self {
                Self::#leaf(value) => Some(value),
                #rest
            }
        }

        pub fn #into(self) -> Option<#param> {
            match self {
                Self::#leaf(value) => Some(value),
                #rest
            }
        }

        #[doc = #if_doc]
        pub fn #if_<'a, Ret, F>(&'a self, callback: F) -> #matcher<'a, #params, Ret>
        where
            F: FnOnce(&'a #param) -> Ret + 'a,
        {
            #matcher::new(self).#if_(callback)
        }
    }
}
