//! Token emission for every section of the artifact.
//!
//! Each emitter turns one `ir::Section` into a `TokenStream`; `Codegen`
//! concatenates them in plan order, re-parses the whole thing as a
//! `syn::File` and pretty-prints it.

pub mod dynamic;
pub mod family;
pub mod matcher;
pub mod params;
pub mod transform;

use proc_macro2::TokenStream;
use quote::quote;
use tracing::debug;

use crate::error::Result;
use crate::ir::{Arity, Section};

pub use params::GenericParams;

pub struct Codegen {
    support: syn::Path,
    max_arity: Arity,
    items: TokenStream,
    emitted: usize,
}

impl Codegen {
    /// `support` is the module the emitted code imports its capability
    /// traits and `MissingHandler` from.
    pub fn new(support: syn::Path, max_arity: Arity) -> Self {
        Codegen {
            support,
            max_arity,
            items: TokenStream::new(),
            emitted: 0,
        }
    }

    pub fn emit(&mut self, section: &Section) {
        debug!(?section, "emitting section");
        let tokens = match *section {
            Section::Family { arity } => {
                let family = family::emit_family(arity);
                let matcher = matcher::emit_matcher(arity);
                quote! { #family #matcher }
            }
            Section::Dynamic => dynamic::emit_dynamic(),
            Section::Match { arity } => matcher::emit_match_fn(arity),
            Section::Transform { arity, capability } => transform::emit_transform(arity, capability),
        };
        self.items.extend(tokens);
        self.emitted += 1;
    }

    pub fn into_string(self) -> Result<String> {
        let support = &self.support;
        let items = self.items;
        let tokens = quote! {
            use ::core::any::{Any, TypeId};
            use ::std::collections::HashMap;

            use #support::{Duplicable, MissingHandler, Relinquishable};

            #items
        };
        let file: syn::File = syn::parse2(tokens)?;
        debug!(sections = self.emitted, items = file.items.len(), "emitted file parsed");

        let mut out = format!(
            "// @generated by variant-gen (max arity {}). Do not edit by hand.\n\n",
            self.max_arity
        );
        out.push_str(&prettyplease::unparse(&file));
        Ok(out)
    }
}
