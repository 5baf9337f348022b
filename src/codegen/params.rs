//! Generic parameter lists: `T1, T2, ..` or `T1: Bound<T1>, T2: Bound<T2>, ..`.

use std::fmt;

use proc_macro2::{Ident, TokenStream};
use quote::{ToTokens, format_ident, quote};

use crate::error::Result;
use crate::ir::{Arity, Capability};

/// Name of the k-th type parameter.
pub fn param_ident(k: usize) -> Ident {
    format_ident!("T{}", k)
}

/// Comma-separated parameter list of one arity, optionally bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericParams {
    arity: Arity,
    bound: Option<Capability>,
}

impl GenericParams {
    pub fn new(arity: Arity, bound: Option<Capability>) -> Self {
        GenericParams { arity, bound }
    }

    pub fn plain(arity: Arity) -> Self {
        Self::new(arity, None)
    }

    pub fn bounded(arity: Arity, capability: Capability) -> Self {
        Self::new(arity, Some(capability))
    }

    pub fn idents(&self) -> Vec<Ident> {
        self.arity.indices().map(param_ident).collect()
    }
}

/// Render the list as text. Rejects arity zero.
pub fn render(arity: usize, bound: Option<Capability>) -> Result<String> {
    Ok(GenericParams::new(Arity::new(arity)?, bound).to_string())
}

impl fmt::Display for GenericParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for k in self.arity.indices() {
            if k > 1 {
                f.write_str(", ")?;
            }
            match self.bound {
                Some(capability) => write!(f, "T{k}: {capability}<T{k}>")?,
                None => write!(f, "T{k}")?,
            }
        }
        Ok(())
    }
}

impl ToTokens for GenericParams {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let params = self.idents();
        match self.bound {
            Some(capability) => {
                let bound = format_ident!("{}", capability.bound());
                tokens.extend(quote! { #(#params: #bound<#params>),* });
            }
            None => tokens.extend(quote! { #(#params),* }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenError;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_list() {
        assert_eq!(render(3, None).unwrap(), "T1, T2, T3");
    }

    #[test]
    fn bounded_list() {
        assert_eq!(
            render(2, Some(Capability::Duplicable)).unwrap(),
            "T1: Duplicable<T1>, T2: Duplicable<T2>"
        );
        assert_eq!(
            render(1, Some(Capability::Relinquishable)).unwrap(),
            "T1: Relinquishable<T1>"
        );
    }

    #[test]
    fn zero_arity_is_rejected() {
        assert!(matches!(render(0, None), Err(GenError::InvalidArity { arity: 0 })));
    }

    #[test]
    fn tokens_agree_with_text() {
        let arity = Arity::new(4).unwrap();
        for bound in [None, Some(Capability::Duplicable), Some(Capability::Relinquishable)] {
            let params = GenericParams::new(arity, bound);
            let parsed: syn::Generics = syn::parse_str(&format!("<{params}>")).unwrap();
            let quoted: syn::Generics = syn::parse2(quote!(<#params>)).unwrap();
            assert_eq!(parsed, quoted);
        }
    }

    #[test]
    fn rendering_is_stable() {
        let first = render(20, Some(Capability::Duplicable)).unwrap();
        let second = render(20, Some(Capability::Duplicable)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.matches(": Duplicable<").count(), 20);
    }
}
