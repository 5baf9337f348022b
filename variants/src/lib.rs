//! Fixed-arity sum types `Variant2` through `Variant20`, their matchers, and
//! the runtime-typed [`Variant`].
//!
//! The definitions are generated at build time by `variant-gen`; this crate
//! supplies the capability traits and the error they refer to.
//!
//! ```
//! use variants::{Variant3, match3};
//!
//! let value: Variant3<u32, String, bool> = Variant3::V2("abc".to_owned());
//! assert!(value.is_v2());
//! assert_eq!(value.as_v1(), None);
//!
//! let described = match3(&value, |n| format!("number {n}"), |s| format!("text {s}"), |b| format!("flag {b}"));
//! assert_eq!(described, "text abc");
//! ```

mod concept;
mod error;

pub use concept::{Duplicable, Relinquishable};
pub use error::MissingHandler;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/variant.rs"));
}

pub use generated::*;
