//! Generator for a family of fixed-arity sum types.
//!
//! For every arity `2..=max` the artifact declares `VariantN<T1..TN>`, its
//! per-alternative accessors, a `VariantNMatcher` builder, a free `matchN`
//! function and `Duplicable`/`Relinquishable` impls, plus a single
//! runtime-typed `Variant`. See [`plan::plan`] for the declaration order.
//!
//! ```no_run
//! let src = variant_gen::generate(&variant_gen::Config::default())?;
//! assert!(src.contains("pub enum Variant20<"));
//! # Ok::<(), variant_gen::GenError>(())
//! ```

pub mod codegen;
pub mod driver;
pub mod error;
pub mod ir;
pub mod plan;

pub use driver::{Config, check, generate, write};
pub use error::{GenError, Result};
