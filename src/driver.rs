//! One generation run: plan, emit, persist.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::codegen::Codegen;
use crate::error::{GenError, Result};
use crate::ir::Arity;
use crate::plan::plan;

pub const DEFAULT_MAX_ARITY: usize = 20;
pub const OUTPUT_FILE_NAME: &str = "variant.rs";
pub const DEFAULT_SUPPORT_PATH: &str = "crate";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Largest family emitted; families start at arity 2.
    pub max_arity: usize,
    /// Where the artifact is written. Always fully overwritten.
    pub output: PathBuf,
    /// Module path the emitted code imports its support items from.
    pub support_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_arity: DEFAULT_MAX_ARITY,
            output: default_output(),
            support_path: DEFAULT_SUPPORT_PATH.to_owned(),
        }
    }
}

/// `<generator crate>/generated/variant.rs`
pub fn default_output() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("generated")
        .join(OUTPUT_FILE_NAME)
}

impl Config {
    fn support(&self) -> Result<syn::Path> {
        syn::parse_str(&self.support_path).map_err(|source| GenError::InvalidSupportPath {
            path: self.support_path.clone(),
            source,
        })
    }
}

/// Produce the full artifact text. Identical configs give identical text.
pub fn generate(config: &Config) -> Result<String> {
    let max_arity = Arity::new(config.max_arity)?;
    let mut cg = Codegen::new(config.support()?, max_arity);
    for section in plan(config.max_arity)? {
        cg.emit(&section);
    }
    cg.into_string()
}

/// Generate and overwrite `config.output`, creating its directory if needed.
pub fn write(config: &Config) -> Result<&Path> {
    let src = generate(config)?;
    let out = config.output.as_path();
    if let Some(parent) = out.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| GenError::io(parent, source))?;
    }
    fs::write(out, &src).map_err(|source| GenError::io(out, source))?;
    info!(path = %out.display(), bytes = src.len(), max_arity = config.max_arity, "wrote artifact");
    Ok(out)
}

/// Fail with `Stale` unless `config.output` holds exactly what `generate` would write.
pub fn check(config: &Config) -> Result<()> {
    let expected = generate(config)?;
    let out = config.output.as_path();
    let actual = fs::read_to_string(out).map_err(|source| GenError::io(out, source))?;
    if actual != expected {
        warn!(path = %out.display(), "artifact differs from a fresh generation");
        return Err(GenError::Stale { path: out.to_path_buf() });
    }
    Ok(())
}
