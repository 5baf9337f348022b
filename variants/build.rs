use std::env;
use std::error::Error;
use std::path::PathBuf;

use variant_gen::driver::{Config, DEFAULT_MAX_ARITY, OUTPUT_FILE_NAME};

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let config = Config {
        max_arity: DEFAULT_MAX_ARITY,
        output: out_dir.join(OUTPUT_FILE_NAME),
        support_path: "crate".to_owned(),
    };
    variant_gen::write(&config)?;
    Ok(())
}
