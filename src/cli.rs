//! Minimal CLI: generate (default) | check | plan
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use variant_gen::driver::{self, Config, DEFAULT_MAX_ARITY, DEFAULT_SUPPORT_PATH};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate the VariantN sum-type family (arities 2..=max) into a single Rust source file
#[derive(Parser, Debug)]
#[command(name = "variant-gen", version, args_conflicts_with_subcommands = true)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Option<Command>,

    /// running without a subcommand is `generate`
    #[command(flatten)]
    generate: GenerateOut,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// emit the artifact, overwriting any previous one
    Generate(GenerateOut),
    /// fail if the artifact on disk differs from a fresh generation
    Check(CheckOut),
    /// print the ordered section list as JSON
    Plan(PlanOut),
}

#[derive(Args, Debug, Clone)]
struct GenerationSettings {
    /// largest arity in the family
    #[arg(long, default_value_t = DEFAULT_MAX_ARITY)]
    max_arity: usize,

    /// module path the generated code imports Duplicable, Relinquishable and MissingHandler from
    #[arg(long, default_value = DEFAULT_SUPPORT_PATH)]
    support_path: String,
}

#[derive(Args, Debug, Clone)]
struct GenerateOut {
    #[command(flatten)]
    settings: GenerationSettings,

    /// output .rs file (defaults to generated/variant.rs next to this crate)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// print to stdout instead of writing the file
    #[arg(long, conflicts_with = "out")]
    stdout: bool,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(Args, Debug, Clone)]
struct CheckOut {
    #[command(flatten)]
    settings: GenerationSettings,

    /// artifact to verify
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct PlanOut {
    /// largest arity in the family
    #[arg(long, default_value_t = DEFAULT_MAX_ARITY)]
    max_arity: usize,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl GenerationSettings {
    fn config(&self, out: Option<&PathBuf>) -> Config {
        Config {
            max_arity: self.max_arity,
            output: out.cloned().unwrap_or_else(driver::default_output),
            support_path: self.support_path.clone(),
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            None => self.generate.run(),
            Some(Command::Generate(target)) => target.run(),
            Some(Command::Check(target)) => target.run(),
            Some(Command::Plan(target)) => target.run(),
        }
    }
}

impl GenerateOut {
    fn run(&self) -> anyhow::Result<()> {
        let config = self.settings.config(self.out.as_ref());

        // debug path
        if self.no_op {
            eprintln!("{config:#?}");
            return Ok(());
        }

        if self.stdout {
            let src = driver::generate(&config).context("failed to generate variant family")?;
            print!("{src}");
            return Ok(());
        }

        let out = driver::write(&config)
            .with_context(|| format!("failed to write {}", config.output.display()))?;
        eprintln!(
            "{} {} (arities 2..={})",
            "wrote".green().bold(),
            out.display(),
            config.max_arity
        );
        Ok(())
    }
}

impl CheckOut {
    fn run(&self) -> anyhow::Result<()> {
        let config = self.settings.config(self.out.as_ref());
        driver::check(&config)?;
        eprintln!("{} {}", "up to date".green().bold(), config.output.display());
        Ok(())
    }
}

impl PlanOut {
    fn run(&self) -> anyhow::Result<()> {
        let sections = variant_gen::plan::plan(self.max_arity)?;
        let json = serde_json::to_string_pretty(&sections).context("failed to serialize plan")?;
        println!("{json}");
        Ok(())
    }
}
