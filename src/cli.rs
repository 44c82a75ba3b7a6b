//! Command line interface for manifest template generation.
//!
//! The binary's default mode is the LSP server; the `generate` subcommand
//! drives the template synthesizer directly, either from flags or through
//! interactive prompts.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use dialoguer::{MultiSelect, Select};
use itertools::Itertools;

use crate::{
    catalog::{self, ProviderTemplate},
    config::Settings,
    template,
};

#[derive(Parser, Debug)]
#[command(name = "manifest-ls", version, about = "Language server and template generator for integration manifests")]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a sample manifest for a provider
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Provider identifier (prompted for when omitted)
    #[arg(long)]
    pub provider: Option<String>,

    /// Read objects to include, comma separated (prompted for when omitted)
    #[arg(long, value_delimiter = ',')]
    pub objects: Vec<String>,

    /// Include every catalogued object without prompting
    #[arg(long)]
    pub complete: bool,

    /// Write the manifest to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Run the `generate` subcommand.
pub fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let current_dir = std::env::current_dir().ok();
    let settings = Settings::new(current_dir.as_deref())?;

    let provider = match args.provider {
        Some(provider) => provider,
        None => prompt_provider()?,
    };

    let yaml = if args.complete {
        template::synthesize_complete(&provider, &settings)
    } else if !args.objects.is_empty() {
        template::synthesize(&provider, &args.objects, &settings)
    } else if let Some(provider_template) = catalog::template(&provider) {
        let selected = prompt_objects(provider_template)?;
        template::synthesize(&provider, &selected, &settings)
    } else {
        // Unknown providers have nothing to select from; the generic
        // placeholder template is the only shape on offer.
        template::synthesize_complete(&provider, &settings)
    };

    match args.output {
        Some(path) => {
            fs::write(&path, &yaml).with_context(|| format!("Can't write {}", path.display()))?;
            tracing::info!("Sample manifest written to {}", path.display());
        }
        None => print!("{yaml}"),
    }

    Ok(())
}

fn prompt_provider() -> anyhow::Result<String> {
    let providers = catalog::provider_ids().collect_vec();

    let selection = Select::new()
        .with_prompt("Select a provider for your integration")
        .items(&providers)
        .default(0)
        .interact()
        .context("Provider selection cancelled")?;

    Ok(providers[selection].to_string())
}

fn prompt_objects(provider_template: &ProviderTemplate) -> anyhow::Result<Vec<String>> {
    let objects = provider_template.read_object_names().collect_vec();

    let chosen = MultiSelect::new()
        .with_prompt("Select objects to read (space to toggle)")
        .items(&objects)
        .interact()
        .context("Object selection cancelled")?;

    Ok(chosen
        .into_iter()
        .map(|index| objects[index].to_string())
        .collect())
}
