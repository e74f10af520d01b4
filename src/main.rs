//! # glassgen CLI Entry Point
//!
//! ## Usage
//!
//! ```bash
//! # Generate preview pages, then the manifest
//! glassgen build
//!
//! # Only one of the two passes
//! glassgen pages
//! glassgen manifest
//!
//! # Another project root, abort on slug collisions
//! glassgen --root ../site pages --on-duplicate error
//!
//! # Show which demo template a name would get
//! glassgen resolve "Button Press Squish"
//! ```
//!
//! Progress goes to stdout; logs go to stderr and honour `RUST_LOG`.

use glassgen::catalog::{load_catalog_or_empty, to_slug};
use glassgen::config::Config;
use glassgen::generator::{self, DuplicatePolicy};
use glassgen::manifest;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// glassgen - Generate liquid-glass animation previews and their manifest
#[derive(Parser, Debug)]
#[command(name = "glassgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate static preview pages for a UI animation catalog", long_about = None)]
struct Args {
    /// Project root; relative config paths resolve against it
    #[arg(short, long, value_name = "DIR", global = true)]
    root: Option<PathBuf>,

    /// Config file to use instead of glassgen.json
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Write index.html and styles.css for every catalog animation
    Pages {
        /// Override the configured duplicate slug policy
        #[arg(long, value_enum, value_name = "POLICY")]
        on_duplicate: Option<DuplicatePolicy>,
    },
    /// Scan the library and components directories and write manifest.js
    Manifest,
    /// Generate pages, then the manifest
    Build {
        /// Override the configured duplicate slug policy
        #[arg(long, value_enum, value_name = "POLICY")]
        on_duplicate: Option<DuplicatePolicy>,
    },
    /// Print the demo template chosen for an animation name
    Resolve {
        name: String,
        /// Category, used to show the output directory
        #[arg(long)]
        category: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    run(args)
}

/// Log to stderr; `RUST_LOG` takes precedence over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: Args) -> Result<()> {
    if let Command::Resolve { name, category } = &args.command {
        return print_resolution(name, category.as_deref());
    }

    let root = match &args.root {
        Some(path) => path
            .canonicalize()
            .with_context(|| format!("Failed to access directory: {}", path.display()))?,
        None => std::env::current_dir().context("Failed to get current working directory")?,
    };
    if !root.is_dir() {
        anyhow::bail!("Project root is not a directory: {}", root.display());
    }

    let config = Config::discover(&root, args.config.as_deref())?.resolved(&root);
    info!(root = %root.display(), "Loaded configuration");

    match args.command {
        Command::Pages { on_duplicate } => run_pages(&config, on_duplicate),
        Command::Manifest => run_manifest(&config),
        Command::Build { on_duplicate } => {
            run_pages(&config, on_duplicate)?;
            run_manifest(&config)
        }
        Command::Resolve { .. } => Ok(()),
    }
}

fn run_pages(config: &Config, on_duplicate: Option<DuplicatePolicy>) -> Result<()> {
    let catalog = load_catalog_or_empty(&config.catalog);
    let policy = on_duplicate.unwrap_or(config.duplicate_slugs);

    let report = generator::generate_pages(
        &catalog,
        &config.library_dir,
        policy,
        |done, total, name| {
            println!("✓ Generated: {done}/{total} - {name}");
        },
    )?;

    println!(
        "\n✅ Successfully generated {} animation previews",
        report.generated
    );
    if !report.skipped.is_empty() {
        println!("⚠ Skipped {} with empty names", report.skipped.len());
    }
    if !report.duplicates.is_empty() {
        println!(
            "⚠ {} duplicate slugs overwrote earlier pages",
            report.duplicates.len()
        );
    }

    Ok(())
}

fn run_manifest(config: &Config) -> Result<()> {
    let built = manifest::build_from_disk(
        &config.catalog,
        &config.library_dir,
        &config.components_dir,
        config.exclude_library_from_components,
    )?;
    manifest::write_manifest(&config.manifest, &built)?;

    println!(
        "✅ Manifest written to {} ({} animations, {} components)",
        config.manifest.display(),
        built.animation_count(),
        built.components.len()
    );

    Ok(())
}

fn print_resolution(name: &str, category: Option<&str>) -> Result<()> {
    let resolution = generator::resolve(name, category.unwrap_or_default())?;
    let slug = to_slug(name)?;
    let matches: Vec<_> = generator::matching_rules(name)
        .iter()
        .map(|r| r.id)
        .collect();

    println!("Name:     {name}");
    println!("Slug:     {slug}");
    if let Some(category) = category {
        println!("Output:   {}/{slug}", to_slug(category)?);
    }
    println!("Template: {}", resolution.rule_id());
    if matches.is_empty() {
        println!("Matches:  (none)");
    } else {
        println!("Matches:  {}", matches.join(", "));
    }

    Ok(())
}
