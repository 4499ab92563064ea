use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use scraper::Html;
use serde::Deserialize;
use tracing::{info, warn};

use block_importer::config::{OutputFormat, Settings};
use block_importer::{catalog, import_page, Catalog, ImportedPage, TransformOptions};

#[derive(Parser)]
#[command(name = "block_importer", about = "Turn a saved marketing page into authoring block tables")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform one saved page
    Transform {
        /// Original URL of the page (drives the output path)
        #[arg(short, long)]
        url: String,
        /// Saved HTML of the page
        #[arg(short, long)]
        input: PathBuf,
        /// Content catalog JSON (default: built-in)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
        /// Output directory (default: settings)
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Template identifier for the metadata block
        #[arg(short, long)]
        template: Option<String>,
        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// Transform every page listed in a manifest (JSON list of {url, input})
    Batch {
        #[arg(short, long)]
        manifest: PathBuf,
        #[arg(short, long)]
        catalog: Option<PathBuf>,
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Print the storage path derived from a URL
    Path { url: String },
    /// Print the built-in content catalog
    Catalog,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    url: String,
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Transform {
            url,
            input,
            catalog,
            out,
            format,
            template,
            stdout,
        } => {
            let settings = Settings::load()?;
            let catalog = load_catalog(catalog.as_deref())?;
            let options = TransformOptions {
                template: template.unwrap_or(settings.template),
            };
            let format = format.unwrap_or(settings.format);

            let page = transform_file(&url, &input, &catalog, &options)?;
            if stdout {
                println!("{}", render(&page, format)?);
            } else {
                let out_dir = out.unwrap_or(settings.output_dir);
                let written = write_page(&out_dir, &page, format)?;
                println!("{} -> {}", url, written.display());
            }
            Ok(())
        }
        Commands::Batch {
            manifest,
            catalog,
            out,
            format,
        } => {
            let settings = Settings::load()?;
            let catalog = load_catalog(catalog.as_deref())?;
            let entries = read_manifest(&manifest)?;
            if entries.is_empty() {
                println!("Manifest lists no pages.");
                return Ok(());
            }
            let options = TransformOptions {
                template: settings.template,
            };
            let out_dir = out.unwrap_or(settings.output_dir);
            let format = format.unwrap_or(settings.format);

            println!("Transforming {} pages...", entries.len());
            let counts = transform_batch(&entries, &catalog, &options, &out_dir, format)?;
            println!("Done: {} written, {} errors.", counts.ok, counts.errors);
            Ok(())
        }
        Commands::Path { url } => {
            println!("{}", block_importer::document_path(&url)?);
            Ok(())
        }
        Commands::Catalog => {
            print!("{}", catalog::builtin_json());
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    let catalog = match path {
        Some(p) => catalog::load(p)?,
        None => catalog::builtin()?,
    };
    Ok(catalog)
}

fn transform_file(
    url: &str,
    input: &Path,
    catalog: &Catalog,
    options: &TransformOptions,
) -> anyhow::Result<ImportedPage> {
    let html = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read page {}", input.display()))?;
    let document = Html::parse_document(&html);
    let page = import_page(&document, url, catalog, options)?;
    info!(url, path = %page.path, "Imported page");
    Ok(page)
}

fn render(page: &ImportedPage, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Html => page.main.to_html(),
        OutputFormat::Json => serde_json::to_string_pretty(page)?,
    })
}

/// Writes under `out_dir` at the page's document path, e.g. `/index` → `out/index.html`.
fn write_page(out_dir: &Path, page: &ImportedPage, format: OutputFormat) -> anyhow::Result<PathBuf> {
    let relative = format!("{}.{}", page.path.trim_start_matches('/'), format.extension());
    let target = out_dir.join(relative);
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&target, render(page, format)?)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    Ok(target)
}

/// Relative `input` paths resolve against the manifest's directory.
fn read_manifest(path: &Path) -> anyhow::Result<Vec<ManifestEntry>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;
    let mut entries: Vec<ManifestEntry> = serde_json::from_str(&json)
        .with_context(|| format!("Malformed manifest {}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    for entry in &mut entries {
        if entry.input.is_relative() {
            entry.input = base.join(&entry.input);
        }
    }
    Ok(entries)
}

struct BatchCounts {
    ok: usize,
    errors: usize,
}

fn transform_batch(
    entries: &[ManifestEntry],
    catalog: &Catalog,
    options: &TransformOptions,
    out_dir: &Path,
    format: OutputFormat,
) -> anyhow::Result<BatchCounts> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(entries.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let mut counts = BatchCounts { ok: 0, errors: 0 };

    for chunk in entries.chunks(100) {
        let results: Vec<_> = chunk
            .par_iter()
            .map(|e| transform_file(&e.url, &e.input, catalog, options))
            .collect();

        for (entry, result) in chunk.iter().zip(results) {
            match result.and_then(|page| write_page(out_dir, &page, format)) {
                Ok(_) => counts.ok += 1,
                Err(e) => {
                    warn!("Failed {}: {:#}", entry.url, e);
                    counts.errors += 1;
                }
            }
        }
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();
    Ok(counts)
}
