use anyhow::Context;
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};

use pybundle::archive::write_archive;
use pybundle::filter::SuffixFilter;
use pybundle::manifest::Manifest;
use pybundle::walk::Scanner;

#[derive(Parser, Debug)]
#[command(
    name = "pybundle",
    version = "1.0",
    about = "Collects Python source files from a directory tree and bundles them into a tarball"
)]
struct Args {
    /// Directory to scan
    root: PathBuf,

    /// Path of the tar.gz archive to write (defaults to <root-name>.tar.gz)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// File extension to collect, repeatable (defaults to "py" and "ipynb")
    #[arg(short, long = "ext")]
    extensions: Vec<String>,

    /// Maximum traversal depth; files directly under the root are at depth 1
    #[arg(long)]
    max_depth: Option<usize>,

    /// Descend into symlinked directories
    #[arg(long)]
    follow_links: bool,

    /// Print a JSON manifest of the matching files instead of writing an archive
    #[arg(short, long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logger with INFO level by default, but respect RUST_LOG env var
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if !args.root.is_dir() {
        anyhow::bail!("Not a directory: {}", args.root.display());
    }

    let filter = if args.extensions.is_empty() {
        SuffixFilter::default()
    } else {
        SuffixFilter::new(&args.extensions)
    };

    let scanner = Scanner::new(filter.clone())
        .max_depth(args.max_depth)
        .follow_links(args.follow_links);
    let files = scanner
        .scan(&args.root)
        .with_context(|| format!("Failed to scan {}", args.root.display()))?;
    info!(
        "Collected {} matching files under {}",
        files.len(),
        args.root.display()
    );

    if args.list {
        let manifest = Manifest::new(args.root, &filter, files);
        let json_output = serde_json::to_string_pretty(&manifest)
            .context("Failed to serialize manifest to JSON")?;
        println!("{}", json_output);
        return Ok(());
    }

    let output = args.output.unwrap_or_else(|| default_output(&args.root));
    write_archive(&args.root, &files, &output)
        .with_context(|| format!("Failed to write archive {}", output.display()))?;
    info!("Wrote {} files to {}", files.len(), output.display());

    Ok(())
}

/// Name the archive after the scanned directory, e.g. `proj/` -> `proj.tar.gz`.
fn default_output(root: &Path) -> PathBuf {
    let name = root
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "bundle".to_string());
    PathBuf::from(format!("{}.tar.gz", name))
}
