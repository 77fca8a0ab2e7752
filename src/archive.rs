use anyhow::{Context, Result};
use flate2::Compression;
use flate2::write::GzEncoder;
use log::debug;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Bundle `files` into a gzip-compressed tar at `out`.
///
/// Entries are stored under their path relative to `root` when the
/// collected path lies below it, otherwise under the path as given.
/// Exactly the given files end up in the archive.
pub fn write_archive(root: &Path, files: &[PathBuf], out: &Path) -> Result<()> {
    let file = File::create(out)
        .with_context(|| format!("Failed to create archive file {}", out.display()))?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for path in files {
        let name = path.strip_prefix(root).unwrap_or(path);
        debug!("Archiving {} as {}", path.display(), name.display());
        builder
            .append_path_with_name(path, name)
            .with_context(|| format!("Failed to add {} to archive", path.display()))?;
    }

    let encoder = builder
        .into_inner()
        .context("Failed to finish tar archive")?;
    encoder.finish().context("Failed to finish gzip stream")?;
    Ok(())
}
