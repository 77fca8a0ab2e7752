use anyhow::{Context, Result};
use log::debug;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::filter::SuffixFilter;

/// Depth-first directory scanner collecting files that match a name filter.
///
/// Paths are appended in the order the filesystem yields them; no sorting
/// or deduplication is performed.
#[derive(Debug, Clone)]
pub struct Scanner {
    filter: SuffixFilter,
    max_depth: Option<usize>,
    follow_links: bool,
}

impl Scanner {
    pub fn new(filter: SuffixFilter) -> Self {
        Self {
            filter,
            max_depth: None,
            follow_links: false,
        }
    }

    /// Bound the traversal depth. Entries directly under the root are at
    /// depth 1; `None` means unbounded.
    pub fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Descend into symlinked directories. Link cycles are detected and
    /// reported as errors rather than looping forever.
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Scan `dir` and return the matching file paths.
    pub fn scan(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        self.collect_into(dir, &mut files)?;
        Ok(files)
    }

    /// Scan `dir`, appending matching file paths to `files`.
    ///
    /// The first listing error aborts the traversal and propagates; paths
    /// already appended are left in place.
    pub fn collect_into(&self, dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
        let mut walker = WalkDir::new(dir).follow_links(self.follow_links);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if self.follow_links && is_dangling_link(&err) => {
                    debug!(
                        "Skipping dangling symlink {}",
                        err.path().unwrap_or(dir).display()
                    );
                    continue;
                }
                Err(err) => {
                    return Err(err).with_context(|| {
                        format!("Failed to read directory entry in {}", dir.display())
                    });
                }
            };
            let path = entry.path();

            if !path.is_file() {
                // Directories are recursed into by the walker; broken
                // symlinks, sockets and the like are skipped.
                continue;
            }

            let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if self.filter.matches(file_name) {
                debug!("Collected {}", path.display());
                files.push(path.to_path_buf());
            }
        }

        Ok(())
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(SuffixFilter::default())
    }
}

/// A followed symlink whose target no longer exists. Link loops and
/// listing failures do not qualify and stay fatal.
fn is_dangling_link(err: &walkdir::Error) -> bool {
    if err.loop_ancestor().is_some() {
        return false;
    }
    let not_found = err
        .io_error()
        .map_or(false, |io_err| io_err.kind() == io::ErrorKind::NotFound);
    not_found
        && err.path().map_or(false, |path| {
            path.symlink_metadata()
                .map_or(false, |meta| meta.file_type().is_symlink())
        })
}
