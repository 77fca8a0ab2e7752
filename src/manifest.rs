use serde::Serialize;
use std::path::PathBuf;

use crate::filter::SuffixFilter;

/// JSON-serializable record of one scan: the root that was walked, the
/// suffixes that were matched and the collected paths in discovery order.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub root: PathBuf,
    pub suffixes: Vec<String>,
    pub files: Vec<PathBuf>,
}

impl Manifest {
    pub fn new(root: PathBuf, filter: &SuffixFilter, files: Vec<PathBuf>) -> Self {
        Self {
            root,
            suffixes: filter.suffixes().to_vec(),
            files,
        }
    }
}
