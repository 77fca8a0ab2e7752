/// File-name predicate selecting files by their trailing extension.
///
/// A name matches iff it ends with one of the configured dot-suffixes and
/// has a non-empty stem before the dot, so `a.py` matches while
/// `myfile.pytest` and a bare `.py` do not. Matching is case-sensitive.
#[derive(Debug, Clone)]
pub struct SuffixFilter {
    suffixes: Vec<String>,
}

impl SuffixFilter {
    /// Build a filter from extension names, with or without the leading dot
    /// (`"py"` and `".py"` are equivalent). Empty extensions are ignored.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffixes = extensions
            .into_iter()
            .filter_map(|ext| {
                let ext = ext.as_ref();
                if ext.trim_start_matches('.').is_empty() {
                    return None;
                }
                if ext.starts_with('.') {
                    Some(ext.to_string())
                } else {
                    Some(format!(".{}", ext))
                }
            })
            .collect();
        Self { suffixes }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.suffixes.iter().any(|suffix| {
            file_name
                .strip_suffix(suffix.as_str())
                .map_or(false, |stem| !stem.is_empty())
        })
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

impl Default for SuffixFilter {
    /// The Python source artifacts the bundler was built for.
    fn default() -> Self {
        Self::new(["py", "ipynb"])
    }
}
