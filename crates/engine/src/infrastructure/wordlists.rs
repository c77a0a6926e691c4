//! Line-delimited wordlists read from a data directory.

use std::path::PathBuf;

use crate::infrastructure::ports::Wordlists;

/// Reads `<dir>/<resource>.txt`, one entry per line.
///
/// A missing or unreadable file is logged and treated as an empty list; the
/// generator substitutes its sentinel text.
#[derive(Debug, Clone)]
pub struct FileWordlists {
    dir: PathBuf,
}

impl FileWordlists {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, resource: &str) -> PathBuf {
        self.dir.join(format!("{resource}.txt"))
    }
}

impl Wordlists for FileWordlists {
    fn lines(&self, resource: &str) -> Vec<String> {
        let path = self.path_for(resource);
        match std::fs::read_to_string(&path) {
            Ok(contents) => contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            Err(e) => {
                tracing::warn!(
                    resource = %resource,
                    path = %path.display(),
                    error = %e,
                    "Wordlist unavailable, using fallback"
                );
                Vec::new()
            }
        }
    }
}
