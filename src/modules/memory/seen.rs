use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;

/// Persisted record of already-delivered article URLs. Backed by a flat
/// text file, one URL per line, rewritten wholesale on every save.
pub struct SeenArticles {
    path: PathBuf,
    urls: HashSet<String>,
}

impl SeenArticles {
    /// A missing or unreadable file starts the set empty; load never fails.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let urls = match fs::read_to_string(&path) {
            Ok(contents) => contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    warn!(path = %path.display(), error = %e, "Could not read seen-articles file; starting empty");
                }
                HashSet::new()
            }
        };
        Self { path, urls }
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn insert(&mut self, url: &str) -> bool {
        self.urls.insert(url.to_string())
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Rewrite the backing file. Line order is whatever the set yields.
    pub fn save(&self) -> Result<()> {
        let mut out = String::new();
        for url in &self.urls {
            out.push_str(url);
            out.push('\n');
        }
        fs::write(&self.path, out).with_context(|| {
            format!("failed to persist seen articles to {}", self.path.display())
        })
    }
}
