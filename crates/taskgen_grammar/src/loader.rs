//! Grammar sources.

use std::collections::BTreeMap;

use taskgen_foundation::{Error, Result};

/// Supplies grammar text by path and resolves paths named in directives.
pub trait GrammarLoader {
    /// Reads the text of the grammar at `path`.
    ///
    /// # Errors
    /// Returns an `Io` error if the source does not exist or cannot be read.
    fn read(&self, path: &str) -> Result<String>;

    /// Resolves `target`, as written in a directive of the file at `base`.
    ///
    /// The default treats paths as `/`-separated and relative to the
    /// directory of `base`.
    fn resolve(&self, base: &str, target: &str) -> String {
        if target.starts_with('/') {
            return target.to_string();
        }
        match base.rfind('/') {
            Some(slash) => format!("{}/{target}", &base[..slash]),
            None => target.to_string(),
        }
    }
}

/// An in-memory set of grammar files keyed by path.
#[derive(Clone, Debug, Default)]
pub struct MemoryLoader {
    files: BTreeMap<String, String>,
}

impl MemoryLoader {
    /// Creates an empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, returning the loader.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    /// Adds or replaces a file.
    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }

    /// Returns every stored path in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

impl GrammarLoader for MemoryLoader {
    fn read(&self, path: &str) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::io(path, "no such grammar"))
    }
}
