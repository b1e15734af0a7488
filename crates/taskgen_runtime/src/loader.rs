//! Grammars on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use taskgen_foundation::{Error, ErrorKind, Result};
use taskgen_grammar::{Grammar, GrammarLoader};

/// Reads grammar files relative to a root directory.
#[derive(Clone, Debug)]
pub struct FsLoader {
    root: PathBuf,
}

impl FsLoader {
    /// Creates a loader rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lists the `.txt` files directly under the root, sorted by name.
    ///
    /// # Errors
    /// Returns an `Io` error if the directory cannot be read.
    pub fn grammar_files(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.root)
            .map_err(|e| Error::io(self.root.display().to_string(), e.to_string()))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(self.root.display().to_string(), e.to_string()))?;
            let path = entry.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != "txt") {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                files.push(name.to_string());
            }
        }
        files.sort();
        Ok(files)
    }

    /// Loads every grammar under the root.
    ///
    /// Files without a `$Main` rule are treated as import-only and skipped.
    ///
    /// # Errors
    /// Returns the first error other than a missing start rule.
    pub fn load_all(&self) -> Result<Vec<Grammar>> {
        let mut grammars = Vec::new();
        for file in self.grammar_files()? {
            match Grammar::load(&file, self) {
                Ok(grammar) => grammars.push(grammar),
                Err(err) if matches!(err.kind, ErrorKind::MissingStartRule(_)) => {
                    debug!(file = %file, "no start rule, skipping");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(grammars)
    }
}

impl GrammarLoader for FsLoader {
    fn read(&self, path: &str) -> Result<String> {
        fs::read_to_string(self.root.join(path)).map_err(|e| Error::io(path, e.to_string()))
    }
}
