//! Common types and utilities for wiigt commands.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// A complete source text and the name it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// File path, or `<stdin>`.
    pub name: String,
    /// The whole file contents.
    pub text: String,
}

impl Source {
    /// Creates a source from in-memory text.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Reads a source from a file, or from stdin for `-`.
    pub fn read(path: &Path) -> Result<Self> {
        if path == Path::new(STDIN_PATH) {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            return Ok(Self::new("<stdin>", text));
        }

        let text = std::fs::read_to_string(path)?;
        Ok(Self::new(path.display().to_string(), text))
    }
}

/// Reads every input, defaulting to stdin when none are given.
pub fn read_sources(inputs: &[PathBuf]) -> Result<Vec<Source>> {
    if inputs.is_empty() {
        return Ok(vec![Source::read(Path::new(STDIN_PATH))?]);
    }
    inputs.iter().map(|path| Source::read(path)).collect()
}
