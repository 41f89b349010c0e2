//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, lower::lower};
use crate::{Error, Reflection, Result, error::SourceContext};

impl FromStr for Reflection {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "hierarchy.toml")
    }
}

impl Reflection {
    /// Parse a hierarchy.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a hierarchy.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest and lower it into a hierarchy, using `filename` for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Reflection> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    let hierarchy = lower(&manifest, &source_ctx)?;
    Ok(Reflection {
        naming: manifest.naming,
        hierarchy,
    })
}
