//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{IndentStyle, MANIFEST_FILE_NAME, Manifest, Overrides, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE_NAME)
    }
}

impl Manifest {
    /// Parse a ts2delphi.toml file from the given path.
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

    /// Parse a ts2delphi.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }

    /// Apply command-line overrides.
    pub fn apply_overrides(&mut self, overrides: Overrides) -> Result<()> {
        if let Some(main) = overrides.main {
            if !main.ends_with(".ts") {
                return Err(Box::new(Error::InvalidOverride {
                    flag: "main",
                    message: format!("'{}' is not a .ts file", main),
                }));
            }
            self.project.main = Some(main);
        }
        if let Some(input) = overrides.input {
            self.project.input = input;
        }
        if let Some(output) = overrides.output {
            self.project.output = output;
        }
        Ok(())
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    if let Some(main) = &manifest.project.main {
        if !main.ends_with(".ts") {
            return Err(ctx.source_context().validation_error(
                format!("main file '{}' must be a .ts file", main),
                ctx.find_string_span(main),
            ));
        }
    }

    if let IndentStyle::Spaces(width) = manifest.translate.indent {
        if !IndentStyle::SPACE_WIDTHS.contains(&width) {
            return Err(ctx.source_context().validation_error(
                format!("indent width must be 2, 4 or 8, found {}", width),
                ctx.find_key_span("indent"),
            ));
        }
    }

    for prefix in &manifest.translate.system_prefixes {
        if prefix.is_empty() {
            return Err(ctx.source_context().validation_error(
                "system prefixes cannot be empty",
                ctx.find_key_span("system_prefixes"),
            ));
        }
    }

    for keyword in &manifest.translate.reserved_keywords {
        ctx.validate_keyword(keyword)?;
    }

    Ok(())
}
