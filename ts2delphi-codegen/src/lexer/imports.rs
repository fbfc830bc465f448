//! Import declarations become `uses` entries.

use std::{
    ffi::OsStr,
    path::{Component, Path, PathBuf},
};

use tracing::debug;
use ts2delphi_ast::SourceFile;
use ts2delphi_core::to_forward_slashes;

use super::Lexer;
use crate::{Result, TranslateError, TranslationContext, unit::UnitModel};

/// Registers imported units.
///
/// System imports (`@delphi/system/classes`) name Pascal units directly;
/// any other import names a project unit generated next to this one.
pub struct ImportStage;

impl Lexer for ImportStage {
    fn name(&self) -> &'static str {
        "imports"
    }

    fn description(&self) -> &'static str {
        "Convert import declarations into the uses clause"
    }

    fn lex<'a>(
        &self,
        file: &'a SourceFile,
        unit: &mut UnitModel<'a>,
        ctx: &mut TranslationContext<'_>,
    ) -> Result<()> {
        let config = ctx.config();

        for import in &file.imports {
            let specifier = import.specifier.as_str();
            debug!(specifier, "parsing import");

            if let Some(prefix) = config.system_prefix(specifier) {
                let name = specifier[prefix.len()..].trim_matches('/').replace('/', ".");
                if name.is_empty() {
                    ctx.add_warning(
                        self.name(),
                        format!("import '{}' names no unit and was skipped", specifier),
                    );
                    continue;
                }
                unit.register_used_unit(&name, None);
                continue;
            }

            let relative = resolve_import(&config.input_root, specifier).ok_or_else(|| {
                TranslateError::ImportOutsideRoot {
                    file: ctx.file().to_path_buf(),
                    specifier: specifier.to_string(),
                }
            })?;

            let name = relative
                .file_name()
                .and_then(OsStr::to_str)
                .unwrap_or_default()
                .to_string();
            if config.reserved_keywords.contains(&name) {
                return Err(TranslateError::ReservedKeyword {
                    file: ctx.file().to_path_buf(),
                    name,
                });
            }

            let path = format!("{}.pas", to_forward_slashes(&relative.to_string_lossy()));
            unit.register_used_unit(&name, Some(&path));
        }

        Ok(())
    }
}

/// Resolve a project import against the input root.
///
/// Returns the path relative to the root, without a `.ts` or `.pas`
/// extension, or `None` when it leaves the root.
fn resolve_import(input_root: &Path, specifier: &str) -> Option<PathBuf> {
    let import_path = Path::new(specifier);
    let import_path = if import_path.is_absolute() {
        import_path.strip_prefix(input_root).ok()?
    } else {
        import_path
    };

    let mut parts: Vec<&OsStr> = Vec::new();
    for component in import_path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                parts.pop()?;
            }
            Component::Normal(part) => parts.push(part),
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    let mut resolved: PathBuf = parts.into_iter().collect();
    if resolved.as_os_str().is_empty() {
        return None;
    }
    if matches!(
        resolved.extension().and_then(OsStr::to_str),
        Some("ts" | "pas")
    ) {
        resolved.set_extension("");
    }
    Some(resolved)
}
