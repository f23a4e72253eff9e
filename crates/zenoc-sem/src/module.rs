//! The module resolver: given an import path and a list of requested
//! names, locates the module source, parses it, and validates that every
//! requested name is actually exported.
//!
//! Keys into the module cache are canonicalized absolute paths rather
//! than the as-written import string, so `./math` and `../pkg/./math`
//! (if they name the same file) aren't parsed twice under different
//! spellings.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use zenoc_par::{parse_source, Program, Stmt};
use zenoc_util::{FileId, Handler, ModuleError, ModuleResult, SourceMap, Symbol};

/// The value and type names a module makes visible to importers, mapped
/// to their emitted (case-folded) name.
#[derive(Debug, Clone, Default)]
pub struct ModuleExports {
    pub functions: IndexMap<Symbol, String>,
    pub types: IndexMap<Symbol, String>,
}

/// One resolved module: its canonical path, parsed AST, and exports.
#[derive(Debug, Clone)]
pub struct ResolvedModule {
    pub canonical_path: String,
    pub program: Program,
    pub exports: ModuleExports,
}

pub struct ModuleResolver<'a> {
    std_dir: PathBuf,
    std_dir_canonical: String,
    handler: &'a Handler,
    /// Canonical paths currently being resolved, used to detect import
    /// cycles (open question #2: treated as an error).
    in_progress: Vec<String>,
    /// Canonical path -> resolved module, so re-importing the same file
    /// (however spelled) parses it only once.
    cache: IndexMap<String, ResolvedModule>,
}

impl<'a> ModuleResolver<'a> {
    pub fn new(std_dir: PathBuf, handler: &'a Handler) -> Self {
        let std_dir_canonical = std::fs::canonicalize(&std_dir)
            .unwrap_or_else(|_| std_dir.clone())
            .to_string_lossy()
            .into_owned();
        Self { std_dir, std_dir_canonical, handler, in_progress: Vec::new(), cache: IndexMap::new() }
    }

    pub fn cache(&self) -> &IndexMap<String, ResolvedModule> {
        &self.cache
    }

    /// Resolves `module_path` (as written in an `import ... from "..."`)
    /// relative to `current_dir`, parsing it if it isn't already cached.
    /// Returns the canonical path used as its cache key.
    pub fn resolve(&mut self, module_path: &str, current_dir: &Path) -> ModuleResult<String> {
        let file_path = locate_file(module_path, current_dir, &self.std_dir)?;
        let canonical = std::fs::canonicalize(&file_path)
            .unwrap_or_else(|_| file_path.clone())
            .to_string_lossy()
            .into_owned();

        if self.cache.contains_key(&canonical) {
            return Ok(canonical);
        }
        if self.in_progress.contains(&canonical) {
            return Err(ModuleError::ImportCycle(module_path.to_string()));
        }

        self.in_progress.push(canonical.clone());
        let result = self.parse_and_resolve(&file_path, &canonical, module_path);
        self.in_progress.pop();
        let (program, exports) = result?;
        self.cache.insert(canonical.clone(), ResolvedModule {
            canonical_path: canonical.clone(),
            program,
            exports,
        });
        Ok(canonical)
    }

    pub fn get(&self, canonical: &str) -> Option<&ResolvedModule> {
        self.cache.get(canonical)
    }

    fn parse_and_resolve(
        &mut self,
        file_path: &Path,
        canonical: &str,
        module_path: &str,
    ) -> ModuleResult<(Program, ModuleExports)> {
        let source = std::fs::read_to_string(file_path).map_err(|e| ModuleError::Io {
            path: module_path.to_string(),
            source: e,
        })?;

        let mut source_map = SourceMap::new();
        let file_id: FileId = source_map.add_file(file_path.to_string_lossy().into_owned(), source.clone());
        let (program, errors, _rich) = parse_source(&source, file_id, self.handler);
        if !errors.is_empty() {
            return Err(ModuleError::ParseFailed {
                path: module_path.to_string(),
                messages: errors.join("; "),
            });
        }

        // Recursively resolve this module's own imports before building
        // its export map, so a chain of re-exports and nested modules
        // is fully cached by the time the caller inlines from it.
        let module_dir = file_path.parent().map(Path::to_path_buf).unwrap_or_default();
        for stmt in &program.stmts {
            if let Stmt::Import(import) = stmt {
                self.resolve(import.module.as_str(), &module_dir)?;
            }
        }

        let is_std = canonical.starts_with(&self.std_dir_canonical) || module_path.starts_with("std/");
        let exports = build_exports(&program, is_std);
        Ok((program, exports))
    }
}

/// Public functions -> emitted name, and (for `std/*` modules) every
/// declared type, all types in `std` modules are assumed public.
fn build_exports(program: &Program, is_std: bool) -> ModuleExports {
    let mut functions = IndexMap::new();
    let mut types = IndexMap::new();
    for stmt in &program.stmts {
        match stmt {
            Stmt::FnDef(f) if f.is_public => {
                functions.insert(f.name, crate::analysis::emitted_fn_name(f.name.as_str(), true));
            },
            Stmt::TypeDecl(t) if is_std => {
                types.insert(t.name, t.name.as_str().to_string());
            },
            _ => {},
        }
    }
    ModuleExports { functions, types }
}

/// Validates that every requested item actually appears in `exports`,
/// returning the first missing one as an error.
pub fn validate_exported(
    exports: &ModuleExports,
    names: impl IntoIterator<Item = (Symbol, bool)>,
    module_path: &str,
) -> ModuleResult<()> {
    let mut seen_types = HashSet::new();
    let mut seen_fns = HashSet::new();
    for (name, is_type) in names {
        if is_type {
            if !seen_types.insert(name) {
                continue;
            }
            if !exports.types.contains_key(&name) {
                return Err(ModuleError::NotExported {
                    kind: "Type",
                    name: name.as_str().to_string(),
                    path: module_path.to_string(),
                });
            }
        } else {
            if !seen_fns.insert(name) {
                continue;
            }
            if !exports.functions.contains_key(&name) {
                return Err(ModuleError::NotExported {
                    kind: "Function",
                    name: name.as_str().to_string(),
                    path: module_path.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Turns an as-written import path into a file on disk.
///
/// - `std/<name>` reads from the compiler's standard library directory.
/// - `./x` / `../x` resolve relative to the importing file's directory.
/// - a trailing `.zeno` may be omitted (`.zn` is also accepted).
fn locate_file(module_path: &str, current_dir: &Path, std_dir: &Path) -> ModuleResult<PathBuf> {
    let base = if let Some(rest) = module_path.strip_prefix("std/") {
        std_dir.join(rest)
    } else if module_path.starts_with("./") || module_path.starts_with("../") {
        current_dir.join(module_path)
    } else {
        return Err(ModuleError::UnknownStdModule(module_path.to_string()));
    };

    for candidate in [base.clone(), with_ext(&base, "zeno"), with_ext(&base, "zn")] {
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    Err(ModuleError::NotFound(module_path.to_string()))
}

fn with_ext(base: &Path, ext: &str) -> PathBuf {
    let mut with_ext = base.to_path_buf();
    with_ext.set_extension(ext);
    with_ext
}
