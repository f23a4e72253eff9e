//! Ties the compiler crates together into the four CLI operations:
//! compile a file to a string, write it out (`compile`), hand it to the
//! target toolchain (`run`/`build`), or walk a path tree through the
//! lint registry (`lint`).

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zenoc_lint::Linter;
use zenoc_par::parse_source;
use zenoc_util::{FileId, Handler, SourceMap};

use crate::config::Config;
use crate::diagnostics::{render_diagnostic, render_parse_error};
use crate::error::{CliError, Result};

/// The generated source for `path`, plus the absolute path diagnostics
/// should be reported against. Parse errors are rendered with full
/// context and returned before semantic analysis or emission ever
/// runs, since a broken parse makes both meaningless.
pub fn compile_file(path: &Path, config: &Config) -> Result<String> {
    let source = read_source(path)?;
    let lang = config.lang.as_deref();

    let mut map = SourceMap::new();
    let probe_file_id = map.add_file(path.display().to_string(), source.clone());
    let probe_handler = Handler::new();
    let (_program, _errors, rich_errors) = parse_source(&source, probe_file_id, &probe_handler);
    if !rich_errors.is_empty() {
        for err in &rich_errors {
            eprintln!("{}", render_parse_error(err, lang));
        }
        return Err(CliError::Compile(zenoc_gen::CompileError::Parse(
            rich_errors.iter().map(|e| e.message.clone()).collect(),
        )));
    }

    let current_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let std_dir = resolve_std_dir(path, config);
    debug!(target_lang = %config.target_lang, std_dir = %std_dir.display(), "compiling");

    let handler = Handler::new();
    let result = zenoc_gen::generate(&source, probe_file_id, current_dir, &std_dir, &handler);

    for diag in handler.diagnostics() {
        eprintln!("{}", render_diagnostic(&diag, lang));
    }

    result.map_err(CliError::Compile)
}

/// `compile <file>`: compile and write the emitted source to
/// `<stem>.<ext>` next to the input.
pub fn run_compile(file: &Path, config: &Config) -> Result<()> {
    let generated = compile_file(file, config)?;
    let ext = target_extension(&config.target_lang)?;
    let out_path = file.with_extension(ext);
    std::fs::write(&out_path, generated).map_err(|source| CliError::Io { path: out_path.display().to_string(), source })?;
    println!("compiled {} -> {}", file.display(), out_path.display());
    Ok(())
}

/// `build <file>`: compile, then invoke the target toolchain to produce
/// an executable named `<stem>` in the current directory.
pub fn run_build(file: &Path, config: &Config) -> Result<()> {
    let generated = compile_file(file, config)?;
    let ext = target_extension(&config.target_lang)?;
    let tool = toolchain_binary(&config.target_lang)?;

    let dir = tempfile::tempdir().map_err(|source| CliError::Io { path: "<tempdir>".to_string(), source })?;
    let src_path = dir.path().join(format!("main.{ext}"));
    std::fs::write(&src_path, generated).map_err(|source| CliError::Io { path: src_path.display().to_string(), source })?;

    let stem = file.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| "a.out".to_string());
    let out_path = std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join(&stem);

    info!(tool, "building");
    invoke_toolchain(tool, &["build", "-o", &out_path.to_string_lossy(), &src_path.to_string_lossy()])?;
    println!("built {} -> {}", file.display(), out_path.display());
    Ok(())
}

/// `run <file>`: compile, write the emitted source to a scoped-release
/// temporary file, invoke the target toolchain to execute it with
/// inherited standard I/O, and delete the temporary on every exit path
/// (the `NamedTempFile`'s `Drop` does this even if the toolchain fails).
pub fn run_run(file: &Path, config: &Config) -> Result<()> {
    let generated = compile_file(file, config)?;
    let ext = target_extension(&config.target_lang)?;
    let tool = toolchain_binary(&config.target_lang)?;

    let temp = tempfile::Builder::new()
        .suffix(&format!(".{ext}"))
        .tempfile()
        .map_err(|source| CliError::Io { path: "<tempfile>".to_string(), source })?;
    std::fs::write(temp.path(), generated).map_err(|source| CliError::Io { path: temp.path().display().to_string(), source })?;

    info!(tool, "running");
    invoke_toolchain(tool, &["run", &temp.path().to_string_lossy()])
}

/// `lint <path>...`: recursively enumerate `.zeno`/`.zn` files under each
/// path and lint them with the `zenoc-lint` rule registry. Prints one
/// line per finding in `<abspath>:<line>:<col>: [<rule>] <message>`
/// shape; a parse error or any surviving (non-disabled) finding is a
/// failure.
pub fn run_lint(paths: &[PathBuf], config: &Config) -> Result<()> {
    let mut files = Vec::new();
    for path in paths {
        if !path.exists() {
            return Err(CliError::NotFound(path.display().to_string()));
        }
        collect_source_files(path, &mut files)?;
    }

    let mut had_failure = false;
    for file in &files {
        if lint_one_file(file, config)? {
            had_failure = true;
        }
    }

    if had_failure {
        Err(CliError::Lint(zenoc_lint::LintError::Rule("lint findings were reported".to_string())))
    } else {
        Ok(())
    }
}

fn lint_one_file(path: &Path, config: &Config) -> Result<bool> {
    let source = read_source(path)?;
    let handler = Handler::new();
    let (program, _errors, rich_errors) = parse_source(&source, FileId(0), &handler);

    let abs_path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if !rich_errors.is_empty() {
        for err in &rich_errors {
            println!("{}:{}:{}: [parse-error] {}", abs_path.display(), err.line, err.column, err.message);
        }
        return Ok(true);
    }

    let findings = Linter::new().lint_program(&program, &handler).map_err(CliError::Lint)?;
    let mut reported_any = false;
    for finding in &findings {
        if config.lint.disabled_rules.iter().any(|r| r == finding.rule_name) {
            continue;
        }
        println!("{}:{}:{}: [{}] {}", abs_path.display(), finding.span.line, finding.span.column, finding.rule_name, finding.message);
        reported_any = true;
    }
    Ok(reported_any)
}

fn collect_source_files(path: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    if path.is_dir() {
        let mut entries: Vec<PathBuf> = std::fs::read_dir(path)
            .map_err(|source| CliError::Io { path: path.display().to_string(), source })?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .collect();
        entries.sort();
        for entry in entries {
            collect_source_files(&entry, out)?;
        }
    } else if is_zeno_source(path) {
        out.push(path.to_path_buf());
    }
    Ok(())
}

fn is_zeno_source(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("zeno") | Some("zn"))
}

fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CliError::NotFound(path.display().to_string()));
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some("zeno") | Some("zn") => {},
        _ => return Err(CliError::BadExtension(path.display().to_string())),
    }
    std::fs::read_to_string(path).map_err(|source| CliError::Io { path: path.display().to_string(), source })
}

fn resolve_std_dir(input: &Path, config: &Config) -> PathBuf {
    if let Some(dir) = &config.std_dir {
        return dir.clone();
    }
    if let Some(parent) = input.parent() {
        let sibling = parent.join("std");
        if sibling.is_dir() {
            return sibling;
        }
    }
    PathBuf::from("std")
}

fn target_extension(lang: &str) -> Result<&'static str> {
    match lang {
        "go" => Ok("go"),
        other => Err(CliError::Config(format!("unsupported target language: {other}"))),
    }
}

fn toolchain_binary(lang: &str) -> Result<&'static str> {
    match lang {
        "go" => Ok("go"),
        other => Err(CliError::Config(format!("unsupported target language: {other}"))),
    }
}

fn invoke_toolchain(tool: &str, args: &[&str]) -> Result<()> {
    let status = std::process::Command::new(tool)
        .args(args)
        .status()
        .map_err(|source| CliError::ToolchainUnavailable { tool: tool.to_string(), source })?;
    if !status.success() {
        return Err(CliError::ToolchainFailed { tool: tool.to_string() });
    }
    Ok(())
}
