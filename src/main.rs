//! dokus — generate documentation from annotated function comments.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `dokus < lib.js` writes the rendered documentation to stdout
//! - **file mode**: `dokus -o docs src/*.js decls/*.json` writes one document per input

use anyhow::{Context as _, Result};
use clap::Parser;
use dokus::render::{self, Renderer};
use dokus::{scanner, CollectingSink, DeclareRecord, Documentation, ScriptIdentifiers};
use std::collections::HashSet;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dokus",
    about = "Generate documentation from annotated function comments"
)]
struct Cli {
    /// Input files (glob patterns and directories supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Treat stdin as a JSON array of declarations instead of script source
    #[arg(long)]
    json_input: bool,

    /// Include @private functions and classes in output
    #[arg(long)]
    show_private: bool,

    /// Fail when any comment produced a warning
    #[arg(long)]
    deny_warnings: bool,

    /// Log debug output (overridden by RUST_LOG)
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let renderer = render::create_renderer(&cli.format)?;
    let mut sink = CollectingSink::forwarding();

    if cli.files.is_empty() {
        stdin_mode(&cli, renderer.as_ref(), &mut sink)?;
    } else {
        file_mode(&cli, renderer.as_ref(), &mut sink)?;
    }

    if cli.deny_warnings && !sink.is_empty() {
        anyhow::bail!("{} warning(s) emitted (--deny-warnings)", sink.len());
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// stdin mode: read one source from stdin, write the rendered documentation to stdout.
fn stdin_mode(cli: &Cli, renderer: &dyn Renderer, sink: &mut CollectingSink) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let declares = if cli.json_input {
        scanner::parse_declarations(&input).context("invalid declarations on stdin")?
    } else {
        scanner::script::scan(&input)
    };

    let mut doc = document(&declares, None, sink);
    if !cli.show_private {
        filter_private(&mut doc);
    }
    print!("{}", renderer.render(&doc)?);
    Ok(())
}

/// file mode: document every input file into the output directory.
fn file_mode(cli: &Cli, renderer: &dyn Renderer, sink: &mut CollectingSink) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;
    let ext = renderer.file_extension();
    let mut written: HashSet<PathBuf> = HashSet::new();

    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let declares = match scanner::scan_file(path, &content) {
            Ok(declares) => declares,
            Err(e) => {
                warn!("skipping {}: {:#}", path.display(), e);
                continue;
            }
        };

        let source = path.to_string_lossy();
        let mut doc = document(&declares, Some(source.as_ref()), sink);
        if !cli.show_private {
            filter_private(&mut doc);
        }
        // Skip files with nothing to document
        if doc.is_empty() {
            debug!("no documented functions in {}", path.display());
            continue;
        }

        let out_path = output_dir.join(format!("{}.{}", derive_output_name(path), ext));
        if !written.insert(out_path.clone()) {
            warn!("{} overwrites earlier output {}", path.display(), out_path.display());
        }

        fs::write(&out_path, renderer.render(&doc)?)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        debug!(
            "{} -> {} ({} classes, {} functions)",
            path.display(),
            out_path.display(),
            doc.classes.len(),
            doc.functions.len()
        );
    }

    Ok(())
}

/// Run the comment parser and class synthesis over one source's declarations.
fn document(
    declares: &[DeclareRecord],
    filename: Option<&str>,
    sink: &mut CollectingSink,
) -> Documentation {
    let mut ctx = dokus::Context::new(filename, &ScriptIdentifiers, sink);
    dokus::document_all(declares, &mut ctx)
}

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // Directories are scanned non-recursively
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && has_supported_extension(&p) {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| scanner::SUPPORTED_EXTENSIONS.contains(&ext))
}

/// Derive the output file name (without extension) from a source path.
/// "src/shapes.js" → "shapes", "decls/shapes.json" → "shapes"
fn derive_output_name(path: &Path) -> String {
    if has_supported_extension(path) {
        if let Some(stem) = path.file_stem() {
            return stem.to_string_lossy().to_string();
        }
    }
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Drop @private functions and methods, and classes whose constructor is @private.
fn filter_private(doc: &mut Documentation) {
    doc.functions.retain(|func| !func.is_private);
    doc.classes.retain(|class| !class.constructor.is_private);
    for class in &mut doc.classes {
        class.methods.retain(|method| !method.is_private);
    }
}
