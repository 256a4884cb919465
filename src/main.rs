// sharplex: tokenize C#-style source files and report a summary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;

use sharplex::lexer::lexer::Lexer;

#[derive(Parser)]
#[command(name = "sharplex", about = "Tokenize C# source files")]
struct Cli {
    /// A .cs file, or a directory to walk for *.cs files
    path: PathBuf,

    /// Print every token instead of only the per-file summary
    #[arg(long)]
    tokens: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if !cli.path.exists() {
        bail!("path '{}' not found", cli.path.display());
    }

    let files = collect_sources(&cli.path)?;
    if files.is_empty() {
        bail!("no .cs files under '{}'", cli.path.display());
    }

    let mut total_tokens = 0usize;
    for file in &files {
        let source = fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;

        let tokens = Lexer::new(&source)
            .lex()
            .map_err(|e| anyhow::anyhow!("{}: {}", file.display(), e))?;

        if cli.tokens {
            for token in &tokens {
                println!("{}", token);
            }
        }

        // The terminating end-of-file marker is not counted.
        let count = tokens.len() - 1;
        log::info!("{}: {} tokens", file.display(), count);
        total_tokens += count;
    }

    println!("{} file(s) tokenized, {} tokens", files.len(), total_tokens);
    Ok(())
}

/// The files to lex: `path` itself, or every `*.cs` file under it.
fn collect_sources(path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if path.is_dir() {
        walk(path, &mut files)?;
        files.sort();
    } else {
        files.push(path.to_path_buf());
    }
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> anyhow::Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to read directory {}", dir.display()))?
            .path();
        if path.is_dir() {
            walk(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "cs") {
            files.push(path);
        }
    }
    Ok(())
}
