//! Compare command: score several files and list them by reading level.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::{debug, instrument, warn};

use lexile_es_core::config::Config;
use lexile_es_core::report::rule;
use lexile_es_core::{Analyzer, compare_texts, load_documents, render_comparison};

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Files to compare.
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<Utf8PathBuf>,
}

/// Load and score every file, then print them ordered by Lexile.
///
/// Files that fail to load are reported on stderr and skipped. Fails only if
/// nothing could be loaded.
#[instrument(name = "cmd_compare", skip_all, fields(files = args.files.len()))]
pub fn cmd_compare(args: CompareArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(files = ?args.files, "executing compare command");

    if !global_json {
        println!("\n📊 Modo Comparación: {} archivos", args.files.len());
        print!("{}", rule('='));
    }

    let progress = progress_bar(args.files.len(), global_json);
    let documents = load_all(&args.files, config.input_limit(), &progress);
    progress.finish_and_clear();

    if documents.is_empty() {
        bail!("no file could be loaded");
    }

    let analyzer = Analyzer::with_table(config.frequency_table());
    let entries = compare_texts(&analyzer, &documents);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", render_comparison(&entries));
        println!();
    }
    Ok(())
}

/// Load `files` in order as `(name, text)` pairs, reporting and skipping
/// the ones that fail.
fn load_all(
    files: &[Utf8PathBuf],
    max_bytes: Option<usize>,
    progress: &ProgressBar,
) -> Vec<(String, String)> {
    let mut documents = Vec::with_capacity(files.len());
    for (path, (name, loaded)) in files.iter().zip(load_documents(files, max_bytes)) {
        match loaded {
            Ok(text) => documents.push((name, text)),
            Err(err) => {
                warn!(file = %path, error = %err, "skipping file");
                progress.suspend(|| {
                    eprintln!("{} al cargar {path}: {err}", "❌ Error".red());
                });
            }
        }
        progress.set_message(path.to_string());
        progress.inc(1);
    }
    documents
}

fn progress_bar(len: usize, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template("{spinner} [{pos}/{len}] {wide_msg}") {
        bar.set_style(style);
    }
    bar
}
