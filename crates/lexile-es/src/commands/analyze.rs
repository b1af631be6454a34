//! Analyze command: reading level of one file or an inline text.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgGroup, Args};
use owo_colors::OwoColorize;
use tracing::{debug, info, instrument};

use lexile_es_core::config::Config;
use lexile_es_core::loader::{document_name, is_pdf};
use lexile_es_core::report::rule;
use lexile_es_core::{AnalysisOutcome, Analyzer, render_outcome, save_report};

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["file", "text"])))]
pub struct AnalyzeArgs {
    /// File to analyze (.txt, .md, .pdf, ...).
    pub file: Option<Utf8PathBuf>,

    /// Analyze this text instead of a file.
    #[arg(short, long)]
    pub text: Option<String>,

    /// Save the report to this file.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Fail if the score exceeds this Lexile value.
    #[arg(long)]
    pub max_lexile: Option<i64>,
}

/// Analyze a file or inline text and print the report.
#[instrument(name = "cmd_analyze", skip_all, fields(file = ?args.file))]
pub fn cmd_analyze(args: AnalyzeArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = ?args.file, output = ?args.output, "executing analyze command");

    let text = match (&args.file, &args.text) {
        (Some(path), _) => {
            let content = read_input_file(path, config.input_limit())?;
            if !global_json {
                print_file_banner(path, &content, config.preview_len());
            }
            content
        }
        (None, Some(text)) => {
            if !global_json {
                println!("\n📝 Analizando texto proporcionado");
                print!("{}", rule('='));
            }
            text.clone()
        }
        (None, None) => bail!("provide a FILE or --text"),
    };

    let analyzer = Analyzer::with_table(config.frequency_table());
    let outcome = analyzer.analyze(&text);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", render_outcome(&outcome));
    }

    let report = match &outcome {
        AnalysisOutcome::Report(report) => report,
        AnalysisOutcome::Error { error } => bail!("{error}"),
    };

    if let Some(ref output) = args.output {
        save_report(&outcome, output.as_std_path())
            .with_context(|| format!("failed to save report to {output}"))?;
        if !global_json {
            println!("\n✓ Resultado guardado en: {output}");
        }
    }

    let subject = args
        .file
        .as_ref()
        .map_or_else(|| "text".to_string(), ToString::to_string);
    if let Some(max) = args.max_lexile.or(config.max_lexile) {
        if report.lexile > max {
            bail!(
                "{subject} scores {}L (max: {max}L). Shorten sentences or use more common words.",
                report.lexile,
            );
        }
        if !global_json {
            println!("{} {subject} scores {}L (max: {max}L)", "PASS:".green(), report.lexile);
        }
    }

    info!(lexile = report.lexile, grade = %report.grade, "analysis finished");
    if !global_json {
        println!("\n✅ Análisis completado\n");
    }
    Ok(())
}

fn print_file_banner(path: &Utf8Path, content: &str, preview_chars: usize) {
    let name = document_name(path.as_std_path());
    if !is_pdf(path.as_std_path()) {
        println!("\n📄 Analizando: {name}");
        print!("{}", rule('='));
        return;
    }

    println!("\n📄 Cargando PDF: {name}");
    print!("{}", rule('='));
    println!("\n📝 Preview del texto extraído:");
    print!("{}", rule('-'));
    println!("{}", preview(content, preview_chars));
    print!("{}", rule('-'));
    println!("\n   Total de caracteres: {}", content.chars().count());
    println!("\n🔍 ANALIZANDO NIVEL LEXILE...");
    print!("{}", rule('='));
}

/// The first `max_chars` characters of `text`, with `...` if truncated.
fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
