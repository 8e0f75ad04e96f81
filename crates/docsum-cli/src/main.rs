use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use docsum_core::config_file;
use docsum_core::{Analysis, Document, Summarizer, SummarizerConfig};
use tracing_subscriber::EnvFilter;

mod output;

use output::ColorMode;

/// Document Summarizer - Extractive summaries and topic labels for plain-text documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML config file (skips the default config lookup)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize one or more text files
    Summarize {
        /// Text files to summarize, in order (`-` reads stdin)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Path to output file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Expand ligatures and rejoin hyphenated line breaks first
        #[arg(long)]
        normalize: bool,
    },

    /// Show how often each topic category matches the given files
    Topics {
        /// Text files to classify (`-` reads stdin)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Expand ligatures and rejoin hyphenated line breaks first
        #[arg(long)]
        normalize: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Summarize {
            files,
            json,
            no_color,
            output,
            normalize,
        } => summarize(
            &files,
            cli.config.as_deref(),
            json,
            no_color,
            output,
            normalize,
        ),
        Command::Topics {
            files,
            no_color,
            normalize,
        } => topics(&files, cli.config.as_deref(), no_color, normalize),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve configuration: `--config` file > cascaded config files > defaults.
fn load_summarizer_config(
    config_path: Option<&Path>,
    normalize: bool,
) -> anyhow::Result<SummarizerConfig> {
    let file = match config_path {
        Some(path) => config_file::read_config(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))?,
        None => config_file::load_config(),
    };

    let mut builder = file.to_builder();
    if normalize {
        builder = builder.normalize_text(true);
    }
    Ok(builder.build()?)
}

fn read_documents(files: &[PathBuf]) -> anyhow::Result<Vec<Document>> {
    let mut documents = Vec::with_capacity(files.len());
    for path in files {
        if path.as_os_str() == "-" {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            documents.push(Document::new("stdin", text));
            continue;
        }

        if !path.exists() {
            anyhow::bail!("File not found: {}", path.display());
        }
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let identifier = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        tracing::debug!(file = %identifier, bytes = text.len(), "loaded document");
        documents.push(Document::new(identifier, text));
    }
    Ok(documents)
}

fn summarize(
    files: &[PathBuf],
    config_path: Option<&Path>,
    json: bool,
    no_color: bool,
    output: Option<PathBuf>,
    normalize: bool,
) -> anyhow::Result<()> {
    let config = load_summarizer_config(config_path, normalize)?;
    let documents = read_documents(files)?;

    let use_color = !no_color && !json && output.is_none();
    let color = ColorMode(use_color);

    let mut writer: Box<dyn Write> = if let Some(ref output_path) = output {
        Box::new(std::fs::File::create(output_path)?)
    } else {
        Box::new(std::io::stdout())
    };

    let analysis = Summarizer::with_config(config).analyze(&documents);

    if json {
        let value = match &analysis {
            Analysis::Summary(summary) => serde_json::to_value(summary)?,
            other => serde_json::json!({ "notice": other.notice().unwrap_or_default() }),
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        output::print_analysis(&mut writer, &analysis, color)?;
    }
    writer.flush()?;
    Ok(())
}

fn topics(
    files: &[PathBuf],
    config_path: Option<&Path>,
    no_color: bool,
    normalize: bool,
) -> anyhow::Result<()> {
    let config = load_summarizer_config(config_path, normalize)?;
    let min_matches = config.min_topic_matches();
    let max_topics = config.max_topics();
    let documents = read_documents(files)?;

    let counts = Summarizer::with_config(config).topic_report(&documents);

    let mut stdout = std::io::stdout();
    output::print_topic_report(
        &mut stdout,
        &counts,
        min_matches,
        max_topics,
        ColorMode(!no_color),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topics_accepts_normalize_flag() {
        let cli = Cli::try_parse_from(["docsum", "topics", "--normalize", "paper.txt"]).unwrap();
        match cli.command {
            Command::Topics {
                files, normalize, ..
            } => {
                assert!(normalize);
                assert_eq!(files, vec![PathBuf::from("paper.txt")]);
            }
            other => panic!("expected topics, got {other:?}"),
        }
    }
}
