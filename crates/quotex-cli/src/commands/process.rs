//! Process command - extract data from a single quotation file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use quotex_core::{HeuristicQuotationParser, ParseReport, QuotationParser, QuotexConfig, TemplateConfig};

use crate::output::{format_document, OutputFormat};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF, or already-extracted text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Template file with header anchors and column mapping
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Skip image extraction
    #[arg(long)]
    no_images: bool,

    /// Check amounts and report issues, even if disabled in the config
    #[arg(long)]
    validate: bool,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let mut config = super::load_config(config_path)?;
    if args.no_images {
        config.pdf.extract_images = false;
    }
    if args.validate {
        config.extraction.validate_amounts = true;
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")?
            .progress_chars("##-"),
    );

    let parser = build_parser(&config, args.template.as_deref())?;
    let report = parse_file(&args.input, &parser, &config, Some(&pb))?;

    pb.finish_and_clear();

    for warning in &report.warnings {
        warn!("{}", warning);
    }

    if args.validate && !report.validation_errors.is_empty() {
        eprintln!("{}", style("Validation issues:").yellow());
        for issue in &report.validation_errors {
            eprintln!(
                "  - {}: {} (found {})",
                issue.field,
                issue.message,
                issue.value.as_deref().unwrap_or("-")
            );
        }
    }

    let output = format_document(&report.document, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Build a parser from configuration and an optional template file.
pub(crate) fn build_parser(
    config: &QuotexConfig,
    template: Option<&Path>,
) -> anyhow::Result<HeuristicQuotationParser> {
    let parser = HeuristicQuotationParser::from_config(&config.extraction);
    match template {
        Some(path) => Ok(parser.with_template(TemplateConfig::from_file(path)?)),
        None => Ok(parser),
    }
}

/// Parse a PDF or a text file into a report.
pub(crate) fn parse_file(
    path: &Path,
    parser: &HeuristicQuotationParser,
    config: &QuotexConfig,
    pb: Option<&ProgressBar>,
) -> anyhow::Result<ParseReport> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let progress = |pos: u64, msg: &'static str| {
        if let Some(pb) = pb {
            pb.set_position(pos);
            pb.set_message(msg);
        }
    };

    match extension.as_str() {
        "pdf" => {
            progress(10, "Loading PDF...");
            let data = fs::read(path)?;

            progress(40, "Extracting quotation data...");
            Ok(quotex_core::parse_pdf(&data, parser, &config.pdf)?)
        }
        "txt" | "text" => {
            progress(30, "Reading text...");
            let text = fs::read_to_string(path)?;

            progress(70, "Extracting quotation data...");
            Ok(parser.parse(&text, Vec::new()))
        }
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    }
}
