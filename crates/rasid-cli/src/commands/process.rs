//! Process command - analyze a single receipt transcript.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use clap::Args;
use console::style;
use serde::Serialize;
use tracing::{debug, info};

use rasid_core::models::config::EngineConfig;
use rasid_core::{ReceiptAnalysis, ReceiptAnalyzer, ReceiptProcessor};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input transcript file, or "-" for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show a confidence summary after the result
    #[arg(long)]
    show_confidence: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

/// Analysis plus provenance, as handed to the expense recorder.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    /// Where the transcript came from.
    pub source: String,

    /// When the analysis ran.
    pub analyzed_at: DateTime<Utc>,

    #[serde(flatten)]
    pub analysis: ReceiptAnalysis,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let processor = ReceiptProcessor::with_config(&config);

    let (source, text) = read_transcript(&args.input)?;
    info!("Processing transcript: {}", source);

    let analysis = processor.process(&text);
    let record = AnalysisRecord {
        source,
        analyzed_at: Utc::now(),
        analysis,
    };

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_confidence {
        println!();
        println!(
            "{} Category confidence: {:.1}%",
            style("ℹ").blue(),
            record.analysis.category_confidence * 100.0
        );
        println!(
            "{} Amount confidence: {:.1}%",
            style("ℹ").blue(),
            record.analysis.amount_confidence * 100.0
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Load engine configuration, falling back to defaults.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<EngineConfig> {
    match config_path {
        Some(path) => Ok(EngineConfig::from_file(Path::new(path))?),
        None => Ok(EngineConfig::default()),
    }
}

fn read_transcript(input: &Path) -> anyhow::Result<(String, String)> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(("<stdin>".to_string(), text));
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let text = fs::read_to_string(input)?;
    Ok((input.display().to_string(), text))
}

pub(crate) fn format_record(record: &AnalysisRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

pub(crate) fn format_csv(record: &AnalysisRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "source",
        "analyzed_at",
        "category",
        "category_confidence",
        "amount",
        "amount_confidence",
        "detected_patterns",
    ])?;

    wtr.write_record([
        &record.source,
        &record.analyzed_at.to_rfc3339(),
        &record
            .analysis
            .category
            .map(|c| c.to_string())
            .unwrap_or_default(),
        &format!("{:.2}", record.analysis.category_confidence),
        &record
            .analysis
            .amount
            .map(|a| format!("{:.2}", a))
            .unwrap_or_default(),
        &format!("{:.2}", record.analysis.amount_confidence),
        &record.analysis.detected_patterns.join("; "),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

pub(crate) fn format_text(record: &AnalysisRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Receipt: {}\n", record.source));

    match record.analysis.category {
        Some(category) => output.push_str(&format!(
            "Category: {} ({:.0}% confidence)\n",
            category,
            record.analysis.category_confidence * 100.0
        )),
        None => output.push_str("Category: uncategorized\n"),
    }

    match record.analysis.amount {
        Some(amount) => output.push_str(&format!(
            "Amount: Rs. {:.2} ({:.0}% confidence)\n",
            amount,
            record.analysis.amount_confidence * 100.0
        )),
        None => output.push_str("Amount: not found\n"),
    }

    if !record.analysis.detected_patterns.is_empty() {
        output.push_str(&format!(
            "Matched: {}\n",
            record.analysis.detected_patterns.join(", ")
        ));
    }

    let mut scored: Vec<_> = record
        .analysis
        .raw_scores
        .iter()
        .filter(|(_, score)| **score > 0.0)
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(a.1));

    if !scored.is_empty() {
        output.push_str("\nScores:\n");
        for (category, score) in scored.iter().take(5) {
            output.push_str(&format!("  {:<14} {:.1}\n", category.to_string(), score));
        }
    }

    output
}
