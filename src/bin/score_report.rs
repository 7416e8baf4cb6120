use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::Utc;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;

use pronounce_rs::{
    build_report, case_report, LanguageRegistry, RecognizedWord, ScoringConfig, ScoringError,
    SentenceScorerBuilder, Transcription, WordSpan,
};

#[path = "score_report/json_report_formatter.rs"]
mod json_report_formatter;
#[path = "score_report/text_report_formatter.rs"]
mod text_report_formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Batch pronunciation scoring over a JSON case file.
#[derive(Debug, Parser)]
#[command(name = "score-report")]
struct Args {
    /// JSON file with scoring cases: [{id, reference, recognized, spans?}].
    cases: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Scoring config overrides (JSON), see ScoringConfig.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the report here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct ScoringCase {
    id: String,
    reference: String,
    recognized: String,
    /// Per recognized word, [start_sample, end_sample). Optional; when
    /// present the count must match the recognized word count.
    #[serde(default)]
    spans: Vec<(u64, u64)>,
}

impl ScoringCase {
    fn transcription(&self) -> Result<Transcription, ScoringError> {
        if self.spans.is_empty() {
            return Ok(Transcription {
                text: self.recognized.clone(),
                words: Vec::new(),
            });
        }

        let recognized_words: Vec<&str> = self.recognized.split_whitespace().collect();
        if recognized_words.len() != self.spans.len() {
            return Err(ScoringError::invalid_input(format!(
                "case {:?}: {} recognized words but {} spans",
                self.id,
                recognized_words.len(),
                self.spans.len()
            )));
        }

        let words = recognized_words
            .iter()
            .zip(&self.spans)
            .map(|(word, &(start_sample, end_sample))| RecognizedWord {
                word: word.to_string(),
                span: WordSpan {
                    start_sample,
                    end_sample,
                },
            })
            .collect();
        Ok(Transcription {
            text: self.recognized.clone(),
            words,
        })
    }
}

fn main() {
    tracing_subscriber::fmt::init();
    if let Err(err) = run(Args::parse()) {
        eprintln!("score-report: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), ScoringError> {
    let config = match &args.config {
        Some(path) => ScoringConfig::load(path)?,
        None => ScoringConfig::default(),
    };
    let scorer = SentenceScorerBuilder::new(config, LanguageRegistry::new()).build()?;

    let data = fs::read_to_string(&args.cases).map_err(|e| ScoringError::io("read cases file", e))?;
    let cases: Vec<ScoringCase> =
        serde_json::from_str(&data).map_err(|e| ScoringError::json("parse cases file", e))?;

    let started = Instant::now();
    let progress = ProgressBar::new(cases.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .expect("valid progress template"),
    );

    let mut case_reports = Vec::with_capacity(cases.len());
    for case in &cases {
        progress.set_message(case.id.clone());
        let transcription = case.transcription()?;
        let result = scorer.score_transcription(&case.reference, &transcription)?;
        case_reports.push(case_report(&case.id, &result));
        progress.inc(1);
    }
    progress.finish_and_clear();

    tracing::info!(
        cases = case_reports.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "scoring complete"
    );

    let report = build_report(Utc::now().to_rfc3339(), case_reports);
    let rendered = match args.format {
        OutputFormat::Json => json_report_formatter::render(&report)?,
        OutputFormat::Text => text_report_formatter::render(&report),
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered).map_err(|e| ScoringError::io("write report file", e))?
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
