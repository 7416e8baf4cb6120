pub mod config;
pub mod error;
pub mod pipeline;
pub mod scoring;
pub mod types;

pub use config::{AlignPolicy, CasePolicy, CategoryThresholds, ScoringConfig};
pub use error::ScoringError;
pub use pipeline::builder::SentenceScorerBuilder;
pub use pipeline::registry::{LanguageEngines, LanguageRegistry};
pub use pipeline::runtime::SentenceScorer;
pub use pipeline::traits::{
    AccuracyModel, LetterScorer, PhonemeConverter, SpeechRecognizer, SpeechSynthesizer,
    Translator, WordAligner,
};
pub use scoring::report::{
    build_report, case_report, CaseReport, Report, REPORT_SCHEMA_VERSION,
};
pub use scoring::response::ScoringResponse;
pub use types::{
    AccuracyCategory, LetterVerdict, MatchedWord, RecognizedWord, SentenceResult, Transcription,
    WordPair, WordScore, WordSpan,
};
