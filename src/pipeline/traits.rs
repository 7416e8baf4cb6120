use crate::config::{AlignPolicy, CategoryThresholds};
use crate::error::ScoringError;
use crate::types::{AccuracyCategory, LetterVerdict, Transcription, WordPair, WordScore};

/// Speech-to-text capability. Implementations must return word spans
/// ordered by `start_sample` and non-overlapping; the scorer validates and
/// rejects anything else.
pub trait SpeechRecognizer: Send + Sync {
    fn recognize(
        &self,
        samples: &[f32],
        sample_rate_hz: u32,
    ) -> Result<Transcription, ScoringError>;
}

/// Text-to-phonemes capability (IPA or any phonetic alphabet, as long as
/// both sides of a comparison come from the same converter).
pub trait PhonemeConverter: Send + Sync {
    fn to_phonemes(&self, text: &str) -> Result<String, ScoringError>;
}

/// Text-to-speech capability.
pub trait SpeechSynthesizer: Send + Sync {
    fn synthesize(&self, sentence: &str) -> Result<Vec<f32>, ScoringError>;
}

/// Text-to-translated-text capability.
pub trait Translator: Send + Sync {
    fn translate(&self, sentence: &str) -> Result<String, ScoringError>;
}

pub trait WordAligner: Send + Sync {
    fn align(
        &self,
        reference: &[String],
        recognized: &[String],
        policy: &AlignPolicy,
    ) -> Vec<WordPair>;
}

pub trait LetterScorer: Send + Sync {
    fn score_letters(&self, pair: &WordPair) -> Vec<LetterVerdict>;
}

pub trait AccuracyModel: Send + Sync {
    fn word_accuracy(&self, edit_cost: usize, reference_len: usize) -> f64;

    fn categorize(
        &self,
        accuracy_percent: f64,
        thresholds: &CategoryThresholds,
    ) -> AccuracyCategory;

    fn aggregate(&self, word_scores: &[WordScore]) -> f64;
}
