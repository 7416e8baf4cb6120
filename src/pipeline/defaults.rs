use crate::config::{AlignPolicy, CategoryThresholds};
use crate::pipeline::traits::{AccuracyModel, LetterScorer, WordAligner};
use crate::scoring::{accuracy, letters, word_align};
use crate::types::{AccuracyCategory, LetterVerdict, WordPair, WordScore};

pub struct WindowedWordAligner;

impl WordAligner for WindowedWordAligner {
    fn align(
        &self,
        reference: &[String],
        recognized: &[String],
        policy: &AlignPolicy,
    ) -> Vec<WordPair> {
        word_align::align_words(reference, recognized, policy)
    }
}

pub struct TraceLetterScorer;

impl LetterScorer for TraceLetterScorer {
    fn score_letters(&self, pair: &WordPair) -> Vec<LetterVerdict> {
        letters::letter_verdicts(pair)
    }
}

pub struct LengthWeightedAccuracy;

impl AccuracyModel for LengthWeightedAccuracy {
    fn word_accuracy(&self, edit_cost: usize, reference_len: usize) -> f64 {
        accuracy::word_accuracy(edit_cost, reference_len)
    }

    fn categorize(
        &self,
        accuracy_percent: f64,
        thresholds: &CategoryThresholds,
    ) -> AccuracyCategory {
        accuracy::categorize(accuracy_percent, thresholds)
    }

    fn aggregate(&self, word_scores: &[WordScore]) -> f64 {
        accuracy::aggregate(word_scores)
    }
}
