use crate::config::ScoringConfig;
use crate::error::ScoringError;
use crate::pipeline::defaults::{LengthWeightedAccuracy, TraceLetterScorer, WindowedWordAligner};
use crate::pipeline::registry::LanguageRegistry;
use crate::pipeline::runtime::{SentenceScorer, SentenceScorerParts};
use crate::pipeline::traits::{AccuracyModel, LetterScorer, WordAligner};

pub struct SentenceScorerBuilder {
    config: ScoringConfig,
    registry: LanguageRegistry,
    word_aligner: Option<Box<dyn WordAligner>>,
    letter_scorer: Option<Box<dyn LetterScorer>>,
    accuracy_model: Option<Box<dyn AccuracyModel>>,
}

impl SentenceScorerBuilder {
    pub fn new(config: ScoringConfig, registry: LanguageRegistry) -> Self {
        Self {
            config,
            registry,
            word_aligner: None,
            letter_scorer: None,
            accuracy_model: None,
        }
    }

    pub fn with_word_aligner(mut self, word_aligner: Box<dyn WordAligner>) -> Self {
        self.word_aligner = Some(word_aligner);
        self
    }

    pub fn with_letter_scorer(mut self, letter_scorer: Box<dyn LetterScorer>) -> Self {
        self.letter_scorer = Some(letter_scorer);
        self
    }

    pub fn with_accuracy_model(mut self, accuracy_model: Box<dyn AccuracyModel>) -> Self {
        self.accuracy_model = Some(accuracy_model);
        self
    }

    pub fn build(self) -> Result<SentenceScorer, ScoringError> {
        if !self.config.thresholds.is_ordered() {
            return Err(ScoringError::invalid_input(format!(
                "category thresholds must be non-increasing: excellent {} >= good {} >= fair {}",
                self.config.thresholds.excellent,
                self.config.thresholds.good,
                self.config.thresholds.fair
            )));
        }

        Ok(SentenceScorer::from_parts(SentenceScorerParts {
            config: self.config,
            registry: self.registry,
            word_aligner: self
                .word_aligner
                .unwrap_or_else(|| Box::new(WindowedWordAligner)),
            letter_scorer: self
                .letter_scorer
                .unwrap_or_else(|| Box::new(TraceLetterScorer)),
            accuracy_model: self
                .accuracy_model
                .unwrap_or_else(|| Box::new(LengthWeightedAccuracy)),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CategoryThresholds;
    use crate::types::Transcription;

    #[test]
    fn build_with_defaults_succeeds() {
        let scorer = SentenceScorerBuilder::new(ScoringConfig::default(), LanguageRegistry::new())
            .build()
            .expect("build should succeed");
        assert!(scorer.registry().is_empty());
    }

    #[test]
    fn build_rejects_unordered_thresholds() {
        let config = ScoringConfig {
            thresholds: CategoryThresholds {
                excellent: 50.0,
                good: 75.0,
                fair: 90.0,
            },
            ..ScoringConfig::default()
        };
        let result = SentenceScorerBuilder::new(config, LanguageRegistry::new()).build();
        assert!(matches!(result, Err(ScoringError::InvalidInput { .. })));
    }

    #[test]
    fn default_scorer_scores_an_exact_sentence() {
        let scorer = SentenceScorerBuilder::new(ScoringConfig::default(), LanguageRegistry::new())
            .build()
            .expect("build should succeed");
        let transcription = Transcription {
            text: "hello world".to_string(),
            words: Vec::new(),
        };
        let result = scorer
            .score_transcription("hello world", &transcription)
            .expect("scoring should succeed");
        assert_eq!(result.word_scores.len(), 2);
        assert_eq!(result.overall_accuracy_percent, 100.0);
    }

    #[test]
    fn custom_word_aligner_is_used() {
        use crate::config::AlignPolicy;
        use crate::pipeline::traits::WordAligner;
        use crate::types::WordPair;

        struct NeverMatchAligner;

        impl WordAligner for NeverMatchAligner {
            fn align(
                &self,
                reference: &[String],
                _recognized: &[String],
                _policy: &AlignPolicy,
            ) -> Vec<WordPair> {
                reference
                    .iter()
                    .map(|word| WordPair {
                        reference: word.clone(),
                        matched: None,
                    })
                    .collect()
            }
        }

        let scorer = SentenceScorerBuilder::new(ScoringConfig::default(), LanguageRegistry::new())
            .with_word_aligner(Box::new(NeverMatchAligner))
            .build()
            .expect("build should succeed");
        let transcription = Transcription {
            text: "hello".to_string(),
            words: Vec::new(),
        };
        let result = scorer
            .score_transcription("hello", &transcription)
            .expect("scoring should succeed");
        assert_eq!(result.overall_accuracy_percent, 0.0);
        assert!(result.word_scores[0].pair.matched.is_none());
    }
}
