use crate::config::ScoringConfig;
use crate::error::ScoringError;
use crate::pipeline::registry::{LanguageEngines, LanguageRegistry};
use crate::pipeline::traits::{AccuracyModel, LetterScorer, PhonemeConverter, WordAligner};
use crate::scoring::edit::char_edit_distance;
use crate::scoring::response::{assemble, ResponsePhonemes, ScoringResponse};
use crate::scoring::tokenize::{normalize_text, tokenize_words};
use crate::types::{RecognizedWord, SentenceResult, Transcription, WordScore, WordSpan};

pub struct SentenceScorer {
    config: ScoringConfig,
    registry: LanguageRegistry,
    word_aligner: Box<dyn WordAligner>,
    letter_scorer: Box<dyn LetterScorer>,
    accuracy_model: Box<dyn AccuracyModel>,
}

pub(crate) struct SentenceScorerParts {
    pub config: ScoringConfig,
    pub registry: LanguageRegistry,
    pub word_aligner: Box<dyn WordAligner>,
    pub letter_scorer: Box<dyn LetterScorer>,
    pub accuracy_model: Box<dyn AccuracyModel>,
}

impl SentenceScorer {
    pub(crate) fn from_parts(parts: SentenceScorerParts) -> Self {
        Self {
            config: parts.config,
            registry: parts.registry,
            word_aligner: parts.word_aligner,
            letter_scorer: parts.letter_scorer,
            accuracy_model: parts.accuracy_model,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Score a transcription against the reference sentence.
    ///
    /// Pure with respect to its inputs: no retained state, no I/O, and
    /// calling it twice with the same arguments yields identical results.
    pub fn score_transcription(
        &self,
        reference_text: &str,
        transcription: &Transcription,
    ) -> Result<SentenceResult, ScoringError> {
        validate_spans(&transcription.words)?;

        let reference_words = tokenize_words(reference_text, self.config.case);
        let (recognized_words, recognized_spans) = self.recognized_side(transcription);

        let pairs =
            self.word_aligner
                .align(&reference_words, &recognized_words, &self.config.align);

        let mut word_scores = Vec::with_capacity(pairs.len());
        let mut word_spans = Vec::with_capacity(pairs.len());
        for pair in pairs {
            let reference_len = pair.reference.chars().count();
            let edit_cost = match pair.recognized_word() {
                Some(recognized) => char_edit_distance(&pair.reference, recognized),
                None => reference_len,
            };
            let accuracy_percent = self.accuracy_model.word_accuracy(edit_cost, reference_len);
            let category = self
                .accuracy_model
                .categorize(accuracy_percent, &self.config.thresholds);
            let letters = self.letter_scorer.score_letters(&pair);

            word_spans.push(
                pair.matched
                    .as_ref()
                    .and_then(|matched| recognized_spans.get(matched.index).copied().flatten()),
            );
            word_scores.push(WordScore {
                pair,
                edit_cost,
                accuracy_percent,
                category,
                letters,
            });
        }

        let overall_accuracy_percent = self.accuracy_model.aggregate(&word_scores);

        Ok(SentenceResult {
            word_scores,
            overall_accuracy_percent,
            transcript_text: transcription.text.clone(),
            word_spans,
        })
    }

    /// Build the full exchange shape for a transcription that already
    /// exists, converting reference and matched words to phonemes with the
    /// language's configured converter.
    pub fn respond(
        &self,
        language: &str,
        reference_text: &str,
        transcription: &Transcription,
    ) -> Result<ScoringResponse, ScoringError> {
        let engines = self.registry.engines(language)?;
        self.respond_with_engines(engines, reference_text, transcription)
    }

    /// Recognize the audio with the language's configured recognizer, then
    /// score and assemble the exchange shape.
    pub fn process_audio(
        &self,
        language: &str,
        samples: &[f32],
        sample_rate_hz: u32,
        reference_text: &str,
    ) -> Result<ScoringResponse, ScoringError> {
        let engines = self.registry.engines(language)?;
        let transcription = engines.recognizer.recognize(samples, sample_rate_hz)?;
        if transcription.text.trim().is_empty() {
            tracing::warn!(language, "recognizer returned an empty transcript");
        }
        self.respond_with_engines(engines, reference_text, &transcription)
    }

    fn respond_with_engines(
        &self,
        engines: &LanguageEngines,
        reference_text: &str,
        transcription: &Transcription,
    ) -> Result<ScoringResponse, ScoringError> {
        let result = self.score_transcription(reference_text, transcription)?;

        let converter = engines.phoneme_converter.as_ref();
        let mut reference_words_ipa = Vec::with_capacity(result.word_scores.len());
        let mut matched_words_ipa = Vec::with_capacity(result.word_scores.len());
        for score in &result.word_scores {
            reference_words_ipa.push(converter.to_phonemes(&score.pair.reference)?);
            matched_words_ipa.push(match score.pair.recognized_word() {
                Some(recognized) => converter.to_phonemes(recognized)?,
                None => "-".to_string(),
            });
        }
        let phonemes = ResponsePhonemes {
            recording_ipa: converter.to_phonemes(&result.transcript_text)?,
            reference_words_ipa,
            matched_words_ipa,
        };

        Ok(assemble(&result, &phonemes))
    }

    /// Recognized words for alignment, with the span carried per word.
    /// Normally these come from the recognizer's word list; a transcription
    /// that carries only raw text (no word spans) falls back to tokenizing
    /// the text, with no spans to carry.
    fn recognized_side(
        &self,
        transcription: &Transcription,
    ) -> (Vec<String>, Vec<Option<WordSpan>>) {
        if transcription.words.is_empty() {
            if !transcription.text.trim().is_empty() {
                tracing::debug!("transcription carries no word spans; tokenizing raw text");
            }
            let words = tokenize_words(&transcription.text, self.config.case);
            let spans = vec![None; words.len()];
            return (words, spans);
        }

        let words = transcription
            .words
            .iter()
            .map(|w| normalize_text(&w.word, self.config.case))
            .collect();
        let spans = transcription.words.iter().map(|w| Some(w.span)).collect();
        (words, spans)
    }
}

fn validate_spans(words: &[RecognizedWord]) -> Result<(), ScoringError> {
    for (i, word) in words.iter().enumerate() {
        if word.span.end_sample < word.span.start_sample {
            return Err(ScoringError::invalid_input(format!(
                "word {i} ({:?}) has negative-length span [{}, {})",
                word.word, word.span.start_sample, word.span.end_sample
            )));
        }
        if i > 0 {
            let prev = &words[i - 1];
            if word.span.start_sample < prev.span.end_sample {
                return Err(ScoringError::invalid_input(format!(
                    "word {i} ({:?}) starts at sample {} before word {} ends at {}",
                    word.word,
                    word.span.start_sample,
                    i - 1,
                    prev.span.end_sample
                )));
            }
        }
    }
    Ok(())
}
