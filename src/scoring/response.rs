use serde::Serialize;

use crate::types::SentenceResult;

/// Placeholder for a reference word with no recognized counterpart; keeps
/// the joined columns splitting back to the reference word count.
const OMITTED_WORD: &str = "-";
/// Placeholder sample offset for an omitted word's time columns.
const OMITTED_SAMPLE: &str = "-1";

/// Exchange shape of one scoring call. Field names are the wire contract;
/// serialization into a transport is the caller's business.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringResponse {
    pub real_transcript: String,
    pub ipa_transcript: String,
    pub pronunciation_accuracy: u32,
    pub real_transcripts: String,
    pub matched_transcripts: String,
    pub real_transcripts_ipa: String,
    pub matched_transcripts_ipa: String,
    pub pair_accuracy_category: String,
    pub start_time: String,
    pub end_time: String,
    pub is_letter_correct_all_words: String,
}

/// Phoneme columns prepared by the orchestrator, one entry per reference
/// word (matched entries already collapsed to [`OMITTED_WORD`] upstream
/// when the pair had no counterpart).
#[derive(Debug, Clone, Default)]
pub struct ResponsePhonemes {
    pub recording_ipa: String,
    pub reference_words_ipa: Vec<String>,
    pub matched_words_ipa: Vec<String>,
}

pub fn assemble(result: &SentenceResult, phonemes: &ResponsePhonemes) -> ScoringResponse {
    let real_transcripts = result
        .word_scores
        .iter()
        .map(|score| score.pair.reference.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let matched_transcripts = result
        .word_scores
        .iter()
        .map(|score| score.pair.recognized_word().unwrap_or(OMITTED_WORD))
        .collect::<Vec<_>>()
        .join(" ");

    let pair_accuracy_category = result
        .word_scores
        .iter()
        .map(|score| score.category.code().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let start_time = join_sample_column(result, |span| span.start_sample);
    let end_time = join_sample_column(result, |span| span.end_sample);

    let is_letter_correct_all_words = result
        .word_scores
        .iter()
        .map(|score| {
            score
                .letters
                .iter()
                .map(|verdict| if verdict.is_correct { "True" } else { "False" })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ");

    ScoringResponse {
        real_transcript: result.transcript_text.clone(),
        ipa_transcript: phonemes.recording_ipa.clone(),
        pronunciation_accuracy: result.overall_accuracy_percent.round().clamp(0.0, 100.0) as u32,
        real_transcripts,
        matched_transcripts,
        real_transcripts_ipa: phonemes.reference_words_ipa.join(" "),
        matched_transcripts_ipa: phonemes.matched_words_ipa.join(" "),
        pair_accuracy_category,
        start_time,
        end_time,
        is_letter_correct_all_words,
    }
}

fn join_sample_column(
    result: &SentenceResult,
    pick: impl Fn(&crate::types::WordSpan) -> u64,
) -> String {
    result
        .word_spans
        .iter()
        .map(|span| match span {
            Some(span) => pick(span).to_string(),
            None => OMITTED_SAMPLE.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
