use serde::Serialize;

use crate::scoring::response::{assemble, ResponsePhonemes};
use crate::types::{AccuracyCategory, SentenceResult};

pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub schema_version: u32,
    pub meta: Meta,
    pub cases: Vec<CaseReport>,
    pub aggregates: AggregateReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub generated_at: String,
    pub case_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub id: String,
    pub reference: String,
    pub matched: String,
    pub transcript: String,
    pub word_count: u32,
    pub omitted_word_count: u32,
    pub pronunciation_accuracy: f64,
    pub pair_accuracy_category: String,
    pub is_letter_correct_all_words: String,
    pub category_counts: CategoryCounts,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CategoryCounts {
    pub excellent: u32,
    pub good: u32,
    pub fair: u32,
    pub poor: u32,
}

impl CategoryCounts {
    fn add(&mut self, category: AccuracyCategory) {
        match category {
            AccuracyCategory::Excellent => self.excellent += 1,
            AccuracyCategory::Good => self.good += 1,
            AccuracyCategory::Fair => self.fair += 1,
            AccuracyCategory::Poor => self.poor += 1,
        }
    }

    fn merge(&mut self, other: CategoryCounts) {
        self.excellent += other.excellent;
        self.good += other.good;
        self.fair += other.fair;
        self.poor += other.poor;
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AggregateReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<MetricDistribution>,
    pub category_counts: CategoryCounts,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricDistribution {
    pub mean: f64,
    pub p50: f64,
    pub p90: f64,
    pub min: f64,
    pub max: f64,
}

pub fn case_report(id: &str, result: &SentenceResult) -> CaseReport {
    let response = assemble(result, &ResponsePhonemes::default());
    let mut category_counts = CategoryCounts::default();
    for score in &result.word_scores {
        category_counts.add(score.category);
    }
    let omitted_word_count = result
        .word_scores
        .iter()
        .filter(|score| score.pair.matched.is_none())
        .count() as u32;

    CaseReport {
        id: id.to_string(),
        reference: response.real_transcripts,
        matched: response.matched_transcripts,
        transcript: result.transcript_text.clone(),
        word_count: result.word_scores.len() as u32,
        omitted_word_count,
        pronunciation_accuracy: result.overall_accuracy_percent,
        pair_accuracy_category: response.pair_accuracy_category,
        is_letter_correct_all_words: response.is_letter_correct_all_words,
        category_counts,
    }
}

pub fn build_report(generated_at: String, cases: Vec<CaseReport>) -> Report {
    let aggregates = aggregate_cases(&cases);
    Report {
        schema_version: REPORT_SCHEMA_VERSION,
        meta: Meta {
            generated_at,
            case_count: cases.len(),
        },
        cases,
        aggregates,
    }
}

fn aggregate_cases(cases: &[CaseReport]) -> AggregateReport {
    let mut category_counts = CategoryCounts::default();
    for case in cases {
        category_counts.merge(case.category_counts);
    }

    let mut accuracies: Vec<f64> = cases.iter().map(|c| c.pronunciation_accuracy).collect();
    accuracies.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let accuracy = if accuracies.is_empty() {
        None
    } else {
        Some(MetricDistribution {
            mean: accuracies.iter().sum::<f64>() / accuracies.len() as f64,
            p50: percentile(&accuracies, 0.50),
            p90: percentile(&accuracies, 0.90),
            min: accuracies[0],
            max: accuracies[accuracies.len() - 1],
        })
    };

    AggregateReport {
        accuracy,
        category_counts,
    }
}

/// Nearest-rank percentile over an ascending-sorted slice.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let rank = ((sorted.len() - 1) as f64 * q).round() as usize;
    sorted[rank.min(sorted.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        LetterVerdict, MatchedWord, WordPair, WordScore,
    };

    fn word_score(reference: &str, recognized: Option<&str>, accuracy: f64) -> WordScore {
        let category = if accuracy >= 90.0 {
            AccuracyCategory::Excellent
        } else if accuracy >= 75.0 {
            AccuracyCategory::Good
        } else if accuracy >= 50.0 {
            AccuracyCategory::Fair
        } else {
            AccuracyCategory::Poor
        };
        WordScore {
            pair: WordPair {
                reference: reference.to_string(),
                matched: recognized.map(|word| MatchedWord {
                    word: word.to_string(),
                    index: 0,
                }),
            },
            edit_cost: 0,
            accuracy_percent: accuracy,
            category,
            letters: reference
                .chars()
                .map(|letter| LetterVerdict {
                    letter,
                    is_correct: accuracy >= 90.0,
                })
                .collect(),
        }
    }

    fn sentence_result(scores: Vec<WordScore>, overall: f64) -> SentenceResult {
        let word_spans = scores.iter().map(|_| None).collect();
        SentenceResult {
            word_scores: scores,
            overall_accuracy_percent: overall,
            transcript_text: String::new(),
            word_spans,
        }
    }

    #[test]
    fn case_report_counts_omissions_and_categories() {
        let result = sentence_result(
            vec![
                word_score("hello", Some("hello"), 100.0),
                word_score("world", None, 0.0),
            ],
            50.0,
        );
        let case = case_report("case-1", &result);
        assert_eq!(case.word_count, 2);
        assert_eq!(case.omitted_word_count, 1);
        assert_eq!(case.category_counts.excellent, 1);
        assert_eq!(case.category_counts.poor, 1);
        assert_eq!(case.matched, "hello -");
        assert_eq!(case.pair_accuracy_category, "0 3");
    }

    #[test]
    fn report_aggregates_accuracy_distribution() {
        let cases: Vec<CaseReport> = [60.0, 80.0, 100.0]
            .iter()
            .map(|&overall| {
                case_report(
                    "case",
                    &sentence_result(vec![word_score("word", Some("word"), overall)], overall),
                )
            })
            .collect();
        let report = build_report("2026-01-01T00:00:00Z".to_string(), cases);
        assert_eq!(report.schema_version, REPORT_SCHEMA_VERSION);
        assert_eq!(report.meta.case_count, 3);
        let accuracy = report.aggregates.accuracy.expect("distribution");
        assert_eq!(accuracy.mean, 80.0);
        assert_eq!(accuracy.p50, 80.0);
        assert_eq!(accuracy.min, 60.0);
        assert_eq!(accuracy.max, 100.0);
    }

    #[test]
    fn empty_report_has_no_distribution() {
        let report = build_report("2026-01-01T00:00:00Z".to_string(), Vec::new());
        assert!(report.aggregates.accuracy.is_none());
        assert_eq!(report.meta.case_count, 0);
    }
}
