use crate::config::CategoryThresholds;
use crate::types::{AccuracyCategory, WordScore};

/// Aggregate reported for an empty reference sentence: nothing was
/// required, so nothing was mispronounced. Documented policy, not an
/// accident of the arithmetic.
pub const EMPTY_REFERENCE_ACCURACY: f64 = 100.0;

/// Per-word accuracy in [0, 100]. The `max(1, …)` divisor keeps a
/// zero-length reference word (degenerate but legal) from dividing by zero.
pub fn word_accuracy(edit_cost: usize, reference_len: usize) -> f64 {
    let len = reference_len.max(1) as f64;
    100.0 * (1.0 - edit_cost as f64 / len).max(0.0)
}

pub fn categorize(accuracy_percent: f64, thresholds: &CategoryThresholds) -> AccuracyCategory {
    if accuracy_percent >= thresholds.excellent {
        AccuracyCategory::Excellent
    } else if accuracy_percent >= thresholds.good {
        AccuracyCategory::Good
    } else if accuracy_percent >= thresholds.fair {
        AccuracyCategory::Fair
    } else {
        AccuracyCategory::Poor
    }
}

/// Sentence-level accuracy: mean of per-word accuracy weighted by the
/// reference word's character count, so long words pull the score
/// proportionally harder than short ones.
pub fn aggregate(word_scores: &[WordScore]) -> f64 {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0usize;
    for score in word_scores {
        let weight = score.pair.reference.chars().count();
        weighted_sum += score.accuracy_percent * weight as f64;
        total_weight += weight;
    }
    if total_weight == 0 {
        return EMPTY_REFERENCE_ACCURACY;
    }
    weighted_sum / total_weight as f64
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::types::{MatchedWord, WordPair};

    fn score(reference: &str, edit_cost: usize) -> WordScore {
        let accuracy_percent = word_accuracy(edit_cost, reference.chars().count());
        WordScore {
            pair: WordPair {
                reference: reference.to_string(),
                matched: Some(MatchedWord {
                    word: reference.to_string(),
                    index: 0,
                }),
            },
            edit_cost,
            accuracy_percent,
            category: categorize(accuracy_percent, &CategoryThresholds::default()),
            letters: Vec::new(),
        }
    }

    #[test]
    fn zero_cost_is_full_accuracy() {
        assert_relative_eq!(word_accuracy(0, 5), 100.0);
    }

    #[test]
    fn accuracy_is_non_increasing_in_cost() {
        let mut last = 101.0;
        for cost in 0..8 {
            let accuracy = word_accuracy(cost, 5);
            assert!(accuracy <= last, "cost {cost}");
            last = accuracy;
        }
    }

    #[test]
    fn cost_beyond_length_floors_at_zero() {
        assert_relative_eq!(word_accuracy(9, 3), 0.0);
    }

    #[test]
    fn zero_length_reference_word_does_not_divide_by_zero() {
        assert_relative_eq!(word_accuracy(0, 0), 100.0);
        assert_relative_eq!(word_accuracy(2, 0), 0.0);
    }

    #[test]
    fn default_category_boundaries() {
        let thresholds = CategoryThresholds::default();
        assert_eq!(categorize(100.0, &thresholds), AccuracyCategory::Excellent);
        assert_eq!(categorize(90.0, &thresholds), AccuracyCategory::Excellent);
        assert_eq!(categorize(89.9, &thresholds), AccuracyCategory::Good);
        assert_eq!(categorize(75.0, &thresholds), AccuracyCategory::Good);
        assert_eq!(categorize(74.9, &thresholds), AccuracyCategory::Fair);
        assert_eq!(categorize(50.0, &thresholds), AccuracyCategory::Fair);
        assert_eq!(categorize(49.9, &thresholds), AccuracyCategory::Poor);
        assert_eq!(categorize(0.0, &thresholds), AccuracyCategory::Poor);
    }

    #[test]
    fn empty_word_scores_aggregate_to_policy_constant() {
        assert_relative_eq!(aggregate(&[]), EMPTY_REFERENCE_ACCURACY);
    }

    #[test]
    fn aggregate_weights_by_reference_length() {
        let scores = [score("elephant", 1), score("at", 1)];
        // (87.5 * 8 + 50.0 * 2) / 10; a plain mean would give 68.75.
        assert_relative_eq!(aggregate(&scores), 80.0);
    }

    #[test]
    fn moving_a_saturating_error_between_words_shifts_the_aggregate() {
        // Total edit cost is 3 in both cases. On the 2-letter word the
        // per-word floor at zero bites, so the aggregates differ.
        let error_on_long = [score("elephant", 3), score("at", 0)];
        let error_on_short = [score("elephant", 0), score("at", 3)];
        assert_relative_eq!(aggregate(&error_on_long), 70.0);
        assert_relative_eq!(aggregate(&error_on_short), 80.0);
    }

    #[test]
    fn aggregate_of_uniform_scores_is_that_score() {
        let scores = [score("hello", 0), score("there", 0)];
        assert_relative_eq!(aggregate(&scores), 100.0);
    }

    #[test]
    fn zero_length_words_carry_no_weight() {
        let scores = [score("", 0), score("hi", 0)];
        assert_relative_eq!(aggregate(&scores), 100.0);
    }
}
