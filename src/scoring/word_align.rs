use crate::config::AlignPolicy;
use crate::scoring::edit::edit_distance;
use crate::types::{MatchedWord, WordPair};

/// Pair every reference word with its best recognized counterpart.
///
/// The recognized sequence is assumed to be roughly order-preserving
/// relative to the reference, so candidates for reference word `i` are the
/// recognized indices within `policy.window_radius` of `i`. Selection runs
/// in two rounds to keep the pairing 1:1:
/// - exact matches claim their counterpart first, so a noisy neighbor
///   cannot steal a word that was actually said;
/// - remaining reference words then take the unclaimed candidate with the
///   lowest character edit cost, ties going to the earliest recognized
///   index, unless that cost exceeds the reference word's length plus
///   `policy.unmatched_slack` — a pair that bad carries no letter-level
///   signal, so the word counts as omitted.
///
/// The output always has one pair per reference word. Recognized words that
/// are never claimed are dropped; they do not affect scoring.
pub fn align_words(
    reference: &[String],
    recognized: &[String],
    policy: &AlignPolicy,
) -> Vec<WordPair> {
    let recognized_chars: Vec<Vec<char>> =
        recognized.iter().map(|w| w.chars().collect()).collect();
    let mut claimed = vec![false; recognized.len()];
    let mut matched: Vec<Option<MatchedWord>> = vec![None; reference.len()];

    for (i, reference_word) in reference.iter().enumerate() {
        for j in candidate_window(i, recognized.len(), policy.window_radius) {
            if !claimed[j] && recognized[j] == *reference_word {
                claimed[j] = true;
                matched[i] = Some(MatchedWord {
                    word: recognized[j].clone(),
                    index: j,
                });
                break;
            }
        }
    }

    for (i, reference_word) in reference.iter().enumerate() {
        if matched[i].is_some() {
            continue;
        }
        let reference_chars: Vec<char> = reference_word.chars().collect();

        let mut best: Option<(usize, usize)> = None;
        for j in candidate_window(i, recognized.len(), policy.window_radius) {
            if claimed[j] {
                continue;
            }
            let cost = edit_distance(&reference_chars, &recognized_chars[j]);
            // Strict < with ascending j keeps the earliest index on ties.
            if best.map_or(true, |(best_cost, _)| cost < best_cost) {
                best = Some((cost, j));
            }
        }

        if let Some((cost, j)) = best {
            if cost <= reference_chars.len() + policy.unmatched_slack {
                claimed[j] = true;
                matched[i] = Some(MatchedWord {
                    word: recognized[j].clone(),
                    index: j,
                });
            }
        }
    }

    reference
        .iter()
        .zip(matched)
        .map(|(reference_word, matched)| WordPair {
            reference: reference_word.clone(),
            matched,
        })
        .collect()
}

fn candidate_window(i: usize, recognized_len: usize, radius: usize) -> std::ops::Range<usize> {
    if recognized_len == 0 {
        return 0..0;
    }
    let start = i.saturating_sub(radius);
    let end = (i + radius + 1).min(recognized_len);
    start..end
}
