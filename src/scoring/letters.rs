use crate::scoring::edit::{edit_trace, EditOp};
use crate::types::{LetterVerdict, WordPair};

/// Per-letter verdicts for one word pair, one entry per `char` of the
/// reference word.
///
/// The trace runs with the reference as the source side, so `Delete` means
/// a reference letter the speaker never produced and `Insert` an extra
/// recognized letter with no reference position — the former is marked
/// incorrect, the latter produces no verdict at all.
pub fn letter_verdicts(pair: &WordPair) -> Vec<LetterVerdict> {
    let reference_chars: Vec<char> = pair.reference.chars().collect();

    let Some(matched) = &pair.matched else {
        return reference_chars
            .into_iter()
            .map(|letter| LetterVerdict {
                letter,
                is_correct: false,
            })
            .collect();
    };

    let recognized_chars: Vec<char> = matched.word.chars().collect();
    let (_, trace) = edit_trace(&reference_chars, &recognized_chars);

    let mut verdicts = Vec::with_capacity(reference_chars.len());
    let mut next_reference = 0usize;
    for op in trace {
        match op {
            EditOp::Match => {
                verdicts.push(LetterVerdict {
                    letter: reference_chars[next_reference],
                    is_correct: true,
                });
                next_reference += 1;
            }
            EditOp::Substitute | EditOp::Delete => {
                verdicts.push(LetterVerdict {
                    letter: reference_chars[next_reference],
                    is_correct: false,
                });
                next_reference += 1;
            }
            EditOp::Insert => {}
        }
    }

    debug_assert_eq!(
        verdicts.len(),
        reference_chars.len(),
        "letter verdict contract violated"
    );
    verdicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchedWord;

    fn pair(reference: &str, recognized: Option<&str>) -> WordPair {
        WordPair {
            reference: reference.to_string(),
            matched: recognized.map(|word| MatchedWord {
                word: word.to_string(),
                index: 0,
            }),
        }
    }

    fn flags(verdicts: &[LetterVerdict]) -> Vec<bool> {
        verdicts.iter().map(|v| v.is_correct).collect()
    }

    #[test]
    fn exact_word_is_all_correct() {
        let verdicts = letter_verdicts(&pair("abc", Some("abc")));
        assert_eq!(flags(&verdicts), [true, true, true]);
        let letters: String = verdicts.iter().map(|v| v.letter).collect();
        assert_eq!(letters, "abc");
    }

    #[test]
    fn unmatched_word_is_all_incorrect() {
        let verdicts = letter_verdicts(&pair("abc", None));
        assert_eq!(flags(&verdicts), [false, false, false]);
    }

    #[test]
    fn substituted_letter_is_incorrect() {
        // "world" vs "worla": only the final letter differs.
        let verdicts = letter_verdicts(&pair("world", Some("worla")));
        assert_eq!(flags(&verdicts), [true, true, true, true, false]);
    }

    #[test]
    fn dropped_letter_is_incorrect() {
        // "world" vs "word": the trace deletes the reference 'l'.
        let verdicts = letter_verdicts(&pair("world", Some("word")));
        assert_eq!(flags(&verdicts), [true, true, true, false, true]);
    }

    #[test]
    fn extra_recognized_letter_produces_no_verdict() {
        let verdicts = letter_verdicts(&pair("cat", Some("caats")));
        assert_eq!(verdicts.len(), 3);
        assert_eq!(flags(&verdicts), [true, true, true]);
    }

    #[test]
    fn disjoint_words_are_all_incorrect() {
        let verdicts = letter_verdicts(&pair("abc", Some("xyz")));
        assert_eq!(flags(&verdicts), [false, false, false]);
    }

    #[test]
    fn empty_reference_word_yields_no_verdicts() {
        assert!(letter_verdicts(&pair("", Some("abc"))).is_empty());
        assert!(letter_verdicts(&pair("", None)).is_empty());
    }

    #[test]
    fn verdict_count_matches_code_points_not_bytes() {
        let verdicts = letter_verdicts(&pair("발음", Some("발음")));
        assert_eq!(verdicts.len(), 2);
        assert_eq!(flags(&verdicts), [true, true]);
    }
}
