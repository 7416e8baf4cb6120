use unicode_normalization::UnicodeNormalization;

use crate::config::CasePolicy;

/// NFC-normalize and case-fold one side of a comparison. Reference and
/// recognized text must go through the same path, otherwise combining
/// characters make equal-looking words compare unequal.
pub fn normalize_text(text: &str, case: CasePolicy) -> String {
    let composed: String = text.nfc().collect();
    match case {
        CasePolicy::Lowercase => composed.to_lowercase(),
        CasePolicy::Preserve => composed,
    }
}

pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

pub fn tokenize_words(text: &str, case: CasePolicy) -> Vec<String> {
    split_words(&normalize_text(text, case))
}
