use serde::Serialize;

/// Sample interval is [start_sample, end_sample), i.e. start inclusive/end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordSpan {
    pub start_sample: u64,
    pub end_sample: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedWord {
    pub word: String,
    pub span: WordSpan,
}

/// Output of the speech-recognition collaborator: the raw transcript plus
/// per-word sample spans, ordered by start and non-overlapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transcription {
    pub text: String,
    pub words: Vec<RecognizedWord>,
}

/// A recognized word selected as the counterpart of a reference word.
/// `index` points back into the recognized sequence so the orchestrator can
/// carry the word's time span through.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedWord {
    pub word: String,
    pub index: usize,
}

/// One reference word and its best recognized counterpart, if any.
/// `matched: None` denotes an omission; immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct WordPair {
    pub reference: String,
    pub matched: Option<MatchedWord>,
}

impl WordPair {
    pub fn recognized_word(&self) -> Option<&str> {
        self.matched.as_ref().map(|m| m.word.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterVerdict {
    pub letter: char,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyCategory {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl AccuracyCategory {
    /// Wire code used in the exchange shape, 0 = Excellent .. 3 = Poor.
    pub fn code(self) -> u8 {
        match self {
            Self::Excellent => 0,
            Self::Good => 1,
            Self::Fair => 2,
            Self::Poor => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordScore {
    pub pair: WordPair,
    pub edit_cost: usize,
    pub accuracy_percent: f64,
    pub category: AccuracyCategory,
    /// One verdict per `char` of the reference word.
    pub letters: Vec<LetterVerdict>,
}

/// Value object owned solely by the caller; the scorer retains nothing.
/// `word_scores` and `word_spans` both have one entry per reference word.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceResult {
    pub word_scores: Vec<WordScore>,
    pub overall_accuracy_percent: f64,
    pub transcript_text: String,
    pub word_spans: Vec<Option<WordSpan>>,
}
