use std::collections::HashMap;

use crate::error::ScoringError;
use crate::pipeline::traits::{
    PhonemeConverter, SpeechRecognizer, SpeechSynthesizer, Translator,
};

/// Engine bundle for one language. Recognition and phoneme conversion are
/// required for scoring; synthesis and translation are optional extras a
/// deployment may or may not wire up.
pub struct LanguageEngines {
    pub recognizer: Box<dyn SpeechRecognizer>,
    pub phoneme_converter: Box<dyn PhonemeConverter>,
    pub synthesizer: Option<Box<dyn SpeechSynthesizer>>,
    pub translator: Option<Box<dyn Translator>>,
}

impl std::fmt::Debug for LanguageEngines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageEngines")
            .field("synthesizer", &self.synthesizer.is_some())
            .field("translator", &self.translator.is_some())
            .finish()
    }
}

impl LanguageEngines {
    pub fn new(
        recognizer: Box<dyn SpeechRecognizer>,
        phoneme_converter: Box<dyn PhonemeConverter>,
    ) -> Self {
        Self {
            recognizer,
            phoneme_converter,
            synthesizer: None,
            translator: None,
        }
    }

    pub fn with_synthesizer(mut self, synthesizer: Box<dyn SpeechSynthesizer>) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }

    pub fn with_translator(mut self, translator: Box<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }
}

/// Explicit language-tag → engines map, constructed and owned by the
/// caller. There is deliberately no process-global registry; lifecycle and
/// sharing are the caller's decisions.
#[derive(Default)]
pub struct LanguageRegistry {
    engines: HashMap<String, LanguageEngines>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, language: impl Into<String>, engines: LanguageEngines) {
        self.engines.insert(language.into(), engines);
    }

    pub fn engines(&self, language: &str) -> Result<&LanguageEngines, ScoringError> {
        self.engines.get(language).ok_or_else(|| {
            ScoringError::invalid_input(format!("no engines registered for language {language:?}"))
        })
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.engines.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}
