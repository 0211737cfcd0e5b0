//! Passive-voice detection service - service layer

use crate::error::AppResult;
use crate::infrastructure::SyntacticParser;
use std::sync::Arc;
use tracing::trace;

/// Counts sentences written in the passive voice
pub trait PassiveVoiceDetector: Send + Sync {
    fn passive_sentence_count(&self, text: &str) -> AppResult<usize>;
}

/// Counts parser sentences holding at least one passive-auxiliary token.
///
/// Sentence boundaries are the parser's, not the punctuation split used for the
/// `Sentences` metric, so the two counts may disagree on the same text.
pub struct DependencyPassiveDetector {
    parser: Arc<dyn SyntacticParser>,
}

impl DependencyPassiveDetector {
    pub fn new(parser: Arc<dyn SyntacticParser>) -> Self {
        Self { parser }
    }
}

impl PassiveVoiceDetector for DependencyPassiveDetector {
    fn passive_sentence_count(&self, text: &str) -> AppResult<usize> {
        let sentences = self.parser.parse(text)?;
        let passive = sentences
            .iter()
            .filter(|sentence| {
                sentence
                    .tokens
                    .iter()
                    .any(|token| token.role.is_passive_auxiliary())
            })
            .inspect(|sentence| trace!("passive: {}", sentence.text()))
            .count();
        Ok(passive)
    }
}
