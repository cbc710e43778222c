pub mod parser;
pub mod segmenter;

use std::sync::Arc;

use tracing::debug;
use vidminok_morph::{InflectError, WordInflector};
use vidminok_protocol::{Analyzer, Case, IntoCase};

use crate::parser::{split_roles, split_words, ROLE_DELIMITER};
use crate::segmenter::inflect_segment;

/// How free text is treated by [`PhraseMorpher::inflect_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
    /// Every word is inflected.
    #[default]
    Sentence,
    /// A job title: only the head of each role is inflected.
    Position,
}

/// Inflects sentences and position titles word by word.
#[derive(Clone)]
pub struct PhraseMorpher {
    inflector: WordInflector,
}

impl PhraseMorpher {
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self::with_inflector(WordInflector::new(analyzer))
    }

    pub fn with_inflector(inflector: WordInflector) -> Self {
        Self { inflector }
    }

    pub fn inflector(&self) -> &WordInflector {
        &self.inflector
    }

    /// Primary entry point: text -> inflected text. Original spacing is not kept.
    pub fn inflect_text(&self, text: &str, case: impl IntoCase, mode: TextMode) -> Result<String, InflectError> {
        let case = case.into_case()?;
        if text.trim().is_empty() {
            return Ok(String::new());
        }
        debug!(%case, ?mode, "inflecting text");

        let out = match mode {
            TextMode::Sentence => self.inflect_sentence(text, case),
            TextMode::Position => self.inflect_position(text, case),
        };
        Ok(out)
    }

    fn inflect_sentence(&self, text: &str, case: Case) -> String {
        split_words(text)
            .into_iter()
            .map(|word| self.inflector.inflect(word, case, false))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn inflect_position(&self, text: &str, case: Case) -> String {
        split_roles(text)
            .into_iter()
            .map(|role| inflect_segment(&self.inflector, &split_words(role), case).join(" "))
            .collect::<Vec<_>>()
            .join(ROLE_DELIMITER)
    }
}
