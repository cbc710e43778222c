use thiserror::Error;
use vidminok_protocol::{CaseError, LexemeId};

/// Errors surfaced by the validated entry points of the engine.
///
/// Analyzer-level failures never show up here; they degrade to the original word.
#[derive(Debug, Error)]
pub enum InflectError {
    #[error(transparent)]
    UnsupportedCase(#[from] CaseError),
}

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("invalid lexicon archive: {0}")]
    Archive(String),

    #[error("form '{word}' of lexeme {id} '{lemma}' must carry exactly one case grammeme")]
    AmbiguousCase { id: LexemeId, lemma: String, word: String },

    #[error("lexeme {id} '{lemma}' has no forms")]
    EmptyLexeme { id: LexemeId, lemma: String },

    #[error("lexeme id {id} is used by both '{first}' and '{second}'")]
    DuplicateId { id: LexemeId, first: String, second: String },
}
