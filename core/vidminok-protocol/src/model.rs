use rkyv::{Archive, Deserialize, Serialize};
use crate::morphology::Grammemes;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Stable number of a lexicon entry. Unique within one lexicon; written as a
/// plain integer in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[archive(check_bytes)]
#[repr(transparent)]
pub struct LexemeId(pub u32);

impl LexemeId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for LexemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One surface form of a lexeme. `tags` holds the inflectional grammemes
/// (case, number and, for adjectives, gender).
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct FormEntry {
    pub word: String,
    pub tags: Grammemes,
}

/// A dictionary entry. `tags` holds the lexical grammemes shared by every form
/// (part of speech, gender of nouns, name markers).
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct LexemeEntry {
    pub id: LexemeId,
    pub lemma: String,
    pub tags: Grammemes,
    pub forms: Vec<FormEntry>,
}

/// The full lexicon. Entry order is ranking order: earlier entries are the
/// more likely reading of an ambiguous form.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Lexicon {
    pub version: u32,
    pub entries: Vec<LexemeEntry>,
}
