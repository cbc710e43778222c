use crate::morphology::{Case, Grammemes, PartOfSpeech};
use alloc::string::String;
use alloc::vec::Vec;

/// A surface form together with its grammemes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedForm {
    pub word: String,
    pub tags: Grammemes,
}

impl TaggedForm {
    pub fn new(word: impl Into<String>, tags: Grammemes) -> Self {
        Self { word: word.into(), tags }
    }

    pub fn has_case(&self, case: Case) -> bool {
        self.tags.contains(case.grammeme())
    }
}

/// One candidate analysis of a word, as produced by an [`Analyzer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    /// The surface form that was analyzed, as stored in the dictionary.
    pub word: String,
    /// Dictionary (normal) form of the lexeme.
    pub normal_form: String,
    pub tags: Grammemes,
    /// Every form of the lexeme, in dictionary order.
    pub lexeme: Vec<TaggedForm>,
}

impl Parse {
    pub fn is_adjective(&self) -> bool {
        self.tags.part_of_speech() == Some(PartOfSpeech::Adjective)
    }

    pub fn is_feminine(&self) -> bool {
        self.tags.contains(Grammemes::FEMN)
    }

    /// A singular-only surname without a feminine `-а`/`-я` ending.
    ///
    /// Feminine bearers of such surnames keep the nominative form in every case.
    pub fn is_fixed_form_surname(&self) -> bool {
        self.tags.contains(Grammemes::SGTM) && !self.word.ends_with(&['а', 'я'][..])
    }

    /// Picks the lexeme form for `case`.
    ///
    /// Number must agree with this parse when both sides carry one; gender
    /// agreement is preferred but not required. Ties go to the earliest form.
    pub fn inflect(&self, case: Case) -> Option<TaggedForm> {
        let number = self.tags.intersection(Grammemes::NUMBERS);
        let gender = self.tags.intersection(Grammemes::GENDERS);

        let mut best: Option<(&TaggedForm, bool)> = None;
        for form in self.lexeme.iter().filter(|f| f.has_case(case)) {
            let form_number = form.tags.intersection(Grammemes::NUMBERS);
            if !number.is_empty() && !form_number.is_empty() && form_number != number {
                continue;
            }

            let gender_agrees = gender.is_empty()
                || form.tags.intersection(Grammemes::GENDERS).is_empty()
                || form.tags.contains(gender);
            match best {
                Some((_, true)) => break,
                Some((_, false)) if !gender_agrees => {}
                _ => best = Some((form, gender_agrees)),
            }
        }

        best.map(|(form, _)| form.clone())
    }
}

/// The morphological analyzer capability the inflection engine is built on.
///
/// Implementations must be pure functions of their input: results are
/// memoized by callers and never invalidated.
pub trait Analyzer: Send + Sync {
    /// Candidate parses for `word`, most likely first. Empty when unknown.
    fn parse(&self, word: &str) -> Vec<Parse>;
}
