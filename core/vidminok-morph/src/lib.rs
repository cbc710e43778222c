pub mod casing;
pub mod error;
pub mod lexicon;
pub mod rules;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

use std::fmt;
use std::sync::Arc;

use tracing::debug;
use vidminok_protocol::{Analyzer, Case, IntoCase};

pub use error::{InflectError, LexiconError};
pub use lexicon::LexiconAnalyzer;

/// Why the analyzer could not produce a form. Never leaves this crate:
/// the inflector answers with the original word instead.
#[derive(Debug)]
pub enum MorphError {
    NoParse,
    FormNotFound(Case),
}

impl fmt::Display for MorphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MorphError::NoParse => write!(f, "analyzer returned no parse"),
            MorphError::FormNotFound(case) => write!(f, "Form not found for case: {}", case),
        }
    }
}

impl std::error::Error for MorphError {}

/// Inflects single words, applying the dative preference and patronymic
/// repair rules on top of the analyzer's own forms.
#[derive(Clone)]
pub struct WordInflector {
    analyzer: Arc<dyn Analyzer>,
}

impl WordInflector {
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self { analyzer }
    }

    pub fn analyzer(&self) -> &dyn Analyzer {
        self.analyzer.as_ref()
    }

    /// Validated entry point: rejects unknown case codes.
    pub fn inflect_word(&self, word: &str, case: impl IntoCase) -> Result<String, InflectError> {
        let case = case.into_case()?;
        Ok(self.inflect(word, case, false))
    }

    /// Inflects `word` into `case`, falling back to `word` itself when the
    /// analyzer has no suitable form. The first letter keeps the case it had
    /// in the input.
    pub fn inflect(&self, word: &str, case: Case, patronymic: bool) -> String {
        if word.is_empty() {
            return String::new();
        }
        let capitalized = casing::starts_uppercase(word);

        let inflected = match self.generate(word, case) {
            Ok(form) if case == Case::Dative => rules::refine_dative(self.analyzer(), word, form),
            Ok(form) => form,
            Err(err) => {
                debug!(word, %case, %err, "keeping original form");
                word.to_string()
            }
        };

        let inflected = if patronymic {
            rules::repair_patronymic(inflected, case)
        } else {
            inflected
        };

        casing::with_initial_case(&inflected, capitalized)
    }

    fn generate(&self, word: &str, case: Case) -> Result<String, MorphError> {
        let parse = self
            .analyzer
            .parse(word)
            .into_iter()
            .next()
            .ok_or(MorphError::NoParse)?;

        parse
            .inflect(case)
            .map(|form| form.word)
            .ok_or(MorphError::FormNotFound(case))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_analyzer;
    use proptest::prelude::*;

    fn inflector() -> WordInflector {
        WordInflector::new(sample_analyzer())
    }

    #[test]
    fn test_genitive_keeps_capital() {
        assert_eq!(inflector().inflect("Директор", Case::Genitive, false), "Директора");
        assert_eq!(inflector().inflect("директор", Case::Genitive, false), "директора");
    }

    #[test]
    fn test_dative_prefers_short_ending() {
        let w = inflector();
        assert_eq!(w.inflect("директор", Case::Dative, false), "директору");
        assert_eq!(w.inflect("Тарас", Case::Dative, false), "Тарасу");
        assert_eq!(w.inflect("Коваль", Case::Dative, false), "Ковалю");
    }

    #[test]
    fn test_dative_without_long_form_is_untouched() {
        assert_eq!(inflector().inflect("Олена", Case::Dative, false), "Олені");
        assert_eq!(inflector().inflect("головний", Case::Dative, false), "головному");
    }

    #[test]
    fn test_indeclinable_word_is_unchanged() {
        for case in Case::ALL {
            assert_eq!(inflector().inflect("кафе", case, false), "кафе");
        }
    }

    #[test]
    fn test_unknown_patronymic_is_repaired() {
        let w = inflector();
        assert_eq!(w.inflect("Петрович", Case::Genitive, true), "Петровича");
        assert_eq!(w.inflect("Петрович", Case::Instrumental, true), "Петровичем");
        assert_eq!(w.inflect("Петрович", Case::Dative, true), "Петровичу");
        assert_eq!(w.inflect("Петрович", Case::Vocative, true), "Петровичу");
        assert_eq!(w.inflect("Петрович", Case::Locative, true), "Петрович");
    }

    #[test]
    fn test_patronymic_rule_needs_flag() {
        assert_eq!(inflector().inflect("Петрович", Case::Genitive, false), "Петрович");
    }

    #[test]
    fn test_known_patronymic_not_doubled() {
        let w = inflector();
        assert_eq!(w.inflect("Григорович", Case::Genitive, true), "Григоровича");
        assert_eq!(w.inflect("Григорович", Case::Instrumental, true), "Григоровичем");
    }

    #[test]
    fn test_inflect_word_validates_case() {
        let w = inflector();
        assert_eq!(w.inflect_word("директор", "gent").unwrap(), "директора");
        assert!(matches!(
            w.inflect_word("директор", ""),
            Err(InflectError::UnsupportedCase(_))
        ));
        assert!(matches!(
            w.inflect_word("директор", "genitive"),
            Err(InflectError::UnsupportedCase(_))
        ));
    }

    #[test]
    fn test_nominative_is_identity_for_known_words() {
        let w = inflector();
        for word in ["директор", "Шевченко", "Тарас", "головний", "відділ", "Олена"] {
            assert_eq!(w.inflect(word, Case::Nominative, false), word);
        }
    }

    proptest! {
        #[test]
        fn test_empty_word_stays_empty(idx in 0usize..7, patronymic in any::<bool>()) {
            let case = Case::ALL[idx];
            prop_assert_eq!(inflector().inflect("", case, patronymic), "");
        }

        #[test]
        fn test_unknown_words_fall_back(word in "[A-Z][a-z]{1,12}", idx in 0usize..7) {
            let case = Case::ALL[idx];
            prop_assert_eq!(inflector().inflect(&word, case, false), word);
        }

        #[test]
        fn test_initial_case_preserved(
            word in prop::sample::select(vec!["директор", "заступник", "тарас", "коваль", "олена", "відділ"]),
            idx in 0usize..7,
            upper in any::<bool>(),
        ) {
            let case = Case::ALL[idx];
            let input = if upper { casing::capitalize(word) } else { word.to_string() };
            let output = inflector().inflect(&input, case, false);
            prop_assert_eq!(casing::starts_uppercase(&output), upper);
        }
    }
}
