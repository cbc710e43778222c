pub mod cache;
pub mod gender;

use std::sync::Arc;

use tracing::{debug, warn};
use vidminok_morph::casing::capitalize;
use vidminok_morph::{InflectError, WordInflector};
use vidminok_protocol::{Analyzer, Case, Gender, IntoCase};

pub use cache::{InflectionCache, NameRole};
pub use gender::detect_gender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameOptions {
    /// Print the surname in capitals ("ШЕВЧЕНКА Тараса").
    pub uppercase_surname: bool,
}

impl Default for NameOptions {
    fn default() -> Self {
        Self { uppercase_surname: true }
    }
}

/// A full name split into its positional parts. Missing parts are empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NameParts<'a> {
    pub surname: &'a str,
    pub first_name: &'a str,
    pub patronymic: &'a str,
}

impl<'a> NameParts<'a> {
    /// Takes the first three whitespace-separated tokens. Compound surnames
    /// written with spaces are not recognized: extra tokens are dropped.
    pub fn split(full_name: &'a str) -> Self {
        let mut tokens = full_name.split_whitespace();
        let parts = Self {
            surname: tokens.next().unwrap_or_default(),
            first_name: tokens.next().unwrap_or_default(),
            patronymic: tokens.next().unwrap_or_default(),
        };

        let dropped: Vec<&str> = tokens.collect();
        if !dropped.is_empty() {
            warn!(?dropped, "name has more than three parts, ignoring the rest");
        }
        parts
    }
}

/// Inflects full Ukrainian names (surname, first name, patronymic).
///
/// Each instance owns its memoization cache; clone the analyzer handle, not
/// the morpher, to use names from several threads.
pub struct NameMorpher {
    inflector: WordInflector,
    cache: InflectionCache,
    options: NameOptions,
}

impl NameMorpher {
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self::with_inflector(WordInflector::new(analyzer))
    }

    pub fn with_inflector(inflector: WordInflector) -> Self {
        Self {
            inflector,
            cache: InflectionCache::new(),
            options: NameOptions::default(),
        }
    }

    pub fn with_options(mut self, options: NameOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> NameOptions {
        self.options
    }

    pub fn cache(&self) -> &InflectionCache {
        &self.cache
    }

    /// Inflects `full_name` using the morpher's configured options.
    pub fn inflect_name(&mut self, full_name: &str, case: impl IntoCase) -> Result<String, InflectError> {
        let options = self.options;
        self.inflect_name_with(full_name, case, options)
    }

    pub fn inflect_name_with(
        &mut self,
        full_name: &str,
        case: impl IntoCase,
        options: NameOptions,
    ) -> Result<String, InflectError> {
        let case = case.into_case()?;
        if full_name.trim().is_empty() {
            return Ok(String::new());
        }

        let parts = NameParts::split(full_name);
        let gender = detect_gender(self.inflector.analyzer(), parts.first_name, parts.patronymic);
        debug!(%case, ?gender, "inflecting name");

        let mut surname = self.inflect_part(parts.surname, case, gender, NameRole::Surname);
        let first_name = self.inflect_part(parts.first_name, case, gender, NameRole::FirstName);
        let patronymic = self.inflect_part(parts.patronymic, case, gender, NameRole::Patronymic);

        if options.uppercase_surname {
            surname = surname.to_uppercase();
        }

        let assembled = [surname, first_name, patronymic]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Ok(assembled)
    }

    fn inflect_part(&mut self, word: &str, case: Case, gender: Gender, role: NameRole) -> String {
        if word.is_empty() {
            return String::new();
        }
        if let Some(hit) = self.cache.get(word, case, gender, role) {
            debug!(word, %case, ?role, "cache hit");
            return hit.to_string();
        }

        let inflected = match role {
            NameRole::Surname if gender == Gender::Feminine && self.keeps_feminine_surname(word, case) => {
                debug!(word, %case, "feminine surname left uninflected");
                if word.chars().next().is_some_and(char::is_uppercase) {
                    capitalize(word)
                } else {
                    word.to_string()
                }
            }
            NameRole::Surname | NameRole::FirstName => self.inflector.inflect(word, case, false),
            NameRole::Patronymic => self.inflector.inflect(word, case, true),
        };

        self.cache.insert(word, case, gender, role, inflected.clone());
        inflected
    }

    /// Fixed-form surnames (Коваль, Шевченко) do not decline for women.
    fn keeps_feminine_surname(&self, surname: &str, case: Case) -> bool {
        case != Case::Nominative
            && self
                .inflector
                .analyzer()
                .parse(surname)
                .first()
                .is_some_and(|parse| parse.is_fixed_form_surname())
    }
}
