//! Corrections applied on top of the analyzer's inflected forms.

use tracing::debug;
use vidminok_protocol::{Analyzer, Case};

const LONG_DATIVE_ENDINGS: [&str; 3] = ["ові", "еві", "єві"];
const SHORT_DATIVE_ENDINGS: [char; 2] = ['у', 'ю'];

const PATRONYMIC_ENDING: &str = "ич";

/// Replaces a long masculine dative (`директорові`) with the parallel short
/// form (`директору`) when the lexeme of `original` has one.
pub fn refine_dative(analyzer: &dyn Analyzer, original: &str, inflected: String) -> String {
    if !LONG_DATIVE_ENDINGS.iter().any(|ending| inflected.ends_with(ending)) {
        return inflected;
    }

    let Some(parse) = analyzer.parse(original).into_iter().next() else {
        return inflected;
    };

    let short = parse
        .lexeme
        .into_iter()
        .find(|form| form.has_case(Case::Dative) && form.word.ends_with(&SHORT_DATIVE_ENDINGS[..]));

    match short {
        Some(form) => {
            debug!(original, long = %inflected, short = %form.word, "preferring short dative");
            form.word
        }
        None => inflected,
    }
}

/// Suffix appended to a patronymic still ending in `-ич` after inflection.
pub fn patronymic_suffix(case: Case) -> Option<&'static str> {
    match case {
        Case::Dative | Case::Vocative => Some("у"),
        Case::Genitive => Some("а"),
        Case::Instrumental => Some("ем"),
        Case::Nominative | Case::Accusative | Case::Locative => None,
    }
}

/// Completes male patronymics the analyzer left in the `-ич` form.
pub fn repair_patronymic(inflected: String, case: Case) -> String {
    if !inflected.to_lowercase().ends_with(PATRONYMIC_ENDING) {
        return inflected;
    }
    let Some(suffix) = patronymic_suffix(case) else {
        return inflected;
    };

    let shouting = inflected.chars().last().is_some_and(char::is_uppercase);
    debug!(word = %inflected, %case, suffix, "repairing patronymic");
    if shouting {
        inflected + &suffix.to_uppercase()
    } else {
        inflected + suffix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidminok_protocol::{Grammemes, Parse, TaggedForm};

    struct OneWord(Parse);

    impl Analyzer for OneWord {
        fn parse(&self, word: &str) -> Vec<Parse> {
            if word == self.0.word {
                vec![self.0.clone()]
            } else {
                Vec::new()
            }
        }
    }

    fn noun(word: &str, lexeme: &[(&str, Grammemes)]) -> OneWord {
        OneWord(Parse {
            word: word.into(),
            normal_form: word.into(),
            tags: Grammemes::NOUN | Grammemes::MASC | Grammemes::SING | Grammemes::NOMN,
            lexeme: lexeme.iter().map(|(w, t)| TaggedForm::new(*w, *t)).collect(),
        })
    }

    #[test]
    fn test_refine_dative_picks_short_form() {
        let analyzer = noun(
            "лікар",
            &[
                ("лікар", Grammemes::NOMN),
                ("лікареві", Grammemes::DATV),
                ("лікарю", Grammemes::DATV),
            ],
        );
        assert_eq!(refine_dative(&analyzer, "лікар", "лікареві".into()), "лікарю");
    }

    #[test]
    fn test_refine_dative_keeps_long_form_without_alternative() {
        let analyzer = noun("дід", &[("дід", Grammemes::NOMN), ("дідові", Grammemes::DATV)]);
        assert_eq!(refine_dative(&analyzer, "дід", "дідові".into()), "дідові");
    }

    #[test]
    fn test_refine_dative_ignores_non_dative_u_forms() {
        let analyzer = noun(
            "дід",
            &[("дід", Grammemes::NOMN), ("дідові", Grammemes::DATV), ("діду", Grammemes::VOCT)],
        );
        assert_eq!(refine_dative(&analyzer, "дід", "дідові".into()), "дідові");
    }

    #[test]
    fn test_refine_dative_skips_short_input() {
        let analyzer = noun("мама", &[]);
        assert_eq!(refine_dative(&analyzer, "мама", "мамі".into()), "мамі");
    }

    #[test]
    fn test_refine_dative_without_parse() {
        let analyzer = noun("мама", &[]);
        assert_eq!(refine_dative(&analyzer, "батько", "батькові".into()), "батькові");
    }

    #[test]
    fn test_patronymic_suffix_table() {
        assert_eq!(repair_patronymic("Іванович".into(), Case::Genitive), "Івановича");
        assert_eq!(repair_patronymic("Іванович".into(), Case::Dative), "Івановичу");
        assert_eq!(repair_patronymic("Іванович".into(), Case::Instrumental), "Івановичем");
        assert_eq!(repair_patronymic("Іванович".into(), Case::Vocative), "Івановичу");
        assert_eq!(repair_patronymic("Іванович".into(), Case::Accusative), "Іванович");
        assert_eq!(repair_patronymic("Іванович".into(), Case::Nominative), "Іванович");
    }

    #[test]
    fn test_patronymic_repair_matches_upper_case() {
        assert_eq!(repair_patronymic("ІВАНОВИЧ".into(), Case::Genitive), "ІВАНОВИЧА");
    }

    #[test]
    fn test_patronymic_repair_leaves_inflected_forms() {
        assert_eq!(repair_patronymic("Івановича".into(), Case::Genitive), "Івановича");
        assert_eq!(repair_patronymic("Іванівна".into(), Case::Genitive), "Іванівна");
    }
}
