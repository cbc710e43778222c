use vidminok_protocol::{Analyzer, Gender};

const FEMININE_PATRONYMIC_ENDINGS: [&str; 2] = ["івна", "ївна"];
const MASCULINE_PATRONYMIC_ENDINGS: [&str; 2] = ["ич", "ович"];

/// Guesses the bearer's gender: patronymic suffix first, then the
/// analyzer's reading of the first name, masculine otherwise.
///
/// Unisex or rare first names can be misclassified.
pub fn detect_gender(analyzer: &dyn Analyzer, first_name: &str, patronymic: &str) -> Gender {
    let patronymic = patronymic.to_lowercase();
    if FEMININE_PATRONYMIC_ENDINGS.iter().any(|e| patronymic.ends_with(e)) {
        return Gender::Feminine;
    }
    if MASCULINE_PATRONYMIC_ENDINGS.iter().any(|e| patronymic.ends_with(e)) {
        return Gender::Masculine;
    }

    if first_name.is_empty() {
        return Gender::Masculine;
    }
    match analyzer.parse(first_name).first() {
        Some(parse) if parse.is_feminine() => Gender::Feminine,
        _ => Gender::Masculine,
    }
}
