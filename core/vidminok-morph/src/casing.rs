//! First-letter case handling.

pub fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Returns `word` with its first letter forced to upper or lower case.
/// The rest of the word is left as is.
pub fn with_initial_case(word: &str, uppercase: bool) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) if c.is_uppercase() == uppercase => word.to_string(),
        Some(c) => {
            let head: String = if uppercase {
                c.to_uppercase().collect()
            } else {
                c.to_lowercase().collect()
            };
            head + chars.as_str()
        }
    }
}

/// Upper-cases the first letter and lower-cases the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}
