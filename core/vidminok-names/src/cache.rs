use std::collections::HashMap;

use vidminok_protocol::{Case, Gender};

/// Position of a word inside a full name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameRole {
    Surname,
    FirstName,
    Patronymic,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    word: String,
    case: Case,
    gender: Gender,
    role: NameRole,
}

/// Memoized name-part inflections. Entries live as long as the cache and
/// are never invalidated, which relies on the analyzer being pure.
#[derive(Debug, Default)]
pub struct InflectionCache {
    entries: HashMap<CacheKey, String>,
}

impl InflectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, word: &str, case: Case, gender: Gender, role: NameRole) -> Option<&str> {
        self.entries
            .get(&Self::key(word, case, gender, role))
            .map(String::as_str)
    }

    pub fn insert(&mut self, word: &str, case: Case, gender: Gender, role: NameRole, inflected: String) {
        self.entries.insert(Self::key(word, case, gender, role), inflected);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn key(word: &str, case: Case, gender: Gender, role: NameRole) -> CacheKey {
        CacheKey {
            word: word.to_lowercase(),
            case,
            gender,
            role,
        }
    }
}
