use std::collections::HashMap;

use rkyv::AlignedVec;
use vidminok_protocol::{Analyzer, Case, LexemeId, Lexicon, Parse, TaggedForm};

use crate::error::LexiconError;

/// Dictionary-backed [`Analyzer`] over an in-memory [`Lexicon`].
///
/// Lookups are case-insensitive. Parses are ranked by entry order, then by
/// form order inside the entry.
pub struct LexiconAnalyzer {
    lexicon: Lexicon,
    // lower-cased surface form -> (entry, form) positions
    index: HashMap<String, Vec<(usize, usize)>>,
}

impl LexiconAnalyzer {
    pub fn new(lexicon: Lexicon) -> Self {
        let mut index: HashMap<String, Vec<(usize, usize)>> = HashMap::new();
        for (e, entry) in lexicon.entries.iter().enumerate() {
            for (f, form) in entry.forms.iter().enumerate() {
                index.entry(form.word.to_lowercase()).or_default().push((e, f));
            }
        }
        Self { lexicon, index }
    }

    /// Loads a lexicon compiled by `lexicon-compiler`, validating the archive first.
    pub fn from_archive(bytes: &[u8]) -> Result<Self, LexiconError> {
        // rkyv needs an aligned buffer; file contents come in unaligned
        let mut aligned = AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let lexicon = rkyv::from_bytes::<Lexicon>(&aligned)
            .map_err(|err| LexiconError::Archive(err.to_string()))?;
        Ok(Self::new(lexicon))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn build_parse(&self, entry_idx: usize, form_idx: usize) -> Parse {
        let entry = &self.lexicon.entries[entry_idx];
        let form = &entry.forms[form_idx];
        Parse {
            word: form.word.clone(),
            normal_form: entry.lemma.clone(),
            tags: entry.tags | form.tags,
            lexeme: entry
                .forms
                .iter()
                .map(|f| TaggedForm::new(f.word.clone(), entry.tags | f.tags))
                .collect(),
        }
    }
}

impl Analyzer for LexiconAnalyzer {
    fn parse(&self, word: &str) -> Vec<Parse> {
        match self.index.get(&word.to_lowercase()) {
            Some(hits) => hits.iter().map(|&(e, f)| self.build_parse(e, f)).collect(),
            None => Vec::new(),
        }
    }
}

/// Structural checks run before a lexicon is compiled.
pub fn check(lexicon: &Lexicon) -> Result<(), LexiconError> {
    let mut seen: HashMap<LexemeId, &str> = HashMap::new();
    for entry in &lexicon.entries {
        if let Some(first) = seen.insert(entry.id, &entry.lemma) {
            return Err(LexiconError::DuplicateId {
                id: entry.id,
                first: first.to_string(),
                second: entry.lemma.clone(),
            });
        }
        if entry.forms.is_empty() {
            return Err(LexiconError::EmptyLexeme {
                id: entry.id,
                lemma: entry.lemma.clone(),
            });
        }
        for form in &entry.forms {
            if Case::from_grammemes(form.tags).is_none() {
                return Err(LexiconError::AmbiguousCase {
                    id: entry.id,
                    lemma: entry.lemma.clone(),
                    word: form.word.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_lexicon;
    use vidminok_protocol::{FormEntry, Grammemes, LexemeEntry};

    #[test]
    fn test_parse_is_case_insensitive() {
        let analyzer = LexiconAnalyzer::new(sample_lexicon());
        let parses = analyzer.parse("ШЕВЧЕНКО");
        assert!(!parses.is_empty());
        assert_eq!(parses[0].normal_form, "шевченко");
        assert!(parses[0].tags.contains(Grammemes::SURN | Grammemes::NOMN));
    }

    #[test]
    fn test_ambiguous_form_yields_ranked_parses() {
        let analyzer = LexiconAnalyzer::new(sample_lexicon());
        let parses = analyzer.parse("директорові");
        let cases: Vec<_> = parses.iter().filter_map(|p| Case::from_grammemes(p.tags)).collect();
        assert_eq!(cases, vec![Case::Dative, Case::Locative]);
    }

    #[test]
    fn test_unknown_word_has_no_parse() {
        let analyzer = LexiconAnalyzer::new(sample_lexicon());
        assert!(analyzer.parse("кадрів").is_empty());
    }

    #[test]
    fn test_archive_roundtrip() {
        let bytes = rkyv::to_bytes::<_, 1024>(&sample_lexicon()).expect("serialize lexicon");
        let analyzer = LexiconAnalyzer::from_archive(&bytes).expect("valid archive");
        assert_eq!(analyzer.lexicon().entries.len(), sample_lexicon().entries.len());
        assert_eq!(analyzer.parse("тараса")[0].normal_form, "тарас");
    }

    #[test]
    fn test_garbage_archive_rejected() {
        let err = LexiconAnalyzer::from_archive(&[0xff; 3]).err().expect("must fail");
        assert!(matches!(err, LexiconError::Archive(_)));
    }

    #[test]
    fn test_check_rejects_caseless_forms() {
        let lexicon = Lexicon {
            version: 1,
            entries: vec![LexemeEntry {
                id: LexemeId::new(1),
                lemma: "кіт".into(),
                tags: Grammemes::NOUN,
                forms: vec![FormEntry { word: "кіт".into(), tags: Grammemes::SING }],
            }],
        };
        assert!(matches!(check(&lexicon), Err(LexiconError::AmbiguousCase { .. })));
        assert!(check(&sample_lexicon()).is_ok());
    }

    #[test]
    fn test_check_reports_lexeme_ids() {
        let entry = |id, lemma: &str, forms| LexemeEntry {
            id: LexemeId::new(id),
            lemma: lemma.into(),
            tags: Grammemes::NOUN,
            forms,
        };
        let form = || vec![FormEntry { word: "кіт".into(), tags: Grammemes::SING | Grammemes::NOMN }];

        let duplicated = Lexicon { version: 1, entries: vec![entry(4, "кіт", form()), entry(4, "кит", form())] };
        let err = check(&duplicated).unwrap_err();
        assert!(matches!(&err, LexiconError::DuplicateId { id, .. } if *id == LexemeId::new(4)));
        assert_eq!(err.to_string(), "lexeme id #4 is used by both 'кіт' and 'кит'");

        let empty = Lexicon { version: 1, entries: vec![entry(9, "кіт", Vec::new())] };
        assert_eq!(check(&empty).unwrap_err().to_string(), "lexeme #9 'кіт' has no forms");
    }
}
