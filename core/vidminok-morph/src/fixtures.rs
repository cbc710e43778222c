//! Test doubles shared by the engine crates.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use vidminok_protocol::{Analyzer, Lexicon, Parse};

use crate::LexiconAnalyzer;

const SAMPLE_LEXICON: &str = include_str!("../../../data/lexicon.uk.json");

pub fn sample_lexicon() -> Lexicon {
    serde_json::from_str(SAMPLE_LEXICON).expect("bundled lexicon must parse")
}

pub fn sample_analyzer() -> Arc<dyn Analyzer> {
    Arc::new(LexiconAnalyzer::new(sample_lexicon()))
}

/// Wraps an analyzer and counts `parse` calls.
pub struct CountingAnalyzer {
    inner: Arc<dyn Analyzer>,
    calls: AtomicUsize,
}

impl CountingAnalyzer {
    pub fn new(inner: Arc<dyn Analyzer>) -> Self {
        Self { inner, calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Analyzer for CountingAnalyzer {
    fn parse(&self, word: &str) -> Vec<Parse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.parse(word)
    }
}
