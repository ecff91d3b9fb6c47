//! Filepath: src/morph/words.rs
//! Unicode word segmentation backend.

use unicode_segmentation::UnicodeSegmentation;

use crate::morph::analyzer::{Analyzer, Morpheme, PosTag};

/// Splits text on Unicode word boundaries and labels every word with a single
/// configured tag. No stemming and no tag disambiguation happens here; this
/// backend exists so the tokenize stage runs end to end, while real
/// morphological analyzers arrive as external [`Analyzer`] implementations.
pub struct WordAnalyzer {
    tag: PosTag,
}

impl WordAnalyzer {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: PosTag::new(tag) }
    }
}

impl Analyzer for WordAnalyzer {
    fn analyze(&self, text: &str) -> Vec<Morpheme> {
        text.unicode_words()
            .map(|word| Morpheme { stem: word.to_string(), tag: self.tag.clone() })
            .collect()
    }

    fn name(&self) -> &'static str {
        "words"
    }
}
