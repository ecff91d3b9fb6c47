//! Filepath: src/core/filter.rs
//! POS and length filtering of analyzed morphemes.

use std::collections::BTreeSet;

use crate::infra::config::TokenizeConfig;
use crate::morph::analyzer::{Morpheme, PosTag};

/// Which morphemes survive tokenization. A morpheme is kept when its tag is
/// in the allowed set and it is either longer than `min_stem_chars` or
/// carries a noun tag (single-character nouns like 물 or 빵 are meaningful
/// keywords, single-character verb stems are not).
#[derive(Debug, Clone)]
pub struct FilterPolicy {
    allowed_pos: BTreeSet<PosTag>,
    noun_tags: BTreeSet<PosTag>,
    min_stem_chars: usize,
}

impl FilterPolicy {
    pub fn from_config(cfg: &TokenizeConfig) -> Self {
        Self {
            allowed_pos: cfg.allowed_pos.iter().map(|tag| PosTag::new(tag.as_str())).collect(),
            noun_tags: cfg.noun_tags.iter().map(|tag| PosTag::new(tag.as_str())).collect(),
            min_stem_chars: cfg.min_stem_chars,
        }
    }

    pub fn retains(&self, morpheme: &Morpheme) -> bool {
        self.allowed_pos.contains(&morpheme.tag)
            && (morpheme.stem.chars().count() > self.min_stem_chars
                || self.noun_tags.contains(&morpheme.tag))
    }
}

/// Project an analysis down to the stems the policy keeps, in input order,
/// duplicates intact.
pub fn filter_stems(morphemes: &[Morpheme], policy: &FilterPolicy) -> Vec<String> {
    morphemes
        .iter()
        .filter(|m| policy.retains(m))
        .map(|m| m.stem.clone())
        .collect()
}
