//! Filepath: src/morph/analyzer.rs
//! Morphological analysis seam. The pipeline never analyzes text itself;
//! it calls an [`Analyzer`] chosen by name at stage start, built once per
//! run and shared across rows.

use serde::{Deserialize, Serialize};

use crate::morph::words::WordAnalyzer;

/// Part-of-speech tag attached to a morpheme. The tag vocabulary belongs to
/// the analyzer (Sejong-style NNG/NNP/VA/VV for Korean backends), so this is
/// an open string, not a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PosTag(String);

impl PosTag
{
    pub fn new(tag: impl Into<String>) -> Self
    {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str
    {
        &self.0
    }
}

impl std::fmt::Display for PosTag
{
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result
    {
        f.write_str(&self.0)
    }
}

/// One analyzed token: a canonical stem plus its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme
{
    /// Base form, stripped of inflectional endings
    pub stem: String,

    /// Tag assigned by the analyzer
    pub tag: PosTag,
}

pub trait Analyzer: Send + Sync
{
    /// Break one cleaned text field into tagged morphemes.
    /// Must be deterministic and pure: same text, same output.
    fn analyze(
        &self,
        text: &str,
    ) -> Vec<Morpheme>;

    /// Backend label used in messages.
    fn name(&self) -> &'static str;
}

// Simple analyzer registry
pub fn get_analyzer(
    name: &str,
    word_tag: &str,
) -> anyhow::Result<Box<dyn Analyzer + Send + Sync>>
{
    match name
    {
        "words" => Ok(Box::new(WordAnalyzer::new(word_tag))),
        _ => Err(anyhow::anyhow!(
            "Unsupported analyzer: {} (available: words)",
            name
        )),
    }
}
