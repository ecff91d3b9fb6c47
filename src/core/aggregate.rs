//! Filepath: src/core/aggregate.rs
//! Per-subject keyword counting and ranking.

use std::collections::HashSet;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::infra::config::RankConfig;

/// Which keywords make the final table and how many of them.
#[derive(Debug, Clone)]
pub struct RankPolicy {
    stopwords: HashSet<String>,
    min_keyword_chars: usize,
    top_n: usize,
}

impl RankPolicy {
    pub fn from_config(cfg: &RankConfig) -> Self {
        Self {
            stopwords: cfg.stopwords.iter().cloned().collect(),
            min_keyword_chars: cfg.min_keyword_chars,
            top_n: cfg.top_n,
        }
    }
}

/// One output row: a subject's keyword at a dense 1-based rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRank {
    pub name: String,
    pub rank: usize,
    pub keyword: String,
    pub frequency: u64,
}

/// Count every stem per subject, then rank each subject's vocabulary by
/// frequency. Subjects appear in the output in the order they first appear
/// in the input, and so do equal-count keywords within a subject. Rows with
/// an empty subject have nothing to group under and are skipped.
pub fn rank_keywords<I>(rows: I, policy: &RankPolicy) -> Vec<KeywordRank>
where
    I: IntoIterator<Item = (String, Vec<String>)>,
{
    let mut counts: IndexMap<String, IndexMap<String, u64>> = IndexMap::new();

    for (subject, stems) in rows {
        if subject.is_empty() {
            continue;
        }
        let vocabulary = counts.entry(subject).or_default();
        for stem in stems {
            *vocabulary.entry(stem).or_insert(0) += 1;
        }
    }

    let mut ranks = Vec::new();
    for (subject, vocabulary) in counts {
        let kept = vocabulary
            .into_iter()
            .filter(|(keyword, _)| {
                !policy.stopwords.contains(keyword)
                    && keyword.chars().count() > policy.min_keyword_chars
            })
            // Stable sort: equal counts keep first-occurrence order
            .sorted_by(|a, b| b.1.cmp(&a.1))
            .take(policy.top_n);

        for (i, (keyword, frequency)) in kept.enumerate() {
            ranks.push(KeywordRank {
                name: subject.clone(),
                rank: i + 1,
                keyword,
                frequency,
            });
        }
    }

    ranks
}
