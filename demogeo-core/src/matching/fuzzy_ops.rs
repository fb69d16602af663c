use super::Scorer;
use itertools::Itertools;

/// minimum score for a gazetteer name to be accepted as a match.
pub const DEFAULT_THRESHOLD: f64 = 90.0;

/// a gazetteer candidate accepted by [`find_best_match`].
#[derive(Debug, Clone, PartialEq)]
pub struct BestMatch {
    pub index: usize,
    pub name: String,
    pub score: f64,
}

/// splits on whitespace, sorts the tokens and joins them with single spaces,
/// so that word order does not affect similarity.
pub fn sort_tokens(s: &str) -> String {
    s.split_whitespace().sorted().join(" ")
}

pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    Scorer::TokenSortIndel.score(a, b)
}

/// finds the highest scoring choice for the query. the earliest choice wins ties.
/// returns `None` when nothing reaches `threshold`.
///
/// # Arguments
/// * `query` - name to look up
/// * `choices` - candidate names, typically the gazetteer name list
/// * `scorer` - similarity function
/// * `threshold` - minimum accepted score in [0, 100]
pub fn find_best_match<S: AsRef<str>>(
    query: &str,
    choices: &[S],
    scorer: Scorer,
    threshold: f64,
) -> Option<BestMatch> {
    if query.trim().is_empty() {
        return None;
    }
    let mut best: Option<(usize, f64)> = None;
    for (index, choice) in choices.iter().enumerate() {
        let score = scorer.score(query, choice.as_ref());
        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((index, score)),
        }
    }
    best.filter(|(_, score)| *score >= threshold)
        .map(|(index, score)| BestMatch {
            index,
            name: choices[index].as_ref().to_string(),
            score,
        })
}
