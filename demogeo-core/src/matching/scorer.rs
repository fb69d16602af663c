use serde::{Deserialize, Serialize};

/// string similarity applied after token sorting, scaled to [0, 100].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scorer {
    /// indel ratio, `1 - (insertions + deletions) / (len_a + len_b)`
    #[default]
    TokenSortIndel,
    TokenSortJaroWinkler,
}

impl Scorer {
    pub fn score(&self, a: &str, b: &str) -> f64 {
        let a = super::sort_tokens(a);
        let b = super::sort_tokens(b);
        let similarity = match self {
            Scorer::TokenSortIndel => indel_similarity(&a, &b),
            Scorer::TokenSortJaroWinkler => strsim::jaro_winkler(&a, &b),
        };
        similarity * 100.0
    }
}

impl std::fmt::Display for Scorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scorer::TokenSortIndel => write!(f, "token_sort_indel"),
            Scorer::TokenSortJaroWinkler => write!(f, "token_sort_jaro_winkler"),
        }
    }
}

/// normalized indel similarity over chars. two empty strings are identical.
pub fn indel_similarity(a: &str, b: &str) -> f64 {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let indel = total - 2 * lcs_len(&a, &b);
    1.0 - indel as f64 / total as f64
}

/// longest common subsequence length, single-row dynamic program.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for ca in a {
        let mut diagonal = 0;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcs_len() {
        let chars = |s: &str| s.chars().collect::<Vec<_>>();
        assert_eq!(lcs_len(&chars("Khirbet al-Twayel"), &chars("Khirbet Twayel")), 14);
        assert_eq!(lcs_len(&chars("abc"), &chars("")), 0);
        assert_eq!(lcs_len(&chars("Bidu"), &chars("Biddu")), 4);
    }

    #[test]
    fn test_indel_counts_length_changes() {
        // three deletions over 31 chars
        let score = Scorer::TokenSortIndel.score("Khirbet al-Twayel", "Khirbet Twayel");
        assert!((score - 100.0 * 28.0 / 31.0).abs() < 1e-9);
        assert!(score > 90.0);
    }

    #[test]
    fn test_substitution_is_two_operations() {
        let score = Scorer::TokenSortIndel.score("al-Walajah", "al-Walajeh");
        assert!((score - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(indel_similarity("", ""), 1.0);
        assert_eq!(indel_similarity("Bidu", ""), 0.0);
    }
}
