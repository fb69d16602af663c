mod fuzzy_ops;
mod scorer;

pub use fuzzy_ops::{find_best_match, sort_tokens, token_sort_ratio, BestMatch, DEFAULT_THRESHOLD};
pub use scorer::{indel_similarity, Scorer};
