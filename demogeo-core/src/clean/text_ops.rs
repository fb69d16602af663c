use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static whitespace pattern"));

// "Kh." may be glued to the next word ("Kh.Ibziq"), so the trailing space is optional
static KHIRBET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bKh\.\s*").expect("static khirbet pattern"));

static ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\ba-").expect("static article pattern"));

/// cleans an area name: hyphens become spaces, whitespace runs collapse,
/// the result is trimmed and title-cased.
///
/// # Example
/// "South Hebron  - Hills" becomes "South Hebron Hills"
pub fn clean_area(area: &str) -> String {
    let spaced = area.replace('-', " ");
    let collapsed = WHITESPACE.replace_all(&spaced, " ");
    title_case(collapsed.trim())
}

/// expands the transliteration shorthands used in the demolition records so
/// that names line up with gazetteer spellings: "Kh." becomes "Khirbet" and
/// the article "a-" becomes "al-".
pub fn clean_locality(locality: &str) -> String {
    let expanded = KHIRBET.replace_all(locality.trim(), "Khirbet ");
    ARTICLE.replace_all(&expanded, "al-").into_owned()
}

/// uppercases every letter that follows a non-letter and lowercases the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
