/// source column names that are renamed after lowercasing.
pub const COLUMN_RENAMES: [(&str, &str); 1] = [("type_of_sturcture", "type_of_structure")];

/// lowercases a column name, replaces spaces with underscores and applies
/// [`COLUMN_RENAMES`]. applying it twice yields the same name.
pub fn normalize_column_name(name: &str) -> String {
    let normalized = name.trim().to_lowercase().replace(' ', "_");
    COLUMN_RENAMES
        .iter()
        .find(|(from, _)| *from == normalized)
        .map(|(_, to)| to.to_string())
        .unwrap_or(normalized)
}

pub fn normalize_headers<'a, I>(headers: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    headers.into_iter().map(normalize_column_name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(normalize_column_name("Date of Demolition"), "date_of_demolition");
        assert_eq!(normalize_column_name("Type of sturcture"), "type_of_structure");
        assert_eq!(normalize_column_name("PCBS_NAME"), "pcbs_name");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = [
            "Locality",
            "District",
            "Area",
            "Type of sturcture",
            "Housing Units",
            "People left homeless",
            "minors_left_homeless",
        ];
        let once = normalize_headers(raw);
        let twice = normalize_headers(once.iter().map(|s| s.as_str()));
        assert_eq!(once, twice);
    }
}
