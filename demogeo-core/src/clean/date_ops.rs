use chrono::NaiveDate;

pub const DEMOLITION_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_demolition_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), DEMOLITION_DATE_FORMAT)
        .map_err(|e| format!("invalid demolition date '{s}', expected YYYY-MM-DD: {e}"))
}
