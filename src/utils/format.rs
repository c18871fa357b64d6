use chrono::{DateTime, NaiveDate};

/// Formats a game date for display, e.g. `Thu, Nov 20`.
///
/// A `YYYY-MM-DD` input is built as a plain calendar date, so the rendered
/// day never shifts with the viewer's timezone. Anything else goes through
/// generic parsing; input that cannot be parsed at all is returned unchanged
/// rather than rendering an invalid-date artifact.
pub fn format_game_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    match parse_ymd(raw).or_else(|| parse_generic(raw)) {
        Some(date) => date.format("%a, %b %-d").to_string(),
        None => raw.to_string(),
    }
}

/// Parses exactly three dash-separated numeric components as (year, month, day).
fn parse_ymd(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.split('-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_generic(raw: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| raw.parse::<NaiveDate>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(format_game_date(""), "");
    }

    #[test]
    fn test_iso_date() {
        // Must render the 20th, not shift to the 19th.
        assert_eq!(format_game_date("2025-11-20"), "Thu, Nov 20");
    }

    #[test]
    fn test_single_digit_day_unpadded() {
        assert_eq!(format_game_date("2025-12-3"), "Wed, Dec 3");
    }

    #[test]
    fn test_rfc3339_fallback() {
        assert_eq!(format_game_date("2025-11-20T19:30:00Z"), "Thu, Nov 20");
    }

    #[test]
    fn test_unparseable_returned_unchanged() {
        assert_eq!(format_game_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_out_of_range_components_returned_unchanged() {
        assert_eq!(format_game_date("2025-13-40"), "2025-13-40");
    }
}
