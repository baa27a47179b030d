use std::sync::LazyLock;

use regex::Regex;

/// Year reported for a date field that carries no recognizable year.
pub const SENTINEL_YEAR: i32 = 2025;

static YEAR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[12][0-9]{3}").expect("year pattern compiles"));

/// First 4-digit token starting with 1 or 2 anywhere in `text`, else
/// [`SENTINEL_YEAR`].
pub fn extract_year(text: &str) -> i32 {
    YEAR_TOKEN
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(SENTINEL_YEAR)
}
