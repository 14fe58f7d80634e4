//! Regional day adjustments
//!
//! Countries that follow local moon sighting tend to start months a day
//! after the tabular calendar.

/// Day adjustment per ISO 3166-1 alpha-2 country code
pub const REGIONAL_ADJUSTMENTS: &[(&str, i32)] = &[("SA", 0), ("PK", 1), ("IN", 1), ("BD", 1)];

/// Adjustment for a country, 0 when unknown
pub fn adjustment_for_country(country_code: &str) -> i32 {
    REGIONAL_ADJUSTMENTS
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(country_code.trim()))
        .map_or(0, |(_, days)| *days)
}
