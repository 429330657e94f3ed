//! Display formatting shared by cards, headers and listings.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Card icon gradients, picked per article so a card keeps its color.
pub const PASTEL_GRADIENTS: [&str; 8] = [
    "bg-gradient-to-br from-blue-100 to-blue-200",
    "bg-gradient-to-br from-purple-100 to-purple-200",
    "bg-gradient-to-br from-green-100 to-green-200",
    "bg-gradient-to-br from-pink-100 to-pink-200",
    "bg-gradient-to-br from-yellow-100 to-yellow-200",
    "bg-gradient-to-br from-indigo-100 to-indigo-200",
    "bg-gradient-to-br from-teal-100 to-teal-200",
    "bg-gradient-to-br from-orange-100 to-orange-200",
];

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `2024-01-05T10:00:00Z` → `January 5, 2024`. Input that is not a date is
/// returned as-is.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    match parse_date(trimmed) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => trimmed.to_string(),
    }
}

/// Resolve a media URL against `media_base`. Absolute and protocol-relative
/// URLs pass through.
pub fn image_url(path: &str, media_base: &str) -> String {
    let path = path.trim();
    if path.is_empty()
        || path.starts_with("http://")
        || path.starts_with("https://")
        || path.starts_with("//")
        || path.starts_with("data:")
        || media_base.is_empty()
    {
        return path.to_string();
    }
    format!(
        "{}/{}",
        media_base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Upper-cased first character, used when a card has no icon.
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// "1 Guide", "3 Guides".
pub fn guide_count_label(count: u32) -> String {
    if count == 1 {
        "1 Guide".to_string()
    } else {
        format!("{count} Guides")
    }
}

/// Strip above a category's article list, e.g. `3 guides in Attio CRM`.
pub fn guides_header(total: u32, category_name: &str) -> String {
    let noun = if total == 1 { "guide" } else { "guides" };
    format!("{total} {noun} in {category_name}")
}

/// Palette slot for an id, reading the id as base 36 the way a JavaScript
/// `parseInt(id, 36)` would: the longest valid prefix counts, and an id with
/// no valid prefix gets slot 0.
pub fn pastel_index(id: &str, palette_len: usize) -> usize {
    if palette_len == 0 {
        return 0;
    }
    let modulus = palette_len as u64;
    let mut acc = 0u64;
    for c in id.trim().chars() {
        let Some(digit) = c.to_digit(36) else {
            break;
        };
        acc = (acc * 36 + u64::from(digit)) % modulus;
    }
    acc as usize
}

/// Gradient class for an article card icon.
pub fn pastel_gradient(id: &str) -> &'static str {
    PASTEL_GRADIENTS[pastel_index(id, PASTEL_GRADIENTS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_long_month_dates() {
        assert_eq!(format_date("2024-01-05T10:30:00.000Z"), "January 5, 2024");
        assert_eq!(format_date("2023-12-25"), "December 25, 2023");
        assert_eq!(format_date("2024-03-09T08:00:00"), "March 9, 2024");
    }

    #[test]
    fn leaves_unparseable_dates_alone() {
        assert_eq!(format_date("sometime soon"), "sometime soon");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn image_urls_join_relative_paths_only() {
        assert_eq!(
            image_url("/media/a.png", "https://cms.example.com/"),
            "https://cms.example.com/media/a.png"
        );
        assert_eq!(
            image_url("https://cdn.example.com/a.png", "https://cms.example.com"),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(image_url("/media/a.png", ""), "/media/a.png");
    }

    #[test]
    fn initial_is_upper_cased() {
        assert_eq!(initial("attio"), "A");
        assert_eq!(initial("  ölçek"), "Ö");
        assert_eq!(initial(""), "");
    }

    #[test]
    fn guide_labels_pluralize() {
        assert_eq!(guide_count_label(1), "1 Guide");
        assert_eq!(guide_count_label(0), "0 Guides");
        assert_eq!(guides_header(14, "Attio CRM"), "14 guides in Attio CRM");
        assert_eq!(guides_header(1, "HubSpot"), "1 guide in HubSpot");
    }

    #[test]
    fn pastel_index_reads_base36_prefix() {
        // "z" is 35 in base 36.
        assert_eq!(pastel_index("z", 8), 35 % 8);
        // "10" is 36.
        assert_eq!(pastel_index("10", 8), 36 % 8);
        // Parsing stops at the first non-digit.
        assert_eq!(pastel_index("10-x", 8), 36 % 8);
        assert_eq!(pastel_index("-", 8), 0);
        assert_eq!(pastel_gradient("1"), PASTEL_GRADIENTS[1]);
    }
}
