//! Text formatting for rendered pages: escaping, dates, money, counts.

use chrono::NaiveDate;

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `YYYY-MM-DD` → `Oct 15, 1999`. Missing or unparseable dates render `N/A`.
pub fn format_date(date: Option<&str>) -> String {
    date.and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map(format_naive_date)
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Groups digits in threes: `1234567` → `1,234,567`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// US dollars with cents. Zero or unknown amounts render `-`.
pub fn format_currency(amount: Option<u64>) -> String {
    match amount {
        Some(a) if a > 0 => format!("${}.00", format_count(a)),
        _ => "-".to_string(),
    }
}

/// `139` → `2h 19m`.
pub fn format_runtime(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// English display name for an ISO 639-1 code. Unknown codes are shown
/// upper-cased.
pub fn language_name(code: Option<&str>) -> String {
    let Some(code) = code.filter(|c| !c.is_empty()) else {
        return "-".to_string();
    };
    let name = match code {
        "en" => "English",
        "es" => "Spanish",
        "fr" => "French",
        "de" => "German",
        "it" => "Italian",
        "ja" => "Japanese",
        "ko" => "Korean",
        "zh" => "Chinese",
        "cn" => "Cantonese",
        "hi" => "Hindi",
        "pt" => "Portuguese",
        "ru" => "Russian",
        "sv" => "Swedish",
        "da" => "Danish",
        "no" => "Norwegian",
        "nl" => "Dutch",
        "pl" => "Polish",
        "tr" => "Turkish",
        "th" => "Thai",
        "ar" => "Arabic",
        other => return other.to_uppercase(),
    };
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("1999-10-15")), "Oct 15, 1999");
        assert_eq!(format_date(Some("2024-01-05")), "Jan 5, 2024");
        assert_eq!(format_date(Some("")), "N/A");
        assert_eq!(format_date(None), "N/A");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Some(63_000_000)), "$63,000,000.00");
        assert_eq!(format_currency(Some(0)), "-");
        assert_eq!(format_currency(None), "-");
    }

    #[test]
    fn test_runtime_and_language() {
        assert_eq!(format_runtime(139), "2h 19m");
        assert_eq!(format_runtime(45), "0h 45m");
        assert_eq!(language_name(Some("en")), "English");
        assert_eq!(language_name(Some("xx")), "XX");
        assert_eq!(language_name(None), "-");
    }
}
