//! Header and span passes over the raw report text
//!
//! Each pass reads the whole report and returns `None` when its field cannot
//! be recovered; substituting defaults is left to the caller.

use once_cell::sync::Lazy;
use regex::Regex;

/// Key of the product name line
pub const PRODUCT_KEY: &str = "PRODUCT";

/// Key of the health score line
pub const HEALTH_SCORE_KEY: &str = "HEALTH_SCORE";

/// Key opening the summary span
pub const SUMMARY_KEY: &str = "SUMMARY";

/// Key opening the regulatory notice span
pub const FSSAI_NOTICE_KEY: &str = "FSSAI_NOTICE";

/// Markers that close a span field
pub const SECTION_MARKERS: &[&str] = &[HEALTH_SCORE_KEY, FSSAI_NOTICE_KEY, "LIST_START"];

static PRODUCT_LINE: Lazy<Regex> = Lazy::new(|| scalar_pattern(PRODUCT_KEY));
static HEALTH_SCORE_LINE: Lazy<Regex> = Lazy::new(|| scalar_pattern(HEALTH_SCORE_KEY));
static SUMMARY_SPAN: Lazy<Regex> = Lazy::new(|| span_pattern(SUMMARY_KEY));
static FSSAI_NOTICE_SPAN: Lazy<Regex> = Lazy::new(|| span_pattern(FSSAI_NOTICE_KEY));
static NONE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bnone\b").expect("valid none pattern"));

/// `KEY:` at the start of a line, capturing the rest of that line
fn scalar_pattern(key: &str) -> Regex {
    Regex::new(&format!(r"(?im)^[ \t]*{}[ \t]*:(.*)$", regex::escape(key)))
        .expect("valid scalar field pattern")
}

/// `KEY:` at the start of a line, capturing up to the next section marker or
/// end of text
fn span_pattern(key: &str) -> Regex {
    let terminators = SECTION_MARKERS
        .iter()
        .map(|m| regex::escape(m))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"(?ims)^[ \t]*{}[ \t]*:(.*?)(?:{}|\z)",
        regex::escape(key),
        terminators
    ))
    .expect("valid span field pattern")
}

fn capture_trimmed(pattern: &Regex, text: &str) -> Option<String> {
    let value = pattern.captures(text)?.get(1)?.as_str().trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Product name from the first `PRODUCT:` line
pub fn extract_product(text: &str) -> Option<String> {
    capture_trimmed(&PRODUCT_LINE, text)
}

/// Health score from the first `HEALTH_SCORE:` line
///
/// Reads the leading run of digits, so "72" and "72/100" both give 72.
/// Non-numeric values and values above 100 give `None`.
pub fn extract_health_score(text: &str) -> Option<u8> {
    let raw = capture_trimmed(&HEALTH_SCORE_LINE, text)?;
    let digits: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
    let score: u32 = digits.parse().ok()?;
    u8::try_from(score).ok().filter(|s| *s <= 100)
}

/// Summary span, possibly spanning several lines
pub fn extract_summary(text: &str) -> Option<String> {
    capture_trimmed(&SUMMARY_SPAN, text)
}

/// Regulatory notice span
///
/// A notice containing the word "none" in any case ("None",
/// "none detected") counts as no notice.
pub fn extract_fssai_notice(text: &str) -> Option<String> {
    capture_trimmed(&FSSAI_NOTICE_SPAN, text).filter(|notice| !NONE_WORD.is_match(notice))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_first_line_wins() {
        let text = "PRODUCT: Parle-G\nproduct: Something Else\n";
        assert_eq!(extract_product(text), Some("Parle-G".to_string()));
    }

    #[test]
    fn test_product_case_insensitive_and_indented() {
        assert_eq!(extract_product("  Product:   Bhujia  \r\n"), Some("Bhujia".to_string()));
    }

    #[test]
    fn test_product_must_start_line() {
        assert_eq!(extract_product("The PRODUCT: inline mention"), None);
    }

    #[test]
    fn test_product_empty_value_is_missing() {
        assert_eq!(extract_product("PRODUCT:   \nSUMMARY: x"), None);
    }

    #[test]
    fn test_health_score_values() {
        assert_eq!(extract_health_score("HEALTH_SCORE: 35"), Some(35));
        assert_eq!(extract_health_score("health_score: 72/100"), Some(72));
        assert_eq!(extract_health_score("HEALTH_SCORE: 100"), Some(100));
        assert_eq!(extract_health_score("HEALTH_SCORE: 0"), Some(0));
    }

    #[test]
    fn test_health_score_unreadable() {
        assert_eq!(extract_health_score("HEALTH_SCORE: abc"), None);
        assert_eq!(extract_health_score("HEALTH_SCORE: 150"), None);
        assert_eq!(extract_health_score("HEALTH_SCORE: -5"), None);
        assert_eq!(extract_health_score("HEALTH_SCORE: 99999999999999"), None);
        assert_eq!(extract_health_score("no score here"), None);
    }

    #[test]
    fn test_summary_spans_lines_until_marker() {
        let text = "SUMMARY: High in sugar.\nLow in fibre.\nHEALTH_SCORE: 20";
        assert_eq!(
            extract_summary(text),
            Some("High in sugar.\nLow in fibre.".to_string())
        );
    }

    #[test]
    fn test_summary_runs_to_end_of_text() {
        assert_eq!(extract_summary("summary: Just this."), Some("Just this.".to_string()));
    }

    #[test]
    fn test_summary_stops_at_list_start() {
        let text = "SUMMARY: Fine snack\nLIST_START\nA | 1g | safe\nLIST_END";
        assert_eq!(extract_summary(text), Some("Fine snack".to_string()));
    }

    #[test]
    fn test_span_key_must_start_line() {
        let text = "PRODUCT: Daily Summary: Bar\nSUMMARY: real summary\nHEALTH_SCORE: 40";
        assert_eq!(extract_summary(text), Some("real summary".to_string()));
        assert_eq!(extract_summary("PRODUCT: Daily Summary: Bar"), None);

        let text = "SUMMARY: Check the fssai_notice: field below\nFSSAI_NOTICE: None";
        assert_eq!(extract_fssai_notice(text), None);
    }

    #[test]
    fn test_notice_none_variants() {
        assert_eq!(extract_fssai_notice("FSSAI_NOTICE: None"), None);
        assert_eq!(extract_fssai_notice("FSSAI_NOTICE: none detected"), None);
        assert_eq!(extract_fssai_notice("FSSAI_NOTICE: NONE.\nLIST_START"), None);
        assert_eq!(extract_fssai_notice("SUMMARY: ok"), None);
    }

    #[test]
    fn test_notice_kept() {
        let text = "FSSAI_NOTICE: Contains banned dye X\nLIST_START\nLIST_END";
        assert_eq!(
            extract_fssai_notice(text),
            Some("Contains banned dye X".to_string())
        );
    }

    #[test]
    fn test_notice_none_is_a_word_match() {
        let text = "FSSAI_NOTICE: Nonessential additive E102 exceeds limits";
        assert!(extract_fssai_notice(text).is_some());
    }
}
