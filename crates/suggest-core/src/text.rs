// crates/suggest-core/src/text.rs

//! Text folding helpers shared by the request normalizer and the matcher.

/// Transliterates `s` to ASCII, keeping the original letter case.
///
/// Uses `deunicode`, whose tables are compiled in, so the result does not
/// depend on the process locale.
///
/// ```rust
/// use suggest_core::text::transliterate;
///
/// assert_eq!(transliterate("Münich"), "Munich");
/// assert_eq!(transliterate("Québec"), "Quebec");
/// assert_eq!(transliterate("Łódź"), "Lodz");
/// ```
pub fn transliterate(s: &str) -> String {
    deunicode::deunicode(s)
}

/// Literal, ASCII case-insensitive prefix test.
///
/// `prefix` is compared byte for byte; nothing in it has a special meaning,
/// so `"St. "` only matches names that really start with `St. `.
///
/// ```rust
/// use suggest_core::text::starts_with_ignore_ascii_case;
///
/// assert!(starts_with_ignore_ascii_case("Montreal", "mont"));
/// assert!(!starts_with_ignore_ascii_case("Montreal", "M.nt"));
/// assert!(!starts_with_ignore_ascii_case("Mon", "Montreal"));
/// ```
#[inline]
pub fn starts_with_ignore_ascii_case(haystack: &str, prefix: &str) -> bool {
    let (h, p) = (haystack.as_bytes(), prefix.as_bytes());
    h.len() >= p.len() && h[..p.len()].eq_ignore_ascii_case(p)
}

/// Number of characters, used for the length signal.
#[inline]
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}
