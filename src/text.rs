//! String trimming helpers.

/// Length, in UTF-16 code units, of the only suffixes [`remove_suffix`] acts on.
pub const SUFFIX_UNITS: usize = 2;

/// Drops a two-unit `suffix` from the end of `s`.
///
/// Length is counted in UTF-16 code units, the way browser strings count it,
/// so one astral character such as an emoji is a valid suffix on its own.
/// `s` comes back unchanged when it is empty, when `suffix` is not exactly
/// two units long, or when `s` does not end with it.
pub fn remove_suffix<'a>(s: &'a str, suffix: &str) -> &'a str {
    if s.is_empty() || suffix.encode_utf16().count() != SUFFIX_UNITS {
        return s;
    }
    s.strip_suffix(suffix).unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_matching_suffix_once() {
        assert_eq!(remove_suffix("12px", "px"), "12");
        assert_eq!(remove_suffix("pxpx", "px"), "px");
        assert_eq!(remove_suffix("px", "px"), "");
    }

    #[test]
    fn test_leaves_non_matching_input_alone() {
        assert_eq!(remove_suffix("12em", "px"), "12em");
        assert_eq!(remove_suffix("", "px"), "");
        assert_eq!(remove_suffix("p", "px"), "p");
    }

    #[test]
    fn test_only_two_character_suffixes_apply() {
        assert_eq!(remove_suffix("12rem", "rem"), "12rem");
        assert_eq!(remove_suffix("12x", "x"), "12x");
        assert_eq!(remove_suffix("abc", ""), "abc");
    }

    #[test]
    fn test_counts_utf16_units_not_bytes() {
        assert_eq!(remove_suffix("年龄岁数", "岁数"), "年龄");
        // one emoji is a surrogate pair
        assert_eq!(remove_suffix("hi😀", "😀"), "hi");
        assert_eq!(remove_suffix("hi😀😀", "😀😀"), "hi😀😀");
        assert_eq!(remove_suffix("a😀", "a😀"), "a😀");
    }
}
