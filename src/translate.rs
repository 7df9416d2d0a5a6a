//! Long option name translation for the self-contained backend.

/// Collapse a hyphenated long name into a PascalCase token.
///
/// Every hyphen-delimited word has its first character upper-cased and the
/// hyphens are dropped, so `"ignore-backups"` becomes `"IgnoreBackups"`.
/// Leading and repeated hyphens never produce empty words.
pub fn translate_long_name(long_name: &str) -> String {
    let mut translated = String::with_capacity(long_name.len());
    let mut at_word_start = true;

    for c in long_name.chars() {
        if c == '-' {
            at_word_start = true;
            continue;
        }
        if at_word_start {
            translated.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            translated.push(c);
        }
    }

    translated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_simple_words() {
        assert_eq!(translate_long_name("foo-bar"), "FooBar");
        assert_eq!(translate_long_name("ignore-backups"), "IgnoreBackups");
    }

    #[test]
    fn test_translate_collapses_hyphens() {
        assert_eq!(translate_long_name("foo--bar"), "FooBar");
        assert_eq!(translate_long_name("foo-bar-"), "FooBar");
        assert_eq!(translate_long_name("-foo-bar"), "FooBar");
    }

    #[test]
    fn test_translate_non_letters() {
        assert_eq!(translate_long_name("1-2"), "12");
        assert_eq!(translate_long_name("?"), "?");
    }

    #[test]
    fn test_translate_only_hyphens() {
        assert_eq!(translate_long_name("-"), "");
        assert_eq!(translate_long_name("---"), "");
        assert_eq!(translate_long_name(""), "");
    }

    #[test]
    fn test_translate_single_word() {
        assert_eq!(translate_long_name("all"), "All");
        assert_eq!(translate_long_name("directory"), "Directory");
    }

    #[test]
    fn test_translate_keeps_inner_case() {
        assert_eq!(translate_long_name("show-ALL"), "ShowALL");
        assert_eq!(translate_long_name("x-y-z"), "XYZ");
    }

    #[test]
    fn test_translate_never_contains_hyphens() {
        for name in ["a-b-c", "--a", "a--", "-a-", "no-such-thing-here"] {
            let translated = translate_long_name(name);
            assert!(!translated.contains('-'), "{name} -> {translated}");
            assert!(translated.chars().next().map_or(true, char::is_uppercase));
        }
    }
}
