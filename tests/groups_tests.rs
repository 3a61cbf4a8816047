use linegrep::match_line;

fn test_pattern(pattern: &str, text: &str, expected: bool) {
    let result = match_line(text.as_bytes(), pattern)
        .unwrap_or_else(|err| panic!("Failed to match pattern {}: {}", pattern, err));
    assert_eq!(result, expected,
        "Pattern '{}' against text '{}' - expected: {}, got: {}",
        pattern, text, expected, result);
}

#[cfg(test)]
mod alternation_tests {
    use super::*;

    #[test]
    fn test_alternation_first() {
        test_pattern("(cat|dog)", "cat", true);
    }

    #[test]
    fn test_alternation_second() {
        test_pattern("(cat|dog)", "dog", true);
    }

    #[test]
    fn test_alternation_fail() {
        test_pattern("(cat|dog)", "bird", false);
    }

    #[test]
    fn test_three_alternatives() {
        test_pattern("(red|green|blue)", "deep blue sea", true);
    }

    #[test]
    fn test_empty_group() {
        test_pattern("()", "hello", true);
    }
}

#[cfg(test)]
mod group_sequence_tests {
    use super::*;

    #[test]
    fn test_group_then_literal() {
        test_pattern("a (cat|dog)s", "a dogs", true);
    }

    #[test]
    fn test_group_then_literal_fail() {
        test_pattern("a (cat|dog)s", "a dog", false);
    }

    #[test]
    fn test_group_with_escapes() {
        test_pattern("(\\d|x) apples", "I have 3 apples", true);
    }

    #[test]
    fn test_anchored_group() {
        test_pattern("^(cat|dog)$", "dog", true);
        test_pattern("^(cat|dog)$", "dogs", false);
    }

    // The first alternative that matches is kept even if the rest fails.
    #[test]
    fn test_first_alternative_is_committed() {
        test_pattern("(a|ab)c", "abc", false);
        test_pattern("(ab|a)c", "abc", true);
    }

    // Alternatives are split on every bar, so nesting is not supported.
    #[test]
    fn test_nested_group_split() {
        test_pattern("(x|(y|z))", "z)", true);
        test_pattern("(x|(y|z))", "y", false);
    }
}
