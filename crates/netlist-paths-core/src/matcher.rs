//! # Name matcher
//!
//! Three resolution modes selected by `Options::match_mode`: exact
//! byte-equality, a two-wildcard language (`*`/`?`), and regular
//! expression search. Hierarchy-separator normalization lets callers
//! write `a.b.c`, `a/b/c`, or `a_b_c` interchangeably.

use regex::Regex;

use crate::error::{Error, Result};
use crate::options::{MatchMode, Options};

/// Normalize a pattern's hierarchy separators for the given match mode.
/// Wildcard mode folds every separator to `?` (exactly one character);
/// regex mode folds `/` and `_` to `.` (which already matches any
/// character), leaving `.` as written.
#[must_use]
pub fn normalize_separators(pattern: &str, mode: MatchMode) -> String {
    match mode {
        MatchMode::Wildcard => pattern.replace(['/', '.', '_'], "?"),
        MatchMode::Regex => pattern.replace(['/', '_'], "."),
        MatchMode::Exact => pattern.to_string(),
    }
}

/// Exact byte-for-byte equality.
#[must_use]
pub fn matches_exact(name: &str, pattern: &str) -> bool {
    name == pattern
}

/// Two-wildcard matching: `*` matches zero or more characters, `?`
/// matches exactly one. Implemented as an iterative DP table over byte
/// indices rather than the naive recursive definition, so a long name
/// cannot grow the call stack.
#[must_use]
pub fn matches_wildcard(name: &str, pattern: &str) -> bool {
    let t: Vec<u8> = name.bytes().collect();
    let p: Vec<u8> = pattern.bytes().collect();
    let (tn, pn) = (t.len(), p.len());

    // dp[i][j] = true iff t[i..] matches p[j..]
    let mut dp = vec![vec![false; pn + 1]; tn + 1];
    dp[tn][pn] = true;
    for j in (0..pn).rev() {
        if p[j] == b'*' {
            dp[tn][j] = dp[tn][j + 1];
        }
    }
    for i in (0..tn).rev() {
        for j in (0..pn).rev() {
            dp[i][j] = match p[j] {
                b'*' => dp[i][j + 1] || dp[i + 1][j],
                b'?' => dp[i + 1][j + 1],
                c => t[i] == c && dp[i + 1][j + 1],
            };
        }
    }
    dp[0][0]
}

/// Regular-expression search (not a full-string match — callers who want
/// anchoring write `^...$` themselves).
pub fn matches_regex(name: &str, pattern: &str) -> Result<bool> {
    let re = Regex::new(pattern).map_err(|e| Error::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;
    Ok(re.is_match(name))
}

/// Dispatch to the mode selected by `options`, normalizing separators
/// first when requested.
pub fn matches(name: &str, pattern: &str, options: &Options) -> Result<bool> {
    let pattern = if options.normalize_hierarchy_separators {
        normalize_separators(pattern, options.match_mode)
    } else {
        pattern.to_string()
    };
    match options.match_mode {
        MatchMode::Exact => Ok(matches_exact(name, &pattern)),
        MatchMode::Wildcard => Ok(matches_wildcard(name, &pattern)),
        MatchMode::Regex => matches_regex(name, &pattern),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_law_identity() {
        assert!(matches_wildcard("m.top.clk", "m.top.clk"));
    }

    #[test]
    fn wildcard_law_star_matches_everything() {
        assert!(matches_wildcard("anything.at.all", "*"));
        assert!(matches_wildcard("", "*"));
    }

    #[test]
    fn wildcard_law_empty_only_matches_all_stars() {
        assert!(matches_wildcard("", "**"));
        assert!(!matches_wildcard("", "a*"));
    }

    #[test]
    fn wildcard_law_question_mark_is_exactly_one_char() {
        assert!(matches_wildcard("x", "?"));
        assert!(!matches_wildcard("xy", "?"));
        assert!(!matches_wildcard("", "?"));
    }

    #[test]
    fn wildcard_prefix_and_suffix() {
        assert!(matches_wildcard("top.sub.clk", "top.*"));
        assert!(matches_wildcard("top.sub.clk", "*.clk"));
        assert!(!matches_wildcard("top.sub.clk", "*.rst"));
    }

    #[test]
    fn regex_search_not_anchored() {
        assert!(matches_regex("top.sub.clk_en", "clk").expect("valid pattern"));
    }

    #[test]
    fn regex_invalid_pattern_errors() {
        let err = matches_regex("anything", "(unclosed").expect_err("should fail to compile");
        assert!(matches!(err, Error::InvalidPattern { .. }));
    }

    #[test]
    fn separator_normalization_wildcard() {
        let normalized = normalize_separators("top/sub.clk", MatchMode::Wildcard);
        assert_eq!(normalized, "top?sub?clk");
    }

    #[test]
    fn separator_normalization_regex_leaves_dots() {
        let normalized = normalize_separators("top/sub_clk", MatchMode::Regex);
        assert_eq!(normalized, "top.sub.clk");
    }
}
