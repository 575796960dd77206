//! Pattern rules for the scanner
//!
//! This module defines the rule type used to match and classify
//! text fragments. Rules are tried in declaration order and the
//! first match wins, so a ruleset's order is part of its meaning.

use regex::{Regex, RegexBuilder};

use crate::error::{HighlightError, Result};
use crate::tokens::TokenType;

/// A single pattern rule
///
/// Matches a regex pattern at the current scan position and assigns
/// a token type to the match. Patterns are compiled anchored to the
/// position and with multi-line mode on, so `$` means end of line.
#[derive(Debug)]
pub struct Rule {
    /// Name for diagnostics
    pub name: String,
    /// Compiled pattern, anchored at the scan position
    pattern: Regex,
    /// Negative guard: the rule is skipped when this matches
    guard: Option<Regex>,
    /// Token type to assign to matches
    pub token_type: TokenType,
    /// Whether the rule only applies at the start of a line
    pub line_anchored: bool,
}

impl Rule {
    /// Create a new rule
    ///
    /// Fails with [`HighlightError::InvalidPattern`] if the pattern
    /// does not compile. That is the only error class in the whole
    /// crate that a ruleset author can trigger.
    pub fn new(name: &str, pattern: &str, token_type: TokenType) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            pattern: compile(name, pattern)?,
            guard: None,
            token_type,
            line_anchored: false,
        })
    }

    /// Builder: restrict the rule to line-start positions
    pub fn anchored(mut self) -> Self {
        self.line_anchored = true;
        self
    }

    /// Builder: skip the rule wherever `pattern` also matches
    ///
    /// This stands in for negative lookahead, which the regex crate
    /// does not support.
    pub fn unless(mut self, pattern: &str) -> Result<Self> {
        self.guard = Some(compile(&self.name, pattern)?);
        Ok(self)
    }

    /// Length of this rule's match at the start of `rest`, if any
    ///
    /// A zero-width match never counts; the scanner must always
    /// advance.
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        if let Some(guard) = &self.guard {
            if guard.is_match(rest) {
                return None;
            }
        }
        match self.pattern.find(rest) {
            Some(m) if !m.is_empty() => Some(m.end()),
            _ => None,
        }
    }
}

/// Compile a pattern anchored to the scan position
fn compile(rule: &str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(&format!(r"\A(?:{pattern})"))
        .multi_line(true)
        .build()
        .map_err(|source| HighlightError::InvalidPattern {
            rule: rule.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_at_position() {
        let rule = Rule::new("number", r"\d+", TokenType::NumberInteger).unwrap();
        assert_eq!(rule.match_len("123 abc"), Some(3));
        assert_eq!(rule.match_len("abc 123"), None);
    }

    #[test]
    fn test_end_of_line_dollar() {
        let rule = Rule::new("comment", r"//.*$", TokenType::CommentSingle).unwrap();
        // $ stops at the end of the line, not the end of the input
        assert_eq!(rule.match_len("// note\nrest"), Some(7));
        assert_eq!(rule.match_len("// note"), Some(7));
    }

    #[test]
    fn test_guard_blocks_match() {
        let rule = Rule::new("line", r".*$", TokenType::Output)
            .unwrap()
            .unless(r"> ")
            .unwrap();
        assert_eq!(rule.match_len("plain line"), Some(10));
        assert_eq!(rule.match_len("> prompt line"), None);
    }

    #[test]
    fn test_zero_width_match_rejected() {
        let rule = Rule::new("line", r".*$", TokenType::Output).unwrap();
        // On a blank line `.*$` matches the empty string; that must
        // not count as a match or the scanner would stall.
        assert_eq!(rule.match_len("\nnext"), None);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Rule::new("broken", r"(", TokenType::Output).unwrap_err();
        assert!(matches!(err, HighlightError::InvalidPattern { .. }));
        assert!(err.to_string().contains("broken"));
    }
}
