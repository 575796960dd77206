//! Lexer definitions and the scan engine
//!
//! A [`LexerDefinition`] is an ordered ruleset with a registry
//! identity. [`LexerDefinition::tokenize`] drives the scan: at each
//! position the rules are tried in declaration order, the first
//! match is emitted as a token and the cursor advances past it.
//! A position no rule matches yields a one-character [`TokenType::Error`]
//! token, so every input is covered completely.

use crate::rules::Rule;
use crate::tokens::TokenType;

/// A named, ordered ruleset
///
/// Rule order is a correctness invariant: more specific rules must
/// be declared before the catch-alls or they are unreachable.
#[derive(Debug)]
pub struct LexerDefinition {
    /// Registry key (e.g. "unet")
    pub tag: String,
    /// Display title (e.g. "Unet")
    pub title: String,
    /// Human-readable description
    pub description: String,
    /// Rules in match-priority order
    rules: Vec<Rule>,
}

impl LexerDefinition {
    /// Create a new empty lexer definition
    pub fn new(tag: &str, title: &str, description: &str) -> Self {
        Self {
            tag: tag.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            rules: Vec::new(),
        }
    }

    /// Append a rule; earlier rules win over later ones
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// The rules in match-priority order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Tokenize `text` lazily
    ///
    /// The returned iterator borrows both the definition and the
    /// input; concatenating the emitted fragments reproduces the
    /// input exactly.
    pub fn tokenize<'a>(&'a self, text: &'a str) -> Tokens<'a> {
        Tokens {
            rules: &self.rules,
            text,
            pos: 0,
        }
    }
}

/// A classified text fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The matched fragment, borrowed from the input
    pub text: &'a str,
    /// Byte offset of the fragment in the input
    pub start: usize,
    /// Display category assigned by the matching rule
    pub token_type: TokenType,
}

impl Token<'_> {
    /// Byte offset just past the fragment
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Length of the fragment in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the fragment is empty (emitted tokens never are)
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Lazy token iterator over one input string
///
/// Holds no state beyond the scan cursor; dropping it part-way
/// through is fine.
#[derive(Debug)]
pub struct Tokens<'a> {
    rules: &'a [Rule],
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.pos >= self.text.len() {
            return None;
        }

        let rest = &self.text[self.pos..];
        let at_line_start = self.pos == 0 || self.text.as_bytes()[self.pos - 1] == b'\n';

        for rule in self.rules {
            if rule.line_anchored && !at_line_start {
                continue;
            }
            if let Some(len) = rule.match_len(rest) {
                let token = Token {
                    text: &rest[..len],
                    start: self.pos,
                    token_type: rule.token_type,
                };
                self.pos += len;
                return Some(token);
            }
        }

        // No rule matched: emit one character unstyled and keep going.
        let len = rest.chars().next().map(char::len_utf8).unwrap_or(1);
        let token = Token {
            text: &rest[..len],
            start: self.pos,
            token_type: TokenType::Error,
        };
        self.pos += len;
        Some(token)
    }
}
