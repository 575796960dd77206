//! Lexer registry
//!
//! This module provides the registry that callers use to look up
//! lexers by tag and highlight a block of text. The registry is
//! built explicitly at startup; there is no ambient global state.

use std::collections::HashMap;

use crate::builtin;
use crate::error::{HighlightError, Result};
use crate::lexer::{LexerDefinition, Tokens};

/// Registry of named lexer definitions
///
/// Once populated, the registry is read-only and safe to share
/// across threads behind a plain reference.
pub struct LexerRegistry {
    /// Loaded lexer definitions, keyed by tag
    lexers: HashMap<String, LexerDefinition>,
}

impl LexerRegistry {
    /// Create a new registry with the built-in lexers loaded
    pub fn new() -> Self {
        let mut registry = Self {
            lexers: HashMap::new(),
        };
        for lexer in builtin::all_lexers() {
            registry.add_lexer(lexer);
        }
        registry
    }

    /// Create a registry with no lexers at all
    pub fn empty() -> Self {
        Self {
            lexers: HashMap::new(),
        }
    }

    /// Add a lexer definition; an existing lexer with the same tag
    /// is replaced
    pub fn add_lexer(&mut self, lexer: LexerDefinition) {
        tracing::debug!(tag = %lexer.tag, rules = lexer.rules().len(), "registering lexer");
        self.lexers.insert(lexer.tag.clone(), lexer);
    }

    /// Get a lexer definition by tag
    pub fn get(&self, tag: &str) -> Option<&LexerDefinition> {
        self.lexers.get(tag)
    }

    /// List registered tags, sorted
    pub fn list_lexers(&self) -> Vec<&str> {
        let mut tags: Vec<_> = self.lexers.keys().map(|s| s.as_str()).collect();
        tags.sort_unstable();
        tags
    }

    /// Tokenize `text` with the lexer registered under `tag`
    pub fn tokenize<'a>(&'a self, tag: &str, text: &'a str) -> Result<Tokens<'a>> {
        let lexer = self
            .get(tag)
            .ok_or_else(|| HighlightError::UnknownLexer(tag.to_string()))?;
        Ok(lexer.tokenize(text))
    }
}

impl Default for LexerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenType;

    #[test]
    fn test_builtins_loaded() {
        let registry = LexerRegistry::new();
        assert!(registry.get("unet").is_some());
        assert_eq!(registry.list_lexers(), vec!["unet"]);
    }

    #[test]
    fn test_lookup_by_tag() {
        let registry = LexerRegistry::new();
        let lexer = registry.get("unet").unwrap();
        assert_eq!(lexer.title, "Unet");
        assert_eq!(lexer.description, "Unet shell session");
    }

    #[test]
    fn test_tokenize_by_tag() {
        let registry = LexerRegistry::new();
        let tokens: Vec<_> = registry.tokenize("unet", "> hello\n").unwrap().collect();
        assert_eq!(tokens[0].token_type, TokenType::Prompt);
    }

    #[test]
    fn test_unknown_tag() {
        let registry = LexerRegistry::new();
        let err = registry.tokenize("nope", "text").unwrap_err();
        assert!(matches!(err, HighlightError::UnknownLexer(tag) if tag == "nope"));
    }

    #[test]
    fn test_replace_same_tag() {
        let mut registry = LexerRegistry::empty();
        registry.add_lexer(LexerDefinition::new("x", "First", ""));
        registry.add_lexer(LexerDefinition::new("x", "Second", ""));
        assert_eq!(registry.get("x").unwrap().title, "Second");
        assert_eq!(registry.list_lexers().len(), 1);
    }
}
