//! Built-in lexer definitions
//!
//! This module provides the lexer definitions shipped with the
//! crate, ready to be loaded into a [`crate::LexerRegistry`].

mod unet;

pub use unet::unet_lexer;

use crate::lexer::LexerDefinition;

/// Get all built-in lexer definitions
///
/// A builtin that fails to compile is a bug in its rule table; it
/// is logged and skipped rather than poisoning the registry.
pub fn all_lexers() -> Vec<LexerDefinition> {
    let mut lexers = Vec::new();
    match unet::unet_lexer() {
        Ok(lexer) => lexers.push(lexer),
        Err(err) => tracing::error!(%err, "built-in lexer failed to compile"),
    }
    lexers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtins_compile() {
        let lexers = all_lexers();
        assert_eq!(lexers.len(), 1);
        assert_eq!(lexers[0].tag, "unet");
    }
}
