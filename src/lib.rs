//! Syntax highlighting for Unet shell session transcripts
//!
//! This crate tokenizes "Unet shell session" console transcripts
//! for display: an ordered list of regex rules is tried at each
//! scan position, the first match wins, and each matched fragment
//! is emitted with a display category. A renderer maps categories
//! to visual styles; this crate never interprets the text.
//!
//! The usual entry point is [`LexerRegistry::new`], which loads the
//! built-in `unet` lexer. Custom lexers can be built with
//! [`LexerDefinition`] and [`Rule`] or loaded from TOML files with
//! [`load_file`].

mod builtin;
mod error;
mod lexer;
mod loader;
mod registry;
mod rules;
mod tokens;

pub use builtin::{all_lexers, unet_lexer};
pub use error::{HighlightError, Result};
pub use lexer::{LexerDefinition, Token, Tokens};
pub use loader::{load_file, load_str};
pub use registry::LexerRegistry;
pub use rules::Rule;
pub use tokens::{TokenGroup, TokenType};
