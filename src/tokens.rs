//! Token categories for syntax highlighting
//!
//! This module defines the display categories that the lexer
//! assigns to matched text fragments. Categories carry no semantic
//! meaning; they exist so a renderer can pick a visual style.

/// Display categories assigned to matched text fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Session headings (`name >> ...` lines)
    Heading,
    /// Command output lines
    Output,
    /// Prompt markers (`> ` or `- ` at the start of a line)
    Prompt,
    /// Single-line comments (`// ...`)
    CommentSingle,
    /// Namespace keywords (`import`)
    KeywordNamespace,
    /// Reserved keywords (`new`)
    KeywordReserved,
    /// Double-quoted string literals
    StringDouble,
    /// Single-quoted string literals
    StringSingle,
    /// Floating point literals (`1.5`, `2.0e3f`)
    NumberFloat,
    /// Hexadecimal literals (`0x1f`)
    NumberHex,
    /// Integer literals (`42`, `42L`)
    NumberInteger,
    /// Newlines
    Whitespace,
    /// Emphasized plain text (bare words and leftover characters)
    GenericStrong,
    /// Characters no rule matched (scanner fallback)
    Error,
}

/// Coarse token families, for renderers that only distinguish
/// a category's kind rather than its exact variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenGroup {
    Generic,
    Comment,
    Keyword,
    String,
    Number,
    Whitespace,
    Error,
}

impl TokenType {
    /// Get a human-readable name for this token type
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Heading => "Heading",
            TokenType::Output => "Output",
            TokenType::Prompt => "Prompt",
            TokenType::CommentSingle => "CommentSingle",
            TokenType::KeywordNamespace => "KeywordNamespace",
            TokenType::KeywordReserved => "KeywordReserved",
            TokenType::StringDouble => "StringDouble",
            TokenType::StringSingle => "StringSingle",
            TokenType::NumberFloat => "NumberFloat",
            TokenType::NumberHex => "NumberHex",
            TokenType::NumberInteger => "NumberInteger",
            TokenType::Whitespace => "Whitespace",
            TokenType::GenericStrong => "GenericStrong",
            TokenType::Error => "Error",
        }
    }

    /// Parse a token type from a string name (for TOML loading)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Heading" => Some(TokenType::Heading),
            "Output" => Some(TokenType::Output),
            "Prompt" => Some(TokenType::Prompt),
            "CommentSingle" => Some(TokenType::CommentSingle),
            "KeywordNamespace" => Some(TokenType::KeywordNamespace),
            "KeywordReserved" => Some(TokenType::KeywordReserved),
            "StringDouble" => Some(TokenType::StringDouble),
            "StringSingle" => Some(TokenType::StringSingle),
            "NumberFloat" => Some(TokenType::NumberFloat),
            "NumberHex" => Some(TokenType::NumberHex),
            "NumberInteger" => Some(TokenType::NumberInteger),
            "Whitespace" => Some(TokenType::Whitespace),
            "GenericStrong" => Some(TokenType::GenericStrong),
            "Error" => Some(TokenType::Error),
            _ => None,
        }
    }

    /// Get the coarse family this token type belongs to
    pub fn group(&self) -> TokenGroup {
        match self {
            TokenType::Heading
            | TokenType::Output
            | TokenType::Prompt
            | TokenType::GenericStrong => TokenGroup::Generic,
            TokenType::CommentSingle => TokenGroup::Comment,
            TokenType::KeywordNamespace | TokenType::KeywordReserved => TokenGroup::Keyword,
            TokenType::StringDouble | TokenType::StringSingle => TokenGroup::String,
            TokenType::NumberFloat | TokenType::NumberHex | TokenType::NumberInteger => {
                TokenGroup::Number
            }
            TokenType::Whitespace => TokenGroup::Whitespace,
            TokenType::Error => TokenGroup::Error,
        }
    }
}
