//! Unet shell session lexer definition

use crate::error::Result;
use crate::lexer::LexerDefinition;
use crate::rules::Rule;
use crate::tokens::TokenType;

/// Create the Unet shell session lexer definition
///
/// Rule order is load-bearing throughout. The two line-anchored
/// rules at the top split transcripts into heading, output and
/// prompt lines; everything below them can only match after a
/// prompt marker has been consumed, because the output rule eats
/// any other line whole.
pub fn unet_lexer() -> Result<LexerDefinition> {
    let mut lexer = LexerDefinition::new("unet", "Unet", "Unet shell session");

    // Heading must precede output: the output rule does not exclude
    // `name >> ...` lines, ordering does.
    lexer.add_rule(Rule::new("heading", r"\w+ >> .*$", TokenType::Heading)?.anchored());
    lexer.add_rule(
        Rule::new("output", r".*$", TokenType::Output)?
            .unless(r"> |- |- \}")?
            .anchored(),
    );

    lexer.add_rule(Rule::new("comment", r"//.*$", TokenType::CommentSingle)?);
    lexer.add_rule(Rule::new("prompt", r"[>\-] ", TokenType::Prompt)?.anchored());

    lexer.add_rule(Rule::new("kw_import", r"import\b", TokenType::KeywordNamespace)?);
    lexer.add_rule(Rule::new("kw_new", r"new\b", TokenType::KeywordReserved)?);

    // Non-greedy, escapes allowed, including an escaped newline.
    lexer.add_rule(Rule::new(
        "string_double",
        r#""(?:\\.|\\\n|.)*?""#,
        TokenType::StringDouble,
    )?);
    lexer.add_rule(Rule::new(
        "string_single",
        r"'(?:\\.|\\\n|.)*?'",
        TokenType::StringSingle,
    )?);

    // Float before hex before integer, so `3.14f` and `0x1f` are not
    // split by the bare integer rule.
    lexer.add_rule(Rule::new(
        "number_float",
        r"\d+\.\d+(?:[eE]\d+)?[fd]?",
        TokenType::NumberFloat,
    )?);
    lexer.add_rule(Rule::new("number_hex", r"0x[0-9a-f]+", TokenType::NumberHex)?);
    lexer.add_rule(Rule::new("number_int", r"[0-9]+L?", TokenType::NumberInteger)?);

    lexer.add_rule(Rule::new("newline", r"\n", TokenType::Whitespace)?);

    // Catch-alls; anything more specific must be declared above.
    lexer.add_rule(Rule::new("word", r"\w+", TokenType::GenericStrong)?);
    lexer.add_rule(Rule::new("any_char", r".", TokenType::GenericStrong)?);

    Ok(lexer)
}
