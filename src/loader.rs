//! Loading lexer definitions from TOML
//!
//! Lets users ship their own lexer definitions without recompiling.
//! A definition file names the lexer and lists its rules in match
//! order:
//!
//! ```text
//! tag = "mylang"
//! title = "MyLang"
//! description = "MyLang console log"
//!
//! [[rules]]
//! name = "comment"
//! pattern = "#.*$"
//! token = "CommentSingle"
//!
//! [[rules]]
//! name = "banner"
//! pattern = ".*$"
//! token = "Output"
//! anchored = true
//! unless = "# "
//! ```

use std::fs;
use std::path::Path;

use crate::error::{HighlightError, Result};
use crate::lexer::LexerDefinition;
use crate::rules::Rule;
use crate::tokens::TokenType;

/// Load a lexer definition from a TOML file
pub fn load_file(path: &Path) -> Result<LexerDefinition> {
    let contents = fs::read_to_string(path)?;
    load_str(&contents)
}

/// Load a lexer definition from TOML text
pub fn load_str(contents: &str) -> Result<LexerDefinition> {
    let doc: toml::Value = contents
        .parse()
        .map_err(|e: toml::de::Error| HighlightError::InvalidDefinition(e.to_string()))?;

    let tag = require_str(&doc, "tag")?;
    let title = require_str(&doc, "title")?;
    let description = doc
        .get("description")
        .and_then(toml::Value::as_str)
        .unwrap_or("");

    let mut lexer = LexerDefinition::new(tag, title, description);

    let rules = doc
        .get("rules")
        .and_then(toml::Value::as_array)
        .ok_or_else(|| HighlightError::InvalidDefinition("missing [[rules]] array".to_string()))?;

    for (index, entry) in rules.iter().enumerate() {
        lexer.add_rule(parse_rule(entry, index)?);
    }

    tracing::debug!(tag = %lexer.tag, rules = lexer.rules().len(), "loaded lexer definition");
    Ok(lexer)
}

/// Parse one `[[rules]]` entry
fn parse_rule(entry: &toml::Value, index: usize) -> Result<Rule> {
    let name = entry
        .get("name")
        .and_then(toml::Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("rule{index}"));

    let pattern = entry
        .get("pattern")
        .and_then(toml::Value::as_str)
        .ok_or_else(|| {
            HighlightError::InvalidDefinition(format!("rule '{name}' has no pattern"))
        })?;

    let token_name = entry
        .get("token")
        .and_then(toml::Value::as_str)
        .ok_or_else(|| HighlightError::InvalidDefinition(format!("rule '{name}' has no token")))?;
    let token_type = TokenType::from_name(token_name)
        .ok_or_else(|| HighlightError::UnknownToken(token_name.to_string()))?;

    let mut rule = Rule::new(&name, pattern, token_type)?;
    if let Some(guard) = entry.get("unless").and_then(toml::Value::as_str) {
        rule = rule.unless(guard)?;
    }
    if entry
        .get("anchored")
        .and_then(toml::Value::as_bool)
        .unwrap_or(false)
    {
        rule = rule.anchored();
    }
    Ok(rule)
}

/// Get a required top-level string field
fn require_str<'a>(doc: &'a toml::Value, key: &str) -> Result<&'a str> {
    doc.get(key)
        .and_then(toml::Value::as_str)
        .ok_or_else(|| HighlightError::InvalidDefinition(format!("missing field '{key}'")))
}
