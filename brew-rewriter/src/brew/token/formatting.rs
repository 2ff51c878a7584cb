//! Token stream renderers
//!
//! Three renderings of a token stream:
//!
//! - tag line: tags only, space separated. The quickest way to eyeball what a pass did.
//! - notation: the compact notation read by [`parse_notation`](super::notation::parse_notation),
//!   including values and provenance suffixes.
//! - JSON: every field, via serde.

use super::core::{Provenance, Token};
use super::tag::Tag;

/// Trait for converting a token to its notation entry
pub trait ToNotation {
    fn to_notation(&self) -> String;
}

impl ToNotation for Token {
    fn to_notation(&self) -> String {
        let mut entry = match bare_entry(self) {
            Some(bare) => bare.to_string(),
            None if self.value == self.tag.default_value() => self.tag.name().to_string(),
            None => format!("{}\"{}\"", self.tag.name(), escape(&self.value)),
        };
        match self.provenance {
            Provenance::Source => {}
            Provenance::Generated => entry.push_str("+gen"),
            Provenance::Explicit => entry.push_str("+explicit"),
        }
        if self.from_then {
            entry.push_str("+then");
        }
        entry
    }
}

/// Tokens whose value alone reads back as the same tag.
fn bare_entry(token: &Token) -> Option<&str> {
    let value = token.value.as_str();
    let reads_back = match token.tag {
        Tag::Identifier => is_word(value) && Tag::from_keyword(value).is_none(),
        Tag::Number => is_number(value),
        Tag::StringLiteral => is_plain_string(value),
        tag => is_word(value) && Tag::from_keyword(value) == Some(tag),
    };
    reads_back.then_some(value)
}

fn is_word(value: &str) -> bool {
    let mut chars = value.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn is_number(value: &str) -> bool {
    let mut parts = value.splitn(2, '.');
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    match (parts.next(), parts.next()) {
        (Some(whole), None) => digits(whole),
        (Some(whole), Some(fraction)) => digits(whole) && digits(fraction),
        _ => false,
    }
}

fn is_plain_string(value: &str) -> bool {
    value.len() >= 2
        && value.starts_with('"')
        && value.ends_with('"')
        && !value[1..value.len() - 1].contains(['"', '\\', '\n'])
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Render a token stream in notation.
pub fn to_notation(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToNotation::to_notation)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render only the tags, optionally with each token's location (`?` when it has none).
pub fn to_tag_line(tokens: &[Token], show_locations: bool) -> String {
    tokens
        .iter()
        .map(|token| {
            if !show_locations {
                return token.tag.name().to_string();
            }
            match token.location {
                Some(location) => format!("{}@{}", token.tag, location),
                None => format!("{}@?", token.tag),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a token stream as pretty-printed JSON.
pub fn to_json(tokens: &[Token]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brew::token::location::{Location, Position};
    use crate::brew::token::notation::parse_notation;

    #[test]
    fn test_bare_entries() {
        let tokens = vec![
            Token::new(Tag::Identifier, "a"),
            Token::new(Tag::If, "if"),
            Token::new(Tag::PostIf, "if"),
            Token::new(Tag::Number, "1.5"),
            Token::new(Tag::StringLiteral, "\"x\""),
            Token::new(Tag::Bool, "true"),
        ];
        assert_eq!(to_notation(&tokens), r#"a if POST_IF 1.5 "x" true"#);
    }

    #[test]
    fn test_values_and_flags() {
        let cause = Token::bare(Tag::Outdent);
        let tokens = vec![
            Token::new(Tag::Indent, "{"),
            Token::new(Tag::Identifier, "Foo"),
            Token::new(Tag::Identifier, "else"),
            Token::explicit(Tag::Terminator, &cause),
            Token::bare(Tag::Indent)
                .with_provenance(Provenance::Generated)
                .with_from_then(true),
        ];
        assert_eq!(
            to_notation(&tokens),
            r#"INDENT"{" IDENTIFIER"Foo" IDENTIFIER"else" TERMINATOR+explicit INDENT+gen+then"#
        );
    }

    #[test]
    fn test_notation_reads_back() {
        let source = r#"CLASS"class" a INDENT"{" b : "c\"d" OUTDENT"}" CALL_END+gen 3"#;
        let tokens = parse_notation(source).unwrap();
        let again = parse_notation(&to_notation(&tokens)).unwrap();
        let strip = |tokens: Vec<Token>| -> Vec<(Tag, String)> {
            tokens.into_iter().map(|t| (t.tag, t.value)).collect()
        };
        assert_eq!(strip(again), strip(tokens));
    }

    #[test]
    fn test_tag_line() {
        let tokens = vec![
            Token::new(Tag::Identifier, "a").at(Location::new(
                Position::new(0, 0),
                Position::new(0, 2),
            )),
            Token::bare(Tag::Terminator),
        ];
        assert_eq!(to_tag_line(&tokens, false), "IDENTIFIER TERMINATOR");
        assert_eq!(
            to_tag_line(&tokens, true),
            "IDENTIFIER@0:0..0:2 TERMINATOR@?"
        );
    }

    #[test]
    fn test_json() {
        let json = to_json(&[Token::bare(Tag::CallEnd)]).unwrap();
        assert!(json.contains("\"tag\": \"CALL_END\""));
        assert!(json.contains("\"value\": \")\""));
    }
}
