//! Token notation reader
//!
//!     Token streams are awkward to write by hand as JSON, so fixtures, tests and the command
//!     line use a compact notation instead. It is a whitespace-separated list of entries:
//!
//!         NAME            a tag by canonical name: INDENT, CALL_START, POST_IF, TERMINATOR
//!         ( ) [ ] { } ->  punctuation tags by symbol
//!         NAME"text"      a tag with an explicit value: INDENT"{", IDENTIFIER"Foo"
//!         word            a keyword (if, else, class, true, ...) or else an IDENTIFIER
//!         42              a NUMBER
//!         "text"          a STRING, value includes the quotes
//!         +gen            suffix: generated token
//!         +explicit       suffix: explicit (synthesized terminator) token
//!         +then           suffix: block opener synthesized for a `then` clause
//!         # comment       ignored to the end of the line
//!
//!     Note that `{` and `}` are the mapping tags; the lexer's generic braces are written
//!     `INDENT"{"` and `OUTDENT"}"`.
//!
//!     Each token gets the 0-based location of its entry in the notation text, which makes the
//!     notation double as a layout: tokens on the second line of a fixture are on line 1.
//!     Tokens with a provenance suffix carry no location, the way the rewriter's own
//!     synthesized tokens start out.
//!
//!     Tokenization is done with logos, the same way the lexer proper reads source.

use super::core::{Provenance, Token, TokenStream};
use super::location::{Location, Position};
use super::tag::Tag;
use logos::Logos;

/// Error raised when notation text cannot be read
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("unexpected text '{text}' at {position}")]
    UnexpectedText { text: String, position: Position },
    #[error("unknown tag '{name}' at {position}")]
    UnknownTag { name: String, position: Position },
    #[error("'{text}' at {position} must be separated from the previous entry by whitespace")]
    MissingSeparator { text: String, position: Position },
    #[error("'{text}' at {position} does not follow a token it could apply to")]
    DanglingSuffix { text: String, position: Position },
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"([ \t\r\n\f]+|#[^\n]*)")]
enum Entry {
    #[regex(r"[A-Z][A-Z_]*")]
    Name,

    #[regex(r"[a-z_$][A-Za-z0-9_$]*")]
    Word,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    Quoted,

    #[regex(r"\+(gen|explicit|then)")]
    Flag,

    #[regex(r"[-+=>:,.?()\[\]{}]+")]
    Symbol,
}

/// Byte offset to line/column lookup
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(offset, _)| offset + 1))
            .collect();
        LineIndex { starts }
    }

    fn position(&self, offset: usize) -> Position {
        let line = match self.starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        Position::new(line, offset - self.starts[line])
    }

    fn location(&self, span: &std::ops::Range<usize>) -> Location {
        Location::new(
            self.position(span.start),
            self.position(span.end.saturating_sub(1).max(span.start)),
        )
    }
}

/// Read a token stream from notation text.
pub fn parse_notation(source: &str) -> Result<TokenStream, NotationError> {
    let index = LineIndex::new(source);
    let mut lexer = Entry::lexer(source);
    let mut tokens: TokenStream = Vec::new();
    // Byte offset where the previous entry ended, for suffix attachment
    let mut previous_end: Option<usize> = None;
    let mut accepts_value = false;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        let position = index.position(span.start);
        let entry = result.map_err(|_| NotationError::UnexpectedText {
            text: text.to_string(),
            position,
        })?;
        let attached = previous_end == Some(span.start);
        previous_end = Some(span.end);

        match entry {
            Entry::Quoted if attached && accepts_value => {
                if let Some(token) = tokens.last_mut() {
                    token.value = unescape(text);
                    if let Some(location) = token.location.as_mut() {
                        location.end = index.location(&span).end;
                    }
                }
                accepts_value = false;
                continue;
            }
            Entry::Flag => {
                let token = match tokens.last_mut() {
                    Some(token) if attached => token,
                    _ => {
                        return Err(NotationError::DanglingSuffix {
                            text: text.to_string(),
                            position,
                        })
                    }
                };
                match text {
                    "+gen" => token.provenance = Provenance::Generated,
                    "+explicit" => token.provenance = Provenance::Explicit,
                    _ => token.from_then = true,
                }
                token.location = None;
                accepts_value = false;
                continue;
            }
            _ if attached => {
                return Err(NotationError::MissingSeparator {
                    text: text.to_string(),
                    position,
                })
            }
            _ => {}
        }

        let token = match entry {
            Entry::Name | Entry::Symbol => {
                let tag = Tag::from_name(text).ok_or_else(|| NotationError::UnknownTag {
                    name: text.to_string(),
                    position,
                })?;
                accepts_value = true;
                Token::bare(tag)
            }
            Entry::Word => {
                accepts_value = false;
                let tag = Tag::from_keyword(text).unwrap_or(Tag::Identifier);
                Token::new(tag, text)
            }
            Entry::Number => {
                accepts_value = false;
                Token::new(Tag::Number, text)
            }
            Entry::Quoted => {
                accepts_value = false;
                Token::new(Tag::StringLiteral, text)
            }
            Entry::Flag => unreachable!("flags are handled above"),
        };
        tokens.push(token.at(index.location(&span)));
    }

    Ok(tokens)
}

/// Strip the quotes from a quoted entry and resolve its escapes.
fn unescape(quoted: &str) -> String {
    let inner = &quoted[1..quoted.len() - 1];
    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => value.push('\n'),
            Some('t') => value.push('\t'),
            Some(other) => value.push(other),
            None => value.push('\\'),
        }
    }
    value
}
