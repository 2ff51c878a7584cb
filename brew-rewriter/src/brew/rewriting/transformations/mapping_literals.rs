//! Mapping literal and class body disambiguation
//!
//!     The lexer cannot tell a block from a mapping literal, so every brace arrives as a generic
//!     block marker. A colon settles it: the innermost brace pair around a `key: value` pair is a
//!     mapping. For each colon we look backwards for the nearest open brace not closed before the
//!     colon, and forwards for the nearest close brace not opened after it, and retag both.
//!
//!     A class body written as a mapping is the one place where the parser needs a block as
//!     well as the mapping:
//!
//!         class Dog extends Animal { bark: -> "woof" }
//!
//!     When the brace being retagged has `class` or `extends` among the two tokens before it, the
//!     mapping is wrapped in a generated `INDENT`/`OUTDENT` pair.
//!
//!     The empty mapping `{:}` is special-cased: the braces are retagged and the colon dropped.

use crate::brew::rewriting::cursor::scan_tokens;
use crate::brew::rewriting::error::{location_of, RewriteError};
use crate::brew::token::{Tag, Token, TokenStream};

/// Retag the braces around every `key: value` pair as mapping braces.
pub fn tag_mapping_literals(tokens: &mut TokenStream) -> Result<(), RewriteError> {
    scan_tokens(tokens, |tokens, i| {
        if !tokens[i].is(Tag::Colon) {
            return Ok(1);
        }
        if is_empty_mapping(tokens, i) {
            tokens[i - 1].tag = Tag::MappingStart;
            tokens[i + 1].tag = Tag::MappingEnd;
            tokens.remove(i);
            return Ok(1);
        }

        let colon_location = location_of(&tokens[i]);
        let open = find_open_brace(tokens, i).ok_or(RewriteError::UnmatchedMappingOpen {
            location: colon_location,
        })?;

        let mut colon = i;
        let mut class_body = None;
        if tokens[open].is(Tag::Indent) {
            tokens[open].tag = Tag::MappingStart;
            if opens_class_body(tokens, open) {
                tracing::trace!(index = open, "wrapping class body");
                let indent = Token::generated(Tag::Indent, &tokens[open]);
                tokens.insert(open, indent);
                colon += 1;
                class_body = Some(open + 1);
            }
        }

        let close = find_close_brace(tokens, colon).ok_or(RewriteError::UnmatchedMappingClose {
            location: colon_location,
        })?;
        tokens[close].tag = Tag::MappingEnd;

        match class_body {
            Some(brace) => {
                let outdent = Token::generated(Tag::Outdent, &tokens[brace]);
                tokens.insert(close + 1, outdent);
                Ok(2)
            }
            None => Ok(1),
        }
    })
}

/// `{`, `:`, `}` written back to back.
fn is_empty_mapping(tokens: &[Token], colon: usize) -> bool {
    let (Some(before), Some(after)) = (
        colon.checked_sub(1).and_then(|i| tokens.get(i)),
        tokens.get(colon + 1),
    ) else {
        return false;
    };
    before.tag.is_open_brace()
        && before.value == "{"
        && tokens[colon].value == ":"
        && after.tag.is_close_brace()
        && after.value == "}"
}

/// Nearest open brace before `colon` that is not closed before it.
fn find_open_brace(tokens: &[Token], colon: usize) -> Option<usize> {
    let mut closed: Vec<usize> = Vec::new();
    for index in (0..colon).rev() {
        let tag = tokens[index].tag;
        if tag.is_close_brace() {
            closed.push(index);
        } else if tag.is_open_brace() && closed.pop().is_none() {
            return Some(index);
        }
    }
    None
}

/// Nearest close brace after `colon` that is not opened after it.
fn find_close_brace(tokens: &[Token], colon: usize) -> Option<usize> {
    let mut opened: Vec<usize> = Vec::new();
    for index in colon + 1..tokens.len() {
        let tag = tokens[index].tag;
        if tag.is_open_brace() {
            opened.push(index);
        } else if tag.is_close_brace() && opened.pop().is_none() {
            return Some(index);
        }
    }
    None
}

fn opens_class_body(tokens: &[Token], brace: usize) -> bool {
    tokens[brace.saturating_sub(2)..brace]
        .iter()
        .any(|token| matches!(token.tag, Tag::Class | Tag::Extends))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brew::token::testing::{mk_token, mk_tokens, mk_valued, tags_of};

    fn brace_open(column: usize) -> Token {
        mk_valued(Tag::Indent, "{", column)
    }

    fn brace_close(column: usize) -> Token {
        mk_valued(Tag::Outdent, "}", column)
    }

    #[test]
    fn test_empty_mapping() {
        let mut tokens = vec![
            mk_token(Tag::Identifier, 0),
            mk_token(Tag::Assign, 1),
            brace_open(2),
            mk_token(Tag::Colon, 3),
            brace_close(4),
        ];
        tag_mapping_literals(&mut tokens).unwrap();
        assert_eq!(
            tags_of(&tokens),
            vec![
                Tag::Identifier,
                Tag::Assign,
                Tag::MappingStart,
                Tag::MappingEnd
            ]
        );
    }

    #[test]
    fn test_simple_mapping() {
        let mut tokens = vec![
            brace_open(0),
            mk_token(Tag::Identifier, 1),
            mk_token(Tag::Colon, 2),
            mk_token(Tag::Number, 3),
            mk_token(Tag::Comma, 4),
            mk_token(Tag::Identifier, 5),
            mk_token(Tag::Colon, 6),
            mk_token(Tag::Number, 7),
            brace_close(8),
        ];
        tag_mapping_literals(&mut tokens).unwrap();
        assert_eq!(tokens[0].tag, Tag::MappingStart);
        assert_eq!(tokens[8].tag, Tag::MappingEnd);
        assert_eq!(tokens.len(), 9);
    }

    #[test]
    fn test_implicit_mapping_block() {
        // a =
        //   b: 1
        let mut tokens = mk_tokens(&[
            Tag::Identifier,
            Tag::Assign,
            Tag::Indent,
            Tag::Identifier,
            Tag::Colon,
            Tag::Number,
            Tag::Outdent,
        ]);
        tag_mapping_literals(&mut tokens).unwrap();
        assert_eq!(tokens[2].tag, Tag::MappingStart);
        assert_eq!(tokens[6].tag, Tag::MappingEnd);
    }

    #[test]
    fn test_skips_nested_blocks() {
        // { a: -> INDENT b OUTDENT }
        let mut tokens = vec![
            brace_open(0),
            mk_token(Tag::Identifier, 1),
            mk_token(Tag::Colon, 2),
            mk_token(Tag::Arrow, 3),
            mk_token(Tag::Indent, 4),
            mk_token(Tag::Identifier, 5),
            mk_token(Tag::Outdent, 6),
            brace_close(7),
        ];
        tag_mapping_literals(&mut tokens).unwrap();
        assert_eq!(
            tags_of(&tokens),
            vec![
                Tag::MappingStart,
                Tag::Identifier,
                Tag::Colon,
                Tag::Arrow,
                Tag::Indent,
                Tag::Identifier,
                Tag::Outdent,
                Tag::MappingEnd,
            ]
        );
    }

    #[test]
    fn test_nested_mapping() {
        // { a: { b: 1 } }
        let mut tokens = vec![
            brace_open(0),
            mk_token(Tag::Identifier, 1),
            mk_token(Tag::Colon, 2),
            brace_open(3),
            mk_token(Tag::Identifier, 4),
            mk_token(Tag::Colon, 5),
            mk_token(Tag::Number, 6),
            brace_close(7),
            brace_close(8),
        ];
        tag_mapping_literals(&mut tokens).unwrap();
        assert_eq!(tokens[0].tag, Tag::MappingStart);
        assert_eq!(tokens[3].tag, Tag::MappingStart);
        assert_eq!(tokens[7].tag, Tag::MappingEnd);
        assert_eq!(tokens[8].tag, Tag::MappingEnd);
    }

    #[test]
    fn test_class_body_is_wrapped() {
        let mut tokens = vec![
            mk_token(Tag::Class, 0),
            mk_valued(Tag::Identifier, "Dog", 1),
            brace_open(2),
            mk_token(Tag::Identifier, 3),
            mk_token(Tag::Colon, 4),
            mk_token(Tag::Number, 5),
            brace_close(6),
        ];
        tag_mapping_literals(&mut tokens).unwrap();
        assert_eq!(
            tags_of(&tokens),
            vec![
                Tag::Class,
                Tag::Identifier,
                Tag::Indent,
                Tag::MappingStart,
                Tag::Identifier,
                Tag::Colon,
                Tag::Number,
                Tag::MappingEnd,
                Tag::Outdent,
            ]
        );
        assert!(tokens[2].is_generated());
        assert!(tokens[8].is_generated());
        assert_eq!(tokens[2].location, None);
        assert_eq!(tokens[8].origin.as_ref().unwrap().value, "{");
    }

    #[test]
    fn test_class_body_with_several_members() {
        // Only the first colon retags the generic brace, so the body is wrapped once
        let mut tokens = vec![
            mk_token(Tag::Class, 0),
            mk_valued(Tag::Identifier, "Dog", 1),
            mk_token(Tag::Extends, 2),
            mk_valued(Tag::Identifier, "Animal", 3),
            brace_open(4),
            mk_token(Tag::Identifier, 5),
            mk_token(Tag::Colon, 6),
            mk_token(Tag::Number, 7),
            mk_token(Tag::Comma, 8),
            mk_token(Tag::Identifier, 9),
            mk_token(Tag::Colon, 10),
            mk_token(Tag::Number, 11),
            brace_close(12),
        ];
        tag_mapping_literals(&mut tokens).unwrap();
        let indents = tokens.iter().filter(|t| t.is(Tag::Indent)).count();
        let outdents = tokens.iter().filter(|t| t.is(Tag::Outdent)).count();
        assert_eq!((indents, outdents), (1, 1));
        assert_eq!(tokens[4].tag, Tag::Indent);
        assert_eq!(tokens[5].tag, Tag::MappingStart);
        assert_eq!(tokens[13].tag, Tag::MappingEnd);
        assert_eq!(tokens[14].tag, Tag::Outdent);
    }

    #[test]
    fn test_missing_open_brace() {
        let mut tokens = mk_tokens(&[Tag::Identifier, Tag::Colon, Tag::Number]);
        let err = tag_mapping_literals(&mut tokens).unwrap_err();
        assert!(matches!(err, RewriteError::UnmatchedMappingOpen { .. }));
        assert_eq!(err.location(), tokens[1].location.unwrap());
    }

    #[test]
    fn test_missing_close_brace() {
        let mut tokens = mk_tokens(&[Tag::Indent, Tag::Identifier, Tag::Colon, Tag::Number]);
        assert!(matches!(
            tag_mapping_literals(&mut tokens),
            Err(RewriteError::UnmatchedMappingClose { .. })
        ));
    }
}
