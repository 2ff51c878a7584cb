//! Postfix conditional tagging
//!
//!     `if` and `unless` read the same whether they lead a statement or trail one:
//!
//!         if ready then go()      # leading
//!         go() if ready           # postfix
//!
//!     The parser needs them told apart. Scanning forward from the keyword over its condition,
//!     a leading conditional reaches the body block it owns: an `INDENT` that does not belong to
//!     a single-line construct inside the condition (`->`, `else`, `then`, ...). A postfix
//!     conditional reaches the end of its statement first: a `TERMINATOR`, or the end of the
//!     enclosing block or of the stream.
//!
//!     An `INDENT` the lexer generated for anything other than a `then` clause is not a body
//!     block either, so reaching one also marks the keyword postfix.

use crate::brew::rewriting::cursor::scan_tokens;
use crate::brew::rewriting::error::RewriteError;
use crate::brew::rewriting::region::{detect_end, RegionEnd};
use crate::brew::token::{Tag, Token, TokenStream};

/// Retag `IF`/`UNLESS` that trail their statement as `POST_IF`/`POST_UNLESS`.
pub fn tag_postfix_conditionals(tokens: &mut TokenStream) -> Result<(), RewriteError> {
    scan_tokens(tokens, |tokens, i| {
        let postfix = match tokens[i].tag {
            Tag::If => Tag::PostIf,
            Tag::Unless => Tag::PostUnless,
            _ => return Ok(1),
        };
        let end = detect_end(tokens, i + 1, ends_condition)
            .map_err(|unclosed| RewriteError::unclosed(&tokens[unclosed.opener]))?;
        let is_postfix = match end {
            RegionEnd::Stop(j) => !owns_body(&tokens[j]),
            RegionEnd::Implicit { .. } => true,
        };
        if is_postfix {
            tracing::trace!(index = i, "tagging postfix conditional");
            tokens[i].tag = postfix;
        }
        Ok(1)
    })
}

fn ends_condition(tokens: &[Token], index: usize) -> bool {
    match tokens[index].tag {
        Tag::Terminator => true,
        Tag::Indent => !tokens[index - 1].tag.is_single_liner(),
        _ => false,
    }
}

/// Whether the token that ended the condition opens the conditional's own body.
fn owns_body(token: &Token) -> bool {
    token.is(Tag::Indent) && (!token.is_generated() || token.from_then)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brew::token::testing::{mk_tokens, tags_of};
    use crate::brew::token::Provenance;

    #[test]
    fn test_trailing_if_before_terminator() {
        let mut tokens = mk_tokens(&[
            Tag::Identifier,
            Tag::If,
            Tag::Identifier,
            Tag::Terminator,
            Tag::Identifier,
        ]);
        tag_postfix_conditionals(&mut tokens).unwrap();
        assert_eq!(tokens[1].tag, Tag::PostIf);
    }

    #[test]
    fn test_leading_if_with_block() {
        let tags = [
            Tag::If,
            Tag::Identifier,
            Tag::Indent,
            Tag::Identifier,
            Tag::Outdent,
        ];
        let mut tokens = mk_tokens(&tags);
        tag_postfix_conditionals(&mut tokens).unwrap();
        assert_eq!(tags_of(&tokens), tags.to_vec());
    }

    #[test]
    fn test_unless_at_end_of_stream() {
        let mut tokens = mk_tokens(&[Tag::Identifier, Tag::Unless, Tag::Identifier]);
        tag_postfix_conditionals(&mut tokens).unwrap();
        assert_eq!(tokens[1].tag, Tag::PostUnless);
    }

    #[test]
    fn test_trailing_if_at_end_of_block() {
        let mut tokens = mk_tokens(&[
            Tag::Indent,
            Tag::Identifier,
            Tag::If,
            Tag::Identifier,
            Tag::Outdent,
        ]);
        tag_postfix_conditionals(&mut tokens).unwrap();
        assert_eq!(tokens[2].tag, Tag::PostIf);
    }

    #[test]
    fn test_single_line_block_inside_condition() {
        // if f(-> a) then b: the arrow's block is part of the condition
        let mut tokens = mk_tokens(&[
            Tag::If,
            Tag::Identifier,
            Tag::CallStart,
            Tag::Arrow,
            Tag::Indent,
            Tag::Identifier,
            Tag::Outdent,
            Tag::CallEnd,
            Tag::Indent,
            Tag::Identifier,
            Tag::Outdent,
        ]);
        tag_postfix_conditionals(&mut tokens).unwrap();
        assert_eq!(tokens[0].tag, Tag::If);
    }

    #[test]
    fn test_arrow_block_right_after_condition() {
        // a if b -> c: the only block belongs to the arrow
        let mut tokens = mk_tokens(&[
            Tag::Identifier,
            Tag::If,
            Tag::Identifier,
            Tag::Arrow,
            Tag::Indent,
            Tag::Identifier,
            Tag::Outdent,
        ]);
        tag_postfix_conditionals(&mut tokens).unwrap();
        assert_eq!(tokens[1].tag, Tag::PostIf);
    }

    #[test]
    fn test_generated_indent() {
        let mut tokens = mk_tokens(&[
            Tag::Identifier,
            Tag::If,
            Tag::Identifier,
            Tag::Indent,
            Tag::Identifier,
            Tag::Outdent,
        ]);
        tokens[3].provenance = Provenance::Generated;
        tag_postfix_conditionals(&mut tokens).unwrap();
        assert_eq!(tokens[1].tag, Tag::PostIf);
    }

    #[test]
    fn test_generated_then_indent() {
        let mut tokens = mk_tokens(&[
            Tag::If,
            Tag::Identifier,
            Tag::Indent,
            Tag::Identifier,
            Tag::Outdent,
        ]);
        tokens[2].provenance = Provenance::Generated;
        tokens[2].from_then = true;
        tag_postfix_conditionals(&mut tokens).unwrap();
        assert_eq!(tokens[0].tag, Tag::If);
    }

    #[test]
    fn test_unclosed_condition() {
        let mut tokens = mk_tokens(&[
            Tag::Identifier,
            Tag::If,
            Tag::ParenStart,
            Tag::Identifier,
        ]);
        assert!(matches!(
            tag_postfix_conditionals(&mut tokens),
            Err(RewriteError::Unclosed {
                tag: Tag::ParenStart,
                ..
            })
        ));
    }
}
