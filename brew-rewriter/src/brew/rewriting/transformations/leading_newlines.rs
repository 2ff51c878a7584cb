//! Leading newline removal
//!
//! The parser does not accept a statement terminator before the first statement, and blank
//! lines or comments at the top of a file leave the lexer emitting exactly that.

use crate::brew::token::{Tag, TokenStream};

/// Drop every `TERMINATOR` before the first token of any other tag.
pub fn remove_leading_newlines(tokens: &mut TokenStream) {
    let leading = tokens
        .iter()
        .take_while(|token| token.is(Tag::Terminator))
        .count();
    if leading > 0 {
        tracing::trace!(count = leading, "removing leading terminators");
        tokens.drain(..leading);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brew::token::testing::{mk_tokens, tags_of};

    #[test]
    fn test_removes_only_leading() {
        let mut tokens = mk_tokens(&[
            Tag::Terminator,
            Tag::Terminator,
            Tag::Identifier,
            Tag::Terminator,
            Tag::Identifier,
        ]);
        remove_leading_newlines(&mut tokens);
        assert_eq!(
            tags_of(&tokens),
            vec![Tag::Identifier, Tag::Terminator, Tag::Identifier]
        );
    }

    #[test]
    fn test_all_terminators() {
        let mut tokens = mk_tokens(&[Tag::Terminator, Tag::Terminator]);
        remove_leading_newlines(&mut tokens);
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_empty_and_untouched() {
        let mut tokens = TokenStream::new();
        remove_leading_newlines(&mut tokens);
        assert!(tokens.is_empty());

        let mut tokens = mk_tokens(&[Tag::Identifier, Tag::Terminator]);
        remove_leading_newlines(&mut tokens);
        assert_eq!(tags_of(&tokens), vec![Tag::Identifier, Tag::Terminator]);
    }
}
