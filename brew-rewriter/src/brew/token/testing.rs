//! Token factories for tests
//!
//! Building tokens field by field gets noisy fast. These helpers give every token a distinct
//! location (one column per position on line 0) so location assertions stay readable.

use super::core::{Token, TokenStream};
use super::location::{Location, Position};
use super::tag::Tag;

/// A source token at column `column` of line 0, carrying the tag's default text.
pub fn mk_token(tag: Tag, column: usize) -> Token {
    Token::bare(tag).at(Location::point(Position::new(0, column)))
}

/// A source token with a value at column `column` of line 0.
pub fn mk_valued(tag: Tag, value: &str, column: usize) -> Token {
    Token::new(tag, value).at(Location::point(Position::new(0, column)))
}

/// Source tokens for `tags`, located at consecutive columns.
pub fn mk_tokens(tags: &[Tag]) -> TokenStream {
    tags.iter()
        .enumerate()
        .map(|(column, tag)| mk_token(*tag, column))
        .collect()
}

/// The tags of a stream, for compact assertions.
pub fn tags_of(tokens: &[Token]) -> Vec<Tag> {
    tokens.iter().map(|token| token.tag).collect()
}
