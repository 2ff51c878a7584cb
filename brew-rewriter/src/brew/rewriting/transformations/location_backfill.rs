//! Location backfill for synthesized tokens
//!
//! Tokens inserted by the earlier passes have no source location, but the parser and every
//! diagnostic after it expect one. Each gets a zero-width location taken from a neighbour:
//! a generated `{` starts where the token after it starts, anything else sits at the end of
//! the token before it. Tokens are visited left to right, so a run of synthesized tokens
//! inherits from the last located token before the run.

use crate::brew::token::{Location, Position, Tag, TokenStream};

/// Give every generated or explicit token without a location one taken from its neighbours.
pub fn add_locations_to_generated_tokens(tokens: &mut TokenStream) {
    for i in 0..tokens.len() {
        let token = &tokens[i];
        if token.location.is_some() || !token.is_synthesized() {
            continue;
        }
        let next_start = tokens
            .get(i + 1)
            .and_then(|next| next.location)
            .map(|location| location.start);
        let previous_end = i
            .checked_sub(1)
            .and_then(|previous| tokens[previous].location)
            .map(|location| location.end);

        let position = match (token.tag, next_start, previous_end) {
            (Tag::MappingStart, Some(start), _) => start,
            (_, _, Some(end)) => end,
            _ => Position::default(),
        };
        tokens[i].location = Some(Location::point(position));
    }
}
