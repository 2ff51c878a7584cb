//! Call and index closing
//!
//!     The lexer marks where an argument list or an index starts (`CALL_START`, `INDEX_START`)
//!     but closes them with the plain `)` and `]` it reads, and not at all when a dedent ends the
//!     call implicitly:
//!
//!         f a,
//!           -> b      # the call to f ends with the block, no `)` in sight
//!
//!     For every opener we find where its region ends. If that is a real closer it is retagged
//!     as the dedicated one; if the region ended implicitly a generated closer is inserted right
//!     where it ended, just inside whatever closed the enclosing structure.
//!
//!     Openers are resolved innermost first, from the end of the stream backwards. An outer
//!     region then sees its nested calls already closed and skips over them as balanced pairs;
//!     two calls ending at the same dedent get their closers in nesting order.
//!
//!     Calls additionally stop at an `OUTDENT` directly preceded by a `)` that closed a block
//!     rather than a group. The lexer emits that order when a call's closing paren sits on the
//!     dedenting line, and the `)` is then the call's real closer. A `)` that closed a `(` of
//!     its own is just a group, and the call ends implicitly at the dedent.

use crate::brew::rewriting::error::RewriteError;
use crate::brew::rewriting::region::{detect_end, RegionEnd};
use crate::brew::token::{Tag, Token, TokenStream};

/// Retag or insert the `CALL_END` for every `CALL_START`.
pub fn close_open_calls(tokens: &mut TokenStream) -> Result<(), RewriteError> {
    close_regions(tokens, Tag::CallStart, Tag::CallEnd, ends_call)
}

/// Retag or insert the `INDEX_END` for every `INDEX_START`.
pub fn close_open_indexes(tokens: &mut TokenStream) -> Result<(), RewriteError> {
    close_regions(tokens, Tag::IndexStart, Tag::IndexEnd, ends_index)
}

fn ends_call(tokens: &[Token], index: usize) -> bool {
    match tokens[index].tag {
        Tag::ParenEnd | Tag::CallEnd => true,
        Tag::Outdent => {
            index > 0 && tokens[index - 1].is(Tag::ParenEnd) && !closes_group(tokens, index - 1)
        }
        _ => false,
    }
}

/// Whether the `)` at `close` pairs with a `(`, counting back over nested pairs.
fn closes_group(tokens: &[Token], close: usize) -> bool {
    let mut depth = 0usize;
    for token in tokens[..close].iter().rev() {
        if token.tag.is_expression_end() {
            depth += 1;
        } else if token.tag.is_expression_start() {
            if depth == 0 {
                return token.is(Tag::ParenStart);
            }
            depth -= 1;
        }
    }
    false
}

fn ends_index(tokens: &[Token], index: usize) -> bool {
    matches!(tokens[index].tag, Tag::BracketEnd | Tag::IndexEnd)
}

fn close_regions<F>(
    tokens: &mut TokenStream,
    opener: Tag,
    closer: Tag,
    is_end: F,
) -> Result<(), RewriteError>
where
    F: Fn(&[Token], usize) -> bool,
{
    let openers: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.is(opener))
        .map(|(i, _)| i)
        .collect();
    // Insertions land after `i`, so the positions still to visit stay valid.
    for i in openers.into_iter().rev() {
        let end = detect_end(tokens, i + 1, &is_end)
            .map_err(|unclosed| RewriteError::unclosed(&tokens[unclosed.opener]))?;
        match end {
            RegionEnd::Stop(j) => {
                let target = if tokens[j].is(Tag::Outdent) { j - 1 } else { j };
                tokens[target].tag = closer;
            }
            RegionEnd::Implicit { at } => {
                tracing::trace!(opener = %opener, index = i, at, "closing implicitly");
                let generated = Token::generated(closer, &tokens[i]);
                tokens.insert(at, generated);
            }
        }
    }
    Ok(())
}
