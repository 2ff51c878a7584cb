//! Balanced-region scanner
//!
//!     Several passes need the same search: starting right after some token, walk forward over
//!     nested pairs until either a stop condition holds at nesting depth zero, or a closer with no
//!     opener inside the region shows the enclosing structure ending first.
//!
//!     The second outcome is an implicit end. The lexer emits an `OUTDENT` when the source
//!     dedents, which may close a block the region itself sits in; the region then ends just
//!     before that closer. Running off the end of the stream at depth zero is an implicit end
//!     too, positioned at the end of the stream.
//!
//!     Running off the end of the stream with something still open cannot be fixed by any pass
//!     and is reported with the outermost opener that never closed.
//!
//!     The stop condition is only consulted at depth zero and before the token's own nesting
//!     effect, so a stop condition that matches a closer sees it before it would unbalance the
//!     region.

use crate::brew::token::Token;

/// How a region ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionEnd {
    /// The stop condition held for the token at this index.
    Stop(usize),
    /// The enclosing structure ended first. The region's last token is at `at - 1`; a
    /// synthesized closer belongs at `at`.
    Implicit { at: usize },
}

/// The stream ended with the opener at this index still open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnclosedRegion {
    pub opener: usize,
}

/// Scan forward from `from` for the end of the region.
pub fn detect_end<F>(tokens: &[Token], from: usize, mut stop: F) -> Result<RegionEnd, UnclosedRegion>
where
    F: FnMut(&[Token], usize) -> bool,
{
    let mut open: Vec<usize> = Vec::new();
    for (index, token) in tokens.iter().enumerate().skip(from) {
        if open.is_empty() && stop(tokens, index) {
            return Ok(RegionEnd::Stop(index));
        }
        if token.tag.is_expression_start() {
            open.push(index);
        } else if token.tag.is_expression_end() && open.pop().is_none() {
            return Ok(RegionEnd::Implicit { at: index });
        }
    }
    match open.first() {
        Some(&opener) => Err(UnclosedRegion { opener }),
        None => Ok(RegionEnd::Implicit { at: tokens.len() }),
    }
}
