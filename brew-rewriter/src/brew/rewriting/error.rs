//! Rewrite errors
//!
//! Every error aborts the pipeline and names the token that made the stream unusable, so the
//! caller can report it against the source.

use crate::brew::token::{Location, Tag, Token};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RewriteError {
    /// A region scan ran off the end of the stream with this opener still open.
    #[error("unclosed '{tag}' at {location}")]
    Unclosed { tag: Tag, location: Location },
    /// No open brace encloses the colon at `location`.
    #[error("':' at {location} is not inside any block or mapping")]
    UnmatchedMappingOpen { location: Location },
    /// No close brace ends the mapping the colon at `location` belongs to.
    #[error("the mapping for ':' at {location} is never closed")]
    UnmatchedMappingClose { location: Location },
    /// A pair member without a partner, found by balance verification.
    #[error("unbalanced '{tag}' at {location}")]
    Unbalanced { tag: Tag, location: Location },
}

impl RewriteError {
    pub fn unclosed(opener: &Token) -> Self {
        RewriteError::Unclosed {
            tag: opener.tag,
            location: location_of(opener),
        }
    }

    pub fn unbalanced(token: &Token) -> Self {
        RewriteError::Unbalanced {
            tag: token.tag,
            location: location_of(token),
        }
    }

    pub fn location(&self) -> Location {
        match self {
            RewriteError::Unclosed { location, .. }
            | RewriteError::UnmatchedMappingOpen { location }
            | RewriteError::UnmatchedMappingClose { location }
            | RewriteError::Unbalanced { location, .. } => *location,
        }
    }
}

/// The token's location, or the start of the input for tokens that have none.
pub(crate) fn location_of(token: &Token) -> Location {
    token.location.unwrap_or_default()
}
