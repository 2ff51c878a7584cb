//! The token record shared by the lexer, the rewriter and the parser
//!
//!     A token is a tag, the literal text it was read from, an optional source location and a
//!     little provenance: whether the rewriter synthesized it, and from which token. Tokens read
//!     from source always carry a location; synthesized ones start without one and receive it in
//!     the final backfill pass.

use super::location::Location;
use super::tag::Tag;
use serde::{Deserialize, Serialize};

/// Where a token came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Read from source by the lexer.
    #[default]
    Source,
    /// Inserted to close or open an implicit structure.
    Generated,
    /// Inserted as a statement terminator the source left implicit.
    Explicit,
}

impl Provenance {
    pub fn is_source(&self) -> bool {
        matches!(self, Provenance::Source)
    }
}

/// Snapshot of the token whose presence caused a synthesized token to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    pub tag: Tag,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl From<&Token> for Origin {
    fn from(token: &Token) -> Self {
        Origin {
            tag: token.tag,
            value: token.value.clone(),
            location: token.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub tag: Tag,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Provenance::is_source")]
    pub provenance: Provenance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
    /// Block opener synthesized for a `then` clause.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub from_then: bool,
}

impl Token {
    pub fn new(tag: Tag, value: impl Into<String>) -> Self {
        Token {
            tag,
            value: value.into(),
            location: None,
            provenance: Provenance::Source,
            origin: None,
            from_then: false,
        }
    }

    /// A source token carrying the tag's default text.
    pub fn bare(tag: Tag) -> Self {
        Token::new(tag, tag.default_value())
    }

    /// A token inserted to close or open an implicit structure, caused by `cause`.
    pub fn generated(tag: Tag, cause: &Token) -> Self {
        Token {
            provenance: Provenance::Generated,
            origin: Some(Origin::from(cause)),
            ..Token::bare(tag)
        }
    }

    /// A terminator-style token the source left implicit, caused by `cause`.
    pub fn explicit(tag: Tag, cause: &Token) -> Self {
        Token {
            provenance: Provenance::Explicit,
            origin: Some(Origin::from(cause)),
            ..Token::bare(tag)
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }

    pub fn with_from_then(mut self, from_then: bool) -> Self {
        self.from_then = from_then;
        self
    }

    pub fn is_generated(&self) -> bool {
        self.provenance == Provenance::Generated
    }

    pub fn is_explicit(&self) -> bool {
        self.provenance == Provenance::Explicit
    }

    /// Generated or explicit: anything the rewriter put there.
    pub fn is_synthesized(&self) -> bool {
        !self.provenance.is_source()
    }

    pub fn is(&self, tag: Tag) -> bool {
        self.tag == tag
    }
}

/// The unit every pass reads and rewrites in place.
pub type TokenStream = Vec<Token>;
