//! Structural classification tables
//!
//!     Every pass decides what to do by asking which structural class a tag belongs to. The
//!     tables are built once and never change, so they are plain statics shared by every pass.
//!
//!     The lexer tags every brace as a generic block marker (`INDENT` with value `{`, `OUTDENT`
//!     with value `}`); only the mapping pass decides which of them are mapping literals. For
//!     brace matching purposes, any `INDENT` or `{` opens a brace and any `OUTDENT` or `}`
//!     closes one.

use super::tag::Tag;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Opener/closer pairs whose nesting the scanners track.
pub const BALANCED_PAIRS: &[(Tag, Tag)] = &[
    (Tag::ParenStart, Tag::ParenEnd),
    (Tag::BracketStart, Tag::BracketEnd),
    (Tag::Indent, Tag::Outdent),
    (Tag::MappingStart, Tag::MappingEnd),
    (Tag::CallStart, Tag::CallEnd),
    (Tag::ParamStart, Tag::ParamEnd),
    (Tag::IndexStart, Tag::IndexEnd),
    (Tag::StringStart, Tag::StringEnd),
    (Tag::RegexStart, Tag::RegexEnd),
];

/// Each pair member mapped to its counterpart.
pub static INVERSES: Lazy<HashMap<Tag, Tag>> = Lazy::new(|| {
    BALANCED_PAIRS
        .iter()
        .flat_map(|&(open, close)| [(open, close), (close, open)])
        .collect()
});

pub static EXPRESSION_START: Lazy<HashSet<Tag>> =
    Lazy::new(|| BALANCED_PAIRS.iter().map(|&(open, _)| open).collect());

pub static EXPRESSION_END: Lazy<HashSet<Tag>> =
    Lazy::new(|| BALANCED_PAIRS.iter().map(|&(_, close)| close).collect());

/// Tags that may be followed by a one-line body the lexer wrapped in a block.
pub const SINGLE_LINERS: &[Tag] = &[
    Tag::Else,
    Tag::Arrow,
    Tag::BoundArrow,
    Tag::Try,
    Tag::Finally,
    Tag::Then,
];

/// Tags that end a single-line body.
pub const SINGLE_CLOSERS: &[Tag] = &[
    Tag::Terminator,
    Tag::Catch,
    Tag::Finally,
    Tag::Else,
    Tag::Outdent,
    Tag::LeadingWhen,
];

/// Binary and unary operators; an outdent followed by one of these continues the expression.
pub const OPERATORS: &[Tag] = &[
    Tag::Assign,
    Tag::CompoundAssign,
    Tag::Math,
    Tag::Plus,
    Tag::Minus,
    Tag::Compare,
    Tag::Logic,
    Tag::Shift,
    Tag::Relation,
    Tag::Unary,
    Tag::Dot,
    Tag::SoakDot,
    Tag::Prototype,
    Tag::Existence,
];

/// Tags after which an outdent must not be followed by a synthesized terminator.
pub static BLOCK_NO_TERM: Lazy<HashSet<Tag>> = Lazy::new(|| {
    EXPRESSION_END
        .iter()
        .copied()
        .filter(|&tag| tag != Tag::Outdent)
        .chain(std::iter::once(Tag::Comma))
        .chain(OPERATORS.iter().copied())
        .collect()
});

impl Tag {
    pub fn is_expression_start(self) -> bool {
        EXPRESSION_START.contains(&self)
    }

    pub fn is_expression_end(self) -> bool {
        EXPRESSION_END.contains(&self)
    }

    /// The other member of this tag's balanced pair.
    pub fn inverse(self) -> Option<Tag> {
        INVERSES.get(&self).copied()
    }

    pub fn is_single_liner(self) -> bool {
        SINGLE_LINERS.contains(&self)
    }

    pub fn is_single_closer(self) -> bool {
        SINGLE_CLOSERS.contains(&self)
    }

    pub fn suppresses_terminator(self) -> bool {
        BLOCK_NO_TERM.contains(&self)
    }

    /// Generic block opener or mapping opener.
    pub fn is_open_brace(self) -> bool {
        matches!(self, Tag::Indent | Tag::MappingStart)
    }

    /// Generic block closer or mapping closer.
    pub fn is_close_brace(self) -> bool {
        matches!(self, Tag::Outdent | Tag::MappingEnd)
    }
}
