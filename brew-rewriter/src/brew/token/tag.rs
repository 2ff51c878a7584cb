//! Token tags
//!
//!     The lexer hands the rewriter a flat stream of tagged tokens. Tags form a closed set: every
//!     structural decision the rewriter makes is a lookup on the tag, never on the text. Each tag
//!     has one canonical name which is used by every textual format (JSON, token notation,
//!     diagnostics). Punctuation tags are named by their symbol (`(`, `->`, `{`), everything else
//!     by an upper-case word (`INDENT`, `CALL_START`, `POST_IF`).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The closed set of token tags the rewriter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Tag {
    // Balanced pairs
    ParenStart,
    ParenEnd,
    BracketStart,
    BracketEnd,
    Indent,
    Outdent,
    MappingStart,
    MappingEnd,
    CallStart,
    CallEnd,
    ParamStart,
    ParamEnd,
    IndexStart,
    IndexEnd,
    StringStart,
    StringEnd,
    RegexStart,
    RegexEnd,

    Terminator,

    // Keywords
    If,
    Unless,
    PostIf,
    PostUnless,
    Else,
    Then,
    Try,
    Catch,
    Finally,
    Class,
    Extends,
    When,
    LeadingWhen,
    Switch,
    For,
    While,
    Return,

    // Literals
    Identifier,
    Number,
    StringLiteral,
    RegexLiteral,
    Bool,
    Null,

    // Punctuation
    Arrow,
    BoundArrow,
    Colon,
    Comma,

    // Operators
    Assign,
    CompoundAssign,
    Math,
    Plus,
    Minus,
    Compare,
    Logic,
    Shift,
    Relation,
    Unary,
    Dot,
    SoakDot,
    Prototype,
    Existence,
}

/// Every tag, in declaration order.
pub const ALL_TAGS: &[Tag] = &[
    Tag::ParenStart,
    Tag::ParenEnd,
    Tag::BracketStart,
    Tag::BracketEnd,
    Tag::Indent,
    Tag::Outdent,
    Tag::MappingStart,
    Tag::MappingEnd,
    Tag::CallStart,
    Tag::CallEnd,
    Tag::ParamStart,
    Tag::ParamEnd,
    Tag::IndexStart,
    Tag::IndexEnd,
    Tag::StringStart,
    Tag::StringEnd,
    Tag::RegexStart,
    Tag::RegexEnd,
    Tag::Terminator,
    Tag::If,
    Tag::Unless,
    Tag::PostIf,
    Tag::PostUnless,
    Tag::Else,
    Tag::Then,
    Tag::Try,
    Tag::Catch,
    Tag::Finally,
    Tag::Class,
    Tag::Extends,
    Tag::When,
    Tag::LeadingWhen,
    Tag::Switch,
    Tag::For,
    Tag::While,
    Tag::Return,
    Tag::Identifier,
    Tag::Number,
    Tag::StringLiteral,
    Tag::RegexLiteral,
    Tag::Bool,
    Tag::Null,
    Tag::Arrow,
    Tag::BoundArrow,
    Tag::Colon,
    Tag::Comma,
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

static BY_NAME: Lazy<HashMap<&'static str, Tag>> =
    Lazy::new(|| ALL_TAGS.iter().map(|tag| (tag.name(), *tag)).collect());

static KEYWORDS: Lazy<HashMap<&'static str, Tag>> = Lazy::new(|| {
    HashMap::from([
        ("if", Tag::If),
        ("unless", Tag::Unless),
        ("else", Tag::Else),
        ("then", Tag::Then),
        ("try", Tag::Try),
        ("catch", Tag::Catch),
        ("finally", Tag::Finally),
        ("class", Tag::Class),
        ("extends", Tag::Extends),
        ("when", Tag::When),
        ("switch", Tag::Switch),
        ("for", Tag::For),
        ("while", Tag::While),
        ("return", Tag::Return),
        ("true", Tag::Bool),
        ("false", Tag::Bool),
        ("null", Tag::Null),
    ])
});

impl Tag {
    /// Canonical name, as used by JSON, notation and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Tag::ParenStart => "(",
            Tag::ParenEnd => ")",
            Tag::BracketStart => "[",
            Tag::BracketEnd => "]",
            Tag::Indent => "INDENT",
            Tag::Outdent => "OUTDENT",
            Tag::MappingStart => "{",
            Tag::MappingEnd => "}",
            Tag::CallStart => "CALL_START",
            Tag::CallEnd => "CALL_END",
            Tag::ParamStart => "PARAM_START",
            Tag::ParamEnd => "PARAM_END",
            Tag::IndexStart => "INDEX_START",
            Tag::IndexEnd => "INDEX_END",
            Tag::StringStart => "STRING_START",
            Tag::StringEnd => "STRING_END",
            Tag::RegexStart => "REGEX_START",
            Tag::RegexEnd => "REGEX_END",
            Tag::Terminator => "TERMINATOR",
            Tag::If => "IF",
            Tag::Unless => "UNLESS",
            Tag::PostIf => "POST_IF",
            Tag::PostUnless => "POST_UNLESS",
            Tag::Else => "ELSE",
            Tag::Then => "THEN",
            Tag::Try => "TRY",
            Tag::Catch => "CATCH",
            Tag::Finally => "FINALLY",
            Tag::Class => "CLASS",
            Tag::Extends => "EXTENDS",
            Tag::When => "WHEN",
            Tag::LeadingWhen => "LEADING_WHEN",
            Tag::Switch => "SWITCH",
            Tag::For => "FOR",
            Tag::While => "WHILE",
            Tag::Return => "RETURN",
            Tag::Identifier => "IDENTIFIER",
            Tag::Number => "NUMBER",
            Tag::StringLiteral => "STRING",
            Tag::RegexLiteral => "REGEX",
            Tag::Bool => "BOOL",
            Tag::Null => "NULL",
            Tag::Arrow => "->",
            Tag::BoundArrow => "=>",
            Tag::Colon => ":",
            Tag::Comma => ",",
            Tag::Assign => "=",
            Tag::CompoundAssign => "COMPOUND_ASSIGN",
            Tag::Math => "MATH",
            Tag::Plus => "+",
            Tag::Minus => "-",
            Tag::Compare => "COMPARE",
            Tag::Logic => "LOGIC",
            Tag::Shift => "SHIFT",
            Tag::Relation => "RELATION",
            Tag::Unary => "UNARY",
            Tag::Dot => ".",
            Tag::SoakDot => "?.",
            Tag::Prototype => "::",
            Tag::Existence => "?",
        }
    }

    /// Look a tag up by its canonical name.
    pub fn from_name(name: &str) -> Option<Tag> {
        BY_NAME.get(name).copied()
    }

    /// Look a tag up by the lower-case keyword the lexer would have read.
    pub fn from_keyword(word: &str) -> Option<Tag> {
        KEYWORDS.get(word).copied()
    }

    /// The text a token of this tag carries when nothing more specific is known.
    ///
    /// Synthesized tokens are created with this value.
    pub fn default_value(self) -> &'static str {
        match self {
            Tag::ParenStart | Tag::CallStart | Tag::ParamStart => "(",
            Tag::ParenEnd | Tag::CallEnd | Tag::ParamEnd => ")",
            Tag::BracketStart | Tag::IndexStart => "[",
            Tag::BracketEnd | Tag::IndexEnd => "]",
            Tag::MappingStart => "{",
            Tag::MappingEnd => "}",
            Tag::Terminator => "\n",
            Tag::If | Tag::PostIf => "if",
            Tag::Unless | Tag::PostUnless => "unless",
            Tag::Else => "else",
            Tag::Then => "then",
            Tag::Try => "try",
            Tag::Catch => "catch",
            Tag::Finally => "finally",
            Tag::Class => "class",
            Tag::Extends => "extends",
            Tag::When | Tag::LeadingWhen => "when",
            Tag::Switch => "switch",
            Tag::For => "for",
            Tag::While => "while",
            Tag::Return => "return",
            Tag::Null => "null",
            Tag::Arrow => "->",
            Tag::BoundArrow => "=>",
            Tag::Colon => ":",
            Tag::Comma => ",",
            Tag::Assign => "=",
            Tag::Plus => "+",
            Tag::Minus => "-",
            Tag::Dot => ".",
            Tag::SoakDot => "?.",
            Tag::Prototype => "::",
            Tag::Existence => "?",
            _ => "",
        }
    }

    /// Whether the canonical name is punctuation rather than an upper-case word.
    pub fn is_symbolic(self) -> bool {
        !self.name().starts_with(|c: char| c.is_ascii_uppercase())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string is not the canonical name of any tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token tag '{0}'")]
pub struct UnknownTag(pub String);

impl FromStr for Tag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::from_name(s).ok_or_else(|| UnknownTag(s.to_string()))
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.name().to_string()
    }
}

impl TryFrom<String> for Tag {
    type Error = UnknownTag;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
