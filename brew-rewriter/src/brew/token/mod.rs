//! Core token types and helpers shared across the rewriter, the loader and tooling.

pub mod classification;
pub mod core;
pub mod formatting;
pub mod location;
pub mod notation;
pub mod tag;
pub mod testing;

pub use self::core::{Origin, Provenance, Token, TokenStream};
pub use formatting::{to_json, to_notation, to_tag_line, ToNotation};
pub use location::{Location, Position};
pub use notation::{parse_notation, NotationError};
pub use tag::{Tag, UnknownTag};
