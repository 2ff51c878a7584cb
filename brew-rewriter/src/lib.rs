//! # brew-rewriter
//!
//! The token-stream rewriting core of the brew language.
//!
//! brew source is tokenized by the lexer, rewritten here until every implicit structure is
//! explicit, and handed to the parser. See the [rewriting module](brew::rewriting) for the
//! passes and the order they run in.

pub mod brew;
