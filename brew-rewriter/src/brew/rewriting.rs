//! Rewriter
//!
//!     The lexer produces a token stream that still leaves a lot of structure implicit: calls
//!     and indexes are only marked where they open, blocks may end without ending their
//!     statement, braces may be blocks or mapping literals, and `if` reads the same leading a
//!     statement as trailing it. The grammar has no room for any of that, so before parsing the
//!     stream is rewritten until every one of these is explicit.
//!
//!     Rewriting runs a fixed sequence of passes over the stream in place. Each pass assumes
//!     the ones before it have run, and leaves the stream well-formed for the ones after it:
//!
//!         1. Leading newlines. See [leading_newlines](transformations::leading_newlines).
//!         2. Call closing. See [implicit_closers](transformations::implicit_closers).
//!         3. Index closing. Same module, same algorithm, with brackets.
//!         4. Postfix conditionals. See
//!            [postfix_conditionals](transformations::postfix_conditionals).
//!         5. Mapping literals and class bodies. See
//!            [mapping_literals](transformations::mapping_literals).
//!         6. Terminators after implicit block ends. See
//!            [implicit_terminators](transformations::implicit_terminators).
//!         7. Locations for every synthesized token. See
//!            [location_backfill](transformations::location_backfill).
//!
//!     After a full run the stream is checked for balance: every opener has its closer.
//!
//! Scanning
//!
//!     Passes share two pieces of machinery: the [cursor](cursor) that walks the stream while
//!     the pass edits it, and the [region scanner](region) that finds where a nested construct
//!     ends, explicitly or implicitly.
//!
//!     Rewriting a stream that has already been rewritten leaves it unchanged.

pub mod cursor;
pub mod error;
pub mod region;
pub mod transformations;

pub use error::RewriteError;

use crate::brew::token::TokenStream;
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use transformations::{
    add_implicit_terminators, add_locations_to_generated_tokens, close_open_calls,
    close_open_indexes, ensure_balance, remove_leading_newlines, tag_mapping_literals,
    tag_postfix_conditionals,
};

/// One rewrite pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    LeadingNewlines,
    CloseCalls,
    CloseIndexes,
    PostfixConditionals,
    MappingLiterals,
    Terminators,
    LocationBackfill,
}

impl Pass {
    /// Every pass, in the order they run.
    pub const ORDER: [Pass; 7] = [
        Pass::LeadingNewlines,
        Pass::CloseCalls,
        Pass::CloseIndexes,
        Pass::PostfixConditionals,
        Pass::MappingLiterals,
        Pass::Terminators,
        Pass::LocationBackfill,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pass::LeadingNewlines => "leading-newlines",
            Pass::CloseCalls => "close-calls",
            Pass::CloseIndexes => "close-indexes",
            Pass::PostfixConditionals => "postfix-conditionals",
            Pass::MappingLiterals => "mapping-literals",
            Pass::Terminators => "terminators",
            Pass::LocationBackfill => "location-backfill",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Pass::LeadingNewlines => "Drop terminators before the first statement",
            Pass::CloseCalls => "Retag or insert CALL_END for every CALL_START",
            Pass::CloseIndexes => "Retag or insert INDEX_END for every INDEX_START",
            Pass::PostfixConditionals => "Tag trailing if/unless as POST_IF/POST_UNLESS",
            Pass::MappingLiterals => "Retag braces around key: value pairs, wrap class bodies",
            Pass::Terminators => "Insert TERMINATOR after block ends that end a statement",
            Pass::LocationBackfill => "Give every synthesized token a location",
        }
    }

    pub fn from_name(name: &str) -> Option<Pass> {
        Pass::ORDER.into_iter().find(|pass| pass.name() == name)
    }

    /// Run this pass over `tokens` in place.
    pub fn apply(self, tokens: &mut TokenStream) -> Result<(), RewriteError> {
        match self {
            Pass::LeadingNewlines => {
                remove_leading_newlines(tokens);
                Ok(())
            }
            Pass::CloseCalls => close_open_calls(tokens),
            Pass::CloseIndexes => close_open_indexes(tokens),
            Pass::PostfixConditionals => tag_postfix_conditionals(tokens),
            Pass::MappingLiterals => tag_mapping_literals(tokens),
            Pass::Terminators => add_implicit_terminators(tokens),
            Pass::LocationBackfill => {
                add_locations_to_generated_tokens(tokens);
                Ok(())
            }
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rewrite pass '{0}'")]
pub struct UnknownPass(pub String);

impl FromStr for Pass {
    type Err = UnknownPass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pass::from_name(s).ok_or_else(|| UnknownPass(s.to_string()))
    }
}

/// Runs the passes in order, optionally stopping early
///
/// Stopping after a given pass leaves the stream as that pass left it, which is the easiest
/// way to see what a single pass does. Balance is only verified after a full run, since the
/// closers are not all in place before that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rewriter {
    stop_after: Option<Pass>,
    verify_balance: bool,
}

impl Rewriter {
    pub fn new() -> Self {
        Rewriter {
            stop_after: None,
            verify_balance: true,
        }
    }

    /// Run passes up to and including `pass` only.
    pub fn stop_after(mut self, pass: Pass) -> Self {
        self.stop_after = Some(pass);
        self
    }

    pub fn verify_balance(mut self, verify: bool) -> Self {
        self.verify_balance = verify;
        self
    }

    /// The passes this rewriter runs, in order.
    pub fn passes(&self) -> Vec<Pass> {
        match self.stop_after {
            Some(last) => {
                let count = Pass::ORDER
                    .iter()
                    .position(|pass| *pass == last)
                    .map_or(Pass::ORDER.len(), |index| index + 1);
                Pass::ORDER[..count].to_vec()
            }
            None => Pass::ORDER.to_vec(),
        }
    }

    pub fn run(&self, tokens: &mut TokenStream) -> Result<(), RewriteError> {
        let passes = self.passes();
        for pass in &passes {
            debug!(pass = pass.name(), tokens = tokens.len(), "running rewrite pass");
            pass.apply(tokens)?;
        }
        if self.verify_balance && passes.len() == Pass::ORDER.len() {
            ensure_balance(tokens)?;
        }
        debug!(tokens = tokens.len(), "rewrite complete");
        Ok(())
    }
}

impl Default for Rewriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Run every pass over `tokens` and verify the result is balanced.
pub fn rewrite(tokens: &mut TokenStream) -> Result<(), RewriteError> {
    Rewriter::new().run(tokens)
}
