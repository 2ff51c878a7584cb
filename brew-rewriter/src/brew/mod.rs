//! The brew token rewriter
//!
//! - [`token`]: the token record, tags, classification tables, notation and renderers
//! - [`rewriting`]: the rewrite passes and the machinery they share
//! - [`transforms`]: composable stages and pre-built pipelines
//! - [`loader`]: loading token streams from files or strings
//! - [`testing`]: sample files for tests

pub mod loader;
pub mod rewriting;
pub mod testing;
pub mod token;
pub mod transforms;
