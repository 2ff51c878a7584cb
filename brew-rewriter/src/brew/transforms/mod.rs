//! Transform pipeline infrastructure
//!
//! A composable, type-safe way of chaining processing stages. Any stage can be chained with
//! another if their types line up, so the CLI, the loader and tests all build the pipelines
//! they need out of the same pieces.
//!
//! Stages implement [`Runnable`]; [`Transform`] strings them together:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(NotationTokenization::new())   // String → TokenStream
//!     .then(FullRewrite::new());           // TokenStream → TokenStream
//! ```
//!
//! The chains the loader and the CLI share live in [`standard`] as `Lazy` statics; the
//! stages themselves (notation tokenization, single passes, full rewrite, balance check) are in
//! [`stages`].

pub mod stages;
pub mod standard;

use crate::brew::rewriting::RewriteError;
use crate::brew::token::NotationError;

/// Error that can occur during transformation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    /// Generic error with message
    #[error("{0}")]
    Error(String),
    /// Notation text could not be read
    #[error("Stage 'notation' failed: {0}")]
    Notation(#[from] NotationError),
    /// A rewrite stage failed
    #[error("Stage '{stage}' failed: {source}")]
    Rewrite {
        stage: String,
        #[source]
        source: RewriteError,
    },
}

impl TransformError {
    pub fn rewrite(stage: impl Into<String>, source: RewriteError) -> Self {
        TransformError::Rewrite {
            stage: stage.into(),
            source,
        }
    }
}

impl From<String> for TransformError {
    fn from(s: String) -> Self {
        TransformError::Error(s)
    }
}

impl From<&str> for TransformError {
    fn from(s: &str) -> Self {
        TransformError::Error(s.to_string())
    }
}

/// One processing step over a token stream or its text.
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// Boxed chain of stages from `I` to `O`. Each link hands its output to the next one, so
/// a chain only extends with a stage whose input is this chain's output.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Append a stage.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        self.chain(move |value| stage.run(value))
    }

    /// Append one of the shared chains from [`standard`].
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        self.chain(move |value| next.run(value))
    }

    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }

    fn chain<O2, F>(self, next: F) -> Transform<I, O2>
    where
        F: Fn(O) -> Result<O2, TransformError> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let first = self.run_fn;
        Transform::from_fn(move |input| first(input).and_then(&next))
    }
}

// Transforms can be used as stages of other transforms
impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}
