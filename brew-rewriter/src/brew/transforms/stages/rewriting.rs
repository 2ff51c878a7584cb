//! Rewrite stages
//!
//! [`RewritePass`] runs a single pass, [`FullRewrite`] runs a configured [`Rewriter`].

use crate::brew::rewriting::{Pass, Rewriter};
use crate::brew::token::TokenStream;
use crate::brew::transforms::{Runnable, TransformError};

/// A single rewrite pass as a stage
///
/// # Input
/// - `TokenStream` - tokens the earlier passes have already rewritten
///
/// # Output
/// - `TokenStream` - the same tokens with this pass applied
pub struct RewritePass {
    pass: Pass,
}

impl RewritePass {
    pub fn new(pass: Pass) -> Self {
        RewritePass { pass }
    }
}

impl Runnable<TokenStream, TokenStream> for RewritePass {
    fn run(&self, mut input: TokenStream) -> Result<TokenStream, TransformError> {
        self.pass
            .apply(&mut input)
            .map_err(|e| TransformError::rewrite(self.pass.name(), e))?;
        Ok(input)
    }
}

/// All rewrite passes as one stage
pub struct FullRewrite {
    rewriter: Rewriter,
}

impl FullRewrite {
    pub fn new() -> Self {
        FullRewrite {
            rewriter: Rewriter::new(),
        }
    }

    pub fn with_rewriter(rewriter: Rewriter) -> Self {
        FullRewrite { rewriter }
    }
}

impl Default for FullRewrite {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<TokenStream, TokenStream> for FullRewrite {
    fn run(&self, mut input: TokenStream) -> Result<TokenStream, TransformError> {
        self.rewriter
            .run(&mut input)
            .map_err(|e| TransformError::rewrite("rewrite", e))?;
        Ok(input)
    }
}
