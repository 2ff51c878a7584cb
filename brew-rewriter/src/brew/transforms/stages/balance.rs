//! Balance check stage
//!
//! Passes the stream through unchanged if every opener has its closer.

use crate::brew::rewriting::transformations::ensure_balance;
use crate::brew::token::TokenStream;
use crate::brew::transforms::{Runnable, TransformError};

pub struct BalanceCheck;

impl BalanceCheck {
    pub fn new() -> Self {
        BalanceCheck
    }
}

impl Default for BalanceCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<TokenStream, TokenStream> for BalanceCheck {
    fn run(&self, input: TokenStream) -> Result<TokenStream, TransformError> {
        ensure_balance(&input).map_err(|e| TransformError::rewrite("balance", e))?;
        Ok(input)
    }
}
