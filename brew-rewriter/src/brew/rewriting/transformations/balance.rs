//! Balance verification
//!
//! After the closers are resolved, every pair must nest properly: each closer has to match the
//! most recently opened pair that is still open, whatever its kind. A closer that meets an
//! opener of another kind, a closer with nothing open, or an opener that is never closed is an
//! error.

use crate::brew::rewriting::error::RewriteError;
use crate::brew::token::Token;

/// Check that every opener is closed by its own closer, innermost first.
pub fn ensure_balance(tokens: &[Token]) -> Result<(), RewriteError> {
    let mut open: Vec<&Token> = Vec::new();
    for token in tokens {
        if token.tag.is_expression_start() {
            open.push(token);
        } else if token.tag.is_expression_end() {
            let partner = open.pop().and_then(|opener| opener.tag.inverse());
            if partner != Some(token.tag) {
                return Err(RewriteError::unbalanced(token));
            }
        }
    }
    match open.first() {
        Some(opener) => Err(RewriteError::unbalanced(opener)),
        None => Ok(()),
    }
}
