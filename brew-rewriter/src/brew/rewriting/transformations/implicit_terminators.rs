//! Terminator insertion after implicit block ends
//!
//!     A dedent ends a block, and usually the statement that owned it:
//!
//!         run ->
//!           work()
//!         next()
//!
//!     The lexer emits `OUTDENT` but no `TERMINATOR` between the block and `next`, so one is
//!     inserted after every `OUTDENT` unless the token after it continues the construct: another
//!     single-line closer (`else`, `catch`, another `OUTDENT`, ...) or anything in
//!     `BLOCK_NO_TERM` (a closer, a comma, an operator).

use crate::brew::rewriting::cursor::scan_tokens;
use crate::brew::rewriting::error::RewriteError;
use crate::brew::token::{Tag, Token, TokenStream};

/// Insert an explicit `TERMINATOR` after every `OUTDENT` that ends a statement.
pub fn add_implicit_terminators(tokens: &mut TokenStream) -> Result<(), RewriteError> {
    scan_tokens(tokens, |tokens, i| {
        if !tokens[i].is(Tag::Outdent) {
            return Ok(1);
        }
        match tokens.get(i + 1) {
            Some(next) if !continues_block(next) => {
                let terminator = Token::explicit(Tag::Terminator, &tokens[i]);
                tokens.insert(i + 1, terminator);
                Ok(2)
            }
            _ => Ok(1),
        }
    })
}

fn continues_block(next: &Token) -> bool {
    next.tag.is_single_closer() || next.tag.suppresses_terminator()
}
