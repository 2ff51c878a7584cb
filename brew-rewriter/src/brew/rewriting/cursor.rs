//! Cursor scan engine
//!
//!     Every pass walks the stream front to back while inserting and removing tokens around the
//!     cursor. Rather than each pass juggling its own index, the visit callback reports how far
//!     the cursor should move: 1 to go on to the next token, 2 or more to jump over tokens it
//!     just inserted, 0 to look again at the same position after removing the token that was
//!     there. Negative steps revisit earlier positions (clamped at the start of the stream).
//!
//!     The scan ends as soon as the cursor is past the end of the stream, so inserting at the end
//!     of the stream extends the scan and removing shortens it.

use super::error::RewriteError;
use crate::brew::token::TokenStream;

/// Signed cursor movement returned by a visit.
pub type Step = isize;

/// Visit every position of `tokens`, moving by whatever step each visit returns.
///
/// The first error returned by a visit aborts the scan.
pub fn scan_tokens<F>(tokens: &mut TokenStream, mut visit: F) -> Result<(), RewriteError>
where
    F: FnMut(&mut TokenStream, usize) -> Result<Step, RewriteError>,
{
    let mut index = 0usize;
    while index < tokens.len() {
        let step = visit(tokens, index)?;
        index = index.checked_add_signed(step).unwrap_or(0);
    }
    Ok(())
}
