//! Notation tokenization stage
//!
//! Reads token notation text into a token stream.

use crate::brew::token::{parse_notation, TokenStream};
use crate::brew::transforms::{Runnable, TransformError};

/// Notation tokenization stage
///
/// # Input
/// - `String` - token notation text
///
/// # Output
/// - `TokenStream` - the tokens, located by their position in the text
pub struct NotationTokenization;

impl NotationTokenization {
    pub fn new() -> Self {
        NotationTokenization
    }
}

impl Default for NotationTokenization {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, TokenStream> for NotationTokenization {
    fn run(&self, input: String) -> Result<TokenStream, TransformError> {
        Ok(parse_notation(&input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brew::token::testing::tags_of;
    use crate::brew::token::Tag;

    #[test]
    fn test_reads_notation() {
        let tokens = NotationTokenization::new()
            .run("f CALL_START a )".to_string())
            .unwrap();
        assert_eq!(
            tags_of(&tokens),
            vec![Tag::Identifier, Tag::CallStart, Tag::Identifier, Tag::ParenEnd]
        );
    }

    #[test]
    fn test_notation_errors_are_wrapped() {
        let err = NotationTokenization::new()
            .run("f BOGUS".to_string())
            .unwrap_err();
        assert!(matches!(err, TransformError::Notation(_)));
    }
}
