//! Token stream loading utilities
//!
//! This module provides `TokenLoader` - a utility for loading a token stream from a file or
//! string, in token notation or JSON, and running transforms on it. This is used by both the
//! CLI and tests.
//!
//! # Example
//!
//! ```rust
//! use brew_rewriter::brew::loader::TokenLoader;
//!
//! // From file, format picked by extension
//! let loader = TokenLoader::from_path("sample.tokens").unwrap();
//! let rewritten = loader.rewrite().unwrap();
//!
//! // From string
//! let tokens = TokenLoader::from_string("f CALL_START a )").tokens().unwrap();
//! ```

use crate::brew::token::{parse_notation, TokenStream};
use crate::brew::transforms::standard::PASS_BY_PASS;
use crate::brew::transforms::{Transform, TransformError};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Error that can occur when loading token streams
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),
}

/// How the loaded text encodes its tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Notation,
    Json,
}

impl InputFormat {
    /// `.json` files hold JSON, anything else is read as notation.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => InputFormat::Json,
            _ => InputFormat::Notation,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            InputFormat::Notation => "notation",
            InputFormat::Json => "json",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "notation" => Ok(InputFormat::Notation),
            "json" => Ok(InputFormat::Json),
            other => Err(format!("unknown input format '{other}'")),
        }
    }
}

/// Token stream loader with transform shortcuts
#[derive(Debug)]
pub struct TokenLoader {
    source: String,
    format: InputFormat,
}

impl TokenLoader {
    /// Load from a file path, picking the format by extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        Ok(TokenLoader {
            source,
            format: InputFormat::from_path(path),
        })
    }

    /// Load notation from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        TokenLoader {
            source: source.into(),
            format: InputFormat::Notation,
        }
    }

    /// Override the input format
    pub fn with_format(mut self, format: InputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self) -> InputFormat {
        self.format
    }

    /// The tokens as written, before any rewriting
    pub fn tokens(&self) -> Result<TokenStream, LoaderError> {
        match self.format {
            InputFormat::Notation => {
                Ok(parse_notation(&self.source).map_err(TransformError::from)?)
            }
            InputFormat::Json => Ok(serde_json::from_str(&self.source)?),
        }
    }

    /// Run a custom transform on the loaded tokens
    ///
    /// This is the generic method that all shortcuts use internally.
    pub fn with<O: 'static>(
        &self,
        transform: &Transform<TokenStream, O>,
    ) -> Result<O, LoaderError> {
        Ok(transform.run(self.tokens()?)?)
    }

    /// Run every rewrite pass and verify balance
    ///
    /// This is a shortcut for `.with(&PASS_BY_PASS)`.
    pub fn rewrite(&self) -> Result<TokenStream, LoaderError> {
        self.with(&*PASS_BY_PASS)
    }

    /// Get the raw source string
    pub fn source(&self) -> &str {
        &self.source
    }
}
