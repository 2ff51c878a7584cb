//! Testing utilities
//!
//!     Hand-writing token streams in test bodies is how tests end up asserting against
//!     streams no lexer would ever produce. Streams worth testing against live as sample files
//!     under `samples/` at the workspace root, each a pair:
//!
//!         NN-name.tokens      the lexer's output, in token notation
//!         NN-name.expected    the rewritten stream, in token notation
//!
//!     Samples are addressed by their number prefix, which may be written `1-`, `01-` or
//!     `001-`. Two files resolving to the same number is an error.
//!
//!     ```rust,ignore
//!     use brew_rewriter::brew::testing::Samples;
//!
//!     let sample = Samples::get(3).unwrap();
//!     let rewritten = sample.loader().unwrap().rewrite().unwrap();
//!     assert_eq!(to_notation(&rewritten), sample.expected().unwrap());
//!     ```
//!
//!     Token factories for unit tests live in [`token::testing`](crate::brew::token::testing).

use crate::brew::loader::TokenLoader;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const SAMPLES_ROOT: &str = "samples";
const INPUT_EXTENSION: &str = "tokens";
const EXPECTED_EXTENSION: &str = "expected";

/// Resolve a path relative to the workspace root
pub fn workspace_path(relative_path: &str) -> PathBuf {
    // CARGO_MANIFEST_DIR points to brew-rewriter/, the workspace is one level up
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .join(relative_path)
}

#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error("no sample numbered {0}")]
    NotFound(usize),
    #[error("samples {first} and {second} share the same number")]
    DuplicateNumber { first: String, second: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One input/expected pair
#[derive(Debug, Clone)]
pub struct Sample {
    pub number: usize,
    pub name: String,
    pub input: PathBuf,
}

impl Sample {
    pub fn source(&self) -> Result<String, SampleError> {
        Ok(fs::read_to_string(&self.input)?)
    }

    /// The expected rewrite, trimmed of surrounding whitespace
    pub fn expected(&self) -> Result<String, SampleError> {
        let path = self.input.with_extension(EXPECTED_EXTENSION);
        Ok(fs::read_to_string(path)?.trim().to_string())
    }

    pub fn loader(&self) -> Result<TokenLoader, SampleError> {
        Ok(TokenLoader::from_string(self.source()?))
    }
}

/// Access to the sample library
pub struct Samples;

impl Samples {
    pub fn root() -> PathBuf {
        workspace_path(SAMPLES_ROOT)
    }

    /// Every sample, ordered by number
    pub fn all() -> Result<Vec<Sample>, SampleError> {
        let mut by_number: BTreeMap<usize, Sample> = BTreeMap::new();
        for entry in fs::read_dir(Self::root())? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(INPUT_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let Some((prefix, name)) = stem.split_once('-') else {
                continue;
            };
            let Ok(number) = prefix.parse::<usize>() else {
                continue;
            };
            let sample = Sample {
                number,
                name: name.to_string(),
                input: path.clone(),
            };
            if let Some(existing) = by_number.insert(number, sample) {
                return Err(SampleError::DuplicateNumber {
                    first: existing.input.display().to_string(),
                    second: path.display().to_string(),
                });
            }
        }
        Ok(by_number.into_values().collect())
    }

    pub fn get(number: usize) -> Result<Sample, SampleError> {
        Self::all()?
            .into_iter()
            .find(|sample| sample.number == number)
            .ok_or(SampleError::NotFound(number))
    }
}
