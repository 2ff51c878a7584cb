//! Standard transform definitions
//!
//! Pre-built transforms for common use cases, defined as statics with
//! `once_cell::sync::Lazy`.

use crate::brew::rewriting::Pass;
use crate::brew::token::TokenStream;
use crate::brew::transforms::stages::{BalanceCheck, FullRewrite, NotationTokenization, RewritePass};
use crate::brew::transforms::Transform;
use once_cell::sync::Lazy;

/// Type alias for transforms that read notation text
pub type NotationTransform = Transform<String, TokenStream>;

/// Type alias for transforms over token streams
pub type TokenTransform = Transform<TokenStream, TokenStream>;

/// Notation tokenization: String → TokenStream
pub static NOTATION_TOKENIZATION: Lazy<NotationTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(NotationTokenization::new()));

/// Full rewrite: TokenStream → TokenStream
///
/// Every pass in order, then balance verification.
pub static REWRITE: Lazy<TokenTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(FullRewrite::new()));

/// Full rewrite with one stage per pass: TokenStream → TokenStream
///
/// Same result as [`REWRITE`], but a failure names the pass it happened in.
pub static PASS_BY_PASS: Lazy<TokenTransform> = Lazy::new(|| {
    Pass::ORDER
        .into_iter()
        .fold(
            Transform::<TokenStream, TokenStream>::from_fn(Ok),
            |transform, pass| transform.then(RewritePass::new(pass)),
        )
        .then(BalanceCheck::new())
});

/// Notation to rewritten tokens: String → TokenStream
pub static NOTATION_TO_REWRITTEN: Lazy<NotationTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(NotationTokenization::new())
        .then_transform(&*PASS_BY_PASS)
});
