//! Individual transformation stages
//!
//! Each stage wraps one step of token processing in the [`Runnable`](super::Runnable)
//! interface so it can be chained into a [`Transform`](super::Transform).

pub mod balance;
pub mod rewriting;
pub mod tokenization;

pub use balance::BalanceCheck;
pub use rewriting::{FullRewrite, RewritePass};
pub use tokenization::NotationTokenization;
