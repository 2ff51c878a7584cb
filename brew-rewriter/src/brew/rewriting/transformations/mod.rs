//! The rewrite passes, one module per pass, plus balance verification.
//!
//! Each pass rewrites the stream in place and leaves it well-formed for the passes after it.
//! They run in the order listed in [`Pass::ORDER`](super::Pass::ORDER).

pub mod balance;
pub mod implicit_closers;
pub mod implicit_terminators;
pub mod leading_newlines;
pub mod location_backfill;
pub mod mapping_literals;
pub mod postfix_conditionals;

pub use balance::ensure_balance;
pub use implicit_closers::{close_open_calls, close_open_indexes};
pub use implicit_terminators::add_implicit_terminators;
pub use leading_newlines::remove_leading_newlines;
pub use location_backfill::add_locations_to_generated_tokens;
pub use mapping_literals::tag_mapping_literals;
pub use postfix_conditionals::tag_postfix_conditionals;
