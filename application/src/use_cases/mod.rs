//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod ask_scripture;
pub mod compare;
pub mod fetch_verses;
pub mod resolve_verses;
pub mod summarize;

#[cfg(test)]
pub(crate) mod test_support;
