//! Prompt domain
//!
//! Templates for every model call in the scripture query pipeline.

mod template;

pub use template::{NO_VERSES_PLACEHOLDER, PromptTemplate};
