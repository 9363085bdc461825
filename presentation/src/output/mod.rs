//! Output formatting for answers

pub mod console;
pub mod formatter;
