//! Scripture subdomain: which corpus a request targets and the verse
//! records those corpora are made of.

pub mod partition;
pub mod source;
pub mod verse;
