//! Query pipeline stages

pub mod stage;

pub use stage::Stage;
