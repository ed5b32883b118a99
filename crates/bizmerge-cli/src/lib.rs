//! CLI library components for bizmerge.

pub mod logging;
pub mod pipeline;
