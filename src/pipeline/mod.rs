// Pipelines — orchestrate the core into complete user-facing operations.

pub mod analysis;
