pub mod change_set;
pub mod cli;
pub mod config;
pub mod graph;
pub mod model;
pub mod report;
pub mod rule;
pub mod task;
pub mod traversal;

mod api;

pub use api::{GavRelease, GavReleaseBuilder, ReleaseError};
