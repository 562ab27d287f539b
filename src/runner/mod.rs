//! Check execution orchestration and dependency gating.

pub mod graph;
pub mod scheduler;

pub use graph::DependencyGraph;
pub use scheduler::{CheckRunner, RunReport};
