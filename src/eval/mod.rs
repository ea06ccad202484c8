//! Position evaluation for the minimax search

pub mod heuristic;

// Re-exports
pub use heuristic::{evaluate, INF, WEIGHTS};
