//! Search algorithms: minimax with alpha-beta pruning

pub mod alphabeta;

// Re-exports
pub use alphabeta::{SearchResult, Searcher};
