//! Filters for [`postagger::Sentence`].

mod heuristic_cascade;

pub use heuristic_cascade::HeuristicCascade;
