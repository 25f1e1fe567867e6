//! Normalization and parent/child resolution

pub mod hierarchy;
pub mod normalizer;

pub use hierarchy::{assign_child_counts, ChildIndex};
pub use normalizer::normalize_records;
