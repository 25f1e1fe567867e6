//! Parent/child resolution over a flat record list
//!
//! A record's children are the records whose `(parent_type, parent_name)`
//! equals its own `(record_type, name)`, with the type compared
//! case-insensitively and the name compared exactly. The index is built once
//! per import so counting and report traversal are lookups instead of scans.

use crate::types::{casefold, Record};
use std::collections::HashMap;
use tracing::debug;

/// Children of every parent link, as indices into the record slice, in load order.
///
/// Keyed by folded parent type, then by exact parent name, so lookups borrow.
#[derive(Debug, Default)]
pub struct ChildIndex {
    children: HashMap<String, HashMap<String, Vec<usize>>>,
}

impl ChildIndex {
    pub fn build(records: &[Record]) -> Self {
        let mut children: HashMap<String, HashMap<String, Vec<usize>>> = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            children
                .entry(casefold(&record.parent_type).into_owned())
                .or_default()
                .entry(record.parent_name.clone())
                .or_default()
                .push(idx);
        }
        let parents: usize = children.values().map(HashMap::len).sum();
        debug!(records = records.len(), parents, "built child index");
        Self { children }
    }

    /// Indices of the records whose parent link resolves to `parent`.
    ///
    /// A self-referencing record appears among its own children.
    pub fn children_of(&self, parent: &Record) -> &[usize] {
        let parent_type = casefold(&parent.record_type);
        self.children
            .get(&*parent_type)
            .and_then(|by_name| by_name.get(parent.name.as_str()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn child_count(&self, parent: &Record) -> usize {
        self.children_of(parent).len()
    }
}

/// Set `number_of_children` on every record and return the index used
pub fn assign_child_counts(records: &mut [Record]) -> ChildIndex {
    let index = ChildIndex::build(records);
    for record in records.iter_mut() {
        record.number_of_children = index.child_count(record);
    }
    index
}
