//! Category hierarchy expansion.
//!
//! Selecting a root category also selects everything underneath it; child
//! selections stay as-is. The traversal is iterative with a visited set so
//! inconsistent parent/child data (a cycle) terminates that branch instead
//! of hanging the query.

use std::collections::{HashMap, HashSet};

/// One row of the category table, reduced to its tree edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryEdge {
    pub id: i64,
    pub parent_id: Option<i64>,
}

/// Expand a category selection into the effective filter set.
///
/// Root ids contribute themselves plus all their descendants; non-root ids
/// (and ids unknown to the edge list) pass through unchanged. The returned
/// set is deduplicated, in selection-then-discovery order.
pub fn expand_selection(selected: &[i64], edges: &[CategoryEdge]) -> Vec<i64> {
    let mut children: HashMap<i64, Vec<i64>> = HashMap::new();
    let mut roots: HashSet<i64> = HashSet::new();
    for edge in edges {
        match edge.parent_id {
            Some(parent) => children.entry(parent).or_default().push(edge.id),
            None => {
                roots.insert(edge.id);
            }
        }
    }

    let mut seen: HashSet<i64> = HashSet::new();
    let mut effective: Vec<i64> = Vec::new();

    for &id in selected {
        if seen.insert(id) {
            effective.push(id);
        }
        if !roots.contains(&id) {
            continue;
        }

        let mut visited: HashSet<i64> = HashSet::from([id]);
        let mut stack: Vec<i64> = children.get(&id).cloned().unwrap_or_default();
        while let Some(descendant) = stack.pop() {
            if !visited.insert(descendant) {
                continue;
            }
            if seen.insert(descendant) {
                effective.push(descendant);
            }
            if let Some(grandchildren) = children.get(&descendant) {
                stack.extend(grandchildren);
            }
        }
    }

    effective
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(id: i64, parent_id: Option<i64>) -> CategoryEdge {
        CategoryEdge { id, parent_id }
    }

    #[test]
    fn root_selection_pulls_in_descendants() {
        let edges = vec![
            edge(1, None),
            edge(2, Some(1)),
            edge(3, Some(1)),
            edge(4, None),
        ];
        let mut expanded = expand_selection(&[1], &edges);
        assert_eq!(expanded[0], 1);
        expanded.sort_unstable();
        assert_eq!(expanded, vec![1, 2, 3]);
    }

    #[test]
    fn child_selection_does_not_cascade() {
        let edges = vec![edge(1, None), edge(2, Some(1)), edge(3, Some(2))];
        assert_eq!(expand_selection(&[2], &edges), vec![2]);
    }

    #[test]
    fn deeper_descendants_are_collected_from_a_root() {
        let edges = vec![edge(1, None), edge(2, Some(1)), edge(3, Some(2))];
        let mut expanded = expand_selection(&[1], &edges);
        expanded.sort_unstable();
        assert_eq!(expanded, vec![1, 2, 3]);
    }

    #[test]
    fn mixed_selection_deduplicates() {
        let edges = vec![edge(1, None), edge(2, Some(1)), edge(3, Some(1))];
        let mut expanded = expand_selection(&[1, 2], &edges);
        expanded.sort_unstable();
        assert_eq!(expanded, vec![1, 2, 3]);
    }

    #[test]
    fn unknown_ids_pass_through() {
        assert_eq!(expand_selection(&[42], &[]), vec![42]);
    }

    #[test]
    fn cyclic_data_terminates() {
        // 1 -> 2 -> 3 -> 2: corrupted, but must not loop forever.
        let edges = vec![edge(1, None), edge(2, Some(1)), edge(3, Some(2)), edge(2, Some(3))];
        let mut expanded = expand_selection(&[1], &edges);
        expanded.sort_unstable();
        assert_eq!(expanded, vec![1, 2, 3]);
    }
}
