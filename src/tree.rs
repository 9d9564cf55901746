//! Structural rules of the location tree.
//!
//! These functions see only already-loaded rows, so the store can run them
//! inside whatever transaction it holds and tests can run them without a
//! database.

use std::collections::HashSet;

use crate::error::{LocationError, Result};
use crate::format::MAX_DEFINITION_LEN;

/// Longest path the `location_code.path` column holds.
pub const MAX_PATH_LEN: usize = 248;

/// An ancestor of the node being saved, resolved down to its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ancestor {
    pub id: i32,
    pub segment: String,
    pub location_default_id: i32,
}

/// Derived position of a node in its tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub path: String,
    pub level: i16,
}

/// Everything about the node itself that placement needs.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub segment: &'a str,
    pub location_default_id: i32,
    pub separator: &'a str,
    /// Formats registered under the default, read live.
    pub format_count: u64,
}

/// Tracks the parent walk so a corrupted chain cannot loop forever.
#[derive(Debug)]
pub struct AncestorGuard {
    visited: HashSet<i32>,
    limit: usize,
    steps: usize,
}

impl AncestorGuard {
    /// `origin` is the node being saved, when it already has an id. Reaching
    /// it again while walking up means the new parent lies in its subtree.
    pub fn new(origin: Option<i32>, limit: usize) -> Self {
        Self {
            visited: origin.into_iter().collect(),
            limit,
            steps: 0,
        }
    }

    pub fn visit(&mut self, id: i32) -> Result<()> {
        self.steps += 1;
        if self.steps > self.limit || !self.visited.insert(id) {
            return Err(LocationError::CycleDetected {
                id,
                limit: self.limit,
            });
        }
        Ok(())
    }
}

/// Rejects segment values no format could hold in a path.
pub fn check_segment(segment: &str, separator: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(LocationError::EmptySegment);
    }

    let length = segment.chars().count();
    if length > MAX_DEFINITION_LEN {
        return Err(LocationError::SegmentTooLong {
            segment: segment.to_string(),
            length,
            max: MAX_DEFINITION_LEN,
        });
    }

    if segment.contains(separator) {
        return Err(LocationError::SeparatorInSegment {
            segment: segment.to_string(),
            separator: separator.to_string(),
        });
    }

    Ok(())
}

/// Validates a node against its root-first `ancestors` and derives its path.
///
/// Checks run in order: separator containment, duplicate value in the
/// lineage, shared default, depth against the registered formats, then the
/// length of the joined path. The level is the number of ancestors.
pub fn place(candidate: Candidate<'_>, ancestors: &[Ancestor]) -> Result<Placement> {
    let Candidate {
        segment,
        location_default_id,
        separator,
        format_count,
    } = candidate;

    check_segment(segment, separator)?;

    if ancestors.iter().any(|ancestor| ancestor.segment == segment) {
        return Err(LocationError::SelfAncestry {
            segment: segment.to_string(),
        });
    }

    if let Some(stranger) = ancestors
        .iter()
        .find(|ancestor| ancestor.location_default_id != location_default_id)
    {
        return Err(LocationError::CrossDefault {
            ancestor_id: stranger.id,
            expected: location_default_id,
            found: stranger.location_default_id,
        });
    }

    let depth = ancestors.len() as u64 + 1;
    if depth > format_count {
        return Err(LocationError::DepthExceeded {
            found: depth,
            allowed: format_count,
        });
    }

    let path = ancestors
        .iter()
        .map(|ancestor| ancestor.segment.as_str())
        .chain(std::iter::once(segment))
        .collect::<Vec<_>>()
        .join(separator);

    let length = path.chars().count();
    if length > MAX_PATH_LEN {
        return Err(LocationError::PathTooLong {
            path,
            length,
            max: MAX_PATH_LEN,
        });
    }

    Ok(Placement {
        path,
        level: ancestors.len() as i16,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ancestors(segments: &[&str]) -> Vec<Ancestor> {
        segments
            .iter()
            .enumerate()
            .map(|(i, segment)| Ancestor {
                id: i as i32 + 1,
                segment: segment.to_string(),
                location_default_id: 1,
            })
            .collect()
    }

    fn candidate(segment: &str) -> Candidate<'_> {
        Candidate {
            segment,
            location_default_id: 1,
            separator: ":",
            format_count: 4,
        }
    }

    #[test]
    fn roots_are_level_zero() {
        let placement = place(candidate("A"), &[]).unwrap();
        assert_eq!(placement.path, "A");
        assert_eq!(placement.level, 0);
    }

    #[test]
    fn joins_ancestors_root_first() {
        let placement = place(candidate("C"), &ancestors(&["A", "B"])).unwrap();
        assert_eq!(placement.path, "A:B:C");
        assert_eq!(placement.level, 2);
    }

    #[test]
    fn multi_character_separator_counts_once_per_join() {
        let mut node = candidate("C");
        node.separator = "--";
        let placement = place(node, &ancestors(&["A", "B"])).unwrap();
        assert_eq!(placement.path, "A--B--C");
        assert_eq!(placement.level, 2);
    }

    #[test]
    fn level_ignores_separator_fragments_in_segments() {
        let mut node = candidate(":b");
        node.separator = "::";
        let placement = place(node, &ancestors(&["a:"])).unwrap();
        assert_eq!(placement.path, "a::::b");
        assert_eq!(placement.level, 1);
    }

    #[test]
    fn rejects_paths_longer_than_the_column() {
        let parent = "A".repeat(200);
        let child = "B".repeat(200);
        let err = place(candidate(&child), &ancestors(&[&parent])).unwrap_err();
        assert!(matches!(
            err,
            LocationError::PathTooLong { length: 401, max: MAX_PATH_LEN, .. }
        ));
        assert!(err.is_validation());

        let child = "B".repeat(MAX_PATH_LEN - 201);
        let placement = place(candidate(&child), &ancestors(&[&parent])).unwrap();
        assert_eq!(placement.path.chars().count(), MAX_PATH_LEN);
    }

    #[test]
    fn rejects_separator_in_segment() {
        let err = place(candidate("A:1"), &[]).unwrap_err();
        assert!(matches!(err, LocationError::SeparatorInSegment { .. }));
    }

    #[test]
    fn rejects_empty_segment() {
        assert!(matches!(
            place(candidate(""), &[]),
            Err(LocationError::EmptySegment)
        ));
    }

    #[test]
    fn rejects_value_already_in_lineage() {
        let err = place(candidate("A"), &ancestors(&["A", "B"])).unwrap_err();
        assert!(matches!(err, LocationError::SelfAncestry { segment } if segment == "A"));
    }

    #[test]
    fn rejects_foreign_ancestor() {
        let mut lineage = ancestors(&["A", "B"]);
        lineage[1].location_default_id = 9;

        let err = place(candidate("C"), &lineage).unwrap_err();
        assert!(matches!(
            err,
            LocationError::CrossDefault {
                ancestor_id: 2,
                expected: 1,
                found: 9
            }
        ));
    }

    #[test]
    fn depth_is_bounded_by_formats() {
        let mut node = candidate("C");
        node.format_count = 2;

        assert!(place(node, &ancestors(&["A"])).is_ok());
        let err = place(node, &ancestors(&["A", "B"])).unwrap_err();
        assert!(matches!(
            err,
            LocationError::DepthExceeded {
                found: 3,
                allowed: 2
            }
        ));
    }

    #[test]
    fn guard_stops_on_revisit() {
        let mut guard = AncestorGuard::new(Some(7), 10);
        guard.visit(3).unwrap();
        assert!(matches!(
            guard.visit(7),
            Err(LocationError::CycleDetected { id: 7, .. })
        ));

        let mut guard = AncestorGuard::new(None, 10);
        guard.visit(3).unwrap();
        assert!(guard.visit(3).is_err());
    }

    #[test]
    fn guard_stops_at_limit() {
        let mut guard = AncestorGuard::new(None, 2);
        guard.visit(1).unwrap();
        guard.visit(2).unwrap();
        assert!(guard.visit(3).is_err());
    }
}
