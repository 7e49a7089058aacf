//! Nesting of flat heading lists into a navigation forest.

use crate::visitor::TocEntry;

/// A heading with the headings nested under it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TocNode {
    pub level: u8,
    pub text: String,
    pub fragment: String,
    pub children: Vec<TocNode>,
}

impl From<&TocEntry> for TocNode {
    fn from(entry: &TocEntry) -> Self {
        Self {
            level: entry.level,
            text: entry.text.clone(),
            fragment: entry.fragment.clone(),
            children: Vec::new(),
        }
    }
}

/// Fold headings in document order into a forest.
///
/// Each entry goes under the last top-level node whose level is lower than
/// its own, descending the same way through that node's children. An entry
/// with no such node starts a new top-level node. Every child's level is
/// therefore strictly greater than its parent's, and siblings keep document
/// order.
#[must_use]
pub fn build_toc_tree(entries: &[TocEntry]) -> Vec<TocNode> {
    entries
        .iter()
        .fold(Vec::new(), |forest, entry| attach(forest, TocNode::from(entry)))
}

fn attach(mut siblings: Vec<TocNode>, node: TocNode) -> Vec<TocNode> {
    match siblings.iter().rposition(|sibling| sibling.level < node.level) {
        Some(index) => {
            let parent = &mut siblings[index];
            parent.children = attach(std::mem::take(&mut parent.children), node);
        }
        None => siblings.push(node),
    }
    siblings
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(level: u8, text: &str) -> TocEntry {
        TocEntry {
            level,
            text: text.to_owned(),
            fragment: text.to_lowercase(),
        }
    }

    fn node(level: u8, text: &str, children: Vec<TocNode>) -> TocNode {
        TocNode {
            level,
            text: text.to_owned(),
            fragment: text.to_lowercase(),
            children,
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(build_toc_tree(&[]), vec![]);
    }

    #[test]
    fn test_siblings_and_children() {
        let entries = [entry(2, "A"), entry(3, "B"), entry(3, "C"), entry(2, "D")];

        assert_eq!(
            build_toc_tree(&entries),
            vec![
                node(2, "A", vec![node(3, "B", vec![]), node(3, "C", vec![])]),
                node(2, "D", vec![]),
            ]
        );
    }

    #[test]
    fn test_deep_chain() {
        let entries = [entry(2, "A"), entry(3, "B"), entry(4, "C")];

        assert_eq!(
            build_toc_tree(&entries),
            vec![node(2, "A", vec![node(3, "B", vec![node(4, "C", vec![])])])]
        );
    }

    #[test]
    fn test_attaches_to_last_qualifying_root() {
        let entries = [entry(2, "A"), entry(2, "B"), entry(3, "C")];

        assert_eq!(
            build_toc_tree(&entries),
            vec![
                node(2, "A", vec![]),
                node(2, "B", vec![node(3, "C", vec![])]),
            ]
        );
    }

    #[test]
    fn test_leading_deeper_heading_is_root() {
        let entries = [entry(3, "A"), entry(2, "B"), entry(3, "C")];

        assert_eq!(
            build_toc_tree(&entries),
            vec![node(3, "A", vec![]), node(2, "B", vec![node(3, "C", vec![])])]
        );
    }

    #[test]
    fn test_skipped_level_nests_under_nearest() {
        let entries = [entry(2, "A"), entry(4, "B"), entry(3, "C")];

        assert_eq!(
            build_toc_tree(&entries),
            vec![node(
                2,
                "A",
                vec![node(4, "B", vec![]), node(3, "C", vec![])]
            )]
        );
    }

    #[test]
    fn test_children_deeper_than_parent() {
        fn check(nodes: &[TocNode]) {
            for parent in nodes {
                assert!(parent.children.iter().all(|c| c.level > parent.level));
                check(&parent.children);
            }
        }
        let entries = [
            entry(2, "a"),
            entry(3, "b"),
            entry(2, "c"),
            entry(3, "d"),
            entry(3, "e"),
            entry(2, "f"),
        ];

        check(&build_toc_tree(&entries));
    }
}
