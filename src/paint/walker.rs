//! Tree walking
//!
//! Drives a [`SpanFlattener`] over a syntax tree in pre-order, opening a span
//! for every node the highlight table assigns a color to.

use super::flattener::{FlattenError, SpanFlattener};
use super::position::Position;
use super::run::RenderedLines;
use crate::syntax::HighlightTable;

/// Read-only view of a syntax tree node
pub trait SyntaxNode: Sized {
    fn kind(&self) -> &str;
    /// Named nodes are grammar productions, anonymous nodes are literal tokens
    fn is_named(&self) -> bool;
    fn start(&self) -> Position;
    fn end(&self) -> Position;
    /// Children in source order
    fn children(&self) -> Vec<Self>;
}

impl<'tree> SyntaxNode for tree_sitter::Node<'tree> {
    fn kind(&self) -> &str {
        tree_sitter::Node::kind(self)
    }

    fn is_named(&self) -> bool {
        tree_sitter::Node::is_named(self)
    }

    fn start(&self) -> Position {
        self.start_position().into()
    }

    fn end(&self) -> Position {
        self.end_position().into()
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        tree_sitter::Node::children(self, &mut cursor).collect()
    }
}

enum Step<N> {
    Enter(N),
    /// Close a colored node at its end position
    Exit(Position),
}

/// Paint every colored node under `root` into `flattener`.
///
/// Uses an explicit work stack so deeply nested trees do not recurse. Leaves
/// the cursor at the end of the last colored node; the caller advances to the
/// document end.
pub fn walk<N: SyntaxNode>(
    root: N,
    table: &HighlightTable,
    flattener: &mut SpanFlattener,
) -> Result<(), FlattenError> {
    let mut stack = vec![Step::Enter(root)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(node) => {
                let color = table.color_for(node.kind(), node.is_named());
                tracing::trace!(
                    target: "walk",
                    kind = node.kind(),
                    named = node.is_named(),
                    color,
                    "visit"
                );

                if !color.is_empty() {
                    flattener.start(color, node.start())?;
                    stack.push(Step::Exit(node.end()));
                }

                let children = node.children();
                stack.extend(children.into_iter().rev().map(Step::Enter));
            }
            Step::Exit(end) => flattener.end(end)?,
        }
    }

    Ok(())
}

/// Flatten a whole tree: seed at the root's start, walk, advance to
/// `document_end` and render.
///
/// `document_end` is clamped to the cursor, so passing a position before the
/// root's end is harmless.
pub fn paint<N: SyntaxNode>(
    root: N,
    table: &HighlightTable,
    document_end: Position,
) -> Result<RenderedLines, FlattenError> {
    let mut flattener = SpanFlattener::new(root.start());
    walk(root, table, &mut flattener)?;
    let end = document_end.max(flattener.cursor());
    flattener.advance_to(end)?;
    flattener.render()
}

#[cfg(test)]
mod test_tree {
    //! In-memory syntax trees for exercising the walker without a grammar

    use super::*;

    #[derive(Debug, Clone)]
    pub struct TestNode {
        pub kind: String,
        pub named: bool,
        pub start: Position,
        pub end: Position,
        pub children: Vec<TestNode>,
    }

    impl TestNode {
        pub fn named(kind: &str, start: (usize, usize), end: (usize, usize)) -> Self {
            Self {
                kind: kind.to_string(),
                named: true,
                start: Position::new(start.0, start.1),
                end: Position::new(end.0, end.1),
                children: Vec::new(),
            }
        }

        pub fn token(kind: &str, start: (usize, usize), end: (usize, usize)) -> Self {
            Self {
                named: false,
                ..Self::named(kind, start, end)
            }
        }

        pub fn with(mut self, children: Vec<TestNode>) -> Self {
            self.children = children;
            self
        }
    }

    impl SyntaxNode for TestNode {
        fn kind(&self) -> &str {
            &self.kind
        }

        fn is_named(&self) -> bool {
            self.named
        }

        fn start(&self) -> Position {
            self.start
        }

        fn end(&self) -> Position {
            self.end
        }

        fn children(&self) -> Vec<Self> {
            self.children.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_tree::TestNode;
    use super::*;
    use crate::paint::Run;

    fn table() -> HighlightTable {
        let mut table = HighlightTable::default();
        table.insert_symbol("string", "TSString");
        table.insert_symbol("comment", "TSComment");
        table.insert_symbol("escape_sequence", "TSStringEscape");
        table.insert_symbol("empty", "TSNone");
        table.insert_keyword("fn", "TSKeyword");
        table
    }

    fn finite(length: usize, color: &str) -> Run {
        Run::Finite {
            length,
            color: color.to_string(),
        }
    }

    fn fill(color: &str) -> Run {
        Run::FillToLineEnd {
            color: color.to_string(),
        }
    }

    #[test]
    fn test_named_and_anonymous_lookup() {
        // fn "a\n"
        let root = TestNode::named("source_file", (0, 0), (0, 9)).with(vec![
            TestNode::token("fn", (0, 0), (0, 2)),
            TestNode::named("string", (0, 3), (0, 9)).with(vec![TestNode::named(
                "escape_sequence",
                (0, 5),
                (0, 7),
            )]),
        ]);

        let out = paint(root, &table(), Position::new(0, 9)).unwrap();
        assert_eq!(
            out.lines[0].runs,
            vec![
                finite(2, "TSKeyword"),
                finite(1, ""),
                finite(2, "TSString"),
                finite(2, "TSStringEscape"),
                finite(2, "TSString"),
            ]
        );
    }

    #[test]
    fn test_named_kind_does_not_match_keyword_table() {
        // A named node called "fn" must not pick up the keyword color
        let root = TestNode::named("source_file", (0, 0), (0, 2))
            .with(vec![TestNode::named("fn", (0, 0), (0, 2))]);
        let out = paint(root, &table(), Position::new(0, 2)).unwrap();
        assert_eq!(out.lines[0].runs, vec![finite(2, "")]);
    }

    #[test]
    fn test_multi_line_comment_then_document_end() {
        let root = TestNode::named("source_file", (0, 0), (2, 3))
            .with(vec![TestNode::named("comment", (0, 5), (2, 3))]);
        let out = paint(root, &table(), Position::new(2, 8)).unwrap();

        assert_eq!(out.lines.len(), 3);
        assert_eq!(out.lines[0].runs, vec![finite(5, ""), fill("TSComment")]);
        assert_eq!(out.lines[1].runs, vec![fill("TSComment")]);
        assert_eq!(out.lines[2].runs, vec![finite(3, "TSComment"), finite(5, "")]);
    }

    #[test]
    fn test_zero_width_node_changes_nothing() {
        let base = TestNode::named("source_file", (0, 0), (0, 6))
            .with(vec![TestNode::named("string", (0, 0), (0, 6))]);
        let with_empty = TestNode::named("source_file", (0, 0), (0, 6)).with(vec![
            TestNode::named("string", (0, 0), (0, 6))
                .with(vec![TestNode::named("empty", (0, 3), (0, 3))]),
        ]);

        let a = paint(base, &table(), Position::new(0, 6)).unwrap();
        let b = paint(with_empty, &table(), Position::new(0, 6)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_walk_leaves_stack_balanced() {
        let root = TestNode::named("string", (0, 0), (1, 2)).with(vec![
            TestNode::named("escape_sequence", (0, 1), (0, 3)),
            TestNode::named("escape_sequence", (1, 0), (1, 1)),
        ]);
        let mut flattener = SpanFlattener::new(Position::new(0, 0));
        walk(root, &table(), &mut flattener).unwrap();
        assert_eq!(flattener.depth(), 1);
        assert_eq!(flattener.cursor(), Position::new(1, 2));
    }

    #[test]
    fn test_misordered_children_are_reported() {
        let root = TestNode::named("source_file", (0, 0), (0, 9)).with(vec![
            TestNode::named("string", (0, 5), (0, 9)),
            TestNode::named("comment", (0, 0), (0, 2)),
        ]);
        let err = paint(root, &table(), Position::new(0, 9)).unwrap_err();
        assert!(matches!(err, FlattenError::CursorRegression { .. }));
    }

    #[test]
    fn test_deeply_nested_same_color_merges() {
        let depth = 1_000;
        let mut node = TestNode::named("string", (0, depth), (0, depth + 1));
        for i in (0..depth).rev() {
            let kind = if i % 2 == 0 { "comment" } else { "block" };
            node = TestNode::named(kind, (0, i), (0, 2 * depth + 1 - i)).with(vec![node]);
        }
        let out = paint(node, &table(), Position::new(0, 2 * depth + 1)).unwrap();
        assert_eq!(
            out.lines[0].runs,
            vec![
                finite(depth, "TSComment"),
                finite(1, "TSString"),
                finite(depth, "TSComment"),
            ]
        );
    }
}
