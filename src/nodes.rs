use tree_sitter::Node;

use crate::error::{MutationError, Result};
use crate::splice::{self, Span};

/// The four control-flow constructs whose test expression can be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionalKind {
    If,
    While,
    DoWhile,
    For,
}

impl ConditionalKind {
    pub const KINDS: &'static [&'static str] = &[
        "if_statement",
        "while_statement",
        "do_statement",
        "for_statement",
    ];

    pub fn classify(kind: &str) -> Option<ConditionalKind> {
        match kind {
            "if_statement" => Some(ConditionalKind::If),
            "while_statement" => Some(ConditionalKind::While),
            "do_statement" => Some(ConditionalKind::DoWhile),
            "for_statement" => Some(ConditionalKind::For),
            _ => None,
        }
    }

    /// Literals to splice over the test expression, in emission order.
    /// Only `if` gets both directions. A loop test forced to `true` can
    /// never terminate, which would hang whatever later runs the mutant,
    /// so loops get the `false` variant alone.
    pub fn replacement_literals(self) -> &'static [&'static str] {
        match self {
            ConditionalKind::If => &["true", "false"],
            ConditionalKind::While | ConditionalKind::DoWhile | ConditionalKind::For => &["false"],
        }
    }
}

/// Locate the test expression of a conditional node.
///
/// `if`, `while`, and `do` keep the test inside a parenthesized
/// expression; `for` wraps it in an expression statement whose range
/// covers the trailing semicolon. Either way the expression itself is the
/// first named child, so a splice leaves the surrounding punctuation in
/// place. A `for (;;)` header carries an empty statement and has no test
/// at all.
pub fn test_expression(node: Node<'_>) -> Result<Node<'_>> {
    let condition = match node.child_by_field_name("condition") {
        Some(c) => c,
        None => return Err(malformed_node(node, "missing condition")),
    };
    match condition.kind() {
        "parenthesized_expression" | "expression_statement" => inner_expression(condition)
            .ok_or_else(|| malformed_node(node, "condition holds no expression")),
        "empty_statement" => Err(malformed_node(node, "empty condition")),
        _ => Ok(condition),
    }
}

fn inner_expression(node: Node<'_>) -> Option<Node<'_>> {
    let count = node.named_child_count();
    for i in 0..count {
        if let Some(child) = node.named_child(i) {
            if child.kind() != "comment" {
                return Some(child);
            }
        }
    }
    None
}

pub fn span_of(node: Node) -> Span {
    Span::new(node.start_byte(), node.end_byte())
}

/// Text a node covers, checked against the source it claims to index.
pub fn node_text<'a>(node: Node<'_>, source: &'a str) -> Result<&'a str> {
    let span = span_of(node);
    splice::check_span(source, span)?;
    Ok(&source[span.start..span.end])
}

/// Ranges in a tree are only meaningful against the exact text it was
/// parsed from. Catches a caller handing over a source the tree outgrows.
pub fn check_alignment(root: Node, source: &str) -> Result<()> {
    if root.end_byte() > source.len() {
        return Err(MutationError::RangeOutOfBounds {
            start: root.start_byte(),
            end: root.end_byte(),
            len: source.len(),
        });
    }
    Ok(())
}

pub fn malformed_node(node: Node, reason: &str) -> MutationError {
    MutationError::MalformedNode {
        kind: node.kind().to_string(),
        line: node.start_position().row + 1,
        column: node.start_position().column + 1,
        reason: reason.to_string(),
    }
}
