use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use tree_sitter::Node;

use crate::Dialect;
use crate::error::Result;
use crate::mutants::Mutant;
use crate::nodes;
use crate::operators::OperatorSet;
use crate::parser;

/// One (node, operator) pair that failed to generate mutants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedSite {
    pub kind: String,
    pub line: usize,
    pub column: usize,
    pub operator: String,
    pub reason: String,
}

/// Everything one discovery pass produced: mutants in tree order plus the
/// sites that failed, so a bad node is reported instead of aborting the
/// run or vanishing.
#[derive(Debug, Default)]
pub struct Discovery {
    pub mutants: Vec<Mutant>,
    pub skipped: Vec<SkippedSite>,
}

/// Parse `source` and apply every operator in the set to every node it
/// supports. Only a parse failure is fatal; per-node errors become
/// skipped sites and traversal continues.
pub fn discover(
    file: &Utf8Path,
    source: &str,
    dialect: Dialect,
    operators: &OperatorSet,
) -> Result<Discovery> {
    let tree = parser::parse(file, source, dialect)?;
    let root = tree.root_node();

    let mut discovery = Discovery::default();
    walk_node(root, root, file, source, operators, &mut discovery);
    Ok(discovery)
}

fn walk_node(
    node: Node,
    root: Node,
    file: &Utf8Path,
    source: &str,
    operators: &OperatorSet,
    discovery: &mut Discovery,
) {
    if should_skip_node(node, source) {
        return;
    }

    for op in operators.applicable(node) {
        match op.apply_mutation(file, source, node, root) {
            Ok(mutants) => discovery.mutants.extend(mutants),
            Err(err) => discovery.skipped.push(SkippedSite {
                kind: node.kind().to_string(),
                line: node.start_position().row + 1,
                column: node.start_position().column + 1,
                operator: op.name().to_string(),
                reason: err.to_string(),
            }),
        }
    }

    let child_count = node.child_count();
    for i in 0..child_count {
        if let Some(child) = node.child(i) {
            walk_node(child, root, file, source, operators, discovery);
        }
    }
}

fn should_skip_node(node: Node, source: &str) -> bool {
    if node.kind() == "call_expression" {
        if let Some(func) = node.child_by_field_name("function") {
            if let Ok(text) = nodes::node_text(func, source) {
                if matches!(
                    text,
                    "console.log" | "console.warn" | "console.error" | "console.info" | "console.debug"
                ) {
                    return true;
                }
            }
        }
    }
    // Skip string expression statements (like 'use strict')
    if node.kind() == "expression_statement" && node.child_count() == 1 {
        if let Some(child) = node.child(0) {
            if child.kind() == "string" {
                return true;
            }
        }
    }
    false
}
