use camino::Utf8Path;
use tree_sitter::Node;

use crate::conditionals::ConditionalRemoval;
use crate::error::{MutationError, Result};
use crate::mutants::Mutant;
use crate::nodes;

/// Contract every mutation operator implements. Operators are stateless
/// and pure: the node and root they receive are read-only views, and the
/// same inputs always yield the same mutants.
pub trait MutationOperator {
    /// Name stamped on generated mutants and used in reports.
    fn name(&self) -> &'static str;

    /// Tree node kinds this operator can mutate. Dispatch consults this
    /// set before calling `apply_mutation`.
    fn supported_kinds(&self) -> &'static [&'static str];

    fn supports(&self, node: Node) -> bool {
        self.supported_kinds().contains(&node.kind())
    }

    fn require_supported(&self, node: Node) -> Result<()> {
        if self.supports(node) {
            Ok(())
        } else {
            Err(MutationError::UnsupportedNode {
                operator: self.name(),
                kind: node.kind().to_string(),
            })
        }
    }

    /// Generate every mutant this operator derives from `node`. `source`
    /// must be the exact text `root` was parsed from.
    fn apply_mutation(
        &self,
        file: &Utf8Path,
        source: &str,
        node: Node,
        root: Node,
    ) -> Result<Vec<Mutant>>;
}

/// Single-token replacement tables. Tokens outside a table map to no
/// mutant rather than an error.
pub fn reverse_conditional_replacement(op: &str) -> Option<&'static str> {
    match op {
        "==" => Some("!="),
        "!=" => Some("=="),
        "===" => Some("!=="),
        "!==" => Some("==="),
        "<" => Some(">="),
        "<=" => Some(">"),
        ">" => Some("<="),
        ">=" => Some("<"),
        "&&" => Some("||"),
        "||" => Some("&&"),
        _ => None,
    }
}

pub fn arithmetic_replacement(op: &str) -> Option<&'static str> {
    match op {
        "+" => Some("-"),
        "-" => Some("+"),
        "*" => Some("/"),
        "/" => Some("*"),
        "%" => Some("*"),
        _ => None,
    }
}

pub fn unary_replacement(op: &str) -> Option<&'static str> {
    match op {
        "++" => Some("--"),
        "--" => Some("++"),
        "-" => Some("+"),
        "+" => Some("-"),
        _ => None,
    }
}

/// Flips comparison and logical operator tokens in binary expressions.
pub struct ReverseConditional;

impl MutationOperator for ReverseConditional {
    fn name(&self) -> &'static str {
        "ReverseConditional"
    }

    fn supported_kinds(&self) -> &'static [&'static str] {
        &["binary_expression"]
    }

    fn apply_mutation(
        &self,
        file: &Utf8Path,
        source: &str,
        node: Node,
        root: Node,
    ) -> Result<Vec<Mutant>> {
        self.require_supported(node)?;
        nodes::check_alignment(root, source)?;

        let op_node = node
            .child_by_field_name("operator")
            .ok_or_else(|| nodes::malformed_node(node, "missing operator"))?;
        let op_text = nodes::node_text(op_node, source)?;

        let mut mutants = Vec::new();
        if let Some(replacement) = reverse_conditional_replacement(op_text) {
            mutants.push(Mutant::build(
                file,
                self.name(),
                source,
                nodes::span_of(op_node),
                replacement,
            )?);
        }
        Ok(mutants)
    }
}

/// Swaps arithmetic operator tokens in binary expressions.
pub struct Arithmetic;

impl MutationOperator for Arithmetic {
    fn name(&self) -> &'static str {
        "Arithmetic"
    }

    fn supported_kinds(&self) -> &'static [&'static str] {
        &["binary_expression"]
    }

    fn apply_mutation(
        &self,
        file: &Utf8Path,
        source: &str,
        node: Node,
        root: Node,
    ) -> Result<Vec<Mutant>> {
        self.require_supported(node)?;
        nodes::check_alignment(root, source)?;

        let op_node = node
            .child_by_field_name("operator")
            .ok_or_else(|| nodes::malformed_node(node, "missing operator"))?;
        let op_text = nodes::node_text(op_node, source)?;

        // Skip string concatenation
        if op_text == "+" {
            if let Some(left) = node.child_by_field_name("left") {
                if left.kind() == "string" || left.kind() == "template_string" {
                    return Ok(vec![]);
                }
            }
        }

        let mut mutants = Vec::new();
        if let Some(replacement) = arithmetic_replacement(op_text) {
            mutants.push(Mutant::build(
                file,
                self.name(),
                source,
                nodes::span_of(op_node),
                replacement,
            )?);
        }
        Ok(mutants)
    }
}

/// Flips `++`/`--` in update expressions and the sign of unary `+`/`-`.
pub struct UnaryOperator;

impl MutationOperator for UnaryOperator {
    fn name(&self) -> &'static str {
        "UnaryOperator"
    }

    fn supported_kinds(&self) -> &'static [&'static str] {
        &["update_expression", "unary_expression"]
    }

    fn apply_mutation(
        &self,
        file: &Utf8Path,
        source: &str,
        node: Node,
        root: Node,
    ) -> Result<Vec<Mutant>> {
        self.require_supported(node)?;
        nodes::check_alignment(root, source)?;

        let op_node = node
            .child_by_field_name("operator")
            .ok_or_else(|| nodes::malformed_node(node, "missing operator"))?;
        let op_text = nodes::node_text(op_node, source)?;

        let mut mutants = Vec::new();
        if let Some(replacement) = unary_replacement(op_text) {
            mutants.push(Mutant::build(
                file,
                self.name(),
                source,
                nodes::span_of(op_node),
                replacement,
            )?);
        }
        Ok(mutants)
    }
}

/// Fixed-order operator registry. The order here fixes mutant order
/// within a node during discovery.
pub struct OperatorSet {
    operators: Vec<Box<dyn MutationOperator>>,
}

impl OperatorSet {
    pub fn all() -> OperatorSet {
        OperatorSet {
            operators: vec![
                Box::new(ConditionalRemoval),
                Box::new(ReverseConditional),
                Box::new(Arithmetic),
                Box::new(UnaryOperator),
            ],
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.operators.iter().map(|op| op.name()).collect()
    }

    /// Keep only operators whose name appears in `keep`.
    pub fn retain_named(&mut self, keep: &[String]) {
        self.operators.retain(|op| keep.iter().any(|k| k == op.name()));
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Operators whose declared kinds include this node's kind.
    pub fn applicable<'a>(&'a self, node: Node<'_>) -> impl Iterator<Item = &'a dyn MutationOperator> {
        self.operators
            .iter()
            .filter(move |op| op.supports(node))
            .map(|op| op.as_ref())
    }
}
