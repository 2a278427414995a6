use camino::Utf8Path;
use tree_sitter::Node;

use crate::error::{MutationError, Result};
use crate::mutants::Mutant;
use crate::nodes::{self, ConditionalKind};
use crate::operators::MutationOperator;

/// Replaces a control-flow test expression with a boolean literal,
/// probing whether the suite depends on the test's outcome at all.
///
/// An `if` yields the `true` variant then the `false` variant. The three
/// loop forms yield only `false`; see
/// [`ConditionalKind::replacement_literals`] for why `true` is never
/// spliced into a loop header.
pub struct ConditionalRemoval;

impl MutationOperator for ConditionalRemoval {
    fn name(&self) -> &'static str {
        "ConditionalRemoval"
    }

    fn supported_kinds(&self) -> &'static [&'static str] {
        ConditionalKind::KINDS
    }

    fn apply_mutation(
        &self,
        file: &Utf8Path,
        source: &str,
        node: Node,
        root: Node,
    ) -> Result<Vec<Mutant>> {
        let kind = ConditionalKind::classify(node.kind()).ok_or_else(|| {
            MutationError::UnsupportedNode {
                operator: self.name(),
                kind: node.kind().to_string(),
            }
        })?;
        nodes::check_alignment(root, source)?;

        let test = nodes::test_expression(node)?;
        let span = nodes::span_of(test);

        let literals = kind.replacement_literals();
        let mut mutants = Vec::with_capacity(literals.len());
        for literal in literals {
            mutants.push(Mutant::build(file, self.name(), source, span, literal)?);
        }
        Ok(mutants)
    }
}
