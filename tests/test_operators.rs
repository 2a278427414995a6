use camino::Utf8Path;
use tree_sitter::Node;

use mutgen::Dialect;
use mutgen::conditionals::ConditionalRemoval;
use mutgen::error::MutationError;
use mutgen::mutants::Mutant;
use mutgen::operators::{
    self, Arithmetic, MutationOperator, OperatorSet, ReverseConditional, UnaryOperator,
};
use mutgen::parser;

fn parse_js(source: &str) -> tree_sitter::Tree {
    parser::parse(Utf8Path::new("calc.js"), source, Dialect::JavaScript).unwrap()
}

fn find_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    if node.kind() == kind {
        return Some(node);
    }
    for i in 0..node.child_count() {
        if let Some(found) = node.child(i).and_then(|child| find_kind(child, kind)) {
            return Some(found);
        }
    }
    None
}

fn apply_to_kind(op: &dyn MutationOperator, source: &str, kind: &str) -> Vec<Mutant> {
    let tree = parse_js(source);
    let root = tree.root_node();
    let node = find_kind(root, kind).expect("fixture should contain the node kind");
    op.apply_mutation(Utf8Path::new("calc.js"), source, node, root)
        .unwrap()
}

// --- Replacement tables ---

#[test]
fn reverse_eq_flips_to_neq() {
    assert_eq!(operators::reverse_conditional_replacement("=="), Some("!="));
    assert_eq!(operators::reverse_conditional_replacement("!="), Some("=="));
}

#[test]
fn reverse_strict_eq_flips_to_strict_neq() {
    assert_eq!(operators::reverse_conditional_replacement("==="), Some("!=="));
    assert_eq!(operators::reverse_conditional_replacement("!=="), Some("==="));
}

#[test]
fn reverse_lt_flips_to_gte() {
    assert_eq!(operators::reverse_conditional_replacement("<"), Some(">="));
    assert_eq!(operators::reverse_conditional_replacement(">="), Some("<"));
}

#[test]
fn reverse_lte_flips_to_gt() {
    assert_eq!(operators::reverse_conditional_replacement("<="), Some(">"));
    assert_eq!(operators::reverse_conditional_replacement(">"), Some("<="));
}

#[test]
fn reverse_logical_connectives_swap() {
    assert_eq!(operators::reverse_conditional_replacement("&&"), Some("||"));
    assert_eq!(operators::reverse_conditional_replacement("||"), Some("&&"));
}

#[test]
fn reverse_unknown_token_maps_to_none() {
    assert_eq!(operators::reverse_conditional_replacement("+"), None);
    assert_eq!(operators::reverse_conditional_replacement("instanceof"), None);
}

#[test]
fn arithmetic_plus_and_minus_swap() {
    assert_eq!(operators::arithmetic_replacement("+"), Some("-"));
    assert_eq!(operators::arithmetic_replacement("-"), Some("+"));
}

#[test]
fn arithmetic_mul_and_div_swap() {
    assert_eq!(operators::arithmetic_replacement("*"), Some("/"));
    assert_eq!(operators::arithmetic_replacement("/"), Some("*"));
}

#[test]
fn arithmetic_modulo_becomes_mul() {
    assert_eq!(operators::arithmetic_replacement("%"), Some("*"));
}

#[test]
fn arithmetic_unknown_token_maps_to_none() {
    assert_eq!(operators::arithmetic_replacement("**"), None);
    assert_eq!(operators::arithmetic_replacement("<"), None);
}

#[test]
fn unary_increment_and_decrement_swap() {
    assert_eq!(operators::unary_replacement("++"), Some("--"));
    assert_eq!(operators::unary_replacement("--"), Some("++"));
}

#[test]
fn unary_signs_swap() {
    assert_eq!(operators::unary_replacement("-"), Some("+"));
    assert_eq!(operators::unary_replacement("+"), Some("-"));
}

#[test]
fn unary_unknown_token_maps_to_none() {
    assert_eq!(operators::unary_replacement("!"), None);
    assert_eq!(operators::unary_replacement("typeof"), None);
}

// --- ReverseConditional ---

#[test]
fn reverse_conditional_flips_a_comparison() {
    let mutants = apply_to_kind(&ReverseConditional, "var ok = a < b;\n", "binary_expression");
    assert_eq!(mutants.len(), 1);
    assert_eq!(mutants[0].operator, "ReverseConditional");
    assert_eq!(mutants[0].original, "<");
    assert_eq!(mutants[0].replacement, ">=");
    assert_eq!(mutants[0].mutated_source, "var ok = a >= b;\n");
}

#[test]
fn reverse_conditional_ignores_arithmetic_tokens() {
    let mutants = apply_to_kind(&ReverseConditional, "var sum = a + b;\n", "binary_expression");
    assert!(mutants.is_empty());
}

#[test]
fn reverse_conditional_rejects_other_kinds() {
    let source = "var flag = true;\n";
    let tree = parse_js(source);
    let root = tree.root_node();
    let node = find_kind(root, "variable_declaration").unwrap();

    let err = ReverseConditional
        .apply_mutation(Utf8Path::new("calc.js"), source, node, root)
        .unwrap_err();
    assert!(matches!(
        err,
        MutationError::UnsupportedNode { operator: "ReverseConditional", .. }
    ));
}

// --- Arithmetic ---

#[test]
fn arithmetic_swaps_an_operator_token() {
    let mutants = apply_to_kind(&Arithmetic, "var area = w * h;\n", "binary_expression");
    assert_eq!(mutants.len(), 1);
    assert_eq!(mutants[0].operator, "Arithmetic");
    assert_eq!(mutants[0].mutated_source, "var area = w / h;\n");
}

#[test]
fn arithmetic_mutates_numeric_addition() {
    let mutants = apply_to_kind(&Arithmetic, "var sum = a + b;\n", "binary_expression");
    assert_eq!(mutants.len(), 1);
    assert_eq!(mutants[0].mutated_source, "var sum = a - b;\n");
}

#[test]
fn arithmetic_skips_string_concatenation() {
    let mutants = apply_to_kind(
        &Arithmetic,
        "var label = \"total: \" + n;\n",
        "binary_expression",
    );
    assert!(mutants.is_empty());
}

#[test]
fn arithmetic_skips_template_string_concatenation() {
    let mutants = apply_to_kind(
        &Arithmetic,
        "var label = `total: ` + n;\n",
        "binary_expression",
    );
    assert!(mutants.is_empty());
}

#[test]
fn arithmetic_swaps_modulo() {
    let mutants = apply_to_kind(&Arithmetic, "var r = n % 3;\n", "binary_expression");
    assert_eq!(mutants.len(), 1);
    assert_eq!(mutants[0].mutated_source, "var r = n * 3;\n");
}

// --- UnaryOperator ---

#[test]
fn unary_flips_increment_to_decrement() {
    let mutants = apply_to_kind(&UnaryOperator, "i++;\n", "update_expression");
    assert_eq!(mutants.len(), 1);
    assert_eq!(mutants[0].operator, "UnaryOperator");
    assert_eq!(mutants[0].mutated_source, "i--;\n");
}

#[test]
fn unary_flips_a_sign() {
    let mutants = apply_to_kind(&UnaryOperator, "var n = -limit;\n", "unary_expression");
    assert_eq!(mutants.len(), 1);
    assert_eq!(mutants[0].mutated_source, "var n = +limit;\n");
}

#[test]
fn unary_leaves_logical_not_alone() {
    let mutants = apply_to_kind(&UnaryOperator, "var ok = !ready;\n", "unary_expression");
    assert!(mutants.is_empty());
}

// --- Registry ---

#[test]
fn registry_lists_operators_in_fixed_order() {
    let set = OperatorSet::all();
    assert_eq!(
        set.names(),
        vec!["ConditionalRemoval", "ReverseConditional", "Arithmetic", "UnaryOperator"]
    );
}

#[test]
fn registry_filters_by_node_kind() {
    let set = OperatorSet::all();
    let tree = parse_js("var ok = a < b;\n");
    let root = tree.root_node();
    let node = find_kind(root, "binary_expression").unwrap();

    let names: Vec<&str> = set.applicable(node).map(|op| op.name()).collect();
    assert_eq!(names, vec!["ReverseConditional", "Arithmetic"]);
}

#[test]
fn registry_offers_only_conditional_removal_for_an_if() {
    let set = OperatorSet::all();
    let tree = parse_js("if(ready){\n  go();\n}\n");
    let root = tree.root_node();
    let node = find_kind(root, "if_statement").unwrap();

    let names: Vec<&str> = set.applicable(node).map(|op| op.name()).collect();
    assert_eq!(names, vec!["ConditionalRemoval"]);
}

#[test]
fn retain_named_keeps_only_requested_operators() {
    let mut set = OperatorSet::all();
    set.retain_named(&["Arithmetic".to_string(), "ConditionalRemoval".to_string()]);
    assert_eq!(set.names(), vec!["ConditionalRemoval", "Arithmetic"]);
    assert_eq!(set.len(), 2);
}

#[test]
fn retain_named_with_unknown_name_empties_the_set() {
    let mut set = OperatorSet::all();
    set.retain_named(&["Bogus".to_string()]);
    assert!(set.is_empty());
}

#[test]
fn conditional_removal_declares_the_four_statement_kinds() {
    let kinds = ConditionalRemoval.supported_kinds();
    assert_eq!(
        kinds,
        &["if_statement", "while_statement", "do_statement", "for_statement"]
    );
}

#[test]
fn supports_matches_declared_kinds() {
    let tree = parse_js("if(ready){\n  go();\n}\n");
    let root = tree.root_node();
    let node = find_kind(root, "if_statement").unwrap();

    assert!(ConditionalRemoval.supports(node));
    assert!(!ReverseConditional.supports(node));
    assert!(!Arithmetic.supports(node));
    assert!(!UnaryOperator.supports(node));
}
