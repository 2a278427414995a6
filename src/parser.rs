use camino::Utf8Path;
use tree_sitter::{Parser, Tree};

use crate::Dialect;
use crate::error::{MutationError, Result};

fn grammar(dialect: Dialect) -> tree_sitter::Language {
    let language = match dialect {
        Dialect::JavaScript => tree_sitter_javascript::LANGUAGE,
        Dialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT,
        Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX,
    };
    language.into()
}

/// Parse `source` with the grammar for `dialect`. tree-sitter recovers
/// from syntax errors, so malformed input still yields a tree; only a
/// failed parse is surfaced.
pub fn parse(file: &Utf8Path, source: &str, dialect: Dialect) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&grammar(dialect))
        .expect("Failed to set JS/TS grammar");
    parser.parse(source, None).ok_or_else(|| MutationError::Parse {
        file: file.to_owned(),
    })
}
