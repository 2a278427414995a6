use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::splice::{self, Span};

/// One candidate change to a source file. A mutant is self-contained: it
/// owns the full original text and the full mutated text and holds no
/// reference into the parse tree that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mutant {
    pub file: Utf8PathBuf,
    pub operator: String,
    pub line: usize,
    pub column: usize,
    pub span: Span,
    pub original: String,
    pub replacement: String,
    pub original_source: String,
    pub mutated_source: String,
}

impl Mutant {
    /// Splice `replacement` over `span` and package the result. The
    /// mutated text differs from `original_source` only inside the span.
    pub fn build(
        file: &Utf8Path,
        operator: &str,
        original_source: &str,
        span: Span,
        replacement: &str,
    ) -> Result<Mutant> {
        let mutated_source = splice::replace_range(original_source, span, replacement)?;
        let (line, column) = splice::position(original_source, span.start);
        Ok(Mutant {
            file: file.to_owned(),
            operator: operator.to_string(),
            line,
            column,
            span,
            original: original_source[span.start..span.end].to_string(),
            replacement: replacement.to_string(),
            original_source: original_source.to_string(),
            mutated_source,
        })
    }

    pub fn diff(&self) -> String {
        generate_diff(&self.original_source, &self.mutated_source)
    }

    /// File name this mutant is written under by `save`.
    pub fn file_name(&self, id: usize) -> String {
        let name = self.file.file_name().unwrap_or("source");
        format!("{:04}-{}-{}", id, self.operator, name)
    }

    /// Write the full mutated source into `dir`. Ids are assigned by the
    /// caller in enumeration order.
    pub fn save(&self, dir: &Utf8Path, id: usize) -> std::io::Result<Utf8PathBuf> {
        let path = dir.join(self.file_name(id));
        std::fs::write(&path, &self.mutated_source)?;
        Ok(path)
    }
}

/// Save every mutant in the batch, one result per mutant. A failed write
/// never stops the rest of the batch.
pub fn save_all(mutants: &[Mutant], dir: &Utf8Path) -> Vec<std::io::Result<Utf8PathBuf>> {
    let _ = std::fs::create_dir_all(dir);
    mutants
        .iter()
        .enumerate()
        .map(|(i, m)| m.save(dir, i + 1))
        .collect()
}

pub fn generate_diff(original: &str, mutated: &str) -> String {
    use similar::TextDiff;
    let diff = TextDiff::from_lines(original, mutated);
    let mut output = String::new();
    for change in diff.iter_all_changes() {
        match change.tag() {
            similar::ChangeTag::Delete => {
                output.push_str(&format!("- {}", change));
            }
            similar::ChangeTag::Insert => {
                output.push_str(&format!("+ {}", change));
            }
            _ => {}
        }
    }
    output
}
