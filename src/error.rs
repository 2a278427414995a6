use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MutationError {
    /// A node of a supported kind is missing the structure the operator
    /// needs, such as a loop header with no test expression.
    #[error("malformed {kind} at {line}:{column}: {reason}")]
    MalformedNode {
        kind: String,
        line: usize,
        column: usize,
        reason: String,
    },

    /// An operator was called with a node kind outside its declared set.
    /// Dispatch filters on `supported_kinds`, so this is a caller bug.
    #[error("{operator} does not support {kind} nodes")]
    UnsupportedNode {
        operator: &'static str,
        kind: String,
    },

    #[error("byte range {start}..{end} does not index into {len} bytes of source")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("failed to parse {file}")]
    Parse { file: Utf8PathBuf },
}

pub type Result<T> = std::result::Result<T, MutationError>;
