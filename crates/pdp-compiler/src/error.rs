use thiserror::Error;

/// Error type for PSL compilation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("No rules found in input")]
    EmptyList,
    #[error("Invalid rule '{rule}' on line {line}: {reason}")]
    InvalidRule {
        line: usize,
        rule: String,
        reason: String,
    },
}
