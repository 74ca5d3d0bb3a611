use thiserror::Error;

/// Fatal editing-phase input errors.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid command: expected `<row> <col>` or a single command, got {0} tokens")]
    WrongTokenCount(usize),
    #[error("invalid command: `{0}` needs a column (enter row and column separated by space)")]
    SingleInteger(i64),
    #[error("invalid row `{0}`")]
    InvalidRow(String),
    #[error("invalid column `{0}`")]
    InvalidColumn(String),
    #[error("input stream closed")]
    EndOfInput,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PartialEq for InputError {
    fn eq(&self, other: &Self) -> bool {
        use InputError::*;
        match (self, other) {
            (WrongTokenCount(a), WrongTokenCount(b)) => a == b,
            (SingleInteger(a), SingleInteger(b)) => a == b,
            (InvalidRow(a), InvalidRow(b)) => a == b,
            (InvalidColumn(a), InvalidColumn(b)) => a == b,
            (EndOfInput, EndOfInput) => true,
            (Io(a), Io(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}
