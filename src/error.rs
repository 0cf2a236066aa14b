use thiserror::Error;

/// Everything that can go wrong building a grid or a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Both dimensions must be positive.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("board has no rows")]
    EmptyBoard,
}
