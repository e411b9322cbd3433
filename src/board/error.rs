//! Error types for board operations.

use std::fmt;

use super::{PieceKind, Side, Square};

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for board diagram parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    /// Diagram does not have exactly 8 rows
    WrongRowCount { found: usize },
    /// A row does not have exactly 8 cells
    WrongRowLength { row: usize, found: usize },
    /// A cell is neither a piece glyph, a piece letter nor '.'
    InvalidGlyph { row: usize, col: usize, char: char },
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramError::WrongRowCount { found } => {
                write!(f, "Diagram must have 8 rows, found {found}")
            }
            DiagramError::WrongRowLength { row, found } => {
                write!(f, "Row {row} must have 8 cells, found {found}")
            }
            DiagramError::InvalidGlyph { row, col, char } => {
                write!(f, "Invalid cell '{char}' at row {row}, column {col}")
            }
        }
    }
}

impl std::error::Error for DiagramError {}

/// Why an attempted move was not accepted.
///
/// An illegal move is an ordinary outcome, so this never escapes as a panic;
/// it rides along in [`MoveOutcome`](super::MoveOutcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The source square holds no piece
    EmptySource { square: Square },
    /// The source piece does not belong to the side to move
    WrongSide { expected: Side, found: Side },
    /// Source and destination are the same square
    NullMove { square: Square },
    /// The piece cannot reach the destination (shape or blocked path)
    IllegalPattern { kind: PieceKind, from: Square, to: Square },
    /// The destination holds a piece of the mover's own side
    FriendlyCapture { square: Square },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::EmptySource { square } => write!(f, "No piece on {square}"),
            Rejection::WrongSide { expected, found } => {
                write!(f, "It is {expected}'s turn, but the piece belongs to {found}")
            }
            Rejection::NullMove { square } => {
                write!(f, "Piece on {square} cannot move to its own square")
            }
            Rejection::IllegalPattern { kind, from, to } => {
                write!(f, "{kind} cannot move from {from} to {to}")
            }
            Rejection::FriendlyCapture { square } => {
                write!(f, "Cannot capture own piece on {square}")
            }
        }
    }
}

impl std::error::Error for Rejection {}
