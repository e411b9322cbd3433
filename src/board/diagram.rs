//! Text diagrams of the board.
//!
//! One line per row, row 0 first, one cell per column. Cells are Unicode
//! piece glyphs (as rendered by `Display`), piece letters (uppercase White)
//! or `.` for an empty square.

use std::fmt;
use std::str::FromStr;

use super::error::DiagramError;
use super::{Board, Piece};

impl Board {
    /// Parse a diagram.
    ///
    /// Blank lines and whitespace inside a line are ignored, so diagrams may be
    /// indented or spaced out for readability.
    pub fn from_diagram(diagram: &str) -> Result<Self, DiagramError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|cells| !cells.is_empty())
            .collect();

        if rows.len() != 8 {
            return Err(DiagramError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != 8 {
                return Err(DiagramError::WrongRowLength {
                    row,
                    found: cells.len(),
                });
            }
            for (col, &c) in cells.iter().enumerate() {
                board.squares[row][col] = match c {
                    '.' => None,
                    _ => Some(
                        Piece::from_glyph(c)
                            .or_else(|| Piece::from_char(c))
                            .ok_or(DiagramError::InvalidGlyph { row, col, char: c })?,
                    ),
                };
            }
        }

        Ok(board)
    }
}

impl FromStr for Board {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_diagram(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            for cell in row {
                let c = cell.map_or('.', Piece::glyph);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
