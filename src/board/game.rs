//! Move acceptance, turn alternation and click-driven selection.
//!
//! [`attempt_move`] is the pure entry point: it takes a board and the side to
//! move and hands back the resulting board and side, leaving its inputs
//! untouched. [`GameState`] threads that through the select-then-click flow a
//! board UI drives.

use super::error::{Rejection, SquareError};
use super::movegen::legal_destinations;
use super::rules::is_pseudo_legal;
use super::{side_of, Board, FriendlyCapture, Piece, RulesConfig, Side, Square, SquareSet};

/// Result of [`attempt_move`].
///
/// On rejection `board` and `side_to_move` are the inputs, unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    pub side_to_move: Side,
    /// Piece that stood on the destination before an accepted move
    pub captured: Option<Piece>,
    /// Why the move was refused, `None` if it was accepted
    pub rejection: Option<Rejection>,
}

impl MoveOutcome {
    #[inline]
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.rejection.is_none()
    }

    /// The new board, or the reason there is none.
    pub fn into_result(self) -> Result<Board, Rejection> {
        match self.rejection {
            None => Ok(self.board),
            Some(rejection) => Err(rejection),
        }
    }
}

/// Validate and apply a move under the default [`RulesConfig`].
#[must_use]
pub fn attempt_move(from: Square, to: Square, board: &Board, side_to_move: Side) -> MoveOutcome {
    attempt_move_with(from, to, board, side_to_move, &RulesConfig::default())
}

/// Validate and apply a move.
///
/// Accepted moves relocate the piece, clear the origin and pass the turn to
/// the opponent.
#[must_use]
pub fn attempt_move_with(
    from: Square,
    to: Square,
    board: &Board,
    side_to_move: Side,
    config: &RulesConfig,
) -> MoveOutcome {
    match validate(from, to, board, side_to_move, config) {
        Ok(piece) => {
            let mut next = *board;
            next.clear(from);
            let captured = next.set_piece(to, piece);

            #[cfg(feature = "logging")]
            log::debug!("{piece} {from}->{to} accepted, captured {captured:?}");

            MoveOutcome {
                board: next,
                side_to_move: side_to_move.opponent(),
                captured,
                rejection: None,
            }
        }
        Err(rejection) => {
            #[cfg(feature = "logging")]
            log::debug!("{from}->{to} rejected: {rejection}");

            MoveOutcome {
                board: *board,
                side_to_move,
                captured: None,
                rejection: Some(rejection),
            }
        }
    }
}

fn validate(
    from: Square,
    to: Square,
    board: &Board,
    side_to_move: Side,
    config: &RulesConfig,
) -> Result<Piece, Rejection> {
    let piece = board
        .piece_at(from)
        .ok_or(Rejection::EmptySource { square: from })?;

    if piece.side != side_to_move {
        return Err(Rejection::WrongSide {
            expected: side_to_move,
            found: piece.side,
        });
    }

    // Only the King's predicate admits a zero-length move.
    if from == to {
        return Err(Rejection::NullMove { square: from });
    }

    if !is_pseudo_legal(piece.kind, from, to, board, piece.side) {
        return Err(Rejection::IllegalPattern {
            kind: piece.kind,
            from,
            to,
        });
    }

    if config.friendly_capture == FriendlyCapture::Forbid
        && side_of(board.piece_at(to)) == Some(piece.side)
    {
        return Err(Rejection::FriendlyCapture { square: to });
    }

    Ok(piece)
}

/// What a click did to the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing was selected and the click was not on a piece of the side to move
    Ignored,
    /// Nothing was selected and the clicked piece is now selected
    Selected,
    /// A move from the previous selection to the clicked square was tried; the
    /// clicked square is now selected whatever the result
    MoveAttempted(MoveOutcome),
}

/// Board, side to move, selection and the selection's destinations.
///
/// Sole owner and mutator of its board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Side,
    selection: Option<Square>,
    destinations: SquareSet,
    config: RulesConfig,
}

impl GameState {
    /// Starting position, White to move, default rules.
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Starting position, White to move.
    pub fn with_config(config: RulesConfig) -> Self {
        Self::from_position(Board::new(), Side::White, config)
    }

    /// Arbitrary position with nothing selected.
    pub fn from_position(board: Board, side_to_move: Side, config: RulesConfig) -> Self {
        GameState {
            board,
            side_to_move,
            selection: None,
            destinations: SquareSet::EMPTY,
            config,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    /// Destinations of the selected square's occupant; empty with no selection.
    #[inline]
    pub fn destinations(&self) -> SquareSet {
        self.destinations
    }

    #[inline]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Try a move outside the selection flow, committing it if accepted.
    pub fn try_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        let outcome = attempt_move_with(from, to, &self.board, self.side_to_move, &self.config);
        self.board = outcome.board;
        self.side_to_move = outcome.side_to_move;
        outcome
    }

    /// Feed one click on `sq` through the selection state machine.
    ///
    /// With nothing selected, only a piece of the side to move can be
    /// selected. With a selection, the click is a move attempt from the
    /// selection to `sq`, after which `sq` becomes the selection even when
    /// the move was refused.
    pub fn click(&mut self, sq: Square) -> ClickOutcome {
        match self.selection {
            None => {
                if side_of(self.board.piece_at(sq)) == Some(self.side_to_move) {
                    self.select(sq);
                    ClickOutcome::Selected
                } else {
                    ClickOutcome::Ignored
                }
            }
            Some(from) => {
                let outcome = self.try_move(from, sq);
                self.select(sq);
                ClickOutcome::MoveAttempted(outcome)
            }
        }
    }

    /// [`click`](Self::click) with raw coordinates, which may be off the board.
    pub fn click_at(&mut self, row: usize, col: usize) -> Result<ClickOutcome, SquareError> {
        let sq = Square::try_from((row, col))?;
        Ok(self.click(sq))
    }

    /// Drop the selection and its destinations.
    pub fn deselect(&mut self) {
        self.selection = None;
        self.destinations = SquareSet::EMPTY;
    }

    fn select(&mut self, sq: Square) {
        self.selection = Some(sq);
        self.destinations = legal_destinations(sq, &self.board);

        #[cfg(feature = "logging")]
        log::trace!("selected {sq}, {} destinations", self.destinations.len());
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
