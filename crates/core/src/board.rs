//! Board module - the board engine state machine
//!
//! Ties the field, the active piece, the RNG, and scoring together. The engine
//! is single-threaded; [`crate::SharedBoard`] adds the lock that serializes
//! gravity ticks against key presses.
//!
//! The engine is either *playing* or *game over*. Game over is entered when a
//! fresh piece overlaps the stack on spawn or when a piece cannot settle without
//! part of it above the field (top-out). It is left only through [`Board::reset`],
//! which [`Board::rotate`] calls when the game is over.

use crate::field::Field;
use crate::rng::SimpleRng;
use crate::scoring::{level_for_lines, line_clear_score};
use crate::shapes::{absolute_cells, shape_of, try_rotate, Shape};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    /// Cell offsets; replaced wholesale on rotation
    pub shape: Shape,
    pub color: ColorIndex,
    pub row: i8,
    pub col: i8,
}

impl Piece {
    /// Create a piece in spawn orientation at the spawn offset
    pub fn new(kind: ShapeKind, color: ColorIndex) -> Self {
        Self {
            kind,
            shape: shape_of(kind),
            color,
            row: SPAWN_ROW,
            col: SPAWN_COL,
        }
    }

    /// Same piece anchored elsewhere
    pub fn at(self, row: i8, col: i8) -> Self {
        Self { row, col, ..self }
    }

    /// Absolute field cells
    pub fn cells(&self) -> [(i8, i8); 4] {
        absolute_cells(&self.shape, (self.row, self.col))
    }

    pub fn occupies(&self, row: i8, col: i8) -> bool {
        self.cells().contains(&(row, col))
    }

    /// Check if every cell is free on the field
    pub fn fits(&self, field: &Field) -> bool {
        self.cells()
            .iter()
            .all(|&(r, c)| field.is_cell_free(r, c))
    }

    /// Any cell above the visible field
    pub fn is_above_field(&self) -> bool {
        self.cells().iter().any(|&(r, _)| r < 0)
    }
}

/// What a call to [`Board::move_by`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Offset shifted by the delta
    Moved,
    /// Not a downward move and the target was not free; nothing changed
    Blocked,
    /// Downward move was blocked; the piece locked and a new one spawned
    Locked,
    /// Downward move was blocked with part of the piece above the field
    ToppedOut,
    /// The game is over; nothing changed
    Ignored,
}

impl MoveOutcome {
    /// Whether the board state changed
    pub fn changed(&self) -> bool {
        matches!(
            self,
            MoveOutcome::Moved | MoveOutcome::Locked | MoveOutcome::ToppedOut
        )
    }
}

/// Complete board state
#[derive(Debug, Clone)]
pub struct Board {
    field: Field,
    active: Piece,
    rng: SimpleRng,
    /// Increments on every reset.
    episode_id: u32,
    /// Increments on every spawn (including the one that tops out).
    piece_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    score: u32,
    level: u32,
    lines: u32,
    game_over: bool,
}

impl Board {
    /// Create a new board with the given RNG seed and spawn the first piece
    pub fn new(seed: u32) -> Self {
        let mut board = Self {
            field: Field::new(),
            active: Piece::new(ShapeKind::O, ColorIndex::nth_piece_color(0)),
            rng: SimpleRng::new(seed),
            episode_id: 0,
            piece_id: 0,
            last_event: None,
            score: 0,
            level: 0,
            lines: 0,
            game_over: false,
        };
        board.spawn();
        board
    }

    /// Build a board around an existing field and active piece.
    ///
    /// Score, level, and lines start at zero. Game over is derived from whether
    /// the piece fits, exactly as a spawn would.
    pub fn from_parts(field: Field, active: Piece, seed: u32) -> Self {
        let game_over = !active.fits(&field);
        Self {
            field,
            active,
            rng: SimpleRng::new(seed),
            episode_id: 0,
            piece_id: 1,
            last_event: None,
            score: 0,
            level: 0,
            lines: 0,
            game_over,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Whether a piece cell may occupy (row, col); see [`Field::is_cell_free`]
    pub fn is_cell_free(&self, row: i8, col: i8) -> bool {
        self.field.is_cell_free(row, col)
    }

    /// Color shown at (row, col): the active piece's, else the field's
    pub fn cell_color(&self, row: i8, col: i8) -> ColorIndex {
        if self.active.occupies(row, col) {
            return self.active.color;
        }
        self.field.get(row, col).unwrap_or(ColorIndex::BACKGROUND)
    }

    /// Spawn a random piece at the spawn offset.
    ///
    /// Game over is recomputed from the new piece: an overlap on spawn ends the
    /// game before any move is attempted.
    fn spawn(&mut self) {
        let kind = self.rng.next_shape();
        let color = self.rng.next_color();
        self.active = Piece::new(kind, color);
        self.piece_id = self.piece_id.wrapping_add(1);
        self.game_over = !self.active.fits(&self.field);
    }

    /// Shift the active piece by (d_row, d_col).
    ///
    /// A blocked downward move (exactly `(1, 0)`) either locks the piece or, if
    /// part of it is still above the field, ends the game without locking.
    pub fn move_by(&mut self, d_row: i8, d_col: i8) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::Ignored;
        }

        let moved = self.active.at(
            self.active.row.saturating_add(d_row),
            self.active.col.saturating_add(d_col),
        );
        if moved.fits(&self.field) {
            self.active = moved;
            return MoveOutcome::Moved;
        }

        if (d_row, d_col) != (1, 0) {
            return MoveOutcome::Blocked;
        }

        if self.active.is_above_field() {
            self.game_over = true;
            return MoveOutcome::ToppedOut;
        }

        self.apply_piece();
        MoveOutcome::Locked
    }

    /// Lock the active piece where it is, clear full rows, score, and spawn.
    ///
    /// A piece that still has a cell above the field cannot lock: that is a
    /// top-out, and nothing is written. Returns the lock event on success.
    pub fn apply_piece(&mut self) -> Option<LockEvent> {
        if self.game_over {
            return None;
        }
        if self.active.is_above_field() {
            self.game_over = true;
            return None;
        }

        let locked = self.field.lock_cells(&self.active.cells(), self.active.color);
        debug_assert!(locked, "active piece overlapped the field");

        let cleared = self.field.clear_full_rows().len();
        let line_clear_score = line_clear_score(cleared, self.level);

        self.lines += cleared as u32;
        self.score = self.score.saturating_add(line_clear_score);
        self.level = level_for_lines(self.lines);

        let event = LockEvent {
            piece_id: self.piece_id,
            kind: self.active.kind,
            lines_cleared: cleared as u32,
            line_clear_score,
            score: self.score,
            level: self.level,
            lines: self.lines,
        };
        self.last_event = Some(event);

        self.spawn();
        Some(event)
    }

    /// Rotate the active piece 90° clockwise with a boundary wall kick.
    ///
    /// The rotation is all-or-nothing: shape and kicked offset are committed
    /// together only if every resulting cell is free. While the game is over
    /// this resets the board instead. Returns whether anything changed.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            self.reset();
            return true;
        }

        let field = &self.field;
        match try_rotate(
            &self.active.shape,
            (self.active.row, self.active.col),
            |r, c| field.is_cell_free(r, c),
        ) {
            Some((shape, (row, col))) => {
                self.active = Piece {
                    shape,
                    row,
                    col,
                    ..self.active
                };
                true
            }
            None => false,
        }
    }

    /// Start a new game on this board: empty field, zeroed score, new piece.
    ///
    /// The RNG keeps its sequence.
    pub fn reset(&mut self) {
        self.field.clear();
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        self.game_over = false;
        self.last_event = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.spawn();
    }

    /// Apply a player/driver command. Returns whether anything changed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command.delta() {
            Some((d_row, d_col)) => self.move_by(d_row, d_col).changed(),
            None => self.rotate(),
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (row, cells) in out.board.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = self.cell_color(row as i8, col as i8).get();
            }
        }

        out.active = Some(ActiveSnapshot::from(self.active));
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(1)
    }
}
