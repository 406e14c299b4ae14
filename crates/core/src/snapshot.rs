use crate::board::Piece;
use crate::types::{ShapeKind, FIELD_HEIGHT, FIELD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub color: u8,
    pub row: i8,
    pub col: i8,
    /// Absolute cells, possibly above the field
    pub cells: [(i8, i8); 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            color: value.color.get(),
            row: value.row,
            col: value.col,
            cells: value.cells(),
        }
    }
}

/// Render-ready copy of a board.
///
/// `board` holds the color index of every visible cell with the active piece
/// already merged in, exactly as `Board::cell_color` reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub game_over: bool,
    pub episode_id: u32,
    pub piece_id: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl GameSnapshot {
    /// Color index at (row, col); 0 outside the field
    pub fn color_at(&self, row: usize, col: usize) -> u8 {
        self.board
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(0)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
            active: None,
            game_over: false,
            episode_id: 0,
            piece_id: 0,
            score: 0,
            level: 0,
            lines: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_at_reads_grid_and_is_zero_outside() {
        let mut snap = GameSnapshot::default();
        snap.board[19][9] = 5;

        assert_eq!(snap.color_at(19, 9), 5);
        assert_eq!(snap.color_at(0, 0), 0);
        assert_eq!(snap.color_at(20, 0), 0);
        assert_eq!(snap.color_at(0, 10), 0);
    }
}
