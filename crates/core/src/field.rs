//! Field module - the settled playfield
//!
//! The field is a 20x10 grid where each cell is either background (empty) or a
//! piece color index. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom) and col 0..9
//! (left to right). Rows above the field (row < 0) are free for a falling piece
//! but never stored.

use arrayvec::ArrayVec;

use crate::types::{Cell, ColorIndex, FIELD_HEIGHT, FIELD_WIDTH};

/// Total number of cells on the field
const FIELD_SIZE: usize = (FIELD_WIDTH as usize) * (FIELD_HEIGHT as usize);

/// Upper bound on rows removed by one clear
pub const MAX_CLEARED_ROWS: usize = FIELD_HEIGHT as usize;

/// The settled field - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; FIELD_SIZE],
}

impl Field {
    /// Create a new empty field
    pub fn new() -> Self {
        Self {
            cells: [ColorIndex::BACKGROUND; FIELD_SIZE],
        }
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= FIELD_HEIGHT as i8 || col < 0 || col >= FIELD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * (FIELD_WIDTH as usize) + (col as usize))
    }

    pub fn width(&self) -> u8 {
        FIELD_WIDTH
    }

    pub fn height(&self) -> u8 {
        FIELD_HEIGHT
    }

    /// Get cell at (row, col); `None` when out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether a piece cell may occupy (row, col).
    ///
    /// Inside the side walls, above the floor, and either above the visible
    /// field or on an empty cell.
    pub fn is_cell_free(&self, row: i8, col: i8) -> bool {
        if col < 0 || col >= FIELD_WIDTH as i8 || row >= FIELD_HEIGHT as i8 {
            return false;
        }
        row < 0 || matches!(self.get(row, col), Some(c) if c.is_background())
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= FIELD_HEIGHT as usize {
            return false;
        }
        self.row(row).iter().all(|cell| !cell.is_background())
    }

    pub fn is_row_empty(&self, row: usize) -> bool {
        if row >= FIELD_HEIGHT as usize {
            return true;
        }
        self.row(row).iter().all(|cell| cell.is_background())
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        let width = FIELD_WIDTH as usize;
        let start = row * width;
        &self.cells[start..start + width]
    }

    /// Remove every full row, letting the rows above fall into place.
    ///
    /// Equivalent to keeping the non-full rows in order and prepending as many
    /// empty rows as were removed. Returns the removed row indices, bottom to
    /// top. Two-pointer pass, no allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let width = FIELD_WIDTH as usize;
        let mut write_row = FIELD_HEIGHT as usize;

        for read_row in (0..FIELD_HEIGHT as usize).rev() {
            if self.is_row_full(read_row) {
                cleared_rows.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src_start = read_row * width;
                    let dst_start = write_row * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        for cell in &mut self.cells[..write_row * width] {
            *cell = ColorIndex::BACKGROUND;
        }

        cleared_rows
    }

    /// Write `color` into every given absolute cell.
    ///
    /// Returns false, touching nothing, if any cell is out of bounds or filled.
    pub fn lock_cells(&mut self, cells: &[(i8, i8)], color: ColorIndex) -> bool {
        if !cells
            .iter()
            .all(|&(row, col)| matches!(self.get(row, col), Some(c) if c.is_background()))
        {
            return false;
        }

        for &(row, col) in cells {
            self.set(row, col, color);
        }

        true
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_background()).count()
    }

    /// Reset every cell to background
    pub fn clear(&mut self) {
        self.cells.fill(ColorIndex::BACKGROUND);
    }

    /// Build a field from text rows, top row first.
    ///
    /// `.` is background and a digit is a color index. Rows may be fewer than
    /// the field height; they are bottom-aligned. Returns `None` on a bad
    /// character, a row of the wrong width, or too many rows.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        if rows.len() > FIELD_HEIGHT as usize {
            return None;
        }
        let mut field = Self::new();
        let top = FIELD_HEIGHT as usize - rows.len();
        for (i, text) in rows.iter().enumerate() {
            if text.chars().count() != FIELD_WIDTH as usize {
                return None;
            }
            for (col, ch) in text.chars().enumerate() {
                let cell = match ch {
                    '.' => ColorIndex::BACKGROUND,
                    d => ColorIndex::new(d.to_digit(10)? as u8)?,
                };
                field.set((top + i) as i8, col as i8, cell);
            }
        }
        Some(field)
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(i: u8) -> ColorIndex {
        ColorIndex::new(i).unwrap()
    }

    #[test]
    fn test_field_index_calculation() {
        assert_eq!(Field::index(0, 0), Some(0));
        assert_eq!(Field::index(0, 9), Some(9));
        assert_eq!(Field::index(1, 0), Some(10));
        assert_eq!(Field::index(19, 9), Some(199));
        assert_eq!(Field::index(-1, 0), None);
        assert_eq!(Field::index(0, 10), None);
        assert_eq!(Field::index(20, 0), None);
    }

    #[test]
    fn test_cell_free_rules() {
        let mut field = Field::new();
        field.set(19, 4, color(2));

        // Above the field is free, but only between the walls.
        assert!(field.is_cell_free(-3, 0));
        assert!(!field.is_cell_free(-3, -1));
        assert!(!field.is_cell_free(-3, 10));

        assert!(!field.is_cell_free(20, 0));
        assert!(!field.is_cell_free(19, 4));
        assert!(field.is_cell_free(19, 5));
    }

    #[test]
    fn test_clear_keeps_surviving_row_order() {
        let mut field = Field::from_rows(&[
            "1.........",
            "2222222222",
            "..3.......",
            "4444444444",
        ])
        .unwrap();

        let cleared = field.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);

        assert!(field.is_row_empty(16));
        assert!(field.is_row_empty(17));
        assert_eq!(field.get(18, 0), Some(color(1)));
        assert_eq!(field.get(19, 2), Some(color(3)));
        assert_eq!(field.filled_count(), 2);
    }

    #[test]
    fn test_lock_cells_rejects_overlap_without_writing() {
        let mut field = Field::new();
        field.set(19, 0, color(1));

        assert!(!field.lock_cells(&[(18, 0), (19, 0)], color(2)));
        assert_eq!(field.get(18, 0), Some(ColorIndex::BACKGROUND));

        assert!(!field.lock_cells(&[(-1, 0)], color(2)));
        assert!(field.lock_cells(&[(18, 0), (18, 1)], color(2)));
        assert_eq!(field.filled_count(), 3);
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(Field::from_rows(&["123"]).is_none());
        assert!(Field::from_rows(&["x........."]).is_none());
        assert!(Field::from_rows(&["7........."]).is_none());
        assert!(Field::from_rows(&[".........."; 21]).is_none());
    }
}
