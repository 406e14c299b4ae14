//! Shapes module - tetromino catalog, rotation, and wall kicks
//!
//! Each shape is four (row, col) offsets relative to the piece's anchor.
//! Rotation is a plain 90° clockwise turn inside the shape's bounding square,
//! followed by a boundary-only wall kick (no kick tables).

use crate::types::{ShapeKind, FIELD_HEIGHT, FIELD_WIDTH};

/// Offset of a single cell relative to the piece anchor, as (row, col)
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the anchor
pub type Shape = [CellOffset; 4];

/// Spawn orientation of every shape
pub fn shape_of(kind: ShapeKind) -> Shape {
    match kind {
        ShapeKind::O => [(0, 0), (0, 1), (1, 0), (1, 1)],
        ShapeKind::L => [(0, 0), (0, 1), (1, 1), (2, 1)],
        ShapeKind::J => [(0, 1), (1, 1), (2, 1), (2, 0)],
        ShapeKind::Z => [(0, 1), (1, 0), (1, 1), (2, 0)],
        ShapeKind::T => [(0, 1), (1, 0), (1, 1), (2, 1)],
        ShapeKind::S => [(0, 0), (1, 0), (1, 1), (2, 1)],
        ShapeKind::I => [(0, 1), (1, 1), (2, 1), (3, 1)],
    }
}

/// Absolute field cells of `shape` anchored at `(row, col)`.
///
/// Saturates at the `i8` limits; a saturated cell is always outside the field.
#[inline]
pub fn absolute_cells(shape: &Shape, (row, col): (i8, i8)) -> [(i8, i8); 4] {
    shape.map(|(r, c)| (r.saturating_add(row), c.saturating_add(col)))
}

/// Largest of the row span and column span (max - min)
fn bounding_size(shape: &Shape) -> i8 {
    let (mut min_r, mut max_r) = (i8::MAX, i8::MIN);
    let (mut min_c, mut max_c) = (i8::MAX, i8::MIN);
    for &(r, c) in shape {
        min_r = min_r.min(r);
        max_r = max_r.max(r);
        min_c = min_c.min(c);
        max_c = max_c.max(c);
    }
    (max_r - min_r).max(max_c - min_c)
}

/// Rotate 90° clockwise: (r, c) -> (c, size - r)
pub fn rotate_cw(shape: &Shape) -> Shape {
    let size = bounding_size(shape);
    shape.map(|(r, c)| (c, size - r))
}

/// Nudge `offset` so the shape fits inside the side walls and above the floor.
///
/// Only moves right, left, or up, and only as far as needed; an in-bounds
/// placement is returned unchanged. Settled cells are not considered.
pub fn wall_kick(shape: &Shape, offset: (i8, i8)) -> (i8, i8) {
    let cells = absolute_cells(shape, offset);
    let min_col = cells.iter().map(|&(_, c)| c).min().unwrap_or(0);
    let max_col = cells.iter().map(|&(_, c)| c).max().unwrap_or(0);
    let max_row = cells.iter().map(|&(r, _)| r).max().unwrap_or(0);

    let (mut row, mut col) = offset;
    col = col.saturating_sub(min_col.min(0));
    col = col.saturating_add((FIELD_WIDTH as i8 - 1).saturating_sub(max_col).min(0));
    row = row.saturating_add((FIELD_HEIGHT as i8 - 1).saturating_sub(max_row).min(0));
    (row, col)
}

/// Rotate and kick; `Some((shape, offset))` when every resulting cell is free.
pub fn try_rotate(
    shape: &Shape,
    offset: (i8, i8),
    is_free: impl Fn(i8, i8) -> bool,
) -> Option<(Shape, (i8, i8))> {
    let rotated = rotate_cw(shape);
    let kicked = wall_kick(&rotated, offset);
    absolute_cells(&rotated, kicked)
        .iter()
        .all(|&(r, c)| is_free(r, c))
        .then_some((rotated, kicked))
}

/// Same cells regardless of order
pub fn same_cells(a: &Shape, b: &Shape) -> bool {
    let mut a = *a;
    let mut b = *b;
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_o_rotation_is_identity() {
        let o = shape_of(ShapeKind::O);
        assert!(same_cells(&rotate_cw(&o), &o));
    }

    #[test]
    fn test_i_rotation_alternates_orientation() {
        let i = shape_of(ShapeKind::I);
        let flat = rotate_cw(&i);
        assert!(flat.iter().all(|&(r, _)| r == 1));

        let upright = rotate_cw(&flat);
        assert!(upright.iter().all(|&(_, c)| c == 2));
    }

    #[test]
    fn test_t_rotation() {
        let t = shape_of(ShapeKind::T);
        // (r, c) -> (c, 2 - r)
        assert!(same_cells(&rotate_cw(&t), &[(1, 2), (0, 1), (1, 1), (1, 0)]));
    }

    #[test]
    fn test_wall_kick_left() {
        let i = rotate_cw(&shape_of(ShapeKind::I)); // row 1, cols 0..=3
        assert_eq!(wall_kick(&i, (5, -2)), (5, 0));
    }

    #[test]
    fn test_wall_kick_right() {
        let i = rotate_cw(&shape_of(ShapeKind::I));
        assert_eq!(wall_kick(&i, (5, 8)), (5, 6));
    }

    #[test]
    fn test_wall_kick_floor() {
        let i = shape_of(ShapeKind::I); // rows 0..=3
        assert_eq!(wall_kick(&i, (18, 4)), (16, 4));
    }

    #[test]
    fn test_wall_kick_noop_in_bounds() {
        let l = shape_of(ShapeKind::L);
        assert_eq!(wall_kick(&l, (-2, 5)), (-2, 5));
        assert_eq!(wall_kick(&l, (17, 8)), (17, 8));
    }

    #[test]
    fn test_absolute_cells_saturate_at_limits() {
        let i = shape_of(ShapeKind::I);
        for (r, c) in absolute_cells(&i, (i8::MAX, i8::MAX)) {
            assert_eq!((r, c), (i8::MAX, i8::MAX));
        }
        for (r, c) in absolute_cells(&i, (i8::MIN, i8::MIN)) {
            assert!(r <= i8::MIN + 3);
            assert_eq!(c, i8::MIN + 1);
        }
    }

    #[test]
    fn test_wall_kick_far_outside_does_not_overflow() {
        let i = rotate_cw(&shape_of(ShapeKind::I));
        let (_, col) = wall_kick(&i, (5, i8::MIN));
        assert!(col > i8::MIN);
        let (row, _) = wall_kick(&shape_of(ShapeKind::I), (i8::MAX, 4));
        assert!(row < i8::MAX);
    }

    #[test]
    fn test_try_rotate_respects_predicate() {
        let t = shape_of(ShapeKind::T);
        assert!(try_rotate(&t, (5, 5), |_, _| true).is_some());
        assert!(try_rotate(&t, (5, 5), |_, _| false).is_none());
    }
}
