//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no dependencies, so it can be shared by
//! the engine, the terminal front end, and the session log.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn offset**: row -2, column `FIELD_WIDTH / 2`
//!
//! Rows above the field (row < 0) are legal for a falling piece but never
//! rendered.
//!
//! # Gravity
//!
//! The gravity driver moves the active piece down once every
//! `BASE_GRAVITY_MS * GRAVITY_DECAY^level` milliseconds:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 0 | 1000ms |
//! | 1 | 660ms |
//! | 2 | 435ms |
//! | 5 | 125ms |
//! | 10 | 15ms |
//!
//! # Examples
//!
//! ```
//! use tetris_board_types::{ColorIndex, Command, ShapeKind, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//! assert_eq!(Command::from_str("rotate"), Some(Command::Rotate));
//! assert_eq!(Command::MoveLeft.delta(), Some((0, -1)));
//!
//! assert!(ColorIndex::BACKGROUND.is_background());
//! assert_eq!(ColorIndex::new(3).map(ColorIndex::get), Some(3));
//! assert_eq!(ColorIndex::new(0), None);
//!
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//! ```

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: u8 = 10;

/// Field height in cells (20 rows)
pub const FIELD_HEIGHT: u8 = 20;

/// Row offset of a freshly spawned piece (partly above the visible field)
pub const SPAWN_ROW: i8 = -2;

/// Column offset of a freshly spawned piece
pub const SPAWN_COL: i8 = (FIELD_WIDTH / 2) as i8;

/// Number of piece colors (indices 1..=PIECE_COLORS)
pub const PIECE_COLORS: u8 = 6;

/// Palette length a presentation layer must provide: background + piece colors
pub const PALETTE_LEN: usize = PIECE_COLORS as usize + 1;

/// Render tick for the terminal front end (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 0
pub const BASE_GRAVITY_MS: u64 = 1000;

/// Per-level multiplier applied to the gravity interval
pub const GRAVITY_DECAY: f64 = 0.66;

/// Lower bound for the gravity interval
pub const GRAVITY_FLOOR_MS: u64 = 1;

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N lines at level 0:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by (level + 1).
pub const SCORE_TABLE: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven tetromino kinds, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    O,
    L,
    J,
    Z,
    T,
    S,
    I,
}

impl ShapeKind {
    /// All kinds in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::O,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::Z,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::I,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// ```
    /// use tetris_board_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "o" => Some(ShapeKind::O),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "z" => Some(ShapeKind::Z),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "i" => Some(ShapeKind::I),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::O => "o",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::Z => "z",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::I => "i",
        }
    }
}

/// Opaque color index stored in the field.
///
/// `0` is the background (empty cell); `1..=PIECE_COLORS` are piece colors.
/// The engine never knows what a color looks like; the presentation layer maps
/// indices through its own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ColorIndex(u8);

impl ColorIndex {
    /// The empty-cell index
    pub const BACKGROUND: ColorIndex = ColorIndex(0);

    /// Build a piece color index; `None` for 0 or anything past `PIECE_COLORS`
    pub fn new(index: u8) -> Option<Self> {
        if (1..=PIECE_COLORS).contains(&index) {
            Some(ColorIndex(index))
        } else {
            None
        }
    }

    /// The `n`-th piece color, wrapping: 0 -> 1, ..., PIECE_COLORS -> 1
    pub const fn nth_piece_color(n: u8) -> Self {
        ColorIndex(1 + n % PIECE_COLORS)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_background(self) -> bool {
        self.0 == 0
    }
}

/// Player/driver commands the board understands
///
/// Each maps to exactly one engine operation; see [`Command::delta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (locks when blocked)
    SoftDrop,
    /// Rotate 90° clockwise; restarts the game when it is over
    Rotate,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::SoftDrop,
        Command::Rotate,
    ];

    /// `(d_row, d_col)` for movement commands, `None` for rotation
    pub fn delta(&self) -> Option<(i8, i8)> {
        match self {
            Command::MoveLeft => Some((0, -1)),
            Command::MoveRight => Some((0, 1)),
            Command::SoftDrop => Some((1, 0)),
            Command::Rotate => None,
        }
    }

    /// Parse command from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
        }
    }
}

/// A cell of the settled field
pub type Cell = ColorIndex;

/// Emitted by the engine after a piece locks into the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub piece_id: u32,
    pub kind: ShapeKind,
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}
