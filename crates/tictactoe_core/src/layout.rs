//! Surface geometry and palette.
//!
//! The board is drawn on a fixed 600x600 logical-pixel surface split into
//! a 3x3 grid of 200x200 cells.

use super::Position;
use tracing::instrument;

/// Surface width in logical pixels.
pub const SURFACE_WIDTH: f32 = 600.0;
/// Surface height in logical pixels.
pub const SURFACE_HEIGHT: f32 = 600.0;
/// Side length of one cell.
pub const CELL_SIZE: f32 = 200.0;

/// Background and game-over overlay.
pub const BACKGROUND: Rgb = Rgb(254, 171, 185);
/// Grid lines and result text.
pub const INK: Rgb = Rgb(176, 0, 81);

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A point on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal offset from the left edge.
    pub x: f32,
    /// Vertical offset from the top edge.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns true if `point` lies inside (left/top edges inclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }
}

/// The whole drawable surface.
pub const SURFACE: Rect = Rect::new(0.0, 0.0, SURFACE_WIDTH, SURFACE_HEIGHT);

/// Band holding the result text: the middle third of the surface height,
/// inset 100 px from each side.
pub const RESULT_BAND: Rect = Rect::new(
    100.0,
    SURFACE_HEIGHT / 2.0 - 50.0,
    SURFACE_WIDTH - 200.0,
    100.0,
);

/// Maps surface coordinates to the cell under them.
///
/// Coordinates are divided by [`CELL_SIZE`] and clamped into the grid, so
/// the right and bottom edges still land in the last row or column.
/// Negative or non-finite coordinates map to no cell.
#[instrument]
pub fn cell_at(x: f32, y: f32) -> Option<Position> {
    if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
        return None;
    }
    let col = ((x / CELL_SIZE) as usize).min(2);
    let row = ((y / CELL_SIZE) as usize).min(2);
    Position::from_row_col(row, col)
}

/// Rectangle covered by a cell.
pub fn cell_rect(pos: Position) -> Rect {
    Rect::new(
        pos.col() as f32 * CELL_SIZE,
        pos.row() as f32 * CELL_SIZE,
        CELL_SIZE,
        CELL_SIZE,
    )
}

/// The four interior grid lines: two vertical, then two horizontal per
/// step, each spanning the full surface.
pub fn grid_lines() -> [(Point, Point); 4] {
    let v = |i: f32| {
        (
            Point::new(i * CELL_SIZE, 0.0),
            Point::new(i * CELL_SIZE, SURFACE_HEIGHT),
        )
    };
    let h = |i: f32| {
        (
            Point::new(0.0, i * CELL_SIZE),
            Point::new(SURFACE_WIDTH, i * CELL_SIZE),
        )
    };
    [v(1.0), h(1.0), v(2.0), h(2.0)]
}
