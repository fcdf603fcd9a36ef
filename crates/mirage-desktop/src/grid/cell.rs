//! Grid cell coordinates and pixel mapping

use crate::math::{Size, Vec2, TASKBAR_HEIGHT};
use serde::{Deserialize, Serialize};

/// Width of one grid cell in pixels
pub const CELL_WIDTH: f32 = 90.0;
/// Height of one grid cell in pixels
pub const CELL_HEIGHT: f32 = 100.0;
/// Inset between the desktop edges and the first cell
pub const GRID_PADDING: f32 = 8.0;

/// Rendered icon tile width (fits inside one cell)
pub const ICON_WIDTH: f32 = 80.0;
/// Rendered icon tile height
pub const ICON_HEIGHT: f32 = 90.0;

/// Grid cell address (column, row)
///
/// Settled icons only ever hold non-negative cells; signed fields keep the
/// drag delta math simple before clamping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub col: i32,
    pub row: i32,
}

impl CellPos {
    /// Create a cell address
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Offset by a cell delta
    #[inline]
    pub fn offset(self, dcol: i32, drow: i32) -> Self {
        Self::new(self.col + dcol, self.row + drow)
    }
}

/// Convert a grid cell to its pixel top-left
#[inline]
pub fn cell_to_pixel(cell: CellPos) -> Vec2 {
    Vec2::new(
        GRID_PADDING + cell.col as f32 * CELL_WIDTH,
        GRID_PADDING + cell.row as f32 * CELL_HEIGHT,
    )
}

/// Convert a pixel position to the nearest grid cell, clamped to
/// non-negative coordinates
#[inline]
pub fn pixel_to_cell(p: Vec2) -> CellPos {
    CellPos::new(
        (((p.x - GRID_PADDING) / CELL_WIDTH).round() as i32).max(0),
        (((p.y - GRID_PADDING) / CELL_HEIGHT).round() as i32).max(0),
    )
}

/// Usable grid dimensions derived from the host viewport
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub cols: i32,
    pub rows: i32,
}

impl GridBounds {
    /// Derive bounds from the container size, reserving the taskbar strip
    pub fn from_container(container: Size) -> Self {
        Self {
            cols: ((container.width - GRID_PADDING * 2.0) / CELL_WIDTH).floor() as i32,
            rows: ((container.height - GRID_PADDING * 2.0 - TASKBAR_HEIGHT) / CELL_HEIGHT).floor()
                as i32,
        }
    }

    /// Clamp a cell into bounds; degenerate bounds pin to the origin
    pub fn clamp(&self, cell: CellPos) -> CellPos {
        CellPos::new(
            cell.col.min(self.cols - 1).max(0),
            cell.row.min(self.rows - 1).max(0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_pixel() {
        let p = cell_to_pixel(CellPos::new(0, 0));
        assert!((p.x - 8.0).abs() < 0.001);
        assert!((p.y - 8.0).abs() < 0.001);

        let p = cell_to_pixel(CellPos::new(2, 3));
        assert!((p.x - (8.0 + 180.0)).abs() < 0.001);
        assert!((p.y - (8.0 + 300.0)).abs() < 0.001);
    }

    #[test]
    fn test_pixel_to_cell_rounds_to_nearest() {
        // Dead center of cell (1, 1)
        assert_eq!(
            pixel_to_cell(Vec2::new(8.0 + 90.0, 8.0 + 100.0)),
            CellPos::new(1, 1)
        );
        // Just under halfway rounds down
        assert_eq!(
            pixel_to_cell(Vec2::new(8.0 + 44.0, 8.0 + 49.0)),
            CellPos::new(0, 0)
        );
        // Just over halfway rounds up
        assert_eq!(
            pixel_to_cell(Vec2::new(8.0 + 46.0, 8.0 + 51.0)),
            CellPos::new(1, 1)
        );
    }

    #[test]
    fn test_pixel_to_cell_clamps_negative() {
        assert_eq!(pixel_to_cell(Vec2::new(-500.0, -500.0)), CellPos::new(0, 0));
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        // cell_to_pixel(pixel_to_cell(p)) loses the sub-cell offset, but a
        // second pass through pixel_to_cell is stable.
        for p in [
            Vec2::new(0.0, 0.0),
            Vec2::new(37.0, 222.0),
            Vec2::new(130.0, 55.0),
            Vec2::new(911.0, 487.0),
        ] {
            let once = pixel_to_cell(p);
            let again = pixel_to_cell(cell_to_pixel(once));
            assert_eq!(once, again);
        }
    }

    #[test]
    fn test_bounds_from_container() {
        // 1920x1080 leaves (1920-16)/90 = 21 cols, (1080-16-48)/100 = 10 rows
        let b = GridBounds::from_container(Size::new(1920.0, 1080.0));
        assert_eq!(b.cols, 21);
        assert_eq!(b.rows, 10);
    }

    #[test]
    fn test_bounds_clamp() {
        let b = GridBounds { cols: 10, rows: 5 };
        assert_eq!(b.clamp(CellPos::new(-3, 2)), CellPos::new(0, 2));
        assert_eq!(b.clamp(CellPos::new(12, 9)), CellPos::new(9, 4));
    }

    #[test]
    fn test_degenerate_bounds_pin_to_origin() {
        // Unset container yields negative bounds; clamping still lands at (0, 0)
        let b = GridBounds::from_container(Size::ZERO);
        assert!(b.cols < 0);
        assert_eq!(b.clamp(CellPos::new(4, 4)), CellPos::new(0, 0));
    }
}
