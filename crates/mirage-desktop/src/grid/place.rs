//! Drop placement and collision resolution

use super::cell::{CellPos, GridBounds};
use super::icon::GridIcon;
use std::collections::HashSet;

/// Check whether a cell is held by any icon not in the excluded set
pub(crate) fn cell_occupied(icons: &[GridIcon], cell: CellPos, exclude: &HashSet<String>) -> bool {
    icons
        .iter()
        .any(|icon| !exclude.contains(&icon.id) && icon.cell == cell)
}

/// Find the nearest free cell to `target` with an expanding ring scan.
///
/// The exact target wins if free. Each ring scans its perimeter only
/// (interior cells were covered by smaller rings), with candidates clamped
/// into bounds. Exhausting every ring falls back to the occupied target;
/// the caller tolerates the overlap.
pub(crate) fn nearest_free_cell(
    icons: &[GridIcon],
    target: CellPos,
    exclude: &HashSet<String>,
    bounds: GridBounds,
) -> CellPos {
    if !cell_occupied(icons, target, exclude) {
        return target;
    }

    for radius in 1..bounds.cols.max(bounds.rows) {
        for dx in -radius..=radius {
            for dy in -radius..=radius {
                if dx.abs() != radius && dy.abs() != radius {
                    continue;
                }

                let candidate = bounds.clamp(target.offset(dx, dy));
                if !cell_occupied(icons, candidate, exclude) {
                    return candidate;
                }
            }
        }
    }

    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::GlyphId;

    fn icon(id: &str, col: i32, row: i32) -> GridIcon {
        GridIcon::new(id, id, GlyphId::new(id), CellPos::new(col, row))
    }

    fn bounds() -> GridBounds {
        GridBounds { cols: 10, rows: 6 }
    }

    #[test]
    fn test_free_target_is_kept() {
        let icons = vec![icon("a", 0, 0)];
        let cell = nearest_free_cell(&icons, CellPos::new(3, 3), &HashSet::new(), bounds());
        assert_eq!(cell, CellPos::new(3, 3));
    }

    #[test]
    fn test_occupied_target_moves_to_ring_one() {
        let icons = vec![icon("a", 3, 3)];
        let cell = nearest_free_cell(&icons, CellPos::new(3, 3), &HashSet::new(), bounds());
        assert_ne!(cell, CellPos::new(3, 3));
        // Must be a direct ring-1 neighbor
        assert!((cell.col - 3).abs() <= 1 && (cell.row - 3).abs() <= 1);
    }

    #[test]
    fn test_scan_order_is_deterministic() {
        // Ring 1 scans dx ascending, dy ascending: first candidate is (-1, -1)
        let icons = vec![icon("a", 3, 3)];
        let cell = nearest_free_cell(&icons, CellPos::new(3, 3), &HashSet::new(), bounds());
        assert_eq!(cell, CellPos::new(2, 2));
    }

    #[test]
    fn test_ring_expands_past_full_neighborhood() {
        // Target plus the whole ring 1 occupied; first free cell is on ring 2
        let mut icons = vec![icon("t", 3, 3)];
        let mut n = 0;
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                icons.push(icon(&format!("n{n}"), 3 + dx, 3 + dy));
                n += 1;
            }
        }

        let cell = nearest_free_cell(&icons, CellPos::new(3, 3), &HashSet::new(), bounds());
        assert_eq!(cell, CellPos::new(1, 1));
    }

    #[test]
    fn test_excluded_icons_do_not_block() {
        let icons = vec![icon("dragged", 3, 3)];
        let exclude: HashSet<String> = ["dragged".to_string()].into_iter().collect();
        let cell = nearest_free_cell(&icons, CellPos::new(3, 3), &exclude, bounds());
        assert_eq!(cell, CellPos::new(3, 3));
    }

    #[test]
    fn test_candidates_clamp_into_bounds() {
        // Target in the corner: ring candidates with negative coords clamp
        // onto the grid instead of escaping it
        let icons = vec![icon("a", 0, 0)];
        let cell = nearest_free_cell(&icons, CellPos::new(0, 0), &HashSet::new(), bounds());
        assert!(cell.col >= 0 && cell.row >= 0);
        assert_ne!(cell, CellPos::new(0, 0));
    }

    #[test]
    fn test_exhausted_search_falls_back_to_target() {
        // 1x1 grid fully occupied by a foreign icon: no ring to scan
        let icons = vec![icon("a", 0, 0)];
        let tiny = GridBounds { cols: 1, rows: 1 };
        let cell = nearest_free_cell(&icons, CellPos::new(0, 0), &HashSet::new(), tiny);
        assert_eq!(cell, CellPos::new(0, 0));
    }

    #[test]
    fn test_occupancy_check() {
        let icons = vec![icon("a", 2, 2)];
        assert!(cell_occupied(&icons, CellPos::new(2, 2), &HashSet::new()));
        assert!(!cell_occupied(&icons, CellPos::new(2, 3), &HashSet::new()));

        let exclude: HashSet<String> = ["a".to_string()].into_iter().collect();
        assert!(!cell_occupied(&icons, CellPos::new(2, 2), &exclude));
    }
}
