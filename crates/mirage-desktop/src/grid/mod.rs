//! Desktop icon grid
//!
//! Icons live on a fixed-size cell grid. The controller owns their
//! positions, the selection set, the live drag session, and the marquee
//! rectangle, and resolves drop collisions with a spiral free-cell search.

mod cell;
mod controller;
mod drag;
mod icon;
mod place;
mod selection;

pub use cell::{
    cell_to_pixel, pixel_to_cell, CellPos, GridBounds, CELL_HEIGHT, CELL_WIDTH, GRID_PADDING,
    ICON_HEIGHT, ICON_WIDTH,
};
pub use controller::DesktopGridController;
pub use drag::DragSession;
pub use icon::GridIcon;
pub use selection::SelectionRect;
