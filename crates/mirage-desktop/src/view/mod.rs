//! Per-entity input surfaces
//!
//! One view instance binds one window or icon to pointer/touch input and
//! forwards resolved gestures into the owning controller. Views never
//! mutate window or icon fields directly.

mod icon_view;
mod pointer;
mod window_view;

pub use icon_view::DesktopIconView;
pub use pointer::{PointerKind, DOUBLE_PRESS_MS, DRAG_THRESHOLD};
pub use window_view::WindowView;
