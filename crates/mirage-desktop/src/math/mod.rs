//! Core geometry types for the desktop simulation
//!
//! Plain f32 math for positions, sizes, screen rectangles, and the
//! window chrome metrics the views hit-test against.

mod rect;
mod size;
mod style;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE, TASKBAR_HEIGHT};
pub use vec2::Vec2;
