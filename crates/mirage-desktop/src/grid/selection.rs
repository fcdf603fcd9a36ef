//! Marquee selection rectangle

use crate::math::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Live marquee described by the pointer-down point and the current
/// pointer point; exists only while a selection drag is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectionRect {
    pub start: Vec2,
    pub end: Vec2,
}

impl SelectionRect {
    /// A fresh zero-area marquee anchored at the pointer-down point
    pub fn anchored_at(p: Vec2) -> Self {
        Self { start: p, end: p }
    }

    /// Normalize into a screen rect regardless of drag direction
    pub fn normalized(&self) -> Rect {
        let x = self.start.x.min(self.end.x);
        let y = self.start.y.min(self.end.y);
        Rect::new(
            x,
            y,
            (self.start.x - self.end.x).abs(),
            (self.start.y - self.end.y).abs(),
        )
    }
}
