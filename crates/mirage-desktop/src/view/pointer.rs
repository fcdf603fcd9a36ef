//! Pointer input classification

use crate::math::Size;
use serde::{Deserialize, Serialize};

/// Movement past this distance promotes a press to a drag; release before
/// it resolves as a click
pub const DRAG_THRESHOLD: f32 = 4.0;

/// Two presses inside this span count as a double press
pub const DOUBLE_PRESS_MS: f64 = 400.0;

/// Input device behind a pointer event. Mouse and single-touch share the
/// same coordinate math; only the resize minimums differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    Mouse,
    Touch,
}

impl PointerKind {
    /// Smallest size a window may be resized to with this device.
    /// Touch permits smaller frames than mouse.
    pub fn min_window_size(&self) -> Size {
        match self {
            PointerKind::Mouse => Size::new(400.0, 300.0),
            PointerKind::Touch => Size::new(200.0, 150.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_permits_smaller_windows() {
        let mouse = PointerKind::Mouse.min_window_size();
        let touch = PointerKind::Touch.min_window_size();
        assert!(touch.width < mouse.width);
        assert!(touch.height < mouse.height);
    }
}
