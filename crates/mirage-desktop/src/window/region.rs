//! Window frame hit regions

use serde::{Deserialize, Serialize};

/// Interactive region of a window frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowRegion {
    /// Draggable strip along the top, outside the control buttons
    TitleBar,
    /// The hosted content surface
    Content,
    CloseButton,
    MinimizeButton,
    MaximizeButton,
    /// Resize grip in the bottom-right corner
    ResizeCorner,
}

impl WindowRegion {
    /// Whether this region is one of the title bar control buttons
    #[inline]
    pub fn is_button(&self) -> bool {
        matches!(
            self,
            WindowRegion::CloseButton | WindowRegion::MinimizeButton | WindowRegion::MaximizeButton
        )
    }

    /// CSS cursor for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::TitleBar => "move",
            WindowRegion::Content => "default",
            WindowRegion::CloseButton
            | WindowRegion::MinimizeButton
            | WindowRegion::MaximizeButton => "pointer",
            WindowRegion::ResizeCorner => "se-resize",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_classification() {
        assert!(WindowRegion::CloseButton.is_button());
        assert!(WindowRegion::MinimizeButton.is_button());
        assert!(WindowRegion::MaximizeButton.is_button());
        assert!(!WindowRegion::TitleBar.is_button());
        assert!(!WindowRegion::ResizeCorner.is_button());
    }

    #[test]
    fn test_cursors() {
        assert_eq!(WindowRegion::TitleBar.cursor(), "move");
        assert_eq!(WindowRegion::ResizeCorner.cursor(), "se-resize");
        assert_eq!(WindowRegion::CloseButton.cursor(), "pointer");
    }
}
