//! Window chrome metrics

/// Height of the taskbar strip reserved at the bottom of the screen.
/// Maximized windows and the icon grid both stop above it.
pub const TASKBAR_HEIGHT: f32 = 48.0;

/// Frame metrics for window chrome
pub struct FrameStyle {
    pub title_bar_height: f32,
    /// Square control buttons in the title bar (minimize/maximize/close)
    pub button_size: f32,
    /// Gap between adjacent buttons
    pub button_gap: f32,
    /// Inset from the frame's right edge to the close button
    pub button_margin: f32,
    /// Square resize grip in the bottom-right corner
    pub resize_handle_size: f32,
}

/// Default frame style matching the host UI
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 40.0,
    button_size: 32.0,
    button_gap: 4.0,
    button_margin: 12.0,
    resize_handle_size: 16.0,
};
