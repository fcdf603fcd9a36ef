//! Window management
//!
//! Window records, frame hit testing, and the lifecycle manager
//! (open/close/minimize/maximize/focus/z-order).

mod manager;
mod region;
#[allow(clippy::module_inception)]
mod window;

pub use manager::WindowManager;
pub use region::WindowRegion;
pub use window::Window;
