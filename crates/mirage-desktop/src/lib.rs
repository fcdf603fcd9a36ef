//! Mirage desktop core
//!
//! Window and desktop icon management for a browser-hosted desktop
//! simulation: the window lifecycle manager (open/close/minimize/
//! maximize/focus/z-order), the icon grid with multi-select drag and
//! spiral drop-collision resolution, per-entity input views, and a shell
//! composing them with the app table, taskbar, start menu, and session
//! lifecycle.
//!
//! The core is pure synchronous Rust; the optional `wasm` feature adds a
//! wasm-bindgen controller with a JSON render surface for the web host.

pub mod glyph;
pub mod grid;
pub mod math;
pub mod shell;
pub mod view;
pub mod window;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use glyph::{GlyphId, GlyphRegistry};
pub use grid::{CellPos, DesktopGridController, GridIcon};
pub use math::{Rect, Size, Vec2};
pub use shell::{AppEntry, AppRegistry, DesktopShell, SessionPhase};
pub use view::{DesktopIconView, PointerKind, WindowView};
pub use window::{Window, WindowManager, WindowRegion};
