//! WASM exports for the desktop shell
//!
//! Wraps [`DesktopShell`] in a wasm-bindgen controller with a JS-friendly
//! surface: pointer plumbing in, JSON render snapshots out. Serialization
//! failures degrade to empty JSON instead of panicking.

use wasm_bindgen::prelude::*;

use crate::math::Vec2;
use crate::shell::DesktopShell;
use crate::view::PointerKind;

fn log(s: &str) {
    web_sys::console::log_1(&s.into());
}

/// Desktop controller exported to the web host
#[wasm_bindgen]
pub struct DesktopController {
    shell: DesktopShell,
}

#[wasm_bindgen]
impl DesktopController {
    /// Build the stock desktop sized to the host viewport
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        log(&format!(
            "mirage: desktop {width}x{height} at {:.0}ms",
            js_sys::Date::now()
        ));
        Self {
            shell: DesktopShell::with_default_apps(width, height),
        }
    }

    /// Feed a viewport resize to the shell
    pub fn resize(&mut self, width: f32, height: f32) {
        self.shell.resize(width, height);
    }

    // =========================================================================
    // Session
    // =========================================================================

    pub fn finish_boot(&mut self) {
        self.shell.finish_boot();
    }

    pub fn request_shutdown(&mut self) {
        self.shell.request_shutdown();
    }

    pub fn cancel_shutdown(&mut self) {
        self.shell.cancel_shutdown();
    }

    pub fn confirm_shutdown(&mut self) {
        self.shell.confirm_shutdown();
    }

    // =========================================================================
    // Pointer plumbing
    // =========================================================================

    /// Pointer or touch press; returns whether the desktop consumed it
    pub fn pointer_down(
        &mut self,
        x: f32,
        y: f32,
        touch: bool,
        additive: bool,
        now_ms: f64,
    ) -> bool {
        let kind = if touch {
            PointerKind::Touch
        } else {
            PointerKind::Mouse
        };
        self.shell
            .pointer_down(Vec2::new(x, y), kind, additive, now_ms)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.shell.pointer_move(Vec2::new(x, y));
    }

    pub fn pointer_up(&mut self) {
        self.shell.pointer_up();
    }

    // =========================================================================
    // Shell commands
    // =========================================================================

    pub fn launch(&mut self, app_id: &str) {
        self.shell.launch(app_id);
    }

    pub fn taskbar_click(&mut self, id: &str) {
        self.shell.taskbar_click(id);
    }

    pub fn taskbar_search_click(&mut self) {
        self.shell.taskbar_search_click();
    }

    pub fn toggle_start_menu(&mut self) {
        self.shell.toggle_start_menu();
    }

    pub fn set_start_query(&mut self, query: &str) {
        self.shell.set_start_query(query);
    }

    pub fn set_wallpaper(&mut self, key: &str) {
        self.shell.set_wallpaper(key);
    }

    /// Resolve a glyph id to the host visual
    pub fn resolve_glyph(&self, id: &str) -> String {
        self.shell
            .glyphs()
            .resolve(&crate::glyph::GlyphId::new(id))
            .to_string()
    }

    // =========================================================================
    // JSON render surface
    // =========================================================================

    /// Renderable windows, ascending z
    pub fn windows_json(&self) -> String {
        serde_json::to_string(&self.shell.window_frames()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Renderable icons at their display positions
    pub fn icons_json(&self) -> String {
        serde_json::to_string(&self.shell.icon_sprites()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Taskbar buttons in opening order
    pub fn taskbar_json(&self) -> String {
        serde_json::to_string(&self.shell.taskbar_entries()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Start menu state plus its pinned/recommended/search views
    pub fn start_menu_json(&self) -> String {
        let menu = self.shell.start_menu();
        let apps = self.shell.apps();
        serde_json::to_string(&serde_json::json!({
            "open": menu.is_open(),
            "query": menu.query(),
            "results": menu.results(apps),
            "pinned": apps.pinned(),
            "recommended": apps.recommended(),
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }

    /// The live marquee rect, or `null`
    pub fn marquee_json(&self) -> String {
        serde_json::to_string(&self.shell.marquee_rect()).unwrap_or_else(|_| "null".to_string())
    }

    /// Session phase and wallpaper key
    pub fn session_json(&self) -> String {
        serde_json::to_string(&serde_json::json!({
            "phase": self.shell.session().phase(),
            "wallpaper": self.shell.wallpaper(),
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }
}
