//! Desktop shell
//!
//! Composes the two independent controllers (windows and icon grid) with
//! the app table, glyph registry, start menu, and session lifecycle, and
//! routes pointer input to per-entity views. Input routing lives in
//! `input.rs`, taskbar behavior in `taskbar.rs`, render snapshots in
//! `render.rs`.

mod apps;
mod input;
mod render;
mod session;
mod start_menu;
mod taskbar;

pub use apps::{AppEntry, AppRegistry};
pub use render::{IconSprite, WindowFrame};
pub use session::{Session, SessionPhase};
pub use start_menu::StartMenu;
pub use taskbar::TaskbarEntry;

use crate::glyph::{GlyphId, GlyphRegistry};
use crate::grid::{CellPos, DesktopGridController, GridIcon};
use crate::math::Size;
use crate::view::{DesktopIconView, WindowView};
use crate::window::WindowManager;
use input::ActiveTarget;

/// Wallpaper key before the user picks one
const DEFAULT_WALLPAPER: &str = "solid-black";

/// The composed desktop session
pub struct DesktopShell {
    /// Window lifecycle and stacking
    pub windows: WindowManager,
    /// Icon grid, selection, and drag state
    pub grid: DesktopGridController,
    apps: AppRegistry,
    glyphs: GlyphRegistry,
    start_menu: StartMenu,
    session: Session,
    /// Opaque wallpaper key the host resolves to a backdrop
    wallpaper: String,
    container: Size,
    window_views: Vec<WindowView>,
    icon_views: Vec<DesktopIconView>,
    active: Option<ActiveTarget>,
}

impl DesktopShell {
    /// An empty shell with no apps or icons
    pub fn new() -> Self {
        Self {
            windows: WindowManager::new(),
            grid: DesktopGridController::new(),
            apps: AppRegistry::new(),
            glyphs: GlyphRegistry::default(),
            start_menu: StartMenu::new(),
            session: Session::new(),
            wallpaper: DEFAULT_WALLPAPER.to_string(),
            container: Size::ZERO,
            window_views: Vec::new(),
            icon_views: Vec::new(),
            active: None,
        }
    }

    /// The stock desktop: default app table, glyph visuals for it, and
    /// one column of icons seeded from the table's first entries
    pub fn with_default_apps(width: f32, height: f32) -> Self {
        let mut shell = Self::new();
        shell.apps = AppRegistry::with_default_apps();
        for (id, visual) in [
            ("user", "\u{1F464}"),
            ("folder-open", "\u{1F4C2}"),
            ("code", "\u{1F4BB}"),
            ("terminal", "\u{2328}"),
            ("globe", "\u{1F310}"),
        ] {
            shell.glyphs.register(GlyphId::new(id), visual);
        }

        let seeded: Vec<GridIcon> = shell
            .apps
            .entries()
            .iter()
            .take(apps::DESKTOP_ICON_COUNT)
            .enumerate()
            .map(|(row, entry)| {
                GridIcon::new(
                    entry.id.clone(),
                    entry.name.clone(),
                    entry.glyph.clone(),
                    CellPos::new(0, row as i32),
                )
            })
            .collect();
        for icon in &seeded {
            shell.icon_views.push(DesktopIconView::new(icon.id.clone()));
        }
        shell.grid = DesktopGridController::with_icons(seeded);
        shell.resize(width, height);
        shell
    }

    /// Feed the host viewport size to the shell and the grid
    pub fn resize(&mut self, width: f32, height: f32) {
        self.container = Size::new(width, height);
        self.grid.set_container_size(width, height);
    }

    /// Launch an app: open (or re-surface) its window and dismiss the
    /// start menu. Unknown app ids are no-ops.
    pub fn launch(&mut self, app_id: &str) {
        let Some(entry) = self.apps.get(app_id) else {
            return;
        };
        let (id, name, glyph, content_key) = (
            entry.id.clone(),
            entry.name.clone(),
            entry.glyph.clone(),
            entry.content_key.clone(),
        );
        self.windows.open(&id, &name, glyph, &content_key);
        self.ensure_window_view(&id);
        self.start_menu.close();
    }

    /// Register an app and drop a desktop icon for it at a cell
    pub fn install_app(&mut self, entry: AppEntry, cell: CellPos) {
        let icon = GridIcon::new(
            entry.id.clone(),
            entry.name.clone(),
            entry.glyph.clone(),
            cell,
        );
        self.icon_views.push(DesktopIconView::new(icon.id.clone()));
        self.grid.add_icon(icon);
        self.apps.register(entry);
    }

    /// Flip the start menu
    pub fn toggle_start_menu(&mut self) {
        self.start_menu.toggle();
    }

    /// Update the start menu search query
    pub fn set_start_query(&mut self, query: &str) {
        self.start_menu.set_query(query);
    }

    /// Leave the boot screen
    pub fn finish_boot(&mut self) {
        self.session.finish_boot();
    }

    /// Raise the shutdown prompt; the start menu dismisses with it
    pub fn request_shutdown(&mut self) {
        self.start_menu.close();
        self.session.request_shutdown();
    }

    /// Dismiss the shutdown prompt
    pub fn cancel_shutdown(&mut self) {
        self.session.cancel_shutdown();
    }

    /// Confirm shutdown; the session ends
    pub fn confirm_shutdown(&mut self) {
        self.session.confirm_shutdown();
    }

    /// Store an opaque wallpaper key for the host backdrop
    pub fn set_wallpaper(&mut self, key: &str) {
        self.wallpaper = key.to_string();
    }

    // ===== Queries =====

    pub fn apps(&self) -> &AppRegistry {
        &self.apps
    }

    pub fn glyphs(&self) -> &GlyphRegistry {
        &self.glyphs
    }

    pub fn start_menu(&self) -> &StartMenu {
        &self.start_menu
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn wallpaper(&self) -> &str {
        &self.wallpaper
    }

    pub fn container(&self) -> Size {
        self.container
    }

    fn ensure_window_view(&mut self, id: &str) {
        if !self.window_views.iter().any(|view| view.id() == id) {
            self.window_views.push(WindowView::new(id));
        }
    }

    /// Drop views whose window has closed
    fn prune_window_views(&mut self) {
        let windows = &self.windows;
        self.window_views.retain(|view| windows.is_open(view.id()));
    }
}

impl Default for DesktopShell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shell_seeds_icons() {
        let shell = DesktopShell::with_default_apps(1920.0, 1080.0);

        let ids: Vec<&str> = shell.grid.icons().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["about", "projects", "skills", "contact"]);
        // One column down the left edge
        for (row, icon) in shell.grid.icons().iter().enumerate() {
            assert_eq!(icon.cell, CellPos::new(0, row as i32));
        }
        assert_eq!(shell.apps().entries().len(), 6);
    }

    #[test]
    fn test_launch_opens_and_closes_start_menu() {
        let mut shell = DesktopShell::with_default_apps(1920.0, 1080.0);
        shell.toggle_start_menu();

        shell.launch("terminal");

        let win = shell.windows.get("terminal").unwrap();
        assert_eq!(win.title, "Terminal");
        assert_eq!(win.content_key, "terminal");
        assert_eq!(shell.windows.focused(), Some("terminal"));
        assert!(!shell.start_menu().is_open());
    }

    #[test]
    fn test_launch_unknown_app_is_noop() {
        let mut shell = DesktopShell::with_default_apps(1920.0, 1080.0);
        shell.launch("ghost");
        assert!(shell.windows.is_empty());
    }

    #[test]
    fn test_relaunch_resurfaces() {
        let mut shell = DesktopShell::with_default_apps(1920.0, 1080.0);
        shell.launch("about");
        shell.windows.minimize("about");

        shell.launch("about");
        assert_eq!(shell.windows.len(), 1);
        assert!(!shell.windows.get("about").unwrap().minimized);
    }

    #[test]
    fn test_install_app() {
        let mut shell = DesktopShell::with_default_apps(1920.0, 1080.0);
        shell.install_app(
            AppEntry::new("notes", "Notes", GlyphId::new("note"), "notes"),
            CellPos::new(1, 0),
        );

        assert!(shell.grid.icon("notes").is_some());
        shell.launch("notes");
        assert!(shell.windows.is_open("notes"));
    }

    #[test]
    fn test_wallpaper_key() {
        let mut shell = DesktopShell::new();
        assert_eq!(shell.wallpaper(), "solid-black");
        shell.set_wallpaper("nebula");
        assert_eq!(shell.wallpaper(), "nebula");
    }
}
