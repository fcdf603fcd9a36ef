//! Taskbar model

use super::DesktopShell;
use crate::glyph::GlyphId;
use serde::Serialize;

/// One taskbar button, derived from an open window
#[derive(Clone, Debug, Serialize)]
pub struct TaskbarEntry {
    pub id: String,
    pub title: String,
    pub glyph: GlyphId,
    pub minimized: bool,
    pub focused: bool,
}

impl DesktopShell {
    /// One entry per open window, in opening order (minimized included)
    pub fn taskbar_entries(&self) -> Vec<TaskbarEntry> {
        let focused = self.windows.focused();
        self.windows
            .windows()
            .iter()
            .map(|win| TaskbarEntry {
                id: win.id.clone(),
                title: win.title.clone(),
                glyph: win.glyph.clone(),
                minimized: win.minimized,
                focused: focused == Some(win.id.as_str()),
            })
            .collect()
    }

    /// Click a taskbar button: a minimized window re-surfaces, the
    /// focused window minimizes, anything else comes to front.
    pub fn taskbar_click(&mut self, id: &str) {
        let Some(win) = self.windows.get(id) else {
            return;
        };
        if win.minimized {
            let (title, glyph, content_key) =
                (win.title.clone(), win.glyph.clone(), win.content_key.clone());
            self.windows.open(id, &title, glyph, &content_key);
        } else if self.windows.focused() == Some(id) {
            self.windows.minimize(id);
        } else {
            self.windows.focus(id);
        }
    }

    /// The taskbar search affordance launches the browser
    pub fn taskbar_search_click(&mut self) {
        self.launch("browser");
    }
}
