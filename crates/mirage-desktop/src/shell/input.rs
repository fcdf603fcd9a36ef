//! Shell pointer routing

use super::DesktopShell;
use crate::math::Vec2;
use crate::view::PointerKind;

/// Where the current pointer gesture is being delivered
#[derive(Clone, Debug)]
pub(crate) enum ActiveTarget {
    Window(String),
    Icon(String),
    Marquee,
}

impl DesktopShell {
    /// Route pointer-down: the topmost window under the point wins, then
    /// icons, then empty desktop (which starts a marquee). An open start
    /// menu swallows the press and closes. Returns whether the event was
    /// consumed; it never is outside the desktop phase.
    pub fn pointer_down(
        &mut self,
        p: Vec2,
        kind: PointerKind,
        additive: bool,
        now_ms: f64,
    ) -> bool {
        if !self.session.accepts_input() {
            return false;
        }
        if self.start_menu.is_open() {
            self.start_menu.close();
            return true;
        }

        if let Some(id) = self
            .windows
            .top_window_at(p, self.container)
            .map(|w| w.id.clone())
        {
            self.ensure_window_view(&id);
            let container = self.container;
            if let Some(view) = self.window_views.iter_mut().find(|v| v.id() == id) {
                view.pointer_down(&mut self.windows, p, kind, container, now_ms);
            }
            self.prune_window_views();
            self.active = Some(ActiveTarget::Window(id));
            return true;
        }

        if let Some(id) = self
            .grid
            .icons()
            .iter()
            .rev()
            .map(|icon| icon.id.clone())
            .find(|id| {
                self.grid
                    .icon_rect(id)
                    .is_some_and(|rect| rect.contains(p))
            })
        {
            let activated = self
                .icon_views
                .iter_mut()
                .find(|v| v.id() == id)
                .is_some_and(|view| view.pointer_down(&self.grid, p, additive, now_ms));
            if activated {
                self.launch(&id);
                self.active = None;
            } else {
                self.active = Some(ActiveTarget::Icon(id));
            }
            return true;
        }

        self.grid.start_selection(p);
        self.active = Some(ActiveTarget::Marquee);
        true
    }

    /// Follow the active gesture
    pub fn pointer_move(&mut self, p: Vec2) {
        match &self.active {
            Some(ActiveTarget::Window(id)) => {
                let id = id.clone();
                if let Some(view) = self.window_views.iter_mut().find(|v| v.id() == id) {
                    view.pointer_move(&mut self.windows, p);
                }
            }
            Some(ActiveTarget::Icon(id)) => {
                let id = id.clone();
                if let Some(view) = self.icon_views.iter_mut().find(|v| v.id() == id) {
                    view.pointer_move(&mut self.grid, p);
                }
            }
            Some(ActiveTarget::Marquee) => self.grid.update_selection(p),
            None => {}
        }
    }

    /// Finish the active gesture. The host must call this on document
    /// release too, or an abandoned drag session stays live.
    pub fn pointer_up(&mut self) {
        match self.active.take() {
            Some(ActiveTarget::Window(id)) => {
                if let Some(view) = self.window_views.iter_mut().find(|v| v.id() == id) {
                    view.pointer_up();
                }
            }
            Some(ActiveTarget::Icon(id)) => {
                if let Some(view) = self.icon_views.iter_mut().find(|v| v.id() == id) {
                    view.pointer_up(&mut self.grid);
                }
            }
            Some(ActiveTarget::Marquee) => {
                let rects: Vec<(String, crate::math::Rect)> = self
                    .grid
                    .icons()
                    .iter()
                    .filter_map(|icon| {
                        self.grid
                            .icon_rect(&icon.id)
                            .map(|rect| (icon.id.clone(), rect))
                    })
                    .collect();
                self.grid.end_selection(&rects);
            }
            None => {}
        }
    }
}
