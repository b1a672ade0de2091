use cropview_core::geometry::{Position, Size};
use cropview_core::Container;

/// The central panel area hosting the widget. Its size is refreshed from the
/// panel layout every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanelContainer {
    rect: Option<egui::Rect>,
}

impl PanelContainer {
    /// Record the panel rect. Returns `true` if its size changed.
    pub fn set_rect(&mut self, rect: egui::Rect) -> bool {
        let changed = self.rect.map(|r| r.size()) != Some(rect.size());
        self.rect = Some(rect);
        changed
    }

    /// Convert a screen position to container-local coordinates.
    pub fn to_local(&self, pos: egui::Pos2) -> Position {
        let origin = self.rect.map_or(egui::Pos2::ZERO, |r| r.min);
        Position::new((pos.x - origin.x) as f64, (pos.y - origin.y) as f64)
    }
}

impl Container for PanelContainer {
    fn measure(&self) -> Size {
        self.rect.map_or(Size::ZERO, |r| {
            Size::new(r.width() as f64, r.height() as f64)
        })
    }
}
