//! Pointer tracking for the caption overlay.
//!
//! While the pointer holds the caption, intermediate positions are written
//! straight to the element's inline style so the session is not touched on
//! every frame. Only the resting offset is committed, through
//! `MemeSession::set_overlay`, when the pointer is released.

use common::model::overlay::Overlay;
use web_sys::HtmlElement;

#[derive(Debug, Clone, PartialEq)]
pub struct DragTracker {
    pointer_start: (f64, f64),
    origin: Overlay,
    current: Overlay,
}

impl DragTracker {
    /// Starts a drag of a caption currently resting at `origin`.
    pub fn start(client_x: f64, client_y: f64, origin: Overlay) -> Self {
        Self {
            pointer_start: (client_x, client_y),
            origin,
            current: origin,
        }
    }

    /// Follows the pointer and returns where the caption should be drawn.
    pub fn move_to(&mut self, client_x: f64, client_y: f64) -> Overlay {
        self.current = Overlay::new(
            self.origin.x + client_x - self.pointer_start.0,
            self.origin.y + client_y - self.pointer_start.1,
        );
        self.current
    }

    /// Last position seen, used when the browser cancels the pointer.
    pub fn current(&self) -> Overlay {
        self.current
    }
}

/// Moves the caption element without re-rendering the component.
pub fn apply_preview(caption: &HtmlElement, overlay: Overlay) {
    let style = caption.style();
    let _ = style.set_property("left", &format!("{}px", overlay.x));
    let _ = style.set_property("top", &format!("{}px", overlay.y));
}
