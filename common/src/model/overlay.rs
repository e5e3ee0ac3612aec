use serde::{Deserialize, Serialize};

/// Offset of the caption, in CSS pixels, from the top-left corner of the
/// rendered template image. Not clamped: the caption may sit partly or fully
/// outside the image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    pub x: f64,
    pub y: f64,
}

impl Overlay {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
