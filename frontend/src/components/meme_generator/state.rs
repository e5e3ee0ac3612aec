//! Runtime state of the `MemeGeneratorComponent`.
//!
//! The durable part (catalog, selection, caption, overlay, flags) lives in
//! `common::session::MemeSession`; this struct only adds what the browser
//! needs on top of it: DOM references and the transient drag tracker.

use common::export::CaptionStyle;
use common::session::MemeSession;
use yew::prelude::*;

use super::drag::DragTracker;

pub struct MemeGeneratorComponent {
    /// Catalog, visible prefix, selection, caption, overlay and flags.
    pub session: MemeSession,

    /// Reference to the preview region that gets rasterized on download.
    pub meme_ref: NodeRef,

    /// Reference to the caption element moved while dragging.
    pub caption_ref: NodeRef,

    /// Active drag, if the pointer is currently holding the caption.
    pub drag: Option<DragTracker>,

    /// Typography shared by the preview and the exported PNG.
    pub caption_style: CaptionStyle,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl MemeGeneratorComponent {
    pub fn new(page_size: usize) -> Self {
        Self {
            session: MemeSession::new(page_size),
            meme_ref: Default::default(),
            caption_ref: Default::default(),
            drag: None,
            caption_style: CaptionStyle::default(),
            loaded: false,
        }
    }
}
