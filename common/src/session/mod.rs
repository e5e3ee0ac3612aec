//! Explicit state container for one widget session.
//!
//! Holds the catalog, the visible prefix, the selection, the caption and its
//! offset, the two loading flags and the notice shown to the user. Every
//! change goes through a method here; the frontend never pokes fields.

use crate::error::{CatalogFetchError, RasterizationError};
use crate::export::ExportScene;
use crate::model::overlay::Overlay;
use crate::model::template::Template;

/// Coarse state of the widget, derived from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetPhase {
    /// Catalog request in flight; nothing to show yet.
    Initializing,
    /// Strip visible, nothing selected.
    Browsing,
    /// Strip visible and the customization panel open.
    Customizing,
}

#[derive(Debug, Clone)]
pub struct MemeSession {
    catalog: Vec<Template>,
    visible_len: usize,
    page_size: usize,
    selection: Option<Template>,
    overlay: Overlay,
    caption: String,
    catalog_loading: bool,
    pagination_loading: bool,
    notice: Option<String>,
}

impl MemeSession {
    /// Creates a session that is waiting for its catalog. A `page_size` of
    /// zero is treated as one so "Load More" always makes progress.
    pub fn new(page_size: usize) -> Self {
        Self {
            catalog: Vec::new(),
            visible_len: 0,
            page_size: page_size.max(1),
            selection: None,
            overlay: Overlay::default(),
            caption: String::new(),
            catalog_loading: true,
            pagination_loading: false,
            notice: None,
        }
    }

    pub fn begin_catalog_load(&mut self) {
        self.catalog_loading = true;
        self.notice = None;
    }

    /// Stores the outcome of the catalog request. The loading flag is cleared
    /// on both paths; a failure leaves an empty catalog plus a notice.
    pub fn finish_catalog_load(&mut self, result: Result<Vec<Template>, CatalogFetchError>) {
        self.catalog_loading = false;
        match result {
            Ok(templates) => {
                self.catalog = templates;
                self.visible_len = self.page_size.min(self.catalog.len());
            }
            Err(error) => {
                self.catalog.clear();
                self.visible_len = 0;
                self.notice = Some(error.to_string());
            }
        }
    }

    /// Reveals the next page. Returns whether the visible prefix grew.
    ///
    /// Refuses to run while a previous call is still marked in flight, and is
    /// a no-op once the whole catalog is visible.
    pub fn load_more(&mut self) -> bool {
        if self.pagination_loading || !self.has_more() {
            return false;
        }

        self.pagination_loading = true;
        self.visible_len = (self.visible_len + self.page_size).min(self.catalog.len());
        self.pagination_loading = false;
        true
    }

    /// Ordered prefix of the catalog currently shown in the strip.
    pub fn visible(&self) -> &[Template] {
        &self.catalog[..self.visible_len]
    }

    pub fn has_more(&self) -> bool {
        self.visible_len < self.catalog.len()
    }

    pub fn total(&self) -> usize {
        self.catalog.len()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn catalog_loading(&self) -> bool {
        self.catalog_loading
    }

    pub fn pagination_loading(&self) -> bool {
        self.pagination_loading
    }

    /// Makes `template` the current selection. Caption and overlay are kept.
    pub fn select(&mut self, template: Template) {
        self.selection = Some(template);
    }

    pub fn selected(&self) -> Option<&Template> {
        self.selection.as_ref()
    }

    pub fn is_customizing(&self) -> bool {
        self.selection.is_some()
    }

    pub fn set_caption(&mut self, text: impl Into<String>) {
        self.caption = text.into();
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Records where a drag came to rest. No bounds are enforced.
    pub fn set_overlay(&mut self, x: f64, y: f64) {
        self.overlay = Overlay::new(x, y);
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn phase(&self) -> WidgetPhase {
        if self.catalog_loading {
            WidgetPhase::Initializing
        } else if self.selection.is_some() {
            WidgetPhase::Customizing
        } else {
            WidgetPhase::Browsing
        }
    }

    /// Snapshot of what the export should contain.
    pub fn export_scene(&self, filename: &str) -> Result<ExportScene, RasterizationError> {
        let template = self
            .selection
            .clone()
            .ok_or(RasterizationError::NoSelection)?;

        Ok(ExportScene {
            template,
            caption: self.caption.clone(),
            overlay: self.overlay,
            filename: filename.to_string(),
        })
    }

    /// Surfaces a failed export without touching the composition.
    pub fn report_export_failure(&mut self, error: &RasterizationError) {
        self.notice = Some(error.to_string());
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

impl Default for MemeSession {
    fn default() -> Self {
        Self::new(crate::config::PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EXPORT_FILENAME, PAGE_SIZE};

    fn template(id: usize) -> Template {
        Template {
            id: id.to_string(),
            name: format!("Meme {id}"),
            url: format!("u{id}"),
        }
    }

    fn catalog(len: usize) -> Vec<Template> {
        (1..=len).map(template).collect()
    }

    fn loaded(len: usize) -> MemeSession {
        let mut session = MemeSession::default();
        session.finish_catalog_load(Ok(catalog(len)));
        session
    }

    fn visible_ids(session: &MemeSession) -> Vec<String> {
        session.visible().iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn starts_initializing_with_nothing_visible() {
        let session = MemeSession::default();
        assert_eq!(session.phase(), WidgetPhase::Initializing);
        assert!(session.catalog_loading());
        assert!(session.visible().is_empty());
        assert_eq!(session.overlay(), Overlay::default());
        assert_eq!(session.caption(), "");
    }

    #[test]
    fn load_more_reveals_prefixes_of_the_catalog() {
        for total in [0, 1, 3, 4, 5, 8, 9, 23] {
            let full = catalog(total);
            let mut session = loaded(total);

            for n in 0..8 {
                let expected = (PAGE_SIZE * (n + 1)).min(total);
                assert_eq!(session.visible().len(), expected, "total={total} n={n}");
                assert_eq!(session.visible(), &full[..expected]);
                session.load_more();
            }
        }
    }

    #[test]
    fn load_more_is_a_no_op_once_everything_is_visible() {
        let mut session = loaded(4);
        assert!(!session.has_more());
        let before = visible_ids(&session);

        assert!(!session.load_more());
        assert_eq!(visible_ids(&session), before);
        assert!(!session.pagination_loading());
    }

    #[test]
    fn load_more_is_refused_while_one_is_in_flight() {
        let mut session = loaded(10);
        session.pagination_loading = true;

        assert!(!session.load_more());
        assert_eq!(session.visible().len(), 4);
    }

    #[test]
    fn zero_page_size_still_makes_progress() {
        let mut session = MemeSession::new(0);
        session.finish_catalog_load(Ok(catalog(3)));
        assert_eq!(session.page_size(), 1);
        assert_eq!(session.visible().len(), 1);
        assert!(session.load_more());
        assert_eq!(session.visible().len(), 2);
    }

    #[test]
    fn five_template_catalog_walkthrough() {
        let mut session = MemeSession::default();
        session.begin_catalog_load();
        session.finish_catalog_load(Ok(vec![
            Template {
                id: "1".into(),
                name: "Drake".into(),
                url: "u1".into(),
            },
            Template {
                id: "2".into(),
                name: "Woman Yelling".into(),
                url: "u2".into(),
            },
            template(3),
            template(4),
            template(5),
        ]));

        assert_eq!(session.phase(), WidgetPhase::Browsing);
        assert_eq!(visible_ids(&session), ["1", "2", "3", "4"]);
        assert!(session.has_more());

        assert!(session.load_more());
        assert_eq!(visible_ids(&session), ["1", "2", "3", "4", "5"]);
        assert!(!session.has_more());

        assert!(!session.load_more());
        assert_eq!(visible_ids(&session), ["1", "2", "3", "4", "5"]);
        assert!(!session.has_more());
    }

    #[test]
    fn select_sets_exactly_that_template_and_opens_the_panel() {
        let mut session = loaded(6);
        assert!(!session.is_customizing());

        for t in catalog(6) {
            session.select(t.clone());
            assert_eq!(session.selected(), Some(&t));
            assert!(session.is_customizing());
            assert_eq!(session.phase(), WidgetPhase::Customizing);
        }
    }

    #[test]
    fn overlay_and_caption_survive_reselection() {
        let mut session = loaded(4);
        session.select(template(1));
        session.set_caption("hello");
        session.set_overlay(12.0, -3.0);

        session.select(template(3));
        assert_eq!(session.caption(), "hello");
        assert_eq!(session.overlay(), Overlay::new(12.0, -3.0));
    }

    #[test]
    fn set_overlay_is_idempotent_and_unclamped() {
        let mut once = loaded(1);
        once.set_overlay(40.0, 15.0);

        let mut twice = loaded(1);
        twice.set_overlay(40.0, 15.0);
        twice.set_overlay(40.0, 15.0);

        assert_eq!(once.overlay(), twice.overlay());

        once.set_overlay(-5000.0, 99999.5);
        assert_eq!(once.overlay(), Overlay::new(-5000.0, 99999.5));
    }

    #[test]
    fn set_caption_stores_text_verbatim() {
        let mut session = loaded(1);
        for text in ["", "   \t ", "first line\nsecond line\n", "ünïcödé 🎉"] {
            session.set_caption(text);
            assert_eq!(session.caption(), text);
        }

        let long = "x".repeat(100_000);
        session.set_caption(long.clone());
        assert_eq!(session.caption().len(), long.len());
    }

    #[test]
    fn export_scene_reflects_the_composition() {
        let mut session = loaded(5);
        session.select(template(2));
        session.set_caption("TOP TEXT");
        session.set_overlay(40.0, 15.0);

        let scene = session
            .export_scene(EXPORT_FILENAME)
            .expect("selection exists");
        assert_eq!(scene.template, template(2));
        assert_eq!(scene.caption, "TOP TEXT");
        assert_eq!(scene.overlay, Overlay::new(40.0, 15.0));
        assert_eq!(scene.filename, "meme.png");
    }

    #[test]
    fn export_without_selection_is_refused() {
        let session = loaded(5);
        assert_eq!(
            session.export_scene(EXPORT_FILENAME),
            Err(RasterizationError::NoSelection)
        );
    }

    #[test]
    fn failed_export_keeps_the_composition_intact() {
        let mut session = loaded(5);
        session.select(template(2));
        session.set_caption("TOP TEXT");
        session.set_overlay(40.0, 15.0);

        session.report_export_failure(&RasterizationError::Tainted("SecurityError".into()));

        assert!(session.notice().is_some());
        assert_eq!(session.selected(), Some(&template(2)));
        assert_eq!(session.caption(), "TOP TEXT");
        assert_eq!(session.overlay(), Overlay::new(40.0, 15.0));

        session.dismiss_notice();
        assert_eq!(session.notice(), None);
    }

    #[test]
    fn failed_catalog_fetch_settles_in_an_empty_browsing_state() {
        let mut session = MemeSession::default();
        session.begin_catalog_load();
        session.finish_catalog_load(Err(CatalogFetchError::Network("offline".into())));

        assert!(!session.catalog_loading());
        assert!(session.visible().is_empty());
        assert!(!session.has_more());
        assert_eq!(session.phase(), WidgetPhase::Browsing);
        assert!(session.notice().is_some_and(|n| n.contains("offline")));
    }

    #[test]
    fn retrying_the_catalog_clears_the_previous_notice() {
        let mut session = MemeSession::default();
        session.finish_catalog_load(Err(CatalogFetchError::Status(503)));
        assert!(session.notice().is_some());

        session.begin_catalog_load();
        assert_eq!(session.notice(), None);
        assert_eq!(session.phase(), WidgetPhase::Initializing);

        session.finish_catalog_load(Ok(catalog(2)));
        assert_eq!(session.visible().len(), 2);
    }
}
