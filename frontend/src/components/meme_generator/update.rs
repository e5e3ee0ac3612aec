//! Update function for the meme generator component.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`,
//! forwards the change to the `MemeSession` and returns whether the view
//! should re-render. Browser side effects (drag preview, rasterization,
//! download, toasts) are triggered from here and never mutate the session
//! directly.

use common::config::EXPORT_FILENAME;
use common::error::RasterizationError;
use gloo_console::{error, log};
use web_sys::HtmlElement;
use yew::prelude::*;

use super::drag::{apply_preview, DragTracker};
use super::export::export_region;
use super::helpers::show_toast;
use super::messages::Msg;
use super::state::MemeGeneratorComponent;

pub fn update(
    component: &mut MemeGeneratorComponent,
    _ctx: &Context<MemeGeneratorComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::CatalogLoaded(result) => {
            match &result {
                Ok(templates) => log!(format!("catalog loaded: {} templates", templates.len())),
                Err(err) => error!(format!("catalog fetch failed: {}", err)),
            }
            component.session.finish_catalog_load(result);
            true
        }
        Msg::LoadMore => component.session.load_more(),
        Msg::Select(template) => {
            component.session.select(template);
            true
        }
        Msg::UpdateCaption(text) => {
            component.session.set_caption(text);
            true
        }
        Msg::DragStart { client_x, client_y } => {
            component.drag = Some(DragTracker::start(
                client_x,
                client_y,
                component.session.overlay(),
            ));
            false
        }
        Msg::DragMove { client_x, client_y } => {
            if let Some(tracker) = component.drag.as_mut() {
                let overlay = tracker.move_to(client_x, client_y);
                if let Some(caption) = component.caption_ref.cast::<HtmlElement>() {
                    apply_preview(&caption, overlay);
                }
            }
            false
        }
        Msg::DragEnd { client_x, client_y } => match component.drag.take() {
            Some(mut tracker) => {
                let overlay = tracker.move_to(client_x, client_y);
                component.session.set_overlay(overlay.x, overlay.y);
                true
            }
            None => false,
        },
        Msg::DragCancel => match component.drag.take() {
            Some(tracker) => {
                let overlay = tracker.current();
                component.session.set_overlay(overlay.x, overlay.y);
                true
            }
            None => false,
        },
        Msg::Download => {
            let result = component
                .session
                .export_scene(EXPORT_FILENAME)
                .and_then(|scene| {
                    let region = component
                        .meme_ref
                        .cast::<HtmlElement>()
                        .ok_or(RasterizationError::RegionUnavailable)?;
                    export_region(&region, &scene, &component.caption_style)
                        .map(|()| scene.template.name)
                });

            match result {
                Ok(name) => {
                    log!(format!("exported {} as {}", name, EXPORT_FILENAME));
                    false
                }
                Err(err) => {
                    error!(format!("export failed: {:?}", err));
                    show_toast(&err.to_string());
                    component.session.report_export_failure(&err);
                    true
                }
            }
        }
        Msg::DismissNotice => {
            component.session.dismiss_notice();
            true
        }
    }
}
