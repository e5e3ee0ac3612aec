//! View rendering for the meme generator component.
//!
//! One screen, top to bottom: header, notice banner, the template strip with
//! its "Load More" button, the customization panel (only once a template is
//! selected) and a footer. Styling is inline so the widget drops into any page.

use common::model::template::Template;
use common::session::WidgetPhase;
use web_sys::{Element, HtmlTextAreaElement, PointerEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::export::REGION_BACKGROUND;
use super::helpers::visible_summary;
use super::messages::Msg;
use super::state::MemeGeneratorComponent;

pub fn view(component: &MemeGeneratorComponent, ctx: &Context<MemeGeneratorComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div style="display:flex;flex-direction:column;align-items:center;justify-content:center;min-height:100vh;background:#111827;padding:16px;box-sizing:border-box;">
            <div style="width:100%;max-width:672px;padding:24px;border-radius:8px;background:#1f2937;border:1px solid #374151;box-sizing:border-box;">
                { build_header() }
                { build_notice(component, link) }
                {
                    match component.session.phase() {
                        WidgetPhase::Initializing => spinner(48),
                        WidgetPhase::Browsing | WidgetPhase::Customizing => html! {
                            <>
                                { build_strip(component, link) }
                                { build_load_more(component, link) }
                            </>
                        },
                    }
                }
                { build_customizer(component, link) }
            </div>
            <footer style="margin-top:16px;font-size:14px;color:#9ca3af;">
                { "Created By Ismail Ahmed Shah" }
            </footer>
        </div>
    }
}

fn build_header() -> Html {
    html! {
        <div style="text-align:center;">
            <h1 style="font-size:48px;font-weight:bold;margin:0 0 4px 0;background:linear-gradient(to right,#a855f7,#ec4899);-webkit-background-clip:text;background-clip:text;color:transparent;">
                { "Meme Generator" }
            </h1>
            <p style="color:#9ca3af;margin:0 0 16px 0;">
                { "Create custom memes with our easy-to-use generator." }
            </p>
        </div>
    }
}

/// Banner for catalog or export failures. Hidden when there is nothing to say.
fn build_notice(component: &MemeGeneratorComponent, link: &Scope<MemeGeneratorComponent>) -> Html {
    let Some(notice) = component.session.notice() else {
        return html! {};
    };

    html! {
        <div role="alert" style="display:flex;align-items:center;justify-content:space-between;gap:8px;margin:8px 0;padding:8px 12px;border-radius:4px;background:#7f1d1d;color:#fee2e2;">
            <span>{ notice.to_string() }</span>
            <button
                onclick={link.callback(|_| Msg::DismissNotice)}
                style="background:none;border:none;color:#fee2e2;font-size:18px;cursor:pointer;"
            >
                { "✕" }
            </button>
        </div>
    }
}

/// Horizontally scrollable strip of the visible templates.
fn build_strip(component: &MemeGeneratorComponent, link: &Scope<MemeGeneratorComponent>) -> Html {
    let session = &component.session;
    if session.total() == 0 {
        return html! {
            <p style="color:#9ca3af;text-align:center;">{ "No meme templates available." }</p>
        };
    }

    html! {
        <>
            <div style="width:100%;overflow-x:scroll;white-space:nowrap;padding:8px 0;">
                { for session.visible().iter().map(|template| template_card(template, link)) }
            </div>
            <p style="color:#9ca3af;font-size:12px;margin:4px 0 0 0;">
                { visible_summary(session.visible().len(), session.total()) }
            </p>
        </>
    }
}

fn template_card(template: &Template, link: &Scope<MemeGeneratorComponent>) -> Html {
    let onclick = {
        let template = template.clone();
        link.callback(move |_| Msg::Select(template.clone()))
    };

    html! {
        <div
            key={template.id.clone()}
            class="meme-card"
            {onclick}
            style="display:inline-block;width:200px;margin:0 8px;background:#374151;border-radius:8px;overflow:hidden;cursor:pointer;vertical-align:top;"
        >
            <img
                src={template.url.clone()}
                alt={template.name.clone()}
                width="300"
                height="300"
                style="width:100%;height:200px;object-fit:cover;display:block;"
            />
            <p style="color:#fff;text-align:center;white-space:normal;margin:8px;">{ template.name.clone() }</p>
        </div>
    }
}

/// "Load More" button, only while part of the catalog is still hidden.
fn build_load_more(component: &MemeGeneratorComponent, link: &Scope<MemeGeneratorComponent>) -> Html {
    let session = &component.session;
    if !session.has_more() {
        return html! {};
    }

    let busy = session.pagination_loading();
    html! {
        <button
            onclick={link.callback(|_| Msg::LoadMore)}
            disabled={busy}
            style="margin-top:16px;padding:8px 16px;border:none;border-radius:6px;background:#2563eb;color:#fff;cursor:pointer;"
        >
            { if busy { spinner(24) } else { html! { "Load More" } } }
        </button>
    }
}

/// Customization panel: preview region, caption input and download button.
fn build_customizer(component: &MemeGeneratorComponent, link: &Scope<MemeGeneratorComponent>) -> Html {
    let Some(selected) = component.session.selected() else {
        return html! {};
    };

    let region_style = format!(
        "position:relative;background:{};border-radius:8px;overflow:hidden;",
        REGION_BACKGROUND
    );
    let caption_style = component.caption_style.css(component.session.overlay());

    let onpointerdown = link.callback(|e: PointerEvent| {
        e.prevent_default();
        if let Some(target) = e.target_dyn_into::<Element>() {
            let _ = target.set_pointer_capture(e.pointer_id());
        }
        Msg::DragStart {
            client_x: e.client_x() as f64,
            client_y: e.client_y() as f64,
        }
    });
    let onpointermove = link.callback(|e: PointerEvent| Msg::DragMove {
        client_x: e.client_x() as f64,
        client_y: e.client_y() as f64,
    });
    let onpointerup = link.callback(|e: PointerEvent| Msg::DragEnd {
        client_x: e.client_x() as f64,
        client_y: e.client_y() as f64,
    });
    let onpointercancel = link.callback(|_: PointerEvent| Msg::DragCancel);

    html! {
        <div style="margin-top:32px;width:100%;max-width:448px;background:#1f2937;border:1px solid #374151;border-radius:8px;padding:16px;box-sizing:border-box;">
            <h2 style="color:#fff;font-size:20px;margin:0 0 12px 0;">{ "Customize Your Meme" }</h2>
            <div ref={component.meme_ref.clone()} style={region_style}>
                <img
                    src={selected.url.clone()}
                    alt={selected.name.clone()}
                    crossorigin="anonymous"
                    style="width:100%;height:auto;display:block;"
                />
                <div
                    ref={component.caption_ref.clone()}
                    style={caption_style}
                    {onpointerdown}
                    {onpointermove}
                    {onpointerup}
                    {onpointercancel}
                >
                    { component.session.caption().to_string() }
                </div>
            </div>
            <div style="margin-top:16px;">
                <label for="meme-text" style="color:#fff;">{ "Add your text" }</label>
                <textarea
                    id="meme-text"
                    placeholder="Enter your meme text"
                    rows={3}
                    value={component.session.caption().to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                        Msg::UpdateCaption(value)
                    })}
                    style="margin-top:4px;width:100%;box-sizing:border-box;background:#1f2937;color:#fff;border:1px solid #374151;border-radius:4px;padding:8px;"
                />
            </div>
            <button
                onclick={link.callback(|_| Msg::Download)}
                style="width:100%;margin-top:16px;padding:10px;border:none;border-radius:6px;background:#2563eb;color:#fff;cursor:pointer;"
            >
                { "Download Meme" }
            </button>
        </div>
    }
}

fn spinner(size_px: u32) -> Html {
    let style = format!(
        "width:{0}px;height:{0}px;margin:16px auto;border:4px solid #4b5563;border-top-color:#3b82f6;",
        size_px
    );
    html! { <div class="spin" style={style}></div> }
}
