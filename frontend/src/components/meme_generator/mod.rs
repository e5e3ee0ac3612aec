//! Meme generator: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `MemeGeneratorProps`, `MemeGeneratorComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, fetch the template catalog exactly once and feed the
//!   outcome back as `Msg::CatalogLoaded`.

use yew::platform::spawn_local;
use yew::prelude::*;

mod drag;
mod export;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use helpers::fetch_catalog;
pub use messages::Msg;
pub use props::MemeGeneratorProps;
pub use state::MemeGeneratorComponent;

impl Component for MemeGeneratorComponent {
    type Message = Msg;
    type Properties = MemeGeneratorProps;

    fn create(ctx: &Context<Self>) -> Self {
        MemeGeneratorComponent::new(ctx.props().page_size)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            self.session.begin_catalog_load();

            let link = ctx.link().clone();
            let catalog_url = ctx.props().catalog_url.to_string();
            spawn_local(async move {
                let result = fetch_catalog(&catalog_url).await;
                link.send_message(Msg::CatalogLoaded(result));
            });
        }
    }
}
