//! Studio: markdown editor for one generated document.
//!
//! - Premium only when a document id is given; otherwise a locked upsell.
//! - Editor and preview tabs, toolbar styles, undo/redo, dirty marker.
//! - Save and export run behind simulated latency as cancellable tasks
//!   owned by the page; leaving Studio cancels them.
//! - Access is re-resolved when the entitlement changes, since the profile
//!   usually arrives after the page is created.

use log::debug;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::StudioProps;
pub use state::StudioPage;

use crate::helpers::set_window_dirty_flag;

impl Component for StudioPage {
    type Message = Msg;
    type Properties = StudioProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        StudioPage::new(props.document_id.as_deref(), &props.app)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        let document_id = props.document_id.as_deref();
        if props.document_id != old_props.document_id
            || self.access.is_stale(document_id, props.app.entitlement)
        {
            debug!("reopening studio for {:?}", document_id);
            *self = StudioPage::new(document_id, &props.app);
            set_window_dirty_flag(false);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        self.resize_textarea();
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.save_task.take();
        self.export_task.take();
        set_window_dirty_flag(false);
    }
}
