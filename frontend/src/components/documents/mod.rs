//! Form page: resolves the template of `?model=`, renders its schema
//! section by section, saves drafts and drives the mock generation.
//!
//! The generation run is a cancellable task whose handle lives in the
//! component state. Leaving the page drops the handle, so no step can land
//! on an unmounted view.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::DocumentsProps;
pub use state::DocumentsPage;

impl Component for DocumentsPage {
    type Message = Msg;
    type Properties = DocumentsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        DocumentsPage::new(props.model_id.as_deref(), &props.app)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }
}
