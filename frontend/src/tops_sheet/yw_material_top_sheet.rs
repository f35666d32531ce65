use uuid::Uuid;
use yew::{html, Component, Context, Html, NodeRef, Properties};

/// Sliding sheet used for dialogs (sign-up, version history). Hidden until
/// `open_top_sheet` adds the `show` class.
pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

fn set_shown(top_sheet_ref: &NodeRef, shown: bool) {
    if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
        let classes = top_sheet.class_list();
        let result = if shown {
            classes.add_1("show")
        } else {
            classes.remove_1("show")
        };
        if let Err(e) = result {
            log::warn!("top sheet {} not toggled: {:?}", top_sheet.id(), e);
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    set_shown(&top_sheet_ref, true);
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    set_shown(&top_sheet_ref, false);
}
