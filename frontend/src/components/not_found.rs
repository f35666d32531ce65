use saber_common::route::Route;
use yew::{html, Component, Context, Html};

pub struct NotFoundPage;

impl Component for NotFoundPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        NotFoundPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="empty-state">
                <i class="material-icons">{ "error_outline" }</i>
                <h2>{ "Página não encontrada" }</h2>
                <a class="btn" href={Route::Landing.href()}>{ "Voltar ao início" }</a>
            </div>
        }
    }
}
