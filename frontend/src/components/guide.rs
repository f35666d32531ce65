//! Help center page: categories, popular guides and the FAQ, all filtered
//! by the search box.

use saber_common::guide::{popular_guides, search, search_faq, Guide, GuideFormat, CATEGORIES};
use saber_common::landing::Accordion;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::helpers::format_count;

pub enum Msg {
    Search(String),
    ShowFaq(bool),
    ToggleFaq(usize),
}

pub struct GuidePage {
    guides: Vec<Guide>,
    query: String,
    faq_tab: bool,
    faq: Accordion,
}

impl Component for GuidePage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            guides: popular_guides(),
            query: String::new(),
            faq_tab: false,
            faq: Accordion::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Search(query) => self.query = query,
            Msg::ShowFaq(show) => self.faq_tab = show,
            Msg::ToggleFaq(index) => self.faq.toggle(index),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="guide-page">
                <section class="hero">
                    <h1>{ "Guia do Usuário" }</h1>
                    <p class="muted">
                        { "Tudo que você precisa saber para aproveitar ao máximo o SaberAngola" }
                    </p>
                    <input class="search" type="search" placeholder="Pesquisar guias, tutoriais, FAQ..."
                        value={self.query.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::Search(e.target_unchecked_into::<HtmlInputElement>().value())
                        })} />
                </section>

                <section>
                    <h2>{ "Categorias de Guias" }</h2>
                    <div class="grid">
                        { for CATEGORIES.iter().map(|category| html! {
                            <div class="card guide-category" key={category.id}>
                                <i class="material-icons">{ category.icon }</i>
                                <h3>{ category.name }</h3>
                                <p class="muted">{ category.description }</p>
                                <span class="badge secondary">{ format!("{} guias", category.guides) }</span>
                            </div>
                        }) }
                    </div>
                </section>

                <div class="tab-bar">
                    <button class={classes!("tab-btn", (!self.faq_tab).then_some("active"))}
                        onclick={link.callback(|_| Msg::ShowFaq(false))}>
                        { "Guias Populares" }
                    </button>
                    <button class={classes!("tab-btn", self.faq_tab.then_some("active"))}
                        onclick={link.callback(|_| Msg::ShowFaq(true))}>
                        { "FAQ" }
                    </button>
                </div>
                { if self.faq_tab { self.faq_view(ctx) } else { self.guides_view() } }
            </div>
        }
    }
}

impl GuidePage {
    fn guides_view(&self) -> Html {
        let found = search(&self.guides, &self.query);
        if found.is_empty() {
            return html! { <p class="muted">{ "Nenhum guia encontrado." }</p> };
        }
        html! {
            <section>
                <h3>{ "Guias Mais Acessados" }</h3>
                <div class="grid">
                    { for found.into_iter().map(guide_card) }
                </div>
            </section>
        }
    }

    fn faq_view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <section>
                <h3>
                    <i class="material-icons">{ "help_outline" }</i>
                    { " Perguntas Frequentes" }
                </h3>
                <div class="card faq">
                    { for search_faq(&self.query).into_iter().map(|(i, entry)| {
                        let open = self.faq.is_open(i);
                        html! {
                            <div class="faq-item" key={i}>
                                <button class="faq-question" onclick={link.callback(move |_| Msg::ToggleFaq(i))}>
                                    { entry.question }
                                    <i class="material-icons">{ if open { "expand_less" } else { "expand_more" } }</i>
                                </button>
                                if open {
                                    <p class="faq-answer">{ entry.answer }</p>
                                }
                            </div>
                        }
                    }) }
                </div>
                <div class="card contact-cta">
                    <h4>{ "Não encontrou o que procurava?" }</h4>
                    <p class="muted">{ "Nossa equipe de suporte está sempre pronta para ajudar" }</p>
                    <a class="btn" href="mailto:info@saberangola.ao">
                        <i class="material-icons">{ "help_outline" }</i>
                        { "Entrar em Contato" }
                    </a>
                </div>
            </section>
        }
    }
}

fn guide_card(guide: &Guide) -> Html {
    let (icon, format_class) = match guide.format {
        GuideFormat::Video => ("play_arrow", "video"),
        GuideFormat::Tutorial | GuideFormat::Article => ("menu_book", "reading"),
    };
    html! {
        <div class="card guide" key={guide.id}>
            <h4>{ guide.title }</h4>
            <p class="muted">{ guide.description }</p>
            <div class="chips">
                <span class="badge secondary">{ guide.category }</span>
                <span class="badge outline">{ guide.difficulty }</span>
                <span class={classes!("badge", "outline", format_class)}>{ guide.format.label() }</span>
            </div>
            <div class="muted guide-meta">
                <span><i class="material-icons">{ "schedule" }</i>{ guide.duration }</span>
                <span><i class="material-icons">{ "person" }</i>{ format_count(guide.views) }</span>
                <span><i class="material-icons">{ "star" }</i>{ format!("{:.1}", guide.rating) }</span>
            </div>
            <button class="btn">
                <i class="material-icons">{ icon }</i>
                { guide.format.action_label() }
            </button>
        </div>
    }
}
