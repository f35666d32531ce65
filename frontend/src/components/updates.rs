use saber_common::changelog::{coming_soon, release_notes, released, roadmap};
use saber_common::dashboard::display_date;
use saber_common::model::release::{ReleaseKind, ReleaseNote};
use yew::{classes, html, Component, Context, Html};

const KIND_FILTERS: [ReleaseKind; 4] = [
    ReleaseKind::Feature,
    ReleaseKind::Bugfix,
    ReleaseKind::Content,
    ReleaseKind::Improvement,
];

pub enum Msg {
    ShowRoadmap(bool),
    Filter(Option<ReleaseKind>),
}

pub struct UpdatesPage {
    notes: Vec<ReleaseNote>,
    roadmap_tab: bool,
    filter: Option<ReleaseKind>,
}

impl Component for UpdatesPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            notes: release_notes(),
            roadmap_tab: false,
            filter: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ShowRoadmap(show) => self.roadmap_tab = show,
            Msg::Filter(kind) => self.filter = kind,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="updates-page">
                <section class="hero">
                    <h1>{ "Atualizações e Novidades" }</h1>
                    <p class="muted">
                        { "Acompanhe as últimas melhorias, novos recursos e correções da plataforma" }
                    </p>
                </section>
                <div class="tab-bar">
                    <button
                        class={classes!("tab-btn", (!self.roadmap_tab).then_some("active"))}
                        onclick={link.callback(|_| Msg::ShowRoadmap(false))}
                    >
                        { "Atualizações" }
                    </button>
                    <button
                        class={classes!("tab-btn", self.roadmap_tab.then_some("active"))}
                        onclick={link.callback(|_| Msg::ShowRoadmap(true))}
                    >
                        { "Roadmap" }
                    </button>
                </div>
                {
                    if self.roadmap_tab {
                        roadmap_view()
                    } else {
                        self.releases_view(ctx)
                    }
                }
            </div>
        }
    }
}

impl UpdatesPage {
    fn releases_view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let chips = std::iter::once(None)
            .chain(KIND_FILTERS.into_iter().map(Some))
            .map(|kind| {
                let label = kind.map_or("Todas", ReleaseKind::label);
                html! {
                    <button
                        class={classes!("chip", (self.filter == kind).then_some("active"))}
                        onclick={link.callback(move |_| Msg::Filter(kind))}
                    >
                        { label }
                    </button>
                }
            })
            .collect::<Html>();

        html! {
            <>
                <div class="chips">{ chips }</div>
                { for released(&self.notes, self.filter).into_iter().map(release_card) }
                <h3>{ "Em breve" }</h3>
                { for coming_soon(&self.notes).into_iter().map(release_card) }
            </>
        }
    }
}

fn release_card(note: &ReleaseNote) -> Html {
    html! {
        <article key={note.id} class="card release">
            <div class="release-meta">
                <span class={classes!("badge", format!("kind-{:?}", note.kind).to_lowercase())}>
                    { note.kind.label() }
                </span>
                <span class="badge outline">{ format!("v{}", note.version) }</span>
                <span class="muted">{ display_date(&note.date) }</span>
            </div>
            <h2>{ note.title.clone() }</h2>
            <p>{ note.description.clone() }</p>
            <h4>{ "O que há de novo:" }</h4>
            <ul>
                { for note.changes.iter().map(|c| html! { <li>{ c.clone() }</li> }) }
            </ul>
        </article>
    }
}

fn roadmap_view() -> Html {
    html! {
        <section>
            <h3>{ "Roadmap de Desenvolvimento" }</h3>
            { for roadmap().into_iter().map(|quarter| html! {
                <div class="card roadmap-quarter">
                    <h4>{ quarter.quarter }</h4>
                    { for quarter.items.into_iter().map(|item| html! {
                        <div class="roadmap-item">
                            <strong>{ item.title }</strong>
                            <span class="badge">{ item.status.label() }</span>
                            <p class="muted">{ item.description }</p>
                        </div>
                    }) }
                </div>
            }) }
        </section>
    }
}
