use saber_common::model::profile::Achievement;
use saber_common::profile::{achievement_summary, achievements, recent_activity, user_stats};
use yew::{classes, html, Component, Context, Html};

#[derive(Clone, Copy, PartialEq)]
pub enum Tab {
    Overview,
    Activity,
    Achievements,
}

impl Tab {
    fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Visão Geral",
            Tab::Activity => "Atividade",
            Tab::Achievements => "Conquistas",
        }
    }
}

pub enum Msg {
    SetTab(Tab),
}

pub struct ProfilePage {
    tab: Tab,
}

impl Component for ProfilePage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { tab: Tab::Overview }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                let changed = self.tab != tab;
                self.tab = tab;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let stats = user_stats();
        let tabs = [Tab::Overview, Tab::Activity, Tab::Achievements]
            .into_iter()
            .map(|tab| {
                html! {
                    <button
                        class={classes!("tab-btn", (self.tab == tab).then_some("active"))}
                        onclick={ctx.link().callback(move |_| Msg::SetTab(tab))}
                    >
                        { tab.label() }
                    </button>
                }
            })
            .collect::<Html>();

        html! {
            <div class="profile-page">
                <section class="hero">
                    <div class="avatar">{ "JS" }</div>
                    <div>
                        <h1>{ "João Silva" }</h1>
                        <p class="muted">{ "Estudante de Engenharia • Luanda, Angola" }</p>
                        <p class="muted">{ format!("Nível {}", stats.level) }</p>
                    </div>
                    <div class="stat-grid">
                        { stat(stats.total_downloads.to_string(), "Downloads") }
                        { stat(stats.projects_created.to_string(), "Projetos") }
                        { stat(stats.templates_used.to_string(), "Templates") }
                        { stat(format!("{}h", stats.study_hours), "Estudo") }
                    </div>
                </section>
                <div class="tab-bar">{ tabs }</div>
                {
                    match self.tab {
                        Tab::Overview => html! {
                            <section class="card">
                                <h3>{ "Progresso de Nível" }</h3>
                                <div class="progress">
                                    <div class="progress-bar" style={format!("width: {}%", stats.level_progress())} />
                                </div>
                                <p class="muted">
                                    { format!("{} / {} pontos", stats.points, stats.next_level_points) }
                                </p>
                                <p>
                                    { format!("Faltam {} pontos para o próximo nível", stats.points_to_next_level()) }
                                </p>
                            </section>
                        },
                        Tab::Activity => activity_list(),
                        Tab::Achievements => achievement_grid(&achievements()),
                    }
                }
            </div>
        }
    }
}

fn stat(value: String, label: &str) -> Html {
    html! {
        <div class="stat">
            <div class="stat-value">{ value }</div>
            <div class="stat-label">{ label.to_string() }</div>
        </div>
    }
}

fn activity_list() -> Html {
    html! {
        <section class="card">
            <h3>{ "Atividade Recente" }</h3>
            <ul class="activity">
                { for recent_activity().into_iter().map(|a| html! {
                    <li key={a.id}>
                        <i class="material-icons">{ a.kind.icon() }</i>
                        <span><strong>{ a.action }</strong>{ " " }{ a.item }</span>
                        <span class="muted">{ a.when }</span>
                    </li>
                }) }
            </ul>
        </section>
    }
}

fn achievement_grid(items: &[Achievement]) -> Html {
    let (earned, total) = achievement_summary(items);
    html! {
        <section class="card">
            <h3>{ format!("Conquistas ({}/{})", earned, total) }</h3>
            <div class="achievement-grid">
                { for items.iter().map(|a| html! {
                    <div key={a.id} class={classes!("achievement", (!a.is_earned()).then_some("locked"))}>
                        <i class="material-icons">{ a.icon.clone() }</i>
                        <h4>{ a.title.clone() }</h4>
                        <p>{ a.description.clone() }</p>
                        if let Some(date) = &a.earned_on {
                            <span class="muted">{ format!("Conquistado em {}", saber_common::dashboard::display_date(date)) }</span>
                        }
                    </div>
                }) }
            </div>
        </section>
    }
}
