//! Authenticated home: welcome header, quick actions, recent documents and
//! popular content. The two REST calls load independently and each failure
//! gets its own retry button.

use log::{info, warn};
use saber_common::dashboard::{display_date, popular_content, DashboardState, Loadable};
use saber_common::requests::{CreateDocumentRequest, DocumentSummary, FetchError, UserProfile};
use saber_common::route::Route;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::{navigate, show_toast};

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    /// Told about every profile that loads, so the plan applies app-wide.
    pub on_profile: Callback<UserProfile>,
}

pub enum Msg {
    ProfileLoaded(Result<UserProfile, FetchError>),
    DocumentsLoaded(Result<Vec<DocumentSummary>, FetchError>),
    Retry,
    NewDocument,
    DocumentCreated(Result<DocumentSummary, FetchError>),
}

pub struct DashboardPage {
    state: DashboardState,
    creating: bool,
}

fn fetch_profile(ctx: &Context<DashboardPage>) {
    let link = ctx.link().clone();
    spawn_local(async move {
        link.send_message(Msg::ProfileLoaded(api::current_user().await));
    });
}

fn fetch_documents(ctx: &Context<DashboardPage>) {
    let link = ctx.link().clone();
    spawn_local(async move {
        link.send_message(Msg::DocumentsLoaded(api::recent_documents().await));
    });
}

impl Component for DashboardPage {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(ctx: &Context<Self>) -> Self {
        fetch_profile(ctx);
        fetch_documents(ctx);
        Self {
            state: DashboardState::default(),
            creating: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ProfileLoaded(result) => {
                if let Err(e) = &result {
                    warn!("profile request failed: {}", e);
                }
                if let Ok(profile) = &result {
                    ctx.props().on_profile.emit(profile.clone());
                }
                self.state.profile = Loadable::from_result(result);
            }
            Msg::DocumentsLoaded(result) => {
                if let Err(e) = &result {
                    warn!("documents request failed: {}", e);
                }
                self.state.documents = Loadable::from_result(result);
            }
            Msg::Retry => {
                let (profile, documents) = self.state.retry_failed();
                if profile {
                    fetch_profile(ctx);
                }
                if documents {
                    fetch_documents(ctx);
                }
            }
            Msg::NewDocument => {
                if self.creating {
                    return false;
                }
                self.creating = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let request = CreateDocumentRequest::untitled(None);
                    link.send_message(Msg::DocumentCreated(api::create_document(&request).await));
                });
            }
            Msg::DocumentCreated(result) => {
                self.creating = false;
                match result {
                    Ok(document) => {
                        info!("document {} created", document.id);
                        navigate(&document.studio_href());
                    }
                    Err(e) => show_toast(&format!("Erro ao criar documento: {}", e)),
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="dashboard">
                <section class="hero">
                    <h1>{ self.state.welcome_title() }</h1>
                    <p class="muted">{ "Continue sua jornada de aprendizagem e descubra novos recursos" }</p>
                    { self.profile_line(ctx) }
                </section>

                <section>
                    <div class="section-head">
                        <h2>{ "Acesso Rápido" }</h2>
                        <button class="btn" disabled={self.creating} onclick={link.callback(|_| Msg::NewDocument)}>
                            <i class="material-icons">{ "add" }</i>
                            { "Novo Documento" }
                        </button>
                    </div>
                    <div class="card-grid">
                        { quick_action("menu_book", "Modelos", "Acesse templates prontos para seus projetos acadêmicos e profissionais", Route::Catalog, "Explorar Modelos") }
                        { quick_action("description", "Documentos", "Biblioteca completa de recursos educacionais e materiais de referência", Route::Documents { model: None }, "Ver Documentos") }
                        { quick_action("palette", "Studio", "Ambiente criativo para desenvolver e personalizar seus projetos", Route::Studio { doc: None }, "Abrir Studio") }
                    </div>
                </section>

                <div class="two-columns">
                    <section>
                        <h2>{ "Documentos Recentes" }</h2>
                        { self.documents_view(ctx) }
                    </section>
                    <section>
                        <h2>{ "Conteúdo Popular" }</h2>
                        { for popular_content().into_iter().map(|item| html! {
                            <div class="card popular">
                                <h3>{ item.title }</h3>
                                <span class="badge outline">{ item.category }</span>
                                <span class="muted">{ format!("{} visualizações • ★ {:.1}", item.views, item.rating) }</span>
                            </div>
                        }) }
                    </section>
                </div>
            </div>
        }
    }
}

impl DashboardPage {
    fn profile_line(&self, ctx: &Context<Self>) -> Html {
        match &self.state.profile {
            Loadable::Loading => html! { <p class="muted">{ "A carregar perfil..." }</p> },
            Loadable::Loaded(profile) => html! {
                <p class="muted">
                    { "Plano: " }<span class="badge outline">{ profile.plan.clone() }</span>
                    { format!(" • {} documentos criados", profile.documents_count) }
                </p>
            },
            Loadable::Failed(e) => failure(ctx, "Não foi possível carregar o perfil", e),
        }
    }

    fn documents_view(&self, ctx: &Context<Self>) -> Html {
        match &self.state.documents {
            Loadable::Loading => html! { <div class="card skeleton">{ "A carregar documentos..." }</div> },
            Loadable::Failed(e) => failure(ctx, "Não foi possível carregar os documentos", e),
            Loadable::Loaded(documents) if documents.is_empty() => html! {
                <div class="card empty-state">
                    <i class="material-icons">{ "description" }</i>
                    <p class="muted">{ "Nenhum documento criado ainda" }</p>
                    <button class="btn" onclick={ctx.link().callback(|_| Msg::NewDocument)}>
                        { "Criar Primeiro Documento" }
                    </button>
                </div>
            },
            Loadable::Loaded(documents) => documents
                .iter()
                .map(|doc| {
                    html! {
                        <div class="card document-row" key={doc.id.clone()}>
                            <div>
                                <h3>{ doc.title.clone() }</h3>
                                <span class="badge">{ doc.document_type.clone() }</span>
                                <span class="muted">{ display_date(&doc.updated_at) }</span>
                            </div>
                            <a class="btn ghost" href={doc.studio_href()}>{ "Abrir" }</a>
                        </div>
                    }
                })
                .collect(),
        }
    }
}

fn failure(ctx: &Context<DashboardPage>, headline: &str, error: &FetchError) -> Html {
    html! {
        <div class="card error-state">
            <p>{ format!("{}: {}", headline, error) }</p>
            <button class="btn outline" onclick={ctx.link().callback(|_| Msg::Retry)}>
                { "Tentar novamente" }
            </button>
        </div>
    }
}

fn quick_action(icon: &str, title: &str, description: &str, route: Route, action: &str) -> Html {
    html! {
        <div class="card quick-action">
            <i class="material-icons">{ icon.to_string() }</i>
            <h3>{ title.to_string() }</h3>
            <p class="muted">{ description.to_string() }</p>
            <a class="btn" href={route.href()}>{ action.to_string() }</a>
        </div>
    }
}
