use std::rc::Rc;

use log::{info, warn};
use saber_common::config::WorkflowConfig;
use saber_common::entitlement::Entitlement;
use saber_common::requests::{FetchError, UserProfile};
use saber_common::route::Route;
use saber_common::storage::InMemoryStore;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

use crate::api;
use crate::components::catalog::CatalogPage;
use crate::components::dashboard::DashboardPage;
use crate::components::documents::DocumentsPage;
use crate::components::landing::LandingPage;
use crate::components::not_found::NotFoundPage;
use crate::components::profile::ProfilePage;
use crate::components::guide::GuidePage;
use crate::components::shell::{ContactButton, Footer, Header};
use crate::components::studio::StudioPage;
use crate::components::updates::UpdatesPage;
use crate::context::AppContext;
use crate::helpers::current_location;

pub enum Msg {
    ProfileLoaded(Result<UserProfile, FetchError>),
    ProfileRefreshed(UserProfile),
}

pub struct App {
    route: Route,
    context: AppContext,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (path, query) = current_location();
        let route = Route::parse(&path, &query);
        info!("route {:?}", route);

        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ProfileLoaded(api::current_user().await));
        });

        Self {
            route,
            context: AppContext {
                store: Rc::new(InMemoryStore::new()),
                entitlement: Entitlement::Free,
                config: Rc::new(WorkflowConfig::default()),
            },
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let profile = match msg {
            Msg::ProfileLoaded(Ok(profile)) | Msg::ProfileRefreshed(profile) => profile,
            Msg::ProfileLoaded(Err(e)) => {
                warn!("no user profile, staying on the free plan: {}", e);
                return false;
            }
        };
        let entitlement = profile.entitlement();
        if entitlement == self.context.entitlement {
            return false;
        }
        self.context.entitlement = entitlement;
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let app = self.context.clone();
        let page = match &self.route {
            Route::Landing => html! { <LandingPage /> },
            Route::Dashboard => html! {
                <DashboardPage on_profile={ctx.link().callback(Msg::ProfileRefreshed)} />
            },
            Route::Catalog => html! { <CatalogPage /> },
            Route::Documents { model } => html! {
                <DocumentsPage app={app.clone()} model_id={model.clone()} />
            },
            Route::Studio { doc } => html! {
                <StudioPage app={app.clone()} document_id={doc.clone()} />
            },
            Route::Profile => html! { <ProfilePage /> },
            Route::Updates => html! { <UpdatesPage /> },
            Route::Guide => html! { <GuidePage /> },
            Route::NotFound => html! { <NotFoundPage /> },
        };

        html! {
            <div class="app">
                <Header active={self.route.clone()} entitlement={app.entitlement} />
                <main class="page">{ page }</main>
                <Footer />
                <ContactButton />
            </div>
        }
    }
}
