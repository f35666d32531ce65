//! Header, footer and the floating contact button around every page.
//! Purely navigational.

use std::mem::discriminant;

use saber_common::entitlement::Entitlement;
use saber_common::guide::CONTACT_OPTIONS;
use saber_common::route::Route;
use yew::{classes, html, Component, Context, Html, Properties};

const NAVIGATION: [(&str, Route); 6] = [
    ("Home", Route::Dashboard),
    ("Modelos", Route::Catalog),
    ("Documentos", Route::Documents { model: None }),
    ("Studio", Route::Studio { doc: None }),
    ("Actualizações", Route::Updates),
    ("Guia", Route::Guide),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active: Route,
    pub entitlement: Entitlement,
}

pub enum HeaderMsg {
    ToggleMenu,
}

pub struct Header {
    menu_open: bool,
}

impl Component for Header {
    type Message = HeaderMsg;
    type Properties = HeaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { menu_open: false }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            HeaderMsg::ToggleMenu => self.menu_open = !self.menu_open,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let links = NAVIGATION
            .iter()
            .map(|(label, route)| {
                let active = discriminant(route) == discriminant(&props.active);
                html! {
                    <a class={classes!("nav-link", active.then_some("active"))} href={route.href()}>
                        { *label }
                    </a>
                }
            })
            .collect::<Html>();

        html! {
            <header class="site-header">
                <a class="brand" href={Route::Landing.href()}>
                    <img src="/images/logo-transparent.png" alt="SaberAngola" width="32" height="32" />
                    <span>{ "SaberAngola" }</span>
                </a>
                <button class="icon-btn menu-toggle" onclick={ctx.link().callback(|_| HeaderMsg::ToggleMenu)}>
                    <i class="material-icons">{ if self.menu_open { "close" } else { "menu" } }</i>
                </button>
                <nav class={classes!("site-nav", self.menu_open.then_some("open"))}>
                    { links }
                    <a class="nav-link profile-link" href={Route::Profile.href()}>
                        <i class="material-icons">{ "account_circle" }</i>
                        { "Perfil" }
                        if props.entitlement.is_premium() {
                            <span class="badge premium">{ "Premium" }</span>
                        }
                    </a>
                </nav>
            </header>
        }
    }
}

pub struct Footer;

impl Component for Footer {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Footer
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <footer class="site-footer">
                <div class="footer-brand">
                    <strong>{ "SaberAngola" }</strong>
                    <p>
                        { "Plataforma educacional angolana dedicada ao compartilhamento de conhecimento e aprendizagem colaborativa." }
                    </p>
                </div>
                <div class="footer-links">
                    <h3>{ "Links Rápidos" }</h3>
                    <a href={Route::Dashboard.href()}>{ "Home" }</a>
                    <a href={Route::Catalog.href()}>{ "Modelos" }</a>
                    <a href={Route::Studio { doc: None }.href()}>{ "Studio" }</a>
                    <a href={Route::Updates.href()}>{ "Actualizações" }</a>
                    <a href={Route::Guide.href()}>{ "Guia" }</a>
                </div>
            </footer>
        }
    }
}

pub enum ContactMsg {
    Toggle,
}

/// Bottom-right button that unfolds the contact channels.
pub struct ContactButton {
    open: bool,
}

impl Component for ContactButton {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { open: false }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Toggle => self.open = !self.open,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="contact-float">
                if self.open {
                    <div class="card contact-options">
                        { for CONTACT_OPTIONS.iter().map(|&(label, icon, href)| html! {
                            <a class="btn ghost" {href} target="_blank" rel="noopener">
                                <i class="material-icons">{ icon }</i>
                                { label }
                            </a>
                        }) }
                    </div>
                }
                <button class="contact-toggle" title="Contacto"
                    onclick={ctx.link().callback(|_| ContactMsg::Toggle)}>
                    <i class="material-icons">{ if self.open { "close" } else { "chat_bubble" } }</i>
                </button>
            </div>
        }
    }
}
