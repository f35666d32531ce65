//! Public landing page: pitch, stats, FAQ accordion, sign-up sheet and the
//! premium checkout button.

use log::{info, warn};
use saber_common::landing::{Accordion, FAQ, PREMIUM_PLAN, STATS, STEPS};
use saber_common::requests::{CheckoutRequest, CheckoutSession, FetchError, RegisterRequest};
use saber_common::route::Route;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::{navigate, show_toast};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet, YwMaterialTopSheet};

pub enum Msg {
    ToggleFaq(usize),
    OpenRegister,
    CloseRegister,
    SetName(String),
    SetEmail(String),
    SetPassword(String),
    Register,
    Registered(Result<(), FetchError>),
    Checkout,
    CheckoutReady(Result<CheckoutSession, FetchError>),
}

pub struct LandingPage {
    faq: Accordion,
    register: RegisterRequest,
    register_error: Option<String>,
    submitting: bool,
    checking_out: bool,
    register_sheet: NodeRef,
}

impl Component for LandingPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            faq: Accordion::default(),
            register: RegisterRequest {
                name: String::new(),
                email: String::new(),
                password: String::new(),
            },
            register_error: None,
            submitting: false,
            checking_out: false,
            register_sheet: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleFaq(index) => self.faq.toggle(index),
            Msg::OpenRegister => {
                open_top_sheet(self.register_sheet.clone());
                return false;
            }
            Msg::CloseRegister => {
                close_top_sheet(self.register_sheet.clone());
                self.register_error = None;
            }
            Msg::SetName(v) => self.register.name = v,
            Msg::SetEmail(v) => self.register.email = v,
            Msg::SetPassword(v) => self.register.password = v,
            Msg::Register => {
                if self.submitting {
                    return false;
                }
                if let Err(problem) = self.register.check() {
                    self.register_error = Some(problem);
                    return true;
                }
                self.register_error = None;
                self.submitting = true;
                let request = self.register.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Registered(api::register(&request).await));
                });
            }
            Msg::Registered(result) => {
                self.submitting = false;
                match result {
                    Ok(()) => {
                        info!("account created for {}", self.register.email);
                        close_top_sheet(self.register_sheet.clone());
                        show_toast("Conta criada com sucesso.");
                        navigate(&Route::Dashboard.href());
                    }
                    Err(e) => {
                        warn!("registration failed: {}", e);
                        self.register_error = Some(format!("Não foi possível criar a conta: {}", e));
                    }
                }
            }
            Msg::Checkout => {
                if self.checking_out {
                    return false;
                }
                self.checking_out = true;
                let request = CheckoutRequest {
                    plan: PREMIUM_PLAN.to_string(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::CheckoutReady(api::checkout(&request).await));
                });
            }
            Msg::CheckoutReady(result) => {
                self.checking_out = false;
                match result {
                    Ok(session) => navigate(&session.checkout_url),
                    Err(e) => {
                        warn!("checkout failed: {}", e);
                        show_toast(&format!("Não foi possível iniciar o pagamento: {}", e));
                    }
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="landing">
                <section class="hero center">
                    <h1><span class="primary">{ "SaberAngola" }</span></h1>
                    <p class="lead">
                        { "A plataforma acadêmica digital que revoluciona a criação de documentos para estudantes angolanos. Crie CVs, cartas formais, monografias e certificados com qualidade profissional." }
                    </p>
                    <div class="actions">
                        <button class="btn" onclick={link.callback(|_| Msg::OpenRegister)}>
                            { "Começar Gratuitamente" }
                        </button>
                        <a class="btn outline" href={Route::Dashboard.href()}>{ "Já tenho conta" }</a>
                    </div>
                </section>

                <section class="stats-band">
                    { for STATS.iter().map(|(value, label)| html! {
                        <div class="stat">
                            <div class="stat-value">{ *value }</div>
                            <div class="stat-label">{ *label }</div>
                        </div>
                    }) }
                </section>

                <section>
                    <h2>{ "Como Funciona" }</h2>
                    <div class="steps">
                        { for STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                            <div class="card step">
                                <span class="step-number">{ i + 1 }</span>
                                <h3>{ *title }</h3>
                                <p class="muted">{ *text }</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section class="faq">
                    <h2>{ "Perguntas Frequentes" }</h2>
                    { for FAQ.iter().enumerate().map(|(i, entry)| {
                        let open = self.faq.is_open(i);
                        html! {
                            <div class={classes!("card", "faq-item", open.then_some("open"))}>
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
                </section>

                <section class="cta center">
                    <h2>{ "Comece a criar seus documentos hoje" }</h2>
                    <div class="actions">
                        <button class="btn secondary" onclick={link.callback(|_| Msg::OpenRegister)}>
                            { "Criar Conta Grátis" }
                        </button>
                        <button class="btn outline" disabled={self.checking_out} onclick={link.callback(|_| Msg::Checkout)}>
                            { if self.checking_out { "A redirecionar..." } else { "Assinar Premium" } }
                        </button>
                    </div>
                </section>

                { self.register_sheet_view(ctx) }
            </div>
        }
    }
}

impl LandingPage {
    fn register_sheet_view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let input = |msg: fn(String) -> Msg| {
            link.callback(move |e: InputEvent| msg(e.target_unchecked_into::<HtmlInputElement>().value()))
        };
        html! {
            <YwMaterialTopSheet node_ref={self.register_sheet.clone()}>
                <form class="card register" onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Register
                })}>
                    <h3>{ "Criar Conta" }</h3>
                    <label>{ "Nome" }
                        <input type="text" value={self.register.name.clone()} oninput={input(Msg::SetName)} />
                    </label>
                    <label>{ "E-mail" }
                        <input type="email" value={self.register.email.clone()} oninput={input(Msg::SetEmail)} />
                    </label>
                    <label>{ "Palavra-passe" }
                        <input type="password" value={self.register.password.clone()} oninput={input(Msg::SetPassword)} />
                    </label>
                    if let Some(problem) = &self.register_error {
                        <p class="field-error">{ problem.clone() }</p>
                    }
                    <div class="actions">
                        <button type="button" class="btn outline" onclick={link.callback(|_| Msg::CloseRegister)}>
                            { "Cancelar" }
                        </button>
                        <button type="submit" class="btn" disabled={self.submitting}>
                            { if self.submitting { "A criar..." } else { "Criar Conta" } }
                        </button>
                    </div>
                </form>
            </YwMaterialTopSheet>
        }
    }
}
