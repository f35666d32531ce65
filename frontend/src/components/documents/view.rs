use saber_common::form::FormState;
use saber_common::jobs::GenerationState;
use saber_common::model::field::{FieldSchema, TemplateSchema};
use saber_common::route::Route;
use saber_common::schema::group_by_section;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::helpers::go_back;

use super::messages::Msg;
use super::state::DocumentsPage;

pub fn view(page: &DocumentsPage, ctx: &Context<DocumentsPage>) -> Html {
    match (&page.schema, &page.form) {
        (Ok(schema), Some(form)) => form_page(page, ctx, schema, form),
        _ => not_found(),
    }
}

fn not_found() -> Html {
    html! {
        <div class="empty-state">
            <i class="material-icons">{ "error_outline" }</i>
            <h2>{ "Modelo não encontrado" }</h2>
            <p class="muted">{ "O modelo solicitado não existe ou foi removido." }</p>
            <a class="btn" href={Route::Catalog.href()}>
                <i class="material-icons">{ "arrow_back" }</i>
                { "Voltar aos Modelos" }
            </a>
        </div>
    }
}

fn form_page(
    page: &DocumentsPage,
    ctx: &Context<DocumentsPage>,
    schema: &TemplateSchema,
    form: &FormState,
) -> Html {
    let link = ctx.link();
    html! {
        <div class="documents">
            <section class="hero">
                <button class="btn ghost" onclick={Callback::from(|_| go_back())}>
                    <i class="material-icons">{ "arrow_back" }</i>
                    { "Voltar aos Modelos" }
                </button>
                <div class="breadcrumb muted">
                    { format!("Modelos → {} → {}", schema.category, schema.subcategory) }
                </div>
                <h1>{ schema.name.clone() }</h1>
                <div class="muted">
                    if let Some(course) = &schema.course {
                        <span class="badge secondary">{ course.clone() }</span>
                    }
                    { format!(" Estimativa: {}", schema.estimated_pages) }
                </div>
            </section>

            <div class="form-layout">
                <section class="card form-card">
                    <h2>{ "Preencher Dados do Documento" }</h2>
                    <p class="muted">{ "Preencha os campos obrigatórios (*) para gerar seu documento" }</p>
                    { for group_by_section(&schema.fields).into_iter().map(|group| html! {
                        <div class="form-section" key={group.key.to_string()}>
                            <h3>{ group.heading().to_string() }</h3>
                            <div class="field-grid">
                                { for group.fields.into_iter().map(|field| field_view(link, form, field)) }
                            </div>
                        </div>
                    }) }
                </section>

                <aside>
                    { preview_card(schema, form) }
                    { actions_card(page, ctx) }
                </aside>
            </div>
        </div>
    }
}

fn field_view(link: &Scope<DocumentsPage>, form: &FormState, field: &FieldSchema) -> Html {
    let error = form.error(&field.id);
    let class = classes!("input", error.map(|_| "invalid"));
    let placeholder = field.placeholder.clone().unwrap_or_default();
    let value = form.value(&field.id).to_string();

    let input = if field.kind.is_multiline() {
        let id = field.id.clone();
        html! {
            <textarea id={field.id.clone()} {class} {placeholder} {value} rows="4"
                oninput={link.callback(move |e: InputEvent| {
                    Msg::SetField(id.clone(), e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })} />
        }
    } else {
        let id = field.id.clone();
        html! {
            <input id={field.id.clone()} type={field.kind.html_type()} {class} {placeholder} {value}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::SetField(id.clone(), e.target_unchecked_into::<HtmlInputElement>().value())
                })} />
        }
    };

    html! {
        <div key={field.id.clone()} class={classes!("field", field.kind.is_multiline().then_some("wide"))}>
            <label for={field.id.clone()}>
                { field.label.clone() }
                if field.required {
                    <span class="required">{ "*" }</span>
                }
            </label>
            { input }
            if let Some(message) = error {
                <p class="field-error">{ message.to_string() }</p>
            }
        </div>
    }
}

fn preview_card(schema: &TemplateSchema, form: &FormState) -> Html {
    let author = form.value("autor");
    let name = form.value("nome_completo");
    html! {
        <section class="card preview-card">
            <h3>{ "Pré-visualização" }</h3>
            <div class="page-preview">
                <i class="material-icons">{ "description" }</i>
                <p class="muted">
                    { form.preview_title().unwrap_or("Pré-visualização do documento").to_string() }
                </p>
            </div>
            <p><strong>{ "Tipo: " }</strong>{ schema.name.clone() }</p>
            <p><strong>{ "Páginas estimadas: " }</strong>{ schema.estimated_pages.clone() }</p>
            if !author.is_empty() {
                <p><strong>{ "Autor: " }</strong>{ author.to_string() }</p>
            }
            if !name.is_empty() {
                <p><strong>{ "Nome: " }</strong>{ name.to_string() }</p>
            }
        </section>
    }
}

fn actions_card(page: &DocumentsPage, ctx: &Context<DocumentsPage>) -> Html {
    let link = ctx.link();
    let premium = ctx.props().app.entitlement.is_premium();
    let tracker = &page.tracker;
    let running = tracker.is_running();

    html! {
        <section class="card actions-card">
            <h3>{ "Ações" }</h3>
            if !premium {
                <div class="alert">
                    <i class="material-icons">{ "workspace_premium" }</i>
                    { "A geração de documentos é um recurso premium. " }
                    <a href={Route::Landing.href()}>{ "Assine agora" }</a>
                    { " ou pague avulso." }
                </div>
            }
            if let Some(notice) = page.notice {
                <div class="alert warning">{ notice }</div>
            }
            if running || tracker.state() == GenerationState::Completed {
                <div class="generation">
                    <span class="status">{ tracker.state().status_label() }</span>
                    <div class="progress">
                        <div class="progress-bar" style={format!("width: {}%", tracker.progress())} />
                    </div>
                </div>
            }
            if tracker.state() == GenerationState::Error {
                <div class="alert error">
                    { tracker.error_message().unwrap_or(tracker.state().status_label()).to_string() }
                </div>
            }
            if tracker.state() == GenerationState::Completed {
                <div class="alert success">{ "Seu documento foi gerado com sucesso!" }</div>
            }

            <button class="btn outline block" disabled={running} onclick={link.callback(|_| Msg::SaveDraft)}>
                <i class="material-icons">{ "save" }</i>
                { "Salvar Rascunho" }
            </button>
            if running {
                <button class="btn outline block" onclick={link.callback(|_| Msg::Cancel)}>
                    <i class="material-icons">{ "cancel" }</i>
                    { "Cancelar Geração" }
                </button>
            } else {
                <button class="btn block" onclick={link.callback(|_| Msg::Generate)}>
                    <i class="material-icons">{ if premium { "description" } else { "lock" } }</i>
                    { if premium { "Gerar Documento" } else { "Gerar Documento (Premium)" } }
                </button>
            }
            if page.generated_id.is_some() {
                <button class="btn outline block" onclick={link.callback(|_| Msg::OpenInStudio)}>
                    <i class="material-icons">{ "edit" }</i>
                    { "Editar no Studio" }
                </button>
            }
            <ul class="hints muted">
                <li>{ "Rascunhos ficam guardados durante a sessão" }</li>
                <li>{ "Edição no Studio disponível após geração" }</li>
            </ul>
        </section>
    }
}
