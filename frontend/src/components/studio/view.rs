use pulldown_cmark::{html::push_html, Event, Options, Parser};
use saber_common::route::Route;
use saber_common::studio::format::InlineStyle;
use saber_common::studio::{ExportFormat, StudioAccess, StudioEditor};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::helpers::go_back;
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

use super::messages::Msg;
use super::state::{StudioPage, Tab};

const STYLE_BUTTONS: [(InlineStyle, &str, &str); 5] = [
    (InlineStyle::Bold, "format_bold", "Negrito"),
    (InlineStyle::Italic, "format_italic", "Itálico"),
    (InlineStyle::BoldItalic, "text_format", "Negrito e itálico"),
    (InlineStyle::Heading, "title", "Título"),
    (InlineStyle::BulletedList, "format_list_bulleted", "Lista"),
];

pub fn view(page: &StudioPage, ctx: &Context<StudioPage>) -> Html {
    match &page.access {
        StudioAccess::Locked => locked(page, ctx),
        StudioAccess::Editor(editor) => studio(page, ctx, editor),
    }
}

fn locked(page: &StudioPage, ctx: &Context<StudioPage>) -> Html {
    html! {
        <div class="empty-state studio-locked">
            <i class="material-icons">{ "lock" }</i>
            <h2>{ "Studio Premium" }</h2>
            <p class="muted">
                { "A edição avançada de documentos está disponível apenas para assinantes Premium." }
            </p>
            <div class="actions">
                <button class="btn primary" disabled={page.checking_out}
                    onclick={ctx.link().callback(|_| Msg::Subscribe)}>
                    <i class="material-icons">{ "workspace_premium" }</i>
                    { if page.checking_out { "Aguarde..." } else { "Assinar Premium" } }
                </button>
                <button class="btn ghost" onclick={Callback::from(|_| go_back())}>
                    <i class="material-icons">{ "arrow_back" }</i>
                    { "Voltar" }
                </button>
            </div>
        </div>
    }
}

fn studio(page: &StudioPage, ctx: &Context<StudioPage>, editor: &StudioEditor) -> Html {
    let link = ctx.link();
    html! {
        <div class="studio">
            if !page.has_document {
                <div class="alert">
                    <i class="material-icons">{ "info" }</i>
                    { "Nenhum documento selecionado. " }
                    <a href={Route::Catalog.href()}>{ "Escolha um modelo" }</a>
                    { " para gerar um documento." }
                </div>
            }
            { header(page, link, editor) }
            { toolbar(page, link, editor) }
            <div class="studio-layout">
                { outline(editor) }
                <section class="card studio-editor">
                    <div class="tabs">
                        { tab_button(link, page.active_tab, Tab::Editor, "edit", "Editor") }
                        { tab_button(link, page.active_tab, Tab::Preview, "visibility", "Visualizar") }
                    </div>
                    { match page.active_tab {
                        Tab::Editor => text_area(page, link, editor),
                        Tab::Preview => preview(editor.text()),
                    } }
                </section>
            </div>
            { versions(page, link, editor) }
        </div>
    }
}

fn header(page: &StudioPage, link: &Scope<StudioPage>, editor: &StudioEditor) -> Html {
    let document = editor.document();
    let save_state = if page.is_saving() {
        "Salvando...".to_string()
    } else if let Some(time) = &page.last_saved {
        format!("Salvo às {}", time)
    } else {
        "Não salvo nesta sessão".to_string()
    };
    html! {
        <section class="studio-header">
            <input class="title-input" type="text" value={editor.title().to_string()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetTitle(e.target_unchecked_into::<HtmlInputElement>().value())
                })} />
            <div class="muted">
                <span class="badge secondary">{ document.document_type.clone() }</span>
                { format!(" {} páginas · {} palavras · ", document.pages, editor.word_count()) }
                { save_state }
                if editor.is_dirty() {
                    <span class="dirty-dot" title="Alterações não salvas"></span>
                }
            </div>
        </section>
    }
}

fn toolbar(page: &StudioPage, link: &Scope<StudioPage>, editor: &StudioEditor) -> Html {
    html! {
        <div class="toolbar card">
            <button class="icon-btn" title="Desfazer" disabled={!editor.can_undo()}
                onclick={link.callback(|_| Msg::Undo)}>
                <i class="material-icons">{ "undo" }</i>
            </button>
            <button class="icon-btn" title="Refazer" disabled={!editor.can_redo()}
                onclick={link.callback(|_| Msg::Redo)}>
                <i class="material-icons">{ "redo" }</i>
            </button>
            <span class="separator"></span>
            { for STYLE_BUTTONS.iter().map(|&(style, icon, label)| html! {
                <button class="icon-btn" title={label} disabled={page.active_tab != Tab::Editor}
                    onclick={link.callback(move |_| Msg::ApplyStyle(style))}>
                    <i class="material-icons">{ icon }</i>
                </button>
            }) }
            <span class="spacer"></span>
            <button class="btn ghost" onclick={link.callback(|_| Msg::ToggleVersions)}>
                <i class="material-icons">{ "history" }</i>
                { "Versões" }
            </button>
            <button class="btn" disabled={page.is_saving()} onclick={link.callback(|_| Msg::Save)}>
                <i class="material-icons">{ "save" }</i>
                { if page.is_saving() { "Salvando..." } else { "Salvar" } }
            </button>
            { for [ExportFormat::Pdf, ExportFormat::Word].into_iter().map(|format| html! {
                <button class="btn ghost" disabled={page.is_exporting()}
                    onclick={link.callback(move |_| Msg::Export(format))}>
                    <i class="material-icons">{ "download" }</i>
                    { format.label() }
                </button>
            }) }
        </div>
    }
}

fn outline(editor: &StudioEditor) -> Html {
    let entries = editor.outline();
    html! {
        <aside class="card studio-outline">
            <h3>{ "Estrutura do Documento" }</h3>
            if entries.is_empty() {
                <p class="muted">{ "Use títulos (#) para montar a estrutura." }</p>
            } else {
                <ul>
                    { for entries.into_iter().map(|entry| html! {
                        <li class={format!("outline-level-{}", entry.level)}>{ entry.title }</li>
                    }) }
                </ul>
            }
        </aside>
    }
}

fn tab_button(link: &Scope<StudioPage>, active: Tab, tab: Tab, icon: &str, label: &str) -> Html {
    html! {
        <button class={classes!("tab", (active == tab).then_some("active"))}
            onclick={link.callback(move |_| Msg::SetTab(tab))}>
            <i class="material-icons">{ icon.to_string() }</i>
            { label.to_string() }
        </button>
    }
}

fn text_area(page: &StudioPage, link: &Scope<StudioPage>, editor: &StudioEditor) -> Html {
    let onkeydown = link.batch_callback(|e: KeyboardEvent| {
        if !(e.ctrl_key() || e.meta_key()) {
            return None;
        }
        let msg = match e.key().to_lowercase().as_str() {
            "z" if e.shift_key() => Msg::Redo,
            "z" => Msg::Undo,
            "y" => Msg::Redo,
            "s" => Msg::Save,
            _ => return None,
        };
        e.prevent_default();
        Some(msg)
    });
    html! {
        <textarea class="studio-text" ref={page.textarea_ref.clone()} spellcheck="true"
            value={editor.text().to_string()}
            {onkeydown}
            oninput={link.callback(|e: InputEvent| {
                Msg::Edit(e.target_unchecked_into::<HtmlTextAreaElement>().value())
            })} />
    }
}

/// Renders markdown with raw HTML shown as text.
fn preview(markdown: &str) -> Html {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut rendered = String::new();
    push_html(&mut rendered, parser);
    html! {
        <article class="studio-preview markdown">
            { Html::from_html_unchecked(AttrValue::from(rendered)) }
        </article>
    }
}

fn versions(page: &StudioPage, link: &Scope<StudioPage>, editor: &StudioEditor) -> Html {
    html! {
        <YwMaterialTopSheet node_ref={page.versions_sheet.clone()}>
            <div class="card versions">
                <div class="card-title">
                    <h3>{ "Histórico de Versões" }</h3>
                    <button class="icon-btn" onclick={link.callback(|_| Msg::ToggleVersions)}>
                        <i class="material-icons">{ "close" }</i>
                    </button>
                </div>
                <ul>
                    { for editor.versions().iter().map(|version| {
                        let id = version.id;
                        html! {
                            <li key={id.to_string()}>
                                <div>
                                    <strong>{ format!("Versão {}", id) }</strong>
                                    <span class="muted">{ format!(" {} · {}", version.timestamp, version.author) }</span>
                                    <div class="muted">{ format!("{} · {}", version.action, version.size) }</div>
                                </div>
                                <button class="btn ghost" onclick={link.callback(move |_| Msg::RestoreVersion(id))}>
                                    { "Restaurar" }
                                </button>
                            </li>
                        }
                    }) }
                </ul>
            </div>
        </YwMaterialTopSheet>
    }
}
