use std::rc::Rc;

use log::{info, warn};
use saber_common::jobs::task::cancellable;
use saber_common::landing::PREMIUM_PLAN;
use saber_common::requests::CheckoutRequest;
use saber_common::studio::format::apply_style;
use saber_common::studio::{export_document, save_document};
use web_sys::HtmlTextAreaElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::{navigate, set_window_dirty_flag, show_toast, GlooDelay};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::messages::Msg;
use super::state::StudioPage;

pub fn update(page: &mut StudioPage, ctx: &Context<StudioPage>, msg: Msg) -> bool {
    let app = &ctx.props().app;
    match msg {
        Msg::SetTab(tab) => {
            page.active_tab = tab;
            true
        }
        Msg::Edit(text) => {
            let Some(editor) = page.editor_mut() else {
                return false;
            };
            editor.edit(text);
            set_window_dirty_flag(editor.is_dirty());
            true
        }
        Msg::SetTitle(title) => {
            if let Some(editor) = page.editor_mut() {
                editor.set_title(title);
            }
            true
        }
        Msg::Undo | Msg::Redo => {
            let redo = matches!(msg, Msg::Redo);
            let Some(editor) = page.editor_mut() else {
                return false;
            };
            let moved = if redo { editor.redo() } else { editor.undo() };
            set_window_dirty_flag(editor.is_dirty());
            moved
        }
        Msg::ApplyStyle(style) => {
            let Some(textarea) = page.textarea_ref.cast::<HtmlTextAreaElement>() else {
                return false;
            };
            let Some(editor) = page.editor_mut() else {
                return false;
            };
            let start = textarea.selection_start().ok().flatten().unwrap_or(0) as usize;
            let end = textarea.selection_end().ok().flatten().unwrap_or(0) as usize;
            let edit = apply_style(editor.text(), start, end, style);

            textarea.set_value(&edit.text);
            textarea.set_selection_range(edit.select_start, edit.select_end).ok();
            textarea.focus().ok();
            editor.edit(edit.text);
            set_window_dirty_flag(editor.is_dirty());
            true
        }
        Msg::Save => {
            if page.is_saving() {
                return false;
            }
            let Some(editor) = page.editor() else {
                return false;
            };
            let snapshot = editor.snapshot();
            let store = Rc::clone(&app.store);
            let latency = app.config.save_latency();
            let (task, handle) = cancellable(async move {
                save_document(&GlooDelay, latency, &store, snapshot).await
            });
            page.save_task = Some(handle);

            let link = ctx.link().clone();
            spawn_local(async move {
                if let Ok(result) = task.await {
                    link.send_message(Msg::Saved(result));
                }
            });
            true
        }
        Msg::Saved(result) => {
            page.save_task = None;
            match result {
                Ok(snapshot) => {
                    if let Some(editor) = page.editor_mut() {
                        editor.mark_saved(&snapshot);
                        set_window_dirty_flag(editor.is_dirty());
                    }
                    let now = js_sys::Date::new_0();
                    page.last_saved = now.to_locale_time_string("pt-AO").as_string();
                    show_toast("Documento salvo.");
                }
                Err(e) => {
                    warn!("studio save failed: {}", e);
                    show_toast(&format!("Erro ao salvar: {}", e));
                }
            }
            true
        }
        Msg::Export(format) => {
            if page.is_exporting() {
                return false;
            }
            let latency = app.config.export_latency();
            let (task, handle) = cancellable(async move {
                export_document(&GlooDelay, latency, format).await
            });
            page.export_task = Some(handle);

            let link = ctx.link().clone();
            spawn_local(async move {
                if let Ok(notice) = task.await {
                    link.send_message(Msg::Exported(notice));
                }
            });
            true
        }
        Msg::Exported(notice) => {
            page.export_task = None;
            show_toast(&notice);
            true
        }
        Msg::ToggleVersions => {
            page.versions_open = !page.versions_open;
            if page.versions_open {
                open_top_sheet(page.versions_sheet.clone());
            } else {
                close_top_sheet(page.versions_sheet.clone());
            }
            true
        }
        Msg::RestoreVersion(id) => {
            if let Some(editor) = page.editor() {
                show_toast(&editor.restore_version(id));
            }
            false
        }
        Msg::Subscribe => {
            if page.checking_out {
                return false;
            }
            page.checking_out = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let request = CheckoutRequest {
                    plan: PREMIUM_PLAN.to_string(),
                };
                link.send_message(Msg::CheckoutReady(api::checkout(&request).await));
            });
            true
        }
        Msg::CheckoutReady(result) => {
            page.checking_out = false;
            match result {
                Ok(session) => {
                    info!("redirecting to checkout");
                    navigate(&session.checkout_url);
                }
                Err(e) => show_toast(&format!("Não foi possível iniciar o pagamento: {}", e)),
            }
            true
        }
    }
}
