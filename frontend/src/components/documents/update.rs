use log::{info, warn};
use saber_common::jobs::pipeline::generation_task;
use saber_common::jobs::{GenerationState, StartError, PREMIUM_NOTICE};
use saber_common::model::document::new_document_id;
use saber_common::route::Route;
use saber_common::storage::{DocumentStore, Draft};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{navigate, show_toast, GlooDelay};

use super::messages::Msg;
use super::state::DocumentsPage;

pub fn update(page: &mut DocumentsPage, ctx: &Context<DocumentsPage>, msg: Msg) -> bool {
    let Ok(schema) = page.schema else {
        return false;
    };
    let Some(form) = page.form.as_mut() else {
        return false;
    };
    let app = &ctx.props().app;

    match msg {
        Msg::SetField(id, value) => {
            form.set_field(&id, value);
            true
        }
        Msg::SaveDraft => {
            let draft = Draft {
                template_id: form.template_id().to_string(),
                values: form.values().clone(),
            };
            match app.store.save_draft(draft) {
                Ok(()) => show_toast("Rascunho salvo."),
                Err(e) => show_toast(&format!("Erro ao salvar rascunho: {}", e)),
            }
            false
        }
        Msg::Generate => {
            match page.tracker.start(schema, form, app.entitlement) {
                Ok(()) => {}
                Err(e @ StartError::Invalid(_)) => {
                    show_toast(&e.to_string());
                    return true;
                }
                Err(StartError::PremiumRequired) => {
                    page.notice = Some(PREMIUM_NOTICE);
                    show_toast(PREMIUM_NOTICE);
                    return true;
                }
                Err(StartError::AlreadyRunning) => return false,
            }

            page.notice = None;
            page.generated_id = None;
            let step_link = ctx.link().clone();
            let (run, handle) = generation_task(GlooDelay, (*app.config).clone(), move |update| {
                step_link.send_message(Msg::Step(update));
            });
            page.task = Some(handle);

            let link = ctx.link().clone();
            spawn_local(async move {
                // A cancelled run reports nothing.
                if run.await.is_ok() {
                    link.send_message(Msg::Finished);
                }
            });
            true
        }
        Msg::Step(update) => match page.tracker.apply(update) {
            Ok(()) => true,
            Err(e) => {
                warn!("generation update dropped: {}", e);
                false
            }
        },
        Msg::Finished => {
            page.task = None;
            if page.tracker.state() == GenerationState::Completed {
                let id = new_document_id();
                info!("template {} generated as {}", schema.template_id, id);
                page.generated_id = Some(id);
                show_toast("Seu documento foi gerado com sucesso!");
            }
            true
        }
        Msg::Cancel => {
            let Some(task) = page.task.take() else {
                return false;
            };
            task.cancel();
            if let Err(e) = page.tracker.fail("Geração cancelada.") {
                warn!("cancel after the run ended: {}", e);
            }
            true
        }
        Msg::OpenInStudio => {
            if let Some(id) = &page.generated_id {
                navigate(&Route::Studio { doc: Some(id.clone()) }.href());
            }
            false
        }
    }
}
