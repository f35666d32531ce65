use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use saber_common::catalog::Catalog;
use saber_common::config::WorkflowConfig;
use saber_common::entitlement::Entitlement;
use saber_common::form::FormState;
use saber_common::jobs::pipeline::{Delay, generation_task};
use saber_common::jobs::{GenerationState, GenerationTracker, StartError};
use saber_common::storage::{DocumentStore, Draft, InMemoryStore};
use saber_common::studio::{StudioAccess, open_studio, save_document};

struct TokioDelay;

impl Delay for TokioDelay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

fn fill_all_but(form: &mut FormState, catalog: &Catalog, skip: &[&str]) {
    let schema = catalog.resolve_schema("1").unwrap();
    for field in &schema.fields {
        if !skip.contains(&field.id.as_str()) {
            form.set_field(&field.id, "valor");
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_monografia_from_catalog_to_studio() {
    let catalog = Catalog::builtin();
    let store = Rc::new(InMemoryStore::new());

    // The monograph is listed under its subcategory and resolves to a schema.
    let model = catalog.model("1").unwrap();
    let schema = catalog.resolve_schema(&model.id).unwrap();
    let mut form = FormState::new(schema);
    assert_eq!(form.value("curso"), "Informática");

    fill_all_but(&mut form, catalog, &["titulo", "autor"]);
    let mut tracker = GenerationTracker::new();
    let err = tracker
        .start(schema, &mut form, Entitlement::Premium)
        .unwrap_err();
    let StartError::Invalid(errors) = err else {
        panic!("expected validation errors, got {err:?}");
    };
    assert_eq!(
        errors.messages(),
        vec!["Nome do Autor é obrigatório", "Título da Monografia é obrigatório"]
    );
    assert_eq!(tracker.state(), GenerationState::Idle);

    // Fixing one field clears only its error.
    form.set_field("titulo", "Sistemas Distribuídos");
    assert!(form.error("titulo").is_none());
    assert!(form.error("autor").is_some());
    form.set_field("autor", "Ana");

    // A draft survives a remount of the form.
    store
        .save_draft(Draft {
            template_id: "1".into(),
            values: form.values().clone(),
        })
        .unwrap();
    let draft = store.load_draft("1").unwrap().unwrap();
    let mut form = FormState::from_draft(schema, draft.values);
    assert_eq!(form.preview_title(), Some("Sistemas Distribuídos"));

    // Free users are refused without touching the tracker.
    assert_eq!(
        tracker.start(schema, &mut form, Entitlement::Free),
        Err(StartError::PremiumRequired)
    );
    assert_eq!(tracker.state(), GenerationState::Idle);

    tracker.start(schema, &mut form, Entitlement::Premium).unwrap();
    let tracker = Rc::new(RefCell::new(tracker));
    let sink = tracker.clone();
    let (task, _handle) = generation_task(TokioDelay, WorkflowConfig::default(), move |u| {
        sink.borrow_mut().apply(u).unwrap();
    });
    task.await.unwrap();
    assert_eq!(tracker.borrow().state(), GenerationState::Completed);
    assert_eq!(tracker.borrow().progress(), 99);

    // The generated document opens in Studio and saves back to the store.
    let StudioAccess::Editor(mut editor) = open_studio(Some("doc-1"), Entitlement::Premium, &store)
    else {
        panic!("premium users get the editor");
    };
    editor.edit("# Sistemas Distribuídos\n\nTexto.");
    assert!(editor.is_dirty());
    let saved = save_document(
        &TokioDelay,
        WorkflowConfig::default().save_latency(),
        &store,
        editor.snapshot(),
    )
    .await
    .unwrap();
    editor.mark_saved(&saved);
    assert!(!editor.is_dirty());

    let StudioAccess::Editor(reopened) = open_studio(Some("doc-1"), Entitlement::Premium, &store)
    else {
        panic!("premium users get the editor");
    };
    assert_eq!(reopened.text(), "# Sistemas Distribuídos\n\nTexto.");
    assert_eq!(
        open_studio(Some("doc-1"), Entitlement::Free, &store),
        StudioAccess::Locked
    );
}

#[tokio::test(start_paused = true)]
async fn test_teardown_mid_run_leaves_tracker_untouched() {
    let catalog = Catalog::builtin();
    let schema = catalog.resolve_schema("3").unwrap();
    let mut form = FormState::new(schema);
    for field in schema.required_fields() {
        form.set_field(&field.id, "x");
    }

    let tracker = Rc::new(RefCell::new(GenerationTracker::new()));
    tracker
        .borrow_mut()
        .start(schema, &mut form, Entitlement::Premium)
        .unwrap();
    let sink = tracker.clone();
    let (task, handle) = generation_task(TokioDelay, WorkflowConfig::default(), move |u| {
        sink.borrow_mut().apply(u).unwrap();
    });
    let teardown = async move {
        tokio::time::sleep(Duration::from_millis(4500)).await;
        drop(handle);
    };
    let (result, ()) = tokio::join!(task, teardown);
    assert!(result.is_err());

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(tracker.borrow().state(), GenerationState::Processing);
    assert_eq!(tracker.borrow().progress(), 66);
}
