use saber_common::model::document::DocumentSnapshot;
use saber_common::requests::{CheckoutSession, FetchError};
use saber_common::storage::StorageError;
use saber_common::studio::format::InlineStyle;
use saber_common::studio::ExportFormat;

use super::state::Tab;

pub enum Msg {
    SetTab(Tab),
    Edit(String),
    SetTitle(String),
    Undo,
    Redo,
    ApplyStyle(InlineStyle),
    Save,
    Saved(Result<DocumentSnapshot, StorageError>),
    Export(ExportFormat),
    Exported(String),
    ToggleVersions,
    RestoreVersion(u32),
    Subscribe,
    CheckoutReady(Result<CheckoutSession, FetchError>),
}
