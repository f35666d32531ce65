use yew::prelude::*;

use crate::context::AppContext;

#[derive(Properties, PartialEq, Clone)]
pub struct DocumentsProps {
    pub app: AppContext,
    /// Template id from the `model` query parameter.
    #[prop_or_default]
    pub model_id: Option<String>,
}
