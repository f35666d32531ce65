use yew::prelude::*;

use crate::context::AppContext;

#[derive(Properties, PartialEq, Clone)]
pub struct StudioProps {
    pub app: AppContext,
    /// Value of the `doc` query parameter.
    #[prop_or_default]
    pub document_id: Option<String>,
}
