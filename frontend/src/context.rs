use std::rc::Rc;

use saber_common::config::WorkflowConfig;
use saber_common::entitlement::Entitlement;
use saber_common::storage::InMemoryStore;

/// Handed by `App` to every page as a prop.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub store: Rc<InMemoryStore>,
    pub entitlement: Entitlement,
    pub config: Rc<WorkflowConfig>,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
            && self.entitlement == other.entitlement
            && self.config == other.config
    }
}
