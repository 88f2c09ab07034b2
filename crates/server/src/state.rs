use service::recipe::{KeyPolicy, SharedStore};

/// Per-process handler state: the selected store plus the rule that turns a
/// submitted name into its key on create.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub key_policy: KeyPolicy,
}

impl AppState {
    pub fn new(store: SharedStore, key_policy: KeyPolicy) -> Self {
        Self { store, key_policy }
    }
}
