use serde::{Deserialize, Serialize};

/// A recipe as clients send and receive it. Identity comes from the key it is
/// stored under, not from the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub description: String,
}

impl Recipe {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: name.into(), description: description.into() }
    }
}

impl From<models::recipe::Model> for Recipe {
    fn from(m: models::recipe::Model) -> Self {
        Self { name: m.name, description: m.description }
    }
}
