use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body of `GET /`.
#[derive(Serialize, Deserialize, Debug)]
pub struct Welcome {
    pub message: &'static str,
}

impl Default for Welcome {
    fn default() -> Self {
        Self { message: "Welcome to the home page" }
    }
}

/// Body returned by mutating endpoints on success.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct StatusMessage {
    pub status: &'static str,
}

impl StatusMessage {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}
