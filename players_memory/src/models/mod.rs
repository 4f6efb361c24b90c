use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub active: bool,
}

/// Body of `POST /api/players`. Any `id` in the body is ignored; the store
/// assigns one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewPlayer {
    pub name: String,
    pub active: bool,
}

impl NewPlayer {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.is_empty() {
            Err("Name is required")
        } else {
            Ok(())
        }
    }
}
