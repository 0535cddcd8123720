use serde::{Deserialize, Serialize};

/// A registered user. Identity is the id alone; the name may be changed
/// in place after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
}

impl User {
    pub fn new(id: i32, name: &str) -> Self {
        User {
            id,
            name: name.to_string(),
        }
    }
}
