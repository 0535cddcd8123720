use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A catalog entry. The id is assigned by the caller and immutable; the
/// repository rejects non-positive ids and id/title collisions at add time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub genres: Vec<String>,
    pub release_date: Option<NaiveDate>,
    pub platform: String,
}

impl Game {
    pub fn new(
        id: i32,
        title: &str,
        genres: Vec<String>,
        release_date: Option<NaiveDate>,
        platform: &str,
    ) -> Self {
        Game {
            id,
            title: title.to_string(),
            genres,
            release_date,
            platform: platform.to_string(),
        }
    }
}
