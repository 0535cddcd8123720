#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogServiceError {
    UserNotFound { user_id: i32 },
    GameOrUserNotFound { user_id: i32, game_id: i32 },
    RatingsNotFound { user_id: i32 },
}

impl std::fmt::Display for CatalogServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogServiceError::UserNotFound { user_id } => {
                write!(f, "User not found: {}", user_id)
            }
            CatalogServiceError::GameOrUserNotFound { user_id, game_id } => {
                write!(f, "Game or user not found: user {}, game {}", user_id, game_id)
            }
            CatalogServiceError::RatingsNotFound { user_id } => {
                write!(f, "No ratings recorded for user {}", user_id)
            }
        }
    }
}

impl std::error::Error for CatalogServiceError {}
