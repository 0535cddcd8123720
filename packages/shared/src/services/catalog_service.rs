use std::collections::HashMap;
use std::sync::Arc;

use crate::models::game::Game;
use crate::models::user::User;
use crate::repositories::catalog_repository::{CatalogRepository, WriteOutcome};
use crate::services::errors::catalog_service_errors::CatalogServiceError;

/// Orchestrates repository calls on behalf of the request layer: existence
/// checks before rename/rate, single-genre query wrapping, and the
/// title-keyed ratings view. Business-rule rejections inside the
/// repository stay silent here; only missing ids surface as errors.
pub struct CatalogService {
    repository: Arc<dyn CatalogRepository + Send + Sync>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepository + Send + Sync>) -> Self {
        CatalogService { repository }
    }

    pub async fn add_game(&self, game: Game) -> WriteOutcome {
        self.repository.add_game(game).await
    }

    pub async fn add_user(&self, user: User) -> WriteOutcome {
        self.repository.add_user(user).await
    }

    pub async fn rename_user(
        &self,
        user_id: i32,
        new_name: &str,
    ) -> Result<(), CatalogServiceError> {
        if self.repository.find_user_by_id(user_id).await.is_none() {
            return Err(CatalogServiceError::UserNotFound { user_id });
        }
        self.repository.update_user_name(user_id, new_name).await;
        Ok(())
    }

    pub async fn rate_game(
        &self,
        user_id: i32,
        game_id: i32,
        rating: i32,
    ) -> Result<(), CatalogServiceError> {
        let user = self.repository.find_user_by_id(user_id).await;
        let game = self.repository.find_game_by_id(game_id).await;
        if user.is_none() || game.is_none() {
            return Err(CatalogServiceError::GameOrUserNotFound { user_id, game_id });
        }
        self.repository.add_rating(user_id, game_id, rating).await;
        Ok(())
    }

    pub async fn games_by_genre(&self, genre: &str) -> Vec<Game> {
        let query = vec![genre.to_string()];
        self.repository.list_games_by_genre(&query).await
    }

    pub async fn list_users(&self) -> Vec<User> {
        self.repository.list_users().await
    }

    /// The per-user ratings view keyed by game title. Absent user and
    /// never-rated user are indistinguishable to the caller; both answer
    /// `RatingsNotFound`.
    pub async fn ratings_for_user(
        &self,
        user_id: i32,
    ) -> Result<HashMap<String, i32>, CatalogServiceError> {
        if self.repository.find_user_by_id(user_id).await.is_none() {
            return Err(CatalogServiceError::RatingsNotFound { user_id });
        }
        let per_game = match self.repository.ratings_for_user(user_id).await {
            Some(per_game) => per_game,
            None => return Err(CatalogServiceError::RatingsNotFound { user_id }),
        };
        let mut by_title = HashMap::new();
        for (game_id, rating) in per_game {
            // Games are never deleted, so every stored id resolves when
            // ratings arrive through the request layer.
            if let Some(game) = self.repository.find_game_by_id(game_id).await {
                by_title.insert(game.title, rating);
            }
        }
        Ok(by_title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::catalog_repository::{
        InMemoryCatalogRepository, MockCatalogRepository,
    };

    fn service_with_memory_repo() -> CatalogService {
        CatalogService::new(Arc::new(InMemoryCatalogRepository::new()))
    }

    fn game(id: i32, title: &str, genres: &[&str]) -> Game {
        Game::new(
            id,
            title,
            genres.iter().map(|genre| genre.to_string()).collect(),
            None,
            "Mobile Phone",
        )
    }

    #[tokio::test]
    async fn test_rename_user_updates_existing_user() {
        let service = service_with_memory_repo();
        service.add_user(User::new(1, "John Doe")).await;

        service.rename_user(1, "Johnny").await.unwrap();

        let users = service.list_users().await;
        assert_eq!(users[0].name, "Johnny");
    }

    #[tokio::test]
    async fn test_rename_user_skips_update_when_user_is_missing() {
        let mut repository = MockCatalogRepository::new();
        repository
            .expect_find_user_by_id()
            .withf(|user_id| *user_id == 1)
            .returning(|_| None);
        repository.expect_update_user_name().never();

        let service = CatalogService::new(Arc::new(repository));
        let result = service.rename_user(1, "X").await;

        assert_eq!(result, Err(CatalogServiceError::UserNotFound { user_id: 1 }));
    }

    #[tokio::test]
    async fn test_rate_game_stores_rating_by_id_pair() {
        let mut repository = MockCatalogRepository::new();
        repository
            .expect_find_user_by_id()
            .withf(|user_id| *user_id == 1)
            .returning(|_| Some(User::new(1, "John Doe")));
        repository
            .expect_find_game_by_id()
            .withf(|game_id| *game_id == 2)
            .returning(|_| Some(game(2, "Subway Surfers", &["Relaxing"])));
        repository
            .expect_add_rating()
            .withf(|user_id, game_id, rating| *user_id == 1 && *game_id == 2 && *rating == 5)
            .times(1)
            .returning(|_, _, _| WriteOutcome::Applied);

        let service = CatalogService::new(Arc::new(repository));
        service.rate_game(1, 2, 5).await.unwrap();
    }

    #[tokio::test]
    async fn test_rate_game_fails_when_user_is_missing() {
        let mut repository = MockCatalogRepository::new();
        repository.expect_find_user_by_id().returning(|_| None);
        repository
            .expect_find_game_by_id()
            .returning(|_| Some(game(2, "Subway Surfers", &["Relaxing"])));
        repository.expect_add_rating().never();

        let service = CatalogService::new(Arc::new(repository));
        let result = service.rate_game(1, 2, 5).await;

        assert_eq!(
            result,
            Err(CatalogServiceError::GameOrUserNotFound { user_id: 1, game_id: 2 })
        );
    }

    #[tokio::test]
    async fn test_rate_game_fails_when_game_is_missing() {
        let service = service_with_memory_repo();
        service.add_user(User::new(1, "John Doe")).await;

        let result = service.rate_game(1, 2, 5).await;

        assert_eq!(
            result,
            Err(CatalogServiceError::GameOrUserNotFound { user_id: 1, game_id: 2 })
        );
    }

    #[tokio::test]
    async fn test_games_by_genre_wraps_single_genre_query() {
        let service = service_with_memory_repo();
        service.add_game(game(1, "Candy Crush", &["Relaxing"])).await;
        service
            .add_game(game(2, "Subway Surfers", &["Relaxing", "Thrilling"]))
            .await;

        let relaxing = service.games_by_genre("relaxing").await;
        assert_eq!(relaxing.len(), 2);

        let thrilling = service.games_by_genre("Thrilling").await;
        assert_eq!(thrilling.len(), 1);
        assert_eq!(thrilling[0].id, 2);
    }

    #[tokio::test]
    async fn test_ratings_for_user_maps_game_titles_to_scores() {
        let service = service_with_memory_repo();
        service.add_user(User::new(1, "John Doe")).await;
        service.add_game(game(1, "Elden Ring", &["Thrilling"])).await;
        service.add_game(game(2, "Candy Crush", &["Relaxing"])).await;
        service.rate_game(1, 1, 5).await.unwrap();
        service.rate_game(1, 2, 3).await.unwrap();

        let ratings = service.ratings_for_user(1).await.unwrap();

        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings.get("Elden Ring"), Some(&5));
        assert_eq!(ratings.get("Candy Crush"), Some(&3));
    }

    #[tokio::test]
    async fn test_ratings_for_unknown_user_fail() {
        let service = service_with_memory_repo();
        let result = service.ratings_for_user(1).await;
        assert_eq!(result, Err(CatalogServiceError::RatingsNotFound { user_id: 1 }));
    }

    #[tokio::test]
    async fn test_ratings_for_user_without_ratings_fail() {
        let service = service_with_memory_repo();
        service.add_user(User::new(1, "John Doe")).await;
        let result = service.ratings_for_user(1).await;
        assert_eq!(result, Err(CatalogServiceError::RatingsNotFound { user_id: 1 }));
    }

    #[tokio::test]
    async fn test_add_game_reports_rejections_to_the_caller_only_via_outcome() {
        let service = service_with_memory_repo();
        assert!(service.add_game(game(1, "Candy Crush", &["Relaxing"])).await.is_applied());
        let outcome = service.add_game(game(1, "Candy Crush", &["Relaxing"])).await;
        assert_eq!(outcome, WriteOutcome::RejectedDuplicate);
    }
}
