use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::models::game::Game;
use crate::models::user::User;

#[cfg(test)]
use mockall::automock;

/// Result of a mutating repository call. The HTTP contract treats every
/// rejection as a silent no-op; the tag exists so callers and tests can
/// tell applied writes from rejected ones without re-querying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Applied,
    RejectedInvalidId,
    RejectedDuplicate,
    RejectedMissing,
}

impl WriteOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, WriteOutcome::Applied)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn add_game(&self, game: Game) -> WriteOutcome;
    async fn add_user(&self, user: User) -> WriteOutcome;
    async fn find_game_by_id(&self, game_id: i32) -> Option<Game>;
    async fn find_user_by_id(&self, user_id: i32) -> Option<User>;
    async fn update_user_name(&self, user_id: i32, new_name: &str) -> WriteOutcome;
    async fn list_games(&self) -> Vec<Game>;
    async fn list_games_by_genre(&self, genres: &[String]) -> Vec<Game>;
    async fn list_users(&self) -> Vec<User>;
    async fn add_rating(&self, user_id: i32, game_id: i32, rating: i32) -> WriteOutcome;
    async fn ratings_for_user(&self, user_id: i32) -> Option<HashMap<i32, i32>>;
    async fn user_game_ratings(&self) -> HashMap<i32, HashMap<i32, i32>>;
}

#[derive(Default)]
struct CatalogState {
    games: Vec<Game>,
    users: Vec<User>,
    // user id -> (game id -> last recorded rating)
    ratings: HashMap<i32, HashMap<i32, i32>>,
}

/// The in-memory catalog store. Owns all games, users, and ratings for the
/// lifetime of the process; a single lock serializes writers against each
/// other and against readers. Every query hands out an owned snapshot, so
/// caller-side mutation never reaches the stored state.
#[derive(Default)]
pub struct InMemoryCatalogRepository {
    state: RwLock<CatalogState>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lower_cased(genres: &[String]) -> HashSet<String> {
    genres.iter().map(|genre| genre.to_lowercase()).collect()
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn add_game(&self, game: Game) -> WriteOutcome {
        if game.id <= 0 {
            debug!("rejecting game with non-positive id {}", game.id);
            return WriteOutcome::RejectedInvalidId;
        }
        let title = game.title.to_lowercase();
        let mut state = self.state.write();
        let duplicate = state
            .games
            .iter()
            .any(|stored| stored.id == game.id || stored.title.to_lowercase() == title);
        if duplicate {
            debug!("rejecting duplicate game {} ({})", game.id, game.title);
            return WriteOutcome::RejectedDuplicate;
        }
        state.games.push(game);
        WriteOutcome::Applied
    }

    async fn add_user(&self, user: User) -> WriteOutcome {
        if user.id <= 0 {
            debug!("rejecting user with non-positive id {}", user.id);
            return WriteOutcome::RejectedInvalidId;
        }
        let mut state = self.state.write();
        if state.users.iter().any(|stored| stored.id == user.id) {
            debug!("rejecting duplicate user {}", user.id);
            return WriteOutcome::RejectedDuplicate;
        }
        state.users.push(user);
        WriteOutcome::Applied
    }

    async fn find_game_by_id(&self, game_id: i32) -> Option<Game> {
        self.state
            .read()
            .games
            .iter()
            .find(|game| game.id == game_id)
            .cloned()
    }

    async fn find_user_by_id(&self, user_id: i32) -> Option<User> {
        self.state
            .read()
            .users
            .iter()
            .find(|user| user.id == user_id)
            .cloned()
    }

    async fn update_user_name(&self, user_id: i32, new_name: &str) -> WriteOutcome {
        let mut state = self.state.write();
        match state.users.iter_mut().find(|user| user.id == user_id) {
            Some(user) => {
                user.name = new_name.to_string();
                WriteOutcome::Applied
            }
            None => WriteOutcome::RejectedMissing,
        }
    }

    async fn list_games(&self) -> Vec<Game> {
        self.state.read().games.clone()
    }

    async fn list_games_by_genre(&self, genres: &[String]) -> Vec<Game> {
        let wanted = lower_cased(genres);
        self.state
            .read()
            .games
            .iter()
            .filter(|game| {
                let tagged = lower_cased(&game.genres);
                wanted.is_subset(&tagged)
            })
            .cloned()
            .collect()
    }

    async fn list_users(&self) -> Vec<User> {
        self.state.read().users.clone()
    }

    async fn add_rating(&self, user_id: i32, game_id: i32, rating: i32) -> WriteOutcome {
        let mut state = self.state.write();
        state
            .ratings
            .entry(user_id)
            .or_default()
            .insert(game_id, rating);
        WriteOutcome::Applied
    }

    async fn ratings_for_user(&self, user_id: i32) -> Option<HashMap<i32, i32>> {
        self.state.read().ratings.get(&user_id).cloned()
    }

    async fn user_game_ratings(&self) -> HashMap<i32, HashMap<i32, i32>> {
        self.state.read().ratings.clone()
    }
}
