pub mod games;
pub mod health;
pub mod ratings;
pub mod users;
