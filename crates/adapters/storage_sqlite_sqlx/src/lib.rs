//! # hbnb-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `hbnb-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! Child rows go away with their parent through `ON DELETE CASCADE`, so
//! deleting a state removes its cities, their places and their reviews.
//!
//! ## Dependency rule
//! Depends on `hbnb-app` (for port traits) and `hbnb-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod amenity_repo;
pub mod city_repo;
pub mod error;
pub mod place_repo;
pub mod pool;
pub mod review_repo;
pub mod state_repo;
pub mod user_repo;

mod row;

#[cfg(test)]
mod fixtures;

pub use amenity_repo::SqliteAmenityRepository;
pub use city_repo::SqliteCityRepository;
pub use place_repo::SqlitePlaceRepository;
pub use pool::{Config, Database};
pub use review_repo::SqliteReviewRepository;
pub use state_repo::SqliteStateRepository;
pub use user_repo::SqliteUserRepository;
