//! `SQLite` implementation of [`AmenityRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::AmenityRepository;
use hbnb_domain::amenity::Amenity;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::AmenityId;
use hbnb_domain::time;

use crate::error::StorageError;
use crate::row;

/// Wrapper for converting database rows into domain [`Amenity`].
struct Wrapper(Amenity);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Amenity> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: uuid::Uuid = row.try_get("id")?;

        Ok(Self(Amenity {
            id: AmenityId::from(id),
            created_at: row::timestamp(row, "created_at")?,
            updated_at: row::timestamp(row, "updated_at")?,
            name: row.try_get("name")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO amenities (id, created_at, updated_at, name) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM amenities WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM amenities ORDER BY created_at";
const UPDATE: &str = "UPDATE amenities SET updated_at = ?, name = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM amenities WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM amenities";

/// `SQLite`-backed amenity repository.
#[derive(Clone)]
pub struct SqliteAmenityRepository {
    pool: SqlitePool,
}

impl SqliteAmenityRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AmenityRepository for SqliteAmenityRepository {
    fn create(
        &self,
        amenity: Amenity,
    ) -> impl Future<Output = Result<Amenity, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(amenity.id.as_uuid())
                .bind(time::to_text(&amenity.created_at))
                .bind(time::to_text(&amenity.updated_at))
                .bind(&amenity.name)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(amenity)
        }
    }

    fn get_by_id(
        &self,
        id: AmenityId,
    ) -> impl Future<Output = Result<Option<Amenity>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_uuid())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Amenity>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        amenity: Amenity,
    ) -> impl Future<Output = Result<Amenity, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(time::to_text(&amenity.updated_at))
                .bind(&amenity.name)
                .bind(amenity.id.as_uuid())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(amenity)
        }
    }

    fn delete(&self, id: AmenityId) -> impl Future<Output = Result<(), HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.as_uuid())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let (count,): (i64,) = sqlx::query_as(COUNT)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row::count(count))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[tokio::test]
    async fn should_create_and_retrieve_amenity_when_valid() {
        let repo = SqliteAmenityRepository::new(fixtures::pool().await);
        let amenity = Amenity::builder().name("Wifi").build().unwrap();
        let id = amenity.id;

        repo.create(amenity).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Wifi");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn should_update_amenity_when_exists() {
        let repo = SqliteAmenityRepository::new(fixtures::pool().await);
        let mut amenity = Amenity::builder().name("Wifi").build().unwrap();
        let id = amenity.id;
        repo.create(amenity.clone()).await.unwrap();

        amenity.name = "Fast wifi".to_string();
        repo.update(amenity).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Fast wifi");
    }

    #[tokio::test]
    async fn should_drop_place_links_when_amenity_deleted() {
        let pool = fixtures::pool().await;
        let repo = SqliteAmenityRepository::new(pool.clone());
        let state_id = fixtures::state(&pool).await;
        let city_id = fixtures::city(&pool, state_id).await;
        let user_id = fixtures::user(&pool).await;
        let place_id = fixtures::place(&pool, city_id, user_id).await;
        let amenity_id = fixtures::amenity(&pool, "Pool").await;
        sqlx::query("INSERT INTO place_amenity (place_id, amenity_id) VALUES (?, ?)")
            .bind(place_id.as_uuid())
            .bind(amenity_id.as_uuid())
            .execute(&pool)
            .await
            .unwrap();

        repo.delete(amenity_id).await.unwrap();

        let (links,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM place_amenity")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(links, 0);
        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
