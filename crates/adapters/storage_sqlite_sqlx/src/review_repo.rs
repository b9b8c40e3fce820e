//! `SQLite` implementation of [`ReviewRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::ReviewRepository;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{PlaceId, ReviewId, UserId};
use hbnb_domain::review::Review;
use hbnb_domain::time;

use crate::error::StorageError;
use crate::row;

struct Wrapper(Review);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Review> {
        value.map(|w| w.0)
    }

    fn all(rows: Vec<Self>) -> Vec<Review> {
        rows.into_iter().map(|w| w.0).collect()
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: uuid::Uuid = row.try_get("id")?;
        let place_id: uuid::Uuid = row.try_get("place_id")?;
        let user_id: uuid::Uuid = row.try_get("user_id")?;

        Ok(Self(Review {
            id: ReviewId::from(id),
            created_at: row::timestamp(row, "created_at")?,
            updated_at: row::timestamp(row, "updated_at")?,
            place_id: PlaceId::from(place_id),
            user_id: UserId::from(user_id),
            text: row.try_get("text")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO reviews (id, created_at, updated_at, place_id, user_id, text)
    VALUES (?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM reviews WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM reviews ORDER BY created_at";
const SELECT_BY_PLACE: &str = "SELECT * FROM reviews WHERE place_id = ? ORDER BY created_at";
const UPDATE: &str = "UPDATE reviews SET updated_at = ?, text = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM reviews WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM reviews";

/// `SQLite`-backed review repository.
#[derive(Clone)]
pub struct SqliteReviewRepository {
    pool: SqlitePool,
}

impl SqliteReviewRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReviewRepository for SqliteReviewRepository {
    fn create(&self, review: Review) -> impl Future<Output = Result<Review, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(review.id.as_uuid())
                .bind(time::to_text(&review.created_at))
                .bind(time::to_text(&review.updated_at))
                .bind(review.place_id.as_uuid())
                .bind(review.user_id.as_uuid())
                .bind(&review.text)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(review)
        }
    }

    fn get_by_id(
        &self,
        id: ReviewId,
    ) -> impl Future<Output = Result<Option<Review>, HbnbError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Review>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::all(rows))
        }
    }

    fn find_by_place(
        &self,
        place_id: PlaceId,
    ) -> impl Future<Output = Result<Vec<Review>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_PLACE)
                .bind(place_id.as_uuid())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::all(rows))
        }
    }

    fn update(&self, review: Review) -> impl Future<Output = Result<Review, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(time::to_text(&review.updated_at))
                .bind(&review.text)
                .bind(review.id.as_uuid())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(review)
        }
    }

    fn delete(&self, id: ReviewId) -> impl Future<Output = Result<(), HbnbError>> + Send {
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

    async fn setup() -> (SqliteReviewRepository, sqlx::SqlitePool, PlaceId, UserId) {
        let pool = fixtures::pool().await;
        let state_id = fixtures::state(&pool).await;
        let city_id = fixtures::city(&pool, state_id).await;
        let user_id = fixtures::user(&pool).await;
        let place_id = fixtures::place(&pool, city_id, user_id).await;
        (
            SqliteReviewRepository::new(pool.clone()),
            pool,
            place_id,
            user_id,
        )
    }

    fn review(place_id: PlaceId, user_id: UserId, text: &str) -> Review {
        Review::builder()
            .place_id(place_id)
            .user_id(user_id)
            .text(text)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_find_reviews_by_place() {
        let (repo, _pool, place_id, user_id) = setup().await;
        repo.create(review(place_id, user_id, "Great stay"))
            .await
            .unwrap();

        let found = repo.find_by_place(place_id).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "Great stay");
        assert_eq!(found[0].user_id, user_id);
        assert!(repo.find_by_place(PlaceId::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_update_review_text() {
        let (repo, _pool, place_id, user_id) = setup().await;
        let mut stored = repo
            .create(review(place_id, user_id, "Great stay"))
            .await
            .unwrap();

        stored.text = "Great stay, noisy street".to_string();
        repo.update(stored.clone()).await.unwrap();

        let fetched = repo.get_by_id(stored.id).await.unwrap().unwrap();
        assert_eq!(fetched.text, "Great stay, noisy street");
    }

    #[tokio::test]
    async fn should_disappear_with_its_place() {
        let (repo, pool, place_id, user_id) = setup().await;
        repo.create(review(place_id, user_id, "Great stay"))
            .await
            .unwrap();

        sqlx::query("DELETE FROM places WHERE id = ?")
            .bind(place_id.as_uuid())
            .execute(&pool)
            .await
            .unwrap();

        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
