//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::UserRepository;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::UserId;
use hbnb_domain::user::User;
use hbnb_domain::time;

use crate::error::StorageError;
use crate::row;

struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: uuid::Uuid = row.try_get("id")?;

        Ok(Self(User {
            id: UserId::from(id),
            created_at: row::timestamp(row, "created_at")?,
            updated_at: row::timestamp(row, "updated_at")?,
            email: row.try_get("email")?,
            password: row.try_get("password")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO users (id, created_at, updated_at, email, password, first_name, last_name)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM users WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM users ORDER BY created_at";
const UPDATE: &str = r"
    UPDATE users
    SET updated_at = ?, email = ?, password = ?, first_name = ?, last_name = ?
    WHERE id = ?
";
const DELETE_BY_ID: &str = "DELETE FROM users WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM users";

/// `SQLite`-backed user repository.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn create(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(user.id.as_uuid())
                .bind(time::to_text(&user.created_at))
                .bind(time::to_text(&user.updated_at))
                .bind(&user.email)
                .bind(&user.password)
                .bind(user.first_name.as_deref())
                .bind(user.last_name.as_deref())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(user)
        }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, HbnbError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(time::to_text(&user.updated_at))
                .bind(&user.email)
                .bind(&user.password)
                .bind(user.first_name.as_deref())
                .bind(user.last_name.as_deref())
                .bind(user.id.as_uuid())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(user)
        }
    }

    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), HbnbError>> + Send {
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

    fn test_user() -> User {
        User::builder()
            .email("betty@example.com")
            .password("hunter2")
            .first_name("Betty")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_keep_password_and_optional_names() {
        let repo = SqliteUserRepository::new(fixtures::pool().await);
        let user = test_user();
        let id = user.id;

        repo.create(user).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.password, "hunter2");
        assert_eq!(fetched.first_name.as_deref(), Some("Betty"));
        assert_eq!(fetched.last_name, None);
    }

    #[tokio::test]
    async fn should_update_user_when_exists() {
        let repo = SqliteUserRepository::new(fixtures::pool().await);
        let mut user = test_user();
        let id = user.id;
        repo.create(user.clone()).await.unwrap();

        user.last_name = Some("Holberton".to_string());
        repo.update(user).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.last_name.as_deref(), Some("Holberton"));
    }

    #[tokio::test]
    async fn should_cascade_delete_to_owned_places() {
        let pool = fixtures::pool().await;
        let repo = SqliteUserRepository::new(pool.clone());
        let state_id = fixtures::state(&pool).await;
        let city_id = fixtures::city(&pool, state_id).await;
        let user_id = fixtures::user(&pool).await;
        fixtures::place(&pool, city_id, user_id).await;

        repo.delete(user_id).await.unwrap();

        let (places,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM places")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(places, 0);
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
