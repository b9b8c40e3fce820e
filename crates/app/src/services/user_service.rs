//! User service: use-cases for managing users.

use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::UserId;
use hbnb_domain::time::now;
use hbnb_domain::user::{User, UserPatch};

use crate::ports::UserRepository;

/// Application service for user CRUD operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a freshly built user.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn create_user(&self, user: User) -> Result<User, HbnbError> {
        self.repo.create(user).await
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_user(&self, id: UserId) -> Result<User, HbnbError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::of(id).into())
    }

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, HbnbError> {
        self.repo.get_all().await
    }

    /// Apply a patch to an existing user. The email never changes.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the user does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_user(&self, id: UserId, patch: UserPatch) -> Result<User, HbnbError> {
        let mut user = self.get_user(id).await?;
        patch.apply(&mut user);
        user.updated_at = now();
        self.repo.update(user).await
    }

    /// Delete a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the user does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<(), HbnbError> {
        self.get_user(id).await?;
        self.repo.delete(id).await
    }

    /// Count stored users.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_users(&self) -> Result<u64, HbnbError> {
        self.repo.count().await
    }
}
