//! User lifecycle service: signup, lookup, deletion.
//!
//! Users have no update operation. Passwords are hashed with argon2 before
//! they reach the repository; the plaintext never leaves this module.

use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;
use mongodb::bson::oid::ObjectId;

use crate::domain::favourite_service::map_store_error;
use crate::domain::ports::UserRepository;
use crate::domain::user::{NewUser, User};
use crate::domain::Error;

fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| Error::internal(format!("password hashing failed: {err}")))
}

/// Service over the user collection.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a new service over the given repository.
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    fn not_found() -> Error {
        Error::not_found("user not found")
    }

    /// Register a new user, rejecting duplicate emails with a conflict.
    pub async fn signup(&self, new_user: NewUser) -> Result<User, Error> {
        let existing = self
            .repo
            .find_by_email(&new_user.email)
            .await
            .map_err(map_store_error)?;
        if existing.is_some() {
            return Err(Error::conflict("A user with this email already exists"));
        }

        let mut user = User {
            id: None,
            name: new_user.name,
            email: new_user.email,
            password_hash: hash_password(&new_user.password)?,
        };
        let id = self.repo.insert(&user).await.map_err(map_store_error)?;
        user.id = Some(id);
        Ok(user)
    }

    /// Every stored user.
    pub async fn list(&self) -> Result<Vec<User>, Error> {
        self.repo.find_all().await.map_err(map_store_error)
    }

    /// Fetch one user; malformed ids read as absence.
    pub async fn get(&self, id: &str) -> Result<Option<User>, Error> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        self.repo.find_by_id(oid).await.map_err(map_store_error)
    }

    /// Remove one user by id. Favourites owned by the user are left in
    /// place; nothing cascades.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let oid = ObjectId::parse_str(id).map_err(|_| Self::not_found())?;
        let removed = self.repo.delete(oid).await.map_err(map_store_error)?;
        if removed {
            Ok(())
        } else {
            Err(Self::not_found())
        }
    }
}
