//! Core business logic for the authentication system.

use crate::auth::models::*;
use crate::config::Config;
use crate::database::models::CreateUser;
use crate::errors::{ServiceError, ServiceResult, is_unique_violation};
use crate::repositories::gamer_repository::GamerRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::jwt::JwtUtils;
use bcrypt::{hash, verify};
use sqlx::SqlitePool;
use validator::Validate;

/// Authentication service for handling registration, login and token generation
pub struct AuthService<'a> {
    pool: &'a SqlitePool,
    jwt_utils: JwtUtils,
    config: &'a Config,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService instance
    pub fn new(pool: &'a SqlitePool, config: &'a Config) -> Self {
        AuthService {
            pool,
            jwt_utils: JwtUtils::new(config),
            config,
        }
    }

    /// Register a user with their gamer profile and issue a token
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<RegisterResponse> {
        request.validate()?;

        let repo = UserRepository::new(self.pool);
        if repo.username_exists(&request.username).await? {
            return Err(ServiceError::already_exists("User", &request.username));
        }

        let password_hash = self.hash_password(&request.password)?;

        let create_user = CreateUser {
            username: request.username,
            password_hash,
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            bio: request.bio,
            address: request.address,
            phone_number: request.phone_number,
        };

        let (user, gamer) = match repo.create_user_with_gamer(create_user).await {
            Ok(created) => created,
            // Lost a race with a concurrent registration
            Err(e) if is_unique_violation(&e) => {
                return Err(ServiceError::already_exists("User", "username"));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!("Registered user {} as gamer {}", user.id, gamer.id);

        let token = self.jwt_utils.generate_token(user.id, gamer.id)?;
        Ok(RegisterResponse { token })
    }

    /// Authenticate user and generate a JWT token
    pub async fn login(&self, login_request: LoginRequest) -> ServiceResult<LoginResponse> {
        login_request.validate()?;

        let repo = UserRepository::new(self.pool);
        let user = repo
            .get_user_by_username(&login_request.username)
            .await?
            .ok_or_else(|| ServiceError::unauthorized("Invalid username or password"))?;

        if !Self::verify_password(&login_request.password, &user.password_hash)? {
            return Err(ServiceError::unauthorized("Invalid username or password"));
        }

        let gamer = GamerRepository::new(self.pool)
            .get_gamer_by_user_id(user.id)
            .await?
            .ok_or_else(|| ServiceError::unauthorized("No gamer profile for this user"))?;

        let token = self.jwt_utils.generate_token(user.id, gamer.id)?;

        Ok(LoginResponse {
            valid: true,
            token,
            expires_in: self.config.jwt_expires_in_seconds,
        })
    }

    /// Function to hash a password before storing in database
    fn hash_password(&self, password: &str) -> ServiceResult<String> {
        hash(password, self.config.bcrypt_cost)
            .map_err(|e| ServiceError::internal_error(format!("Password hashing failed: {}", e)))
    }

    /// Function to verify a password against the stored hash
    fn verify_password(password: &str, hash: &str) -> ServiceResult<bool> {
        verify(password, hash).map_err(|e| {
            ServiceError::internal_error(format!("Password verification failed: {}", e))
        })
    }
}
