use std::sync::Arc;

use anyhow::anyhow;
use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString,
};
use chrono::Utc;
use rand::rngs::OsRng;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth;
use crate::domain::{
    entities::profiles::RegisterProfileEntity,
    repositories::profiles::ProfileRepository,
    value_objects::{
        enums::roles::Role,
        profiles::{SignInModel, SignUpModel, TokenModel},
    },
};

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Error)]
pub enum AuthenticationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("password must be at least {} characters", MIN_PASSWORD_LENGTH)]
    PasswordTooShort,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("email is already registered")]
    DuplicateEmail,
    #[error("device MAC address is already registered")]
    DuplicateMacAddress,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthenticationError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            AuthenticationError::MissingField(_)
            | AuthenticationError::PasswordTooShort
            | AuthenticationError::PasswordMismatch => StatusCode::BAD_REQUEST,
            AuthenticationError::DuplicateEmail | AuthenticationError::DuplicateMacAddress => {
                StatusCode::CONFLICT
            }
            AuthenticationError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthenticationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type AuthenticationResult<T> = std::result::Result<T, AuthenticationError>;

pub struct AuthUseCase<P>
where
    P: ProfileRepository + Send + Sync + 'static,
{
    profile_repo: Arc<P>,
}

impl<P> AuthUseCase<P>
where
    P: ProfileRepository + Send + Sync + 'static,
{
    pub fn new(profile_repo: Arc<P>) -> Self {
        Self { profile_repo }
    }

    pub async fn sign_up(&self, sign_up_model: SignUpModel) -> AuthenticationResult<TokenModel> {
        Self::validate_sign_up(&sign_up_model)?;

        let email = sign_up_model.email.trim().to_string();
        let mac_address = sign_up_model.mac_address.trim().to_string();

        if self
            .profile_repo
            .exists_by_email(email.clone())
            .await
            .map_err(|err| {
                error!(db_error = ?err, "auth: failed to check for duplicate email");
                AuthenticationError::Internal(err)
            })?
        {
            let err = AuthenticationError::DuplicateEmail;
            warn!(
                email,
                status = err.status_code().as_u16(),
                "auth: sign-up rejected, email already registered"
            );
            return Err(err);
        }

        if self
            .profile_repo
            .exists_by_mac_address(mac_address.clone())
            .await
            .map_err(|err| {
                error!(db_error = ?err, "auth: failed to check for duplicate MAC address");
                AuthenticationError::Internal(err)
            })?
        {
            let err = AuthenticationError::DuplicateMacAddress;
            warn!(
                mac_address,
                status = err.status_code().as_u16(),
                "auth: sign-up rejected, MAC address already registered"
            );
            return Err(err);
        }

        let password_hash = Self::hash_password(&sign_up_model.password)?;

        let now = Utc::now();
        let profile_id = self
            .profile_repo
            .register(RegisterProfileEntity {
                id: Uuid::new_v4(),
                first_name: sign_up_model.first_name.trim().to_string(),
                last_name: sign_up_model.last_name.trim().to_string(),
                email: email.clone(),
                phone_number: sign_up_model.phone_number.trim().to_string(),
                mac_address,
                password_hash,
                role: Role::Customer.to_string(),
                loyalty_points: 0,
                total_spent_ugx: 0,
                created_at: now,
                updated_at: now,
            })
            .await
            .map_err(|err| {
                error!(email, db_error = ?err, "auth: failed to register profile");
                AuthenticationError::Internal(err)
            })?;

        info!(%profile_id, "auth: profile registered");

        let (access_token, expires_in) =
            auth::issue_token(profile_id, Role::Customer, Some(email))
                .map_err(|err| AuthenticationError::Internal(anyhow!("{:?}", err)))?;

        Ok(TokenModel {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        })
    }

    pub async fn sign_in(&self, sign_in_model: SignInModel) -> AuthenticationResult<TokenModel> {
        let email = sign_in_model.email.trim().to_string();
        info!(email, "auth: sign-in requested");

        let profile = self
            .profile_repo
            .find_by_email(email.clone())
            .await
            .map_err(|err| {
                error!(email, db_error = ?err, "auth: failed to load profile for sign-in");
                AuthenticationError::Internal(err)
            })?
            .ok_or_else(|| {
                let err = AuthenticationError::InvalidCredentials;
                warn!(
                    email,
                    status = err.status_code().as_u16(),
                    "auth: sign-in rejected, unknown email"
                );
                err
            })?;

        let parsed_hash = PasswordHash::new(&profile.password_hash)
            .map_err(|e| AuthenticationError::Internal(anyhow!("corrupt password hash: {}", e)))?;

        if Argon2::default()
            .verify_password(sign_in_model.password.as_bytes(), &parsed_hash)
            .is_err()
        {
            let err = AuthenticationError::InvalidCredentials;
            warn!(
                email,
                status = err.status_code().as_u16(),
                "auth: sign-in rejected, wrong password"
            );
            return Err(err);
        }

        let role = Role::from_str(&profile.role);
        let (access_token, expires_in) =
            auth::issue_token(profile.id, role, Some(profile.email.clone()))
                .map_err(|err| AuthenticationError::Internal(anyhow!("{:?}", err)))?;

        info!(profile_id = %profile.id, %role, "auth: sign-in succeeded");

        Ok(TokenModel {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        })
    }

    fn validate_sign_up(sign_up_model: &SignUpModel) -> AuthenticationResult<()> {
        let required = [
            ("first_name", &sign_up_model.first_name),
            ("last_name", &sign_up_model.last_name),
            ("email", &sign_up_model.email),
            ("phone_number", &sign_up_model.phone_number),
            ("mac_address", &sign_up_model.mac_address),
            ("password", &sign_up_model.password),
            ("confirm_password", &sign_up_model.confirm_password),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                let err = AuthenticationError::MissingField(field);
                warn!(
                    field,
                    status = err.status_code().as_u16(),
                    "auth: sign-up rejected, missing field"
                );
                return Err(err);
            }
        }

        if sign_up_model.password.chars().count() < MIN_PASSWORD_LENGTH {
            let err = AuthenticationError::PasswordTooShort;
            warn!(
                status = err.status_code().as_u16(),
                "auth: sign-up rejected, password too short"
            );
            return Err(err);
        }

        if sign_up_model.password != sign_up_model.confirm_password {
            let err = AuthenticationError::PasswordMismatch;
            warn!(
                status = err.status_code().as_u16(),
                "auth: sign-up rejected, password confirmation mismatch"
            );
            return Err(err);
        }

        Ok(())
    }

    fn hash_password(password: &str) -> AuthenticationResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthenticationError::Internal(anyhow!("failed to hash password: {}", e)))?;

        Ok(hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::profiles::MockProfileRepository;
    use mockall::predicate::eq;
    use std::env;

    fn set_env_vars() {
        unsafe {
            env::set_var("JWT_AUTH_SECRET", "supersecretjwtsecretforunittesting123");
            env::set_var("JWT_TOKEN_TTL_SECONDS", "3600");
        }
    }

    fn sample_sign_up() -> SignUpModel {
        SignUpModel {
            first_name: "John".to_string(),
            last_name: "Mugisha".to_string(),
            email: "john@example.com".to_string(),
            phone_number: "+256700123456".to_string(),
            mac_address: "00:1B:44:11:3A:B7".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[tokio::test]
    async fn sign_up_rejects_short_password() {
        let profile_repo = MockProfileRepository::new();
        let usecase = AuthUseCase::new(Arc::new(profile_repo));

        let mut model = sample_sign_up();
        model.password = "abc12".to_string();
        model.confirm_password = "abc12".to_string();

        let err = usecase.sign_up(model).await.unwrap_err();
        assert!(matches!(err, AuthenticationError::PasswordTooShort));
    }

    #[tokio::test]
    async fn sign_up_rejects_password_mismatch() {
        let profile_repo = MockProfileRepository::new();
        let usecase = AuthUseCase::new(Arc::new(profile_repo));

        let mut model = sample_sign_up();
        model.confirm_password = "secret2".to_string();

        let err = usecase.sign_up(model).await.unwrap_err();
        assert!(matches!(err, AuthenticationError::PasswordMismatch));
    }

    #[tokio::test]
    async fn sign_up_rejects_missing_field() {
        let profile_repo = MockProfileRepository::new();
        let usecase = AuthUseCase::new(Arc::new(profile_repo));

        let mut model = sample_sign_up();
        model.phone_number = "   ".to_string();

        let err = usecase.sign_up(model).await.unwrap_err();
        assert!(matches!(
            err,
            AuthenticationError::MissingField("phone_number")
        ));
    }

    #[tokio::test]
    async fn sign_up_rejects_duplicate_mac_address() {
        let mut profile_repo = MockProfileRepository::new();
        profile_repo
            .expect_exists_by_email()
            .with(eq("john@example.com".to_string()))
            .returning(|_| Ok(false));
        profile_repo
            .expect_exists_by_mac_address()
            .with(eq("00:1B:44:11:3A:B7".to_string()))
            .returning(|_| Ok(true));
        profile_repo.expect_register().never();

        let usecase = AuthUseCase::new(Arc::new(profile_repo));

        let err = usecase.sign_up(sample_sign_up()).await.unwrap_err();
        assert!(matches!(err, AuthenticationError::DuplicateMacAddress));
    }

    #[tokio::test]
    async fn sign_up_registers_customer_and_returns_token() {
        set_env_vars();

        let mut profile_repo = MockProfileRepository::new();
        profile_repo
            .expect_exists_by_email()
            .returning(|_| Ok(false));
        profile_repo
            .expect_exists_by_mac_address()
            .returning(|_| Ok(false));
        profile_repo
            .expect_register()
            .withf(|entity| {
                entity.role == "customer"
                    && entity.loyalty_points == 0
                    && entity.total_spent_ugx == 0
                    && entity.password_hash != "secret1"
            })
            .returning(|entity| Ok(entity.id));

        let usecase = AuthUseCase::new(Arc::new(profile_repo));

        let token = usecase.sign_up(sample_sign_up()).await.unwrap();
        assert_eq!(token.token_type, "Bearer");
        assert!(!token.access_token.is_empty());
    }

    #[tokio::test]
    async fn sign_in_rejects_unknown_email() {
        let mut profile_repo = MockProfileRepository::new();
        profile_repo.expect_find_by_email().returning(|_| Ok(None));

        let usecase = AuthUseCase::new(Arc::new(profile_repo));

        let err = usecase
            .sign_in(SignInModel {
                email: "nobody@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthenticationError::InvalidCredentials));
    }
}
