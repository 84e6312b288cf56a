use validator::Validate;

use crate::auth::password::verify_password;
use crate::entities::token::{AuthResponse, LoginRequest};
use crate::errors::AuthError;
use crate::repositories::token::TokenServiceRepository;

/// The single administrator account, taken from configuration.
#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password_hash: String,
}

pub struct AuthHandler<T>
where
    T: TokenServiceRepository,
{
    pub admin: AdminCredentials,
    pub token_service: T,
}

impl<T> AuthHandler<T>
where
    T: TokenServiceRepository,
{
    pub fn new(admin: AdminCredentials, token_service: T) -> Self {
        AuthHandler {
            admin,
            token_service,
        }
    }

    /// Checks the administrator credentials and issues an access token
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AuthError> {
        request.validate()?;

        // The hash is checked even for an unknown username so both failures take the same path
        let is_password_valid = verify_password(&request.password, &self.admin.password_hash)
            .map_err(|e| {
                tracing::error!("Admin password hash could not be verified: {}", e);
                AuthError::WrongCredentials
            })?;

        if request.username != self.admin.username || !is_password_valid {
            tracing::warn!(username = %request.username, "Rejected admin login");
            return Err(AuthError::WrongCredentials);
        }

        let access_token = self.token_service.create_jwt(&self.admin.username, true)?;

        tracing::info!("Admin logged in successfully");
        Ok(AuthResponse::new(access_token, self.token_service.expires_in_seconds()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::hash_password;
    use crate::repositories::token::MockTokenServiceRepository;

    fn handler(tokens: MockTokenServiceRepository) -> AuthHandler<MockTokenServiceRepository> {
        AuthHandler::new(
            AdminCredentials {
                username: "admin".into(),
                password_hash: hash_password("correct horse battery").unwrap(),
            },
            tokens,
        )
    }

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.into(),
            password: password.into(),
        }
    }

    #[actix_rt::test]
    async fn valid_credentials_issue_an_admin_token() {
        let mut tokens = MockTokenServiceRepository::new();
        tokens
            .expect_create_jwt()
            .withf(|subject, admin| subject == "admin" && *admin)
            .times(1)
            .returning(|_, _| Ok("signed.jwt.token".into()));
        tokens.expect_expires_in_seconds().return_const(3600_i64);

        let response = handler(tokens)
            .login(login("admin", "correct horse battery"))
            .await
            .unwrap();

        assert_eq!(response.access_token, "signed.jwt.token");
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 3600);
    }

    #[actix_rt::test]
    async fn wrong_password_is_rejected() {
        let mut tokens = MockTokenServiceRepository::new();
        tokens.expect_create_jwt().never();

        let err = handler(tokens).login(login("admin", "nope")).await.unwrap_err();
        assert!(matches!(err, AuthError::WrongCredentials));
    }

    #[actix_rt::test]
    async fn unknown_username_is_rejected() {
        let mut tokens = MockTokenServiceRepository::new();
        tokens.expect_create_jwt().never();

        let err = handler(tokens)
            .login(login("root", "correct horse battery"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::WrongCredentials));
    }
}
