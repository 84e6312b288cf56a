use jsonwebtoken::TokenData;

use crate::{entities::token::Claims, errors::AuthError};

#[cfg_attr(test, mockall::automock)]
pub trait TokenServiceRepository: Send + Sync {
    /// Creates a new access JWT for the subject
    fn create_jwt(&self, subject: &str, admin: bool) -> Result<String, AuthError>;

    /// Decodes a JWT and returns the claims
    fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError>;

    /// Lifetime of issued access tokens
    fn expires_in_seconds(&self) -> i64;
}
