use actix_web::{dev::Payload, web, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::{entities::{social_settings::SocialSettings, token::Claims}, errors::AuthError, AppState};

/// Extractor for admin claims, ensuring the user has admin privileges.
/// Returns 403 if the user is not an admin.
/// Returns 401 if the user is not authenticated.
#[derive(Debug)]
pub struct AdminClaims(pub Claims);

impl FromRequest for AdminClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) if claims.admin => {
                ready(Ok(AdminClaims(claims.clone())))
            }
            Some(_) => {
                ready(Err(AuthError::Forbidden("Admin access required".into()).into()))
            }
            None => {
                ready(Err(AuthError::MissingCredentials.into()))
            }
        }
    }
}

/// Site-wide social settings for the current request.
///
/// Loaded at most once per request and kept in the request extensions.
/// A failed lookup is logged and yields `None` so pages still render.
#[derive(Debug, Clone)]
pub struct SocialContext(pub Option<SocialSettings>);

impl FromRequest for SocialContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(cached) = req.extensions().get::<SocialContext>() {
            let cached = cached.clone();
            return Box::pin(async move { Ok(cached) });
        }

        let req = req.clone();
        Box::pin(async move {
            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                tracing::error!("Application state is not registered; social settings unavailable");
                return Ok(SocialContext(None));
            };

            let settings = match state.social_handler.current_social_settings().await {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::error!("Failed to load social settings: {}", e);
                    None
                }
            };

            let context = SocialContext(settings);
            req.extensions_mut().insert(context.clone());
            Ok(context)
        })
    }
}
