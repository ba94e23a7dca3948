//! Identity boundary.
//!
//! Access tokens are minted by an external identity service; this server
//! only verifies them and trusts the user id they carry. Tokens arrive as
//! `Authorization: Bearer <token>` or as a `jwt` cookie.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::{config::AuthConfig, state::AppState, Error, Result};

const AUTH_COOKIE: &str = "jwt";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id assigned by the identity service.
    pub sub: i64,
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

pub struct AuthManager {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthManager {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    pub fn verify(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| Error::Unauthorized(format!("Invalid access token: {err}")))
    }
}

/// The authenticated caller, extracted from the verified token.
///
/// Handlers take this as an argument; ownership-scoped operations pass
/// `id` down to the services. Nothing client-supplied can override it.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let token = bearer_token(parts)
            .or_else(|| cookie_token(parts))
            .ok_or_else(|| Error::Unauthorized("Missing access token".to_string()))?;

        let claims = state.auth.verify(&token)?;

        Ok(AuthUser {
            id: claims.sub,
            email: claims.email,
        })
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn cookie_token(parts: &Parts) -> Option<String> {
    let cookies = parts.headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == AUTH_COOKIE && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}
