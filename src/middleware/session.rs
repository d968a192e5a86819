//! The session guard shared by all four roles.
//!
//! A request is authenticated by the `access_token_<role>` cookie. The
//! guard verifies the token, checks that it was issued for the guard's role
//! and resolves its subject in the store. Handlers receive the resolved
//! principal through one of two extractors:
//!
//! - [`Authenticated<T>`] for protected routes: any failure rejects the
//!   request with 401 (500 when the store fails).
//! - [`CurrentSession<T>`] for `/me`: a missing or unusable token yields
//!   `None` so the handler can answer "<Role> is not logged in"; an unknown
//!   principal is still 401.

use anyhow::anyhow;
use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use internlink_auth::{Role, TokenError, verify_token};
use internlink_config::CookieConfig;
use internlink_core::AppError;
use internlink_models::{Admin, Company, Principal, Student, Supervisor};

use crate::state::AppState;

/// A principal type a session can be opened for.
pub trait SessionPrincipal: Sized + Send + Sync + 'static {
    const ROLE: Role;

    /// `None` when `principal` belongs to another role.
    fn from_principal(principal: Principal) -> Option<Self>;
}

impl SessionPrincipal for Admin {
    const ROLE: Role = Role::Admin;

    fn from_principal(principal: Principal) -> Option<Self> {
        match principal {
            Principal::Admin(admin) => Some(admin),
            _ => None,
        }
    }
}

impl SessionPrincipal for Supervisor {
    const ROLE: Role = Role::Supervisor;

    fn from_principal(principal: Principal) -> Option<Self> {
        match principal {
            Principal::Supervisor(supervisor) => Some(supervisor),
            _ => None,
        }
    }
}

impl SessionPrincipal for Student {
    const ROLE: Role = Role::Student;

    fn from_principal(principal: Principal) -> Option<Self> {
        match principal {
            Principal::Student(student) => Some(student),
            _ => None,
        }
    }
}

impl SessionPrincipal for Company {
    const ROLE: Role = Role::Company;

    fn from_principal(principal: Principal) -> Option<Self> {
        match principal {
            Principal::Company(company) => Some(company),
            _ => None,
        }
    }
}

pub fn not_logged_in(role: Role) -> AppError {
    AppError::not_logged_in(anyhow!("{} is not logged in", role.title()))
}

pub fn unauthorized_principal(role: Role) -> AppError {
    AppError::unauthorized(anyhow!("Unauthorized {}", role))
}

enum SessionFailure {
    NoToken,
    BadToken(TokenError),
    Rejected(AppError),
}

async fn open_session<T: SessionPrincipal>(
    parts: &Parts,
    state: &AppState,
) -> Result<T, SessionFailure> {
    let jar = CookieJar::from_headers(&parts.headers);
    let token = jar
        .get(T::ROLE.cookie_name())
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty())
        .ok_or(SessionFailure::NoToken)?;

    let claims = verify_token(token, &state.jwt_config).map_err(SessionFailure::BadToken)?;

    // A token minted for another role names nobody this guard knows.
    let principal = if claims.role == T::ROLE {
        state
            .store
            .find_principal(T::ROLE, &claims.sub)
            .await
            .map_err(|e| SessionFailure::Rejected(e.into()))?
    } else {
        None
    };

    principal
        .and_then(T::from_principal)
        .ok_or_else(|| SessionFailure::Rejected(unauthorized_principal(T::ROLE)))
}

/// The principal of a protected request.
#[derive(Debug, Clone)]
pub struct Authenticated<T>(pub T);

impl<T: SessionPrincipal> FromRequestParts<AppState> for Authenticated<T> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match open_session::<T>(parts, state).await {
            Ok(principal) => Ok(Authenticated(principal)),
            Err(SessionFailure::NoToken) => Err(AppError::unauthorized(anyhow!(
                "{} is not logged in",
                T::ROLE.title()
            ))),
            Err(SessionFailure::BadToken(err)) => Err(err.into()),
            Err(SessionFailure::Rejected(err)) => Err(err),
        }
    }
}

/// The principal of an identity check, `None` when no usable session exists.
#[derive(Debug, Clone)]
pub struct CurrentSession<T>(pub Option<T>);

impl<T: SessionPrincipal> FromRequestParts<AppState> for CurrentSession<T> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match open_session::<T>(parts, state).await {
            Ok(principal) => Ok(CurrentSession(Some(principal))),
            Err(SessionFailure::NoToken | SessionFailure::BadToken(_)) => Ok(CurrentSession(None)),
            Err(SessionFailure::Rejected(err)) => Err(err),
        }
    }
}

/// Cookie carrying a freshly issued session token.
pub fn session_cookie(role: Role, token: String, config: &CookieConfig) -> Cookie<'static> {
    Cookie::build((role.cookie_name(), token))
        .http_only(true)
        .secure(config.secure)
        .same_site(SameSite::None)
        .path("/")
        .max_age(time::Duration::seconds(config.max_age))
        .build()
}

/// Overwrites the session cookie of `role` with an empty, already expired one.
pub fn clear_session_cookie(role: Role, config: &CookieConfig) -> Cookie<'static> {
    Cookie::build((role.cookie_name(), ""))
        .http_only(true)
        .secure(config.secure)
        .same_site(SameSite::None)
        .path("/")
        .max_age(time::Duration::ZERO)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let config = CookieConfig {
            secure: true,
            max_age: 604800,
        };
        let cookie = session_cookie(Role::Student, "tok".to_string(), &config);
        let rendered = cookie.to_string();

        assert_eq!(cookie.name(), "access_token_student");
        assert_eq!(cookie.value(), "tok");
        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains("Secure"));
        assert!(rendered.contains("SameSite=None"));
        assert!(rendered.contains("Path=/"));
        assert!(rendered.contains("Max-Age=604800"));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let cookie = clear_session_cookie(Role::Admin, &CookieConfig::default());
        assert_eq!(cookie.name(), "access_token_admin");
        assert_eq!(cookie.value(), "");
        assert!(cookie.to_string().contains("Max-Age=0"));
    }

    #[test]
    fn test_messages() {
        assert_eq!(not_logged_in(Role::Company).message(), "Company is not logged in");
        assert_eq!(
            unauthorized_principal(Role::Supervisor).message(),
            "Unauthorized supervisor"
        );
    }
}
