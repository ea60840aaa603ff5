//! Application-scoped session state and the operations that mutate it.
//!
//! `Session` is the single source of truth for "who is signed in". Views read
//! it through yewdux selectors; the async operations here are the only code
//! that writes it or touches the persisted token cookie.

use shared::models::auth::{AuthResponse, SignInRequest, SignUpRequest};
use shared::models::user::User;
use thiserror::Error;
use yewdux::Store;
use yewdux::prelude::Dispatch;

use crate::api::TaskDeckClient;
use crate::cookie;

/// Client-side record of the authenticated user, if any.
///
/// Invariant: `user` is only ever set together with `token`. The converse can
/// hold mid-flight: `initialize` carries a token while the user is still being
/// resolved, which is what `is_loading` covers.
#[derive(Debug, Clone, PartialEq, Store)]
pub struct Session {
    /// The signed-in user; `None` when signed out.
    pub user: Option<User>,
    /// The bearer token backing the session.
    pub token: Option<String>,
    /// True during the initial token validation and in-flight login/signup.
    pub is_loading: bool,
}

impl Default for Session {
    /// A fresh store is loading until `initialize` has run.
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            is_loading: true,
        }
    }
}

impl Session {
    /// A resolved signed-out session.
    pub fn signed_out() -> Self {
        Self {
            user: None,
            token: None,
            is_loading: false,
        }
    }

    /// A resolved signed-in session.
    pub fn signed_in(user: User, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            is_loading: false,
        }
    }

    /// Whether a user is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

/// User-visible auth failures.
///
/// Transport errors, backend rejections, and malformed success payloads all
/// collapse into these two generic messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Sign-in was rejected or returned an unusable payload.
    #[error("invalid email or password")]
    InvalidCredentials,
    /// Sign-up was rejected or returned an unusable payload.
    #[error("signup failed")]
    SignupFailed,
}

/// Resolve the persisted token once per application load.
///
/// With no stored token this issues no network call. With one, the session
/// endpoint decides: a user means signed in, anything else clears the cookie.
pub async fn initialize(dispatch: &Dispatch<Session>) {
    let Some(token) = cookie::read(cookie::TOKEN_COOKIE) else {
        dispatch.set(Session::signed_out());
        return;
    };

    dispatch.set(Session {
        user: None,
        token: Some(token),
        is_loading: true,
    });

    let client = TaskDeckClient::shared();
    match client.session().await {
        Ok(response) if response.user.is_some() => {
            dispatch.reduce_mut(|session| {
                session.user = response.user;
                session.is_loading = false;
            });
        }
        _ => {
            cookie::remove(cookie::TOKEN_COOKIE);
            dispatch.set(Session::signed_out());
        }
    }
}

/// Sign in with credentials, persisting the token on success.
pub async fn login(
    dispatch: &Dispatch<Session>,
    email: String,
    password: String,
) -> Result<(), SessionError> {
    dispatch.reduce_mut(|session| session.is_loading = true);

    let client = TaskDeckClient::shared();
    let request = SignInRequest { email, password };
    let outcome = client.signin(&request).await;

    match outcome.ok().and_then(AuthResponse::credentials) {
        Some((user, token)) => {
            cookie::write(cookie::TOKEN_COOKIE, &token, cookie::TOKEN_TTL_DAYS);
            dispatch.set(Session::signed_in(user, token));
            Ok(())
        }
        None => {
            dispatch.reduce_mut(|session| session.is_loading = false);
            Err(SessionError::InvalidCredentials)
        }
    }
}

/// Create an account and sign in.
///
/// A backend that accepts the signup but omits the user/token pair gets a
/// follow-up sign-in with the same credentials instead of a hard failure.
pub async fn signup(
    dispatch: &Dispatch<Session>,
    email: String,
    password: String,
) -> Result<(), SessionError> {
    dispatch.reduce_mut(|session| session.is_loading = true);

    let client = TaskDeckClient::shared();
    let request = SignUpRequest {
        email: email.clone(),
        password: password.clone(),
    };

    match client.signup(&request).await {
        Ok(response) => match response.credentials() {
            Some((user, token)) => {
                cookie::write(cookie::TOKEN_COOKIE, &token, cookie::TOKEN_TTL_DAYS);
                dispatch.set(Session::signed_in(user, token));
                Ok(())
            }
            None => login(dispatch, email, password)
                .await
                .map_err(|_| SessionError::SignupFailed),
        },
        Err(_) => {
            dispatch.reduce_mut(|session| session.is_loading = false);
            Err(SessionError::SignupFailed)
        }
    }
}

/// Sign out. The backend call is best-effort; local state always clears.
pub async fn logout(dispatch: &Dispatch<Session>) {
    let client = TaskDeckClient::shared();
    if let Err(err) = client.signout().await {
        web_sys::console::warn_1(&format!("signout failed: {err}").into());
    }

    cookie::remove(cookie::TOKEN_COOKIE);
    dispatch.set(Session::signed_out());
}
