use std::future::Future;

use thiserror::Error;
use tokio::sync::broadcast;

use crate::domain::session::entities::{AuthEvent, Session, SignUpInput, User};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("Email not confirmed")]
    EmailNotConfirmed,

    #[error("User already registered")]
    AlreadyRegistered,

    #[error("Auth session missing!")]
    SessionMissing,

    #[error("{0}")]
    Provider(String),
}

/// Hosted identity provider. Sessions are owned by the provider; callers
/// observe them through [`IdentityProvider::subscribe`] and
/// [`IdentityProvider::get_session`].
#[cfg_attr(test, mockall::automock)]
pub trait IdentityProvider: Send + Sync {
    fn sign_in_with_password(
        &self,
        email: String,
        password: String,
    ) -> impl Future<Output = Result<Session, AuthError>> + Send;

    fn sign_up(&self, input: SignUpInput)
    -> impl Future<Output = Result<User, AuthError>> + Send;

    fn reset_password_for_email(
        &self,
        email: String,
        redirect_to: String,
    ) -> impl Future<Output = Result<(), AuthError>> + Send;

    fn update_password(
        &self,
        password: String,
    ) -> impl Future<Output = Result<User, AuthError>> + Send;

    fn sign_out(&self) -> impl Future<Output = Result<(), AuthError>> + Send;

    fn get_session(&self) -> impl Future<Output = Result<Option<Session>, AuthError>> + Send;

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;
}
