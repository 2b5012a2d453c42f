use std::{
    collections::HashMap,
    sync::{Arc, LazyLock},
};

use regex::Regex;
use sha2::{Digest, Sha256};
use tokio::sync::{RwLock, broadcast};
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    common::{generate_timestamp, generate_uuid_v7},
    session::{
        entities::{AuthEvent, Session, SignUpInput, User},
        ports::{AuthError, IdentityProvider},
    },
};

const EVENT_CAPACITY: usize = 16;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone)]
struct Account {
    user: User,
    password_digest: String,
}

#[derive(Debug, Default)]
struct State {
    accounts: HashMap<String, Account>,
    current: Option<Session>,
    recovery_requests: Vec<(String, String)>,
}

/// Identity provider kept in process memory, for tests and local runs.
#[derive(Debug, Clone)]
pub struct InMemoryIdentityProvider {
    state: Arc<RwLock<State>>,
    events: broadcast::Sender<AuthEvent>,
    require_email_confirmation: bool,
}

impl Default for InMemoryIdentityProvider {
    fn default() -> Self {
        Self::new(false)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn password_digest(user_id: Uuid, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(user_id.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

fn open_session(user: User) -> Session {
    let (now, _) = generate_timestamp();
    Session {
        access_token: Uuid::new_v4().simple().to_string(),
        user,
        created_at: now,
    }
}

impl InMemoryIdentityProvider {
    pub fn new(require_email_confirmation: bool) -> Self {
        Self {
            state: Arc::new(RwLock::new(State::default())),
            events: broadcast::channel(EVENT_CAPACITY).0,
            require_email_confirmation,
        }
    }

    /// New accounts cannot sign in until [`Self::confirm_email`] is called.
    pub fn with_email_confirmation() -> Self {
        Self::new(true)
    }

    pub async fn confirm_email(&self, email: &str) -> bool {
        let mut state = self.state.write().await;
        match state.accounts.get_mut(&normalize_email(email)) {
            Some(account) => {
                account.user.email_confirmed = true;
                true
            }
            None => false,
        }
    }

    /// Follows a password recovery link: the user gets a session that can
    /// set a new password.
    pub async fn open_recovery_link(&self, email: &str) -> Result<Session, AuthError> {
        let session = {
            let mut state = self.state.write().await;
            let account = state
                .accounts
                .get(&normalize_email(email))
                .ok_or(AuthError::InvalidCredentials)?;
            let session = open_session(account.user.clone());
            state.current = Some(session.clone());
            session
        };

        let _ = self.events.send(AuthEvent::PasswordRecovery(session.clone()));
        Ok(session)
    }

    pub async fn recovery_requests(&self) -> Vec<(String, String)> {
        self.state.read().await.recovery_requests.clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.events.receiver_count()
    }
}

impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_in_with_password(
        &self,
        email: String,
        password: String,
    ) -> Result<Session, AuthError> {
        let session = {
            let mut state = self.state.write().await;
            let account = state
                .accounts
                .get(&normalize_email(&email))
                .filter(|account| {
                    account.password_digest == password_digest(account.user.id, &password)
                })
                .ok_or(AuthError::InvalidCredentials)?;

            if !account.user.email_confirmed {
                return Err(AuthError::EmailNotConfirmed);
            }

            let session = open_session(account.user.clone());
            state.current = Some(session.clone());
            session
        };

        let _ = self.events.send(AuthEvent::SignedIn(session.clone()));
        Ok(session)
    }

    async fn sign_up(&self, input: SignUpInput) -> Result<User, AuthError> {
        let email = normalize_email(&input.email);
        if !EMAIL_PATTERN.is_match(&email) {
            return Err(AuthError::Provider(
                "Unable to validate email address: invalid format".to_string(),
            ));
        }

        let mut state = self.state.write().await;
        if state.accounts.contains_key(&email) {
            return Err(AuthError::AlreadyRegistered);
        }

        let user = User {
            id: generate_uuid_v7(),
            email: email.clone(),
            full_name: input.full_name,
            email_confirmed: !self.require_email_confirmation,
        };
        state.accounts.insert(
            email,
            Account {
                user: user.clone(),
                password_digest: password_digest(user.id, &input.password),
            },
        );

        info!(user_id = %user.id, "Account created");
        Ok(user)
    }

    async fn reset_password_for_email(
        &self,
        email: String,
        redirect_to: String,
    ) -> Result<(), AuthError> {
        let email = normalize_email(&email);
        let mut state = self.state.write().await;
        // Unknown addresses succeed silently.
        if state.accounts.contains_key(&email) {
            state.recovery_requests.push((email, redirect_to));
        }
        Ok(())
    }

    async fn update_password(&self, password: String) -> Result<User, AuthError> {
        let session = {
            let mut state = self.state.write().await;
            let email = state
                .current
                .as_ref()
                .map(|session| session.user.email.clone())
                .ok_or(AuthError::SessionMissing)?;
            let account = state
                .accounts
                .get_mut(&email)
                .ok_or(AuthError::SessionMissing)?;
            account.password_digest = password_digest(account.user.id, &password);

            let user = account.user.clone();
            let session = state.current.as_mut().ok_or(AuthError::SessionMissing)?;
            session.user = user;
            session.clone()
        };

        let _ = self.events.send(AuthEvent::UserUpdated(session.clone()));
        Ok(session.user)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.state.write().await.current = None;
        let _ = self.events.send(AuthEvent::SignedOut);
        Ok(())
    }

    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        Ok(self.state.read().await.current.clone())
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> SignUpInput {
        SignUpInput {
            email: "Jane@Example.com ".to_string(),
            password: "Secret123".to_string(),
            full_name: Some("Jane Doe".to_string()),
        }
    }

    #[tokio::test]
    async fn test_emails_are_case_insensitive() {
        let provider = InMemoryIdentityProvider::default();
        provider.sign_up(jane()).await.unwrap();

        assert_eq!(
            provider.sign_up(jane()).await,
            Err(AuthError::AlreadyRegistered)
        );
        assert!(
            provider
                .sign_in_with_password("jane@example.com".to_string(), "Secret123".to_string())
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_rejects_malformed_email() {
        let provider = InMemoryIdentityProvider::default();
        let outcome = provider
            .sign_up(SignUpInput {
                email: "not-an-email".to_string(),
                ..jane()
            })
            .await;

        assert!(matches!(outcome, Err(AuthError::Provider(_))));
    }

    #[tokio::test]
    async fn test_sign_in_emits_event() {
        let provider = InMemoryIdentityProvider::default();
        provider.sign_up(jane()).await.unwrap();
        let mut events = provider.subscribe();

        let session = provider
            .sign_in_with_password("jane@example.com".to_string(), "Secret123".to_string())
            .await
            .unwrap();

        assert_eq!(events.recv().await.unwrap(), AuthEvent::SignedIn(session));
        assert_eq!(provider.get_session().await.unwrap().map(|s| s.user.email), Some("jane@example.com".to_string()));
    }

    #[tokio::test]
    async fn test_password_reset_requests_only_for_known_accounts() {
        let provider = InMemoryIdentityProvider::default();
        provider.sign_up(jane()).await.unwrap();

        for email in ["jane@example.com", "nobody@example.com"] {
            provider
                .reset_password_for_email(email.to_string(), "http://localhost/reset-password".to_string())
                .await
                .unwrap();
        }

        assert_eq!(
            provider.recovery_requests().await,
            vec![(
                "jane@example.com".to_string(),
                "http://localhost/reset-password".to_string()
            )]
        );
    }
}
